// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Requests and responses for reviewing and finalizing songs.

use crate::{layout::structured::StructuredSection, prelude::*};

mod _core {
    pub(super) use leadsheet_core::{
        layout::structured::StructuredSection,
        sheet::{DEFAULT_SECTION_TITLE, DEFAULT_SONG_KEY, DEFAULT_SONG_NAME, SongHeader},
    };
}

fn default_section_name() -> String {
    _core::DEFAULT_SECTION_TITLE.to_owned()
}

fn default_song_name() -> String {
    _core::DEFAULT_SONG_NAME.to_owned()
}

fn default_key() -> String {
    _core::DEFAULT_SONG_KEY.to_owned()
}

/// A reviewed section that is submitted for finalization.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
pub struct SectionInput {
    /// Overrides the name of the structured data.
    #[serde(default = "default_section_name")]
    pub section_name: String,

    #[serde(default)]
    pub structured_data: StructuredSection,
}

impl From<SectionInput> for _core::StructuredSection {
    fn from(from: SectionInput) -> Self {
        let SectionInput {
            section_name,
            structured_data,
        } = from;
        let mut into = Self::from(structured_data);
        into.section_name = section_name;
        into
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
pub struct FinalizeSongRequest {
    #[serde(default)]
    pub sections: Vec<SectionInput>,

    #[serde(default = "default_song_name")]
    pub title: String,

    #[serde(default = "default_key")]
    pub key: String,

    #[serde(default)]
    pub authors: Vec<String>,
}

impl FinalizeSongRequest {
    #[must_use]
    pub fn into_parts(self) -> (_core::SongHeader, Vec<_core::StructuredSection>) {
        let Self {
            sections,
            title,
            key,
            authors,
        } = self;
        let header = _core::SongHeader {
            name: title,
            key,
            authors,
        };
        (header, sections.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(deny_unknown_fields)]
pub struct EditSectionRequest {
    #[serde(default)]
    pub text: String,

    #[serde(default = "default_section_name")]
    pub section_name: String,

    #[serde(default = "default_key")]
    pub key: String,
}

/// Structured data of a single section together with its plain
/// text representation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
pub struct SectionResponse {
    pub structured_data: StructuredSection,

    pub text: String,
}

impl From<(_core::StructuredSection, String)> for SectionResponse {
    fn from(from: (_core::StructuredSection, String)) -> Self {
        let (structured_data, text) = from;
        Self {
            structured_data: structured_data.into(),
            text,
        }
    }
}
