// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

mod _core {
    pub(super) use leadsheet_core::{
        layout::structured::*,
        sheet::{DEFAULT_SECTION_TITLE, DEFAULT_SONG_KEY},
    };
}

/// Confidence of items that have been edited manually.
pub const DEFAULT_ITEM_CONFIDENCE: f64 = 0.5;

fn default_item_confidence() -> f64 {
    DEFAULT_ITEM_CONFIDENCE
}

fn default_section_name() -> String {
    _core::DEFAULT_SECTION_TITLE.to_owned()
}

fn default_key() -> String {
    _core::DEFAULT_SONG_KEY.to_owned()
}

///////////////////////////////////////////////////////////////////////
// Items
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
pub struct ChordItem {
    #[serde(default)]
    position_x: f64,

    chord: String,

    /// Falls back to the chord if missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    original: Option<String>,

    #[serde(default = "default_item_confidence")]
    confidence: f64,
}

impl From<ChordItem> for _core::ChordItem {
    fn from(from: ChordItem) -> Self {
        let ChordItem {
            position_x,
            chord,
            original,
            confidence,
        } = from;
        Self {
            position_x,
            original: original.unwrap_or_else(|| chord.clone()),
            chord,
            confidence,
        }
    }
}

impl From<_core::ChordItem> for ChordItem {
    fn from(from: _core::ChordItem) -> Self {
        let _core::ChordItem {
            position_x,
            chord,
            original,
            confidence,
        } = from;
        Self {
            position_x,
            chord,
            original: Some(original),
            confidence,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
pub struct LyricItem {
    #[serde(default)]
    text: String,

    #[serde(default = "default_item_confidence")]
    confidence: f64,
}

impl From<LyricItem> for _core::LyricItem {
    fn from(from: LyricItem) -> Self {
        let LyricItem { text, confidence } = from;
        Self { text, confidence }
    }
}

impl From<_core::LyricItem> for LyricItem {
    fn from(from: _core::LyricItem) -> Self {
        let _core::LyricItem { text, confidence } = from;
        Self { text, confidence }
    }
}

///////////////////////////////////////////////////////////////////////
// Line
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(rename_all = "snake_case", tag = "type", content = "content")]
pub enum LineContent {
    Chords(Vec<ChordItem>),
    Lyrics(Vec<LyricItem>),
}

impl LineContent {
    const fn is_chords(&self) -> bool {
        matches!(self, Self::Chords(_))
    }
}

impl From<LineContent> for _core::StructuredLineContent {
    fn from(from: LineContent) -> Self {
        match from {
            LineContent::Chords(items) => Self::Chords(items.into_iter().map(Into::into).collect()),
            LineContent::Lyrics(items) => Self::Lyrics(items.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<_core::StructuredLineContent> for LineContent {
    fn from(from: _core::StructuredLineContent) -> Self {
        use _core::StructuredLineContent::*;
        match from {
            Chords(items) => Self::Chords(items.into_iter().map(Into::into).collect()),
            Lyrics(items) => Self::Lyrics(items.into_iter().map(Into::into).collect()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Line {
    index: usize,

    #[serde(flatten)]
    content: LineContent,
}

impl From<Line> for _core::StructuredLine {
    fn from(from: Line) -> Self {
        let Line { index, content } = from;
        Self {
            index,
            content: content.into(),
        }
    }
}

impl From<_core::StructuredLine> for Line {
    fn from(from: _core::StructuredLine) -> Self {
        let _core::StructuredLine { index, content } = from;
        Self {
            index,
            content: content.into(),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// StructuredSection
///////////////////////////////////////////////////////////////////////

/// All lines of a section together with the redundant lists of
/// only chord lines and only lyric lines.
///
/// The redundant lists are ignored when reading.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
pub struct StructuredSection {
    #[serde(default = "default_section_name")]
    section_name: String,

    #[serde(default = "default_key")]
    key: String,

    #[serde(default)]
    lines: Vec<Line>,

    #[serde(default)]
    chords: Vec<Line>,

    #[serde(default)]
    lyrics: Vec<Line>,
}

impl Default for StructuredSection {
    fn default() -> Self {
        Self {
            section_name: default_section_name(),
            key: default_key(),
            lines: Vec::new(),
            chords: Vec::new(),
            lyrics: Vec::new(),
        }
    }
}

impl From<StructuredSection> for _core::StructuredSection {
    fn from(from: StructuredSection) -> Self {
        let StructuredSection {
            section_name,
            key,
            lines,
            chords: _,
            lyrics: _,
        } = from;
        Self {
            section_name,
            key,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<_core::StructuredSection> for StructuredSection {
    fn from(from: _core::StructuredSection) -> Self {
        let _core::StructuredSection {
            section_name,
            key,
            lines,
        } = from;
        let lines = lines.into_iter().map(Line::from).collect::<Vec<_>>();
        let (chords, lyrics) = lines
            .iter()
            .cloned()
            .partition(|line| line.content.is_chords());
        Self {
            section_name,
            key,
            lines,
            chords,
            lyrics,
        }
    }
}
