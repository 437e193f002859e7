// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::anyhow;

use crate::prelude::*;

mod _core {
    pub(super) use leadsheet_core::sheet::*;
}

///////////////////////////////////////////////////////////////////////
// Preliminary
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
pub struct PreliminaryLine {
    text: String,

    #[serde(default)]
    is_chord_line: bool,

    #[serde(default)]
    certainty: f64,
}

impl From<PreliminaryLine> for _core::PreliminaryLine {
    fn from(from: PreliminaryLine) -> Self {
        let PreliminaryLine {
            text,
            is_chord_line,
            certainty,
        } = from;
        Self {
            text,
            is_chord_line,
            certainty,
        }
    }
}

impl From<_core::PreliminaryLine> for PreliminaryLine {
    fn from(from: _core::PreliminaryLine) -> Self {
        let _core::PreliminaryLine {
            text,
            is_chord_line,
            certainty,
        } = from;
        Self {
            text,
            is_chord_line,
            certainty,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
pub struct PreliminarySection {
    title: String,

    #[serde(default)]
    lines: Vec<PreliminaryLine>,
}

impl From<PreliminarySection> for _core::PreliminarySection {
    fn from(from: PreliminarySection) -> Self {
        let PreliminarySection { title, lines } = from;
        Self {
            title,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<_core::PreliminarySection> for PreliminarySection {
    fn from(from: _core::PreliminarySection) -> Self {
        let _core::PreliminarySection { title, lines } = from;
        Self {
            title,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Final
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(deny_unknown_fields)]
pub struct Chord {
    position: usize,
    value: String,
}

impl From<Chord> for _core::Chord {
    fn from(from: Chord) -> Self {
        let Chord { position, value } = from;
        Self { position, value }
    }
}

impl From<_core::Chord> for Chord {
    fn from(from: _core::Chord) -> Self {
        let _core::Chord { position, value } = from;
        Self { position, value }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(deny_unknown_fields)]
pub struct FinalLine {
    #[serde(default)]
    lyrics: String,

    /// Ordered by position.
    #[serde(default)]
    chords: Vec<Chord>,
}

impl From<FinalLine> for _core::FinalLine {
    fn from(from: FinalLine) -> Self {
        let FinalLine { lyrics, chords } = from;
        let mut into = Self::from_lyrics(lyrics);
        into.place_chords(chords.into_iter().map(Into::into));
        into
    }
}

impl From<&_core::FinalLine> for FinalLine {
    fn from(from: &_core::FinalLine) -> Self {
        Self {
            lyrics: from.lyrics.clone(),
            chords: from.ordered_chords().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(deny_unknown_fields)]
pub struct SongSection {
    title: String,

    #[serde(default)]
    lines: Vec<FinalLine>,
}

impl From<SongSection> for _core::SongSection {
    fn from(from: SongSection) -> Self {
        let SongSection { title, lines } = from;
        Self {
            title,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<_core::SongSection> for SongSection {
    fn from(from: _core::SongSection) -> Self {
        let _core::SongSection { title, lines } = from;
        Self {
            title,
            lines: lines.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(deny_unknown_fields)]
pub struct SongHeader {
    name: String,

    key: String,

    #[serde(default)]
    authors: Vec<String>,
}

impl From<SongHeader> for _core::SongHeader {
    fn from(from: SongHeader) -> Self {
        let SongHeader { name, key, authors } = from;
        Self { name, key, authors }
    }
}

impl From<_core::SongHeader> for SongHeader {
    fn from(from: _core::SongHeader) -> Self {
        let _core::SongHeader { name, key, authors } = from;
        Self { name, key, authors }
    }
}

/// A finalized song with its content hash as a lowercase hex string.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(deny_unknown_fields)]
pub struct SongDocument {
    hash: String,

    header: SongHeader,

    sections: Vec<SongSection>,
}

impl TryFrom<SongDocument> for _core::SongDocument {
    type Error = anyhow::Error;

    fn try_from(from: SongDocument) -> anyhow::Result<Self> {
        let SongDocument {
            hash,
            header,
            sections,
        } = from;
        let hash = hash
            .parse::<_core::ContentHash>()
            .map_err(|err| anyhow!("invalid content hash {hash:?}: {err}"))?;
        let into = Self::try_with_hash(
            hash,
            header.into(),
            sections.into_iter().map(Into::into).collect(),
        )?;
        Ok(into)
    }
}

impl From<_core::SongDocument> for SongDocument {
    fn from(from: _core::SongDocument) -> Self {
        let (hash, header, sections) = from.into_parts();
        Self {
            hash: hash.to_string(),
            header: header.into(),
            sections: sections.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests;
