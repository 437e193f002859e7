// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The song model.
//!
//! Recognized or pasted text is first collected into [`PreliminarySection`]s
//! that can be reviewed and edited. Finalization turns them into a
//! [`SongDocument`] with chords stored as Nashville numbers at character
//! offsets into the lyrics.

use std::{collections::BTreeMap, fmt, str::FromStr};

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use sha2::{Digest, Sha256};
use thiserror::Error;

mod preliminary;
pub use self::preliminary::*;

/// Character offset into the lyrics of a line.
pub type Position = usize;

pub const DEFAULT_SECTION_TITLE: &str = "Section";

pub const DEFAULT_SONG_NAME: &str = "Untitled";

pub const DEFAULT_SONG_KEY: &str = "C";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chord {
    pub position: Position,
    /// The Nashville number.
    pub value: String,
}

/// A line of lyrics with chords placed above the characters.
///
/// Instrumental lines have no lyrics but only chords. At most one chord
/// is placed at each position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FinalLine {
    pub lyrics: String,
    pub chords: BTreeMap<Position, String>,
}

impl FinalLine {
    #[must_use]
    pub fn from_lyrics(lyrics: impl Into<String>) -> Self {
        Self {
            lyrics: lyrics.into(),
            chords: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn is_instrumental(&self) -> bool {
        self.lyrics.is_empty() && !self.chords.is_empty()
    }

    /// Chords ordered by position.
    pub fn ordered_chords(&self) -> impl Iterator<Item = Chord> + '_ {
        self.chords.iter().map(|(position, value)| Chord {
            position: *position,
            value: value.clone(),
        })
    }

    /// Places chords, replacing any chord at an occupied position.
    pub fn place_chords(&mut self, chords: impl IntoIterator<Item = Chord>) {
        self.chords.extend(
            chords
                .into_iter()
                .map(|Chord { position, value }| (position, value)),
        );
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SongSection {
    pub title: String,
    pub lines: Vec<FinalLine>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongHeader {
    pub name: String,
    /// The key that Nashville numbers refer to.
    pub key: String,
    pub authors: Vec<String>,
}

impl Default for SongHeader {
    fn default() -> Self {
        Self {
            name: DEFAULT_SONG_NAME.to_owned(),
            key: DEFAULT_SONG_KEY.to_owned(),
            authors: Vec::new(),
        }
    }
}

pub const CONTENT_HASH_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum ContentHashError {
    #[error(transparent)]
    Decode(#[from] data_encoding::DecodeError),

    #[error("invalid content hash length: expected 32 bytes, got {0}")]
    Length(usize),
}

/// SHA-256 digest of the textual content of a song.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; CONTENT_HASH_LEN]);

impl ContentHash {
    #[must_use]
    pub const fn new(bytes: [u8; CONTENT_HASH_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; CONTENT_HASH_LEN] {
        let Self(bytes) = self;
        bytes
    }

    #[must_use]
    pub fn of_sections(sections: &[SongSection]) -> Self {
        let mut digest = Sha256::new();
        digest_sections(&mut digest, sections);
        Self(digest.finalize().into())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&HEXLOWER.encode(self.as_bytes()))
    }
}

impl FromStr for ContentHash {
    type Err = ContentHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = HEXLOWER_PERMISSIVE.decode(s.as_bytes())?;
        let bytes = <[u8; CONTENT_HASH_LEN]>::try_from(decoded.as_slice())
            .map_err(|_| ContentHashError::Length(decoded.len()))?;
        Ok(Self(bytes))
    }
}

/// Feeds the title of each section followed by the lyrics of all its
/// lines into the digest.
///
/// Chords are not part of the content.
pub fn digest_sections<D: Digest>(digest: &mut D, sections: &[SongSection]) {
    for section in sections {
        digest.update(section.title.as_bytes());
        for line in &section.lines {
            digest.update(line.lyrics.as_bytes());
        }
    }
}

#[derive(Debug, Error)]
#[error("content hash mismatch: expected {expected}, actual {actual}")]
pub struct ContentHashMismatch {
    pub expected: ContentHash,
    pub actual: ContentHash,
}

/// A finalized song.
///
/// The content hash is calculated once on construction and the
/// document is immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongDocument {
    hash: ContentHash,
    header: SongHeader,
    sections: Vec<SongSection>,
}

impl SongDocument {
    #[must_use]
    pub fn new(header: SongHeader, sections: Vec<SongSection>) -> Self {
        let hash = ContentHash::of_sections(&sections);
        Self {
            hash,
            header,
            sections,
        }
    }

    /// Restores a document and verifies its content hash.
    pub fn try_with_hash(
        expected: ContentHash,
        header: SongHeader,
        sections: Vec<SongSection>,
    ) -> Result<Self, ContentHashMismatch> {
        let document = Self::new(header, sections);
        if document.hash != expected {
            return Err(ContentHashMismatch {
                expected,
                actual: document.hash,
            });
        }
        Ok(document)
    }

    #[must_use]
    pub const fn hash(&self) -> &ContentHash {
        &self.hash
    }

    #[must_use]
    pub const fn header(&self) -> &SongHeader {
        &self.header
    }

    #[must_use]
    pub fn sections(&self) -> &[SongSection] {
        &self.sections
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (ContentHash, SongHeader, Vec<SongSection>) {
        let Self {
            hash,
            header,
            sections,
        } = self;
        (hash, header, sections)
    }
}

#[cfg(test)]
mod tests;
