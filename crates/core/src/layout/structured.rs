// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{Confidence, Coordinate, LineKind};

/// A chord as placed on a chord line.
#[derive(Clone, Debug, PartialEq)]
pub struct ChordItem {
    /// Horizontal pixel position.
    pub position_x: Coordinate,
    /// The Nashville number.
    pub chord: String,
    /// The chord symbol as recognized.
    pub original: String,
    pub confidence: Confidence,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LyricItem {
    pub text: String,
    pub confidence: Confidence,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StructuredLineContent {
    Chords(Vec<ChordItem>),
    Lyrics(Vec<LyricItem>),
}

impl StructuredLineContent {
    #[must_use]
    pub const fn kind(&self) -> LineKind {
        match self {
            Self::Chords(_) => LineKind::Chords,
            Self::Lyrics(_) => LineKind::Lyrics,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StructuredLine {
    /// Ordinal of the line within its section, starting at 0.
    pub index: usize,
    pub content: StructuredLineContent,
}

/// A section of recognized lines for display and review.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructuredSection {
    pub section_name: String,
    pub key: String,
    pub lines: Vec<StructuredLine>,
}

impl StructuredSection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn chord_items(&self) -> impl Iterator<Item = &ChordItem> + '_ {
        self.lines.iter().flat_map(|line| match &line.content {
            StructuredLineContent::Chords(items) => items.as_slice(),
            StructuredLineContent::Lyrics(_) => &[] as &[_],
        })
    }

    pub fn lyric_items(&self) -> impl Iterator<Item = &LyricItem> + '_ {
        self.lines.iter().flat_map(|line| match &line.content {
            StructuredLineContent::Lyrics(items) => items.as_slice(),
            StructuredLineContent::Chords(_) => &[] as &[_],
        })
    }
}
