// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

/// Certainty in the range 0.0..=1.0 that a line contains chords.
pub type Certainty = f64;

/// A line of text that has not been finalized yet.
///
/// Chord lines still contain the chord symbols as text, aligned
/// to the lyrics of the following line by their character offsets.
#[derive(Clone, Debug, PartialEq)]
pub struct PreliminaryLine {
    pub text: String,
    pub is_chord_line: bool,
    pub certainty: Certainty,
}

impl PreliminaryLine {
    #[must_use]
    pub fn chords(text: impl Into<String>, certainty: Certainty) -> Self {
        Self {
            text: text.into(),
            is_chord_line: true,
            certainty,
        }
    }

    #[must_use]
    pub fn lyrics(text: impl Into<String>, certainty: Certainty) -> Self {
        Self {
            text: text.into(),
            is_chord_line: false,
            certainty,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PreliminaryLineInvalidity {
    CertaintyOutOfRange,
}

impl Validate for PreliminaryLine {
    type Invalidity = PreliminaryLineInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                !(0.0..=1.0).contains(&self.certainty),
                Self::Invalidity::CertaintyOutOfRange,
            )
            .into()
    }
}

/// A titled section of preliminary lines that is still subject to review.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreliminarySection {
    pub title: String,
    pub lines: Vec<PreliminaryLine>,
}

impl PreliminarySection {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PreliminarySectionInvalidity {
    Line(usize, PreliminaryLineInvalidity),
}

impl Validate for PreliminarySection {
    type Invalidity = PreliminarySectionInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        self.lines
            .iter()
            .enumerate()
            .fold(ValidationContext::new(), |context, (index, line)| {
                context.validate_with(line, |invalidity| {
                    Self::Invalidity::Line(index, invalidity)
                })
            })
            .into()
    }
}
