// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, str::FromStr};

use thiserror::Error;

use super::pitch::{PitchClass, Spelling, canonical_note_name};

/// Key roots that are spelled with sharps.
///
/// Single-letter roots not contained in this list, i.e. `F`, are
/// also spelled with sharps.
pub const SHARP_KEY_ROOTS: [&str; 11] = [
    "C", "G", "D", "A", "E", "B", "F#", "C#", "G#", "D#", "A#",
];

/// Number of notes in a diatonic scale.
pub const DEGREES: usize = 7;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum KeyMode {
    Major,
    Minor,
}

impl KeyMode {
    /// Semitone offsets of the scale degrees relative to the root.
    #[must_use]
    pub const fn scale_intervals(self) -> [u8; DEGREES] {
        match self {
            Self::Major => [0, 2, 4, 5, 7, 9, 11],
            // Natural minor
            Self::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Chord qualities of the triads built on each scale degree.
    ///
    /// An empty string denotes a major triad.
    #[must_use]
    pub const fn default_qualities(self) -> [&'static str; DEGREES] {
        match self {
            Self::Major => ["", "m", "m", "", "", "m", "dim"],
            Self::Minor => ["m", "dim", "", "m", "m", "", ""],
        }
    }
}

/// A 1-based scale degree in the range 1..=7.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaleDegree(u8);

impl ScaleDegree {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(DEGREES as u8);

    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= Self::MIN.0 && number <= Self::MAX.0 {
            Some(Self(number))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        let Self(number) = self;
        number
    }

    /// 0-based index into the notes of a scale.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.number() - 1) as usize
    }

    const fn from_index(index: usize) -> Self {
        debug_assert!(index < DEGREES);
        Self(index as u8 + 1)
    }
}

impl fmt::Display for ScaleDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid key root: {root:?}")]
pub struct InvalidKeyError {
    root: String,
}

impl InvalidKeyError {
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }
}

/// A musical key, i.e. a root pitch with a mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    root: &'static str,
    mode: KeyMode,
}

impl Key {
    /// Creates a key from its root note.
    ///
    /// The letter of the root is case-insensitive. The root must be
    /// one of the 17 canonical note names, e.g. `Gb` is accepted
    /// while `Cb` is rejected.
    pub fn new(root: &str, mode: KeyMode) -> Result<Self, InvalidKeyError> {
        let mut normalized = String::with_capacity(root.len());
        let mut chars = root.chars();
        if let Some(letter) = chars.next() {
            normalized.push(letter.to_ascii_uppercase());
            normalized.extend(chars);
        }
        let root = canonical_note_name(&normalized).ok_or_else(|| InvalidKeyError::new(root))?;
        Ok(Self { root, mode })
    }

    /// Parses a key like `C`, `F#`, `Bb` or `Am`.
    ///
    /// A trailing lowercase `m` selects the minor mode, unless the
    /// key ends with `dim`.
    pub fn parse(key: &str) -> Result<Self, InvalidKeyError> {
        let key = key.trim();
        if key.len() > 1 && key.ends_with('m') && !key.ends_with("dim") {
            Self::new(&key[..key.len() - 1], KeyMode::Minor)
        } else {
            Self::new(key, KeyMode::Major)
        }
    }

    #[must_use]
    pub const fn root(self) -> &'static str {
        self.root
    }

    #[must_use]
    pub const fn mode(self) -> KeyMode {
        self.mode
    }

    #[must_use]
    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn root_pitch(self) -> PitchClass {
        PitchClass::parse(self.root).expect("canonical note name")
    }

    /// Sharp or flat spelling of the notes in this key.
    #[must_use]
    pub fn spelling(self) -> Spelling {
        if SHARP_KEY_ROOTS.contains(&self.root) || self.root.len() == 1 {
            Spelling::Sharps
        } else {
            Spelling::Flats
        }
    }

    #[must_use]
    pub fn scale(self) -> Scale {
        let spelling = self.spelling();
        let root_pitch = self.root_pitch();
        let notes = self
            .mode
            .scale_intervals()
            .map(|interval| spelling.spell(root_pitch.shifted(interval as i8)));
        Scale { notes }
    }

    #[must_use]
    pub const fn default_quality(self, degree: ScaleDegree) -> &'static str {
        self.mode.default_qualities()[degree.index()]
    }

    /// All 24 major and minor keys with sharp-spelled roots, sorted.
    #[must_use]
    pub fn available_keys() -> Vec<String> {
        let mut keys = super::pitch::NOTES_SHARP
            .iter()
            .flat_map(|root| [(*root).to_owned(), format!("{root}m")])
            .collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root)?;
        match self.mode {
            KeyMode::Major => Ok(()),
            KeyMode::Minor => f.write_str("m"),
        }
    }
}

impl FromStr for Key {
    type Err = InvalidKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The seven notes of a diatonic scale, starting at the root.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scale {
    notes: [&'static str; DEGREES],
}

impl Scale {
    #[must_use]
    pub const fn notes(&self) -> &[&'static str; DEGREES] {
        &self.notes
    }

    #[must_use]
    pub const fn note(&self, degree: ScaleDegree) -> &'static str {
        self.notes[degree.index()]
    }

    /// Finds the degree of a pitch, comparing pitch classes and not
    /// spellings.
    #[must_use]
    pub fn degree_of(&self, pitch: PitchClass) -> Option<ScaleDegree> {
        self.pitches()
            .position(|scale_pitch| scale_pitch == pitch)
            .map(ScaleDegree::from_index)
    }

    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn pitches(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.notes
            .iter()
            .map(|note| PitchClass::parse(note).expect("canonical note name"))
    }
}

pub fn parse_key(key: &str) -> Result<Key, InvalidKeyError> {
    Key::parse(key)
}

#[must_use]
pub fn scale_for(key: Key) -> Scale {
    key.scale()
}
