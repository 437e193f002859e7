// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

pub type PitchClassValue = u8;

/// Number of semitones per octave.
pub const SEMITONES: PitchClassValue = 12;

/// Chromatic scale spelled with sharps, starting at C.
pub const NOTES_SHARP: [&str; SEMITONES as usize] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chromatic scale spelled with flats, starting at C.
pub const NOTES_FLAT: [&str; SEMITONES as usize] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Accidental {
    Flat,
    Sharp,
}

impl Accidental {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Flat => 'b',
            Self::Sharp => '#',
        }
    }

    #[must_use]
    pub const fn try_from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(Self::Flat),
            '#' => Some(Self::Sharp),
            _ => None,
        }
    }

    #[must_use]
    pub const fn semitones(self) -> i8 {
        match self {
            Self::Flat => -1,
            Self::Sharp => 1,
        }
    }

    /// The spelling that is consistent with this accidental.
    #[must_use]
    pub const fn spelling(self) -> Spelling {
        match self {
            Self::Flat => Spelling::Flats,
            Self::Sharp => Spelling::Sharps,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One of the 12 pitch classes, C = 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(PitchClassValue);

impl PitchClass {
    pub const C: Self = Self(0);

    #[must_use]
    pub const fn new(value: PitchClassValue) -> Self {
        Self(value % SEMITONES)
    }

    #[must_use]
    pub const fn value(self) -> PitchClassValue {
        let Self(value) = self;
        value
    }

    /// Shifts the pitch class by the given number of semitones.
    ///
    /// Wraps around modulo 12 in both directions.
    #[must_use]
    pub const fn shifted(self, semitones: i8) -> Self {
        let shifted = (self.value() as i16 + semitones as i16).rem_euclid(SEMITONES as i16);
        Self(shifted as PitchClassValue)
    }

    #[must_use]
    pub const fn accidental_applied(self, accidental: Accidental) -> Self {
        self.shifted(accidental.semitones())
    }

    /// Parses a note name, e.g. `C`, `f#` or `Bb`.
    ///
    /// The letter is case-insensitive. At most a single accidental is
    /// accepted. Enharmonic spellings outside of the chromatic tables
    /// like `Cb` or `E#` are resolved to their pitch class.
    #[must_use]
    pub fn parse(note: &str) -> Option<Self> {
        let mut chars = note.chars();
        let base = match chars.next()?.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let pitch = Self(base);
        match (chars.next(), chars.next()) {
            (None, _) => Some(pitch),
            (Some(c), None) => Accidental::try_from_char(c).map(|acc| pitch.accidental_applied(acc)),
            (Some(_), Some(_)) => None,
        }
    }
}

impl From<PitchClass> for PitchClassValue {
    fn from(from: PitchClass) -> Self {
        from.value()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Spelling {
    Sharps,
    Flats,
}

impl Spelling {
    #[must_use]
    pub const fn note_names(self) -> &'static [&'static str; SEMITONES as usize] {
        match self {
            Self::Sharps => &NOTES_SHARP,
            Self::Flats => &NOTES_FLAT,
        }
    }

    #[must_use]
    pub const fn spell(self, pitch: PitchClass) -> &'static str {
        self.note_names()[pitch.value() as usize]
    }

    /// The spelling implied by the accidental of a note name.
    ///
    /// Returns `None` for natural notes.
    #[must_use]
    pub fn of_note(note: &str) -> Option<Self> {
        note.chars()
            .skip(1)
            .find_map(Accidental::try_from_char)
            .map(Accidental::spelling)
    }
}

/// Looks up a note name in the chromatic tables.
///
/// Only the canonical spellings of [`NOTES_SHARP`] and [`NOTES_FLAT`]
/// are recognized, i.e. neither `Cb` nor `E#`.
#[must_use]
pub fn canonical_note_name(note: &str) -> Option<&'static str> {
    NOTES_SHARP
        .iter()
        .chain(NOTES_FLAT.iter())
        .find(|name| **name == note)
        .copied()
}

/// Shifts a note by a semitone while preserving its spelling.
///
/// Flat notes stay in the flat table and sharp notes in the sharp table.
/// Natural notes follow the table of the applied accidental, i.e. `B`
/// lowered becomes `Bb` and `F` raised becomes `F#`.
#[must_use]
pub fn apply_accidental(note: &str, accidental: Accidental) -> Option<&'static str> {
    let pitch = PitchClass::parse(note)?;
    let spelling = Spelling::of_note(note).unwrap_or(accidental.spelling());
    Some(spelling.spell(pitch.accidental_applied(accidental)))
}

#[cfg(test)]
mod tests;
