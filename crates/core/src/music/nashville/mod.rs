// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Conversion between chord symbols and the Nashville Number System.
//!
//! Nashville numbers denote chords by the scale degree of their root
//! relative to a key. Chords that are built on a scale degree with
//! the default quality of the key are written as bare numbers, e.g.
//! `Dm` in the key of C is written as `2`.

use std::{fmt::Write as _, sync::LazyLock};

use regex::Regex;
use strum::IntoEnumIterator as _;

use super::{
    chord::{ChordSymbol, NO_CHORD, split_slash},
    key::{InvalidKeyError, Key, Scale, ScaleDegree},
    pitch::{Accidental, PitchClass, apply_accidental},
};

/// Suffix that marks a major chord on a degree with a minor or
/// diminished default quality, e.g. `2M` for `D` in the key of C.
pub const EXPLICIT_MAJOR: char = 'M';

/// Numeric chord extensions that may directly follow the degree.
const NUMERIC_EXTENSIONS: [&str; 5] = ["6", "7", "9", "11", "13"];

static NASHVILLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<accidental>[b#])?(?P<degree>\d)(?P<suffix>.*)$")
        .expect("valid Nashville regex")
});

static QUALITY_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:maj|min|aug|dim|sus|add|m|\+|°|ø|-)").expect("valid quality regex")
});

/// A Nashville number without a slash bass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NashvilleNumber<'a> {
    pub accidental: Option<Accidental>,
    pub degree: ScaleDegree,
    pub suffix: &'a str,
}

impl<'a> NashvilleNumber<'a> {
    /// Parses a single-digit degree with an optional leading accidental.
    ///
    /// All following characters are the suffix, i.e. `27` is the
    /// 2nd degree with the extension `7`. Digits directly following
    /// the degree must form a chord extension, otherwise the number
    /// is out of range like `10` or `12`.
    #[must_use]
    pub fn parse(nashville: &'a str) -> Option<Self> {
        let captures = NASHVILLE_REGEX.captures(nashville)?;
        let accidental = captures
            .name("accidental")
            .and_then(|m| m.as_str().chars().next())
            .and_then(Accidental::try_from_char);
        let degree = captures
            .name("degree")?
            .as_str()
            .parse::<u8>()
            .ok()
            .and_then(ScaleDegree::new)?;
        let suffix = captures.name("suffix").map_or("", |m| m.as_str());
        let extension_len = suffix
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(suffix.len());
        if extension_len > 0 && !NUMERIC_EXTENSIONS.contains(&&suffix[..extension_len]) {
            return None;
        }
        Some(Self {
            accidental,
            degree,
            suffix,
        })
    }
}

fn chromatic_neighbour(
    scale: &Scale,
    pitch: PitchClass,
    preferred: Option<Accidental>,
) -> Option<(Accidental, ScaleDegree)> {
    let find_altered = |accidental: Accidental| {
        scale
            .degree_of(pitch.shifted(-accidental.semitones()))
            .map(|degree| (accidental, degree))
    };
    if let Some(preferred) = preferred {
        return find_altered(preferred).or_else(|| {
            Accidental::iter()
                .filter(|accidental| *accidental != preferred)
                .find_map(|accidental| find_altered(accidental))
        });
    }
    // Natural roots: first matching degree wins, lowered before raised
    scale.pitches().zip(1..).find_map(|(scale_pitch, number)| {
        Accidental::iter()
            .find(|accidental| scale_pitch.accidental_applied(*accidental) == pitch)
            .and_then(|accidental| ScaleDegree::new(number).map(|degree| (accidental, degree)))
    })
}

impl Key {
    /// Converts a chord symbol into a Nashville number relative to this key.
    ///
    /// Tokens that are not recognized as chords or whose root is more than
    /// a semitone away from every scale degree are returned unchanged.
    #[must_use]
    pub fn chord_to_nashville(self, chord: &str) -> String {
        if chord == NO_CHORD {
            return chord.to_owned();
        }
        self.convert_chord(chord)
            .unwrap_or_else(|| chord.to_owned())
    }

    /// Converts a Nashville number into a chord symbol in this key.
    ///
    /// Invalid or out-of-range numbers are returned unchanged.
    #[must_use]
    pub fn nashville_to_chord(self, nashville: &str) -> String {
        if nashville == NO_CHORD {
            return nashville.to_owned();
        }
        self.render_nashville(nashville)
            .unwrap_or_else(|| nashville.to_owned())
    }

    fn convert_chord(self, chord: &str) -> Option<String> {
        let Some((upper, bass)) = split_slash(chord) else {
            return self.convert_chord_symbol(chord);
        };
        let upper = self.convert_chord_symbol(upper)?;
        // Only the degree of the bass note is retained
        let bass = self
            .convert_chord_symbol(bass)?
            .chars()
            .filter(|c| matches!(c, 'b' | '#') || c.is_ascii_digit())
            .collect::<String>();
        Some(format!("{upper}/{bass}"))
    }

    fn convert_chord_symbol(self, chord: &str) -> Option<String> {
        let symbol = ChordSymbol::parse(chord)?;
        let scale = self.scale();
        let pitch = symbol.root_pitch();
        let (accidental, degree) = match scale.degree_of(pitch) {
            Some(degree) => (None, degree),
            None => chromatic_neighbour(&scale, pitch, symbol.root_accidental())
                .map(|(accidental, degree)| (Some(accidental), degree))?,
        };
        let quality = symbol.quality.unwrap_or_default();
        let mut nashville = String::with_capacity(chord.len() + 2);
        if let Some(accidental) = accidental {
            nashville.push(accidental.as_char());
        }
        write!(nashville, "{degree}").ok()?;
        if accidental.is_some() {
            nashville.push_str(quality);
        } else {
            let default_quality = self.default_quality(degree);
            if quality != default_quality {
                if quality.is_empty() {
                    nashville.push(EXPLICIT_MAJOR);
                } else {
                    nashville.push_str(quality);
                }
            }
        }
        nashville.push_str(&symbol.tail());
        Some(nashville)
    }

    fn render_nashville(self, nashville: &str) -> Option<String> {
        let Some((upper, bass)) = split_slash(nashville) else {
            return self.render_nashville_number(nashville);
        };
        let upper = self.render_nashville_number(upper)?;
        let bass = self.render_root(NashvilleNumber::parse(bass)?)?;
        Some(format!("{upper}/{bass}"))
    }

    fn render_root(self, number: NashvilleNumber<'_>) -> Option<&'static str> {
        let root = self.scale().note(number.degree);
        match number.accidental {
            Some(accidental) => apply_accidental(root, accidental),
            None => Some(root),
        }
    }

    fn render_nashville_number(self, nashville: &str) -> Option<String> {
        let number = NashvilleNumber::parse(nashville)?;
        let root = self.render_root(number)?;
        let (explicit_major, suffix) = match number.suffix.strip_prefix(EXPLICIT_MAJOR) {
            Some(suffix) => (true, suffix),
            None => (false, number.suffix),
        };
        let mut chord = String::with_capacity(root.len() + suffix.len() + 3);
        chord.push_str(root);
        if number.accidental.is_none()
            && !explicit_major
            && !QUALITY_PREFIX_REGEX.is_match(suffix)
        {
            chord.push_str(self.default_quality(number.degree));
        }
        chord.push_str(suffix);
        Some(chord)
    }
}

/// Converts a chord symbol into a Nashville number.
///
/// The "no chord" literal and an empty key are passed through unchanged.
pub fn chord_to_nashville(chord: &str, key: &str) -> Result<String, InvalidKeyError> {
    if chord == NO_CHORD || key.trim().is_empty() {
        return Ok(chord.to_owned());
    }
    Key::parse(key).map(|key| key.chord_to_nashville(chord))
}

/// Converts a Nashville number into a chord symbol.
///
/// The "no chord" literal and an empty key are passed through unchanged.
pub fn nashville_to_chord(nashville: &str, key: &str) -> Result<String, InvalidKeyError> {
    if nashville == NO_CHORD || key.trim().is_empty() {
        return Ok(nashville.to_owned());
    }
    Key::parse(key).map(|key| key.nashville_to_chord(nashville))
}

#[cfg(test)]
mod tests;
