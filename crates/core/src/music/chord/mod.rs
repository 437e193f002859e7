// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::LazyLock;

use regex::Regex;

use super::pitch::{Accidental, PitchClass};

/// The "no chord" literal that is passed through unchanged.
pub const NO_CHORD: &str = "N.C.";

const SLASH: char = '/';

static CHORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<root>[A-Ga-g][#b]?)",
        r"(?P<quality>maj|min|aug|dim|sus|add|m|\+|°|ø|-)?",
        r"(?P<extension>\d+)?",
        r"(?P<modifiers>(?:sus\d+|add\d+|aug|dim|\+|\([^)]*\))*)",
        r"(?P<star>\*)?$",
    ))
    .expect("valid chord regex")
});

static BASS_NOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Ga-g][#b]?$").expect("valid bass note regex"));

static NASHVILLE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[b#]?[1-7][mMajsugdi°ø+\-()/*\d]*$").expect("valid Nashville token regex")
});

/// A chord symbol without a slash bass, e.g. `C`, `F#m7` or `Gsus4*`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChordSymbol<'a> {
    pub root: &'a str,
    pub quality: Option<&'a str>,
    pub extension: Option<&'a str>,
    /// A possibly empty run of modifiers like `sus4`, `add9` or `(b5)`.
    pub modifiers: &'a str,
    pub starred: bool,
}

impl<'a> ChordSymbol<'a> {
    #[must_use]
    pub fn parse(chord: &'a str) -> Option<Self> {
        let captures = CHORD_REGEX.captures(chord)?;
        let root = captures.name("root")?.as_str();
        let quality = captures.name("quality").map(|m| m.as_str());
        let extension = captures.name("extension").map(|m| m.as_str());
        let modifiers = captures.name("modifiers").map_or("", |m| m.as_str());
        let starred = captures.name("star").is_some();
        Some(Self {
            root,
            quality,
            extension,
            modifiers,
            starred,
        })
    }

    #[must_use]
    #[allow(clippy::missing_panics_doc)] // Never panics
    pub fn root_pitch(&self) -> PitchClass {
        PitchClass::parse(self.root).expect("root note matched by regex")
    }

    /// The accidental as spelled in the root, if any.
    #[must_use]
    pub fn root_accidental(&self) -> Option<Accidental> {
        self.root.chars().nth(1).and_then(Accidental::try_from_char)
    }

    /// Everything after the quality, concatenated.
    #[must_use]
    pub fn tail(&self) -> String {
        let mut tail = String::with_capacity(self.modifiers.len() + 4);
        tail.push_str(self.extension.unwrap_or_default());
        tail.push_str(self.modifiers);
        if self.starred {
            tail.push('*');
        }
        tail
    }
}

/// Splits a slash chord at the first slash into its trimmed parts.
#[must_use]
pub fn split_slash(chord: &str) -> Option<(&str, &str)> {
    chord
        .split_once(SLASH)
        .map(|(upper, bass)| (upper.trim(), bass.trim()))
}

#[must_use]
pub fn is_bass_note(note: &str) -> bool {
    BASS_NOTE_REGEX.is_match(note)
}

/// Checks if a token looks like a chord symbol.
///
/// Accepts [`NO_CHORD`], plain chord symbols, and slash chords with a
/// bare note as bass. Empty tokens are rejected.
#[must_use]
pub fn is_potential_chord_token(token: &str) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return false;
    }
    if token == NO_CHORD {
        return true;
    }
    if let Some((upper, bass)) = split_slash(token) {
        return CHORD_REGEX.is_match(upper) && is_bass_note(bass);
    }
    CHORD_REGEX.is_match(token)
}

/// Checks if a token is already written as a Nashville number, e.g.
/// `4`, `b7`, `2m7` or `5/7`.
#[must_use]
pub fn is_nashville_token(token: &str) -> bool {
    NASHVILLE_TOKEN_REGEX.is_match(token)
}

#[must_use]
pub fn extract_chords_from_line(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .filter(|token| is_potential_chord_token(token))
        .collect()
}

/// Removes characters that OCR engines commonly mistake for glyphs
/// in chord symbols.
#[must_use]
pub fn clean_ocr_token(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '?' | '_')).collect()
}
