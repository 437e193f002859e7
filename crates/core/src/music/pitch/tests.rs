// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use strum::IntoEnumIterator as _;

use super::*;

#[test]
fn parse_note_names() {
    for (value, (sharp, flat)) in NOTES_SHARP.iter().zip(NOTES_FLAT.iter()).enumerate() {
        let expected = PitchClass::new(value as PitchClassValue);
        assert_eq!(Some(expected), PitchClass::parse(sharp));
        assert_eq!(Some(expected), PitchClass::parse(flat));
    }
}

#[test]
fn parse_lowercase_and_enharmonic_notes() {
    assert_eq!(Some(PitchClass::new(9)), PitchClass::parse("a"));
    assert_eq!(Some(PitchClass::new(6)), PitchClass::parse("f#"));
    assert_eq!(Some(PitchClass::new(11)), PitchClass::parse("Cb"));
    assert_eq!(Some(PitchClass::new(5)), PitchClass::parse("E#"));
}

#[test]
fn parse_invalid_notes() {
    assert_eq!(None, PitchClass::parse(""));
    assert_eq!(None, PitchClass::parse("H"));
    assert_eq!(None, PitchClass::parse("C##"));
    assert_eq!(None, PitchClass::parse("Cm"));
}

#[test]
fn shift_wraps_around() {
    assert_eq!(PitchClass::new(11), PitchClass::C.shifted(-1));
    assert_eq!(PitchClass::C, PitchClass::new(11).shifted(1));
    assert_eq!(PitchClass::new(4), PitchClass::new(7).shifted(-15));
    for accidental in Accidental::iter() {
        assert_eq!(
            PitchClass::C,
            PitchClass::C
                .accidental_applied(accidental)
                .shifted(-accidental.semitones())
        );
    }
}

#[test]
fn spelling_of_note() {
    assert_eq!(Some(Spelling::Flats), Spelling::of_note("Bb"));
    assert_eq!(Some(Spelling::Sharps), Spelling::of_note("C#"));
    assert_eq!(None, Spelling::of_note("b"));
    assert_eq!(None, Spelling::of_note("E"));
}

#[test]
fn apply_accidental_preserves_spelling() {
    assert_eq!(Some("Bb"), apply_accidental("B", Accidental::Flat));
    assert_eq!(Some("F#"), apply_accidental("F", Accidental::Sharp));
    assert_eq!(Some("Ab"), apply_accidental("Bb", Accidental::Flat));
    assert_eq!(Some("D#"), apply_accidental("C#", Accidental::Sharp));
    // Flat spelling is preserved even when raising
    assert_eq!(Some("B"), apply_accidental("Bb", Accidental::Sharp));
    assert_eq!(Some("G"), apply_accidental("Gb", Accidental::Sharp));
    // Wraps around the octave
    assert_eq!(Some("B"), apply_accidental("C", Accidental::Flat));
    assert_eq!(Some("C"), apply_accidental("B", Accidental::Sharp));
    assert_eq!(None, apply_accidental("X", Accidental::Flat));
}

#[test]
fn canonical_note_names() {
    assert_eq!(Some("F#"), canonical_note_name("F#"));
    assert_eq!(Some("Gb"), canonical_note_name("Gb"));
    assert_eq!(None, canonical_note_name("Cb"));
    assert_eq!(None, canonical_note_name("f#"));
}
