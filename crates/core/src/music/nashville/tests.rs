// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

fn to_nashville(chord: &str, key: &str) -> String {
    chord_to_nashville(chord, key).unwrap()
}

fn to_chord(nashville: &str, key: &str) -> String {
    nashville_to_chord(nashville, key).unwrap()
}

#[test]
fn diatonic_chords_in_c_major() {
    assert_eq!("1", to_nashville("C", "C"));
    assert_eq!("2", to_nashville("Dm", "C"));
    assert_eq!("3", to_nashville("Em", "C"));
    assert_eq!("4", to_nashville("F", "C"));
    assert_eq!("5", to_nashville("G", "C"));
    assert_eq!("6", to_nashville("Am", "C"));
    assert_eq!("7", to_nashville("Bdim", "C"));
}

#[test]
fn extensions_are_kept() {
    assert_eq!("57", to_nashville("G7", "C"));
    assert_eq!("27", to_nashville("Dm7", "C"));
    assert_eq!("1maj7", to_nashville("Cmaj7", "C"));
    assert_eq!("4sus4", to_nashville("Fsus4", "C"));
    assert_eq!("1add9*", to_nashville("Cadd9*", "C"));
}

#[test]
fn non_default_major_quality_is_marked() {
    assert_eq!("2M", to_nashville("D", "C"));
    assert_eq!("3M7", to_nashville("E7", "C"));
    assert_eq!("5M", to_nashville("E", "Am"));
    assert_eq!("D", to_chord("2M", "C"));
    assert_eq!("E7", to_chord("3M7", "C"));
    assert_eq!("E", to_chord("5M", "Am"));
}

#[test]
fn non_default_minor_quality_is_kept() {
    assert_eq!("4m", to_nashville("Fm", "C"));
    assert_eq!("Fm", to_chord("4m", "C"));
}

#[test]
fn chromatic_chords() {
    assert_eq!("#4", to_nashville("F#", "C"));
    assert_eq!("b7", to_nashville("Bb", "C"));
    assert_eq!("b3m", to_nashville("Ebm", "C"));
    assert_eq!("b6", to_nashville("Ab", "C"));
    assert_eq!("Bb", to_chord("b7", "C"));
    assert_eq!("F#", to_chord("#4", "C"));
    assert_eq!("Ebm", to_chord("b3m", "C"));
}

#[test]
fn natural_chromatic_root() {
    // F is a semitone above E and below F#
    assert_eq!("#2", to_nashville("F", "D"));
}

#[test]
fn slash_chords() {
    assert_eq!("5/7", to_nashville("G/B", "C"));
    assert_eq!("1/3", to_nashville("C/E", "C"));
    assert_eq!("4/1", to_nashville("F/C", "C"));
    assert_eq!("1/b7", to_nashville("C/Bb", "C"));
    assert_eq!("G/B", to_chord("5/7", "C"));
    assert_eq!("C/E", to_chord("1/3", "C"));
    assert_eq!("C/Bb", to_chord("1/b7", "C"));
}

#[test]
fn no_chord_and_empty_key_are_identity() {
    for key in Key::available_keys() {
        assert_eq!(NO_CHORD, to_nashville(NO_CHORD, &key));
        assert_eq!(NO_CHORD, to_chord(NO_CHORD, &key));
    }
    assert_eq!("Am7", to_nashville("Am7", ""));
    assert_eq!("27", to_chord("27", ""));
    assert_eq!("Am7", to_nashville("Am7", "  "));
}

#[test]
fn unrecognized_tokens_pass_through() {
    assert_eq!("Hello", to_nashville("Hello", "C"));
    assert_eq!("C/E/G", to_nashville("C/E/G", "C"));
    assert_eq!("8", to_chord("8", "C"));
    assert_eq!("0", to_chord("0", "C"));
    assert_eq!("x", to_chord("x", "C"));
    assert_eq!("5/x", to_chord("5/x", "C"));
}

#[test]
fn out_of_range_numbers_pass_through() {
    assert_eq!("10", to_chord("10", "C"));
    assert_eq!("12", to_chord("12", "C"));
    assert_eq!("77", to_chord("77", "C"));
    assert_eq!("5/10", to_chord("5/10", "C"));
    assert_eq!("G7", to_chord("57", "C"));
    assert_eq!("Dm9", to_chord("29", "C"));
    assert_eq!("Am11", to_chord("611", "C"));
    assert_eq!("F13", to_chord("413", "C"));
}

#[test]
fn invalid_key_fails() {
    assert_eq!(
        Err(InvalidKeyError::new("H")),
        chord_to_nashville("C", "H")
    );
    assert_eq!(
        Err(InvalidKeyError::new("X")),
        nashville_to_chord("1", "Xm")
    );
}

#[test]
fn minor_keys() {
    assert_eq!("1", to_nashville("Am", "Am"));
    assert_eq!("2", to_nashville("Bdim", "Am"));
    assert_eq!("3", to_nashville("C", "Am"));
    assert_eq!("47", to_nashville("Dm7", "Am"));
    assert_eq!("Am", to_chord("1", "Am"));
    assert_eq!("G", to_chord("7", "Am"));
    assert_eq!("Dm7", to_chord("47", "Am"));
}

#[test]
fn flat_keys() {
    assert_eq!("4", to_nashville("Eb", "Bb"));
    assert_eq!("6", to_nashville("Gm", "Bb"));
    assert_eq!("Eb", to_chord("4", "Bb"));
    assert_eq!("Cm", to_chord("2", "Bb"));
    assert_eq!("Ab", to_chord("b7", "Bb"));
}

#[test]
fn diatonic_round_trip_in_all_keys() {
    let keys = Key::available_keys()
        .into_iter()
        .chain(["Db", "Eb", "Gb", "Ab", "Bb", "Ebm", "Bbm"].map(ToOwned::to_owned));
    for key in keys {
        let parsed = Key::parse(&key).unwrap();
        for number in 1..=7 {
            let degree = ScaleDegree::new(number).unwrap();
            let chord = format!(
                "{}{}",
                parsed.scale().note(degree),
                parsed.default_quality(degree)
            );
            let nashville = to_nashville(&chord, &key);
            assert_eq!(degree.to_string(), nashville);
            assert_eq!(chord, to_chord(&nashville, &key));
        }
    }
}

#[test]
fn parse_nashville_number() {
    let number = NashvilleNumber::parse("b3m7").unwrap();
    assert_eq!(Some(Accidental::Flat), number.accidental);
    assert_eq!(ScaleDegree::new(3), Some(number.degree));
    assert_eq!("m7", number.suffix);
    assert_eq!(None, NashvilleNumber::parse("9"));
    assert_eq!(None, NashvilleNumber::parse("m"));
    assert_eq!(None, NashvilleNumber::parse("10"));
    assert_eq!("13sus4", NashvilleNumber::parse("513sus4").unwrap().suffix);
}
