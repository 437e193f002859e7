// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use leadsheet_core::layout::{BoundingBox, RawTextToken};

use super::*;

fn certainty(line: &str) -> Certainty {
    chord_line_certainty(line, &ClassifierConfig::default())
}

#[test]
fn chord_like_tokens() {
    assert!(is_chord_like_token("Am7"));
    assert!(is_chord_like_token("G/B"));
    assert!(is_chord_like_token("b7"));
    assert!(is_chord_like_token("4"));
    assert!(is_chord_like_token("N.C."));
    assert!(!is_chord_like_token("8"));
    assert!(!is_chord_like_token("Hello"));
}

#[test]
fn certainty_of_short_chord_tokens() {
    assert_eq!(1.0, certainty("Am F C G"));
    assert!(certainty("Am F C G") > ClassifierConfig::DEFAULT_STRICT_THRESHOLD);
}

#[test]
fn certainty_of_lyrics() {
    assert_eq!(0.0, certainty("Hello darkness my old friend"));
    assert_eq!(0.0, certainty(""));
    assert_eq!(0.0, certainty("   "));
}

#[test]
fn certainty_of_long_tokens_is_not_boosted() {
    // 1 of 2 tokens, average length 5.5
    assert_eq!(0.5, certainty("Cmaj7 world"));
}

#[test]
fn certainty_of_short_tokens_is_boosted() {
    // 1 of 2 tokens, average length 2.5
    assert_eq!(0.75, certainty("Am is"));
}

#[test]
fn thresholds_differ_between_call_sites() {
    let config = ClassifierConfig::default();
    // 4 of 7 tokens without boost
    let line = "Cmaj7 Dmaj7 Emaj7 Fmaj7 words lyrics singing";
    let certainty = chord_line_certainty(line, &config);
    assert!((certainty - 4.0 / 7.0).abs() < 1e-9);
    assert!(classify_text_line(line, &config, ChordLineThreshold::Lenient).is_chord_line);
    assert!(!classify_text_line(line, &config, ChordLineThreshold::Strict).is_chord_line);
}

#[test]
fn classify_ocr_token_lines() {
    assert_eq!(LineKind::Chords, classify_ocr_tokens(["Am", "F", "C/E"]));
    assert_eq!(LineKind::Chords, classify_ocr_tokens(["A?m", "F_"]));
    assert_eq!(LineKind::Lyrics, classify_ocr_tokens(["Am", "Hello"]));
    assert_eq!(LineKind::Lyrics, classify_ocr_tokens([]));
}

#[test]
fn classify_lines_of_tokens() {
    let token = |text: &str| RawTextToken {
        text: text.to_owned(),
        bbox: BoundingBox::default(),
        confidence: 1.0,
    };
    let mut lines = vec![
        LogicalLine {
            tokens: vec![token("G"), token("D")],
            ..Default::default()
        },
        LogicalLine {
            tokens: vec![token("Amazing"), token("grace")],
            ..Default::default()
        },
    ];
    classify_logical_lines(&mut lines);
    assert_eq!(Some(LineKind::Chords), lines[0].kind);
    assert_eq!(Some(LineKind::Lyrics), lines[1].kind);
}
