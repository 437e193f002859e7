// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

use super::*;

const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

const SHA256_ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn section(title: &str, lyrics: &[&str]) -> SongSection {
    SongSection {
        title: title.to_owned(),
        lines: lyrics.iter().map(|lyrics| FinalLine::from_lyrics(*lyrics)).collect(),
    }
}

#[test]
fn hash_of_empty_document() {
    let document = SongDocument::new(SongHeader::default(), vec![]);
    assert!(document.is_empty());
    assert_eq!(SHA256_EMPTY, document.hash().to_string());
}

#[test]
fn hash_covers_titles_and_lyrics() {
    let document = SongDocument::new(SongHeader::default(), vec![section("a", &["b", "c"])]);
    assert_eq!(SHA256_ABC, document.hash().to_string());
}

#[test]
fn hash_ignores_chords_and_header() {
    let plain = SongDocument::new(SongHeader::default(), vec![section("a", &["b", "c"])]);
    let mut with_chords = section("a", &["b", "c"]);
    with_chords.lines[0].place_chords([Chord {
        position: 0,
        value: "4".to_owned(),
    }]);
    let header = SongHeader {
        name: "Song".to_owned(),
        key: "G".to_owned(),
        authors: vec!["Someone".to_owned()],
    };
    let with_chords = SongDocument::new(header, vec![with_chords]);
    assert_eq!(plain.hash(), with_chords.hash());
}

#[test]
fn hash_is_deterministic() {
    let sections = vec![section("Verse", &["Hello world"]), section("Chorus", &[""])];
    assert_eq!(
        SongDocument::new(SongHeader::default(), sections.clone()).hash(),
        SongDocument::new(SongHeader::default(), sections).hash()
    );
}

#[test]
fn parse_content_hash() {
    let hash = SHA256_ABC.parse::<ContentHash>().unwrap();
    assert_eq!(SHA256_ABC, hash.to_string());
    assert_eq!(hash, SHA256_ABC.to_uppercase().parse().unwrap());
    assert!(matches!(
        "abcd".parse::<ContentHash>(),
        Err(ContentHashError::Length(2))
    ));
    assert!(matches!(
        "xyz".parse::<ContentHash>(),
        Err(ContentHashError::Decode(_))
    ));
}

#[test]
fn restore_document_with_hash() {
    let sections = vec![section("a", &["b", "c"])];
    let expected = SHA256_ABC.parse().unwrap();
    assert!(SongDocument::try_with_hash(expected, SongHeader::default(), sections.clone()).is_ok());
    let unexpected = SHA256_EMPTY.parse().unwrap();
    let err = SongDocument::try_with_hash(unexpected, SongHeader::default(), sections).unwrap_err();
    assert_eq!(expected, err.actual);
}

#[test]
fn later_chords_replace_earlier_chords() {
    let mut line = FinalLine::from_lyrics("Hi");
    line.place_chords([
        Chord {
            position: 2,
            value: "1".to_owned(),
        },
        Chord {
            position: 2,
            value: "4".to_owned(),
        },
        Chord {
            position: 0,
            value: "5".to_owned(),
        },
    ]);
    assert_eq!(
        vec![(0, "5".to_owned()), (2, "4".to_owned())],
        line.ordered_chords()
            .map(|Chord { position, value }| (position, value))
            .collect::<Vec<_>>()
    );
    assert!(!line.is_instrumental());
}

#[test]
fn instrumental_line() {
    let mut line = FinalLine::default();
    assert!(!line.is_instrumental());
    line.place_chords([Chord {
        position: 0,
        value: "1".to_owned(),
    }]);
    assert!(line.is_instrumental());
}

#[test]
fn validate_preliminary_section() {
    let mut section = PreliminarySection::new("Verse");
    assert!(section.is_empty());
    section.lines.push(PreliminaryLine::chords("Am F", 1.0));
    section.lines.push(PreliminaryLine::lyrics("Hello", 0.0));
    assert!(section.is_valid());
    section.lines.push(PreliminaryLine::lyrics("world", 1.1));
    assert!(!section.is_valid());
}
