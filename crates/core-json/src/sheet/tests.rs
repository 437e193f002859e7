// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

fn core_document() -> _core::SongDocument {
    let mut line = _core::FinalLine::from_lyrics("Hello world");
    line.place_chords([
        _core::Chord {
            position: 6,
            value: "4".to_owned(),
        },
        _core::Chord {
            position: 0,
            value: "6".to_owned(),
        },
    ]);
    _core::SongDocument::new(
        _core::SongHeader {
            name: "Song".to_owned(),
            key: "C".to_owned(),
            authors: vec!["Someone".to_owned()],
        },
        vec![
            _core::SongSection {
                title: "Verse".to_owned(),
                lines: vec![line],
            },
            // Duplicate titles are preserved
            _core::SongSection {
                title: "Verse".to_owned(),
                lines: vec![_core::FinalLine::from_lyrics("Again")],
            },
        ],
    )
}

#[test]
fn serialize_song_document() {
    let document = core_document();
    let hash = document.hash().to_string();
    assert_eq!(
        serde_json::json!({
            "hash": hash,
            "header": {
                "name": "Song",
                "key": "C",
                "authors": ["Someone"],
            },
            "sections": [{
                "title": "Verse",
                "lines": [{
                    "lyrics": "Hello world",
                    "chords": [
                        { "position": 0, "value": "6" },
                        { "position": 6, "value": "4" },
                    ],
                }],
            }, {
                "title": "Verse",
                "lines": [{
                    "lyrics": "Again",
                    "chords": [],
                }],
            }],
        }),
        serde_json::to_value(SongDocument::from(document)).unwrap()
    );
}

#[test]
fn deserialize_song_document_verifies_hash() {
    let json = serde_json::to_value(SongDocument::from(core_document())).unwrap();
    let document: _core::SongDocument = serde_json::from_value::<SongDocument>(json.clone())
        .unwrap()
        .try_into()
        .unwrap();
    assert_eq!(core_document(), document);

    let mut tampered = json;
    tampered["sections"][1]["lines"][0]["lyrics"] = serde_json::json!("Tampered");
    let result: anyhow::Result<_core::SongDocument> =
        serde_json::from_value::<SongDocument>(tampered)
            .unwrap()
            .try_into();
    assert!(result.is_err());
}

#[test]
fn deserialize_song_document_with_invalid_hash() {
    let json = serde_json::json!({
        "hash": "not a hash",
        "header": { "name": "Song", "key": "C" },
        "sections": [],
    });
    let result: anyhow::Result<_core::SongDocument> = serde_json::from_value::<SongDocument>(json)
        .unwrap()
        .try_into();
    assert!(result.is_err());
}

#[test]
fn deserialize_preliminary_section() {
    let json = serde_json::json!({
        "title": "Chorus",
        "lines": [
            { "text": "Am   F", "is_chord_line": true, "certainty": 1.0 },
            { "text": "Hello" },
        ],
    });
    let section: _core::PreliminarySection =
        serde_json::from_value::<PreliminarySection>(json).unwrap().into();
    assert_eq!(
        _core::PreliminarySection {
            title: "Chorus".to_owned(),
            lines: vec![
                _core::PreliminaryLine::chords("Am   F", 1.0),
                _core::PreliminaryLine::lyrics("Hello", 0.0),
            ],
        },
        section
    );
}
