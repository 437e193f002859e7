// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

use crate::{Error, config::ClassifierConfig, sheet::import_text};

const SONG: &str = "\
[Verse]
Am        F
Hello world
[Outro]
C    G";

fn import_song() -> SongDocument {
    let header = SongHeader {
        name: "Song".to_owned(),
        key: "C".to_owned(),
        authors: vec!["Someone".to_owned()],
    };
    import_text(SONG, header, &ClassifierConfig::default()).unwrap()
}

#[test]
fn render_in_own_key() {
    let rendered = render_song(&import_song(), None).unwrap();
    assert_eq!("C", rendered.header.key);
    assert_eq!("Song", rendered.header.name);
    let line = &rendered.sections[0].lines[0];
    assert_eq!(Some("Am"), line.chords.get(&0).map(String::as_str));
    assert_eq!(Some("F"), line.chords.get(&10).map(String::as_str));
}

#[test]
fn render_transposed() {
    let rendered = render_song(&import_song(), Some("G")).unwrap();
    assert_eq!("G", rendered.header.key);
    assert_eq!(vec!["Someone"], rendered.header.authors);
    let verse = &rendered.sections[0].lines[0];
    assert_eq!(Some("Em"), verse.chords.get(&0).map(String::as_str));
    assert_eq!(Some("C"), verse.chords.get(&10).map(String::as_str));
    let outro = &rendered.sections[1].lines[0];
    assert!(outro.is_instrumental());
    assert_eq!(Some("G"), outro.chords.get(&0).map(String::as_str));
    assert_eq!(Some("D"), outro.chords.get(&5).map(String::as_str));
}

#[test]
fn render_with_invalid_key() {
    assert!(matches!(
        render_song(&import_song(), Some("Z")),
        Err(Error::InvalidKey(_))
    ));
}

#[test]
fn plain_text_can_be_imported_again() {
    let document = import_song();
    let rendered = render_song(&document, None).unwrap();
    let text = render_plain_text(&rendered.sections);
    assert_eq!(
        "[Verse]\nAm        F\nHello world\n\n[Outro]\nC    G",
        text
    );
    let reimported =
        import_text(&text, document.header().clone(), &ClassifierConfig::default()).unwrap();
    assert_eq!(document, reimported);
}

#[test]
fn plain_text_of_nashville_numbers() {
    let document = import_song();
    assert_eq!(
        "[Verse]\n6         4\nHello world\n\n[Outro]\n1    5",
        render_plain_text(document.sections())
    );
}

#[test]
fn chord_lines_keep_chords_apart() {
    assert_eq!(
        "Cmaj7 G",
        render_chord_line([(0, "Cmaj7"), (3, "G")])
    );
    assert_eq!("  C", render_chord_line([(2, "C")]));
}
