// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Rendering finalized songs as chord symbols in an arbitrary key.

use std::iter;

use leadsheet_core::{
    music::key::Key,
    sheet::{FinalLine, Position, SongDocument, SongHeader, SongSection},
    util::string::char_len,
};

use crate::Result;

/// A song with chord symbols instead of Nashville numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSong {
    /// The key of the chord symbols.
    pub header: SongHeader,
    pub sections: Vec<SongSection>,
}

fn render_line(line: &FinalLine, key: Key) -> FinalLine {
    let FinalLine { lyrics, chords } = line;
    FinalLine {
        lyrics: lyrics.clone(),
        chords: chords
            .iter()
            .map(|(position, value)| (*position, key.nashville_to_chord(value)))
            .collect(),
    }
}

/// Renders the Nashville numbers of a song as chord symbols.
///
/// Without an explicit key the song is rendered in its own key.
pub fn render_song(document: &SongDocument, key: Option<&str>) -> Result<RenderedSong> {
    let key = Key::parse(key.unwrap_or(&document.header().key))?;
    let sections = document
        .sections()
        .iter()
        .map(|section| SongSection {
            title: section.title.clone(),
            lines: section
                .lines
                .iter()
                .map(|line| render_line(line, key))
                .collect(),
        })
        .collect();
    let header = SongHeader {
        key: key.to_string(),
        ..document.header().clone()
    };
    Ok(RenderedSong { header, sections })
}

fn render_chord_line<'a>(chords: impl IntoIterator<Item = (Position, &'a str)>) -> String {
    let mut line = String::new();
    let mut line_len = 0;
    for (position, chord) in chords {
        let padding = position.saturating_sub(line_len);
        let padding = if line_len > 0 { padding.max(1) } else { padding };
        line.extend(iter::repeat_n(' ', padding));
        line.push_str(chord);
        line_len += padding + char_len(chord);
    }
    line
}

/// Prints each section with a `[Title]` header and chords on a separate
/// line above the lyrics.
///
/// The output can be parsed again as text.
#[must_use]
pub fn render_plain_text(sections: &[SongSection]) -> String {
    let mut lines = Vec::new();
    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("[{title}]", title = section.title));
        for line in &section.lines {
            if !line.chords.is_empty() {
                lines.push(render_chord_line(
                    line.chords
                        .iter()
                        .map(|(position, chord)| (*position, chord.as_str())),
                ));
            }
            if !line.lyrics.is_empty() {
                lines.push(line.lyrics.clone());
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests;
