// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Assembling songs from pasted text or structured sections.

use std::{iter, sync::LazyLock};

use anyhow::anyhow;
use regex::Regex;
use semval::Validate as _;

use leadsheet_core::{
    layout::{
        Coordinate,
        structured::{ChordItem, LyricItem, StructuredLine, StructuredLineContent, StructuredSection},
    },
    music::{
        chord::{clean_ocr_token, is_nashville_token, is_potential_chord_token},
        key::{InvalidKeyError, Key},
    },
    sheet::{
        Chord, DEFAULT_SECTION_TITLE, FinalLine, Position, PreliminaryLine, PreliminarySection,
        SongDocument, SongHeader, SongSection,
    },
    util::string::{char_len, words_with_char_offsets},
};

use crate::{
    InputError, Result,
    classify::{ChordLineThreshold, classify_text_line},
    config::{ClassifierConfig, Config, LayoutConfig},
};

/// Certainty of lines that have been typed in without being classified.
pub const UNCLASSIFIED_LINE_CERTAINTY: f64 = 0.5;

static SECTION_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[(?P<title>.*?)\]\s*$").expect("valid section header regex")
});

fn parse_section_header(line: &str) -> Option<&str> {
    SECTION_HEADER_REGEX
        .captures(line)
        .and_then(|captures| captures.name("title"))
        .map(|m| m.as_str().trim())
}

/// An empty key disables the conversion of chord symbols.
pub(crate) fn parse_optional_key(key: &str) -> std::result::Result<Option<Key>, InvalidKeyError> {
    if key.trim().is_empty() {
        return Ok(None);
    }
    Key::parse(key).map(Some)
}

/// Converts a token from a chord line into a Nashville number.
///
/// Nashville numbers are kept as is. Tokens that are neither
/// Nashville numbers nor chord symbols are rejected.
fn token_to_nashville(token: &str, key: Option<Key>) -> Option<String> {
    if is_nashville_token(token) {
        return Some(token.to_owned());
    }
    if !is_potential_chord_token(token) {
        return None;
    }
    Some(key.map_or_else(|| token.to_owned(), |key| key.chord_to_nashville(token)))
}

/// Splits pasted text into sections of classified lines.
///
/// Lines like `[Chorus]` start a new section. Lines before the first
/// header are collected in a section with a default title. Blank
/// lines are skipped and sections without lines are omitted.
#[must_use]
pub fn parse_text(
    text: &str,
    config: &ClassifierConfig,
    threshold: ChordLineThreshold,
) -> Vec<PreliminarySection> {
    let mut sections = Vec::new();
    let mut section = PreliminarySection::new(DEFAULT_SECTION_TITLE);
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(title) = parse_section_header(line) {
            let finished = std::mem::replace(&mut section, PreliminarySection::new(title));
            if !finished.is_empty() {
                sections.push(finished);
            }
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        section
            .lines
            .push(classify_text_line(line, config, threshold));
    }
    if !section.is_empty() {
        sections.push(section);
    }
    log::debug!("Parsed {num_sections} section(s) from text", num_sections = sections.len());
    sections
}

/// Where the column of a chord line is measured from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChordLineOrigin {
    /// Recognized positions are relative to the image, the leftmost
    /// chord starts the line.
    LeftmostChord,

    /// Positions are already relative to the start of the line.
    LineStart,
}

/// Lays out chords on a single line according to their horizontal pixel
/// position relative to the leftmost chord.
///
/// Chords are separated by at least one space.
#[must_use]
pub fn layout_chord_line<'a>(
    chords: impl IntoIterator<Item = (Coordinate, &'a str)>,
    config: &LayoutConfig,
) -> String {
    layout_chord_line_from(ChordLineOrigin::LeftmostChord, chords, config)
}

#[must_use]
pub fn layout_chord_line_from<'a>(
    origin: ChordLineOrigin,
    chords: impl IntoIterator<Item = (Coordinate, &'a str)>,
    config: &LayoutConfig,
) -> String {
    let mut chords = chords
        .into_iter()
        .filter(|(_, chord)| !chord.trim().is_empty())
        .collect::<Vec<_>>();
    chords.sort_by(|(lhs, _), (rhs, _)| lhs.total_cmp(rhs));
    let Some(min_x) = chords.first().map(|(x, _)| *x) else {
        return String::new();
    };
    let origin_x = match origin {
        ChordLineOrigin::LeftmostChord => min_x,
        ChordLineOrigin::LineStart => 0.0,
    };
    let mut line = String::new();
    let mut line_len = 0;
    for (x, chord) in chords {
        let char_pos = config.char_offset(x - origin_x);
        let padding = if line_len > 0 {
            char_pos.saturating_sub(line_len).max(1)
        } else {
            char_pos
        };
        line.extend(iter::repeat_n(' ', padding));
        line.push_str(chord);
        line_len += padding + char_len(chord);
    }
    line
}

fn join_lyric_items(items: &[LyricItem]) -> String {
    items
        .iter()
        .map(|item| item.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns a structured section back into preliminary lines.
///
/// Chord lines are laid out from the recognized chord symbols after
/// removing common recognition artifacts. Lyric lines get the mean
/// confidence of their items as certainty.
#[must_use]
pub fn parse_structured_section(
    section: &StructuredSection,
    config: &LayoutConfig,
) -> PreliminarySection {
    let mut preliminary = PreliminarySection::new(section.section_name.clone());
    for line in &section.lines {
        match &line.content {
            StructuredLineContent::Chords(items) => {
                let chords = items
                    .iter()
                    .map(|item| (item.position_x, clean_ocr_token(&item.original)))
                    .collect::<Vec<_>>();
                let text = layout_chord_line(
                    chords.iter().map(|(x, chord)| (*x, chord.as_str())),
                    config,
                );
                if text.is_empty() {
                    continue;
                }
                preliminary.lines.push(PreliminaryLine::chords(text, 1.0));
            }
            StructuredLineContent::Lyrics(items) => {
                let text = join_lyric_items(items);
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                let certainty = if items.is_empty() {
                    UNCLASSIFIED_LINE_CERTAINTY
                } else {
                    items.iter().map(|item| item.confidence).sum::<f64>() / items.len() as f64
                };
                preliminary.lines.push(PreliminaryLine::lyrics(text, certainty));
            }
        }
    }
    preliminary
}

/// Parses all structured sections and omits those without lines.
#[must_use]
pub fn merge_structured_sections(
    sections: &[StructuredSection],
    config: &LayoutConfig,
) -> Vec<PreliminarySection> {
    sections
        .iter()
        .map(|section| parse_structured_section(section, config))
        .filter(|section| !section.is_empty())
        .collect()
}

fn chord_line_chords(
    text: &str,
    key: Option<Key>,
    max_position: Option<Position>,
) -> impl Iterator<Item = Chord> + '_ {
    words_with_char_offsets(text)
        .into_iter()
        .filter_map(move |(offset, token)| {
            let value = token_to_nashville(token, key)?;
            let position = max_position.map_or(offset, |max| offset.min(max));
            Some(Chord { position, value })
        })
}

fn finalize_section(section: &PreliminarySection, key: Option<Key>) -> SongSection {
    let mut lines = Vec::with_capacity(section.lines.len());
    let mut pending_chord_line: Option<&PreliminaryLine> = None;
    let instrumental_line = |chord_line: &PreliminaryLine| {
        let mut line = FinalLine::default();
        line.place_chords(chord_line_chords(&chord_line.text, key, None));
        line
    };
    for line in &section.lines {
        if line.is_chord_line {
            if let Some(chord_line) = pending_chord_line.replace(line) {
                lines.push(instrumental_line(chord_line));
            }
            continue;
        }
        let mut final_line = FinalLine::from_lyrics(line.text.clone());
        if let Some(chord_line) = pending_chord_line.take() {
            let max_position = char_len(&line.text);
            final_line.place_chords(chord_line_chords(&chord_line.text, key, Some(max_position)));
        }
        lines.push(final_line);
    }
    if let Some(chord_line) = pending_chord_line {
        lines.push(instrumental_line(chord_line));
    }
    SongSection {
        title: section.title.clone(),
        lines,
    }
}

/// Certainties only guide the review and never reject a song.
fn warn_invalid_input(sections: &[PreliminarySection]) {
    for section in sections {
        if let Err(err) = section.validate() {
            log::warn!(
                "Ignoring invalid section input \"{title}\": {err:?}",
                title = section.title
            );
        }
    }
}

/// Merges chord lines into the following lyric lines and calculates
/// the content hash.
///
/// Chord symbols are converted into Nashville numbers in the key of
/// the song. Chord lines without a following lyric line become
/// instrumental lines.
pub fn finalize(sections: &[PreliminarySection], header: SongHeader) -> Result<SongDocument> {
    warn_invalid_input(sections);
    let key = parse_optional_key(&header.key)?;
    let sections = sections
        .iter()
        .map(|section| finalize_section(section, key))
        .collect();
    let document = SongDocument::new(header, sections);
    log::info!(
        "Finalized song \"{name}\" with {num_sections} section(s): {hash}",
        name = document.header().name,
        num_sections = document.sections().len(),
        hash = document.hash(),
    );
    Ok(document)
}

/// Finalizes a song from reviewed structured sections.
pub fn finalize_song(
    header: SongHeader,
    sections: &[StructuredSection],
    config: &LayoutConfig,
) -> Result<SongDocument> {
    if sections.is_empty() {
        return Err(InputError(anyhow!("no sections provided")).into());
    }
    let preliminary = merge_structured_sections(sections, config);
    finalize(&preliminary, header)
}

/// Imports a whole song from pasted text.
pub fn import_text(text: &str, header: SongHeader, config: &ClassifierConfig) -> Result<SongDocument> {
    let sections = parse_text(text, config, ChordLineThreshold::Strict);
    finalize(&sections, header)
}

/// Converts preliminary lines into a structured section.
///
/// Character offsets of chords are mapped onto pixel positions. Chord
/// lines without any recognized chord are omitted.
pub fn preliminary_to_structured(
    section: &PreliminarySection,
    key: &str,
    config: &LayoutConfig,
) -> Result<StructuredSection> {
    let parsed_key = parse_optional_key(key)?;
    let mut lines = Vec::with_capacity(section.lines.len());
    for line in &section.lines {
        let content = if line.is_chord_line {
            let items = words_with_char_offsets(&line.text)
                .into_iter()
                .filter_map(|(offset, token)| {
                    let chord = token_to_nashville(token, parsed_key)?;
                    Some(ChordItem {
                        position_x: config.pixel_offset(offset),
                        chord,
                        original: token.to_owned(),
                        confidence: line.certainty,
                    })
                })
                .collect::<Vec<_>>();
            if items.is_empty() {
                continue;
            }
            StructuredLineContent::Chords(items)
        } else {
            StructuredLineContent::Lyrics(vec![LyricItem {
                text: line.text.clone(),
                confidence: line.certainty,
            }])
        };
        lines.push(StructuredLine {
            index: lines.len(),
            content,
        });
    }
    Ok(StructuredSection {
        section_name: section.title.clone(),
        key: key.to_owned(),
        lines,
    })
}

/// Renders a structured section as plain text for review.
///
/// Chord lines show the Nashville numbers.
#[must_use]
pub fn rebuild_plain_text(section: &StructuredSection, config: &LayoutConfig) -> String {
    rebuild_plain_text_from(ChordLineOrigin::LeftmostChord, section, config)
}

#[must_use]
pub fn rebuild_plain_text_from(
    origin: ChordLineOrigin,
    section: &StructuredSection,
    config: &LayoutConfig,
) -> String {
    let lines = section
        .lines
        .iter()
        .filter_map(|line| match &line.content {
            StructuredLineContent::Chords(items) => {
                let text = layout_chord_line_from(
                    origin,
                    items.iter().map(|item| (item.position_x, item.chord.as_str())),
                    config,
                );
                (!text.is_empty()).then_some(text)
            }
            StructuredLineContent::Lyrics(items) => Some(join_lyric_items(items)),
        })
        .collect::<Vec<_>>();
    // Leading spaces align the first line
    lines
        .join("\n")
        .trim_start_matches(['\n', '\r'])
        .trim_end()
        .to_owned()
}

/// Reparses a manually edited section.
///
/// Returns the structured section together with its plain text
/// rendition. Chords keep their columns. Text without any recognizable line is kept as a single
/// lyric line.
pub fn edit_section(
    text: &str,
    section_name: &str,
    key: &str,
    config: &Config,
) -> Result<(StructuredSection, String)> {
    if text.trim().is_empty() {
        return Err(InputError(anyhow!("no text provided")).into());
    }
    let mut section = parse_text(text, &config.classifier, ChordLineThreshold::Lenient)
        .into_iter()
        .next()
        .unwrap_or_else(|| {
            let mut section = PreliminarySection::default();
            section
                .lines
                .push(PreliminaryLine::lyrics(text, UNCLASSIFIED_LINE_CERTAINTY));
            section
        });
    section.title = section_name.to_owned();
    let structured = preliminary_to_structured(&section, key, &config.layout)?;
    let text = rebuild_plain_text_from(ChordLineOrigin::LineStart, &structured, &config.layout);
    Ok((structured, text))
}
