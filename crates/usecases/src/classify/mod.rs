// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tells chord lines and lyric lines apart.

use leadsheet_core::{
    layout::{LineKind, LogicalLine},
    music::{
        chord::{clean_ocr_token, is_nashville_token, is_potential_chord_token},
        key::ScaleDegree,
    },
    sheet::{Certainty, PreliminaryLine},
    util::string::char_len,
};

use crate::config::ClassifierConfig;

/// Selects the certainty threshold for classifying text lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChordLineThreshold {
    /// For reparsing sections after manual edits.
    Lenient,

    /// For the initial import of whole songs.
    Strict,
}

fn is_scale_degree_number(token: &str) -> bool {
    token.parse::<u8>().ok().and_then(ScaleDegree::new).is_some()
}

/// Checks if a token is written like a chord symbol, a Nashville
/// number, or a bare scale degree.
#[must_use]
pub fn is_chord_like_token(token: &str) -> bool {
    is_potential_chord_token(token) || is_nashville_token(token) || is_scale_degree_number(token)
}

/// Estimates the certainty that a line of text contains only chords.
///
/// The ratio of chord-like tokens is boosted for lines with short
/// tokens on average.
#[must_use]
pub fn chord_line_certainty(line: &str, config: &ClassifierConfig) -> Certainty {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    if tokens.is_empty() {
        return 0.0;
    }
    let token_count = tokens.len() as f64;
    let chord_count = tokens
        .iter()
        .filter(|token| is_chord_like_token(token))
        .count() as f64;
    let ratio = chord_count / token_count;
    let avg_len = tokens.iter().map(|token| char_len(token)).sum::<usize>() as f64 / token_count;
    if avg_len < config.short_token_avg_len {
        (ratio * config.short_token_boost).min(1.0)
    } else {
        ratio
    }
}

#[must_use]
pub fn classify_text_line(
    line: &str,
    config: &ClassifierConfig,
    threshold: ChordLineThreshold,
) -> PreliminaryLine {
    let certainty = chord_line_certainty(line, config);
    let is_chord_line = certainty > config.threshold(threshold);
    PreliminaryLine {
        text: line.to_owned(),
        is_chord_line,
        certainty,
    }
}

/// Classifies a line of recognized tokens.
///
/// Only lines that consist entirely of chord symbols are chord lines.
#[must_use]
pub fn classify_ocr_tokens<'a>(texts: impl IntoIterator<Item = &'a str>) -> LineKind {
    let mut texts = texts.into_iter().peekable();
    if texts.peek().is_none() {
        return LineKind::Lyrics;
    }
    if texts.all(|text| is_potential_chord_token(&clean_ocr_token(text))) {
        LineKind::Chords
    } else {
        LineKind::Lyrics
    }
}

pub fn classify_logical_lines(lines: &mut [LogicalLine]) {
    for line in lines {
        let kind = classify_ocr_tokens(line.tokens.iter().map(|token| token.text.as_str()));
        line.kind = Some(kind);
    }
}

#[cfg(test)]
mod tests;
