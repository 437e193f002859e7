// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Character-based string offsets.
//!
//! Chord positions are measured in characters, not bytes, so that
//! non-ASCII lyrics keep their chords aligned.

use std::sync::LazyLock;

use regex::Regex;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("valid word regex"));

#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Splits `s` into whitespace-separated words, each paired with the
/// character offset of its first character.
#[must_use]
pub fn words_with_char_offsets(s: &str) -> Vec<(usize, &str)> {
    // Byte and char offsets of the end of the previous word
    let mut byte_offset = 0;
    let mut char_offset = 0;
    WORD_REGEX
        .find_iter(s)
        .map(|m| {
            char_offset += char_len(&s[byte_offset..m.start()]);
            let word_offset = char_offset;
            char_offset += char_len(m.as_str());
            byte_offset = m.end();
            (word_offset, m.as_str())
        })
        .collect()
}
