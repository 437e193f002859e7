// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Turning recognized text tokens into structured lines.

use std::{fmt, sync::OnceLock};

use anyhow::anyhow;

use leadsheet_core::{
    layout::{
        DEFAULT_CONFIDENCE, LineKind, LogicalLine, OcrOutput, RawTextToken,
        structured::{ChordItem, LyricItem, StructuredLine, StructuredLineContent, StructuredSection},
    },
    music::chord::clean_ocr_token,
    prelude::*,
};

use crate::{
    Result,
    classify::{classify_logical_lines, classify_ocr_tokens},
    config::{Config, LineGroupingConfig},
    sheet::{parse_optional_key, rebuild_plain_text},
};

/// Recognizes text in images.
pub trait OcrEngine {
    fn recognize(&self, image: &[u8]) -> anyhow::Result<OcrOutput>;
}

/// Constructs the wrapped engine on first use.
///
/// Initializing an OCR engine is usually expensive, e.g. when loading
/// models. The engine is reused for all subsequent requests.
pub struct LazyOcrEngine<E, F> {
    engine: OnceLock<E>,
    init: F,
}

impl<E, F> LazyOcrEngine<E, F>
where
    F: Fn() -> anyhow::Result<E>,
{
    #[must_use]
    pub const fn new(init: F) -> Self {
        Self {
            engine: OnceLock::new(),
            init,
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.engine.get().is_some()
    }

    pub fn get_or_try_init(&self) -> anyhow::Result<&E> {
        if let Some(engine) = self.engine.get() {
            return Ok(engine);
        }
        log::info!("Initializing OCR engine");
        let engine = (self.init)()?;
        if self.engine.set(engine).is_err() {
            log::debug!("OCR engine has already been initialized");
        }
        self.engine
            .get()
            .ok_or_else(|| anyhow!("OCR engine not initialized"))
    }
}

impl<E: fmt::Debug, F> fmt::Debug for LazyOcrEngine<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyOcrEngine")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl<E, F> OcrEngine for LazyOcrEngine<E, F>
where
    E: OcrEngine,
    F: Fn() -> anyhow::Result<E>,
{
    fn recognize(&self, image: &[u8]) -> anyhow::Result<OcrOutput> {
        self.get_or_try_init()?.recognize(image)
    }
}

/// Pairs the recognized texts with their bounding boxes and scores.
///
/// Empty texts and texts without a usable polygon are skipped.
#[must_use]
pub fn normalize_ocr_output(output: &OcrOutput) -> Vec<RawTextToken> {
    let OcrOutput {
        texts,
        scores,
        polygons,
    } = output;
    texts
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            if text.trim().is_empty() {
                return None;
            }
            let Some(polygon) = polygons.get(index).and_then(Option::as_ref) else {
                log::debug!("Skipping text {text:?} without polygon");
                return None;
            };
            let Some(bbox) = polygon.to_bounding_box() else {
                log::warn!("Skipping text {text:?} with unusable polygon {polygon:?}");
                return None;
            };
            let confidence = scores.get(index).copied().unwrap_or(DEFAULT_CONFIDENCE);
            Some(RawTextToken {
                text: text.clone(),
                bbox,
                confidence,
            })
        })
        .collect()
}

fn new_logical_line(tokens: Vec<RawTextToken>, sum_y: f64) -> LogicalLine {
    debug_assert!(!tokens.is_empty());
    let average_y = sum_y / tokens.len() as f64;
    LogicalLine {
        tokens,
        average_y,
        kind: None,
    }
}

/// Groups tokens into lines from top to bottom.
///
/// Tokens are visited in vertical order. A token joins the current
/// line if its vertical distance to the preceding token is below the
/// threshold. The order of tokens within a line is unspecified.
#[must_use]
pub fn group_lines(tokens: Vec<RawTextToken>, config: &LineGroupingConfig) -> Vec<LogicalLine> {
    let mut tokens = tokens
        .into_iter()
        .filter(|token| {
            if token.bbox.is_valid() {
                return true;
            }
            log::warn!("Skipping text {text:?} with invalid bounding box", text = token.text);
            false
        })
        .map(|token| (token.bbox.average_y(), token))
        .collect::<Vec<_>>();
    tokens.sort_by(|(lhs, _), (rhs, _)| lhs.total_cmp(rhs));
    let mut lines = Vec::new();
    let mut line_tokens = Vec::new();
    let mut sum_y = 0.0;
    let mut anchor_y = None;
    for (y, token) in tokens {
        if anchor_y.is_some_and(|anchor_y: f64| (y - anchor_y).abs() >= config.y_threshold_px) {
            lines.push(new_logical_line(std::mem::take(&mut line_tokens), sum_y));
            sum_y = 0.0;
        }
        anchor_y = Some(y);
        sum_y += y;
        line_tokens.push(token);
    }
    if !line_tokens.is_empty() {
        lines.push(new_logical_line(line_tokens, sum_y));
    }
    lines
}

/// Builds a structured section from grouped lines.
///
/// Chord symbols are converted into Nashville numbers in the given key.
/// Lines that have not been classified yet are classified on the fly.
pub fn structure_ocr_tokens(
    lines: &[LogicalLine],
    section_name: &str,
    key: &str,
) -> Result<StructuredSection> {
    let parsed_key = parse_optional_key(key)?;
    let lines = lines
        .iter()
        .filter(|line| !line.tokens.is_empty())
        .enumerate()
        .map(|(index, line)| {
            let kind = line.kind.unwrap_or_else(|| {
                classify_ocr_tokens(line.tokens.iter().map(|token| token.text.as_str()))
            });
            let tokens = line.tokens_by_x();
            let content = match kind {
                LineKind::Chords => StructuredLineContent::Chords(
                    tokens
                        .into_iter()
                        .map(|token| {
                            let cleaned = clean_ocr_token(&token.text);
                            let cleaned = cleaned.trim();
                            ChordItem {
                                position_x: token.bbox.average_x(),
                                chord: parsed_key.map_or_else(
                                    || cleaned.to_owned(),
                                    |key| key.chord_to_nashville(cleaned),
                                ),
                                original: token.text.clone(),
                                confidence: token.confidence,
                            }
                        })
                        .collect(),
                ),
                LineKind::Lyrics => StructuredLineContent::Lyrics(
                    tokens
                        .into_iter()
                        .map(|token| LyricItem {
                            text: token.text.clone(),
                            confidence: token.confidence,
                        })
                        .collect(),
                ),
            };
            StructuredLine { index, content }
        })
        .collect::<Vec<_>>();
    log::debug!(
        "Structured {num_lines} line(s) of section \"{section_name}\"",
        num_lines = lines.len()
    );
    Ok(StructuredSection {
        section_name: section_name.to_owned(),
        key: key.to_owned(),
        lines,
    })
}

/// Recognizes a single section from an image.
///
/// Returns the structured section together with its plain text
/// rendition for review.
pub fn recognize_section<E>(
    engine: &E,
    image: &[u8],
    section_name: &str,
    key: &str,
    config: &Config,
) -> Result<(StructuredSection, String)>
where
    E: OcrEngine + ?Sized,
{
    let output = engine.recognize(image)?;
    let tokens = normalize_ocr_output(&output);
    log::debug!(
        "Recognized {num_tokens} token(s) in {num_texts} text(s)",
        num_tokens = tokens.len(),
        num_texts = output.texts.len()
    );
    let mut lines = group_lines(tokens, &config.line_grouping);
    classify_logical_lines(&mut lines);
    let section = structure_ocr_tokens(&lines, section_name, key)?;
    let text = rebuild_plain_text(&section, &config.layout);
    Ok((section, text))
}
