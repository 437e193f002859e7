// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

use leadsheet_core::layout::Coordinate;

use crate::classify::ChordLineThreshold;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineGroupingConfig {
    /// Maximum vertical distance in pixels between tokens on the same line.
    pub y_threshold_px: Coordinate,
}

impl LineGroupingConfig {
    pub const DEFAULT_Y_THRESHOLD_PX: Coordinate = 10.0;
}

impl Default for LineGroupingConfig {
    fn default() -> Self {
        Self {
            y_threshold_px: Self::DEFAULT_Y_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Assumed width of a single character in pixels.
    ///
    /// Used for converting between pixel and character positions.
    pub avg_char_width_px: Coordinate,
}

impl LayoutConfig {
    pub const DEFAULT_AVG_CHAR_WIDTH_PX: Coordinate = 10.0;

    /// Maps a horizontal distance in pixels onto a character offset.
    #[must_use]
    pub fn char_offset(&self, distance_px: Coordinate) -> usize {
        if distance_px <= 0.0 || self.avg_char_width_px <= 0.0 {
            return 0;
        }
        (distance_px / self.avg_char_width_px).floor() as usize
    }

    #[must_use]
    pub fn pixel_offset(&self, char_offset: usize) -> Coordinate {
        char_offset as Coordinate * self.avg_char_width_px
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            avg_char_width_px: Self::DEFAULT_AVG_CHAR_WIDTH_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Used when reparsing a single, edited section.
    pub lenient_threshold: f64,

    /// Used when importing a whole song from text.
    pub strict_threshold: f64,

    /// Factor for the ratio of chord tokens if tokens are short.
    pub short_token_boost: f64,

    /// Tokens shorter than this on average are considered short.
    pub short_token_avg_len: f64,
}

impl ClassifierConfig {
    pub const DEFAULT_LENIENT_THRESHOLD: f64 = 0.5;
    pub const DEFAULT_STRICT_THRESHOLD: f64 = 0.6;
    pub const DEFAULT_SHORT_TOKEN_BOOST: f64 = 1.5;
    pub const DEFAULT_SHORT_TOKEN_AVG_LEN: f64 = 4.0;

    #[must_use]
    pub const fn threshold(&self, threshold: ChordLineThreshold) -> f64 {
        match threshold {
            ChordLineThreshold::Lenient => self.lenient_threshold,
            ChordLineThreshold::Strict => self.strict_threshold,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            lenient_threshold: Self::DEFAULT_LENIENT_THRESHOLD,
            strict_threshold: Self::DEFAULT_STRICT_THRESHOLD,
            short_token_boost: Self::DEFAULT_SHORT_TOKEN_BOOST,
            short_token_avg_len: Self::DEFAULT_SHORT_TOKEN_AVG_LEN,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub line_grouping: LineGroupingConfig,
    pub layout: LayoutConfig,
    pub classifier: ClassifierConfig,
}
