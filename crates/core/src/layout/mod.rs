// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Text tokens as recognized by an OCR engine together with their
//! position on the page.
//!
//! Coordinates are measured in pixels with the origin in the top-left
//! corner of the image, i.e. y grows downwards.

use crate::prelude::*;

pub mod structured;

pub type Coordinate = f64;

/// Confidence of a recognition result in the range 0.0..=1.0.
pub type Confidence = f64;

/// Confidence that is assumed if the engine did not report any.
pub const DEFAULT_CONFIDENCE: Confidence = 0.9;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Point {
    #[must_use]
    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A quadrilateral that encloses a recognized text token.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub corners: [Point; 4],
}

impl BoundingBox {
    #[must_use]
    pub const fn from_corners(corners: [Point; 4]) -> Self {
        Self { corners }
    }

    /// Creates a bounding box from an axis-aligned rectangle.
    #[must_use]
    pub const fn from_rect(
        x_min: Coordinate,
        y_min: Coordinate,
        x_max: Coordinate,
        y_max: Coordinate,
    ) -> Self {
        Self::from_corners([
            Point::new(x_min, y_min),
            Point::new(x_max, y_min),
            Point::new(x_max, y_max),
            Point::new(x_min, y_max),
        ])
    }

    /// Creates a bounding box from a list of `[x, y]` points.
    ///
    /// Exactly 4 points are required.
    #[must_use]
    pub fn from_points(points: &[[Coordinate; 2]]) -> Option<Self> {
        let [p0, p1, p2, p3] = points else {
            return None;
        };
        Some(Self::from_corners(
            [p0, p1, p2, p3].map(|[x, y]| Point::new(*x, *y)),
        ))
    }

    /// Creates a bounding box from a flat list of coordinates.
    ///
    /// Either 8 coordinates `x0, y0, .., x3, y3` of the corners or 4
    /// coordinates `x_min, y_min, x_max, y_max` of an axis-aligned
    /// rectangle are accepted.
    #[must_use]
    pub fn from_coords(coords: &[Coordinate]) -> Option<Self> {
        match coords {
            [x0, y0, x1, y1, x2, y2, x3, y3] => Some(Self::from_corners([
                Point::new(*x0, *y0),
                Point::new(*x1, *y1),
                Point::new(*x2, *y2),
                Point::new(*x3, *y3),
            ])),
            [x_min, y_min, x_max, y_max] => Some(Self::from_rect(*x_min, *y_min, *x_max, *y_max)),
            _ => None,
        }
    }

    #[must_use]
    pub fn average_x(&self) -> Coordinate {
        self.corners.iter().map(|p| p.x).sum::<Coordinate>() / self.corners.len() as Coordinate
    }

    #[must_use]
    pub fn average_y(&self) -> Coordinate {
        self.corners.iter().map(|p| p.y).sum::<Coordinate>() / self.corners.len() as Coordinate
    }

    #[must_use]
    pub fn min_x(&self) -> Coordinate {
        self.corners
            .iter()
            .map(|p| p.x)
            .fold(Coordinate::INFINITY, Coordinate::min)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundingBoxInvalidity {
    NonFiniteCorner,
}

impl Validate for BoundingBox {
    type Invalidity = BoundingBoxInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                !self.corners.iter().copied().all(Point::is_finite),
                Self::Invalidity::NonFiniteCorner,
            )
            .into()
    }
}

/// A single text token as recognized by an OCR engine.
#[derive(Clone, Debug, PartialEq)]
pub struct RawTextToken {
    pub text: String,
    pub bbox: BoundingBox,
    pub confidence: Confidence,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RawTextTokenInvalidity {
    TextEmpty,
    BoundingBox(BoundingBoxInvalidity),
    ConfidenceOutOfRange,
}

impl Validate for RawTextToken {
    type Invalidity = RawTextTokenInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(self.text.trim().is_empty(), Self::Invalidity::TextEmpty)
            .validate_with(&self.bbox, Self::Invalidity::BoundingBox)
            .invalidate_if(
                !(0.0..=1.0).contains(&self.confidence),
                Self::Invalidity::ConfidenceOutOfRange,
            )
            .into()
    }
}

/// Polygon of a text region as reported by an OCR engine.
#[derive(Clone, Debug, PartialEq)]
pub enum OcrPolygon {
    /// A list of `[x, y]` points.
    Points(Vec<[Coordinate; 2]>),
    /// A flat list of coordinates, see [`BoundingBox::from_coords()`].
    Coords(Vec<Coordinate>),
}

impl OcrPolygon {
    #[must_use]
    pub fn to_bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Self::Points(points) => BoundingBox::from_points(points),
            Self::Coords(coords) => BoundingBox::from_coords(coords),
        }
    }
}

/// The raw result of recognizing a single image.
///
/// The lists are parallel, i.e. the n-th polygon and score belong
/// to the n-th text. Polygons and scores might be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OcrOutput {
    pub texts: Vec<String>,
    pub scores: Vec<Confidence>,
    pub polygons: Vec<Option<OcrPolygon>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    Chords,
    Lyrics,
}

/// Tokens that have been grouped into a single visual row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogicalLine {
    pub tokens: Vec<RawTextToken>,
    /// Mean vertical position of all tokens.
    pub average_y: Coordinate,
    /// Only available after classification.
    pub kind: Option<LineKind>,
}

impl LogicalLine {
    /// The tokens in reading order from left to right.
    #[must_use]
    pub fn tokens_by_x(&self) -> Vec<&RawTextToken> {
        let mut tokens = self.tokens.iter().collect::<Vec<_>>();
        tokens.sort_by(|lhs, rhs| lhs.bbox.average_x().total_cmp(&rhs.bbox.average_x()));
        tokens
    }
}

#[cfg(test)]
mod tests;
