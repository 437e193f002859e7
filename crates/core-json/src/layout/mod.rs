// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

pub mod structured;

mod _core {
    pub(super) use leadsheet_core::layout::*;
}

///////////////////////////////////////////////////////////////////////
// OcrPolygon
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(untagged)]
pub enum OcrPolygon {
    Points(Vec<[f64; 2]>),
    Coords(Vec<f64>),
}

impl From<OcrPolygon> for _core::OcrPolygon {
    fn from(from: OcrPolygon) -> Self {
        match from {
            OcrPolygon::Points(points) => Self::Points(points),
            OcrPolygon::Coords(coords) => Self::Coords(coords),
        }
    }
}

impl From<_core::OcrPolygon> for OcrPolygon {
    fn from(from: _core::OcrPolygon) -> Self {
        use _core::OcrPolygon::*;
        match from {
            Points(points) => Self::Points(points),
            Coords(coords) => Self::Coords(coords),
        }
    }
}

///////////////////////////////////////////////////////////////////////
// OcrOutput
///////////////////////////////////////////////////////////////////////

/// Recognition result as reported by the OCR engine.
///
/// Unknown fields are ignored, because engines tend to report
/// lots of additional, intermediate results.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct OcrOutput {
    rec_texts: Vec<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    rec_scores: Option<Vec<f64>>,

    /// Detection polygons, preferred if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dt_polys: Option<Vec<Option<OcrPolygon>>>,

    /// Recognition polygons, used as a fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rec_polys: Option<Vec<Option<OcrPolygon>>>,
}

impl From<OcrOutput> for _core::OcrOutput {
    fn from(from: OcrOutput) -> Self {
        let OcrOutput {
            rec_texts,
            rec_scores,
            dt_polys,
            rec_polys,
        } = from;
        let polygons = dt_polys
            .or(rec_polys)
            .unwrap_or_default()
            .into_iter()
            .map(|polygon| polygon.map(Into::into))
            .collect();
        Self {
            texts: rec_texts.into_iter().map(Option::unwrap_or_default).collect(),
            scores: rec_scores.unwrap_or_default(),
            polygons,
        }
    }
}

impl From<_core::OcrOutput> for OcrOutput {
    fn from(from: _core::OcrOutput) -> Self {
        let _core::OcrOutput {
            texts,
            scores,
            polygons,
        } = from;
        Self {
            rec_texts: texts.into_iter().map(Some).collect(),
            rec_scores: Some(scores),
            dt_polys: Some(
                polygons
                    .into_iter()
                    .map(|polygon| polygon.map(Into::into))
                    .collect(),
            ),
            rec_polys: None,
        }
    }
}
