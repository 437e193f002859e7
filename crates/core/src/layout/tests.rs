// SPDX-FileCopyrightText: Copyright (C) 2025-2026 The leadsheet authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{structured::*, *};

fn token(text: &str, x: Coordinate, y: Coordinate) -> RawTextToken {
    RawTextToken {
        text: text.to_owned(),
        bbox: BoundingBox::from_rect(x, y, x + 20.0, y + 10.0),
        confidence: 0.9,
    }
}

#[test]
fn averages_of_rect() {
    let bbox = BoundingBox::from_rect(10.0, 20.0, 30.0, 40.0);
    assert_eq!(20.0, bbox.average_x());
    assert_eq!(30.0, bbox.average_y());
    assert_eq!(10.0, bbox.min_x());
}

#[test]
fn bounding_box_from_points() {
    let points = [[0.0, 0.0], [10.0, 2.0], [10.0, 12.0], [0.0, 10.0]];
    let bbox = BoundingBox::from_points(&points).unwrap();
    assert_eq!(5.0, bbox.average_x());
    assert_eq!(6.0, bbox.average_y());
    assert_eq!(None, BoundingBox::from_points(&points[..3]));
}

#[test]
fn bounding_box_from_coords() {
    let flat = BoundingBox::from_coords(&[0.0, 0.0, 10.0, 2.0, 10.0, 12.0, 0.0, 10.0]).unwrap();
    assert_eq!(
        BoundingBox::from_points(&[[0.0, 0.0], [10.0, 2.0], [10.0, 12.0], [0.0, 10.0]]),
        Some(flat)
    );
    let rect = BoundingBox::from_coords(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(BoundingBox::from_rect(1.0, 2.0, 3.0, 4.0), rect);
    assert_eq!(None, BoundingBox::from_coords(&[1.0, 2.0, 3.0]));
    assert_eq!(None, BoundingBox::from_coords(&[]));
}

#[test]
fn validate_bounding_box() {
    assert!(BoundingBox::from_rect(0.0, 0.0, 1.0, 1.0).is_valid());
    assert!(!BoundingBox::from_rect(0.0, Coordinate::NAN, 1.0, 1.0).is_valid());
    assert!(!BoundingBox::from_rect(0.0, 0.0, Coordinate::INFINITY, 1.0).is_valid());
}

#[test]
fn validate_raw_text_token() {
    assert!(token("Am", 0.0, 0.0).is_valid());
    assert!(!token(" ", 0.0, 0.0).is_valid());
    let mut invalid = token("Am", 0.0, 0.0);
    invalid.confidence = 1.5;
    assert!(!invalid.is_valid());
}

#[test]
fn polygon_to_bounding_box() {
    assert!(
        OcrPolygon::Points(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
            .to_bounding_box()
            .is_some()
    );
    assert!(
        OcrPolygon::Coords(vec![0.0, 0.0, 1.0, 1.0])
            .to_bounding_box()
            .is_some()
    );
    assert!(OcrPolygon::Coords(vec![0.0; 6]).to_bounding_box().is_none());
}

#[test]
fn tokens_of_line_by_x() {
    let line = LogicalLine {
        tokens: vec![token("F", 100.0, 0.0), token("Am", 0.0, 2.0)],
        average_y: 5.0,
        kind: None,
    };
    let texts = line
        .tokens_by_x()
        .into_iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(vec!["Am", "F"], texts);
}

#[test]
fn structured_section_items() {
    let section = StructuredSection {
        section_name: "Verse".to_owned(),
        key: "C".to_owned(),
        lines: vec![
            StructuredLine {
                index: 0,
                content: StructuredLineContent::Chords(vec![ChordItem {
                    position_x: 0.0,
                    chord: "6".to_owned(),
                    original: "Am".to_owned(),
                    confidence: 1.0,
                }]),
            },
            StructuredLine {
                index: 1,
                content: StructuredLineContent::Lyrics(vec![LyricItem {
                    text: "Hello".to_owned(),
                    confidence: 0.8,
                }]),
            },
        ],
    };
    assert!(!section.is_empty());
    assert_eq!(
        vec!["Am"],
        section
            .chord_items()
            .map(|item| item.original.as_str())
            .collect::<Vec<_>>()
    );
    assert_eq!(
        vec!["Hello"],
        section
            .lyric_items()
            .map(|item| item.text.as_str())
            .collect::<Vec<_>>()
    );
    assert_eq!(LineKind::Chords, section.lines[0].content.kind());
}
