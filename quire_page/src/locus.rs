// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pen strokes as drawn on the page.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};
use quire_geometry::bounding_rect;

/// Identifier of a stroke, assigned by the drawing surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocusId(pub u32);

/// The pen a stroke was drawn with.
///
/// Region, text, and decoration pens are indexed. For region pens the index
/// is the priority of the separators it draws (lower splits first); for text
/// and decoration pens it selects the text run or decoration style.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenType {
    /// Separators and floating-object markers.
    Region(u32),
    /// Text-container selection.
    Text(u32),
    /// Decoration selection.
    Decoration(u32),
    /// Equal-spacing constraints on separators.
    Constraint,
    /// Annotations; ignored by layout.
    Memo,
}

impl PenType {
    /// The pen index of indexed pens.
    pub const fn index(self) -> Option<u32> {
        match self {
            Self::Region(i) | Self::Text(i) | Self::Decoration(i) => Some(i),
            Self::Constraint | Self::Memo => None,
        }
    }
}

/// One free-hand stroke.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locus {
    /// Stroke identifier.
    pub id: LocusId,
    /// The pen it was drawn with.
    pub pen: PenType,
    /// Sampled points in drawing order, in millimeters.
    pub points: Vec<Point>,
}

impl Locus {
    /// Create a stroke from its points.
    pub fn new(id: u32, pen: PenType, points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self {
            id: LocusId(id),
            pen,
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    /// The segment from the first to the last point.
    ///
    /// Strokes with fewer than two points have no chord.
    pub fn chord(&self) -> Option<Line> {
        match self.points.as_slice() {
            [first, .., last] => Some(Line::new(*first, *last)),
            _ => None,
        }
    }

    /// Bounding box of the stroke's points.
    pub fn bounding_rect(&self) -> Option<Rect> {
        bounding_rect(&self.points)
    }
}

/// Group indexed strokes by pen index, in ascending index order.
///
/// Strokes keep their relative input order within each group; strokes of
/// unindexed pens are skipped.
pub fn group_by_pen<'a>(loci: impl IntoIterator<Item = &'a Locus>) -> BTreeMap<u32, Vec<&'a Locus>> {
    let mut groups: BTreeMap<u32, Vec<&'a Locus>> = BTreeMap::new();
    for locus in loci {
        if let Some(index) = locus.pen.index() {
            groups.entry(index).or_default().push(locus);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chord_needs_two_points() {
        assert_eq!(Locus::new(0, PenType::Memo, [(1.0, 1.0)]).chord(), None);
        let stroke = Locus::new(1, PenType::Memo, [(0.0, 0.0), (5.0, 9.0), (3.0, 4.0)]);
        assert_eq!(stroke.chord(), Some(Line::new((0.0, 0.0), (3.0, 4.0))));
        assert_eq!(stroke.bounding_rect(), Some(Rect::new(0.0, 0.0, 5.0, 9.0)));
    }

    #[test]
    fn grouping_keeps_order() {
        let loci = [
            Locus::new(0, PenType::Text(1), [(0.0, 0.0)]),
            Locus::new(1, PenType::Constraint, [(0.0, 0.0)]),
            Locus::new(2, PenType::Text(0), [(0.0, 0.0)]),
            Locus::new(3, PenType::Text(1), [(0.0, 0.0)]),
        ];
        let groups = group_by_pen(&loci);
        let ids: Vec<(u32, Vec<u32>)> = groups
            .iter()
            .map(|(&pen, strokes)| (pen, strokes.iter().map(|l| l.id.0).collect()))
            .collect();
        assert_eq!(ids, [(0, alloc::vec![2]), (1, alloc::vec![0, 3])]);
    }
}
