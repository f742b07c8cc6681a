// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing free-hand strokes.
//!
//! A stroke is treated as a polyline through its sampled points with a
//! uniform half-width. Joins and caps are round, which is what measuring the
//! distance to each segment gives.

use core::cmp::Ordering;

use kurbo::{Line, Point};
use quire_geometry::distance_to_segment;
use quire_page::{Locus, LocusId};

use crate::HitParams;

/// A stroke under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeHit {
    /// The stroke that was hit.
    pub id: LocusId,
    /// Distance from the query point to the stroke's centerline.
    pub distance: f64,
}

impl StrokeHit {
    /// Compare two hits, preferring smaller distance; ties keep original order.
    pub fn cmp_distance(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Distance from `point` to the polyline through `points`.
///
/// A single point measures the distance to that point; no points gives `None`.
pub fn polyline_distance(points: &[Point], point: Point) -> Option<f64> {
    match points {
        [] => None,
        [only] => Some((point - *only).hypot()),
        _ => points
            .windows(2)
            .map(|w| distance_to_segment(Line::new(w[0], w[1]), point))
            .min_by(f64::total_cmp),
    }
}

/// Hit-test one stroke.
///
/// The stroke is hit when the point lies within half of
/// [`HitParams::stroke_width`] plus [`HitParams::stroke_tolerance`] of it.
pub fn hit_locus(locus: &Locus, point: Point, params: &HitParams) -> Option<StrokeHit> {
    let distance = polyline_distance(&locus.points, point)?;
    let limit = params.stroke_width / 2.0 + params.stroke_tolerance;
    (distance <= limit).then_some(StrokeHit {
        id: locus.id,
        distance,
    })
}

/// The closest stroke hit by `point`; among equally close strokes the first wins.
pub fn locus_hit(loci: &[Locus], point: Point, params: &HitParams) -> Option<StrokeHit> {
    loci.iter()
        .filter_map(|locus| hit_locus(locus, point, params))
        .min_by(StrokeHit::cmp_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_page::PenType;

    fn params() -> HitParams {
        HitParams {
            stroke_width: 2.0,
            ..HitParams::default()
        }
    }

    #[test]
    fn stroked_polyline_hit_and_miss() {
        let locus = Locus::new(3, PenType::Region(0), [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);

        let on_corner = hit_locus(&locus, Point::new(10.0, 0.0), &params()).unwrap();
        assert_eq!(on_corner.distance, 0.0);
        assert_eq!(on_corner.id, LocusId(3));

        let near = hit_locus(&locus, Point::new(9.5, 5.0), &params()).unwrap();
        assert_eq!(near.distance, 0.5);

        assert!(hit_locus(&locus, Point::new(5.0, 5.0), &params()).is_none());
    }

    #[test]
    fn tolerance_widens_reach() {
        let locus = Locus::new(0, PenType::Memo, [(0.0, 0.0), (10.0, 0.0)]);
        let point = Point::new(5.0, 2.0);
        assert!(hit_locus(&locus, point, &params()).is_none());
        let tolerant = HitParams {
            stroke_tolerance: 1.0,
            ..params()
        };
        assert!(hit_locus(&locus, point, &tolerant).is_some());
    }

    #[test]
    fn single_point_and_empty_strokes() {
        let dot = Locus::new(0, PenType::Memo, [(1.0, 1.0)]);
        assert_eq!(polyline_distance(&dot.points, Point::new(1.0, 1.5)), Some(0.5));
        let empty = Locus::new(1, PenType::Memo, core::iter::empty::<Point>());
        assert!(hit_locus(&empty, Point::ZERO, &params()).is_none());
    }

    #[test]
    fn closest_stroke_wins() {
        let loci = [
            Locus::new(0, PenType::Region(0), [(0.0, 0.0), (10.0, 0.0)]),
            Locus::new(1, PenType::Region(0), [(0.0, 1.0), (10.0, 1.0)]),
            Locus::new(2, PenType::Region(0), [(0.0, 1.0), (10.0, 1.0)]),
        ];
        let hit = locus_hit(&loci, Point::new(5.0, 0.8), &params()).unwrap();
        assert_eq!(hit.id, LocusId(1));
        assert!(locus_hit(&loci, Point::new(5.0, 9.0), &params()).is_none());
    }
}
