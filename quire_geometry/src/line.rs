// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment predicates and stroke-chord classification.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point};

/// How a region's children are arranged.
///
/// [`Horizontal`](Self::Horizontal) places children side by side along `x`
/// (the cuts are vertical strokes); [`Vertical`](Self::Vertical) stacks them
/// along `y` (the cuts are horizontal strokes).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitDirection {
    /// Children are laid out left to right.
    Horizontal,
    /// Children are laid out top to bottom.
    #[default]
    Vertical,
}

impl SplitDirection {
    /// The other direction.
    pub const fn invert(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Strict crossing test for two segments using cross products.
///
/// Segments that merely touch (an endpoint lying on the other segment) or are
/// collinear do not intersect.
pub fn intersects_segments(a: Line, b: Line) -> bool {
    let cross = |o: Point, p: Point, q: Point| (p - o).cross(q - o);
    let s0 = cross(a.p0, a.p1, b.p0);
    let t0 = cross(a.p0, a.p1, b.p1);
    let s1 = cross(b.p0, b.p1, a.p0);
    let t1 = cross(b.p0, b.p1, a.p1);
    s0 * t0 < 0.0 && s1 * t1 < 0.0
}

/// Whether a polyline crosses itself.
///
/// Every pair of non-adjacent segments is tested with [`intersects_segments`].
/// Polylines with fewer than four points cannot cross themselves.
pub fn circulates(points: &[Point]) -> bool {
    let segments = points.len().saturating_sub(1);
    for i in 0..segments {
        let a = Line::new(points[i], points[i + 1]);
        for j in (i + 2)..segments {
            if intersects_segments(a, Line::new(points[j], points[j + 1])) {
                return true;
            }
        }
    }
    false
}

/// Distance from `point` to the closed segment `line`.
///
/// Degenerate segments measure the distance to their single point.
pub fn distance_to_segment(line: Line, point: Point) -> f64 {
    let v = line.p1 - line.p0;
    let w = point - line.p0;
    let len2 = v.hypot2();
    let t = if len2 > 0.0 { w.dot(v) / len2 } else { 0.0 };
    let projected = line.p0 + v * t.clamp(0.0, 1.0);
    (point - projected).hypot()
}

/// Classify a chord by the split it implies.
///
/// Chords within 45° of the horizontal axis (exclusive) stack children
/// vertically; everything else, including degenerate chords, splits
/// horizontally.
pub fn judge_direction(line: Line) -> SplitDirection {
    let d = line.p1 - line.p0;
    if d.y.abs() < d.x.abs() {
        SplitDirection::Vertical
    } else {
        SplitDirection::Horizontal
    }
}

/// Angle of a chord in degrees, folded into `[-90, 90)`.
///
/// The chord's direction angle is shifted by 180°, reduced modulo 180°, and
/// shifted down by 90°. In page coordinates (y pointing down) a stroke rising
/// to the right at 45° measures `45.0`, while one falling to the right
/// measures `-45.0`.
pub fn chord_angle(line: Line) -> f64 {
    let d = line.p1 - line.p0;
    let degrees = d.y.atan2(d.x).to_degrees();
    let mut folded = (degrees + 180.0) % 180.0;
    if folded < 0.0 {
        folded += 180.0;
    }
    folded - 90.0
}

/// Snap a chord onto its axis.
///
/// A chord that splits [`Horizontal`](SplitDirection::Horizontal)ly becomes
/// vertical at the mean `x` of its endpoints; one that splits
/// [`Vertical`](SplitDirection::Vertical)ly becomes horizontal at the mean `y`.
/// The other coordinate of each endpoint is kept.
pub fn straighten(line: Line, direction: SplitDirection) -> Line {
    match direction {
        SplitDirection::Horizontal => {
            let x = (line.p0.x + line.p1.x) / 2.0;
            Line::new((x, line.p0.y), (x, line.p1.y))
        }
        SplitDirection::Vertical => {
            let y = (line.p0.y + line.p1.y) / 2.0;
            Line::new((line.p0.x, y), (line.p1.x, y))
        }
    }
}

/// The coordinate at which a chord splits along `direction`: mean `x` for
/// horizontal splits, mean `y` for vertical ones.
pub fn axis_midpoint(line: Line, direction: SplitDirection) -> f64 {
    match direction {
        SplitDirection::Horizontal => (line.p0.x + line.p1.x) / 2.0,
        SplitDirection::Vertical => (line.p0.y + line.p1.y) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments_intersect() {
        let a = Line::new((0.0, 0.0), (10.0, 10.0));
        let b = Line::new((0.0, 10.0), (10.0, 0.0));
        assert!(intersects_segments(a, b));
        assert!(intersects_segments(b, a));
    }

    #[test]
    fn touching_segments_do_not_intersect() {
        let a = Line::new((0.0, 0.0), (10.0, 0.0));
        let t = Line::new((5.0, 0.0), (5.0, 10.0));
        assert!(!intersects_segments(a, t), "endpoint on segment is not a crossing");
        let collinear = Line::new((2.0, 0.0), (12.0, 0.0));
        assert!(!intersects_segments(a, collinear));
    }

    #[test]
    fn closed_loop_circulates() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(1.0, -1.0),
        ];
        assert!(circulates(&square));

        let open = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(!circulates(&open));
        assert!(!circulates(&[Point::new(0.0, 0.0)]));
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let line = Line::new((0.0, 0.0), (10.0, 0.0));
        assert_eq!(distance_to_segment(line, Point::new(5.0, 3.0)), 3.0);
        assert_eq!(distance_to_segment(line, Point::new(13.0, 4.0)), 5.0);
        let dot = Line::new((1.0, 1.0), (1.0, 1.0));
        assert_eq!(distance_to_segment(dot, Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn direction_uses_45_degree_boundary() {
        assert_eq!(
            judge_direction(Line::new((0.0, 0.0), (10.0, 9.0))),
            SplitDirection::Vertical
        );
        assert_eq!(
            judge_direction(Line::new((0.0, 0.0), (10.0, 10.0))),
            SplitDirection::Horizontal
        );
        assert_eq!(
            judge_direction(Line::new((3.0, 3.0), (3.0, 3.0))),
            SplitDirection::Horizontal
        );
    }

    #[test]
    fn chord_angle_folds_direction() {
        const EPSILON: f64 = 1e-9;
        let rising = Line::new((0.0, 10.0), (10.0, 0.0));
        assert!((chord_angle(rising) - 45.0).abs() < EPSILON);
        // Drawing the same stroke in reverse gives the same angle.
        let reversed = Line::new((10.0, 0.0), (0.0, 10.0));
        assert!((chord_angle(reversed) - 45.0).abs() < EPSILON);
        let falling = Line::new((0.0, 0.0), (10.0, 10.0));
        assert!((chord_angle(falling) + 45.0).abs() < EPSILON);
    }

    #[test]
    fn straighten_keeps_extent() {
        let wobbly = Line::new((49.0, 0.0), (51.0, 100.0));
        let snapped = straighten(wobbly, SplitDirection::Horizontal);
        assert_eq!(snapped, Line::new((50.0, 0.0), (50.0, 100.0)));
        assert_eq!(axis_midpoint(wobbly, SplitDirection::Horizontal), 50.0);
    }
}
