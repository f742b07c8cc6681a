// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle predicates.

use kurbo::{Line, Point, Rect};

use crate::edges::{Edge, Edges};
use crate::line::intersects_segments;

/// Inclusive point containment: points on the boundary are inside.
///
/// Unlike [`Rect::contains`], which is half-open, both the `x1` and `y1`
/// edges count.
pub fn contains_point(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// The segment along one edge of `rect`, running clockwise.
pub fn edge_line(rect: Rect, edge: Edge) -> Line {
    match edge {
        Edge::Top => Line::new((rect.x0, rect.y0), (rect.x1, rect.y0)),
        Edge::Right => Line::new((rect.x1, rect.y0), (rect.x1, rect.y1)),
        Edge::Bottom => Line::new((rect.x1, rect.y1), (rect.x0, rect.y1)),
        Edge::Left => Line::new((rect.x0, rect.y1), (rect.x0, rect.y0)),
    }
}

/// Whether a segment touches the rectangle's interior.
///
/// True if the segment strictly crosses one of the four edges or if either
/// endpoint lies inside (inclusively).
pub fn contains_segment(rect: Rect, line: Line) -> bool {
    Edge::ALL
        .into_iter()
        .any(|edge| intersects_segments(edge_line(rect, edge), line))
        || contains_point(rect, line.p0)
        || contains_point(rect, line.p1)
}

/// Strict overlap: rectangles that only share an edge do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0.max(b.x0) < a.x1.min(b.x1) && a.y0.max(b.y0) < a.y1.min(b.y1)
}

/// Shrink `rect` by per-edge insets (margin or padding).
///
/// Insets larger than the rectangle produce a negative-size result; callers
/// that need a valid box should check [`Rect::width`] and [`Rect::height`].
pub fn strip_insets(rect: Rect, insets: &Edges<f64>) -> Rect {
    Rect::new(
        rect.x0 + insets.left,
        rect.y0 + insets.top,
        rect.x1 - insets.right,
        rect.y1 - insets.bottom,
    )
}

/// The axis-aligned bounding box of a set of points, or `None` when empty.
pub fn bounding_rect(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_points_are_contained() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(contains_point(r, Point::new(10.0, 10.0)));
        assert!(contains_point(r, Point::new(0.0, 5.0)));
        assert!(!contains_point(r, Point::new(10.1, 5.0)));
        // kurbo's own containment is half-open.
        assert!(!r.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn segment_containment() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let passing_through = Line::new((-5.0, 5.0), (15.0, 5.0));
        assert!(contains_segment(r, passing_through));
        let inside = Line::new((2.0, 2.0), (3.0, 3.0));
        assert!(contains_segment(r, inside));
        let outside = Line::new((12.0, 0.0), (12.0, 10.0));
        assert!(!contains_segment(r, outside));
        let along_edge = Line::new((0.0, -5.0), (0.0, -1.0));
        assert!(!contains_segment(r, along_edge));
    }

    #[test]
    fn shared_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert!(!overlaps(a, b));
        let c = Rect::new(9.0, 9.0, 20.0, 20.0);
        assert!(overlaps(a, c));
        assert!(overlaps(c, a));
    }

    #[test]
    fn insets_shrink_each_edge() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let stripped = strip_insets(r, &Edges::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(stripped, Rect::new(4.0, 1.0, 98.0, 47.0));
    }

    #[test]
    fn bounding_rect_of_points() {
        assert_eq!(bounding_rect(&[]), None);
        let pts = [Point::new(3.0, 7.0), Point::new(-1.0, 2.0), Point::new(5.0, 4.0)];
        assert_eq!(bounding_rect(&pts), Some(Rect::new(-1.0, 2.0, 5.0, 7.0)));
    }
}
