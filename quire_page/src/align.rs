// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equal-spacing constraints on separators.

use alloc::vec::Vec;

use kurbo::{Line, Point, Size};
use quire_geometry::{SplitDirection, axis_midpoint, intersects_segments, judge_direction};

use crate::classify::SeparatorLine;

/// Space the separators crossed by each constraint chord evenly.
///
/// A constraint drawn across the page (left to right or right to left)
/// targets the vertical separators it crosses; one drawn down the page targets
/// horizontal separators. The targets are spread evenly between the nearest
/// untouched separators crossed by extending the chord to the page edges, or
/// the page edges themselves, keeping their order along the chord.
///
/// Constraints apply in order, each seeing the result of the previous one.
/// Separators keep their position in the list.
pub fn apply_constraints(
    mut separators: Vec<SeparatorLine>,
    constraints: &[Line],
    page: Size,
) -> Vec<SeparatorLine> {
    for &constraint in constraints {
        // The split the targets make: vertical strokes split horizontally.
        let split = judge_direction(constraint).invert();
        let chord = normalized(constraint, split);
        let (head, tail) = match split {
            SplitDirection::Horizontal => (
                Line::new((0.0, chord.p0.y), chord.p0),
                Line::new(chord.p1, (page.width, chord.p1.y)),
            ),
            SplitDirection::Vertical => (
                Line::new((chord.p0.x, 0.0), chord.p0),
                Line::new(chord.p1, (chord.p1.x, page.height)),
            ),
        };
        let extent = match split {
            SplitDirection::Horizontal => page.width,
            SplitDirection::Vertical => page.height,
        };

        let mut targets: Vec<usize> = Vec::new();
        let mut lo: f64 = 0.0;
        let mut hi: f64 = extent;
        let mut bounded_lo = false;
        let mut bounded_hi = false;
        for (i, sep) in separators.iter().enumerate() {
            if sep.direction != split {
                continue;
            }
            if intersects_segments(sep.line, chord) {
                targets.push(i);
                continue;
            }
            let at = axis_midpoint(sep.line, split);
            if intersects_segments(sep.line, head) {
                lo = if bounded_lo { lo.max(at) } else { at };
                bounded_lo = true;
            }
            if intersects_segments(sep.line, tail) {
                hi = if bounded_hi { hi.min(at) } else { at };
                bounded_hi = true;
            }
        }
        if targets.is_empty() {
            log::debug!("constraint {constraint:?} crosses no separators");
            continue;
        }

        targets.sort_by(|&a, &b| {
            axis_midpoint(separators[a].line, split).total_cmp(&axis_midpoint(separators[b].line, split))
        });
        let step = (hi - lo) / (targets.len() + 1) as f64;
        for (k, &i) in targets.iter().enumerate() {
            let at = lo + step * (k + 1) as f64;
            let line = separators[i].line;
            separators[i].line = match split {
                SplitDirection::Horizontal => Line::new((at, line.p0.y), (at, line.p1.y)),
                SplitDirection::Vertical => Line::new((line.p0.x, at), (line.p1.x, at)),
            };
        }
        log::debug!(
            "constraint spaced {} separators between {lo} and {hi}",
            targets.len()
        );
    }
    separators
}

/// Order a constraint chord so it runs toward increasing coordinates along
/// the axis it crosses separators on.
fn normalized(chord: Line, split: SplitDirection) -> Line {
    let key = |p: Point| match split {
        SplitDirection::Horizontal => p.x,
        SplitDirection::Vertical => p.y,
    };
    if key(chord.p1) < key(chord.p0) {
        Line::new(chord.p1, chord.p0)
    } else {
        chord
    }
}
