// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive partition of the page by separator lines.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::{Line, Rect};
use quire_geometry::{Edge, Edges, SplitDirection, contains_segment, intersects_segments, straighten};
use quire_region_tree::{NodeId, Region, RegionTree, TreeError, child_rects};

use crate::classify::SeparatorLine;
use crate::locus::LocusId;

/// The strokes that created each edge of a region, keyed by region.
///
/// Only regions created by a split have an entry, and only the edges shared
/// with a sibling are set.
pub type LineIdAlignment = BTreeMap<NodeId, Edges<Option<LocusId>>>;

/// A region tree derived from separator lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    /// The regions; layout leaves have no children yet.
    pub tree: RegionTree,
    /// Which stroke each region edge came from.
    pub alignment: LineIdAlignment,
}

/// The segments from the rectangle's edges to the ends of a straightened
/// line, along the line's own axis.
fn judged_segments(line: Line, rect: Rect, direction: SplitDirection) -> [Line; 2] {
    match direction {
        SplitDirection::Horizontal => {
            let x = line.p0.x;
            let (top, bottom) = (line.p0.y.min(line.p1.y), line.p0.y.max(line.p1.y));
            [
                Line::new((x, rect.y0), (x, top)),
                Line::new((x, bottom), (x, rect.y1)),
            ]
        }
        SplitDirection::Vertical => {
            let y = line.p0.y;
            let (left, right) = (line.p0.x.min(line.p1.x), line.p0.x.max(line.p1.x));
            [
                Line::new((rect.x0, y), (left, y)),
                Line::new((right, y), (rect.x1, y)),
            ]
        }
    }
}

/// Cuts closer than this, as a fraction of the region, coincide.
const RATIO_EPSILON: f64 = 1e-9;

/// Position of a straightened line across `rect`, as a fraction of its extent.
fn ratio_in(line: Line, rect: Rect, direction: SplitDirection) -> f64 {
    match direction {
        SplitDirection::Horizontal => (line.p0.x - rect.x0) / rect.width(),
        SplitDirection::Vertical => (line.p0.y - rect.y0) / rect.height(),
    }
}

/// Pick the lines that split `rect` next.
///
/// A line can split only if neither of its extensions to the rectangle's
/// edges is crossed by another candidate and it lies strictly inside the
/// rectangle. Among those, the lowest priority wins; if both split
/// directions remain, the one perpendicular to `parent` wins. Lines at the
/// same position cut once, by the first of them in input order.
///
/// Returns the cuts sorted by ratio and the ids of every chosen line,
/// including those merged into a coinciding cut.
fn choose_cuts(
    lines: &[SeparatorLine],
    rect: Rect,
    parent: SplitDirection,
) -> (Vec<(f64, SeparatorLine)>, Vec<LocusId>) {
    let divisible: Vec<(f64, SeparatorLine)> = lines
        .iter()
        .enumerate()
        .filter(|&(i, sep)| {
            let judged = judged_segments(sep.line, rect, sep.direction);
            lines.iter().enumerate().all(|(j, other)| {
                i == j || judged.iter().all(|&seg| !intersects_segments(seg, other.line))
            })
        })
        .filter_map(|(_, sep)| {
            let ratio = ratio_in(sep.line, rect, sep.direction);
            if ratio > 0.0 && ratio < 1.0 {
                Some((ratio, *sep))
            } else {
                log::trace!("separator {:?} lies on the edge of {rect:?}", sep.id);
                None
            }
        })
        .collect();

    let Some(priority) = divisible.iter().map(|(_, sep)| sep.priority).min() else {
        return (Vec::new(), Vec::new());
    };
    let mut cuts: Vec<(f64, SeparatorLine)> = divisible
        .into_iter()
        .filter(|(_, sep)| sep.priority == priority)
        .collect();
    let first = cuts[0].1.direction;
    if cuts.iter().any(|(_, sep)| sep.direction != first) {
        let preferred = parent.invert();
        cuts.retain(|(_, sep)| sep.direction == preferred);
    }
    cuts.sort_by(|a, b| a.0.total_cmp(&b.0));

    let chosen: Vec<LocusId> = cuts.iter().map(|(_, sep)| sep.id).collect();
    cuts.dedup_by(|next, kept| {
        let same = (next.0 - kept.0).abs() < RATIO_EPSILON;
        if same {
            log::trace!("separator {:?} coincides with {:?}", next.1.id, kept.1.id);
        }
        same
    });
    (cuts, chosen)
}

/// Partition `page` by separator lines.
///
/// Every separator is first straightened onto its axis. Regions are split
/// depth first. A line can split a region when neither of its extensions to
/// the region's edges is crossed by another line still in play; of those, the
/// lowest priority wins, and if both split directions remain, the one
/// perpendicular to the parent's split wins. The region is cut at the chosen
/// lines and each child receives the remaining lines that reach into its
/// rectangle. A region no line can split is a layout leaf.
///
/// The root is treated as the child of a region split along `root_parent`.
pub fn partition(
    separators: &[SeparatorLine],
    page: Rect,
    root_parent: SplitDirection,
) -> Result<Partition, TreeError> {
    let straightened: Vec<SeparatorLine> = separators
        .iter()
        .map(|sep| SeparatorLine {
            line: straighten(sep.line, sep.direction),
            ..*sep
        })
        .collect();

    let mut tree = RegionTree::new(Region::default());
    let mut alignment = LineIdAlignment::new();
    let mut stack: Vec<(NodeId, Rect, Vec<SeparatorLine>, SplitDirection)> =
        alloc::vec![(tree.root(), page, straightened, root_parent)];

    while let Some((id, rect, lines, parent)) = stack.pop() {
        let (cuts, chosen) = choose_cuts(&lines, rect, parent);
        let Some(&(_, first)) = cuts.first() else {
            log::trace!("{id} is a layout leaf at {rect:?}");
            continue;
        };
        let split = first.direction;
        let ratios: Vec<f64> = cuts.iter().map(|&(ratio, _)| ratio).collect();
        let children = tree.split(id, split, &ratios)?;
        log::trace!("{id} split {split:?} at {ratios:?}");

        let before = match split {
            SplitDirection::Horizontal => Edge::Left,
            SplitDirection::Vertical => Edge::Top,
        };
        let after = before.opposite();
        let last = children.len() - 1;
        for (i, &child) in children.iter().enumerate() {
            let mut edges = Edges::<Option<LocusId>>::default();
            if i > 0 {
                *edges.get_mut(before) = Some(cuts[i - 1].1.id);
            }
            if i < last {
                *edges.get_mut(after) = Some(cuts[i].1.id);
            }
            alignment.insert(child, edges);
        }

        let rest: Vec<SeparatorLine> = lines
            .into_iter()
            .filter(|sep| !chosen.contains(&sep.id))
            .collect();
        let shares: Vec<(f64, f64)> = children
            .iter()
            .filter_map(|&c| tree.region(c).map(|r| (r.ratio, r.gap)))
            .collect();
        let rects = child_rects(rect, split, &shares);
        for (&child, &child_rect) in children.iter().zip(rects.iter()).rev() {
            let inside: Vec<SeparatorLine> = rest
                .iter()
                .filter(|sep| contains_segment(child_rect, sep.line))
                .copied()
                .collect();
            stack.push((child, child_rect, inside, split));
        }
    }

    tree.validate()?;
    log::debug!(
        "partitioned page into {} regions from {} separators",
        tree.node_count(),
        separators.len()
    );
    Ok(Partition { tree, alignment })
}
