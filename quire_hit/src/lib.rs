// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing over derived page layouts.
//!
//! These helpers answer the questions an editing surface asks of a
//! [`Layout`] produced by `quire_page`: which region is under the pointer,
//! whether the pointer is on a region border that can be dragged, and which
//! stroke made that border.
//!
//! # Key types
//!
//! - [`HitParams`] – per-query parameters: the width of the band around
//!   region edges that counts as the border, and a tolerance for stroke hits.
//! - [`surface_hit`] – the first region containing every given point.
//! - [`border_hit`] – the first region edge whose band contains a point,
//!   skipping edges that belong to the parent region.
//! - [`stroke_for_border`] and [`border_neighbor`] – what a border drag
//!   affects.
//!
//! The [`stroke`] module hit-tests the strokes themselves, for erasing and
//! moving them.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quire_geometry::{Edge, SplitDirection};
//! use quire_hit::{HitParams, border_hit};
//! use quire_region_tree::{Decorations, Region, RegionTree, WritingDirection};
//!
//! let mut tree = RegionTree::new(Region::default());
//! let root = tree.root();
//! let cols = tree.split(root, SplitDirection::Horizontal, &[0.5]).unwrap();
//! let tree = tree.with_text_containers(WritingDirection::Horizontal);
//! let layout = tree.resolve(Rect::new(0.0, 0.0, 100.0, 100.0), &Decorations::new()).unwrap();
//!
//! // The shared edge is reported once, as the right edge of the first column.
//! let (info, edge) = border_hit(Point::new(52.0, 40.0), &tree, &layout, &HitParams::default()).unwrap();
//! assert_eq!((info.id, edge), (cols[0], Edge::Right));
//! ```

#![no_std]

extern crate alloc;

use kurbo::{Point, Rect};
use quire_geometry::{Edge, SplitDirection, contains_point};
use quire_page::{LineIdAlignment, LocusId};
use quire_region_tree::{Layout, NodeId, RegionInfo, RegionTree};

/// Stroke hit testing.
pub mod stroke;

/// Parameters controlling hit tests.
#[derive(Clone, Copy, Debug)]
pub struct HitParams {
    /// Width of the band centered on each region edge that counts as the
    /// border, in millimeters.
    pub stroke_width: f64,
    /// Extra reach for stroke hits beyond half of [`stroke_width`](Self::stroke_width).
    pub stroke_tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            stroke_width: 8.0,
            stroke_tolerance: 0.0,
        }
    }
}

/// The bands of width `width` centered on each edge of `rect`, in test order:
/// left, right, top, bottom.
///
/// Side bands span the rectangle's height and the top and bottom bands its
/// width, so corners belong to the side bands.
pub fn border_bands(rect: Rect, width: f64) -> [(Edge, Rect); 4] {
    let half = width / 2.0;
    [
        (Edge::Left, Rect::new(rect.x0 - half, rect.y0, rect.x0 + half, rect.y1)),
        (Edge::Right, Rect::new(rect.x1 - half, rect.y0, rect.x1 + half, rect.y1)),
        (Edge::Top, Rect::new(rect.x0, rect.y0 - half, rect.x1, rect.y0 + half)),
        (Edge::Bottom, Rect::new(rect.x0, rect.y1 - half, rect.x1, rect.y1 + half)),
    ]
}

/// The first region, in tree order, whose rectangle contains every point.
///
/// With no points this is the root.
pub fn surface_hit<'a>(points: &[Point], layout: &'a Layout) -> Option<&'a RegionInfo> {
    layout
        .regions
        .iter()
        .find(|info| points.iter().all(|&p| contains_point(info.rect, p)))
}

/// Whether `edge` of region `id` is drawn by its parent rather than by `id`.
///
/// Edges across the parent's split axis are the parent's own edges, as are
/// the leading edge of the first child and the trailing edge of the last.
fn owned_by_parent(tree: &RegionTree, id: NodeId, edge: Edge) -> bool {
    let Some(parent) = tree.parent_of(id) else {
        return false;
    };
    let Some(split) = tree.region(parent).map(|r| r.split) else {
        return false;
    };
    let siblings = tree.children_of(parent);
    let first = siblings.first() == Some(&id);
    let last = siblings.last() == Some(&id);
    match (split, edge) {
        (SplitDirection::Horizontal, Edge::Top | Edge::Bottom)
        | (SplitDirection::Vertical, Edge::Left | Edge::Right) => true,
        (_, Edge::Top | Edge::Left) => first,
        (_, Edge::Bottom | Edge::Right) => last,
    }
}

/// The first region edge, in tree order, whose border band contains `point`.
///
/// Each region's bands are tested left, right, top, bottom (see
/// [`border_bands`]). Edges owned by the parent region are skipped, so an edge
/// shared by two siblings is reported once, as the trailing edge of the
/// earlier sibling.
pub fn border_hit<'a>(
    point: Point,
    tree: &RegionTree,
    layout: &'a Layout,
    params: &HitParams,
) -> Option<(&'a RegionInfo, Edge)> {
    layout.regions.iter().find_map(|info| {
        border_bands(info.rect, params.stroke_width)
            .into_iter()
            .find(|&(edge, band)| contains_point(band, point) && !owned_by_parent(tree, info.id, edge))
            .map(|(edge, _)| (info, edge))
    })
}

/// The sibling on the other side of `edge` of region `id`.
pub fn border_neighbor(tree: &RegionTree, id: NodeId, edge: Edge) -> Option<NodeId> {
    let siblings = tree.children_of(tree.parent_of(id)?);
    let pos = siblings.iter().position(|&s| s == id)?;
    let next = match edge {
        Edge::Top | Edge::Left => pos.checked_sub(1)?,
        Edge::Bottom | Edge::Right => pos + 1,
    };
    siblings
        .get(next)
        .copied()
        .filter(|&s| tree.region(s).is_some())
}

/// The stroke that created `edge` of region `id`, if any.
pub fn stroke_for_border(alignment: &LineIdAlignment, id: NodeId, edge: Edge) -> Option<LocusId> {
    alignment.get(&id).and_then(|edges| *edges.get(edge))
}
