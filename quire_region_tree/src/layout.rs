// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout resolution: absolute rectangles for every region and text container.

use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::{Point, Rect};
use quire_geometry::{Edges, SplitDirection, contains_point, strip_insets};
use smallvec::SmallVec;

use crate::decoration::{Border, BoxDecoration};
use crate::error::TreeError;
use crate::tree::RegionTree;
use crate::types::{NodeId, NodeKind, TextId, WritingDirection};

/// Box decorations keyed by the region they apply to.
pub type Decorations = HashMap<NodeId, BoxDecoration>;

bitflags::bitflags! {
    /// Structural flags recorded on a [`RegionInfo`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InfoFlags: u8 {
        /// The region has no region children (it hosts a text container).
        const LEAF = 0b0000_0001;
        /// The region is the root of its tree.
        const ROOT = 0b0000_0010;
    }
}

/// Filters applied to region lookups on a [`Layout`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RegionFilter {
    /// Only regions containing all these flags are included.
    pub required_flags: InfoFlags,
}

impl RegionFilter {
    /// Create a new empty filter (includes all regions).
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter to layout leaves.
    pub fn leaf(mut self) -> Self {
        self.required_flags |= InfoFlags::LEAF;
        self
    }

    /// Check if a region's flags satisfy this filter.
    pub fn matches(&self, flags: InfoFlags) -> bool {
        flags.contains(self.required_flags)
    }
}

/// Resolved geometry of a region.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionInfo {
    /// The region node.
    pub id: NodeId,
    /// Absolute rectangle, after the region's margin was removed.
    pub rect: Rect,
    /// The decoration that was applied (all zeros when undecorated).
    pub decoration: BoxDecoration,
    /// Structural flags.
    pub flags: InfoFlags,
}

impl RegionInfo {
    /// Whether this region hosts a text container rather than child regions.
    pub fn is_leaf(&self) -> bool {
        self.flags.contains(InfoFlags::LEAF)
    }

    /// The rectangle handed to children: [`rect`](Self::rect) minus padding.
    pub fn content_rect(&self) -> Rect {
        strip_insets(self.rect, &self.decoration.padding)
    }
}

/// Resolved geometry of a text container, or of one piece of it.
#[derive(Clone, Debug, PartialEq)]
pub struct TextInfo {
    /// Identifier of this rectangle.
    pub id: TextId,
    /// The leaf region hosting the container.
    pub region: NodeId,
    /// Absolute rectangle.
    pub rect: Rect,
    /// Writing direction of the container.
    pub direction: WritingDirection,
    /// Border of the container.
    pub border: Edges<Border>,
}

/// The read-only projection of a [`RegionTree`] onto a page.
///
/// Both lists are in depth-first pre-order of the tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Every region, root first.
    pub regions: Vec<RegionInfo>,
    /// Every text container.
    pub texts: Vec<TextInfo>,
}

impl Layout {
    /// The resolved region with the given id.
    pub fn region(&self, id: NodeId) -> Option<&RegionInfo> {
        self.regions.iter().find(|info| info.id == id)
    }

    /// The resolved text rectangle with the given id.
    pub fn text(&self, id: TextId) -> Option<&TextInfo> {
        self.texts.iter().find(|info| info.id == id)
    }

    /// The text container hosted by a leaf region.
    pub fn text_in(&self, region: NodeId) -> Option<&TextInfo> {
        self.texts.iter().find(|info| info.region == region)
    }

    /// Regions whose rectangle contains `point` (boundary inclusive), in tree order.
    pub fn regions_containing(
        &self,
        point: Point,
        filter: RegionFilter,
    ) -> impl Iterator<Item = &RegionInfo> + '_ {
        self.regions
            .iter()
            .filter(move |info| filter.matches(info.flags) && contains_point(info.rect, point))
    }
}

/// Divide a content rectangle among children along `split`.
///
/// Each share is a `(ratio, gap)` pair. The extent available to children is
/// reduced by the gaps of every child but the first, and each non-first child
/// is preceded by its gap. The cross axis is unchanged.
pub fn child_rects(content: Rect, split: SplitDirection, shares: &[(f64, f64)]) -> SmallVec<[Rect; 4]> {
    let gaps: f64 = shares.iter().skip(1).map(|&(_, gap)| gap).sum();
    let mut rects = SmallVec::with_capacity(shares.len());
    match split {
        SplitDirection::Horizontal => {
            let available = content.width() - gaps;
            let mut x = content.x0;
            for (i, &(ratio, gap)) in shares.iter().enumerate() {
                if i > 0 {
                    x += gap;
                }
                let w = available * ratio;
                rects.push(Rect::new(x, content.y0, x + w, content.y1));
                x += w;
            }
        }
        SplitDirection::Vertical => {
            let available = content.height() - gaps;
            let mut y = content.y0;
            for (i, &(ratio, gap)) in shares.iter().enumerate() {
                if i > 0 {
                    y += gap;
                }
                let h = available * ratio;
                rects.push(Rect::new(content.x0, y, content.x1, y + h));
                y += h;
            }
        }
    }
    rects
}

impl RegionTree {
    /// Compute absolute rectangles for every node, starting from `page`.
    ///
    /// A region's recorded rectangle is the rectangle it receives minus its
    /// margin; its children share that rectangle minus its padding. Text
    /// containers occupy the full content rectangle of their region. Regions
    /// missing from `decorations` are undecorated.
    ///
    /// Every region must have children, so call
    /// [`with_text_containers`](Self::with_text_containers) first.
    pub fn resolve(&self, page: Rect, decorations: &Decorations) -> Result<Layout, TreeError> {
        let mut layout = Layout::default();
        let mut stack: Vec<(NodeId, Rect)> = alloc::vec![(self.root(), page)];

        while let Some((id, incoming)) = stack.pop() {
            let Some(kind) = self.get(id) else {
                continue;
            };
            match kind {
                NodeKind::Text(text) => {
                    let Some(region) = self.parent_of(id) else {
                        continue;
                    };
                    layout.texts.push(TextInfo {
                        id: TextId::Container(id),
                        region,
                        rect: incoming,
                        direction: text.direction,
                        border: text.border,
                    });
                }
                NodeKind::Region(region) => {
                    let children = self.children_of(id);
                    if children.is_empty() {
                        return Err(TreeError::EmptyRegion(id));
                    }
                    let decoration = decorations.get(&id).copied().unwrap_or_default();
                    let rect = strip_insets(incoming, &decoration.margin);
                    let mut flags = InfoFlags::empty();
                    if self.is_layout_leaf(id) {
                        flags |= InfoFlags::LEAF;
                    }
                    if id == self.root() {
                        flags |= InfoFlags::ROOT;
                    }
                    let info = RegionInfo {
                        id,
                        rect,
                        decoration,
                        flags,
                    };
                    let content = info.content_rect();
                    layout.regions.push(info);

                    let shares: SmallVec<[(f64, f64); 4]> = children
                        .iter()
                        .map(|&c| match self.get(c) {
                            Some(NodeKind::Region(r)) => (r.ratio, r.gap),
                            _ => (1.0, 0.0),
                        })
                        .collect();
                    let rects = if flags.contains(InfoFlags::LEAF) {
                        SmallVec::from_elem(content, children.len())
                    } else {
                        child_rects(content, region.split, &shares)
                    };
                    for (&child, &r) in children.iter().zip(rects.iter()).rev() {
                        stack.push((child, r));
                    }
                }
            }
        }

        log::debug!(
            "resolved {} regions and {} text containers",
            layout.regions.len(),
            layout.texts.len()
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Region;

    const PAGE: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    fn columns() -> (RegionTree, NodeId, NodeId) {
        let mut tree = RegionTree::new(Region::default());
        let root = tree.root();
        let cols = tree
            .split(root, SplitDirection::Horizontal, &[0.25])
            .unwrap();
        (
            tree.with_text_containers(WritingDirection::Horizontal),
            cols[0],
            cols[1],
        )
    }

    #[test]
    fn child_rects_scale_along_split() {
        let rects = child_rects(PAGE, SplitDirection::Horizontal, &[(0.25, 0.0), (0.75, 0.0)]);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(rects[1], Rect::new(50.0, 0.0, 200.0, 100.0));

        let rects = child_rects(PAGE, SplitDirection::Vertical, &[(0.5, 0.0), (0.5, 0.0)]);
        assert_eq!(rects[1], Rect::new(0.0, 50.0, 200.0, 100.0));
    }

    #[test]
    fn gaps_separate_siblings() {
        let rects = child_rects(PAGE, SplitDirection::Horizontal, &[(0.5, 7.0), (0.5, 10.0)]);
        // The first child's gap is ignored.
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 95.0, 100.0));
        assert_eq!(rects[1], Rect::new(105.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn resolve_undecorated() {
        let (tree, left, right) = columns();
        let layout = tree.resolve(PAGE, &Decorations::new()).unwrap();

        let ids: Vec<NodeId> = layout.regions.iter().map(|r| r.id).collect();
        assert_eq!(ids, [tree.root(), left, right]);
        assert!(layout.regions[0].flags.contains(InfoFlags::ROOT));
        assert!(!layout.regions[0].is_leaf());
        assert!(layout.regions[1].is_leaf());

        assert_eq!(layout.texts.len(), 2);
        assert_eq!(layout.text_in(left).unwrap().rect, Rect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(layout.text_in(right).unwrap().rect, Rect::new(50.0, 0.0, 200.0, 100.0));
        assert_eq!(layout.regions[1].decoration, BoxDecoration::default());
    }

    #[test]
    fn margin_then_padding() {
        let (tree, left, _) = columns();
        let mut decorations = Decorations::new();
        decorations.insert(left, BoxDecoration::inset(2.0, 3.0));
        decorations.insert(tree.root(), BoxDecoration::inset(0.0, 10.0));
        let layout = tree.resolve(PAGE, &decorations).unwrap();

        // Root content is 180 wide; left column receives 45 of it.
        let left_info = layout.region(left).unwrap();
        assert_eq!(left_info.rect, Rect::new(12.0, 12.0, 53.0, 88.0));
        assert_eq!(
            layout.text_in(left).unwrap().rect,
            Rect::new(15.0, 15.0, 50.0, 85.0)
        );
    }

    #[test]
    fn empty_region_is_an_error() {
        let mut tree = RegionTree::new(Region::default());
        let root = tree.root();
        let kids = tree.split(root, SplitDirection::Vertical, &[0.5]).unwrap();
        assert_eq!(
            tree.resolve(PAGE, &Decorations::new()),
            Err(TreeError::EmptyRegion(kids[0]))
        );
    }

    #[test]
    fn point_queries_respect_filter() {
        let (tree, left, _) = columns();
        let layout = tree.resolve(PAGE, &Decorations::new()).unwrap();
        let p = Point::new(50.0, 10.0);
        let all: Vec<NodeId> = layout
            .regions_containing(p, RegionFilter::new())
            .map(|r| r.id)
            .collect();
        assert_eq!(all.len(), 3, "boundary point is in both columns and the root");
        let leaves: Vec<NodeId> = layout
            .regions_containing(Point::new(10.0, 10.0), RegionFilter::new().leaf())
            .map(|r| r.id)
            .collect();
        assert_eq!(leaves, [left]);
    }
}
