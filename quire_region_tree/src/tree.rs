// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, traversal, and invariants.

use alloc::vec::Vec;
use quire_geometry::SplitDirection;
use smallvec::SmallVec;

use crate::error::TreeError;
use crate::types::{NodeId, NodeKind, Region, TextContainer, WritingDirection};

/// Sibling ratios may deviate from 1 by at most this much.
pub const RATIO_TOLERANCE: f64 = 1e-9;

/// An arena of region and text-container nodes rooted at a single region.
///
/// Nodes are never removed, so a [`NodeId`] stays valid for the life of the
/// tree. Parent links are stored as ids alongside each node's ordered child
/// list.
///
/// ## Example
///
/// ```rust
/// use quire_geometry::SplitDirection;
/// use quire_region_tree::{Region, RegionTree, WritingDirection};
///
/// let mut tree = RegionTree::new(Region::default());
/// let root = tree.root();
/// let cols = tree.split(root, SplitDirection::Horizontal, &[0.25]).unwrap();
/// assert_eq!(tree.region(cols[0]).unwrap().ratio, 0.25);
/// assert_eq!(tree.region(cols[1]).unwrap().ratio, 0.75);
/// tree.validate().unwrap();
///
/// // Every layout leaf gets exactly one text container.
/// let tree = tree.with_text_containers(WritingDirection::Horizontal);
/// assert_eq!(tree.children_of(cols[0]).len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RegionTree {
    nodes: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

impl Node {
    fn new(parent: Option<NodeId>, kind: NodeKind) -> Self {
        Self {
            parent,
            children: Vec::new(),
            kind,
        }
    }
}

impl RegionTree {
    /// Create a tree holding only a root region.
    ///
    /// The root's ratio is forced to 1.
    pub fn new(root: Region) -> Self {
        let root = Region { ratio: 1.0, ..root };
        Self {
            nodes: alloc::vec![Node::new(None, NodeKind::Region(root))],
        }
    }

    /// The root region.
    pub const fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if `id` was allocated by this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// The payload of a node.
    pub fn get(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.idx()).map(|n| &n.kind)
    }

    /// The region payload of a node, or `None` for text containers and unknown ids.
    pub fn region(&self, id: NodeId) -> Option<&Region> {
        self.get(id).and_then(NodeKind::as_region)
    }

    /// The text-container payload of a node, or `None` for regions and unknown ids.
    pub fn text(&self, id: NodeId) -> Option<&TextContainer> {
        self.get(id).and_then(NodeKind::as_text)
    }

    /// Mutable access to a region payload.
    pub fn region_mut(&mut self, id: NodeId) -> Option<&mut Region> {
        match &mut self.nodes.get_mut(id.idx())?.kind {
            NodeKind::Region(region) => Some(region),
            NodeKind::Text(_) => None,
        }
    }

    /// Append a child region to `parent`.
    pub fn insert_region(&mut self, parent: NodeId, region: Region) -> Result<NodeId, TreeError> {
        self.insert(parent, NodeKind::Region(region))
    }

    /// Append a text container to `parent`.
    pub fn insert_text(
        &mut self,
        parent: NodeId,
        text: TextContainer,
    ) -> Result<NodeId, TreeError> {
        self.insert(parent, NodeKind::Text(text))
    }

    fn insert(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId, TreeError> {
        if self.region(parent).is_none() {
            return Err(TreeError::NotARegion(parent));
        }
        Ok(self.push_node(parent, kind))
    }

    fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node::new(Some(parent), kind));
        self.nodes[parent.idx()].children.push(id);
        id
    }

    /// Split a childless region at the given cut positions.
    ///
    /// `cuts` are ascending fractions of the region's extent along `split`.
    /// `cuts.len() + 1` child regions are appended, each taking the difference
    /// between consecutive cuts (the last takes the rest up to 1). Children use
    /// the default vertical split and no gap.
    pub fn split(
        &mut self,
        id: NodeId,
        split: SplitDirection,
        cuts: &[f64],
    ) -> Result<SmallVec<[NodeId; 4]>, TreeError> {
        if !self.children_of(id).is_empty() {
            return Err(TreeError::AlreadySplit(id));
        }
        let region = self.region_mut(id).ok_or(TreeError::NotARegion(id))?;
        region.split = split;
        let mut children = SmallVec::new();
        let mut prev = 0.0;
        for &cut in cuts.iter().chain(core::iter::once(&1.0)) {
            children.push(self.insert_region(id, Region::with_ratio(cut - prev))?);
            prev = cut;
        }
        Ok(children)
    }

    /// Returns the parent of a node, or `None` for the root or unknown ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.idx()).and_then(|n| n.parent)
    }

    /// Get the children of a node, or empty slice for unknown ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.idx())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent_of(node);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent_of(p);
        }
        false
    }

    /// Whether `id` is a region with no region children.
    ///
    /// This holds for childless regions and for regions whose first child is
    /// a text container.
    pub fn is_layout_leaf(&self, id: NodeId) -> bool {
        self.region(id).is_some()
            && self
                .children_of(id)
                .first()
                .is_none_or(|&c| self.text(c).is_some())
    }

    /// Get the next node in depth-first traversal order.
    ///
    /// Returns `None` at the end of the traversal or for unknown ids.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if !self.contains(current) {
            return None;
        }
        if let Some(&first_child) = self.children_of(current).first() {
            return Some(first_child);
        }
        let mut node = current;
        while let Some(parent) = self.parent_of(node) {
            if let Some(next_sibling) = self.next_sibling(node) {
                return Some(next_sibling);
            }
            node = parent;
        }
        None
    }

    /// All nodes in depth-first pre-order, starting at the root.
    pub fn iter_depth_first(&self) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(Some(self.root()), |&id| self.next_depth_first(id))
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.children_of(self.parent_of(node)?);
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    /// Return a copy where every childless region holds one text container.
    ///
    /// Regions that already have children are left unchanged, so applying
    /// this twice adds nothing the second time.
    pub fn with_text_containers(&self, direction: WritingDirection) -> Self {
        let mut tree = self.clone();
        let leaves: Vec<NodeId> = self
            .iter_depth_first()
            .filter(|&id| self.region(id).is_some() && self.children_of(id).is_empty())
            .collect();
        for id in leaves {
            let text = TextContainer {
                direction,
                ..TextContainer::default()
            };
            tree.push_node(id, NodeKind::Text(text));
        }
        log::debug!(
            "attached text containers: {} nodes",
            tree.node_count() - self.node_count()
        );
        tree
    }

    /// Check that the children of every split region have ratios summing to 1.
    ///
    /// Text-container children are not counted; a region holding only a text
    /// container is a layout leaf.
    pub fn validate(&self) -> Result<(), TreeError> {
        for (idx, node) in self.nodes.iter().enumerate() {
            let mut sum = 0.0;
            let mut any = false;
            for &child in &node.children {
                if let Some(region) = self.region(child) {
                    sum += region.ratio;
                    any = true;
                }
            }
            if any && (sum - 1.0).abs() > RATIO_TOLERANCE {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices by design."
                )]
                return Err(TreeError::RatioSum {
                    node: NodeId::new(idx as u32),
                    sum,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (RegionTree, [NodeId; 5]) {
        // Build tree: root -> [a -> [c, d], b]
        let mut tree = RegionTree::new(Region::default());
        let root = tree.root();
        let [a, b] = tree.split(root, SplitDirection::Vertical, &[0.5]).unwrap()[..] else {
            panic!("two children expected");
        };
        let [c, d] = tree.split(a, SplitDirection::Horizontal, &[0.3]).unwrap()[..] else {
            panic!("two children expected");
        };
        (tree, [root, a, b, c, d])
    }

    #[test]
    fn split_assigns_ratio_differences() {
        let mut tree = RegionTree::new(Region::default());
        let root = tree.root();
        let kids = tree
            .split(root, SplitDirection::Horizontal, &[0.25, 0.6])
            .unwrap();
        let ratios: Vec<f64> = kids.iter().map(|&k| tree.region(k).unwrap().ratio).collect();
        assert_eq!(ratios.len(), 3);
        assert!((ratios[0] - 0.25).abs() < 1e-12);
        assert!((ratios[1] - 0.35).abs() < 1e-12);
        assert!((ratios[2] - 0.4).abs() < 1e-12);
        assert_eq!(tree.region(root).unwrap().split, SplitDirection::Horizontal);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn validate_reports_bad_ratio_sum() {
        let mut tree = RegionTree::new(Region::default());
        let root = tree.root();
        tree.insert_region(root, Region::with_ratio(0.5)).unwrap();
        tree.insert_region(root, Region::with_ratio(0.4)).unwrap();
        match tree.validate() {
            Err(TreeError::RatioSum { node, sum }) => {
                assert_eq!(node, root);
                assert!((sum - 0.9).abs() < 1e-12);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn split_rejects_regions_with_children() {
        let (mut tree, [root, ..]) = sample();
        assert_eq!(
            tree.split(root, SplitDirection::Horizontal, &[0.5]),
            Err(TreeError::AlreadySplit(root))
        );
    }

    #[test]
    fn text_containers_cannot_have_children() {
        let mut tree = RegionTree::new(Region::default());
        let text = tree.insert_text(tree.root(), TextContainer::default()).unwrap();
        assert_eq!(
            tree.insert_region(text, Region::default()),
            Err(TreeError::NotARegion(text))
        );
    }

    #[test]
    fn depth_first_traversal() {
        let (tree, [root, a, b, c, d]) = sample();
        let order: Vec<NodeId> = tree.iter_depth_first().collect();
        assert_eq!(order, [root, a, c, d, b]);
        assert!(tree.next_depth_first(b).is_none());
    }

    #[test]
    fn ancestry() {
        let (tree, [root, a, b, c, _]) = sample();
        assert!(tree.is_ancestor(root, c));
        assert!(tree.is_ancestor(a, c));
        assert!(!tree.is_ancestor(b, c));
        assert!(!tree.is_ancestor(c, c));
        assert_eq!(tree.parent_of(c), Some(a));
        assert_eq!(tree.parent_of(root), None);
    }

    #[test]
    fn every_leaf_gets_one_text_container() {
        let (tree, [root, a, b, c, d]) = sample();
        assert!(tree.is_layout_leaf(b));
        assert!(!tree.is_layout_leaf(a));

        let with_text = tree.with_text_containers(WritingDirection::Vertical);
        for leaf in [b, c, d] {
            let kids = with_text.children_of(leaf);
            assert_eq!(kids.len(), 1);
            let text = with_text.text(kids[0]).unwrap();
            assert_eq!(text.direction, WritingDirection::Vertical);
            assert!(with_text.is_layout_leaf(leaf));
        }
        assert_eq!(with_text.children_of(root).len(), 2);

        // Idempotent.
        let again = with_text.with_text_containers(WritingDirection::Vertical);
        assert_eq!(again, with_text);
    }
}
