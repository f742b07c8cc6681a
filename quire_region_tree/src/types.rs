// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public node types: identifiers, region and text-container payloads, and floating objects.

use alloc::string::String;
use core::fmt;

use kurbo::Rect;
use quire_geometry::{Edges, SplitDirection};

use crate::decoration::Border;

/// Identifier for a node in a [`RegionTree`](crate::RegionTree).
///
/// Ids are dense arena indices allocated in insertion order, so two trees
/// built from the same sequence of operations assign the same ids.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// The raw arena index.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Identifier for a floating object, allocated per page derivation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatingObjectId(pub u32);

/// Identifier of a resolved text rectangle.
///
/// A container that overlaps no floating object keeps its own node id; the
/// pieces produced by splitting a container around floating objects are
/// numbered in reading order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextId {
    /// An unsplit text container.
    Container(NodeId),
    /// The `index`-th piece of a container split around floating objects.
    Piece {
        /// The container that was split.
        container: NodeId,
        /// Position of the piece in reading order.
        index: u32,
    },
}

impl TextId {
    /// The text container this rectangle belongs to.
    pub const fn container(self) -> NodeId {
        match self {
            Self::Container(id) | Self::Piece { container: id, .. } => id,
        }
    }
}

/// Direction in which lines of text advance inside a container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WritingDirection {
    /// Lines run left to right and stack downwards; the flow extent is the height.
    #[default]
    Horizontal,
    /// Lines run top to bottom and stack right to left; the flow extent is the width.
    Vertical,
}

/// Payload of a region node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// How this region's children are arranged.
    pub split: SplitDirection,
    /// Share of the parent's extent along the parent's split axis, in `0..=1`.
    pub ratio: f64,
    /// Spacing inserted before this region when it is not the first child.
    pub gap: f64,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            split: SplitDirection::Vertical,
            ratio: 1.0,
            gap: 0.0,
        }
    }
}

impl Region {
    /// A child region taking `ratio` of its parent, with the default split and no gap.
    pub fn with_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            ..Self::default()
        }
    }
}

/// Payload of a text-container leaf.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextContainer {
    /// Writing direction of text flowed into this container.
    pub direction: WritingDirection,
    /// Per-edge border. Containers carry no other decoration.
    pub border: Edges<Border>,
}

/// A node payload: either a region or a text-container leaf.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// A rectangular subdivision.
    Region(Region),
    /// A leaf hosting flowed text.
    Text(TextContainer),
}

impl NodeKind {
    /// The region payload, if this is a region.
    pub fn as_region(&self) -> Option<&Region> {
        match self {
            Self::Region(region) => Some(region),
            Self::Text(_) => None,
        }
    }

    /// The text-container payload, if this is a text container.
    pub fn as_text(&self) -> Option<&TextContainer> {
        match self {
            Self::Region(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// An image placeholder detected from a closed stroke with a hatch mark.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatingObject {
    /// Identifier, unique within a page.
    pub id: FloatingObjectId,
    /// Absolute rectangle in page coordinates.
    pub rect: Rect,
    /// Reference to the image shown in the placeholder, if any.
    pub image: Option<String>,
}
