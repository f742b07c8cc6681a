// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quire Region Tree: the hierarchical page layout derived from pen strokes.
//!
//! A page is a tree of rectangular regions. Each region splits its extent
//! among its children along one axis by ratio; regions at the bottom of the
//! hierarchy ("layout leaves") each host exactly one text container.
//!
//! - [`RegionTree`]: an arena of [`NodeKind`] nodes with stable [`NodeId`]s and
//!   explicit parent ids. Trees are built once and then copied, never edited
//!   in place by later stages.
//! - [`RegionTree::resolve`]: computes a [`Layout`], the absolute rectangles of
//!   every region ([`RegionInfo`]) and text container ([`TextInfo`]), applying
//!   per-region [`BoxDecoration`]s (margin, padding, border, fill, radius).
//! - [`FloatingObject`]: image placeholders that text flows around.
//! - [`Color`]: CMYK, RGB, and HSL colors with conversion to RGB.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use quire_geometry::SplitDirection;
//! use quire_region_tree::{Decorations, Region, RegionTree, WritingDirection};
//!
//! let mut tree = RegionTree::new(Region::default());
//! let root = tree.root();
//! let rows = tree.split(root, SplitDirection::Vertical, &[0.4]).unwrap();
//! let tree = tree.with_text_containers(WritingDirection::Horizontal);
//!
//! let layout = tree.resolve(Rect::new(0.0, 0.0, 100.0, 50.0), &Decorations::new()).unwrap();
//! assert_eq!(layout.region(rows[1]).unwrap().rect, Rect::new(0.0, 20.0, 100.0, 50.0));
//! assert_eq!(layout.texts.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod decoration;
mod error;
mod layout;
mod tree;
mod types;

pub use decoration::{Border, BoxDecoration, Color, Decoration};
pub use error::TreeError;
pub use layout::{
    Decorations, InfoFlags, Layout, RegionFilter, RegionInfo, TextInfo, child_rects,
};
pub use tree::{RATIO_TOLERANCE, RegionTree};
pub use types::{
    FloatingObject, FloatingObjectId, NodeId, NodeKind, Region, TextContainer, TextId,
    WritingDirection,
};
