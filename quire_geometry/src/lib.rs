// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quire Geometry: the primitive math underneath stroke-driven page layout.
//!
//! Everything in Quire is measured in page millimeters and expressed with
//! [`kurbo`] types. This crate collects the small, stateless predicates the
//! rest of the workspace is built from:
//!
//! - [`intersects_segments`] and [`circulates`]: strict segment crossing and
//!   self-intersection of a free-hand polyline.
//! - [`judge_direction`], [`chord_angle`], and [`straighten`]: classify a
//!   stroke chord by the split it implies and snap it onto its axis.
//! - [`distance_to_segment`]: point-to-segment distance for proximity tests.
//! - [`contains_point`], [`contains_segment`], [`overlaps`], and
//!   [`strip_insets`]: rectangle containment, strict overlap, and removal of
//!   per-edge margins or padding.
//! - [`Edges`] and [`Edge`]: per-edge values (borders, margins, stroke ids).
//!
//! ## Split directions
//!
//! A [`SplitDirection`] names how a region's children are arranged, not how
//! the separating stroke is oriented. A stroke drawn mostly left-to-right cuts
//! a region into rows, so it is classified as [`SplitDirection::Vertical`]:
//!
//! ```rust
//! use kurbo::Line;
//! use quire_geometry::{SplitDirection, judge_direction};
//!
//! let flat = Line::new((0.0, 50.0), (200.0, 52.0));
//! assert_eq!(judge_direction(flat), SplitDirection::Vertical);
//!
//! let steep = Line::new((80.0, 0.0), (81.0, 297.0));
//! assert_eq!(judge_direction(steep), SplitDirection::Horizontal);
//! ```
//!
//! All predicates assume finite coordinates (no NaNs).
//!
//! This crate is `no_std`.

#![no_std]

mod edges;
mod line;
mod rect;

pub use edges::{Edge, Edges};
pub use line::{
    SplitDirection, axis_midpoint, chord_angle, circulates, distance_to_segment,
    intersects_segments, judge_direction, straighten,
};
pub use rect::{bounding_rect, contains_point, contains_segment, edge_line, overlaps, strip_insets};
