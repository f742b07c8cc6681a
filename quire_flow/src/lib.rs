// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quire Flow: paginate styled paragraphs into resolved text containers.
//!
//! - [`Paragraph`] and [`CharacterStyle`]: the text model. Paragraphs are
//!   sliced by character, carrying their sparse per-character overrides along.
//! - [`TextMeasurer`]: the injected measurement capability. The presentation
//!   layer supplies one backed by real font metrics; [`AdvanceMeasurer`] is a
//!   deterministic stand-in for tests and headless use.
//! - [`avoid_floating_objects`]: split a container into pieces that route
//!   around floating objects, in reading order.
//! - [`flow_text`]: fill containers in order, splitting paragraphs at the
//!   largest fitting prefix found by [`search_flowable_right`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use quire_flow::{AdvanceMeasurer, Paragraph, flow_text};
//! use quire_geometry::SplitDirection;
//! use quire_region_tree::{Decorations, Region, RegionTree, WritingDirection};
//!
//! let mut tree = RegionTree::new(Region::default());
//! let root = tree.root();
//! tree.split(root, SplitDirection::Horizontal, &[0.5]).unwrap();
//! let tree = tree.with_text_containers(WritingDirection::Horizontal);
//! let layout = tree.resolve(Rect::new(0.0, 0.0, 60.0, 9.0), &Decorations::new()).unwrap();
//!
//! // Two 30mm columns, each two 4.5mm lines tall: 20 default 3mm characters apiece.
//! let text = Paragraph::new("x".repeat(50));
//! let flowed = flow_text(&AdvanceMeasurer::default(), &[text], &layout.texts).unwrap();
//! assert_eq!(flowed.containers[0][0].char_len(), 20);
//! assert_eq!(flowed.containers[1][0].char_len(), 20);
//! assert_eq!(flowed.overflow[0].char_len(), 10);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod avoid;
mod error;
mod flow;
mod measure;
mod paragraph;

pub use avoid::avoid_floating_objects;
pub use error::{FlowError, MeasureError};
pub use flow::{FlowResult, FlowableRight, flow_text, search_flowable_right};
pub use measure::{AdvanceMeasurer, TextMeasurer};
pub use paragraph::{CharacterStyle, Paragraph, TextAlign};
