// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quire Page: derive a page layout from free-hand pen strokes.
//!
//! Strokes ([`Locus`]) are drawn with a pen ([`PenType`]). [`derive_page`]
//! turns the strokes of one page into a [`DerivedPage`]:
//!
//! 1. [`classify`] sorts region strokes into separators and floating-object
//!    outlines (a closed stroke crossed by a diagonal), and passes text,
//!    decoration, and constraint strokes through.
//! 2. [`apply_constraints`] spaces the separators crossed by each constraint
//!    stroke evenly.
//! 3. [`partition`] splits the page recursively by the separators into a
//!    region tree, recording which stroke made each region edge.
//! 4. Layout leaves get text containers, decoration strokes select the
//!    regions they decorate ([`map_decorations`]), and the tree is resolved.
//! 5. Text containers are split around floating objects and each text pen is
//!    mapped to the containers its strokes touch ([`map_text_pens`]).
//!
//! [`flow_page`] then flows each pen's paragraphs into its containers with a
//! [`TextMeasurer`](quire_flow::TextMeasurer).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use quire_page::{Locus, PageConfig, PenType, derive_page};
//!
//! let loci = [
//!     // A stroke down the middle of the page.
//!     Locus::new(0, PenType::Region(0), [(100.0, 5.0), (101.0, 150.0), (100.0, 295.0)]),
//!     // A text stroke through both halves.
//!     Locus::new(1, PenType::Text(0), [(20.0, 100.0), (180.0, 100.0)]),
//! ];
//! let page = derive_page(&loci, &[], Size::new(200.0, 300.0), &PageConfig::default()).unwrap();
//!
//! let columns = page.tree.children_of(page.tree.root());
//! assert_eq!(columns.len(), 2);
//! assert_eq!(page.containers(0).len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod align;
mod classify;
mod config;
mod decorate;
mod error;
mod locus;
mod page;
mod partition;
mod text;

pub use align::apply_constraints;
pub use classify::{Classified, SeparatorLine, classify};
pub use config::{DecorationMatch, PageConfig};
pub use decorate::map_decorations;
pub use error::DeriveError;
pub use locus::{Locus, LocusId, PenType, group_by_pen};
pub use page::{DerivedPage, derive_page, flow_page, flow_sources};
pub use partition::{LineIdAlignment, Partition, partition};
pub use text::{PenTextIds, SourceText, map_text_pens, paragraphs_by_pen, route_sources};
