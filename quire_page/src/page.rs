// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page pipeline: strokes in, layout out, then text flowed into it.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Size;
use quire_flow::{FlowResult, Paragraph, TextMeasurer, avoid_floating_objects, flow_text};
use quire_region_tree::{
    BoxDecoration, Decorations, FloatingObject, FloatingObjectId, Layout, RegionTree, TextInfo,
};

use crate::align::apply_constraints;
use crate::classify::classify;
use crate::config::PageConfig;
use crate::decorate::map_decorations;
use crate::error::DeriveError;
use crate::locus::Locus;
use crate::partition::{LineIdAlignment, partition};
use crate::text::{PenTextIds, SourceText, map_text_pens, paragraphs_by_pen};

/// Everything derived from the strokes of one page.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedPage {
    /// The region tree, with a text container in every layout leaf.
    pub tree: RegionTree,
    /// Resolved geometry with decorations applied.
    pub layout: Layout,
    /// Text rectangles after routing around floating objects, in tree order.
    pub texts: Vec<TextInfo>,
    /// Floating objects by id.
    pub floating_objects: BTreeMap<FloatingObjectId, FloatingObject>,
    /// Ordered text rectangles per text pen.
    pub pen_text_ids: PenTextIds,
    /// Which stroke each region edge came from.
    pub alignment: LineIdAlignment,
    /// Decorations applied to regions.
    pub decorations: Decorations,
}

impl DerivedPage {
    /// The containers a text pen flows into, in order.
    pub fn containers(&self, pen: u32) -> Vec<TextInfo> {
        self.pen_text_ids
            .get(&pen)
            .into_iter()
            .flatten()
            .filter_map(|&id| self.texts.iter().find(|t| t.id == id).cloned())
            .collect()
    }
}

/// Derive a page layout from its strokes.
///
/// `styles[i]` is the box decoration of decoration pen `i`. The stages run in
/// order: stroke classification, equal-spacing constraints, partition of the
/// page, text containers for the layout leaves, decoration mapping on the
/// undecorated geometry, final resolution, routing of text around floating
/// objects, and mapping of text pens to the resulting rectangles.
pub fn derive_page(
    loci: &[Locus],
    styles: &[BoxDecoration],
    size: Size,
    config: &PageConfig,
) -> Result<DerivedPage, DeriveError> {
    let page = size.to_rect();
    let classified = classify(loci, config);
    let separators = apply_constraints(classified.separators, &classified.constraints, size);
    let partitioned = partition(&separators, page, config.root_parent_split)?;
    let tree = partitioned.tree.with_text_containers(config.writing_direction);

    let bare = tree.resolve(page, &Decorations::new())?;
    let decorations = map_decorations(
        &tree,
        &bare,
        &classified.decoration,
        styles,
        config.decoration_match,
    );
    let layout = tree.resolve(page, &decorations)?;

    let texts: Vec<TextInfo> = layout
        .texts
        .iter()
        .flat_map(|info| avoid_floating_objects(info, &classified.floating))
        .collect();
    let pen_text_ids = map_text_pens(&layout, &texts, &classified.text);
    let floating_objects = classified
        .floating
        .into_iter()
        .map(|obj| (obj.id, obj))
        .collect();

    log::debug!(
        "derived page: {} regions, {} text rectangles, {} text pens",
        layout.regions.len(),
        texts.len(),
        pen_text_ids.len()
    );
    Ok(DerivedPage {
        tree,
        layout,
        texts,
        floating_objects,
        pen_text_ids,
        alignment: partitioned.alignment,
        decorations,
    })
}

/// Flow each pen's paragraphs into the containers it selected.
///
/// Pens without containers keep all their text as overflow.
pub fn flow_page<M: TextMeasurer + ?Sized>(
    measurer: &M,
    page: &DerivedPage,
    paragraphs: &BTreeMap<u32, Vec<Paragraph>>,
) -> Result<BTreeMap<u32, FlowResult>, DeriveError> {
    let mut out = BTreeMap::new();
    for (&pen, text) in paragraphs {
        let containers = page.containers(pen);
        if containers.is_empty() {
            log::warn!("text pen {pen} selects no containers");
        }
        out.insert(pen, flow_text(measurer, text, &containers)?);
    }
    Ok(out)
}

/// Route source texts to pens with strokes drawn on the source canvas, then
/// flow them like [`flow_page`].
pub fn flow_sources<M: TextMeasurer + ?Sized>(
    measurer: &M,
    page: &DerivedPage,
    sources: &[SourceText],
    source_strokes: &[Locus],
) -> Result<BTreeMap<u32, FlowResult>, DeriveError> {
    flow_page(measurer, page, &paragraphs_by_pen(sources, source_strokes))
}
