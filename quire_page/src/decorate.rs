// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping decoration strokes to the regions they select.

use alloc::vec::Vec;

use quire_geometry::contains_point;
use quire_region_tree::{BoxDecoration, Decorations, Layout, NodeId, RegionTree};

use crate::config::DecorationMatch;
use crate::locus::{Locus, group_by_pen};

/// Regions selected by one decoration stroke, innermost only.
fn selected_regions(tree: &RegionTree, layout: &Layout, stroke: &Locus, mode: DecorationMatch) -> Vec<NodeId> {
    if stroke.points.is_empty() {
        return Vec::new();
    }
    let candidates: Vec<NodeId> = layout
        .regions
        .iter()
        .filter(|info| match mode {
            DecorationMatch::Enclosing => stroke.points.iter().all(|&p| contains_point(info.rect, p)),
            DecorationMatch::Touching => {
                info.is_leaf() && stroke.points.iter().any(|&p| contains_point(info.rect, p))
            }
        })
        .map(|info| info.id)
        .collect();
    candidates
        .iter()
        .copied()
        .filter(|&id| !candidates.iter().any(|&other| tree.is_ancestor(id, other)))
        .collect()
}

/// Decorate the regions selected by decoration strokes.
///
/// `layout` should be resolved without decorations. `styles[i]` is the
/// decoration of pen `i`; strokes of pens without a style are ignored. Pens
/// apply in ascending index order, so a later pen overrides an earlier one
/// on a shared region.
pub fn map_decorations(
    tree: &RegionTree,
    layout: &Layout,
    strokes: &[&Locus],
    styles: &[BoxDecoration],
    mode: DecorationMatch,
) -> Decorations {
    let mut decorations = Decorations::new();
    for (pen, pen_strokes) in group_by_pen(strokes.iter().copied()) {
        let Some(style) = usize::try_from(pen).ok().and_then(|i| styles.get(i)) else {
            log::warn!("decoration pen {pen} has no style; {} strokes ignored", pen_strokes.len());
            continue;
        };
        let mut selected: Vec<NodeId> = Vec::new();
        for stroke in pen_strokes {
            for id in selected_regions(tree, layout, stroke, mode) {
                if !selected.contains(&id) {
                    selected.push(id);
                }
            }
        }
        log::trace!("decoration pen {pen} selects {selected:?}");
        for id in selected {
            decorations.insert(id, *style);
        }
    }
    log::debug!("decorated {} regions", decorations.len());
    decorations
}
