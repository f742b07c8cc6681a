// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text pens: which containers a pen selects, and which source texts feed it.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Rect;
use quire_flow::Paragraph;
use quire_geometry::contains_point;
use quire_region_tree::{Layout, NodeId, TextId, TextInfo};

use crate::locus::{Locus, PenType, group_by_pen};

/// Ordered text rectangles per text pen index.
pub type PenTextIds = BTreeMap<u32, Vec<TextId>>;

/// Map each text pen to the text rectangles its strokes select.
///
/// For every stroke of a pen, in input order, the leaf regions containing at
/// least one of its points are taken in tree order; a region already taken by
/// the pen is skipped. Each region contributes its rectangles from `pieces`
/// (its text container, or the pieces it was split into) in reading order.
pub fn map_text_pens(layout: &Layout, pieces: &[TextInfo], strokes: &[&Locus]) -> PenTextIds {
    let mut out = PenTextIds::new();
    for (pen, pen_strokes) in group_by_pen(strokes.iter().copied()) {
        let mut regions: Vec<NodeId> = Vec::new();
        for stroke in pen_strokes {
            for info in &layout.regions {
                if info.is_leaf()
                    && !regions.contains(&info.id)
                    && stroke.points.iter().any(|&p| contains_point(info.rect, p))
                {
                    regions.push(info.id);
                }
            }
        }
        let ids: Vec<TextId> = regions
            .iter()
            .flat_map(|&region| pieces.iter().filter(move |t| t.region == region))
            .map(|t| t.id)
            .collect();
        log::trace!("text pen {pen}: {} regions, {} rectangles", regions.len(), ids.len());
        out.insert(pen, ids);
    }
    out
}

/// A block of text on the source canvas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceText {
    /// Identifier of the block.
    pub id: u32,
    /// Where the block sits on the source canvas.
    pub rect: Rect,
    /// Its paragraphs, in order.
    pub paragraphs: Vec<Paragraph>,
}

/// Route source texts to text pens.
///
/// Every point of every text-pen stroke drawn on the source canvas selects
/// the first source containing it. A pen collects its sources in the order
/// they are first selected, each once.
pub fn route_sources<'a>(sources: &'a [SourceText], strokes: &[Locus]) -> BTreeMap<u32, Vec<&'a SourceText>> {
    let text = strokes.iter().filter(|l| matches!(l.pen, PenType::Text(_)));
    let mut out: BTreeMap<u32, Vec<&'a SourceText>> = BTreeMap::new();
    for (pen, pen_strokes) in group_by_pen(text) {
        let routed = out.entry(pen).or_default();
        for point in pen_strokes.iter().flat_map(|l| &l.points) {
            let Some(source) = sources.iter().find(|s| contains_point(s.rect, *point)) else {
                continue;
            };
            if !routed.iter().any(|r| r.id == source.id) {
                routed.push(source);
            }
        }
    }
    out
}

/// The paragraphs each text pen receives: its routed sources, concatenated.
pub fn paragraphs_by_pen(sources: &[SourceText], strokes: &[Locus]) -> BTreeMap<u32, Vec<Paragraph>> {
    route_sources(sources, strokes)
        .into_iter()
        .map(|(pen, routed)| {
            let paragraphs = routed
                .into_iter()
                .flat_map(|s| s.paragraphs.iter().cloned())
                .collect();
            (pen, paragraphs)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_geometry::SplitDirection;
    use quire_region_tree::{Decorations, Region, RegionTree, WritingDirection};

    fn two_columns() -> (Layout, [NodeId; 2]) {
        let mut tree = RegionTree::new(Region::default());
        let root = tree.root();
        let cols = tree.split(root, SplitDirection::Horizontal, &[0.5]).unwrap();
        let tree = tree.with_text_containers(WritingDirection::Horizontal);
        let layout = tree
            .resolve(Rect::new(0.0, 0.0, 100.0, 100.0), &Decorations::new())
            .unwrap();
        (layout, [cols[0], cols[1]])
    }

    #[test]
    fn stroke_order_then_tree_order() {
        let (layout, [left, right]) = two_columns();
        let right_first = Locus::new(0, PenType::Text(0), [(80.0, 10.0)]);
        let both = Locus::new(1, PenType::Text(0), [(80.0, 50.0), (20.0, 50.0)]);
        let other_pen = Locus::new(2, PenType::Text(3), [(20.0, 20.0)]);
        let ids = map_text_pens(&layout, &layout.texts, &[&right_first, &both, &other_pen]);

        let container = |region| layout.text_in(region).unwrap().id;
        assert_eq!(ids[&0], [container(right), container(left)]);
        assert_eq!(ids[&3], [container(left)]);
    }

    #[test]
    fn split_containers_contribute_all_pieces() {
        let (layout, [left, _]) = two_columns();
        let base = layout.text_in(left).unwrap().clone();
        let pieces: Vec<TextInfo> = (0..3)
            .map(|index| TextInfo {
                id: TextId::Piece { container: base.id.container(), index },
                ..base.clone()
            })
            .collect();
        let stroke = Locus::new(0, PenType::Text(0), [(10.0, 10.0)]);
        let ids = map_text_pens(&layout, &pieces, &[&stroke]);
        assert_eq!(ids[&0], pieces.iter().map(|p| p.id).collect::<Vec<_>>());
    }

    fn source(id: u32, rect: Rect, content: &str) -> SourceText {
        SourceText {
            id,
            rect,
            paragraphs: alloc::vec![Paragraph::new(content)],
        }
    }

    #[test]
    fn sources_route_in_first_touch_order() {
        let sources = [
            source(0, Rect::new(0.0, 0.0, 10.0, 10.0), "zero"),
            source(1, Rect::new(20.0, 0.0, 30.0, 10.0), "one"),
            source(2, Rect::new(40.0, 0.0, 50.0, 10.0), "two"),
        ];
        let strokes = [
            Locus::new(0, PenType::Text(0), [(25.0, 5.0), (5.0, 5.0), (26.0, 6.0)]),
            Locus::new(1, PenType::Decoration(0), [(45.0, 5.0)]),
            Locus::new(2, PenType::Text(1), [(45.0, 5.0), (100.0, 100.0)]),
        ];
        let paragraphs = paragraphs_by_pen(&sources, &strokes);
        let contents = |pen: u32| {
            paragraphs[&pen]
                .iter()
                .map(|p| p.content.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(contents(0), ["one", "zero"]);
        assert_eq!(contents(1), ["two"]);
    }
}
