// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sorting strokes into separators, floating objects, and selections.

use alloc::vec::Vec;

use kurbo::Line;
use quire_geometry::{SplitDirection, chord_angle, circulates, contains_segment, judge_direction};
use quire_region_tree::{FloatingObject, FloatingObjectId};

use crate::config::PageConfig;
use crate::locus::{Locus, LocusId, PenType};

/// A region stroke reduced to the chord that splits a region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeparatorLine {
    /// The stroke the line came from.
    pub id: LocusId,
    /// First to last point of the stroke.
    pub line: Line,
    /// Region pen index; lower values split first.
    pub priority: u32,
    /// The split the line makes.
    pub direction: SplitDirection,
}

impl SeparatorLine {
    /// Build a separator from a region stroke with at least two points.
    pub fn from_locus(locus: &Locus) -> Option<Self> {
        let PenType::Region(priority) = locus.pen else {
            return None;
        };
        let line = locus.chord()?;
        Some(Self {
            id: locus.id,
            line,
            priority,
            direction: judge_direction(line),
        })
    }
}

/// Strokes of one page, grouped by role.
#[derive(Clone, Debug, Default)]
pub struct Classified<'a> {
    /// Region strokes that split regions, in input order.
    pub separators: Vec<SeparatorLine>,
    /// Closed region strokes crossed by a diagonal, numbered in input order.
    pub floating: Vec<FloatingObject>,
    /// Text-pen strokes.
    pub text: Vec<&'a Locus>,
    /// Decoration-pen strokes.
    pub decoration: Vec<&'a Locus>,
    /// Constraint chords, in input order.
    pub constraints: Vec<Line>,
}

/// Classify the strokes of a page.
///
/// Region strokes that cross themselves are candidate floating-object
/// outlines. Each candidate, in input order, claims the first unclaimed
/// non-crossing region stroke whose chord reaches into the candidate's
/// bounding box at a diagonal angle (see [`PageConfig::diagonal_angles`]).
/// A candidate with a diagonal becomes a [`FloatingObject`] spanning its
/// bounding box and the diagonal is dropped. Every other region stroke with
/// at least two points, including unmatched closed ones, is a separator.
///
/// Text, decoration, and constraint strokes pass through by pen; memo
/// strokes and constraints with fewer than two points are dropped.
pub fn classify<'a>(loci: &'a [Locus], config: &PageConfig) -> Classified<'a> {
    let mut out = Classified::default();
    let region: Vec<&Locus> = loci
        .iter()
        .filter(|l| matches!(l.pen, PenType::Region(_)))
        .collect();
    let closed: Vec<bool> = region.iter().map(|l| circulates(&l.points)).collect();
    let mut consumed = alloc::vec![false; region.len()];
    let mut next_id = 0;

    for (i, outline) in region.iter().enumerate() {
        if !closed[i] {
            continue;
        }
        let Some(bounds) = outline.bounding_rect() else {
            continue;
        };
        let diagonal = (0..region.len()).find(|&j| {
            !closed[j]
                && !consumed[j]
                && region[j].chord().is_some_and(|chord| {
                    contains_segment(bounds, chord) && config.is_diagonal(chord_angle(chord))
                })
        });
        if let Some(j) = diagonal {
            consumed[i] = true;
            consumed[j] = true;
            log::trace!(
                "stroke {:?} marks stroke {:?} as floating object {next_id}",
                region[j].id,
                outline.id
            );
            out.floating.push(FloatingObject {
                id: FloatingObjectId(next_id),
                rect: bounds,
                image: config.placeholder_image.clone(),
            });
            next_id += 1;
        }
    }

    out.separators = region
        .iter()
        .zip(&consumed)
        .filter(|&(_, &used)| !used)
        .filter_map(|(locus, _)| {
            let line = SeparatorLine::from_locus(locus);
            if line.is_none() {
                log::warn!("region stroke {:?} has fewer than two points; ignored", locus.id);
            }
            line
        })
        .collect();

    for locus in loci {
        match locus.pen {
            PenType::Text(_) => out.text.push(locus),
            PenType::Decoration(_) => out.decoration.push(locus),
            PenType::Constraint => out.constraints.extend(locus.chord()),
            PenType::Region(_) | PenType::Memo => {}
        }
    }

    log::debug!(
        "classified {} strokes: {} separators, {} floating objects, {} text, {} decoration, {} constraints",
        loci.len(),
        out.separators.len(),
        out.floating.len(),
        out.text.len(),
        out.decoration.len(),
        out.constraints.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    /// A square outline whose closing segment overshoots across the first edge.
    fn outline(id: u32) -> Locus {
        Locus::new(
            id,
            PenType::Region(0),
            [(10.0, 10.0), (60.0, 10.0), (60.0, 60.0), (10.0, 60.0), (20.0, 0.0)],
        )
    }

    fn rising(id: u32) -> Locus {
        Locus::new(id, PenType::Region(0), [(20.0, 50.0), (35.0, 35.0), (50.0, 20.0)])
    }

    #[test]
    fn outline_with_diagonal_is_a_floating_object() {
        let loci = [outline(0), rising(1)];
        let out = classify(&loci, &PageConfig::default());
        assert!(out.separators.is_empty());
        assert_eq!(
            out.floating,
            [FloatingObject {
                id: FloatingObjectId(0),
                rect: Rect::new(10.0, 0.0, 60.0, 60.0),
                image: None,
            }]
        );
    }

    #[test]
    fn falling_diagonal_is_a_separator() {
        let falling = Locus::new(1, PenType::Region(0), [(20.0, 20.0), (50.0, 50.0)]);
        let loci = [outline(0), falling];
        let out = classify(&loci, &PageConfig::default());
        assert!(out.floating.is_empty());
        // The unmatched outline stays a separator, in input order.
        let ids: Vec<LocusId> = out.separators.iter().map(|s| s.id).collect();
        assert_eq!(ids, [LocusId(0), LocusId(1)]);
    }

    #[test]
    fn diagonal_outside_outline_is_ignored() {
        let far = Locus::new(1, PenType::Region(0), [(120.0, 150.0), (150.0, 120.0)]);
        let loci = [outline(0), far];
        let out = classify(&loci, &PageConfig::default());
        assert!(out.floating.is_empty());
        assert_eq!(out.separators.len(), 2);
    }

    #[test]
    fn each_diagonal_is_used_once() {
        let loci = [outline(0), outline(1), rising(2)];
        let out = classify(&loci, &PageConfig::default());
        assert_eq!(out.floating.len(), 1);
        assert_eq!(out.separators.len(), 1);
        assert_eq!(out.separators[0].id, LocusId(1));
    }

    #[test]
    fn pens_are_routed() {
        let loci = [
            Locus::new(0, PenType::Text(0), [(1.0, 1.0)]),
            Locus::new(1, PenType::Decoration(2), [(1.0, 1.0)]),
            Locus::new(2, PenType::Constraint, [(0.0, 5.0), (9.0, 5.0)]),
            Locus::new(3, PenType::Constraint, [(0.0, 5.0)]),
            Locus::new(4, PenType::Memo, [(0.0, 0.0), (9.0, 9.0)]),
            Locus::new(5, PenType::Region(1), [(4.0, 0.0)]),
            Locus::new(6, PenType::Region(1), [(4.0, 0.0), (5.0, 90.0)]),
        ];
        let out = classify(&loci, &PageConfig::default());
        assert_eq!(out.text.len(), 1);
        assert_eq!(out.decoration.len(), 1);
        assert_eq!(out.constraints, [Line::new((0.0, 5.0), (9.0, 5.0))]);
        assert_eq!(
            out.separators,
            [SeparatorLine {
                id: LocusId(6),
                line: Line::new((4.0, 0.0), (5.0, 90.0)),
                priority: 1,
                direction: SplitDirection::Horizontal,
            }]
        );
    }

    #[test]
    fn placeholder_image_is_attached() {
        let config = PageConfig {
            placeholder_image: Some("placeholder.png".into()),
            ..PageConfig::default()
        };
        let loci = [outline(0), rising(1)];
        let out = classify(&loci, &config);
        assert_eq!(out.floating[0].image.as_deref(), Some("placeholder.png"));
    }
}
