// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting text containers around floating objects.

use alloc::vec::Vec;

use kurbo::Rect;
use quire_geometry::overlaps;
use quire_region_tree::{FloatingObject, TextId, TextInfo, WritingDirection};

/// Cut `r` around `f` into the strip before the object, the two pieces
/// flanking it within its strip, and the strip after it.
fn cut(r: Rect, f: Rect, direction: WritingDirection) -> [Rect; 4] {
    match direction {
        WritingDirection::Horizontal => {
            let top = r.y0.max(f.y0);
            let bottom = r.y1.min(f.y1);
            [
                Rect::new(r.x0, r.y0, r.x1, top),
                Rect::new(r.x0, top, f.x0.min(r.x1), bottom),
                Rect::new(f.x1.max(r.x0), top, r.x1, bottom),
                Rect::new(r.x0, bottom, r.x1, r.y1),
            ]
        }
        WritingDirection::Vertical => {
            let left = r.x0.max(f.x0);
            let right = r.x1.min(f.x1);
            [
                Rect::new(right, r.y0, r.x1, r.y1),
                Rect::new(left, r.y0, right, f.y0.min(r.y1)),
                Rect::new(left, f.y1.max(r.y0), right, r.y1),
                Rect::new(r.x0, r.y0, left, r.y1),
            ]
        }
    }
}

fn has_area(r: &Rect) -> bool {
    r.width() > 0.0 && r.height() > 0.0
}

/// Split a text rectangle into pieces that do not overlap any floating object.
///
/// Objects overlapping `info` are visited in reading order: top to bottom for
/// horizontal writing, right to left (by right edge) for vertical writing.
/// Each object cuts every piece it overlaps into the strip before the
/// object, the two pieces flanking the object within its strip, and the strip
/// after it. The cut pieces take the place of the piece they came from, so
/// the result stays in reading order. Zero-area pieces are dropped.
///
/// A container that overlaps no object is returned unchanged. Otherwise every
/// piece is renumbered as [`TextId::Piece`] in reading order and keeps the
/// container's region, border, and writing direction.
pub fn avoid_floating_objects(info: &TextInfo, objects: &[FloatingObject]) -> Vec<TextInfo> {
    let mut overlapping: Vec<&FloatingObject> = objects
        .iter()
        .filter(|obj| overlaps(info.rect, obj.rect))
        .collect();
    if overlapping.is_empty() {
        return alloc::vec![info.clone()];
    }
    match info.direction {
        WritingDirection::Horizontal => {
            overlapping.sort_by(|a, b| a.rect.y0.total_cmp(&b.rect.y0));
        }
        WritingDirection::Vertical => {
            overlapping.sort_by(|a, b| b.rect.x1.total_cmp(&a.rect.x1));
        }
    }

    let mut rects: Vec<Rect> = alloc::vec![info.rect];
    for obj in overlapping {
        let mut touched = 0_usize;
        rects = rects
            .into_iter()
            .flat_map(|r| {
                if overlaps(r, obj.rect) {
                    touched += 1;
                    cut(r, obj.rect, info.direction)
                        .into_iter()
                        .filter(has_area)
                        .collect::<Vec<_>>()
                } else {
                    alloc::vec![r]
                }
            })
            .collect();
        log::trace!("floating object {:?} cut {touched} pieces of {:?}", obj.id, info.id);
    }

    let container = info.id.container();
    let pieces: Vec<TextInfo> = rects
        .into_iter()
        .zip(0_u32..)
        .map(|(rect, index)| TextInfo {
            id: TextId::Piece { container, index },
            rect,
            ..info.clone()
        })
        .collect();
    log::trace!("container {:?} split into {} pieces", info.id, pieces.len());
    pieces
}
