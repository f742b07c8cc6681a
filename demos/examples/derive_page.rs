// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derive an A4 page from strokes and flow text into it.
//!
//! The strokes draw a header rule, a column rule below it, a photo
//! placeholder in the right column, and a text stroke through both columns.
//! A decoration stroke pads the header.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p quire_demos --example derive_page`

use std::collections::BTreeMap;

use kurbo::Size;
use quire_flow::{AdvanceMeasurer, Paragraph};
use quire_page::{Locus, PageConfig, PenType, derive_page, flow_page};
use quire_region_tree::{BoxDecoration, NodeKind};

fn strokes() -> Vec<Locus> {
    vec![
        // Header rule across the page.
        Locus::new(0, PenType::Region(0), [(3.0, 60.0), (105.0, 61.0), (207.0, 60.0)]),
        // Column rule, stopping short of the header rule.
        Locus::new(1, PenType::Region(0), [(105.0, 66.0), (104.0, 180.0), (105.0, 292.0)]),
        // Photo outline in the right column, closed by overshooting its start.
        Locus::new(
            2,
            PenType::Region(0),
            [(125.0, 110.0), (190.0, 110.0), (190.0, 170.0), (125.0, 170.0), (130.0, 100.0)],
        ),
        // Hatch across the outline marks it as a photo.
        Locus::new(3, PenType::Region(0), [(135.0, 160.0), (160.0, 140.0), (180.0, 120.0)]),
        // Decoration pen 0 inside the header.
        Locus::new(4, PenType::Decoration(0), [(20.0, 20.0), (180.0, 40.0)]),
        // Body text runs down the left column, then the right.
        Locus::new(5, PenType::Text(0), [(50.0, 150.0), (150.0, 250.0)]),
        // Heading text.
        Locus::new(6, PenType::Text(1), [(100.0, 30.0)]),
        // A note to self; ignored by layout.
        Locus::new(7, PenType::Memo, [(10.0, 10.0), (12.0, 12.0)]),
    ]
}

fn main() {
    env_logger::init();

    let styles = [BoxDecoration::inset(0.0, 8.0)];
    let page = match derive_page(&strokes(), &styles, Size::new(210.0, 297.0), &PageConfig::default()) {
        Ok(page) => page,
        Err(err) => {
            log::error!("derivation failed: {err}");
            return;
        }
    };

    println!("regions:");
    for info in &page.layout.regions {
        let depth = std::iter::successors(page.tree.parent_of(info.id), |&p| page.tree.parent_of(p)).count();
        let split = match page.tree.get(info.id) {
            Some(NodeKind::Region(r)) if !info.is_leaf() => format!("{:?} split", r.split),
            _ => "leaf".to_string(),
        };
        println!("  {}{} {:?} ({split})", "  ".repeat(depth), info.id, info.rect);
    }
    for obj in page.floating_objects.values() {
        println!("floating object {:?} at {:?}", obj.id, obj.rect);
    }
    for (pen, ids) in &page.pen_text_ids {
        println!("text pen {pen}: {} containers", ids.len());
    }

    let body = Paragraph {
        font_size: 4.0,
        line_height: 1.4,
        ..Paragraph::new("Quire lays text out in the regions drawn by hand. ".repeat(60))
    };
    let heading = Paragraph {
        font_size: 9.0,
        weight: 600,
        ..Paragraph::new("Sketch to page")
    };
    let text = BTreeMap::from([(0, vec![body]), (1, vec![heading])]);

    match flow_page(&AdvanceMeasurer::default(), &page, &text) {
        Ok(flowed) => {
            for (pen, result) in &flowed {
                let placed: Vec<usize> = result
                    .containers
                    .iter()
                    .map(|chunks| chunks.iter().map(Paragraph::char_len).sum())
                    .collect();
                let overflow: usize = result.overflow.iter().map(Paragraph::char_len).sum();
                println!("pen {pen}: characters per container {placed:?}, overflow {overflow}");
            }
        }
        Err(err) => log::error!("flow failed: {err}"),
    }
}
