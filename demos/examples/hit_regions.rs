// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing a derived page the way an editor does on pointer down.
//!
//! For a few pointer positions this prints the region under the pointer, the
//! border (if any) that would be dragged with the stroke that made it and the
//! region across it, and the stroke that an eraser would remove.
//!
//! Run:
//! - `cargo run -p quire_demos --example hit_regions`

use kurbo::{Point, Size};
use quire_geometry::Edge;
use quire_hit::stroke::locus_hit;
use quire_hit::{HitParams, border_hit, border_neighbor, stroke_for_border, surface_hit};
use quire_page::{Locus, PageConfig, PenType, derive_page};
use quire_region_tree::RegionFilter;

fn main() {
    env_logger::init();

    let loci = vec![
        Locus::new(10, PenType::Region(0), [(0.0, 100.0), (200.0, 100.0)]),
        Locus::new(11, PenType::Region(0), [(80.0, 104.0), (80.0, 300.0)]),
    ];
    let page = match derive_page(&loci, &[], Size::new(200.0, 300.0), &PageConfig::default()) {
        Ok(page) => page,
        Err(err) => {
            log::error!("derivation failed: {err}");
            return;
        }
    };
    let params = HitParams::default();

    for point in [
        Point::new(-5.0, 50.0),
        Point::new(40.0, 50.0),
        Point::new(100.0, 102.0),
        Point::new(78.0, 200.0),
        Point::new(150.0, 250.0),
    ] {
        print!("{point:?}:");
        if surface_hit(&[point], &page.layout).is_none() {
            println!(" off the page");
            continue;
        }
        if let Some(leaf) = page
            .layout
            .regions_containing(point, RegionFilter::new().leaf())
            .next()
        {
            print!(" over {}", leaf.id);
        }
        if let Some((info, edge)) = border_hit(point, &page.tree, &page.layout, &params) {
            let stroke = stroke_for_border(&page.alignment, info.id, edge);
            let across = border_neighbor(&page.tree, info.id, edge);
            print!(" border {edge:?} of {} (stroke {stroke:?}, across {across:?})", info.id);
            if matches!(edge, Edge::Left | Edge::Right) {
                print!(" drags horizontally");
            }
        }
        if let Some(hit) = locus_hit(&loci, point, &params) {
            print!(" erases {:?} at {:.1}mm", hit.id, hit.distance);
        }
        println!();
    }
}
