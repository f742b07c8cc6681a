// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and box-model decorations.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use quire_geometry::{Edge, Edges};

/// A color in one of the supported color spaces.
///
/// Components are in the ranges used by print tooling: CMYK percentages in
/// `0..=100`, RGB channels in `0..=255`, and HSL as degrees plus percentages.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "space", content = "value", rename_all = "lowercase"))]
pub enum Color {
    /// Cyan, magenta, yellow, and key percentages.
    Cmyk([f64; 4]),
    /// Red, green, and blue channels.
    Rgb([f64; 3]),
    /// Hue in degrees, saturation and lightness percentages.
    Hsl([f64; 3]),
}

impl Default for Color {
    fn default() -> Self {
        Self::Cmyk([0.0; 4])
    }
}

impl Color {
    /// Convert to rounded 8-bit RGB channels.
    pub fn to_rgb(self) -> [u8; 3] {
        match self {
            Self::Rgb([r, g, b]) => [channel(r), channel(g), channel(b)],
            Self::Cmyk([c, m, y, k]) => {
                let k0 = 255.0 * k / 100.0;
                let mix = |v: f64| (255.0 - 255.0 * v / 100.0) * (255.0 - k0) / 255.0;
                [channel(mix(c)), channel(mix(m)), channel(mix(y))]
            }
            Self::Hsl([h, s, l]) => {
                let h = (h + 360.0) % 360.0;
                let spread = if l <= 49.0 { l } else { 100.0 - l };
                let max = 2.55 * (l + spread * (s / 100.0));
                let min = 2.55 * (l - spread * (s / 100.0));
                let ramp = |t: f64| min + (max - min) * (t / 60.0);
                let (r, g, b) = if h < 60.0 {
                    (max, ramp(h), min)
                } else if h < 120.0 {
                    (ramp(120.0 - h), max, min)
                } else if h < 180.0 {
                    (min, max, ramp(h - 120.0))
                } else if h < 240.0 {
                    (min, ramp(240.0 - h), max)
                } else if h < 300.0 {
                    (ramp(h - 240.0), min, max)
                } else {
                    (max, min, ramp(360.0 - h))
                };
                [channel(r), channel(g), channel(b)]
            }
        }
    }
}

fn channel(v: f64) -> u8 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Value is rounded and clamped to the u8 range first."
    )]
    let c = v.round().clamp(0.0, 255.0) as u8;
    c
}

/// One edge's border stroke.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    /// Stroke width in millimeters. Zero means no border.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

/// Fill and border, shared by regions and text containers.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoration {
    /// Optional background fill.
    pub fill: Option<Color>,
    /// Per-edge border.
    pub border: Edges<Border>,
}

/// Box-model decoration applied to a region.
///
/// The default is undecorated: no fill, zero-width borders, and zero margin,
/// padding, and radius.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxDecoration {
    /// Fill and border.
    pub decoration: Decoration,
    /// Space removed from the region's rectangle before it is recorded.
    pub margin: Edges<f64>,
    /// Space between the region's rectangle and its children.
    pub padding: Edges<f64>,
    /// Corner radius.
    pub radius: f64,
}

impl BoxDecoration {
    /// Uniform margin and padding, no fill or border.
    pub fn inset(margin: f64, padding: f64) -> Self {
        Self {
            margin: Edges::all(margin),
            padding: Edges::all(padding),
            ..Self::default()
        }
    }

    /// Rectangles covering each visible border stroke, centered on the edges of `rect`.
    ///
    /// Edges with zero width are skipped. Order is top, right, bottom, left.
    pub fn border_rects(&self, rect: Rect) -> impl Iterator<Item = (Edge, Rect)> + '_ {
        self.decoration.border.iter().filter_map(move |(edge, border)| {
            if border.width <= 0.0 {
                return None;
            }
            let half = border.width / 2.0;
            let r = match edge {
                Edge::Top => Rect::new(rect.x0 - half, rect.y0 - half, rect.x1 + half, rect.y0 + half),
                Edge::Right => Rect::new(rect.x1 - half, rect.y0 - half, rect.x1 + half, rect.y1 + half),
                Edge::Bottom => Rect::new(rect.x0 - half, rect.y1 - half, rect.x1 + half, rect.y1 + half),
                Edge::Left => Rect::new(rect.x0 - half, rect.y0 - half, rect.x0 + half, rect.y1 + half),
            };
            Some((edge, r))
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn colors_are_tagged_by_space() {
        let json = serde_json::to_string(&Color::Rgb([1.0, 2.0, 3.0])).unwrap();
        assert_eq!(json, r#"{"space":"rgb","value":[1.0,2.0,3.0]}"#);
        let back: Color = serde_json::from_str(r#"{"space":"cmyk","value":[0,0,0,100]}"#).unwrap();
        assert_eq!(back, Color::Cmyk([0.0, 0.0, 0.0, 100.0]));
    }

    #[test]
    fn box_decoration_survives_json() {
        let deco = BoxDecoration {
            radius: 2.0,
            ..BoxDecoration::inset(1.0, 4.0)
        };
        let json = serde_json::to_string(&deco).unwrap();
        let back: BoxDecoration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deco);
    }
}
