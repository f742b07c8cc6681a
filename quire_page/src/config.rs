// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use quire_geometry::SplitDirection;
use quire_region_tree::WritingDirection;

/// Which regions a decoration stroke selects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecorationMatch {
    /// Regions containing every point of the stroke; the innermost wins.
    #[default]
    Enclosing,
    /// Leaf regions containing at least one point of the stroke.
    Touching,
}

/// Tunables for [`derive_page`](crate::derive_page).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageConfig {
    /// Open interval of chord angles, in degrees, that mark a closed region
    /// stroke as a floating object.
    pub diagonal_angles: (f64, f64),
    /// Axis the page root is treated as having been split along when both
    /// axes could split it first.
    pub root_parent_split: SplitDirection,
    /// Writing direction given to every text container.
    pub writing_direction: WritingDirection,
    /// How decoration strokes select regions.
    pub decoration_match: DecorationMatch,
    /// Image reference given to every floating object.
    pub placeholder_image: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            diagonal_angles: (30.0, 70.0),
            root_parent_split: SplitDirection::Horizontal,
            writing_direction: WritingDirection::Horizontal,
            decoration_match: DecorationMatch::Enclosing,
            placeholder_image: None,
        }
    }
}

impl PageConfig {
    /// Whether `angle` lies strictly inside the diagonal window.
    pub fn is_diagonal(&self, angle: f64) -> bool {
        let (lo, hi) = self.diagonal_angles;
        lo < angle && angle < hi
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: PageConfig =
            serde_json::from_str(r#"{ "decoration_match": "Touching" }"#).unwrap();
        assert_eq!(config.decoration_match, DecorationMatch::Touching);
        assert_eq!(config.diagonal_angles, (30.0, 70.0));

        let json = serde_json::to_string(&PageConfig::default()).unwrap();
        let back: PageConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PageConfig::default());
    }
}
