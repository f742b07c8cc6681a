// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use quire_region_tree::TextId;

/// Failure reported by a [`TextMeasurer`](crate::TextMeasurer).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MeasureError {
    /// The line length is zero, negative, or not finite.
    #[error("line measure {0} is not a positive finite length")]
    InvalidMeasure(f64),
    /// The measuring backend failed.
    #[error("text measurement failed: {0}")]
    Backend(String),
}

/// Failure while flowing text into containers.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FlowError {
    /// The measurer failed for a paragraph placed in `container`.
    #[error("measuring text for container {container:?} failed")]
    Measure {
        /// The container being filled.
        container: TextId,
        /// The measurer's error.
        source: MeasureError,
    },
}
