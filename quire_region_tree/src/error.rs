// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::types::NodeId;

/// Structural invariant violations in a [`RegionTree`](crate::RegionTree).
///
/// These indicate a bug in whatever built the tree, not bad user input.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TreeError {
    /// The ratios of a region's children do not sum to 1.
    #[error("child ratios of region {node} sum to {sum}, expected 1")]
    RatioSum {
        /// The parent region.
        node: NodeId,
        /// Actual sum of the child ratios.
        sum: f64,
    },
    /// A region reached layout resolution without any children.
    #[error("region {0} has no children; attach text containers before resolving")]
    EmptyRegion(NodeId),
    /// A region that already has children was split again.
    #[error("region {0} is already split")]
    AlreadySplit(NodeId),
    /// A text container was used where a region was required.
    #[error("node {0} is a text container, not a region")]
    NotARegion(NodeId),
}
