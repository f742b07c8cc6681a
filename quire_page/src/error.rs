// Copyright 2025 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use quire_flow::FlowError;
use quire_region_tree::TreeError;

/// Failure while deriving or filling a page.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DeriveError {
    /// The derived region tree is inconsistent.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// Text could not be flowed into the page.
    #[error(transparent)]
    Flow(#[from] FlowError),
}
