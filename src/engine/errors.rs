// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fatal error types for the search engine.
//!
//! Ordinary pruning (a `Failed` space) is not an error and never appears
//! here: it is handled entirely inside the engine loop. The errors below
//! indicate either a bug in a [`crate::Space`] implementation or resource
//! exhaustion, and in both cases the engine stops immediately: the stack is
//! released and every later call answers [`SearchError::Poisoned`].

use crate::space::SpaceError;

/// A fatal error that ends the current search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A space broke its contract: `commit` rejected an alternative the
    /// engine derived from the space's own choice. This indicates a bug,
    /// not a normal search outcome.
    #[error("space contract violated: {0}")]
    ContractViolation(#[source] SpaceError),

    /// `try_clone` failed while preserving a backtrack point. The search
    /// cannot continue on a partial stack.
    #[error("could not clone space: {0}")]
    CloneFailed(#[source] SpaceError),

    /// The engine was used again after a fatal error.
    #[error("search engine is unusable after a fatal error")]
    Poisoned,
}
