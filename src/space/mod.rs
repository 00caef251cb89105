// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The capability contract consumed by the search engine.
//!
//! A [`Space`] is one point in the search tree: a (possibly partial)
//! assignment plus whatever internal propagation state the constraint
//! engine maintains. The search engine never looks inside a space; it only
//! queries its [`Status`], commits alternatives of a [`Choice`], and clones
//! it to preserve backtrack points.
//!
//! # Contract
//!
//! - `status()` is a pure query: idempotent and side-effect free. It is
//!   recomputed from the space's internal state, never cached across a
//!   `commit`.
//! - `commit()` is the only mutating operation, and is deterministic for a
//!   given `(choice, alternative)` pair. A choice may only be committed
//!   against the space that produced it or a clone of that space;
//!   committing it anywhere else must fail with
//!   [`SpaceError::ForeignChoice`].
//! - `try_clone()` produces a fully independent copy: mutating the clone
//!   never affects the original and vice versa. Failure (resource
//!   exhaustion) is fatal to the search that requested it.
//!
//! # Example
//!
//! ```
//! use space_search::{Choice, Space, SpaceError, Status};
//!
//! /// Enumerates all bit strings of a fixed length.
//! #[derive(Debug, Clone)]
//! struct Bits {
//!     bits: Vec<bool>,
//!     len: usize,
//! }
//!
//! #[derive(Debug)]
//! struct NextBit {
//!     position: usize,
//! }
//!
//! impl Choice for NextBit {
//!     fn alternatives(&self) -> usize {
//!         2
//!     }
//! }
//!
//! impl Space for Bits {
//!     type Choice = NextBit;
//!
//!     fn status(&self) -> Status<NextBit> {
//!         if self.bits.len() == self.len {
//!             Status::Solved
//!         } else {
//!             Status::Branch(NextBit { position: self.bits.len() })
//!         }
//!     }
//!
//!     fn commit(&mut self, choice: &NextBit, alternative: usize) -> Result<(), SpaceError> {
//!         if alternative >= 2 {
//!             return Err(SpaceError::AlternativeOutOfRange { alternative, alternatives: 2 });
//!         }
//!         if choice.position != self.bits.len() {
//!             return Err(SpaceError::ForeignChoice);
//!         }
//!         self.bits.push(alternative == 1);
//!         Ok(())
//!     }
//!
//!     fn try_clone(&self) -> Result<Self, SpaceError> {
//!         Ok(self.clone())
//!     }
//! }
//! ```

pub mod test;

use std::fmt::Debug;

/// Result of evaluating a space: solved, still branching, or inconsistent.
///
/// `Branch` carries the choice describing the pending decision, so there is
/// no way to obtain a choice from a solved or failed space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status<C> {
    /// No more decisions needed; the space is a valid solution.
    Solved,

    /// Decisions remain; the choice describes the next one.
    Branch(C),

    /// The space is inconsistent. It is discarded, never yielded, never
    /// branched.
    Failed,
}

impl<C> Status<C> {
    /// True if this status is `Solved`.
    pub fn is_solved(&self) -> bool {
        matches!(self, Status::Solved)
    }

    /// True if this status is `Failed`.
    pub fn is_failed(&self) -> bool {
        matches!(self, Status::Failed)
    }
}

/// An immutable descriptor of one branching decision.
///
/// Produced by exactly one space, consumed by `commit` on that space or a
/// clone of it. The alternative count must be stable for the choice's
/// lifetime; the engine reads it once when the choice is pushed.
pub trait Choice: Debug {
    /// Number of numbered alternatives this choice offers.
    ///
    /// A count of zero is legal and means the branch point has nothing to
    /// try: the engine exhausts it immediately without committing.
    fn alternatives(&self) -> usize;
}

/// A mutable decision state, supplied by the external constraint engine.
///
/// See the module docs for the full contract. The engine is generic over
/// this trait and assumes nothing about the concrete representation.
pub trait Space: Debug + Sized {
    /// The choice type this space produces at branch points.
    type Choice: Choice;

    /// Evaluate the current status. Pure query; callable at any time after
    /// construction or after a `commit`.
    fn status(&self) -> Status<Self::Choice>;

    /// Mutate this space to reflect having chosen `alternative` of
    /// `choice`.
    ///
    /// Requires `alternative < choice.alternatives()` and that `choice`
    /// was produced by this space or an ancestor clone at the same depth.
    /// Violations are contract errors, not search outcomes: the engine
    /// fails fast instead of pruning.
    fn commit(&mut self, choice: &Self::Choice, alternative: usize) -> Result<(), SpaceError>;

    /// Produce an independent copy of this space.
    ///
    /// An error here is fatal to the search: the engine does not retry and
    /// becomes unusable (see [`crate::SearchError`]).
    fn try_clone(&self) -> Result<Self, SpaceError>;
}

/// Contract errors reported by a [`Space`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    /// `commit` was called with an alternative index at or past the
    /// choice's alternative count.
    #[error("alternative {alternative} out of range: choice has {alternatives} alternatives")]
    AlternativeOutOfRange {
        /// The offending index.
        alternative: usize,
        /// The choice's alternative count.
        alternatives: usize,
    },

    /// `commit` was called with a choice produced by an unrelated space.
    #[error("choice was produced by a different space")]
    ForeignChoice,

    /// `try_clone` could not produce a copy (resource exhaustion).
    #[error("clone failed: {reason}")]
    CloneFailed {
        /// Implementation-supplied description of the failure.
        reason: String,
    },
}
