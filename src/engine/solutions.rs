// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy solution sequence over a search engine.
//!
//! [`Solutions`] adapts [`SearchEngine`](crate::SearchEngine) to the
//! `Iterator` protocol. The sequence is lazy: each `next()` call runs the
//! engine until the following solution appears, so a consumer that stops
//! iterating stops the search, and dropping the iterator releases every
//! frame still on the stack without further exploration.
//!
//! A fatal engine error is yielded once as an `Err` item; after that the
//! sequence ends (the engine's poisoned answers are not repeated as
//! items). The sequence is restartable only by building a fresh engine
//! from a fresh root space.
//!
//! # Example
//!
//! ```
//! use space_search::SearchEngine;
//! use space_search::space::test::BitStringSpace;
//!
//! // Lazily take the first three of 2^8 solutions; the rest of the tree
//! // is never explored.
//! let values: Vec<u64> = SearchEngine::new(BitStringSpace::new(8))
//!     .into_iter()
//!     .take(3)
//!     .map(|solution| solution.unwrap().value())
//!     .collect();
//! assert_eq!(values, vec![0, 1, 2]);
//! ```

use crate::engine::{SearchEngine, SearchError};
use crate::space::Space;

/// Iterator over the solutions of a [`SearchEngine`].
///
/// Obtained from [`SearchEngine::into_iter`]. Yields
/// `Result<S, SearchError>`: solved spaces until exhaustion, with at most
/// one trailing `Err` if the search died on a fatal error.
#[derive(Debug)]
pub struct Solutions<S: Space> {
    engine: SearchEngine<S>,
}

impl<S: Space> Solutions<S> {
    /// Access the underlying engine, e.g. for its statistics.
    pub fn engine(&self) -> &SearchEngine<S> {
        &self.engine
    }

    /// Recover the underlying engine.
    pub fn into_engine(self) -> SearchEngine<S> {
        self.engine
    }
}

impl<S: Space> Iterator for Solutions<S> {
    type Item = Result<S, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.engine.next_solution() {
            Ok(Some(solution)) => Some(Ok(solution)),
            Ok(None) => None,
            // The fatal error was already yielded on an earlier call; the
            // sequence is over.
            Err(SearchError::Poisoned) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl<S: Space> IntoIterator for SearchEngine<S> {
    type Item = Result<S, SearchError>;
    type IntoIter = Solutions<S>;

    fn into_iter(self) -> Solutions<S> {
        Solutions { engine: self }
    }
}
