// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first search engine over cloneable spaces.
//!
//! This module implements an iterative backtracking search over any
//! [`Space`] implementation. The engine maintains an explicit stack of
//! frames instead of recursing, so the depth it can reach is bounded only
//! by the search tree, never by the host call stack.
//!
//! # Architecture
//!
//! Each frame on the stack tracks one branch point:
//! - An owned space, kept uncommitted as the backtrack point
//! - The choice the space produced
//! - The next alternative index to try
//! - The total alternative count
//!
//! The engine loop, run until a solution appears or the stack empties:
//! 1. If the top frame has exhausted its alternatives: pop it (backtrack)
//! 2. Otherwise reserve the next alternative index at that frame
//! 3. If further alternatives remain after it: clone the frame's space and
//!    commit on the clone, leaving the original in the frame
//! 4. If it is the last alternative: consume the frame and commit in place
//! 5. Evaluate the committed space: `Solved` is returned to the caller,
//!    `Branch` pushes a new frame, `Failed` is dropped silently
//!
//! Step 3/4 is the cost-saving invariant: a full run clones exactly
//! `alternatives - 1` times per visited branch point, never more. The last
//! alternative at every level is explored without copying.
//!
//! Solutions come out in strict left-to-right, depth-first order: a
//! level's subtree is fully exhausted before its next sibling is tried.
//! This ordering is part of the engine's contract, since callers may rely
//! on "first solution found" semantics.
//!
//! # Example
//!
//! ```
//! use space_search::SearchEngine;
//! use space_search::space::test::{Script, TreeSpace};
//!
//! let script = Script::Branch(vec![
//!     Script::Branch(vec![Script::Solved("a"), Script::Failed]),
//!     Script::Solved("b"),
//! ]);
//! let mut engine = SearchEngine::new(TreeSpace::new(script));
//!
//! let first = engine.next_solution().unwrap().unwrap();
//! assert_eq!(first.label(), Some("a"));
//! let second = engine.next_solution().unwrap().unwrap();
//! assert_eq!(second.label(), Some("b"));
//! assert!(engine.next_solution().unwrap().is_none()); // exhausted
//! ```

pub mod errors;
pub mod solutions;
pub mod statistics;

pub use errors::SearchError;
pub use solutions::Solutions;
pub use statistics::{Counter, Statistics};

use tracing::{debug, trace};

use crate::space::{Choice, Space, Status};

/// One level of the explicit search stack.
///
/// A frame owns its space exclusively; the space stays uncommitted while
/// the frame is on the stack, serving as the backtrack point for every
/// alternative except the last.
#[derive(Debug)]
struct Frame<S: Space> {
    /// The uncommitted space at this branch point.
    space: S,

    /// The choice the space produced.
    choice: S::Choice,

    /// Next alternative index to try at this level.
    next_alternative: usize,

    /// Total alternative count, read once when the frame was pushed.
    alternatives: usize,
}

/// Iterative depth-first search over a space's decision tree.
///
/// Constructed from a root space, the engine produces solved spaces one at
/// a time through [`next_solution`](SearchEngine::next_solution), or as a
/// lazy sequence through [`IntoIterator`]. The frame stack is the entire
/// resumable state: after a solution is returned, the next call picks up
/// exactly where the search left off.
///
/// Dropping the engine at any point is always safe: remaining frames and
/// their spaces are released without further exploration.
#[derive(Debug)]
pub struct SearchEngine<S: Space> {
    /// The root space, consumed on the first `next_solution` call.
    root: Option<S>,

    /// Stack of frames; top = deepest unexplored branch point.
    stack: Vec<Frame<S>>,

    /// Set after a fatal error; the engine refuses further work.
    poisoned: bool,

    /// Event counts for diagnostics and tests.
    statistics: Statistics,
}

impl<S: Space> SearchEngine<S> {
    /// Create an engine that will explore from the given root space.
    ///
    /// No work happens here; the root's status is first evaluated inside
    /// the first [`next_solution`](SearchEngine::next_solution) call.
    pub fn new(root: S) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
            poisoned: false,
            statistics: Statistics::new(),
        }
    }

    /// Run the search until the next solution is found.
    ///
    /// Returns:
    /// - `Ok(Some(space))`: a solved space; calling again resumes the
    ///   search after it
    /// - `Ok(None)`: the search is exhausted, no more solutions ever
    /// - `Err(_)`: a fatal error (contract violation or clone failure);
    ///   the stack has been released and the engine is unusable, every
    ///   later call answers [`SearchError::Poisoned`]
    ///
    /// Failed spaces are pruned silently along the way: they are ordinary
    /// control flow, not errors.
    pub fn next_solution(&mut self) -> Result<Option<S>, SearchError> {
        if self.poisoned {
            return Err(SearchError::Poisoned);
        }
        match self.run() {
            Ok(solution) => Ok(solution),
            Err(err) => {
                debug!(error = %err, "fatal error, releasing the stack");
                self.poisoned = true;
                self.root = None;
                self.stack.clear();
                Err(err)
            }
        }
    }

    /// Get the engine's event counts.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Current frame stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True once the search can produce no further solutions.
    pub fn is_exhausted(&self) -> bool {
        self.root.is_none() && self.stack.is_empty()
    }

    /// The engine loop of the module docs. Errors are mapped to their
    /// fatal variants here; `next_solution` handles the poisoning.
    fn run(&mut self) -> Result<Option<S>, SearchError> {
        if let Some(root) = self.root.take() {
            trace!("evaluating root space");
            if let Some(solution) = self.enter(root) {
                return Ok(Some(solution));
            }
        }

        loop {
            let exhausted = match self.stack.last() {
                None => {
                    debug!("search exhausted");
                    return Ok(None);
                }
                Some(frame) => frame.next_alternative == frame.alternatives,
            };

            if exhausted {
                self.stack.pop();
                self.statistics.increment(Counter::Backtracks);
                trace!(depth = self.stack.len(), "backtracked");
                continue;
            }

            // Reserve the next alternative at this level.
            let frame = self.stack.last_mut().expect("stack checked above");
            let alternative = frame.next_alternative;
            frame.next_alternative += 1;

            let space = if alternative + 1 < frame.alternatives {
                // Alternatives remain after this one: the frame's space
                // must survive as the backtrack point, so commit on a
                // clone.
                let mut clone = frame.space.try_clone().map_err(SearchError::CloneFailed)?;
                clone
                    .commit(&frame.choice, alternative)
                    .map_err(SearchError::ContractViolation)?;
                self.statistics.increment(Counter::Clones);
                clone
            } else {
                // Last alternative: nothing is left to backtrack to at
                // this frame, so consume it and commit in place.
                let Frame {
                    mut space, choice, ..
                } = self.stack.pop().expect("stack checked above");
                self.statistics.increment(Counter::Backtracks);
                space
                    .commit(&choice, alternative)
                    .map_err(SearchError::ContractViolation)?;
                space
            };
            self.statistics.increment(Counter::Commits);
            trace!(alternative, depth = self.stack.len(), "committed");

            if let Some(solution) = self.enter(space) {
                return Ok(Some(solution));
            }
        }
    }

    /// Evaluate a freshly committed (or root) space and route it: yield,
    /// push, or prune.
    fn enter(&mut self, space: S) -> Option<S> {
        match space.status() {
            Status::Solved => {
                self.statistics.increment(Counter::Solutions);
                debug!(depth = self.stack.len(), "solution found");
                Some(space)
            }
            Status::Branch(choice) => {
                let alternatives = choice.alternatives();
                self.stack.push(Frame {
                    space,
                    choice,
                    next_alternative: 0,
                    alternatives,
                });
                self.statistics.increment(Counter::Branches);
                self.statistics.record_depth(self.stack.len());
                trace!(alternatives, depth = self.stack.len(), "branched");
                None
            }
            Status::Failed => {
                self.statistics.increment(Counter::Pruned);
                trace!(depth = self.stack.len(), "pruned");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::test::{Script, TreeSpace};

    #[test]
    fn test_solved_root_yields_once() {
        let mut engine = SearchEngine::new(TreeSpace::new(Script::Solved("root")));

        let solution = engine.next_solution().unwrap().unwrap();
        assert_eq!(solution.label(), Some("root"));
        assert!(engine.next_solution().unwrap().is_none());
        assert!(engine.is_exhausted());
    }

    #[test]
    fn test_failed_root_is_exhausted() {
        let mut engine = SearchEngine::new(TreeSpace::new(Script::Failed));

        assert!(engine.next_solution().unwrap().is_none());
        assert_eq!(engine.statistics().get(Counter::Pruned), 1);
        assert_eq!(engine.statistics().get(Counter::Solutions), 0);
    }

    #[test]
    fn test_left_to_right_depth_first_order() {
        let script = Script::Branch(vec![
            Script::Branch(vec![Script::Solved("0.0"), Script::Solved("0.1")]),
            Script::Solved("1"),
            Script::Branch(vec![Script::Failed, Script::Solved("2.1")]),
        ]);
        let mut engine = SearchEngine::new(TreeSpace::new(script));

        let mut labels = Vec::new();
        while let Some(solution) = engine.next_solution().unwrap() {
            labels.push(solution.label().unwrap());
        }
        assert_eq!(labels, vec!["0.0", "0.1", "1", "2.1"]);
    }

    #[test]
    fn test_last_alternative_commits_without_clone() {
        // Single alternative at the root: no clone should ever be made.
        let script = Script::Branch(vec![Script::Solved("only")]);
        let mut engine = SearchEngine::new(TreeSpace::new(script));

        let solution = engine.next_solution().unwrap().unwrap();
        assert_eq!(solution.label(), Some("only"));
        assert_eq!(solution.clone_count(), 0);
        assert_eq!(engine.statistics().get(Counter::Clones), 0);
    }

    #[test]
    fn test_zero_alternative_choice_pops_without_committing() {
        // A branch with no alternatives exhausts immediately; its sibling
        // is still explored.
        let script = Script::Branch(vec![Script::Branch(vec![]), Script::Solved("sibling")]);
        let mut engine = SearchEngine::new(TreeSpace::new(script));

        let solution = engine.next_solution().unwrap().unwrap();
        assert_eq!(solution.label(), Some("sibling"));
        assert!(engine.next_solution().unwrap().is_none());
        // Root branch + empty branch pushed, both popped.
        assert_eq!(engine.statistics().get(Counter::Branches), 2);
    }

    #[test]
    fn test_statistics_counts() {
        let script = Script::Branch(vec![
            Script::Branch(vec![Script::Solved("a"), Script::Failed]),
            Script::Solved("b"),
        ]);
        let mut engine = SearchEngine::new(TreeSpace::new(script));
        while engine.next_solution().unwrap().is_some() {}

        let stats = engine.statistics();
        assert_eq!(stats.get(Counter::Solutions), 2);
        assert_eq!(stats.get(Counter::Pruned), 1);
        assert_eq!(stats.get(Counter::Clones), 2);
        // One commit per tree edge walked: 2 at the root + 2 below.
        assert_eq!(stats.get(Counter::Commits), 4);
        assert_eq!(stats.get(Counter::Branches), 2);
        // Both frames ended by consuming their last alternative.
        assert_eq!(stats.get(Counter::Backtracks), 2);
        assert_eq!(stats.max_depth(), 2);
    }

    #[test]
    fn test_depth_reflects_open_frames() {
        let script = Script::Branch(vec![
            Script::Branch(vec![Script::Solved("a"), Script::Solved("b")]),
            Script::Solved("c"),
        ]);
        let mut engine = SearchEngine::new(TreeSpace::new(script));
        assert_eq!(engine.depth(), 0);

        engine.next_solution().unwrap().unwrap();
        // Suspended inside the inner branch: both frames still open.
        assert_eq!(engine.depth(), 2);
    }
}
