// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first search engine over cloneable constraint spaces.
//!
//! This crate implements the search half of a constraint-satisfaction
//! solver: an iterative, backtracking, depth-first enumeration of the
//! solutions of a branching decision space. The propagation half (what
//! the decisions *mean*) lives behind the [`Space`] trait and is supplied
//! by the caller.
//!
//! # Architecture
//!
//! The crate splits into two tiers:
//!
//! ## Capability contract ([`space`])
//!
//! The [`Space`] trait is the engine's only view of the problem domain:
//! - `status()` classifies a space as [`Status::Solved`],
//!   [`Status::Branch`] (carrying a [`Choice`]), or [`Status::Failed`]
//! - `commit(choice, alternative)` advances a space along one alternative
//! - `try_clone()` produces an independent copy for a backtrack point
//!
//! ## Search engine ([`engine`])
//!
//! [`SearchEngine`] drives the search with an explicit frame stack rather
//! than recursion, so arbitrarily deep trees never exhaust the host call
//! stack. The stack itself is the whole resumable state: each
//! [`next_solution`](SearchEngine::next_solution) call runs until the next
//! solution and suspends there, and [`Solutions`] wraps that as a lazy
//! iterator.
//!
//! # Search Algorithm
//!
//! At each branch point the engine tries alternatives in increasing index
//! order, cloning the space only while later alternatives still need the
//! original as a backtrack point; the last alternative at every level is
//! committed in place. Failed spaces are pruned silently. Solutions are
//! produced in strict left-to-right, depth-first order.
//!
//! # Parallelization
//!
//! The engine is single-threaded and cooperative. Because every frame owns
//! its space exclusively and cloning is the only fan-out mechanism, the
//! design extends to parallel exploration by handing frames to a
//! work-stealing pool; that is out of scope here.
//!
//! # Example
//!
//! ```
//! use space_search::SearchEngine;
//! use space_search::space::test::{Script, TreeSpace};
//!
//! let root = TreeSpace::new(Script::Branch(vec![
//!     Script::Branch(vec![Script::Solved("a"), Script::Failed]),
//!     Script::Solved("b"),
//! ]));
//!
//! let labels: Vec<_> = SearchEngine::new(root)
//!     .into_iter()
//!     .map(|solution| solution.unwrap().label().unwrap())
//!     .collect();
//! assert_eq!(labels, vec!["a", "b"]);
//! ```

pub mod engine;
pub mod space;

// Re-export commonly used types
pub use engine::{Counter, SearchEngine, SearchError, Solutions, Statistics};
pub use space::{Choice, Space, SpaceError, Status};
