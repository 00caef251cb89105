// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use space_search::{Choice, Space, SpaceError, Status};

/// Install a tracing subscriber honoring `RUST_LOG`, once per process.
///
/// Run tests with `RUST_LOG=space_search=trace` to watch the engine work.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A space whose choice claims more alternatives than its `commit`
/// accepts.
///
/// Used to check that the engine surfaces a broken space contract as a
/// fatal error instead of pruning it.
#[derive(Debug)]
pub struct OverclaimSpace;

#[derive(Debug)]
pub struct OverclaimChoice;

impl Choice for OverclaimChoice {
    fn alternatives(&self) -> usize {
        3
    }
}

impl Space for OverclaimSpace {
    type Choice = OverclaimChoice;

    fn status(&self) -> Status<OverclaimChoice> {
        Status::Branch(OverclaimChoice)
    }

    fn commit(&mut self, _choice: &OverclaimChoice, alternative: usize) -> Result<(), SpaceError> {
        // The real alternative count is zero; every commit is out of range.
        Err(SpaceError::AlternativeOutOfRange {
            alternative,
            alternatives: 0,
        })
    }

    fn try_clone(&self) -> Result<Self, SpaceError> {
        Ok(OverclaimSpace)
    }
}
