//! Test utilities and mock types for Boffin development.
//!
//! Provides mock implementations of the core capability traits
//! ([`UnlockRegistry`], [`ReachabilityOracle`]) and fixture constructors
//! for experiments and situations.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use boffin_core::{BodyId, ExperimentId, ReachabilityOracle, UnlockRegistry};

pub mod fixtures;

/// Mock implementation of [`UnlockRegistry`].
///
/// Either unlocks everything, or only the experiments explicitly added
/// with [`unlock`](MockUnlockRegistry::unlock).
#[derive(Debug, Default)]
pub struct MockUnlockRegistry {
    all: bool,
    unlocked: HashSet<ExperimentId>,
}

impl MockUnlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry where every instrument is unlocked.
    pub fn unlock_all() -> Self {
        Self {
            all: true,
            unlocked: HashSet::new(),
        }
    }

    /// Mark one experiment's instrument as unlocked.
    pub fn unlock(&mut self, experiment: ExperimentId) {
        self.unlocked.insert(experiment);
    }
}

impl UnlockRegistry for MockUnlockRegistry {
    fn is_unlocked(&self, experiment: &ExperimentId) -> bool {
        self.all || self.unlocked.contains(experiment)
    }
}

/// Mock implementation of [`ReachabilityOracle`].
///
/// Either treats every body as reached, or only those explicitly added
/// with [`reach`](MockReachability::reach).
#[derive(Debug, Default)]
pub struct MockReachability {
    all: bool,
    reached: HashSet<BodyId>,
}

impl MockReachability {
    pub fn new() -> Self {
        Self::default()
    }

    /// An oracle where every body has been reached.
    pub fn reach_all() -> Self {
        Self {
            all: true,
            reached: HashSet::new(),
        }
    }

    /// Mark one body as reached.
    pub fn reach(&mut self, body: BodyId) {
        self.reached.insert(body);
    }
}

impl ReachabilityOracle for MockReachability {
    fn reached(&self, body: &BodyId) -> bool {
        self.all || self.reached.contains(body)
    }
}
