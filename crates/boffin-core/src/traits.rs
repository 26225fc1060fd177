//! Capability traits through which the engine reads host game state.
//!
//! The calculation core never touches a host engine type directly; each
//! external dependency is a narrow read-only capability so that tests can
//! substitute mocks and hosts can adapt whatever state they hold.

use crate::id::{BodyId, ExperimentId, SubjectId};

/// One pending unit of collected-but-unrecovered science data.
///
/// Opaque to the engine: only the count and ordering of units matter to
/// the yield computation. The origin label exists for host-side display
/// and debugging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataUnit {
    origin: Option<String>,
}

impl DataUnit {
    /// A unit with no origin annotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// A unit annotated with where it is stored (e.g. a vessel name).
    pub fn from_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: Some(origin.into()),
        }
    }

    /// Where this unit is stored, if annotated.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }
}

/// Read-only view of the host's instrument unlock state (tech tree).
pub trait UnlockRegistry {
    /// Whether the instrument for the given experiment has been unlocked.
    fn is_unlocked(&self, experiment: &ExperimentId) -> bool;
}

/// Read-only view of which celestial bodies have been reached.
pub trait ReachabilityOracle {
    /// Whether any craft has reached the given body.
    fn reached(&self, body: &BodyId) -> bool;
}

/// Read-only snapshot of science data held onboard vessels, keyed by
/// subject identifier.
pub trait OnboardInventory {
    /// The pending data units for a subject, in insertion order.
    ///
    /// Returns `None` when nothing is held onboard for the subject; the
    /// engine treats `None` and an empty slice identically.
    fn data_units(&self, subject: &SubjectId) -> Option<&[DataUnit]>;
}
