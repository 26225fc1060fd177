//! The shipped onboard-data inventory implementation.

use indexmap::IndexMap;
use smallvec::SmallVec;

use boffin_core::{DataUnit, OnboardInventory, SubjectId};

/// Per-subject unit storage. Most subjects have at most a handful of
/// pending units (one per experiment run still onboard), so the first few
/// live inline.
type Units = SmallVec<[DataUnit; 4]>;

/// Snapshot of science data held onboard vessels, keyed by subject.
///
/// Hosts rebuild or patch this as vessels collect, transmit and recover
/// data; the survey engine only reads it through the [`OnboardInventory`]
/// capability. Units for a subject keep their insertion order, which the
/// yield computation depends on.
#[derive(Debug, Default)]
pub struct VesselInventory {
    units: IndexMap<SubjectId, Units>,
}

impl VesselInventory {
    /// An empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one pending data unit for a subject.
    pub fn record(&mut self, subject: SubjectId, unit: DataUnit) {
        self.units.entry(subject).or_default().push(unit);
    }

    /// Remove all pending units for a subject (recovered or transmitted).
    pub fn clear_subject(&mut self, subject: &SubjectId) {
        self.units.shift_remove(subject);
    }

    /// Total pending units across all subjects.
    pub fn unit_count(&self) -> usize {
        self.units.values().map(|u| u.len()).sum()
    }
}

impl OnboardInventory for VesselInventory {
    fn data_units(&self, subject: &SubjectId) -> Option<&[DataUnit]> {
        self.units.get(subject).map(|u| u.as_slice())
    }
}
