//! Boffin: a science-progress tracking engine for space-flight games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Boffin sub-crates. For most users, adding `boffin` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use boffin::prelude::*;
//!
//! // A host that has unlocked everything and reached every body.
//! struct Everything;
//! impl UnlockRegistry for Everything {
//!     fn is_unlocked(&self, _: &ExperimentId) -> bool { true }
//! }
//! impl ReachabilityOracle for Everything {
//!     fn reached(&self, _: &BodyId) -> bool { true }
//! }
//!
//! let experiment = Arc::new(Experiment::new(
//!     ExperimentId::new("crewReport"),
//!     "Crew Report",
//!     5.0,
//!     10.0,
//!     true,
//! ).unwrap());
//! let situation = Situation::global(BodyId::new("Kerbin"), SituationKind::SrfLanded);
//!
//! let mut ledger = SubjectLedger::new();
//! let inventory = VesselInventory::new();
//! let mut ctx = SurveyContext::new(
//!     &mut ledger,
//!     &Everything,
//!     &Everything,
//!     &inventory,
//!     SurveyConfig::default(),
//! );
//! let record = ScienceRecord::new(experiment, situation, &mut ctx);
//!
//! assert_eq!(record.total_science(), 10.0);
//! assert!(!record.is_complete());
//! assert_eq!(record.description(), "Crew Report while landed at Kerbin");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `boffin-core` | IDs, experiment/situation model, capability traits, errors |
//! | [`ledger`] | `boffin-ledger` | Subject ledger and onboard-data inventory |
//! | [`survey`] | `boffin-survey` | Records, yield formula, update engine, tallies |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`boffin-core`).
///
/// Contains the experiment and situation model, the composite subject
/// identifier, error types, and the capability traits
/// ([`types::UnlockRegistry`], [`types::ReachabilityOracle`],
/// [`types::OnboardInventory`]).
pub use boffin_core as types;

/// Subject ledger and onboard-data inventory (`boffin-ledger`).
///
/// [`ledger::SubjectLedger`] stores per-subject accumulators;
/// [`ledger::VesselInventory`] tracks collected-but-unrecovered data.
pub use boffin_ledger as ledger;

/// The calculation engine (`boffin-survey`).
///
/// [`survey::ScienceRecord`] plus the diminishing-returns yield function
/// [`survey::next_gain`] and the roll-up [`survey::SurveyTally`].
pub use boffin_survey as survey;

/// Common imports for typical Boffin usage.
///
/// ```rust
/// use boffin::prelude::*;
/// ```
pub mod prelude {
    pub use boffin_core::{
        BodyId, DataUnit, Experiment, ExperimentId, OnboardInventory, ReachabilityOracle,
        Situation, SituationKind, SubjectId, UnlockRegistry,
    };
    pub use boffin_ledger::{ScienceSubject, SubjectLedger, VesselInventory};
    pub use boffin_survey::{ScienceRecord, SurveyConfig, SurveyContext, SurveyTally};
}
