//! Core types and traits for the Boffin science-progress engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Boffin workspace:
//! typed identifiers, the experiment and situation model, error types,
//! and the capability traits through which the engine observes host
//! game state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod experiment;
mod id;
mod situation;
mod traits;

pub use error::{ConfigError, ExperimentError};
pub use experiment::Experiment;
pub use id::{BodyId, ExperimentId, SubjectId};
pub use situation::{Situation, SituationKind};
pub use traits::{DataUnit, OnboardInventory, ReachabilityOracle, UnlockRegistry};
