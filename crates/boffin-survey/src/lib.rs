//! Science-progress calculation engine.
//!
//! A [`ScienceRecord`] is one experiment performed in one situation. Each
//! call to [`ScienceRecord::update`] reconciles the record against the
//! external subject ledger and onboard-data inventory supplied through a
//! [`SurveyContext`], recomputing the derived progress fields in place:
//! banked science, the diminishing-returns estimate of what onboard data
//! is still worth, and the completion flags.
//!
//! The engine is synchronous and single-threaded by construction: the
//! context borrows the ledger mutably, so concurrent updates against one
//! ledger are a compile error rather than a runtime hazard.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod context;
mod gain;
mod record;
mod tally;

pub use config::SurveyConfig;
pub use context::SurveyContext;
pub use gain::{next_gain, practically_complete, COMPLETION_EPSILON};
pub use record::ScienceRecord;
pub use tally::SurveyTally;
