//! Subject ledger and onboard-data inventory for the Boffin engine.
//!
//! [`SubjectLedger`] is the mutable store of per-subject science
//! accumulators, shared between the host (which banks recovered science)
//! and the survey engine (which lazily creates subjects on first sight).
//! [`VesselInventory`] is the shipped [`OnboardInventory`] implementation
//! tracking collected-but-unrecovered data per subject.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod inventory;
mod ledger;
mod subject;

pub use inventory::VesselInventory;
pub use ledger::SubjectLedger;
pub use subject::ScienceSubject;

pub use boffin_core::OnboardInventory;
