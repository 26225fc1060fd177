//! Reusable experiment and situation fixtures.
//!
//! Experiment values mirror the kind of definitions a host catalog
//! carries: a diminishing-returns report, a full-marginal-value sample,
//! and a near-worthless instrument for epsilon-boundary testing.

use boffin_core::{BodyId, Experiment, ExperimentId, Situation, SituationKind};
use boffin_ledger::{ScienceSubject, SubjectLedger};

/// base 5, cap 10, diminishing returns. The worked-example experiment.
pub fn crew_report() -> Experiment {
    Experiment::new(ExperimentId::new("crewReport"), "Crew Report", 5.0, 10.0, true).unwrap()
}

/// base 4, cap 8, no diminishing returns (constant marginal value).
pub fn surface_sample() -> Experiment {
    Experiment::new(
        ExperimentId::new("surfaceSample"),
        "Surface Sample",
        4.0,
        8.0,
        false,
    )
    .unwrap()
}

/// base 0.5, cap 100: the marginal gain drops below the completion
/// epsilon long before the cap is approached.
pub fn seismic_scan() -> Experiment {
    Experiment::new(
        ExperimentId::new("seismicScan"),
        "Seismic Scan",
        0.5,
        100.0,
        true,
    )
    .unwrap()
}

/// Landed on the given body, no biome.
pub fn landed(body: &str) -> Situation {
    Situation::global(BodyId::new(body), SituationKind::SrfLanded)
}

/// Landed on the given body in the given biome.
pub fn landed_in(body: &str, biome: &str) -> Situation {
    Situation::in_biome(BodyId::new(body), SituationKind::SrfLanded, biome)
}

/// A ledger pre-seeded with one subject holding `banked` science.
pub fn ledger_with(experiment: &Experiment, situation: &Situation, banked: f32) -> SubjectLedger {
    let mut ledger = SubjectLedger::new();
    let mut subject = ScienceSubject::new(experiment, situation);
    subject.set_science(banked);
    let id = subject.id().clone();
    ledger.get_or_insert_with(id, || subject);
    ledger
}
