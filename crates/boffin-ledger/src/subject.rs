//! The per-subject science accumulator.

use boffin_core::{Experiment, Situation, SubjectId};

/// Ledger entry tracking banked versus capped science for one
/// (experiment, situation) pair.
///
/// `science` is raw (unmultiplied) banked science; the survey engine
/// applies the global gain multiplier at read time. Subjects are created
/// lazily the first time a record is updated and are never removed.
#[derive(Clone, Debug, PartialEq)]
pub struct ScienceSubject {
    id: SubjectId,
    science: f32,
    science_cap: f32,
}

impl ScienceSubject {
    /// A fresh subject for an experiment in a situation: nothing banked,
    /// cap taken from the experiment definition.
    pub fn new(experiment: &Experiment, situation: &Situation) -> Self {
        let id = SubjectId::compose(
            experiment.id(),
            situation.body(),
            situation.kind(),
            situation.normalized_biome(),
        );
        Self {
            id,
            science: 0.0,
            science_cap: experiment.science_cap(),
        }
    }

    /// The composite subject identifier.
    pub fn id(&self) -> &SubjectId {
        &self.id
    }

    /// Raw science banked so far.
    pub fn science(&self) -> f32 {
        self.science
    }

    /// Raw maximum science obtainable.
    pub fn science_cap(&self) -> f32 {
        self.science_cap
    }

    /// Credit recovered science, clamped to the cap.
    ///
    /// Negative amounts are ignored; the ledger only ever grows.
    pub fn bank(&mut self, amount: f32) {
        if amount > 0.0 {
            self.science = (self.science + amount).min(self.science_cap);
        }
    }

    /// Overwrite the banked amount, clamped to `[0, cap]`.
    ///
    /// Used by hosts restoring ledger state from a save.
    pub fn set_science(&mut self, science: f32) {
        self.science = science.clamp(0.0, self.science_cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boffin_core::{BodyId, ExperimentId, SituationKind};

    fn subject() -> ScienceSubject {
        let exp = Experiment::new(
            ExperimentId::new("crewReport"),
            "Crew Report",
            5.0,
            10.0,
            true,
        )
        .unwrap();
        let sit = Situation::global(BodyId::new("Kerbin"), SituationKind::SrfLanded);
        ScienceSubject::new(&exp, &sit)
    }

    #[test]
    fn new_subject_starts_empty() {
        let s = subject();
        assert_eq!(s.science(), 0.0);
        assert_eq!(s.science_cap(), 10.0);
        assert_eq!(s.id().as_str(), "crewReport@KerbinSrfLanded");
    }

    #[test]
    fn bank_clamps_to_cap() {
        let mut s = subject();
        s.bank(7.0);
        assert_eq!(s.science(), 7.0);
        s.bank(7.0);
        assert_eq!(s.science(), 10.0);
    }

    #[test]
    fn bank_ignores_negative_amounts() {
        let mut s = subject();
        s.bank(4.0);
        s.bank(-2.0);
        assert_eq!(s.science(), 4.0);
    }

    #[test]
    fn set_science_clamps_both_ends() {
        let mut s = subject();
        s.set_science(25.0);
        assert_eq!(s.science(), 10.0);
        s.set_science(-3.0);
        assert_eq!(s.science(), 0.0);
    }
}
