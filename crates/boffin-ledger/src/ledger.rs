//! The insertion-ordered subject store.

use indexmap::IndexMap;

use boffin_core::SubjectId;

use crate::subject::ScienceSubject;

/// Mutable store of [`ScienceSubject`] entries, keyed by subject identifier.
///
/// An explicit store object passed by handle into every update, never
/// process-global state, so tests can inject isolated ledgers. Iteration
/// follows insertion order. Entries are inserted lazily via
/// [`get_or_insert_with`](SubjectLedger::get_or_insert_with) and never
/// removed.
#[derive(Debug, Default)]
pub struct SubjectLedger {
    subjects: IndexMap<SubjectId, ScienceSubject>,
}

impl SubjectLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a subject by identifier.
    pub fn get(&self, id: &SubjectId) -> Option<&ScienceSubject> {
        self.subjects.get(id)
    }

    /// Mutable lookup, for hosts banking recovered science.
    pub fn get_mut(&mut self, id: &SubjectId) -> Option<&mut ScienceSubject> {
        self.subjects.get_mut(id)
    }

    /// Return the subject for `id`, creating it with `make` if absent.
    ///
    /// Lookup and insert are a single operation, so a second call with the
    /// same identifier always returns the entry created by the first —
    /// never a duplicate.
    pub fn get_or_insert_with<F>(&mut self, id: SubjectId, make: F) -> &ScienceSubject
    where
        F: FnOnce() -> ScienceSubject,
    {
        self.subjects.entry(id).or_insert_with(make)
    }

    /// Number of subjects in the ledger.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the ledger holds no subjects.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Iterate over subjects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SubjectId, &ScienceSubject)> {
        self.subjects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boffin_core::{BodyId, Experiment, ExperimentId, Situation, SituationKind};

    fn fixture() -> (Experiment, Situation) {
        let exp = Experiment::new(
            ExperimentId::new("thermometer"),
            "Temperature Scan",
            8.0,
            8.0,
            true,
        )
        .unwrap();
        let sit = Situation::in_biome(BodyId::new("Mun"), SituationKind::SrfLanded, "Midlands");
        (exp, sit)
    }

    #[test]
    fn get_or_insert_creates_once() {
        let (exp, sit) = fixture();
        let id = SubjectId::compose(exp.id(), sit.body(), sit.kind(), sit.normalized_biome());
        let mut ledger = SubjectLedger::new();

        ledger.get_or_insert_with(id.clone(), || ScienceSubject::new(&exp, &sit));
        assert_eq!(ledger.len(), 1);

        // Second call must not create a duplicate, and the closure must
        // not run.
        ledger.get_or_insert_with(id.clone(), || panic!("subject recreated"));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.get(&id).is_some());
    }

    #[test]
    fn mutations_are_visible_through_get() {
        let (exp, sit) = fixture();
        let id = SubjectId::compose(exp.id(), sit.body(), sit.kind(), sit.normalized_biome());
        let mut ledger = SubjectLedger::new();
        ledger.get_or_insert_with(id.clone(), || ScienceSubject::new(&exp, &sit));

        ledger.get_mut(&id).unwrap().bank(3.0);
        assert_eq!(ledger.get(&id).unwrap().science(), 3.0);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let (exp, _) = fixture();
        let mut ledger = SubjectLedger::new();
        for body in ["Moho", "Eve", "Kerbin"] {
            let sit = Situation::global(BodyId::new(body), SituationKind::InSpaceHigh);
            let id = SubjectId::compose(exp.id(), sit.body(), sit.kind(), sit.normalized_biome());
            ledger.get_or_insert_with(id, || ScienceSubject::new(&exp, &sit));
        }
        let bodies: Vec<&str> = ledger.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(
            bodies,
            [
                "thermometer@MohoInSpaceHigh",
                "thermometer@EveInSpaceHigh",
                "thermometer@KerbinInSpaceHigh",
            ]
        );
    }
}
