//! One experiment in one situation, with its derived progress state.

use std::sync::Arc;

use boffin_core::{Experiment, Situation, SubjectId};
use boffin_ledger::ScienceSubject;

use crate::context::SurveyContext;
use crate::gain::{next_gain, practically_complete};

/// An experiment performed in a situation, plus the derived progress
/// fields recomputed on every [`update`](ScienceRecord::update).
///
/// Records are created once per (experiment, situation) pair the host
/// discovers and are mutated only through `update`; the host decides when
/// a record is discarded. The experiment definition is shared between the
/// many records that reference it.
#[derive(Clone, Debug)]
pub struct ScienceRecord {
    experiment: Arc<Experiment>,
    situation: Situation,
    completed_science: f32,
    total_science: f32,
    onboard_science: f32,
    is_unlocked: bool,
    is_complete: bool,
    is_collected: bool,
}

impl ScienceRecord {
    /// Construct a record and immediately reconcile it against the context.
    pub fn new(
        experiment: Arc<Experiment>,
        situation: Situation,
        ctx: &mut SurveyContext<'_>,
    ) -> Self {
        let mut record = Self {
            experiment,
            situation,
            completed_science: 0.0,
            total_science: 0.0,
            onboard_science: 0.0,
            is_unlocked: false,
            is_complete: false,
            is_collected: false,
        };
        record.update(ctx);
        record
    }

    /// The composite subject identifier for this record.
    ///
    /// Recomputed from the experiment and situation on every call, never
    /// cached.
    pub fn id(&self) -> SubjectId {
        SubjectId::compose(
            self.experiment.id(),
            self.situation.body(),
            self.situation.kind(),
            self.situation.normalized_biome(),
        )
    }

    /// Recompute all derived fields from the current external state.
    ///
    /// Looks up or lazily creates this record's ledger subject (the one
    /// place the engine mutates shared state), gates on unlock and
    /// reachability, scales the banked and capped science by the global
    /// multiplier, and integrates pending onboard data units against the
    /// running total so each successive unit yields less under
    /// diminishing returns.
    pub fn update(&mut self, ctx: &mut SurveyContext<'_>) {
        let id = self.id();
        let multiplier = ctx.config().science_gain_multiplier;

        let (experiment, situation) = (&self.experiment, &self.situation);
        let subject = ctx
            .ledger_mut()
            .get_or_insert_with(id.clone(), || ScienceSubject::new(experiment, situation));
        let banked = subject.science();
        let cap = subject.science_cap();

        self.is_unlocked = ctx.reachability().reached(self.situation.body())
            && ctx.unlocks().is_unlocked(self.experiment.id());

        self.completed_science = banked * multiplier;
        self.total_science = cap * multiplier;
        self.is_complete = practically_complete(
            &self.experiment,
            self.completed_science,
            self.total_science,
        );

        self.onboard_science = 0.0;
        if let Some(units) = ctx.inventory().data_units(&id) {
            for _unit in units {
                self.onboard_science += next_gain(
                    &self.experiment,
                    self.completed_science + self.onboard_science,
                    self.total_science,
                );
            }
        }

        let all_collected = self.completed_science + self.onboard_science;
        self.is_collected =
            practically_complete(&self.experiment, all_collected, self.total_science);
    }

    /// The experiment definition.
    pub fn experiment(&self) -> &Experiment {
        &self.experiment
    }

    /// The situation this record is valid in.
    pub fn situation(&self) -> &Situation {
        &self.situation
    }

    /// Science banked for this subject, scaled by the gain multiplier.
    pub fn completed_science(&self) -> f32 {
        self.completed_science
    }

    /// Maximum obtainable science, scaled by the gain multiplier.
    pub fn total_science(&self) -> f32 {
        self.total_science
    }

    /// Estimated value of pending onboard data, were it recovered now.
    pub fn onboard_science(&self) -> f32 {
        self.onboard_science
    }

    /// Whether the instrument is unlocked and the body has been reached.
    pub fn is_unlocked(&self) -> bool {
        self.is_unlocked
    }

    /// Whether the banked science has practically exhausted the subject.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Whether banked plus onboard science would exhaust the subject,
    /// i.e. "complete if recovered right now".
    pub fn is_collected(&self) -> bool {
        self.is_collected
    }

    /// Full description, e.g. `"Crew Report while landed at Kerbin's Shores"`.
    pub fn description(&self) -> String {
        format!(
            "{} while {}",
            self.experiment.title(),
            self.situation.description()
        )
    }

    /// The experiment title alone.
    pub fn short_description(&self) -> &str {
        self.experiment.title()
    }
}
