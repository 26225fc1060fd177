//! The context passed into every record update.

use boffin_core::{OnboardInventory, ReachabilityOracle, UnlockRegistry};
use boffin_ledger::SubjectLedger;

use crate::config::SurveyConfig;

/// Bundle of external state consulted by [`ScienceRecord::update`].
///
/// Uses dynamic dispatch for the three read-only capabilities so hosts
/// and tests can supply any implementation. Holding the ledger by `&mut`
/// serializes updates: two contexts over the same ledger cannot coexist,
/// which is the engine's whole concurrency model.
///
/// [`ScienceRecord::update`]: crate::ScienceRecord::update
pub struct SurveyContext<'a> {
    ledger: &'a mut SubjectLedger,
    unlocks: &'a dyn UnlockRegistry,
    reachability: &'a dyn ReachabilityOracle,
    inventory: &'a dyn OnboardInventory,
    config: SurveyConfig,
}

impl<'a> SurveyContext<'a> {
    /// Construct a context over the given collaborators.
    ///
    /// Typically built fresh by the host for each update pass; contexts
    /// are cheap and hold no state of their own.
    pub fn new(
        ledger: &'a mut SubjectLedger,
        unlocks: &'a dyn UnlockRegistry,
        reachability: &'a dyn ReachabilityOracle,
        inventory: &'a dyn OnboardInventory,
        config: SurveyConfig,
    ) -> Self {
        Self {
            ledger,
            unlocks,
            reachability,
            inventory,
            config,
        }
    }

    /// Read-only view of the subject ledger.
    pub fn ledger(&self) -> &SubjectLedger {
        self.ledger
    }

    /// Mutable ledger access, for the lazy subject insert.
    pub fn ledger_mut(&mut self) -> &mut SubjectLedger {
        self.ledger
    }

    /// The instrument unlock registry.
    pub fn unlocks(&self) -> &dyn UnlockRegistry {
        self.unlocks
    }

    /// The body reachability oracle.
    pub fn reachability(&self) -> &dyn ReachabilityOracle {
        self.reachability
    }

    /// The onboard-data inventory snapshot.
    pub fn inventory(&self) -> &dyn OnboardInventory {
        self.inventory
    }

    /// The survey configuration in effect.
    pub fn config(&self) -> SurveyConfig {
        self.config
    }
}
