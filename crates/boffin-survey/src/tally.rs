//! Aggregate roll-up over a set of science records.

use crate::record::ScienceRecord;

/// Point-in-time totals across a collection of records.
///
/// This is the datum behind a checklist status line ("12/40 complete,
/// 318.5 science remaining"); the engine computes it, the host decides
/// how to present it. Populated via [`from_records`](SurveyTally::from_records)
/// after an update pass; stale between passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurveyTally {
    /// Number of records tallied.
    pub records: usize,
    /// Records whose instrument is unlocked and body reached.
    pub unlocked: usize,
    /// Records whose banked science is practically complete.
    pub complete: usize,
    /// Records complete counting onboard data ("complete if recovered now").
    pub collected: usize,
    /// Summed banked science, multiplier-scaled.
    pub completed_science: f32,
    /// Summed estimated value of pending onboard data.
    pub onboard_science: f32,
    /// Summed obtainable science, multiplier-scaled.
    pub total_science: f32,
}

impl SurveyTally {
    /// Tally a set of records as-is (no update is performed here).
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ScienceRecord>,
    {
        let mut tally = Self::default();
        for record in records {
            tally.records += 1;
            if record.is_unlocked() {
                tally.unlocked += 1;
            }
            if record.is_complete() {
                tally.complete += 1;
            }
            if record.is_collected() {
                tally.collected += 1;
            }
            tally.completed_science += record.completed_science();
            tally.onboard_science += record.onboard_science();
            tally.total_science += record.total_science();
        }
        tally
    }

    /// Science still obtainable: total minus banked minus onboard,
    /// floored at zero.
    pub fn remaining_science(&self) -> f32 {
        (self.total_science - self.completed_science - self.onboard_science).max(0.0)
    }

    /// Banked science as a percentage of the obtainable total, or 100
    /// when nothing is obtainable.
    pub fn percent_complete(&self) -> f32 {
        if self.total_science <= 0.0 {
            100.0
        } else {
            self.completed_science / self.total_science * 100.0
        }
    }
}
