//! Running tally for the innings in progress
//!
//! The ledger is the only writer of runs, wickets and overs. Every mutator
//! only ever adds; `reset` is the single way back to zero.

use serde::{Deserialize, Serialize};

/// Counters for one innings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsState {
    pub runs: u32,
    pub wickets: u32,
    pub overs_completed: u32,
    /// Display only: position within the current over
    pub balls_in_current_over: u32,
}

#[derive(Debug, Clone, Default)]
pub struct MatchLedger {
    state: InningsState,
}

impl MatchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InningsState {
        self.state
    }

    pub fn runs(&self) -> u32 {
        self.state.runs
    }

    pub fn wickets(&self) -> u32 {
        self.state.wickets
    }

    pub fn overs(&self) -> u32 {
        self.state.overs_completed
    }

    pub fn record_runs(&mut self, runs: u32) {
        self.state.runs += runs;
    }

    pub fn record_wicket(&mut self) {
        self.state.wickets += 1;
    }

    pub fn record_over_complete(&mut self) {
        self.state.overs_completed += 1;
    }

    pub fn mark_ball_in_over(&mut self, ball: u32) {
        self.state.balls_in_current_over = ball;
    }

    /// Zero every counter before the next innings
    pub fn reset(&mut self) {
        self.state = InningsState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Entry {
        Runs(u32),
        Wicket,
        Over,
    }

    fn entry() -> impl Strategy<Value = Entry> {
        prop_oneof![
            (0u32..=6).prop_map(Entry::Runs),
            Just(Entry::Wicket),
            Just(Entry::Over),
        ]
    }

    #[test]
    fn test_counters_accumulate() {
        let mut ledger = MatchLedger::new();
        ledger.record_runs(4);
        ledger.record_runs(2);
        ledger.record_wicket();
        ledger.record_over_complete();

        assert_eq!(ledger.runs(), 6);
        assert_eq!(ledger.wickets(), 1);
        assert_eq!(ledger.overs(), 1);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut ledger = MatchLedger::new();
        ledger.record_runs(17);
        ledger.record_wicket();
        ledger.record_over_complete();
        ledger.mark_ball_in_over(3);

        ledger.reset();
        assert_eq!(ledger.state(), InningsState::default());
    }

    proptest! {
        #[test]
        fn prop_counters_never_decrease(entries in prop::collection::vec(entry(), 0..200)) {
            let mut ledger = MatchLedger::new();
            let mut previous = ledger.state();
            for entry in entries {
                match entry {
                    Entry::Runs(runs) => ledger.record_runs(runs),
                    Entry::Wicket => ledger.record_wicket(),
                    Entry::Over => ledger.record_over_complete(),
                }
                let current = ledger.state();
                prop_assert!(current.runs >= previous.runs);
                prop_assert!(current.wickets >= previous.wickets);
                prop_assert!(current.overs_completed >= previous.overs_completed);
                previous = current;
            }
            ledger.reset();
            prop_assert_eq!(ledger.state(), InningsState::default());
        }
    }
}
