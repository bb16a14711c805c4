//! Umpiring: deciding deliveries and keeping the score

pub mod ledger;
pub mod outcome;
pub mod runs;

pub use ledger::{InningsState, MatchLedger};
pub use outcome::{predict_outcome, Verdict};
pub use runs::{calculate_runs, max_runs};
