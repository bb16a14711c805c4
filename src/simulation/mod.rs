pub mod innings;
pub mod match_play;
pub mod output;

pub use innings::{
    DeliveryRecord, InningsController, InningsEnd, InningsPhase, InningsSummary, BALLS_PER_OVER,
};
pub use match_play::{simulate, Match};
pub use output::{Captains, MatchOutput, MatchResult};
