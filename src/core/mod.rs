pub mod config;
pub mod error;
pub mod types;

pub use config::{MatchConfig, TeamConfig};
pub use error::{CricketError, Result};
pub use types::{PlayerIndex, TeamSide};
