//! Player skill vectors
//!
//! Every skill is a real number in [0, 1]. Values are fixed for the whole
//! match; nothing in the simulation mutates a player.

use crate::core::error::{CricketError, Result};
use serde::{Deserialize, Serialize};

/// Immutable per-player skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub name: String,
    pub bowling_skill: f64,
    pub batting_skill: f64,
    pub fielding_skill: f64,
    pub running_skill: f64,
    pub experience: f64,
}

impl PlayerAttributes {
    pub fn new(
        name: impl Into<String>,
        bowling_skill: f64,
        batting_skill: f64,
        fielding_skill: f64,
        running_skill: f64,
        experience: f64,
    ) -> Self {
        Self {
            name: name.into(),
            bowling_skill,
            batting_skill,
            fielding_skill,
            running_skill,
            experience,
        }
    }

    /// Skill names paired with their values, in declaration order
    pub fn skills(&self) -> [(&'static str, f64); 5] {
        [
            ("bowling_skill", self.bowling_skill),
            ("batting_skill", self.batting_skill),
            ("fielding_skill", self.fielding_skill),
            ("running_skill", self.running_skill),
            ("experience", self.experience),
        ]
    }

    /// Reject non-finite or out-of-range skills
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CricketError::Config("player name must not be empty".into()));
        }
        for (skill, value) in self.skills() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CricketError::Config(format!(
                    "{}: {} must be within [0, 1], got {}",
                    self.name, skill, value
                )));
            }
        }
        Ok(())
    }
}
