//! Match configuration
//!
//! A match is fully described by the over limit, the two squads, the ground
//! and an optional RNG seed. Configurations are loaded from TOML and
//! validated before any ball is bowled.

use crate::core::error::{CricketError, Result};
use crate::team::{FieldConditions, PlayerAttributes};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One side's name and squad, in batting order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub players: Vec<PlayerAttributes>,
}

impl TeamConfig {
    pub fn new(name: impl Into<String>, players: Vec<PlayerAttributes>) -> Self {
        Self {
            name: name.into(),
            players,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(CricketError::EmptyRoster(self.name.clone()));
        }
        self.players.iter().try_for_each(PlayerAttributes::validate)
    }
}

/// Everything needed to play one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Overs per innings
    pub total_overs: u32,
    /// Fixed seed for reproducible runs. `None` means pick one at startup.
    pub seed: Option<u64>,
    pub field: FieldConditions,
    pub home: TeamConfig,
    pub away: TeamConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            total_overs: 5,
            seed: None,
            field: FieldConditions::default(),
            home: TeamConfig::new(
                "India",
                vec![
                    PlayerAttributes::new("Rohit Sharma", 0.8, 0.7, 0.6, 0.9, 0.8),
                    PlayerAttributes::new("Shubham Gill", 0.7, 0.6, 0.5, 0.8, 0.7),
                    PlayerAttributes::new("Virat Kohli", 0.6, 0.7, 0.8, 0.6, 0.9),
                    PlayerAttributes::new("Ajinkya Rahane", 0.7, 0.8, 0.6, 0.7, 0.8),
                    PlayerAttributes::new("Ravindra Jadeja", 0.6, 0.6, 0.7, 0.7, 0.7),
                    PlayerAttributes::new("Mohammed Shami", 0.8, 0.9, 0.7, 0.8, 0.9),
                    PlayerAttributes::new("Mohammed Siraj", 0.7, 0.8, 0.9, 0.7, 0.8),
                    PlayerAttributes::new("Umesh Yadav", 0.6, 0.7, 0.8, 0.9, 0.7),
                    PlayerAttributes::new("Ishan Kishan", 0.8, 0.9, 0.7, 0.8, 0.9),
                    PlayerAttributes::new("Shardul Thakur", 0.9, 0.8, 0.7, 0.9, 0.8),
                ],
            ),
            away: TeamConfig::new(
                "Australia",
                vec![
                    PlayerAttributes::new("Pat Cummins", 0.7, 0.8, 0.9, 0.8, 0.7),
                    PlayerAttributes::new("Scott Boland", 0.6, 0.7, 0.8, 0.7, 0.6),
                    PlayerAttributes::new("Cameron Green", 0.7, 0.6, 0.5, 0.6, 0.7),
                    PlayerAttributes::new("Marcus Harris", 0.6, 0.7, 0.8, 0.7, 0.6),
                    PlayerAttributes::new("Travis Head", 0.8, 0.6, 0.7, 0.6, 0.8),
                    PlayerAttributes::new("Nathan Lyon", 0.9, 0.7, 0.8, 0.7, 0.9),
                    PlayerAttributes::new("Todd Murphy", 0.8, 0.9, 0.7, 0.9, 0.7),
                    PlayerAttributes::new("Steven Smith", 0.7, 0.8, 0.9, 0.8, 0.7),
                    PlayerAttributes::new("Mitchell Starc", 0.8, 0.9, 0.8, 0.9, 0.8),
                    PlayerAttributes::new("David Warner", 0.7, 0.8, 0.9, 0.7, 0.8),
                ],
            ),
        }
    }
}

impl MatchConfig {
    /// Load and validate a match from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a match from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the over limit, both squads and the ground
    pub fn validate(&self) -> Result<()> {
        if self.total_overs == 0 {
            return Err(CricketError::Config("total_overs must be positive".into()));
        }
        self.home.validate()?;
        self.away.validate()?;
        self.field.validate()
    }

    pub fn with_overs(mut self, total_overs: u32) -> Self {
        self.total_overs = total_overs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
