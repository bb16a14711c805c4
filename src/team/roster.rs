//! Squad, batting order and bowler pool for one team
//!
//! The batting order is an index cursor into the squad: consumed front to
//! back once per innings and never replenished. The bowler pool is sampled
//! uniformly and never drained, so the same bowler may bowl consecutive
//! overs.

use crate::core::config::TeamConfig;
use crate::core::error::{CricketError, Result};
use crate::core::types::PlayerIndex;
use crate::team::player::PlayerAttributes;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Roster {
    team_name: String,
    players: Vec<PlayerAttributes>,
    captain: Option<PlayerIndex>,
    /// Every squad position, in squad order
    squad: Vec<PlayerIndex>,
    batting_order: Vec<PlayerIndex>,
    next_in: usize,
    bowler_pool: Vec<PlayerIndex>,
}

impl Roster {
    pub fn new(team_name: impl Into<String>, players: Vec<PlayerAttributes>) -> Result<Self> {
        let team_name = team_name.into();
        if players.is_empty() {
            return Err(CricketError::EmptyRoster(team_name));
        }
        players.iter().try_for_each(PlayerAttributes::validate)?;

        let squad: Vec<PlayerIndex> = (0..players.len()).map(PlayerIndex).collect();
        Ok(Self {
            team_name,
            players,
            captain: None,
            batting_order: squad.clone(),
            next_in: 0,
            bowler_pool: squad.clone(),
            squad,
        })
    }

    pub fn from_config(config: &TeamConfig) -> Result<Self> {
        Self::new(config.name.clone(), config.players.clone())
    }

    pub fn name(&self) -> &str {
        &self.team_name
    }

    /// Look up a squad member. Indices handed out by this roster are always valid.
    pub fn player(&self, index: PlayerIndex) -> &PlayerAttributes {
        &self.players[index.0]
    }

    pub fn captain(&self) -> Option<&PlayerAttributes> {
        self.captain.map(|index| self.player(index))
    }

    /// Informational only; the captain has no effect on the odds
    pub fn set_captain(&mut self, captain: PlayerIndex) {
        self.captain = Some(captain);
    }

    /// Pick a uniformly random squad member and make them captain
    pub fn appoint_random_captain<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PlayerIndex {
        // squad is never empty (checked in `new`)
        let captain = self.squad.choose(rng).copied().unwrap_or(PlayerIndex(0));
        self.set_captain(captain);
        captain
    }

    /// Refill the batting order and bowler pool from the full squad
    pub fn seed_for_innings(&mut self) {
        self.batting_order = self.squad.clone();
        self.next_in = 0;
        self.bowler_pool = self.squad.clone();
    }

    /// Next batsman in, or `None` once the order is exhausted (all out)
    pub fn next_batsman(&mut self) -> Option<PlayerIndex> {
        let batsman = self.batting_order.get(self.next_in).copied()?;
        self.next_in += 1;
        Some(batsman)
    }

    /// Uniform draw from the bowler pool. The pool is left untouched.
    pub fn next_bowler<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PlayerIndex> {
        self.bowler_pool.choose(rng).copied()
    }
}
