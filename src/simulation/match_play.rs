//! Match controller: toss, captains, both innings and the result

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::commentary::Commentary;
use crate::core::config::MatchConfig;
use crate::core::error::{CricketError, Result};
use crate::core::types::TeamSide;
use crate::simulation::innings::{InningsController, InningsSummary};
use crate::simulation::output::{Captains, MatchOutput, MatchResult};
use crate::team::{FieldConditions, Roster};
use crate::umpire::MatchLedger;

pub struct Match {
    home: Roster,
    away: Roster,
    field: FieldConditions,
    total_overs: u32,
    ledger: MatchLedger,
}

impl Match {
    pub fn new(home: Roster, away: Roster, field: FieldConditions, total_overs: u32) -> Result<Self> {
        if total_overs == 0 {
            return Err(CricketError::Config("total_overs must be positive".into()));
        }
        field.validate()?;
        Ok(Self {
            home,
            away,
            field,
            total_overs,
            ledger: MatchLedger::new(),
        })
    }

    pub fn from_config(config: &MatchConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            Roster::from_config(&config.home)?,
            Roster::from_config(&config.away)?,
            config.field,
            config.total_overs,
        )
    }

    pub fn team(&self, side: TeamSide) -> &Roster {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    /// Uniform choice of the side that bats first
    pub fn toss<R: Rng + ?Sized>(&self, rng: &mut R) -> TeamSide {
        if rng.gen_range(0..2u32) == 0 {
            TeamSide::Home
        } else {
            TeamSide::Away
        }
    }

    /// Play the whole match. Any error aborts before a result exists.
    pub fn play<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        commentary: &mut Commentary<'_>,
    ) -> Result<MatchOutput> {
        let batting_first = self.toss(rng);
        tracing::info!(
            "{} won the toss and will bat first",
            self.team(batting_first).name()
        );

        let home_captain = self.home.appoint_random_captain(rng);
        let away_captain = self.away.appoint_random_captain(rng);
        let captains = Captains {
            home: self.home.player(home_captain).name.clone(),
            away: self.away.player(away_captain).name.clone(),
        };
        tracing::info!(home = %captains.home, away = %captains.away, "captains appointed");

        self.home.seed_for_innings();
        self.away.seed_for_innings();

        commentary.match_preview(
            &captains.home,
            &captains.away,
            self.home.name(),
            self.away.name(),
            self.total_overs,
        );

        self.ledger.reset();
        let first = self.play_innings(batting_first, rng, commentary)?;

        self.ledger.reset();
        let second = self.play_innings(batting_first.opponent(), rng, commentary)?;

        let result = MatchResult::decide(
            batting_first,
            &first.batting_team,
            first.runs,
            &second.batting_team,
            second.runs,
        );
        tracing::info!(
            winner = %result.winning_team,
            margin = result.margin,
            tie = result.is_tie(),
            "match complete"
        );
        commentary.final_result(&result.winning_team, result.margin);

        Ok(MatchOutput {
            seed: None,
            total_overs: self.total_overs,
            batting_first,
            captains,
            innings: vec![first, second],
            result,
        })
    }

    fn play_innings<R: Rng + ?Sized>(
        &mut self,
        batting_side: TeamSide,
        rng: &mut R,
        commentary: &mut Commentary<'_>,
    ) -> Result<InningsSummary> {
        let (batting, bowling) = match batting_side {
            TeamSide::Home => (&mut self.home, &self.away),
            TeamSide::Away => (&mut self.away, &self.home),
        };

        commentary.innings_start(batting.name());
        let summary = InningsController::start(
            batting,
            bowling,
            &self.field,
            &mut self.ledger,
            self.total_overs,
            rng,
        )?
        .run(rng, commentary)?;
        commentary.innings_end(summary.runs, summary.wickets, summary.overs);

        tracing::info!(
            team = %summary.batting_team,
            runs = summary.runs,
            wickets = summary.wickets,
            overs = summary.overs,
            end = ?summary.end,
            "innings complete"
        );
        Ok(summary)
    }
}

/// Build a match from `config` and play it with a ChaCha RNG seeded from `seed`
pub fn simulate(
    config: &MatchConfig,
    seed: u64,
    commentary: &mut Commentary<'_>,
) -> Result<MatchOutput> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = Match::from_config(config)?;
    let mut output = game.play(&mut rng, commentary)?;
    output.seed = Some(seed);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commentary::{Commentator, NullSink};

    #[test]
    fn test_zero_overs_rejected() {
        let config = MatchConfig::default();
        let home = Roster::from_config(&config.home).unwrap();
        let away = Roster::from_config(&config.away).unwrap();
        assert!(Match::new(home, away, config.field, 0).is_err());
    }

    #[test]
    fn test_each_side_bats_once() {
        let mut sink = NullSink;
        let mut commentary = Commentary::new(&Commentator, &mut sink);
        for seed in 0..20 {
            let output = simulate(&MatchConfig::default(), seed, &mut commentary).unwrap();
            assert_eq!(output.innings.len(), 2);
            assert_ne!(output.innings[0].batting_team, output.innings[1].batting_team);
            assert_eq!(output.innings[0].batting_team, output.innings[1].bowling_team);
        }
    }

    #[test]
    fn test_toss_picks_both_sides() {
        let game = Match::from_config(&MatchConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let tosses: Vec<TeamSide> = (0..64).map(|_| game.toss(&mut rng)).collect();
        assert!(tosses.contains(&TeamSide::Home));
        assert!(tosses.contains(&TeamSide::Away));
    }

    #[test]
    fn test_margin_matches_scores() {
        let mut sink = NullSink;
        let mut commentary = Commentary::new(&Commentator, &mut sink);
        let output = simulate(&MatchConfig::default(), 2024, &mut commentary).unwrap();
        let first = output.innings[0].runs;
        let second = output.innings[1].runs;
        assert_eq!(output.result.margin, first.abs_diff(second));
        assert_eq!(output.seed, Some(2024));
    }
}
