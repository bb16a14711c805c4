//! Ball-by-ball innings loop
//!
//! One call to [`InningsController::step`] bowls exactly one delivery.
//! After the sixth ball of an over the over is closed, a new bowler is
//! drawn and the phase reports `OverBoundary`. The innings ends when the
//! batting order runs dry (all out) or the over limit is reached,
//! whichever comes first.

use crate::commentary::Commentary;
use crate::core::error::{CricketError, Result};
use crate::core::types::PlayerIndex;
use crate::team::{FieldConditions, Roster};
use crate::umpire::{calculate_runs, predict_outcome, MatchLedger, Verdict};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Deliveries per over
pub const BALLS_PER_OVER: u32 = 6;

/// Why an innings finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InningsEnd {
    AllOut,
    OversExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InningsPhase {
    Active,
    /// The delivery just bowled closed an over and a new bowler is on
    OverBoundary,
    Complete(InningsEnd),
}

impl InningsPhase {
    pub fn is_complete(self) -> bool {
        matches!(self, InningsPhase::Complete(_))
    }
}

/// One delivery as it happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Completed overs when the ball was bowled
    pub over: u32,
    /// 1-based ball number within the over
    pub ball: u32,
    pub batsman: String,
    pub bowler: String,
    pub verdict: Verdict,
    /// `None` when the batsman was out
    pub runs: Option<u32>,
    /// Score after the delivery
    pub score: u32,
    pub wickets: u32,
}

/// Frozen result of a finished innings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsSummary {
    pub batting_team: String,
    pub bowling_team: String,
    pub runs: u32,
    pub wickets: u32,
    pub overs: u32,
    pub balls_in_current_over: u32,
    pub end: InningsEnd,
    pub deliveries: Vec<DeliveryRecord>,
}

pub struct InningsController<'a> {
    batting: &'a mut Roster,
    bowling: &'a Roster,
    field: &'a FieldConditions,
    ledger: &'a mut MatchLedger,
    total_overs: u32,
    ball_index: u32,
    over: u32,
    bowler: PlayerIndex,
    batsman: Option<PlayerIndex>,
    phase: InningsPhase,
    deliveries: Vec<DeliveryRecord>,
}

impl<'a> InningsController<'a> {
    /// Draw the opening bowler, then send in the first batsman
    pub fn start<R: Rng + ?Sized>(
        batting: &'a mut Roster,
        bowling: &'a Roster,
        field: &'a FieldConditions,
        ledger: &'a mut MatchLedger,
        total_overs: u32,
        rng: &mut R,
    ) -> Result<Self> {
        if total_overs == 0 {
            return Err(CricketError::Config("total_overs must be positive".into()));
        }
        let bowler = bowling
            .next_bowler(rng)
            .ok_or_else(|| CricketError::EmptyRoster(bowling.name().to_string()))?;
        let batsman = batting.next_batsman();

        Ok(Self {
            batting,
            bowling,
            field,
            ledger,
            total_overs,
            ball_index: 1,
            over: 0,
            bowler,
            batsman,
            phase: InningsPhase::Active,
            deliveries: Vec::new(),
        })
    }

    pub fn phase(&self) -> InningsPhase {
        self.phase
    }

    pub fn deliveries(&self) -> &[DeliveryRecord] {
        &self.deliveries
    }

    /// Bowl one delivery. Stepping a finished innings changes nothing.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        commentary: &mut Commentary<'_>,
    ) -> Result<InningsPhase> {
        if self.phase.is_complete() {
            return Ok(self.phase);
        }

        let Some(batsman_index) = self.batsman else {
            return Ok(self.finish(InningsEnd::AllOut));
        };

        let bowling = self.bowling;
        let batsman = self.batting.player(batsman_index);
        let bowler = bowling.player(self.bowler);
        let batsman_name = batsman.name.clone();

        let verdict = predict_outcome(batsman, bowler, self.field, rng)?;
        let runs = match verdict {
            Verdict::Out => None,
            Verdict::NotOut => Some(calculate_runs(batsman, bowler, rng)),
        };

        match runs {
            None => self.ledger.record_wicket(),
            Some(runs) => self.ledger.record_runs(runs),
        }

        tracing::debug!(
            over = self.over,
            ball = self.ball_index,
            batsman = %batsman_name,
            bowler = %bowler.name,
            verdict = %verdict,
            runs = ?runs,
            "delivery"
        );
        commentary.delivery(&batsman_name, &bowler.name, verdict, runs);
        self.deliveries.push(DeliveryRecord {
            over: self.ledger.overs(),
            ball: self.ball_index,
            batsman: batsman_name,
            bowler: bowler.name.clone(),
            verdict,
            runs,
            score: self.ledger.runs(),
            wickets: self.ledger.wickets(),
        });

        if verdict.is_out() {
            self.batsman = self.batting.next_batsman();
            if self.batsman.is_none() {
                return Ok(self.finish(InningsEnd::AllOut));
            }
        }

        let mut phase = InningsPhase::Active;
        if self.ball_index >= BALLS_PER_OVER {
            self.close_over(rng)?;
            phase = InningsPhase::OverBoundary;
        }

        self.ledger.mark_ball_in_over(self.ball_index);
        let state = self.ledger.state();
        commentary.over_summary(state.overs_completed, self.ball_index, state.runs, state.wickets);
        self.ball_index += 1;

        if self.over == self.total_overs {
            return Ok(self.finish(InningsEnd::OversExhausted));
        }

        self.phase = phase;
        Ok(phase)
    }

    /// Step until the innings is over and return its summary
    pub fn run<R: Rng + ?Sized>(
        mut self,
        rng: &mut R,
        commentary: &mut Commentary<'_>,
    ) -> Result<InningsSummary> {
        let end = loop {
            if let InningsPhase::Complete(end) = self.step(rng, commentary)? {
                break end;
            }
        };

        let state = self.ledger.state();
        Ok(InningsSummary {
            batting_team: self.batting.name().to_string(),
            bowling_team: self.bowling.name().to_string(),
            runs: state.runs,
            wickets: state.wickets,
            overs: state.overs_completed,
            balls_in_current_over: state.balls_in_current_over,
            end,
            deliveries: self.deliveries,
        })
    }

    fn close_over<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.over += 1;
        self.ledger.record_over_complete();
        self.bowler = self
            .bowling
            .next_bowler(rng)
            .ok_or_else(|| CricketError::EmptyRoster(self.bowling.name().to_string()))?;
        // The next ball is numbered 1 once the loop-end increment runs
        self.ball_index = 0;

        tracing::debug!(
            overs = self.over,
            bowler = %self.bowling.player(self.bowler).name,
            "over complete"
        );
        Ok(())
    }

    fn finish(&mut self, end: InningsEnd) -> InningsPhase {
        tracing::debug!(?end, "innings complete");
        self.phase = InningsPhase::Complete(end);
        self.phase
    }
}
