//! Match output and serialization

use serde::{Deserialize, Serialize};

use crate::core::types::TeamSide;
use crate::simulation::innings::InningsSummary;

/// Winner and run margin, decided once both innings are complete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: TeamSide,
    pub winning_team: String,
    pub margin: u32,
}

impl MatchResult {
    /// The side batting first wins only with a strictly higher total.
    /// Level scores go to the side batting second with a margin of 0.
    pub fn decide(
        batting_first: TeamSide,
        first_team: &str,
        first_runs: u32,
        second_team: &str,
        second_runs: u32,
    ) -> Self {
        if first_runs > second_runs {
            Self {
                winner: batting_first,
                winning_team: first_team.to_string(),
                margin: first_runs - second_runs,
            }
        } else {
            Self {
                winner: batting_first.opponent(),
                winning_team: second_team.to_string(),
                margin: second_runs - first_runs,
            }
        }
    }

    pub fn is_tie(&self) -> bool {
        self.margin == 0
    }
}

/// Captains for both sides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captains {
    pub home: String,
    pub away: String,
}

/// Complete match output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutput {
    pub seed: Option<u64>,
    pub total_overs: u32,
    pub batting_first: TeamSide,
    pub captains: Captains,
    /// First innings, then second innings
    pub innings: Vec<InningsSummary>,
    pub result: MatchResult,
}

impl MatchOutput {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = self
            .innings
            .iter()
            .map(|innings| {
                format!(
                    "{} {}/{} ({} overs)",
                    innings.batting_team, innings.runs, innings.wickets, innings.overs
                )
            })
            .collect();

        if self.result.is_tie() {
            lines.push(format!(
                "Scores level; {} declared winner by 0 runs",
                self.result.winning_team
            ));
        } else {
            lines.push(format!(
                "{} won by {} runs",
                self.result.winning_team, self.result.margin
            ));
        }
        if let Some(seed) = self.seed {
            lines.push(format!("seed {}", seed));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_innings_higher_wins() {
        let result = MatchResult::decide(TeamSide::Away, "Australia", 40, "India", 31);
        assert_eq!(result.winner, TeamSide::Away);
        assert_eq!(result.winning_team, "Australia");
        assert_eq!(result.margin, 9);
        assert!(!result.is_tie());
    }

    #[test]
    fn test_chasing_side_wins_with_more() {
        let result = MatchResult::decide(TeamSide::Home, "India", 22, "Australia", 30);
        assert_eq!(result.winner, TeamSide::Away);
        assert_eq!(result.margin, 8);
    }

    #[test]
    fn test_level_scores_go_to_side_batting_second() {
        let result = MatchResult::decide(TeamSide::Home, "India", 25, "Australia", 25);
        assert_eq!(result.winner, TeamSide::Away);
        assert_eq!(result.winning_team, "Australia");
        assert!(result.is_tie());
    }
}
