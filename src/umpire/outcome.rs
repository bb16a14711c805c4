//! Out / not-out decision for a single delivery
//!
//! Batsman and bowler each get a strength score built by multiplying their
//! relevant skills with the ground conditions and one uniform draw. The
//! batsman survives when their score is at least the bowler's.

use crate::core::error::{CricketError, Result};
use crate::team::{FieldConditions, PlayerAttributes};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Out,
    NotOut,
}

impl Verdict {
    pub fn is_out(self) -> bool {
        self == Verdict::Out
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Out => write!(f, "OUT"),
            Verdict::NotOut => write!(f, "NOT OUT"),
        }
    }
}

/// Batting strength before the random draw is applied
///
/// `batting * experience / bowler_fielding * running * home_advantage / field_size`
pub fn batting_potential(
    batsman: &PlayerAttributes,
    bowler: &PlayerAttributes,
    field: &FieldConditions,
) -> Result<f64> {
    if bowler.fielding_skill <= 0.0 {
        return Err(CricketError::Domain(format!(
            "bowler {} has fielding_skill {}; must be positive",
            bowler.name, bowler.fielding_skill
        )));
    }
    if field.size <= 0.0 {
        return Err(CricketError::Domain(format!(
            "field size {} must be positive",
            field.size
        )));
    }

    let potential = batsman.batting_skill
        * batsman.experience
        * bowler.fielding_skill.recip()
        * batsman.running_skill
        * field.home_advantage
        * field.size.recip();

    if !potential.is_finite() {
        return Err(CricketError::Domain(format!(
            "batting strength for {} against {} is not finite",
            batsman.name, bowler.name
        )));
    }
    Ok(potential)
}

/// Bowling strength before the random draw is applied
pub fn bowling_potential(bowler: &PlayerAttributes, field: &FieldConditions) -> f64 {
    bowler.bowling_skill * bowler.experience * field.pitch_conditions
}

/// Decide one delivery. Draws the batting factor first, then the bowling factor.
pub fn predict_outcome<R: Rng + ?Sized>(
    batsman: &PlayerAttributes,
    bowler: &PlayerAttributes,
    field: &FieldConditions,
    rng: &mut R,
) -> Result<Verdict> {
    let batting_strength = batting_potential(batsman, bowler, field)? * rng.gen::<f64>();
    let bowling_strength = bowling_potential(bowler, field) * rng.gen::<f64>();

    if batting_strength >= bowling_strength {
        Ok(Verdict::NotOut)
    } else {
        Ok(Verdict::Out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn player(batting: f64, bowling: f64, fielding: f64) -> PlayerAttributes {
        PlayerAttributes::new("Test", bowling, batting, fielding, 0.8, 0.8)
    }

    #[test]
    fn test_zero_fielding_is_domain_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = predict_outcome(
            &player(0.5, 0.5, 0.5),
            &player(0.5, 0.5, 0.0),
            &FieldConditions::default(),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, CricketError::Domain(_)));
    }

    #[test]
    fn test_zero_field_size_is_domain_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let field = FieldConditions::new(0.0, 0.5, 0.5, 0.5);
        let err =
            predict_outcome(&player(0.5, 0.5, 0.5), &player(0.5, 0.5, 0.5), &field, &mut rng)
                .unwrap_err();
        assert!(matches!(err, CricketError::Domain(_)));
    }

    #[test]
    fn test_powerless_bowler_never_takes_wicket() {
        // Bowling strength is always 0, batting strength is always >= 0
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let bowler = player(0.5, 0.0, 0.5);
        for _ in 0..500 {
            let verdict =
                predict_outcome(&player(0.5, 0.5, 0.5), &bowler, &FieldConditions::default(), &mut rng)
                    .unwrap();
            assert_eq!(verdict, Verdict::NotOut);
        }
    }

    #[test]
    fn test_stronger_batsman_survives_more_often() {
        let field = FieldConditions::default();
        let bowler = player(0.5, 0.9, 0.9);
        let survivals = |batting: f64| {
            let mut rng = ChaCha8Rng::seed_from_u64(5);
            (0..2000)
                .filter(|_| {
                    predict_outcome(&player(batting, 0.5, 0.5), &bowler, &field, &mut rng).unwrap()
                        == Verdict::NotOut
                })
                .count()
        };
        assert!(survivals(0.9) > survivals(0.1));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Out.to_string(), "OUT");
        assert_eq!(Verdict::NotOut.to_string(), "NOT OUT");
    }

    proptest! {
        #[test]
        fn prop_verdict_defined_for_valid_skills(
            batting in 0.01f64..=1.0,
            experience in 0.01f64..=1.0,
            fielding in 0.01f64..=1.0,
            bowling in 0.01f64..=1.0,
            size in 0.01f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let batsman = PlayerAttributes::new("Bat", 0.5, batting, 0.5, 0.5, experience);
            let bowler = PlayerAttributes::new("Ball", bowling, 0.5, fielding, 0.5, experience);
            let field = FieldConditions::new(size, 0.5, 0.5, 0.5);
            let verdict = predict_outcome(&batsman, &bowler, &field, &mut rng);
            prop_assert!(matches!(verdict, Ok(Verdict::Out) | Ok(Verdict::NotOut)));
        }
    }
}
