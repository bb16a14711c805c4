//! Runs scored off a delivery that did not take a wicket

use crate::team::PlayerAttributes;
use rand::Rng;

/// Skills are rescaled from [0, 1] to [0, 10] before comparison
const SKILL_SCALE: f64 = 10.0;

/// Highest run value reachable for this pairing
///
/// Half the gap between the rescaled batting and bowling skills, floored,
/// plus one. Only the size of the gap matters, not which side is better.
pub fn max_runs(batsman: &PlayerAttributes, bowler: &PlayerAttributes) -> u32 {
    let batting = batsman.batting_skill * SKILL_SCALE;
    let bowling = bowler.bowling_skill * SKILL_SCALE;
    let average_skill = (batting - bowling).abs() / 2.0;
    average_skill.floor() as u32 + 1
}

/// Uniform draw from `0..=max_runs(batsman, bowler)`
pub fn calculate_runs<R: Rng + ?Sized>(
    batsman: &PlayerAttributes,
    bowler: &PlayerAttributes,
    rng: &mut R,
) -> u32 {
    rng.gen_range(0..=max_runs(batsman, bowler))
}
