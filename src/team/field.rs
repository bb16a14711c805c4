//! Ground conditions shared by both innings

use crate::core::error::{CricketError, Result};
use serde::{Deserialize, Serialize};

/// Read-only playing conditions, nominally in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConditions {
    /// Relative ground size. Bigger grounds make scoring harder.
    pub size: f64,
    /// Crowd ratio. Carried for narration; the outcome model ignores it.
    pub fan_ratio: f64,
    /// How much the pitch helps the bowler
    pub pitch_conditions: f64,
    /// Boost applied to the batting side
    pub home_advantage: f64,
}

impl FieldConditions {
    pub fn new(size: f64, fan_ratio: f64, pitch_conditions: f64, home_advantage: f64) -> Self {
        Self {
            size,
            fan_ratio,
            pitch_conditions,
            home_advantage,
        }
    }

    /// Only finiteness and sign are checked here. A zero `size` is caught
    /// by the outcome predictor when the first ball is bowled.
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("size", self.size),
            ("fan_ratio", self.fan_ratio),
            ("pitch_conditions", self.pitch_conditions),
            ("home_advantage", self.home_advantage),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(CricketError::Config(format!(
                    "field {} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for FieldConditions {
    fn default() -> Self {
        Self::new(0.5, 0.8, 0.6, 0.7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_is_valid() {
        assert!(FieldConditions::default().validate().is_ok());
    }

    #[test]
    fn test_zero_size_passes_config_validation() {
        let field = FieldConditions::new(0.0, 0.5, 0.5, 0.5);
        assert!(field.validate().is_ok());
    }

    #[test]
    fn test_negative_or_infinite_values_rejected() {
        assert!(FieldConditions::new(-0.1, 0.5, 0.5, 0.5).validate().is_err());
        assert!(FieldConditions::new(0.5, f64::INFINITY, 0.5, 0.5).validate().is_err());
    }
}
