//! Slider dimension values for a check-in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum slider value (inclusive).
pub const SCALE_MAX: u8 = 100;

/// Errors that occur during dimension validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A slider value is outside [0, 100].
    #[error("Field '{field}' value {value} is out of bounds [0, {max}]")]
    OutOfBounds {
        /// Name of the field that failed validation
        field: &'static str,
        /// The invalid value provided
        value: u8,
        /// Maximum allowed value (100)
        max: u8,
    },
}

/// The four nervous-system dimensions rated by the user, each in [0, 100].
///
/// Every axis measures distance toward its *right-hand* pole, not an
/// absolute intensity:
///
/// - `grounded`: 0 = grounded, 100 = scattered
/// - `calm`: 0 = calm, 100 = anxious
/// - `present`: 0 = present, 100 = in-head / ruminating
/// - `energized`: 0 = energized, 100 = exhausted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DimensionScores {
    pub grounded: u8,
    pub calm: u8,
    pub present: u8,
    pub energized: u8,
}

impl DimensionScores {
    /// Create validated dimension scores.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfBounds`] if any value exceeds 100.
    pub fn new(grounded: u8, calm: u8, present: u8, energized: u8) -> Result<Self, ValidationError> {
        let scores = Self {
            grounded,
            calm,
            present,
            energized,
        };
        scores.validate()?;
        Ok(scores)
    }

    /// Create dimension scores, saturating each value at 100.
    ///
    /// For callers that prefer clamping to rejection.
    pub fn clamped(grounded: u8, calm: u8, present: u8, energized: u8) -> Self {
        Self {
            grounded: grounded.min(SCALE_MAX),
            calm: calm.min(SCALE_MAX),
            present: present.min(SCALE_MAX),
            energized: energized.min(SCALE_MAX),
        }
    }

    /// Check all four values against the [0, 100] bound.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("grounded", self.grounded),
            ("calm", self.calm),
            ("present", self.present),
            ("energized", self.energized),
        ] {
            if value > SCALE_MAX {
                return Err(ValidationError::OutOfBounds {
                    field,
                    value,
                    max: SCALE_MAX,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_full_range() {
        assert!(DimensionScores::new(0, 0, 0, 0).is_ok());
        assert!(DimensionScores::new(100, 100, 100, 100).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_bounds() {
        let err = DimensionScores::new(101, 0, 0, 0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfBounds {
                field: "grounded",
                value: 101,
                max: 100,
            }
        );
        assert!(err.to_string().contains("grounded"));
    }

    #[test]
    fn test_clamped_saturates() {
        let scores = DimensionScores::clamped(255, 101, 100, 7);
        assert_eq!(scores.grounded, 100);
        assert_eq!(scores.calm, 100);
        assert_eq!(scores.present, 100);
        assert_eq!(scores.energized, 7);
    }
}
