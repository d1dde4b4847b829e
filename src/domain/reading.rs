//! Lipid panel input types and validation.
//!
//! A reading is the raw laboratory triple (total cholesterol, HDL,
//! triglycerides) in mg/dL, validated before any derivation happens.

use serde::{Deserialize, Serialize};

/// Which input field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// Total cholesterol (mg/dL)
    TotalCholesterol,
    /// HDL cholesterol (mg/dL)
    Hdl,
    /// Triglycerides (mg/dL)
    Triglycerides,
}

impl Field {
    /// Human-readable field label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalCholesterol => "Total Cholesterol",
            Self::Hdl => "HDL Cholesterol",
            Self::Triglycerides => "Triglycerides",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error raised when a reading cannot be constructed.
///
/// `NotANumber` and `NonPositive` are kept distinct so callers (and tests)
/// can tell "failed to parse" from "parsed but out of range".
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is not a valid number")]
    NotANumber { field: Field },

    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: Field, value: f64 },
}

impl ValidationError {
    /// The field that failed validation.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::NotANumber { field } | Self::NonPositive { field, .. } => *field,
        }
    }
}

/// One lipid panel reading, all values in mg/dL.
///
/// A reading only exists for the duration of a single evaluation; it carries
/// no identity and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LipidReading {
    /// Total cholesterol
    pub total_cholesterol: f64,
    /// HDL ("good") cholesterol
    pub hdl: f64,
    /// Triglycerides
    pub triglycerides: f64,
}

impl LipidReading {
    /// Construct a validated reading.
    ///
    /// Validation is atomic: no derived value is computed until all three
    /// inputs pass. Non-finite values are rejected first (for every field,
    /// in total → HDL → triglycerides order), then non-positive ones, which
    /// matches how a caller parsing free-form text wants errors reported.
    ///
    /// # Errors
    /// Returns [`ValidationError`] naming the first offending field.
    pub fn new(total_cholesterol: f64, hdl: f64, triglycerides: f64) -> Result<Self, ValidationError> {
        let fields = [
            (Field::TotalCholesterol, total_cholesterol),
            (Field::Hdl, hdl),
            (Field::Triglycerides, triglycerides),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ValidationError::NotANumber { field });
            }
        }

        for (field, value) in fields {
            if value <= 0.0 {
                return Err(ValidationError::NonPositive { field, value });
            }
        }

        Ok(Self {
            total_cholesterol,
            hdl,
            triglycerides,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reading() {
        let reading = LipidReading::new(200.0, 50.0, 150.0).expect("Should validate");
        assert!((reading.total_cholesterol - 200.0).abs() < f64::EPSILON);
        assert!((reading.hdl - 50.0).abs() < f64::EPSILON);
        assert!((reading.triglycerides - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_rejected() {
        let err = LipidReading::new(f64::NAN, 50.0, 150.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotANumber {
                field: Field::TotalCholesterol
            }
        );
    }

    #[test]
    fn test_infinity_rejected() {
        let err = LipidReading::new(200.0, f64::INFINITY, 150.0).unwrap_err();
        assert_eq!(err, ValidationError::NotANumber { field: Field::Hdl });
    }

    #[test]
    fn test_non_positive_rejected() {
        let err = LipidReading::new(-5.0, 50.0, 100.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositive {
                field: Field::TotalCholesterol,
                value: -5.0
            }
        );

        let err = LipidReading::new(200.0, 50.0, 0.0).unwrap_err();
        assert_eq!(err.field(), Field::Triglycerides);
    }

    #[test]
    fn test_nan_reported_before_non_positive() {
        // Non-finite wins even when an earlier field is non-positive in a
        // later position: NaN anywhere means the caller handed us unparsed
        // garbage, which is the more useful diagnosis.
        let err = LipidReading::new(-5.0, f64::NAN, 100.0).unwrap_err();
        assert_eq!(err, ValidationError::NotANumber { field: Field::Hdl });
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = LipidReading::new(200.0, 50.0, -1.0).unwrap_err();
        assert!(err.to_string().contains("Triglycerides"));
        assert!(err.to_string().contains("greater than zero"));
    }
}
