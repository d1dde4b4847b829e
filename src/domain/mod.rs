//! Domain layer: Core lipid panel types and logic.
//!
//! This module contains pure Rust types with no I/O. Validation and
//! evaluation are deterministic and hold no state between calls.

mod evaluation;
mod reading;

pub use evaluation::{
    evaluate, EvaluationResult, HdlBand, LdlBand, Recommendation, Styling, TotalCholesterolBand,
    TriglycerideBand, FRIEDEWALD_ACCURACY_LIMIT,
};
pub use reading::{Field, LipidReading, ValidationError};
