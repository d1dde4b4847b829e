//! Lipid panel evaluation: Friedewald derivation and risk classification.
//!
//! The evaluator is a single stateless pure transformation. Derived values
//! use the Friedewald estimation exactly (no intermediate rounding):
//!
//! ```text
//! vldl = triglycerides / 5
//! ldl  = total_cholesterol - hdl - vldl
//! ```
//!
//! Presentation rounding (one decimal place) is a renderer concern and never
//! happens here.

use serde::{Deserialize, Serialize};

use super::reading::{LipidReading, ValidationError};

/// Triglyceride level above which the Friedewald estimation loses accuracy.
/// Readings beyond it still evaluate, but the result carries a warning flag.
pub const FRIEDEWALD_ACCURACY_LIMIT: f64 = 400.0;

/// Coarse 3-way styling band shared by every metric.
///
/// This is the display-severity axis, deliberately separate from the
/// per-metric descriptive bands: LDL has five descriptions but only three
/// stylings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Styling {
    /// Within the healthy range
    Normal,
    /// Borderline, worth watching
    Borderline,
    /// Out of range
    High,
}

impl Styling {
    /// Associated color for terminal display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Normal => (16, 185, 129),     // Emerald (#10B981)
            Self::Borderline => (251, 191, 36), // Amber (#FBBF24)
            Self::High => (244, 63, 94),        // Rose (#F43F5E)
        }
    }
}

/// Descriptive band for estimated LDL cholesterol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LdlBand {
    /// < 100 mg/dL
    Optimal,
    /// 100-129 mg/dL
    NearOptimal,
    /// 130-159 mg/dL
    BorderlineHigh,
    /// 160-189 mg/dL
    High,
    /// >= 190 mg/dL
    VeryHigh,
}

impl LdlBand {
    /// Classify an LDL value in mg/dL.
    ///
    /// Negative values are possible when the three inputs are individually
    /// valid but mutually inconsistent; they fall into `Optimal` like any
    /// other value under 100. The evaluator does not second-guess them.
    #[must_use]
    pub fn classify(ldl: f64) -> Self {
        if ldl < 100.0 {
            Self::Optimal
        } else if ldl <= 129.0 {
            Self::NearOptimal
        } else if ldl <= 159.0 {
            Self::BorderlineHigh
        } else if ldl <= 189.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::NearOptimal => "Near Optimal",
            Self::BorderlineHigh => "Borderline High",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Display styling. Both `Optimal` and `NearOptimal` style as normal;
    /// `High` and `VeryHigh` share the high styling. The five-way text and
    /// three-way styling are intentionally asymmetric.
    #[must_use]
    pub fn styling(&self) -> Styling {
        match self {
            Self::Optimal | Self::NearOptimal => Styling::Normal,
            Self::BorderlineHigh => Styling::Borderline,
            Self::High | Self::VeryHigh => Styling::High,
        }
    }
}

/// Band for HDL ("good") cholesterol. Higher is better, so the styling runs
/// in the opposite direction from the other metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HdlBand {
    /// < 40 mg/dL, a risk factor
    Low,
    /// 40-59 mg/dL
    Acceptable,
    /// >= 60 mg/dL, protective
    Optimal,
}

impl HdlBand {
    /// Classify an HDL value in mg/dL.
    #[must_use]
    pub fn classify(hdl: f64) -> Self {
        if hdl < 40.0 {
            Self::Low
        } else if hdl < 60.0 {
            Self::Acceptable
        } else {
            Self::Optimal
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low (Risk Factor)",
            Self::Acceptable => "Acceptable",
            Self::Optimal => "Optimal (Protective)",
        }
    }

    /// Display styling. Low HDL is the dangerous end.
    #[must_use]
    pub fn styling(&self) -> Styling {
        match self {
            Self::Low => Styling::High,
            Self::Acceptable => Styling::Borderline,
            Self::Optimal => Styling::Normal,
        }
    }
}

/// Band for triglycerides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriglycerideBand {
    /// < 150 mg/dL
    Normal,
    /// 150-199 mg/dL
    BorderlineHigh,
    /// >= 200 mg/dL
    High,
}

impl TriglycerideBand {
    /// Classify a triglyceride value in mg/dL.
    #[must_use]
    pub fn classify(trig: f64) -> Self {
        if trig < 150.0 {
            Self::Normal
        } else if trig <= 199.0 {
            Self::BorderlineHigh
        } else {
            Self::High
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::BorderlineHigh => "Borderline High",
            Self::High => "High",
        }
    }

    /// Display styling.
    #[must_use]
    pub fn styling(&self) -> Styling {
        match self {
            Self::Normal => Styling::Normal,
            Self::BorderlineHigh => Styling::Borderline,
            Self::High => Styling::High,
        }
    }
}

/// Band for total cholesterol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalCholesterolBand {
    /// < 200 mg/dL
    Desirable,
    /// 200-239 mg/dL
    BorderlineHigh,
    /// >= 240 mg/dL
    High,
}

impl TotalCholesterolBand {
    /// Classify a total cholesterol value in mg/dL.
    #[must_use]
    pub fn classify(total: f64) -> Self {
        if total < 200.0 {
            Self::Desirable
        } else if total <= 239.0 {
            Self::BorderlineHigh
        } else {
            Self::High
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Desirable => "Desirable",
            Self::BorderlineHigh => "Borderline High",
            Self::High => "High",
        }
    }

    /// Display styling.
    #[must_use]
    pub fn styling(&self) -> Styling {
        match self {
            Self::Desirable => Styling::Normal,
            Self::BorderlineHigh => Styling::Borderline,
            Self::High => Styling::High,
        }
    }
}

/// Overall recommendation derived from the four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// At least one value crossed a consultation threshold
    Elevated,
    /// All values within the consultation thresholds
    GenerallyHealthy,
}

impl Recommendation {
    /// Decide the recommendation from raw values.
    ///
    /// All four comparisons are strict. The thresholds are close to, but NOT
    /// identical with, the band boundaries (ldl exactly 130 styles as
    /// borderline yet does not trip this flag); that discrepancy is part of
    /// the contract and must not be "aligned".
    #[must_use]
    pub fn from_values(ldl: f64, hdl: f64, triglycerides: f64, total_cholesterol: f64) -> Self {
        if ldl > 130.0 || triglycerides > 200.0 || hdl < 40.0 || total_cholesterol > 240.0 {
            Self::Elevated
        } else {
            Self::GenerallyHealthy
        }
    }

    /// Advice text shown to the user.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Elevated => {
                "Your results indicate elevated cholesterol levels. \
                 Consider consulting with a healthcare provider."
            }
            Self::GenerallyHealthy => {
                "Your cholesterol levels are generally healthy. \
                 Maintain a balanced diet and regular exercise."
            }
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Elevated => write!(f, "ELEVATED"),
            Self::GenerallyHealthy => write!(f, "GENERALLY HEALTHY"),
        }
    }
}

/// Complete result of one evaluation: inputs, derived values, per-metric
/// classifications, and the overall recommendation.
///
/// Value-only and immutable; no identity, nothing persisted. `ldl` may be
/// negative when the inputs are mutually inconsistent (e.g. HDL above total
/// cholesterol); the evaluator passes such values through unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Total cholesterol input (mg/dL)
    pub total_cholesterol: f64,
    /// HDL input (mg/dL)
    pub hdl: f64,
    /// Triglycerides input (mg/dL)
    pub triglycerides: f64,
    /// Derived VLDL: triglycerides / 5 (mg/dL)
    pub vldl: f64,
    /// Derived LDL via Friedewald (mg/dL)
    pub ldl: f64,

    /// LDL classification
    pub ldl_band: LdlBand,
    /// HDL classification
    pub hdl_band: HdlBand,
    /// Triglyceride classification
    pub triglyceride_band: TriglycerideBand,
    /// Total cholesterol classification
    pub total_cholesterol_band: TotalCholesterolBand,

    /// Overall recommendation
    pub recommendation: Recommendation,

    /// True when triglycerides exceed [`FRIEDEWALD_ACCURACY_LIMIT`]:
    /// the LDL estimate is unreliable but still reported.
    pub accuracy_warning: bool,
}

impl LipidReading {
    /// Evaluate this reading: derive VLDL and LDL, classify every metric,
    /// and decide the recommendation. Pure and infallible; the reading was
    /// already validated at construction.
    #[must_use]
    pub fn evaluate(&self) -> EvaluationResult {
        let vldl = self.triglycerides / 5.0;
        let ldl = self.total_cholesterol - self.hdl - vldl;

        EvaluationResult {
            total_cholesterol: self.total_cholesterol,
            hdl: self.hdl,
            triglycerides: self.triglycerides,
            vldl,
            ldl,
            ldl_band: LdlBand::classify(ldl),
            hdl_band: HdlBand::classify(self.hdl),
            triglyceride_band: TriglycerideBand::classify(self.triglycerides),
            total_cholesterol_band: TotalCholesterolBand::classify(self.total_cholesterol),
            recommendation: Recommendation::from_values(
                ldl,
                self.hdl,
                self.triglycerides,
                self.total_cholesterol,
            ),
            accuracy_warning: self.triglycerides > FRIEDEWALD_ACCURACY_LIMIT,
        }
    }
}

/// Validate and evaluate in one call.
///
/// # Errors
/// Returns [`ValidationError`] if any input is non-finite or non-positive;
/// no derived value is computed in that case.
pub fn evaluate(
    total_cholesterol: f64,
    hdl: f64,
    triglycerides: f64,
) -> Result<EvaluationResult, ValidationError> {
    Ok(LipidReading::new(total_cholesterol, hdl, triglycerides)?.evaluate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn test_friedewald_is_exact() {
        // Bitwise equality: the evaluator must not round anywhere.
        let result = evaluate(187.3, 48.6, 133.7).expect("Should evaluate");
        assert_eq!(result.vldl, 133.7 / 5.0);
        assert_eq!(result.ldl, 187.3 - 48.6 - (133.7 / 5.0));
    }

    #[test]
    fn test_worked_example() {
        let result = evaluate(200.0, 50.0, 150.0).expect("Should evaluate");
        assert_eq!(result.vldl, 30.0);
        assert_eq!(result.ldl, 120.0);
        assert_eq!(result.ldl_band, LdlBand::NearOptimal);
        assert_eq!(result.ldl_band.styling(), Styling::Normal);
        assert_eq!(result.hdl_band, HdlBand::Acceptable);
        assert_eq!(result.triglyceride_band, TriglycerideBand::BorderlineHigh);
        assert_eq!(
            result.total_cholesterol_band,
            TotalCholesterolBand::BorderlineHigh
        );
        // ldl=120 not >130, trig=150 not >200, hdl=50 not <40, total=200 not >240
        assert_eq!(result.recommendation, Recommendation::GenerallyHealthy);
        assert!(!result.accuracy_warning);
    }

    #[test]
    fn test_ldl_band_boundaries() {
        assert_eq!(LdlBand::classify(99.999), LdlBand::Optimal);
        assert_eq!(LdlBand::classify(100.0), LdlBand::NearOptimal);
        assert_eq!(LdlBand::classify(129.0), LdlBand::NearOptimal);
        assert_eq!(LdlBand::classify(130.0), LdlBand::BorderlineHigh);
        assert_eq!(LdlBand::classify(159.0), LdlBand::BorderlineHigh);
        assert_eq!(LdlBand::classify(160.0), LdlBand::High);
        assert_eq!(LdlBand::classify(189.0), LdlBand::High);
        assert_eq!(LdlBand::classify(190.0), LdlBand::VeryHigh);
    }

    #[test]
    fn test_ldl_styling_is_three_way() {
        // Five descriptions, three stylings.
        assert_eq!(LdlBand::classify(85.0).styling(), Styling::Normal);
        assert_eq!(LdlBand::classify(120.0).styling(), Styling::Normal);
        assert_ne!(
            LdlBand::classify(85.0).description(),
            LdlBand::classify(120.0).description()
        );
        assert_eq!(LdlBand::classify(145.0).styling(), Styling::Borderline);
        assert_eq!(LdlBand::classify(170.0).styling(), Styling::High);
        assert_eq!(LdlBand::classify(250.0).styling(), Styling::High);
        assert_ne!(
            LdlBand::classify(170.0).description(),
            LdlBand::classify(250.0).description()
        );
    }

    #[test]
    fn test_hdl_band_boundaries() {
        assert_eq!(HdlBand::classify(39.9), HdlBand::Low);
        assert_eq!(HdlBand::classify(40.0), HdlBand::Acceptable);
        assert_eq!(HdlBand::classify(59.9), HdlBand::Acceptable);
        assert_eq!(HdlBand::classify(60.0), HdlBand::Optimal);
        assert_eq!(HdlBand::classify(39.9).styling(), Styling::High);
        assert_eq!(HdlBand::classify(60.0).styling(), Styling::Normal);
    }

    #[test]
    fn test_triglyceride_band_boundaries() {
        assert_eq!(TriglycerideBand::classify(149.9), TriglycerideBand::Normal);
        assert_eq!(
            TriglycerideBand::classify(150.0),
            TriglycerideBand::BorderlineHigh
        );
        assert_eq!(
            TriglycerideBand::classify(199.0),
            TriglycerideBand::BorderlineHigh
        );
        assert_eq!(TriglycerideBand::classify(200.0), TriglycerideBand::High);
    }

    #[test]
    fn test_total_cholesterol_band_boundaries() {
        assert_eq!(
            TotalCholesterolBand::classify(199.9),
            TotalCholesterolBand::Desirable
        );
        assert_eq!(
            TotalCholesterolBand::classify(200.0),
            TotalCholesterolBand::BorderlineHigh
        );
        assert_eq!(
            TotalCholesterolBand::classify(239.0),
            TotalCholesterolBand::BorderlineHigh
        );
        assert_eq!(
            TotalCholesterolBand::classify(240.0),
            TotalCholesterolBand::High
        );
    }

    #[test]
    fn test_bands_are_contiguous_and_ordered() {
        // Each classify function is a single if/else chain, so every value
        // lands in exactly one band. Contiguity and total ordering: sweeping
        // upward, the band rank never decreases and never skips.
        fn ldl_rank(v: f64) -> u8 {
            match LdlBand::classify(v) {
                LdlBand::Optimal => 0,
                LdlBand::NearOptimal => 1,
                LdlBand::BorderlineHigh => 2,
                LdlBand::High => 3,
                LdlBand::VeryHigh => 4,
            }
        }
        fn hdl_rank(v: f64) -> u8 {
            match HdlBand::classify(v) {
                HdlBand::Low => 0,
                HdlBand::Acceptable => 1,
                HdlBand::Optimal => 2,
            }
        }

        let mut prev_ldl = ldl_rank(0.0);
        let mut prev_hdl = hdl_rank(0.0);
        let mut v = 0.0;
        while v < 500.0 {
            let l = ldl_rank(v);
            let h = hdl_rank(v);
            assert!(l == prev_ldl || l == prev_ldl + 1, "LDL band skipped at {v}");
            assert!(h == prev_hdl || h == prev_hdl + 1, "HDL band skipped at {v}");
            prev_ldl = l;
            prev_hdl = h;
            v += 0.125;
        }
        assert_eq!(prev_ldl, 4);
        assert_eq!(prev_hdl, 2);
    }

    #[test]
    fn test_recommendation_thresholds_differ_from_bands() {
        // total=200, hdl=50, trig=100 → ldl = 200 - 50 - 20 = 130 exactly.
        // Band says BorderlineHigh; the recommendation comparison is strict,
        // so the result is still GenerallyHealthy.
        let result = evaluate(200.0, 50.0, 100.0).expect("Should evaluate");
        assert_eq!(result.ldl, 130.0);
        assert_eq!(result.ldl_band, LdlBand::BorderlineHigh);
        assert_eq!(result.recommendation, Recommendation::GenerallyHealthy);

        // Same story for triglycerides at exactly 200 (band High, flag not
        // tripped) when everything else is in range.
        let result = evaluate(150.0, 60.0, 200.0).expect("Should evaluate");
        assert_eq!(result.triglyceride_band, TriglycerideBand::High);
        assert_eq!(result.recommendation, Recommendation::GenerallyHealthy);
    }

    #[test]
    fn test_recommendation_elevated() {
        // hdl below 40 alone is enough.
        let result = evaluate(180.0, 35.0, 100.0).expect("Should evaluate");
        assert_eq!(result.recommendation, Recommendation::Elevated);

        // total above 240 alone is enough.
        let result = evaluate(245.0, 90.0, 100.0).expect("Should evaluate");
        assert_eq!(result.recommendation, Recommendation::Elevated);
    }

    #[test]
    fn test_accuracy_warning_threshold() {
        let result = evaluate(300.0, 50.0, 400.0).expect("Should evaluate");
        assert!(!result.accuracy_warning);

        let result = evaluate(300.0, 50.0, 400.1).expect("Should evaluate");
        assert!(result.accuracy_warning);
        // Advisory only: derivation still ran.
        assert_eq!(result.vldl, 400.1 / 5.0);
    }

    #[test]
    fn test_inconsistent_inputs_yield_negative_ldl() {
        // HDL above total cholesterol: physiologically implausible but each
        // input is individually valid, so the negative LDL passes through.
        let result = evaluate(100.0, 150.0, 100.0).expect("Should evaluate");
        assert_eq!(result.ldl, -70.0);
        assert_eq!(result.ldl_band, LdlBand::Optimal);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let a = evaluate(212.0, 44.0, 180.0).expect("Should evaluate");
        let b = evaluate(212.0, 44.0, 180.0).expect("Should evaluate");
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_input_fails_atomically() {
        let err = evaluate(-5.0, 50.0, 100.0).unwrap_err();
        assert_eq!(err.field(), Field::TotalCholesterol);

        let err = evaluate(f64::NAN, 50.0, 100.0).unwrap_err();
        assert_eq!(err, ValidationError::NotANumber {
            field: Field::TotalCholesterol
        });
    }
}
