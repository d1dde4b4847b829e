//! Plain-text renderer: human-readable report on any `Write` sink.

use std::io::Write;

use crate::domain::EvaluationResult;
use crate::ports::Renderer;

/// Renders an evaluation as a plain-text report.
///
/// Values are formatted to one decimal place here; presentation rounding is
/// a rendering concern and never happens in the evaluator.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the renderer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = std::io::Error;

    fn render(&mut self, result: &EvaluationResult) -> Result<(), Self::Error> {
        writeln!(self.out, "Cholesterol Results")?;
        writeln!(self.out, "-------------------")?;
        writeln!(
            self.out,
            "Total Cholesterol: {:.1} mg/dL ({})",
            result.total_cholesterol,
            result.total_cholesterol_band.description()
        )?;
        writeln!(
            self.out,
            "HDL (\"Good\"):      {:.1} mg/dL ({})",
            result.hdl,
            result.hdl_band.description()
        )?;
        writeln!(
            self.out,
            "LDL (\"Bad\"):       {:.1} mg/dL ({})",
            result.ldl,
            result.ldl_band.description()
        )?;
        writeln!(self.out, "VLDL:              {:.1} mg/dL", result.vldl)?;
        writeln!(
            self.out,
            "Triglycerides:     {:.1} mg/dL ({})",
            result.triglycerides,
            result.triglyceride_band.description()
        )?;

        if result.accuracy_warning {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "Note: above 400 mg/dL triglycerides the Friedewald formula \
                 may not be accurate. Consult your doctor for more precise testing."
            )?;
        }

        writeln!(self.out)?;
        writeln!(
            self.out,
            "Recommendation [{}]: {}",
            result.recommendation,
            result.recommendation.description()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{evaluate, Recommendation};

    fn render_to_string(result: &EvaluationResult) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(result).expect("Should render");
        String::from_utf8(renderer.into_inner()).expect("Should be UTF-8")
    }

    #[test]
    fn test_report_rounds_to_one_decimal() {
        // vldl = 133.7 / 5 = 26.74 → shown as 26.7
        let result = evaluate(187.0, 48.0, 133.7).expect("Should evaluate");
        let report = render_to_string(&result);
        assert!(report.contains("26.7 mg/dL"));
        // raw value untouched in the result itself
        assert_eq!(result.vldl, 133.7 / 5.0);
    }

    #[test]
    fn test_report_contains_bands_and_recommendation() {
        let result = evaluate(200.0, 50.0, 150.0).expect("Should evaluate");
        let report = render_to_string(&result);
        assert!(report.contains("120.0 mg/dL (Near Optimal)"));
        assert!(report.contains("Acceptable"));
        assert!(report.contains("GENERALLY HEALTHY"));
        assert!(report.contains("balanced diet"));
        assert!(!report.contains("Friedewald"));
    }

    #[test]
    fn test_report_carries_accuracy_note() {
        let result = evaluate(300.0, 50.0, 450.0).expect("Should evaluate");
        let report = render_to_string(&result);
        assert!(report.contains("Friedewald formula"));
        assert_eq!(result.recommendation, Recommendation::Elevated);
        assert!(report.contains("healthcare provider"));
    }
}
