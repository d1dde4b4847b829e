//! Report service: Orchestrates one evaluation pass.
//!
//! This service coordinates:
//! - Input validation
//! - Friedewald derivation and classification
//! - Structured logging of the outcome
//! - Rendering through the configured port

use crate::domain::{evaluate, EvaluationResult};
use crate::ports::Renderer;
use crate::LipidscopeError;

/// Service wiring the pure evaluator to a rendering surface.
///
/// Holds no state between calls; the renderer is the only collaborator.
pub struct ReportService<R>
where
    R: Renderer,
{
    renderer: R,
}

impl<R> ReportService<R>
where
    R: Renderer,
    R::Error: Into<LipidscopeError>,
{
    /// Create a new report service.
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Validate, evaluate, and render one reading.
    ///
    /// # Errors
    /// Returns [`LipidscopeError::Validation`] when the inputs are rejected
    /// (nothing is rendered in that case), or the renderer's error when
    /// output fails.
    pub fn report(
        &mut self,
        total_cholesterol: f64,
        hdl: f64,
        triglycerides: f64,
    ) -> Result<EvaluationResult, LipidscopeError> {
        let result = evaluate(total_cholesterol, hdl, triglycerides)?;

        tracing::info!(
            ldl = result.ldl,
            vldl = result.vldl,
            recommendation = %result.recommendation,
            "Evaluated lipid panel"
        );
        if result.accuracy_warning {
            tracing::warn!(
                triglycerides,
                "Triglycerides above the Friedewald accuracy limit; LDL estimate unreliable"
            );
        }

        self.renderer.render(&result).map_err(Into::into)?;
        Ok(result)
    }

    /// Consume the service and return the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Recommendation;

    /// Test double that records every rendered result.
    #[derive(Default)]
    struct RecordingRenderer {
        rendered: Vec<EvaluationResult>,
    }

    impl Renderer for RecordingRenderer {
        type Error = std::io::Error;

        fn render(&mut self, result: &EvaluationResult) -> Result<(), Self::Error> {
            self.rendered.push(*result);
            Ok(())
        }
    }

    #[test]
    fn test_report_renders_valid_reading() {
        let mut service = ReportService::new(RecordingRenderer::default());
        let result = service.report(200.0, 50.0, 150.0).expect("Should report");
        assert_eq!(result.recommendation, Recommendation::GenerallyHealthy);

        let renderer = service.into_renderer();
        assert_eq!(renderer.rendered.len(), 1);
        assert_eq!(renderer.rendered[0], result);
    }

    #[test]
    fn test_invalid_reading_renders_nothing() {
        let mut service = ReportService::new(RecordingRenderer::default());
        let err = service.report(200.0, -1.0, 150.0).unwrap_err();
        assert!(matches!(err, LipidscopeError::Validation(_)));
        assert!(service.into_renderer().rendered.is_empty());
    }
}
