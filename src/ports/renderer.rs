//! Renderer port: Trait for presenting evaluation results.
//!
//! The evaluator is agnostic to how a result is displayed; anything that can
//! consume an [`EvaluationResult`] (terminal report, JSON stream, a UI) sits
//! behind this trait.

use crate::domain::EvaluationResult;

/// Trait for rendering an evaluation result to some output surface.
pub trait Renderer {
    /// Error type for rendering operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Render one evaluation result.
    ///
    /// # Errors
    /// Returns error if writing to the output surface fails.
    fn render(&mut self, result: &EvaluationResult) -> Result<(), Self::Error>;
}
