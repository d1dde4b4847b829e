//! JSON renderer: serializes the full evaluation result to any `Write` sink.
//!
//! Emits raw (unrounded) values; consumers decide their own presentation.

use std::io::Write;

use crate::domain::EvaluationResult;
use crate::ports::Renderer;

/// Error type for JSON rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders an evaluation as a single pretty-printed JSON document.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the renderer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    type Error = RenderError;

    fn render(&mut self, result: &EvaluationResult) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut self.out, result)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluate;

    #[test]
    fn test_json_output_roundtrips() {
        let result = evaluate(200.0, 50.0, 150.0).expect("Should evaluate");

        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&result).expect("Should render");
        let bytes = renderer.into_inner();

        let parsed: EvaluationResult =
            serde_json::from_slice(&bytes).expect("Should parse back");
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_json_exposes_bands_by_name() {
        let result = evaluate(200.0, 50.0, 150.0).expect("Should evaluate");

        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&result).expect("Should render");

        let value: serde_json::Value =
            serde_json::from_slice(&renderer.into_inner()).expect("Should parse");
        assert_eq!(value["ldl_band"], "NearOptimal");
        assert_eq!(value["ldl"], 120.0);
        assert_eq!(value["accuracy_warning"], false);
    }
}
