//! Adapters layer: Concrete implementations of ports.
//!
//! Rendering surfaces for evaluation results:
//! - `text`: plain-text report for terminals and scripts
//! - `json`: machine-readable serde_json output

pub mod json;
pub mod text;

// Re-export render error for lib.rs
pub use json::RenderError;
pub use json::JsonRenderer;
pub use text::TextRenderer;
