//! # Lipidscope
#![allow(non_snake_case)]
//!
//! Local lipid panel calculator and interpreter.
//!
//! This crate provides:
//! - Friedewald LDL/VLDL estimation from a three-value lipid panel
//! - Per-metric risk classification and an overall recommendation
//! - Terminal UI and one-shot text/JSON rendering
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types and the pure evaluation logic
//! - `ports`: Trait definitions for rendering surfaces
//! - `adapters`: Concrete renderers (plain text, JSON)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{evaluate, EvaluationResult, LipidReading, Recommendation};

/// Result type for Lipidscope operations
pub type Result<T> = std::result::Result<T, LipidscopeError>;

/// Main error type for Lipidscope
#[derive(Debug, thiserror::Error)]
pub enum LipidscopeError {
    #[error("Invalid reading: {0}")]
    Validation(#[from] domain::ValidationError),

    #[error("Rendering failed: {0}")]
    Render(#[from] adapters::RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
