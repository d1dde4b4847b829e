//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a clinical-themed interface for:
//! - Lipid panel entry
//! - Results and interpretation display

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::LipidTheme;
