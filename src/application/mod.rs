//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the evaluate-and-render use case.

mod report;

pub use report::ReportService;
