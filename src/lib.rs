//! # bench-report
//! Turns a CSV of benchmark timings into per-(algorithm, input file) statistics,
//! a grouped bar chart with error bars, and an aggregated CSV.
//!
//! The pipeline is [`report::generate_report`]; the individual stages are exposed
//! for reuse and testing.

/// Loading the timing CSV into a raw string table.
pub mod parsing;

/// Typed stages: duration coercion, cleaning and aggregation.
pub mod analysis;

/// Shared data structures, console tables and chart rendering.
pub mod common;

pub mod config;
pub mod output;
pub mod report;
pub mod viewer;

pub use config::ReportConfig;
pub use report::{generate_report, ReportError, ReportOutcome};
