//! Common infrastructure modules shared across pipeline stages
//!
//! This module provides reusable infrastructure for:
//! - Data structures for raw, cleaned and aggregated timing records
//! - ASCII table formatting for console diagnostics
//! - Plotting grouped bar charts

pub mod data_structures;
pub mod plots;
pub mod tables;

// Re-export commonly used items
pub use data_structures::{AggregatedRecord, CleanRecord, RawRecord, RawTable};
pub use plots::{ChartStyle, PlotError};
