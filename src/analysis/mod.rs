//! Data transformation stages
//!
//! This module contains the typed stages of the pipeline:
//! - Duration coercion and row cleaning
//! - Group-by aggregation with mean and sample standard deviation

pub mod aggregate;
pub mod clean;

// Re-export analysis functions for convenience
pub use aggregate::{aggregate_durations, mean, sample_std_dev};
pub use clean::{clean_records, coerce_duration, coerce_records, CleanSummary};
