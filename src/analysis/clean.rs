//! Duration coercion and row cleaning
//!
//! Converts the raw string table into typed records and removes rows that cannot
//! take part in aggregation.

use crate::common::data_structures::{CleanRecord, RawRecord, RawTable};
use crate::parsing::{locate_required_columns, ParsingError};
use tracing::{info, warn};

/// Counts of rows removed during [`clean_records`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Rows that entered cleaning
    pub total: usize,
    /// Rows dropped because the duration was missing or not a number
    pub missing_duration: usize,
    /// Rows dropped because `Algorithm` or `InputFile` was empty
    pub missing_key: usize,
}

impl CleanSummary {
    /// Rows that survived cleaning
    pub fn kept(&self) -> usize {
        self.total - self.missing_duration - self.missing_key
    }
}

/// Parses a single duration cell
///
/// Surrounding whitespace is ignored. Empty cells, unparseable text and `NaN`
/// become `None`; infinities are valid numbers and are kept.
pub fn coerce_duration(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|duration| !duration.is_nan())
}

/// Reinterprets the `Duration_sec` column of the table as numeric
///
/// # Returns
/// * `Ok(Vec<RawRecord>)` - One record per table row, in file order
/// * `Err(ParsingError::MissingColumn)` - If a required column is absent
pub fn coerce_records(table: &RawTable) -> Result<Vec<RawRecord>, ParsingError> {
    let columns = locate_required_columns(table)?;
    let cell = |row: &[String], index: usize| row.get(index).cloned().unwrap_or_default();

    Ok(table
        .rows
        .iter()
        .map(|row| RawRecord {
            algorithm: cell(row, columns.algorithm),
            input_file: cell(row, columns.input_file),
            duration: row
                .get(columns.duration)
                .and_then(|value| coerce_duration(value)),
        })
        .collect())
}

/// Drops every record that has no duration or no complete group key
///
/// Order of the surviving records is preserved.
pub fn clean_records(records: Vec<RawRecord>) -> (Vec<CleanRecord>, CleanSummary) {
    let mut summary = CleanSummary {
        total: records.len(),
        ..Default::default()
    };

    let mut cleaned = Vec::with_capacity(records.len());
    for record in records {
        let Some(duration) = record.duration else {
            summary.missing_duration += 1;
            continue;
        };

        if record.algorithm.is_empty() || record.input_file.is_empty() {
            summary.missing_key += 1;
            continue;
        }

        cleaned.push(CleanRecord {
            algorithm: record.algorithm,
            input_file: record.input_file,
            duration,
        });
    }

    if summary.missing_duration > 0 {
        warn!(
            dropped = summary.missing_duration,
            "Dropped rows with a missing or non-numeric duration"
        );
    }
    if summary.missing_key > 0 {
        warn!(
            dropped = summary.missing_key,
            "Dropped rows with an empty Algorithm or InputFile"
        );
    }
    info!(kept = summary.kept(), total = summary.total, "Cleaned timing data");

    (cleaned, summary)
}
