//! File parsing functionality for benchmark timing data
//!
//! This module handles loading the timing CSV into a [`RawTable`] and locating
//! the columns the rest of the pipeline depends on.

use crate::common::data_structures::{
    RawTable, ALGORITHM_COLUMN, DURATION_COLUMN, INPUT_FILE_COLUMN,
};
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("Input file has no header row")]
    EmptyInput,

    #[error("Required column '{0}' is missing from the header row")]
    MissingColumn(&'static str),

    #[error("Record on line {line} has {found} fields, but the header has {expected}")]
    RaggedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Positions of the three columns every timing file must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredColumns {
    pub algorithm: usize,
    pub input_file: usize,
    pub duration: usize,
}

/// Parse the benchmark timing CSV and load it for analysis
///
/// This function:
/// - Opens the file and reads the header row
/// - Reads every record as plain strings (no type coercion happens here)
/// - Pads short records implicitly (see [`RawTable::column`]) but rejects records
///   with more fields than the header
/// - Validates that the required columns are present
///
/// # Arguments
/// * `file_path` - Path to the timing CSV
///
/// # Returns
/// * `Ok(RawTable)` - Successfully parsed table
/// * `Err(ParsingError)` - If the file is unreadable, malformed or lacks a required column
pub fn parse_timing_csv(file_path: &Path) -> Result<RawTable> {
    let file = File::open(file_path)?;
    let table = read_timing_csv(file)?;
    info!(
        path = %file_path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "Loaded timing data"
    );
    Ok(table)
}

/// Reads a timing CSV from any reader; see [`parse_timing_csv`]
pub fn read_timing_csv<R: std::io::Read>(reader: R) -> Result<RawTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_owned).collect();
    if headers.is_empty() {
        return Err(ParsingError::EmptyInput);
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(ParsingError::RaggedRecord {
                line: record.position().map(|pos| pos.line()).unwrap_or(0),
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(str::to_owned).collect());
    }

    let table = RawTable { headers, rows };
    locate_required_columns(&table)?;
    debug!(headers = ?table.headers, "Validated header row");
    Ok(table)
}

/// Finds the `Algorithm`, `InputFile` and `Duration_sec` columns
///
/// # Returns
/// * `Ok(RequiredColumns)` - Column positions
/// * `Err(ParsingError::MissingColumn)` - Naming the first column not found
pub fn locate_required_columns(table: &RawTable) -> Result<RequiredColumns> {
    let find = |name: &'static str| {
        table
            .column_index(name)
            .ok_or(ParsingError::MissingColumn(name))
    };

    Ok(RequiredColumns {
        algorithm: find(ALGORITHM_COLUMN)?,
        input_file: find(INPUT_FILE_COLUMN)?,
        duration: find(DURATION_COLUMN)?,
    })
}
