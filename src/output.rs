//! Persistence of the aggregated statistics table

use crate::common::AggregatedRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while writing the aggregated table
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output file: {0}")]
    FileWrite(#[from] std::io::Error),

    #[error("Failed to serialize CSV: {0}")]
    CsvWrite(#[from] csv::Error),
}

type Result<T> = core::result::Result<T, OutputError>;

/// Writes the aggregated table as CSV to any writer
///
/// The header row is `Algorithm,InputFile,mean_duration,std_duration`; there is no
/// index column. An absent standard deviation is written as an empty field and
/// floats use their shortest round-trip representation.
pub fn write_aggregates<W: Write>(writer: W, records: &[AggregatedRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    if records.is_empty() {
        csv_writer.write_record(["Algorithm", "InputFile", "mean_duration", "std_duration"])?;
    }
    for record in records {
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Saves the aggregated table to `output_path`, replacing any existing file
pub fn save_aggregates(records: &[AggregatedRecord], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_aggregates(file, records)?;
    info!(path = %output_path.display(), rows = records.len(), "Saved aggregated statistics");
    Ok(())
}
