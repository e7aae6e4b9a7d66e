//! The report pipeline: load → coerce/clean → aggregate → visualize → persist

use crate::analysis::{aggregate_durations, clean_records, coerce_records, CleanSummary};
use crate::common::plots::create_grouped_bar_chart;
use crate::common::tables::{format_aggregate_table, format_column_summary, format_preview_table};
use crate::common::{AggregatedRecord, PlotError};
use crate::config::ReportConfig;
use crate::output::{save_aggregates, OutputError};
use crate::parsing::{parse_timing_csv, ParsingError};
use crate::viewer::show_chart;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during a report run
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] ParsingError),

    #[error("Chart generation error: {0}")]
    Plot(#[from] PlotError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

type Result<T> = core::result::Result<T, ReportError>;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    /// Rows loaded and rows dropped while cleaning
    pub clean_summary: CleanSummary,
    /// The aggregated table that was plotted and saved
    pub aggregates: Vec<AggregatedRecord>,
}

/// Runs the whole pipeline
///
/// Console diagnostics (raw preview, column summary and the aggregated table) are
/// printed to stdout. The first failing stage aborts the run; nothing is retried.
pub fn generate_report(config: &ReportConfig) -> Result<ReportOutcome> {
    let table = parse_timing_csv(&config.input_path)?;

    println!(
        "{}\n",
        format_preview_table(&table, config.preview_rows, Some("Loaded Data (first rows)"))
    );
    println!("{}\n", format_column_summary(&table, Some("Columns")));

    let records = coerce_records(&table)?;
    let (cleaned, clean_summary) = clean_records(records);
    let aggregates = aggregate_durations(&cleaned);

    println!(
        "{}\n",
        format_aggregate_table(&aggregates, Some("Aggregated Statistics"))
    );

    create_grouped_bar_chart(&aggregates, &config.chart_style, &config.chart_path)?;
    if config.show_chart {
        show_chart(&config.chart_path);
    }

    save_aggregates(&aggregates, &config.aggregate_path)?;

    info!(
        groups = aggregates.len(),
        dropped = clean_summary.total - clean_summary.kept(),
        "Report complete"
    );
    Ok(ReportOutcome {
        clean_summary,
        aggregates,
    })
}
