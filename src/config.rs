//! Fixed paths and parameters of a report run

use crate::common::ChartStyle;
use std::path::PathBuf;

/// Timing data read by default
pub const DEFAULT_INPUT_PATH: &str = "data/output_stats.csv";

/// Bar chart written by default
pub const DEFAULT_CHART_PATH: &str = "aggregated_execution_time.png";

/// Aggregated statistics written by default
pub const DEFAULT_AGGREGATE_PATH: &str = "aggregated_output_stats.csv";

/// Number of raw rows shown in the console preview
pub const PREVIEW_ROWS: usize = 5;

/// Everything a report run needs; [`Default`] gives the fixed paths and chart style
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub chart_path: PathBuf,
    pub aggregate_path: PathBuf,
    pub preview_rows: usize,
    /// Open the chart in a viewer after saving it, if a display is available
    pub show_chart: bool,
    pub chart_style: ChartStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            aggregate_path: PathBuf::from(DEFAULT_AGGREGATE_PATH),
            preview_rows: PREVIEW_ROWS,
            show_chart: true,
            chart_style: ChartStyle::default(),
        }
    }
}
