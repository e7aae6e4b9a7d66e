use argh::FromArgs;
use bench_report::{generate_report, ReportConfig, ReportError};
use tracing_subscriber::EnvFilter;

/// Aggregates data/output_stats.csv into aggregated_output_stats.csv and
/// aggregated_execution_time.png
#[derive(FromArgs, Debug)]
pub struct Args {
    /// do not open the chart in an image viewer
    #[argh(switch)]
    no_show: bool,
}

impl From<Args> for ReportConfig {
    fn from(args: Args) -> Self {
        Self {
            show_chart: !args.no_show,
            ..Default::default()
        }
    }
}

fn main() -> Result<(), ReportError> {
    // Logs go to stderr so stdout only carries the report tables
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    generate_report(&ReportConfig::from(args))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_use_fixed_config() {
        let args = Args::from_args(&["bench-report"], &[]).unwrap();
        assert_eq!(ReportConfig::from(args), ReportConfig::default());
    }

    #[test]
    fn test_no_show_only_disables_viewer() {
        let args = Args::from_args(&["bench-report"], &["--no-show"]).unwrap();
        let config = ReportConfig::from(args);

        assert!(!config.show_chart);
        assert_eq!(config.input_path, ReportConfig::default().input_path);
    }

    #[test]
    fn test_path_overrides_are_rejected() {
        assert!(Args::from_args(&["bench-report"], &["--input", "other.csv"]).is_err());
    }
}
