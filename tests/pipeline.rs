use bench_report::analysis::{aggregate_durations, clean_records, coerce_records};
use bench_report::common::PlotError;
use bench_report::output::save_aggregates;
use bench_report::parsing::{parse_timing_csv, ParsingError};
use bench_report::{generate_report, ReportConfig, ReportError};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const TIMINGS: &str = "\
Algorithm,InputFile,Duration_sec,Run
A,f1,1.0,1
B,f1,2.0,1
A,f1,3.0,2
A,f2,not_a_number,1
B,f2,,1
B,f2, 4.5 ,2
";

fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("output_stats.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn config_in(dir: &Path, input: &Path) -> ReportConfig {
    ReportConfig {
        input_path: input.to_path_buf(),
        chart_path: dir.join("chart.png"),
        aggregate_path: dir.join("aggregated.csv"),
        show_chart: false,
        ..Default::default()
    }
}

#[test]
fn test_stages_produce_expected_csv() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, TIMINGS);
    let output = dir.path().join("aggregated.csv");

    let table = parse_timing_csv(&input).unwrap();
    let (cleaned, summary) = clean_records(coerce_records(&table).unwrap());
    assert_eq!(summary.total, 6);
    assert_eq!(summary.missing_duration, 2);
    assert_eq!(cleaned.len(), 4);

    let aggregates = aggregate_durations(&cleaned);
    save_aggregates(&aggregates, &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Algorithm,InputFile,mean_duration,std_duration\n\
         A,f1,2.0,1.4142135623730951\n\
         B,f1,2.0,\n\
         B,f2,4.5,\n"
    );
}

#[test]
fn test_missing_input_aborts() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path(), &dir.path().join("missing.csv"));

    let result = generate_report(&config);

    assert!(matches!(
        result,
        Err(ReportError::Parsing(ParsingError::FileRead(_)))
    ));
    assert!(!config.aggregate_path.exists());
}

#[test]
fn test_no_valid_rows_aborts_before_writing() {
    let dir = tempdir().unwrap();
    let input = write_input(
        &dir,
        "Algorithm,InputFile,Duration_sec\nA,f1,oops\nB,f2,\n",
    );
    let config = config_in(dir.path(), &input);

    let result = generate_report(&config);

    assert!(matches!(
        result,
        Err(ReportError::Plot(PlotError::InvalidData(_)))
    ));
    assert!(!config.chart_path.exists());
    assert!(!config.aggregate_path.exists());
}

#[test]
#[ignore = "Font rendering not available in test environment"]
fn test_infinite_group_still_written_to_csv() {
    let dir = tempdir().unwrap();
    let input = write_input(
        &dir,
        "Algorithm,InputFile,Duration_sec\nA,f1,inf\nB,f1,2.0\n",
    );
    let config = config_in(dir.path(), &input);

    let outcome = generate_report(&config).unwrap();

    assert_eq!(outcome.aggregates.len(), 2);
    assert!(config.chart_path.exists());
    let csv = fs::read_to_string(&config.aggregate_path).unwrap();
    assert!(csv.contains("A,f1,inf,\n"));
    assert!(csv.contains("B,f1,2.0,\n"));
}

#[test]
#[ignore = "Font rendering not available in test environment"]
fn test_generate_report_is_idempotent() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, TIMINGS);
    let config = config_in(dir.path(), &input);

    let first_outcome = generate_report(&config).unwrap();
    let first = fs::read(&config.aggregate_path).unwrap();
    let second_outcome = generate_report(&config).unwrap();
    let second = fs::read(&config.aggregate_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_outcome, second_outcome);
    assert_eq!(first_outcome.aggregates.len(), 3);
    assert!(config.chart_path.exists());
}
