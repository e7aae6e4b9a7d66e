//! ASCII table formatting for console diagnostics
//!
//! This module renders the three console reports using the [`tabled`] crate:
//! - A preview of the first rows of the raw table
//! - A per-column summary (non-empty count and inferred kind)
//! - The full aggregated statistics table

use super::data_structures::{AggregatedRecord, RawTable};
use core::fmt;
use tabled::{builder::Builder, Table, Tabled};

/// Kind of values found in a column, inferred from its non-empty cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-empty cell parses as an integer
    Int,
    /// Every non-empty cell parses as a float, at least one is not an integer
    Float,
    /// At least one non-empty cell is not numeric
    Text,
    /// The column has no non-empty cells
    Empty,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Int => "int",
            ColumnKind::Float => "float",
            ColumnKind::Text => "text",
            ColumnKind::Empty => "empty",
        };
        f.write_str(name)
    }
}

impl ColumnKind {
    /// Infers the kind of a column from its cells; empty cells are ignored
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let mut kind = ColumnKind::Empty;
        for cell in cells.into_iter().map(str::trim).filter(|c| !c.is_empty()) {
            let cell_kind = if cell.parse::<i64>().is_ok() {
                ColumnKind::Int
            } else if cell.parse::<f64>().is_ok() {
                ColumnKind::Float
            } else {
                return ColumnKind::Text;
            };

            kind = match (kind, cell_kind) {
                (ColumnKind::Empty, k) => k,
                (ColumnKind::Float, _) | (_, ColumnKind::Float) => ColumnKind::Float,
                (k, _) => k,
            };
        }
        kind
    }
}

/// Summary of a single column of the raw table
#[derive(Debug, Clone, Tabled)]
pub struct ColumnSummary {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Column")]
    pub name: String,
    #[tabled(rename = "Non-Empty Count")]
    pub non_empty: usize,
    #[tabled(rename = "Kind")]
    pub kind: ColumnKind,
}

/// Display form of an [`AggregatedRecord`]
#[derive(Debug, Clone, Tabled)]
pub struct AggregateRow {
    #[tabled(rename = "Algorithm")]
    pub algorithm: String,
    #[tabled(rename = "InputFile")]
    pub input_file: String,
    #[tabled(rename = "mean_duration")]
    pub mean_duration: String,
    #[tabled(rename = "std_duration")]
    pub std_duration: String,
}

impl From<&AggregatedRecord> for AggregateRow {
    fn from(record: &AggregatedRecord) -> Self {
        Self {
            algorithm: record.algorithm.clone(),
            input_file: record.input_file.clone(),
            mean_duration: format!("{:.6}", record.mean_duration),
            std_duration: record
                .std_duration
                .map(|std| format!("{:.6}", std))
                .unwrap_or_else(|| "NaN".to_string()),
        }
    }
}

fn with_title(table: String, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{}\n{}\n{}", title, "=".repeat(title.len()), table),
        None => table,
    }
}

/// Formats the first `rows` records of the raw table
///
/// Short records are padded with empty cells so every row has one cell per header.
pub fn format_preview_table(table: &RawTable, rows: usize, title: Option<&str>) -> String {
    if table.headers.is_empty() {
        return "No data available for preview".to_string();
    }

    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(table.headers.iter().cloned());
    builder.push_record(header);

    for (index, row) in table.rows.iter().take(rows).enumerate() {
        let mut record = vec![index.to_string()];
        record.extend(
            (0..table.headers.len()).map(|column| row.get(column).cloned().unwrap_or_default()),
        );
        builder.push_record(record);
    }

    with_title(builder.build().to_string(), title)
}

/// Computes the per-column summary of the raw table
pub fn summarize_columns(table: &RawTable) -> Vec<ColumnSummary> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(index, name)| ColumnSummary {
            index,
            name: name.clone(),
            non_empty: table.column(index).filter(|c| !c.trim().is_empty()).count(),
            kind: ColumnKind::infer(table.column(index)),
        })
        .collect()
}

/// Formats the per-column summary with the total row count
pub fn format_column_summary(table: &RawTable, title: Option<&str>) -> String {
    let summary = Table::new(summarize_columns(table)).to_string();
    let body = format!(
        "{} entries, {} columns\n{}",
        table.len(),
        table.headers.len(),
        summary
    );
    with_title(body, title)
}

/// Formats the full aggregated statistics table
pub fn format_aggregate_table(records: &[AggregatedRecord], title: Option<&str>) -> String {
    if records.is_empty() {
        return with_title("No aggregated rows".to_string(), title);
    }

    let rows: Vec<AggregateRow> = records.iter().map(AggregateRow::from).collect();
    with_title(Table::new(rows).to_string(), title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table() -> RawTable {
        RawTable {
            headers: vec!["Algorithm".into(), "InputFile".into(), "Duration_sec".into()],
            rows: (0..8)
                .map(|i| vec![format!("alg{}", i), "f1".into(), format!("{}.5", i)])
                .chain([vec!["alg9".to_string(), "f2".to_string()]])
                .collect(),
        }
    }

    #[rstest]
    #[case(&["1", "2", "-3"], ColumnKind::Int)]
    #[case(&["1", "2.5", ""], ColumnKind::Float)]
    #[case(&["2.5", "1"], ColumnKind::Float)]
    #[case(&["1", "fast", "2.0"], ColumnKind::Text)]
    #[case(&["", " "], ColumnKind::Empty)]
    fn test_column_kind_infer(#[case] cells: &[&str], #[case] expected: ColumnKind) {
        assert_eq!(ColumnKind::infer(cells.iter().copied()), expected);
    }

    #[test]
    fn test_summarize_columns() {
        let summary = summarize_columns(&table());

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].name, "Algorithm");
        assert_eq!(summary[0].kind, ColumnKind::Text);
        assert_eq!(summary[0].non_empty, 9);
        assert_eq!(summary[2].kind, ColumnKind::Float);
        assert_eq!(summary[2].non_empty, 8);
    }

    #[test]
    fn test_format_preview_table() {
        let preview = format_preview_table(&table(), 5, Some("Preview"));

        assert!(preview.starts_with("Preview\n======="));
        assert!(preview.contains("Duration_sec"));
        assert!(preview.contains("alg4"));
        assert!(!preview.contains("alg5"));
    }

    #[test]
    fn test_format_column_summary() {
        let summary = format_column_summary(&table(), None);

        assert!(summary.starts_with("9 entries, 3 columns"));
        assert!(summary.contains("Non-Empty Count"));
        assert!(summary.contains("float"));
    }

    #[test]
    fn test_format_aggregate_table() {
        let records = vec![
            AggregatedRecord {
                algorithm: "A".into(),
                input_file: "f1".into(),
                mean_duration: 2.0,
                std_duration: Some(2.0f64.sqrt()),
            },
            AggregatedRecord {
                algorithm: "B".into(),
                input_file: "f1".into(),
                mean_duration: 2.0,
                std_duration: None,
            },
        ];

        let table = format_aggregate_table(&records, Some("Aggregated"));
        assert!(table.contains("mean_duration"));
        assert!(table.contains("1.414214"));
        assert!(table.contains("NaN"));

        let empty = format_aggregate_table(&[], None);
        assert_eq!(empty, "No aggregated rows");
    }
}
