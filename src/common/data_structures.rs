use serde::{Deserialize, Serialize};

/// Name of the column holding the algorithm under test
pub const ALGORITHM_COLUMN: &str = "Algorithm";

/// Name of the column holding the benchmark input file
pub const INPUT_FILE_COLUMN: &str = "InputFile";

/// Name of the column holding the measured duration in seconds
pub const DURATION_COLUMN: &str = "Duration_sec";

/// The CSV exactly as it was read, before any coercion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Column names from the header row
    pub headers: Vec<String>,
    /// Every record, one string per column
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Position of the named column in the header row
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Iterates the cells of a single column, yielding `""` for short rows
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single benchmark run after the duration column has been coerced
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub algorithm: String,
    pub input_file: String,
    /// `None` when the source value was empty or not a number
    pub duration: Option<f64>,
}

/// A benchmark run that survived cleaning; its duration is always present
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub algorithm: String,
    pub input_file: String,
    pub duration: f64,
}

/// Summary statistics for one (`Algorithm`, `InputFile`) group
///
/// Field names are renamed to match the columns of the persisted CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    #[serde(rename = "InputFile")]
    pub input_file: String,
    /// Arithmetic mean of the group's durations
    pub mean_duration: f64,
    /// Sample standard deviation; `None` for groups with a single member
    pub std_duration: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RawTable {
        RawTable {
            headers: vec!["Algorithm".into(), "InputFile".into(), "Duration_sec".into()],
            rows: vec![
                vec!["A".into(), "f1".into(), "1.0".into()],
                vec!["B".into(), "f2".into()],
            ],
        }
    }

    #[test]
    fn test_column_index() {
        let table = table();
        assert_eq!(table.column_index(ALGORITHM_COLUMN), Some(0));
        assert_eq!(table.column_index(DURATION_COLUMN), Some(2));
        assert_eq!(table.column_index("Missing"), None);
    }

    #[test]
    fn test_column_pads_short_rows() {
        let table = table();
        let durations: Vec<&str> = table.column(2).collect();
        assert_eq!(durations, vec!["1.0", ""]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }
}
