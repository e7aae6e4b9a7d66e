//! Group-by aggregation of cleaned timing records
//!
//! Groups records by (`Algorithm`, `InputFile`) and computes the arithmetic mean
//! and sample standard deviation of each group's durations.

use crate::common::data_structures::{AggregatedRecord, CleanRecord};
use std::collections::BTreeMap;
use tracing::info;

/// Arithmetic mean of the samples, `None` if there are none
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Sample standard deviation (Bessel's correction, divisor n - 1)
///
/// Undefined for fewer than two samples, in which case `None` is returned
/// rather than zero.
pub fn sample_std_dev(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }

    let mean = mean(samples)?;
    let squared_diffs: f64 = samples.iter().map(|&x| (x - mean).powi(2)).sum();
    Some((squared_diffs / (samples.len() - 1) as f64).sqrt())
}

/// Aggregates cleaned records into one row per (`Algorithm`, `InputFile`) pair
///
/// Rows are ordered lexicographically by algorithm, then by input file.
///
/// # Arguments
/// * `records` - Cleaned records; every duration is present
///
/// # Returns
/// One [`AggregatedRecord`] per distinct group, empty if `records` is empty
pub fn aggregate_durations(records: &[CleanRecord]) -> Vec<AggregatedRecord> {
    let mut groups: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.algorithm.as_str(), record.input_file.as_str()))
            .or_default()
            .push(record.duration);
    }

    let aggregated: Vec<AggregatedRecord> = groups
        .into_iter()
        .filter_map(|((algorithm, input_file), durations)| {
            Some(AggregatedRecord {
                algorithm: algorithm.to_owned(),
                input_file: input_file.to_owned(),
                mean_duration: mean(&durations)?,
                std_duration: sample_std_dev(&durations),
            })
        })
        .collect();

    info!(
        groups = aggregated.len(),
        records = records.len(),
        "Aggregated durations"
    );
    aggregated
}
