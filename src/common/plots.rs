//! Plotting infrastructure for grouped bar charts
//!
//! This module provides functionality to create a grouped bar chart with error bars
//! using the [`plotters`] crate. Charts are saved as PNG files at the resolution given
//! by [`ChartStyle`].
//!
//! The chart is laid out on a continuous `f64` x-axis: algorithm `i` occupies the
//! interval `i - 0.5 .. i + 0.5`, and inside it every input file gets an equal slot of
//! the cluster width, whether or not that algorithm was run on that file.

use super::data_structures::AggregatedRecord;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::collections::BTreeSet;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Share of each category's width taken up by its cluster of bars
const CLUSTER_WIDTH: f64 = 0.8;

/// Colour of the error bar whiskers
const ERROR_BAR_COLOR: RGBColor = RGBColor(128, 128, 128);

/// Evenly spaced samples of the viridis colour map, from 0.0 to 1.0
const VIRIDIS: [(u8, u8, u8); 9] = [
    (0x44, 0x01, 0x54),
    (0x47, 0x2d, 0x7b),
    (0x3b, 0x52, 0x8b),
    (0x2c, 0x72, 0x8e),
    (0x21, 0x91, 0x8c),
    (0x28, 0xae, 0x80),
    (0x5e, 0xc9, 0x62),
    (0xad, 0xdc, 0x30),
    (0xfd, 0xe7, 0x25),
];

/// Fixed presentation parameters of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Heading drawn as the first legend entry
    pub legend_title: String,
    /// Width of the error bar caps, in category units
    pub capsize: f64,
    /// Stroke width of the error bars in pixels
    pub error_bar_width: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 800,
            title: "Average Execution Time with Standard Deviation".to_string(),
            x_label: "Algorithm".to_string(),
            y_label: "Average Duration (seconds)".to_string(),
            legend_title: "Input File".to_string(),
            capsize: 0.1,
            error_bar_width: 2,
        }
    }
}

/// Samples `count` colours from the viridis colour map
///
/// Colours are taken at evenly spaced positions that exclude both ends of the map,
/// so a single colour comes from its middle.
pub fn viridis_palette(count: usize) -> Vec<RGBColor> {
    (0..count)
        .map(|index| {
            let position = (index + 1) as f64 / (count + 1) as f64;
            let scaled = position * (VIRIDIS.len() - 1) as f64;
            let lower = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
            let fraction = scaled - lower as f64;

            let (r0, g0, b0) = VIRIDIS[lower];
            let (r1, g1, b1) = VIRIDIS[lower + 1];
            let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * fraction).round() as u8;
            RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
        })
        .collect()
}

/// A single bar, positioned on the chart's x-axis
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Index into [`BarLayout::algorithms`]
    pub algorithm_index: usize,
    /// Index into [`BarLayout::input_files`]; selects the bar colour
    pub hue_index: usize,
    pub left: f64,
    pub right: f64,
    pub mean: f64,
    pub std: Option<f64>,
}

impl Bar {
    /// Horizontal centre of the bar
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Line segments of the capped error bar: the whisker and both caps
    ///
    /// Empty when the bar has no standard deviation.
    pub fn error_bar_segments(&self, cap_width: f64) -> Vec<[(f64, f64); 2]> {
        let Some(std) = self.std else {
            return Vec::new();
        };

        let x = self.center();
        let half_cap = cap_width.min(self.right - self.left) / 2.0;
        let (low, high) = (self.mean - std, self.mean + std);
        vec![
            [(x, low), (x, high)],
            [(x - half_cap, low), (x + half_cap, low)],
            [(x - half_cap, high), (x + half_cap, high)],
        ]
    }
}

/// Positions of every bar in the grouped chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    /// One cluster per algorithm, in x-axis order
    pub algorithms: Vec<String>,
    /// One colour per input file, in legend order
    pub input_files: Vec<String>,
    pub bars: Vec<Bar>,
}

impl BarLayout {
    /// Lays out one bar per aggregated record
    ///
    /// # Returns
    /// * `Ok(BarLayout)` - The computed layout
    /// * `Err(PlotError::InvalidData)` - If no record has finite statistics
    ///
    /// Records whose mean or standard deviation is infinite or NaN get no bar.
    pub fn from_records(records: &[AggregatedRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(PlotError::InvalidData(
                "No aggregated rows to plot".to_string(),
            ));
        }

        let (records, skipped): (Vec<&AggregatedRecord>, Vec<&AggregatedRecord>) =
            records.iter().partition(|record| {
                record.mean_duration.is_finite()
                    && record.std_duration.map_or(true, f64::is_finite)
            });
        for record in &skipped {
            warn!(
                algorithm = %record.algorithm,
                input_file = %record.input_file,
                "Skipping bar with non-finite statistics"
            );
        }
        if records.is_empty() {
            return Err(PlotError::InvalidData(
                "No aggregated rows with finite statistics to plot".to_string(),
            ));
        }

        let algorithms: Vec<String> = records
            .iter()
            .map(|r| r.algorithm.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let input_files: Vec<String> = records
            .iter()
            .map(|r| r.input_file.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let bar_width = CLUSTER_WIDTH / input_files.len() as f64;
        let bars = records
            .iter()
            .filter_map(|record| {
                let algorithm_index = algorithms.iter().position(|a| *a == record.algorithm)?;
                let hue_index = input_files.iter().position(|f| *f == record.input_file)?;
                let left =
                    algorithm_index as f64 - CLUSTER_WIDTH / 2.0 + hue_index as f64 * bar_width;

                Some(Bar {
                    algorithm_index,
                    hue_index,
                    left,
                    right: left + bar_width,
                    mean: record.mean_duration,
                    std: record.std_duration,
                })
            })
            .collect();

        Ok(Self {
            algorithms,
            input_files,
            bars,
        })
    }

    /// X-axis range covering every cluster
    pub fn x_range(&self) -> Range<f64> {
        -0.5..(self.algorithms.len() as f64 - 0.5)
    }

    /// Y-axis range covering every bar and error bar, always including zero
    pub fn y_range(&self) -> Range<f64> {
        let (mut low, mut high) = (0.0f64, 0.0f64);
        for bar in &self.bars {
            let std = bar.std.unwrap_or(0.0);
            low = low.min(bar.mean - std);
            high = high.max(bar.mean + std);
        }

        let padding = (high - low) * 0.05;
        if padding <= 0.0 {
            return low..low + 1.0;
        }

        let low = if low < 0.0 { low - padding } else { low };
        low..high + padding
    }

    /// Label for an x-axis key point; blank unless it sits on a cluster centre
    pub fn category_label(&self, x: f64) -> String {
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }

        self.algorithms
            .get(rounded as usize)
            .cloned()
            .unwrap_or_default()
    }

    /// Height in pixels reserved under the plot for rotated category labels
    fn x_label_area_size(&self) -> u32 {
        let longest = self
            .algorithms
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0) as u32;
        (70 + longest * 11).min(320)
    }
}

/// Text style of the algorithm names under the x-axis
///
/// Rotated a quarter turn clockwise and anchored at the start of the text, so each
/// name hangs down from its tick instead of being centred across the axis.
pub fn category_label_style() -> TextStyle<'static> {
    TextStyle::from(
        ("sans-serif", 22)
            .into_font()
            .transform(FontTransform::Rotate90),
    )
    .pos(Pos::new(HPos::Left, VPos::Center))
}

/// Creates a grouped bar chart with error bars and saves it as a PNG file
///
/// # Arguments
/// * `records` - Aggregated statistics, one bar per record
/// * `style` - Chart dimensions, titles and error bar styling
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If the data is empty or an error occurred during chart generation
///
/// # Chart Properties
/// * One bar cluster per algorithm, one viridis colour per input file
/// * Bar height: mean duration; grey capped whisker: ±1 sample standard deviation
/// * Category labels rotated to fit long algorithm names
/// * Legend headed by [`ChartStyle::legend_title`]
pub fn create_grouped_bar_chart(
    records: &[AggregatedRecord],
    style: &ChartStyle,
    output_path: &Path,
) -> Result<()> {
    let layout = BarLayout::from_records(records)?;
    let palette = viridis_palette(layout.input_files.len());
    debug!(
        algorithms = layout.algorithms.len(),
        input_files = layout.input_files.len(),
        "Computed bar layout"
    );

    let root = BitMapBackend::new(output_path, (style.width, style.height));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(style.title.as_str(), ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(layout.x_label_area_size())
        .y_label_area_size(85)
        .build_cartesian_2d(layout.x_range(), layout.y_range())
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    // Key points fall on integers when exactly one label per cluster is requested
    let category_formatter = |x: &f64| layout.category_label(*x);
    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(layout.algorithms.len())
        .x_label_formatter(&category_formatter)
        .x_label_style(category_label_style())
        .y_label_style(("sans-serif", 22))
        .x_desc(style.x_label.as_str())
        .y_desc(style.y_label.as_str())
        .axis_desc_style(("sans-serif", 30))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Label-only entry so the legend opens with its heading
    chart_context
        .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(style.legend_title.as_str());

    for (hue_index, input_file) in layout.input_files.iter().enumerate() {
        let color = palette[hue_index];
        chart_context
            .draw_series(
                layout
                    .bars
                    .iter()
                    .filter(|bar| bar.hue_index == hue_index)
                    .map(|bar| {
                        Rectangle::new([(bar.left, 0.0), (bar.right, bar.mean)], color.filled())
                    }),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(input_file.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));
    }

    let error_style = ERROR_BAR_COLOR.stroke_width(style.error_bar_width);
    chart_context
        .draw_series(
            layout
                .bars
                .iter()
                .flat_map(|bar| bar.error_bar_segments(style.capsize))
                .map(|segment| PathElement::new(segment.to_vec(), error_style)),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 22))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    info!(path = %output_path.display(), bars = layout.bars.len(), "Saved bar chart");
    Ok(())
}
