//! PNG chart rendering.
//!
//! Renders the four views of a [`Report`] with `plotters`' bitmap backend.
//! File names are fixed so repeated runs overwrite the previous charts.
//!
//! Captions and axis labels are drawn with the system `sans-serif` font,
//! looked up through fontconfig. A missing font is a [`ChatstatsError::Chart`].

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use tracing::info;

use crate::config::ChartConfig;
use crate::core::report::{HOURS_PER_DAY, Report};
use crate::error::{ChatstatsError, Result};

/// Bar chart of messages per sender.
pub const SENDER_CHART: &str = "Most Frequent Texter.png";
/// Line chart of messages per date.
pub const DATE_CHART: &str = "Messages sent by date.png";
/// Line chart of messages per hour of day.
pub const HOUR_CHART: &str = "Messages sent by hour of day.png";
/// Horizontal bar chart of the words of interest.
pub const WORDS_CHART: &str = "Most used words.png";

const FONT: &str = "sans-serif";

/// Where the four charts were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPaths {
    pub senders: PathBuf,
    pub dates: PathBuf,
    pub hours: PathBuf,
    pub words: PathBuf,
}

impl ChartPaths {
    /// The fixed chart file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            senders: dir.join(SENDER_CHART),
            dates: dir.join(DATE_CHART),
            hours: dir.join(HOUR_CHART),
            words: dir.join(WORDS_CHART),
        }
    }

    /// All four paths, in rendering order.
    pub fn all(&self) -> [&Path; 4] {
        [&self.senders, &self.dates, &self.hours, &self.words]
    }
}

/// Renders every chart of `report` into `out_dir`, creating it if needed.
///
/// # Errors
///
/// Returns [`ChatstatsError::Chart`] for a zero-sized [`ChartConfig`] or a
/// drawing backend failure, and [`ChatstatsError::Io`] if `out_dir` can't be
/// created.
pub fn render_charts(report: &Report, out_dir: &Path, config: &ChartConfig) -> Result<ChartPaths> {
    if config.width == 0 || config.height == 0 {
        return Err(ChatstatsError::chart(format!(
            "chart size must be non-zero, got {}x{}",
            config.width, config.height
        )));
    }
    fs::create_dir_all(out_dir)?;
    let paths = ChartPaths::in_dir(out_dir);

    render_sender_chart(&report.per_sender, &paths.senders, config)?;
    render_date_chart(&report.per_date, &paths.dates, config)?;
    render_hour_chart(&report.per_hour, &paths.hours, config)?;
    render_words_chart(&report.word_bars, &paths.words, config)?;

    info!(dir = %out_dir.display(), "charts written");
    Ok(paths)
}

fn caption_size(config: &ChartConfig) -> u32 {
    (config.height / 30).max(12)
}

fn label_size(config: &ChartConfig) -> u32 {
    (config.height / 50).max(10)
}

fn segment_label(value: &SegmentValue<i32>, names: &[&str]) -> String {
    match value {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => usize::try_from(*i)
            .ok()
            .and_then(|i| names.get(i))
            .map(|name| (*name).to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

/// Messages per sender as vertical bars.
pub fn render_sender_chart(
    per_sender: &[(String, usize)],
    path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let names: Vec<&str> = per_sender.iter().map(|(name, _)| name.as_str()).collect();
    let max = per_sender.iter().map(|(_, n)| *n as u64).max().unwrap_or(0);
    let bars = per_sender.len().max(1) as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Most Frequent Texter", (FONT, caption_size(config)))
        .margin(20)
        .x_label_area_size(label_size(config) * 4)
        .y_label_area_size(label_size(config) * 4)
        .build_cartesian_2d((0..bars).into_segmented(), 0u64..max + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len().max(1))
        .x_label_formatter(&|v: &SegmentValue<i32>| segment_label(v, &names))
        .y_desc("Message Count")
        .axis_desc_style((FONT, label_size(config)))
        .draw()?;

    chart.draw_series(per_sender.iter().enumerate().map(|(i, (_, n))| {
        let x = i as i32;
        Rectangle::new(
            [
                (SegmentValue::Exact(x), 0),
                (SegmentValue::Exact(x + 1), *n as u64),
            ],
            BLUE.mix(0.8).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Messages per calendar date as a line over the whole date span.
pub fn render_date_chart(
    per_date: &[(NaiveDate, usize)],
    path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let origin = per_date.first().map(|(date, _)| *date);
    let span = match (per_date.first(), per_date.last()) {
        (Some((first, _)), Some((last, _))) => (*last - *first).num_days(),
        _ => 0,
    };
    let max = per_date.iter().map(|(_, n)| *n as u64).max().unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Messages sent by date", (FONT, caption_size(config)))
        .margin(20)
        .x_label_area_size(label_size(config) * 4)
        .y_label_area_size(label_size(config) * 4)
        .build_cartesian_2d(0i64..span.max(1), 0u64..max + 1)?;

    let date_label = |offset: &i64| {
        origin
            .and_then(|start| start.checked_add_signed(Duration::days(*offset)))
            .map(|date| date.format("%d/%m/%y").to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .x_label_formatter(&date_label)
        .x_desc("Date")
        .y_desc("No. of messages sent")
        .axis_desc_style((FONT, label_size(config)))
        .draw()?;

    if let Some(origin) = origin {
        chart.draw_series(LineSeries::new(
            per_date
                .iter()
                .map(|(date, n)| ((*date - origin).num_days(), *n as u64)),
            BLUE.stroke_width(2),
        ))?;
    }

    root.present()?;
    Ok(())
}

/// Messages per hour of day as a line over `0..=23`.
pub fn render_hour_chart(
    per_hour: &[usize; HOURS_PER_DAY],
    path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let max = per_hour.iter().map(|n| *n as u64).max().unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Messages sent by hour of day", (FONT, caption_size(config)))
        .margin(20)
        .x_label_area_size(label_size(config) * 4)
        .y_label_area_size(label_size(config) * 4)
        .build_cartesian_2d(0u32..(HOURS_PER_DAY as u32 - 1), 0u64..max + 1)?;

    chart
        .configure_mesh()
        .x_labels(HOURS_PER_DAY)
        .x_desc("Hour")
        .y_desc("No. of messages sent")
        .axis_desc_style((FONT, label_size(config)))
        .draw()?;

    chart.draw_series(LineSeries::new(
        per_hour
            .iter()
            .enumerate()
            .map(|(hour, n)| (hour as u32, *n as u64)),
        BLUE.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

/// Word counts as horizontal bars, most used at the top.
pub fn render_words_chart(
    word_bars: &[(String, u64)],
    path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    // Bottom-up, so the most used word ends up on top.
    let bars: Vec<(&str, u64)> = word_bars
        .iter()
        .rev()
        .map(|(word, n)| (word.as_str(), *n))
        .collect();
    let names: Vec<&str> = bars.iter().map(|(word, _)| *word).collect();
    let max = bars.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let rows = bars.len().max(1) as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Most used words", (FONT, caption_size(config)))
        .margin(20)
        .x_label_area_size(label_size(config) * 4)
        .y_label_area_size(label_size(config) * 8)
        .build_cartesian_2d(0u64..max + 1, (0..rows).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(names.len().max(1))
        .y_label_formatter(&|v: &SegmentValue<i32>| segment_label(v, &names))
        .x_desc("Count")
        .y_desc("Words")
        .axis_desc_style((FONT, label_size(config)))
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, (_, n))| {
        let y = i as i32;
        Rectangle::new(
            [(0, SegmentValue::Exact(y)), (*n, SegmentValue::Exact(y + 1))],
            BLUE.mix(0.8).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
