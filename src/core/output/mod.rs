//! Report artifacts.
//!
//! - [`render_charts`] - the four PNG charts - requires `charts` feature
//! - [`write_records_csv`] / [`to_records_csv`] - scanned records as CSV - requires `csv-output` feature
//! - [`write_frequency_csv`] / [`to_frequency_csv`] - ranked word counts as CSV - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "charts", feature = "csv-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use std::path::Path;
//!
//! use chatstats::config::{AnalysisConfig, ChartConfig};
//! use chatstats::core::output::{render_charts, write_frequency_csv};
//! use chatstats::core::processor::Pipeline;
//!
//! let analysis = Pipeline::new(AnalysisConfig::default()).run_file(Path::new("Data.txt"))?;
//!
//! let charts = render_charts(&analysis.report, Path::new("charts"), &ChartConfig::default())?;
//! write_frequency_csv(&analysis.words, Path::new("words.csv"))?;
//! println!("{}", charts.senders.display());
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "charts", feature = "csv-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "charts")]
pub mod chart;
#[cfg(feature = "csv-output")]
mod csv_writer;

#[cfg(feature = "charts")]
pub use chart::{ChartPaths, render_charts};
#[cfg(feature = "csv-output")]
pub use csv_writer::{to_frequency_csv, to_records_csv, write_frequency_csv, write_records_csv};
