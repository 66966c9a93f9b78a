//! Command-line interface definition using clap.
//!
//! This module defines [`Args`] plus the small conversions `main` needs to
//! turn flags into library configuration:
//!
//! ```rust
//! use chatstats::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatstats", "chat.txt", "--top", "5", "-vv"]);
//! assert_eq!(args.top, 5);
//! assert_eq!(args.log_level(), tracing::Level::DEBUG);
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::config::{AnalysisConfig, ChartConfig, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::error::Result;

/// Default input file name.
pub const DEFAULT_INPUT: &str = "Data.txt";

/// File name of the optional records export.
pub const RECORDS_CSV: &str = "messages.csv";
/// File name of the optional word count export.
pub const WORDS_CSV: &str = "word_counts.csv";
/// File name of the optional JSON report.
pub const REPORT_JSON: &str = "report.json";

/// Analyze a WhatsApp group chat export: who talks most, when, and which
/// words come up.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats
    chatstats chat.txt -o charts
    chatstats chat.txt --config names.json --top 20
    chatstats chat.txt --no-charts --csv --json")]
pub struct Args {
    /// Path to the exported chat
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory for charts and exports
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON file with stopwords, aliases and words of interest
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of most frequent words to print
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Also write the records and word counts as CSV
    #[arg(long)]
    pub csv: bool,

    /// Also write the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip chart rendering
    #[arg(long)]
    pub no_charts: bool,

    /// Chart width in pixels
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CHART_WIDTH)]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CHART_HEIGHT)]
    pub height: u32,

    /// Log pipeline stages to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level selected by the number of `-v` flags.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// The analysis configuration: `--config` if given, defaults otherwise.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path),
            None => Ok(AnalysisConfig::default()),
        }
    }

    /// Chart size from `--width`/`--height`.
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig::new().with_size(self.width, self.height)
    }
}
