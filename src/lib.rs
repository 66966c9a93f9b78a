//! # Chatstats
//!
//! A Rust library for turning a WhatsApp group chat export into statistics:
//! who texts the most, on which days and at which hours, and which words keep
//! coming up.
//!
//! ## Overview
//!
//! The analysis runs as a one-way pipeline over the exported text:
//!
//! 1. [`scanner`] splits the raw export into `(timestamp, sender, message)`
//!    records, skipping system notices such as subject changes
//! 2. [`core::normalizer`] strips punctuation, digits and emoji and drops
//!    attachment placeholders
//! 3. [`core::tokenizer`] splits messages into words and removes stopwords
//! 4. [`core::frequency`] counts words
//! 5. [`core::report`] groups messages per sender, date and hour
//! 6. [`core::output`] renders charts and CSV exports
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let analysis = Pipeline::new(AnalysisConfig::default()).run_file(Path::new("Data.txt"))?;
//!
//!     for (sender, n) in &analysis.report.per_sender {
//!         println!("{sender}: {n}");
//!     }
//!     for (word, n) in analysis.words.top(10) {
//!         println!("{word}: {n}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`scanner`] — [`Scanner`](scanner::Scanner), [`scan`](scanner::scan)
//! - [`parsing`] — the timestamp pattern and export-format constants
//! - [`core`] — everything after scanning
//!   - [`core::normalizer`], [`core::tokenizer`], [`core::frequency`],
//!     [`core::report`]
//!   - [`core::processor`] — [`Pipeline`](core::Pipeline), [`Analysis`](core::Analysis)
//!   - [`core::output`] — charts (`charts` feature), CSV (`csv-output` feature)
//! - [`config`] — [`AnalysisConfig`](config::AnalysisConfig),
//!   [`ChartConfig`](config::ChartConfig)
//! - [`message`] — [`MessageRecord`], [`NormalizedRecord`]
//! - [`error`] — [`ChatstatsError`], [`Result`]
//! - `cli` — CLI arguments (`cli` feature)
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parsing;
pub mod scanner;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::{MessageRecord, NormalizedRecord};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::{MessageRecord, NormalizedRecord};

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Configuration
    pub use crate::config::{AnalysisConfig, ChartConfig};

    // Scanning
    pub use crate::scanner::{ScanStats, Scanner, scan};

    // Analysis stages
    pub use crate::core::{
        Analysis, Pipeline, ProcessingStats, Report, WordFrequencyTable, apply_aliases, count,
        count_of_interest, normalize, remove_stopwords, tokenize,
    };

    // Output
    #[cfg(feature = "charts")]
    pub use crate::core::{ChartPaths, render_charts};
    #[cfg(feature = "csv-output")]
    pub use crate::core::{to_frequency_csv, to_records_csv, write_frequency_csv, write_records_csv};
}
