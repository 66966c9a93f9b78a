//! Analysis stages after scanning.
//!
//! This module contains:
//! - [`normalizer`] - text cleaning and media/empty row removal
//! - [`tokenizer`] - word splitting, apostrophe handling, stopwords
//! - [`frequency`] - word counting and ranking
//! - [`report`] - sender aliases and the per-sender/date/hour views
//! - [`processor`] - the [`Pipeline`] running every stage in order
//! - [`output`] - charts and CSV export
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{Pipeline, clean_text, tokenize};
//! use chatstats::config::AnalysisConfig;
//!
//! assert_eq!(clean_text("Hi, there!"), "hi there");
//!
//! let analysis = Pipeline::new(AnalysisConfig::empty())
//!     .run_str("01/01/20, 10:00 am - Alice: Hi, there!")?;
//! assert_eq!(tokenize(&analysis.records), vec!["hi", "there"]);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod frequency;
pub mod normalizer;
pub mod output;
pub mod processor;
pub mod report;
pub mod tokenizer;

pub use frequency::{WordFrequencyTable, count, count_of_interest};
pub use normalizer::{clean_text, is_media_placeholder, normalize};
pub use processor::{Analysis, Pipeline, ProcessingStats};
pub use report::{Report, apply_aliases};
pub use tokenizer::{disambiguate_apostrophes, remove_stopwords, tokenize};

#[cfg(feature = "charts")]
pub use output::{ChartPaths, render_charts};
#[cfg(feature = "csv-output")]
pub use output::{to_frequency_csv, to_records_csv, write_frequency_csv, write_records_csv};
