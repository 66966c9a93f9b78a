//! End-to-end analysis pipeline.
//!
//! Stages run in order, each consuming the previous one's output:
//!
//! ```text
//! raw text → scan → normalize → alias → tokenize → stopwords → count → report
//! ```

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::AnalysisConfig;
use crate::core::frequency::{WordFrequencyTable, count, count_of_interest};
use crate::core::normalizer::normalize;
use crate::core::report::{Report, apply_aliases};
use crate::core::tokenizer::{remove_stopwords, tokenize};
use crate::error::Result;
use crate::message::{MessageRecord, NormalizedRecord};
use crate::scanner::scan_with_stats;

/// Counters collected while running the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Records emitted by the scanner.
    pub scanned: usize,
    /// System notifications skipped by the scanner.
    pub system_skipped: usize,
    /// Records that survived text cleaning.
    pub normalized: usize,
    /// Records dropped by cleaning (media, no letters).
    pub dropped: usize,
    /// Words counted after stopword removal.
    pub words: usize,
}

impl ProcessingStats {
    /// Share of scanned records dropped by cleaning, in percent.
    pub fn drop_rate(&self) -> f64 {
        if self.scanned == 0 {
            return 0.0;
        }
        self.dropped as f64 / self.scanned as f64 * 100.0
    }
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Records as scanned, before cleaning.
    pub scanned: Vec<MessageRecord>,
    /// Cleaned records, senders replaced by their aliases.
    pub records: Vec<NormalizedRecord>,
    /// Every counted word.
    pub words: WordFrequencyTable,
    /// Counts of the configured words of interest only.
    pub interest: WordFrequencyTable,
    /// Per-sender, per-date and per-hour views.
    pub report: Report,
    /// Stage counters.
    pub stats: ProcessingStats,
}

/// Runs the analysis with a fixed [`AnalysisConfig`].
///
/// # Example
///
/// ```
/// use chatstats::config::AnalysisConfig;
/// use chatstats::core::processor::Pipeline;
///
/// let raw = "01/01/20, 10:00 am - Alice: Hello there\n\
///            01/01/20, 10:01 am - Bob: yaar ugh\n";
/// let analysis = Pipeline::new(AnalysisConfig::default()).run_str(raw)?;
///
/// assert_eq!(analysis.stats.scanned, 2);
/// assert_eq!(analysis.words.get("hello"), 1);
/// assert_eq!(analysis.interest.get("yaar"), 1);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: AnalysisConfig,
}

impl Pipeline {
    /// Creates a pipeline running with `config`.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Reads `path` as UTF-8 and analyzes it.
    pub fn run_file(&self, path: &Path) -> Result<Analysis> {
        let raw = fs::read_to_string(path)?;
        info!(path = %path.display(), bytes = raw.len(), "loaded chat export");
        self.run_str(&raw)
    }

    /// Analyzes an in-memory export.
    pub fn run_str(&self, raw: &str) -> Result<Analysis> {
        let (scanned, scan_stats) = scan_with_stats(raw)?;
        info!(
            records = scan_stats.records_emitted,
            skipped = scan_stats.system_messages_skipped,
            "scanned export"
        );

        let mut records = normalize(scanned.clone(), &self.config);
        let dropped = scanned.len() - records.len();
        info!(kept = records.len(), dropped, "normalized messages");

        apply_aliases(&mut records, &self.config.aliases);

        let words = remove_stopwords(tokenize(&records), &self.config.stopwords);
        let interest_set = self.config.interest_set();
        let table = count(&words);
        let interest = count_of_interest(&words, &interest_set);
        info!(
            words = words.len(),
            distinct = table.len(),
            "counted words"
        );

        let report = Report::build(&records, &interest);

        let stats = ProcessingStats {
            scanned: scanned.len(),
            system_skipped: scan_stats.system_messages_skipped,
            normalized: records.len(),
            dropped,
            words: words.len(),
        };

        Ok(Analysis {
            scanned,
            records,
            words: table,
            interest,
            report,
            stats,
        })
    }
}
