//! Configuration types for the analysis pipeline and chart output.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies:
//!
//! - [`AnalysisConfig`] - stopwords, sender aliases, words of interest and the
//!   media placeholder marker
//! - [`ChartConfig`] - chart resolution
//!
//! Every list ships with compiled-in defaults. An [`AnalysisConfig`] can also
//! be read from JSON, where missing fields keep their defaults:
//!
//! ```json
//! {
//!   "aliases": { "Akalank": "Mammoth" },
//!   "words_of_interest": ["yaar", "buddy"]
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_alias("Vibhu Jain", "Panda")
//!     .with_stopword("lol")
//!     .with_words_of_interest(["class", "exam"]);
//!
//! assert!(config.is_stopword("lol"));
//! assert_eq!(config.alias_for("Vibhu Jain"), Some("Panda"));
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};
use crate::parsing::MEDIA_PLACEHOLDER;

/// Articles, pronouns, conjunctions, fillers and the words of the media
/// placeholder, matched exactly against lowercase tokens.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "to", "of", "in", "for", "on", "with", "at", "by", "from", "up", "about", "into", "over",
    "after", "the", "and", "a", "that", "i", "it", "not", "he", "as", "you", "this", "but", "his",
    "they", "her", "she", "or", "an", "will", "my", "one", "all", "would", "their", "is",
    "have", "no", "so", "me", "it's", "don't", "was", "yes", "are", "i'm", "we", "your", "media",
    "omitted", "be", "now", "know", "why", "yeah", "am", "because", "did", "can", "na",
];

/// Terms charted in the words-of-interest bar chart.
pub const DEFAULT_WORDS_OF_INTEREST: &[&str] = &[
    "hahahahhaha",
    "yaar",
    "buddy",
    "class",
    "ugh",
    "hain",
    "face",
    "haina",
    "woohoo",
];

/// Raw sender name to display alias.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("Akalank", "Mammoth"),
    ("Buddy!", "Gorilla"),
    ("Ketaki Sardeshpande", "Bear"),
    ("Vibhu Jain", "Panda"),
];

/// Configuration for cleaning, counting and reporting.
///
/// # Example
///
/// ```rust
/// use chatstats::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new().with_media_placeholder("<Medien ausgeschlossen>");
/// assert_eq!(config.media_placeholder, "<Medien ausgeschlossen>");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Words removed before counting (exact, case-sensitive match).
    pub stopwords: HashSet<String>,

    /// Exact-match sender renames applied before reporting.
    pub aliases: HashMap<String, String>,

    /// Curated terms counted for the words chart, in chart order.
    pub words_of_interest: Vec<String>,

    /// Text the export substitutes for attachments (default: `<Media omitted>`).
    pub media_placeholder: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
            aliases: DEFAULT_ALIASES
                .iter()
                .map(|(raw, alias)| ((*raw).to_string(), (*alias).to_string()))
                .collect(),
            words_of_interest: DEFAULT_WORDS_OF_INTEREST
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with no stopwords, aliases or words of
    /// interest. The media placeholder keeps its default.
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
            aliases: HashMap::new(),
            words_of_interest: Vec::new(),
            media_placeholder: MEDIA_PLACEHOLDER.to_string(),
        }
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::Io`] if the file can't be read and
    /// [`ChatstatsError::Config`] if it is not valid JSON for this struct.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| ChatstatsError::config(path, e))
    }

    /// Adds a stopword.
    #[must_use]
    pub fn with_stopword(mut self, word: impl Into<String>) -> Self {
        self.stopwords.insert(word.into());
        self
    }

    /// Replaces the stopword set.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a sender alias.
    #[must_use]
    pub fn with_alias(mut self, raw: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(raw.into(), alias.into());
        self
    }

    /// Replaces the words of interest.
    #[must_use]
    pub fn with_words_of_interest<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words_of_interest = words.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the media placeholder marker.
    #[must_use]
    pub fn with_media_placeholder(mut self, marker: impl Into<String>) -> Self {
        self.media_placeholder = marker.into();
        self
    }

    /// Returns `true` if `word` is filtered before counting.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Returns the display alias configured for `sender`.
    pub fn alias_for(&self, sender: &str) -> Option<&str> {
        self.aliases.get(sender).map(String::as_str)
    }

    /// Words of interest as a lookup set.
    pub fn interest_set(&self) -> HashSet<&str> {
        self.words_of_interest.iter().map(String::as_str).collect()
    }
}

/// Default chart width in pixels.
pub const DEFAULT_CHART_WIDTH: u32 = 1600;
/// Default chart height in pixels.
pub const DEFAULT_CHART_HEIGHT: u32 = 1200;

/// Output settings for the rendered charts.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ChartConfig;
///
/// let config = ChartConfig::new().with_size(800, 600);
/// assert_eq!((config.width, config.height), (800, 600));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Image width in pixels (default: 1600)
    pub width: u32,

    /// Image height in pixels (default: 1200)
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the image size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
