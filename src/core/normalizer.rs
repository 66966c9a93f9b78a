//! Message text cleaning.
//!
//! [`normalize`] turns scanned records into [`NormalizedRecord`]s:
//!
//! 1. records whose body contains the media placeholder are dropped
//! 2. ASCII punctuation except `'` is removed and the text lowercased
//! 3. anything outside `a-z`, `'` and whitespace is removed (digits, emoji,
//!    non-Latin letters, leftover symbols)
//! 4. records left without a single letter are dropped
//!
//! Order is preserved. Nothing here can fail; bad text just disappears.
//!
//! # Example
//!
//! ```
//! use chatstats::config::AnalysisConfig;
//! use chatstats::core::normalizer::normalize;
//! use chatstats::MessageRecord;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap();
//! let records = vec![
//!     MessageRecord::new(ts, "Alice", "Hello, World! 👋"),
//!     MessageRecord::new(ts, "Bob", "<Media omitted>"),
//!     MessageRecord::new(ts, "Bob", "12:30?!"),
//! ];
//!
//! let cleaned = normalize(records, &AnalysisConfig::default());
//! assert_eq!(cleaned.len(), 1);
//! assert_eq!(cleaned[0].message(), "hello world ");
//! ```

use crate::config::AnalysisConfig;
use crate::message::{MessageRecord, NormalizedRecord};

/// Cleans a single message body.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\'' || !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || *c == '\'' || c.is_whitespace())
        .collect()
}

/// Returns `true` if `text` has at least one `a-z` letter.
pub fn has_letter(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_lowercase())
}

/// Returns `true` if `message` contains the attachment `marker`.
///
/// Case-insensitive. An empty marker never matches.
pub fn is_media_placeholder(message: &str, marker: &str) -> bool {
    !marker.is_empty() && message.to_lowercase().contains(&marker.to_lowercase())
}

/// Cleans every record and drops the ones with nothing left to count.
pub fn normalize(records: Vec<MessageRecord>, config: &AnalysisConfig) -> Vec<NormalizedRecord> {
    records
        .into_iter()
        .filter(|record| !is_media_placeholder(&record.message, &config.media_placeholder))
        .filter_map(|record| {
            let cleaned = clean_text(&record.message);
            has_letter(&cleaned)
                .then(|| NormalizedRecord::new_unchecked(record.timestamp, record.sender, cleaned))
        })
        .collect()
}
