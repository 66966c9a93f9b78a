//! Record types produced by the scanner and the normalizer.
//!
//! This module provides the two shapes a chat line takes on its way through
//! the pipeline:
//!
//! - [`MessageRecord`] - what the scanner extracts from the raw export
//! - [`NormalizedRecord`] - the same record after text cleaning, with the
//!   message restricted to lowercase ASCII letters, apostrophes and whitespace
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use chatstats::MessageRecord;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap();
//! let record = MessageRecord::new(ts, "Alice", "Hello there!");
//! assert_eq!(record.sender(), "Alice");
//! assert_eq!(record.message(), "Hello there!");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatstats::MessageRecord;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap();
//! let record = MessageRecord::new(ts, "Alice", "Hello!");
//! let json = serde_json::to_string(&record)?;
//! let parsed: MessageRecord = serde_json::from_str(&json)?;
//!
//! assert_eq!(record, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// One `(timestamp, sender, message)` triple extracted from a chat export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | Minute-precision send time, export wall clock |
/// | `sender` | `String` | Sender name exactly as written in the export |
/// | `message` | `String` | Trimmed body, may span several lines |
///
/// Exports carry no timezone, so the wall-clock time is stored as UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,

    /// Display name or phone number of the author.
    pub sender: String,

    /// Text body of the message.
    ///
    /// Multi-line messages keep their embedded newlines. Attachments show up
    /// as the export's media placeholder text.
    pub message: String,
}

impl MessageRecord {
    /// Creates a new record.
    pub fn new(
        timestamp: DateTime<Utc>,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            message: message.into(),
        }
    }

    /// Returns the send time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}

/// A [`MessageRecord`] whose message has been cleaned by
/// [`normalize`](crate::core::normalizer::normalize).
///
/// The message only contains `a-z`, `'` and whitespace, and always contains
/// at least one letter. Instances can only be created by the normalizer;
/// convert back with [`From`] to re-run the pipeline on cleaned data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    timestamp: DateTime<Utc>,
    pub(crate) sender: String,
    message: String,
}

impl NormalizedRecord {
    /// Caller guarantees `message` already satisfies the cleaned alphabet.
    pub(crate) fn new_unchecked(
        timestamp: DateTime<Utc>,
        sender: String,
        message: String,
    ) -> Self {
        Self {
            timestamp,
            sender,
            message,
        }
    }

    /// Returns the send time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the sender name (or its alias once renamed).
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the cleaned message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Calendar date the message was sent on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Hour of day (`0..=23`) the message was sent in.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Replaces the sender; the message text is untouched.
    pub(crate) fn set_sender(&mut self, sender: String) {
        self.sender = sender;
    }
}

impl From<NormalizedRecord> for MessageRecord {
    fn from(record: NormalizedRecord) -> Self {
        MessageRecord {
            timestamp: record.timestamp,
            sender: record.sender,
            message: record.message,
        }
    }
}
