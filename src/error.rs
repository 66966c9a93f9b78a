//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library, from scanning a malformed export down to failing to
//! write a chart.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear messages pointing at the byte offset
//!   where an export stopped making sense
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input export doesn't exist
    /// - Permission denied
    /// - The output directory is not writable
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The scanner could not find a timestamp where a record had to start.
    ///
    /// Raised for empty input and for text that contains no timestamp
    /// at all. No partial recovery is attempted.
    #[error("Malformed chat log at byte {offset}: {reason}")]
    MalformedLog {
        /// Byte offset into the input where scanning stopped
        offset: usize,
        /// What the scanner expected to find
        reason: String,
    },

    /// A timestamp matched the pattern but is not a real date/time.
    ///
    /// For example `31/02/20, 10:00 am`.
    #[error("Invalid timestamp '{input}' at byte {offset}")]
    InvalidTimestamp {
        /// Byte offset of the match in the input
        offset: usize,
        /// The matched text
        input: String,
    },

    /// The analysis configuration file could not be read as JSON.
    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        /// Path of the config file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error.
    ///
    /// Occurs when writing the report as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Chart rendering failed inside the drawing backend.
    #[error("Chart error: {0}")]
    Chart(String),

    /// UTF-8 encoding error.
    ///
    /// Occurs when converting written output back into a string.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

#[cfg(feature = "charts")]
impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for ChatstatsError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ChatstatsError::Chart(err.to_string())
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a malformed log error.
    pub fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        ChatstatsError::MalformedLog {
            offset,
            reason: reason.into(),
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(offset: usize, input: impl Into<String>) -> Self {
        ChatstatsError::InvalidTimestamp {
            offset,
            input: input.into(),
        }
    }

    /// Creates a config error for the given file.
    pub fn config(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ChatstatsError::Config {
            path: path.into(),
            source,
        }
    }

    /// Creates a chart rendering error.
    pub fn chart(message: impl Into<String>) -> Self {
        ChatstatsError::Chart(message.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if the input export could not be scanned.
    ///
    /// Covers both a missing timestamp anchor and an impossible timestamp.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ChatstatsError::MalformedLog { .. } | ChatstatsError::InvalidTimestamp { .. }
        )
    }

    /// Returns the byte offset in the input where scanning failed, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ChatstatsError::MalformedLog { offset, .. }
            | ChatstatsError::InvalidTimestamp { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_contains_offset() {
        let err = ChatstatsError::malformed(42, "no timestamp found");
        let display = err.to_string();
        assert!(display.contains("42"));
        assert!(display.contains("no timestamp found"));
        assert!(err.is_malformed());
        assert_eq!(err.offset(), Some(42));
    }

    #[test]
    fn test_invalid_timestamp_display() {
        let err = ChatstatsError::invalid_timestamp(7, "31/02/20, 10:00 am");
        assert!(err.to_string().contains("31/02/20, 10:00 am"));
        assert!(err.is_malformed());
        assert_eq!(err.offset(), Some(7));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ChatstatsError = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_malformed());
        assert_eq!(err.offset(), None);
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_config_error_mentions_path() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ChatstatsError::config("settings.json", json_err);
        assert!(err.to_string().contains("settings.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err: ChatstatsError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_chart_error() {
        let err = ChatstatsError::chart("backend exploded");
        assert!(err.to_string().contains("Chart error"));
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatstatsError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatstatsError::malformed(0, "empty input");
        assert!(format!("{:?}", err).contains("MalformedLog"));
    }
}
