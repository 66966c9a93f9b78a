//! WhatsApp export format primitives.
//!
//! The Android export this crate targets writes one record per timestamp:
//!
//! ```text
//! 01/01/20, 10:00 am - Alice: Hello there!
//! ```
//!
//! The timestamp is the only reliable record delimiter, so everything the
//! scanner does is anchored on [`timestamp_regex`].

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::{Captures, Regex};

use crate::error::{ChatstatsError, Result};

/// Timestamp anchor: `DD/MM/YY, H:MM am`.
///
/// `\s` also accepts the narrow no-break space newer exports put before
/// `am`/`pm`. Digits are ASCII only.
pub const TIMESTAMP_PATTERN: &str =
    r"([0-9]{2})/([0-9]{2})/([0-9]{2}),\s([0-9]{1,2}):([0-9]{2})\s([aApP][mM])";

/// chrono format for the canonical form built by [`parse_whatsapp_timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y, %I:%M %p";

/// Characters between the end of a timestamp and the sender (` - `).
pub const SEPARATOR_LEN: usize = 3;

/// Characters after the separator searched for the sender delimiter.
pub const SENDER_LOOKAHEAD: usize = 35;

/// Separates the sender from the message body.
///
/// Export notifications (subject changes, people joining) have no sender, so
/// no delimiter shows up within [`SENDER_LOOKAHEAD`] characters of the
/// timestamp.
pub const SENDER_DELIMITER: char = ':';

/// Marker the export writes in place of attachments.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

static TIMESTAMP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

/// Returns the compiled timestamp anchor.
pub fn timestamp_regex() -> &'static Regex {
    &TIMESTAMP_REGEX
}

/// Parses the captures of a [`TIMESTAMP_PATTERN`] match.
///
/// The pieces are reassembled into a canonical string (single spaces,
/// uppercase meridiem) before handing them to chrono, so odd whitespace in
/// the export never reaches the parser. `offset` is only used for the error.
pub fn parse_whatsapp_timestamp(caps: &Captures<'_>, offset: usize) -> Result<DateTime<Utc>> {
    let part = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let canonical = format!(
        "{}/{}/{}, {}:{} {}",
        part(1),
        part(2),
        part(3),
        part(4),
        part(5),
        part(6).to_ascii_uppercase()
    );

    NaiveDateTime::parse_from_str(&canonical, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| ChatstatsError::invalid_timestamp(offset, part(0)))
}

/// Byte index reached by moving `n` characters forward from `from`.
///
/// Clamped to the end of `text`; never lands inside a UTF-8 sequence.
pub fn advance_chars(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| from + i)
}
