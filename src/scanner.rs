//! Chat-log scanner.
//!
//! Turns the raw text of a WhatsApp export into an ordered sequence of
//! [`MessageRecord`]s. The export has no record separator other than the
//! timestamp that starts every line, so the scanner walks the input with a
//! byte cursor and uses each timestamp match as the boundary of the previous
//! message:
//!
//! ```text
//! 01/01/20, 9:59 am - Alice changed the subject from "x" to "y"   <- skipped
//! 01/01/20, 10:00 am - Alice: Hello there!                        <- record
//! 01/01/20, 10:01 am - Bob: first line
//! second line of Bob's message                                    <- same record
//! ```
//!
//! # Known limitation
//!
//! A message that itself contains text shaped like a timestamp
//! (`"see you 02/01/20, 5:00 pm"`) is cut at that text: the scanner cannot
//! tell a typed date from a real record boundary. The tail of such a message
//! is then read as a record of its own, or dropped as a system row if no
//! sender delimiter follows it.
//!
//! # Example
//!
//! ```rust
//! use chatstats::scanner::scan;
//!
//! let raw = "01/01/20, 10:00 am - Alice: Hello there!\n\
//!            01/01/20, 10:01 am - Bob: Hi";
//! let records = scan(raw)?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sender, "Alice");
//! assert_eq!(records[1].message, "Hi");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::MessageRecord;
use crate::error::{ChatstatsError, Result};
use crate::parsing::whatsapp::{
    SENDER_DELIMITER, SENDER_LOOKAHEAD, SEPARATOR_LEN, advance_chars, parse_whatsapp_timestamp,
    timestamp_regex,
};

/// Counters collected while scanning.
///
/// `records_emitted == timestamps_matched - system_messages_skipped` holds
/// once the scanner is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Timestamp anchors consumed as record starts.
    pub timestamps_matched: usize,
    /// Rows without a sender that were discarded.
    pub system_messages_skipped: usize,
    /// Records handed out.
    pub records_emitted: usize,
}

/// Single-pass iterator over the records of an export.
///
/// The input is borrowed immutably; the scanner only keeps a byte cursor into
/// it that never moves backwards. After the last record the cursor sits
/// exactly at the end of the input.
///
/// Yields `Err` at most once, after which the iterator is exhausted.
#[derive(Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    cursor: usize,
    finished: bool,
    last_timestamp: Option<DateTime<Utc>>,
    stats: ScanStats,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            finished: false,
            last_timestamp: None,
            stats: ScanStats::default(),
        }
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns `true` once every byte of the input has been accounted for.
    pub fn is_exhausted(&self) -> bool {
        self.finished && self.cursor == self.input.len()
    }

    /// Counters collected so far.
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Start offset of the next timestamp at or after `from`.
    fn next_timestamp_start(&self, from: usize) -> Option<usize> {
        timestamp_regex().find_at(self.input, from).map(|m| m.start())
    }

    fn finish(&mut self) {
        self.finished = true;
        self.cursor = self.input.len();
    }

    fn check_order(&mut self, timestamp: DateTime<Utc>, offset: usize) {
        if let Some(previous) = self.last_timestamp {
            if timestamp < previous {
                warn!(
                    offset,
                    %timestamp,
                    %previous,
                    "timestamp goes backwards, export may be out of order"
                );
            }
        }
        self.last_timestamp = Some(timestamp);
    }

    /// Reads one record starting at the timestamp found at or after the cursor.
    ///
    /// Returns `Ok(None)` when the row was a system message; the cursor has
    /// then moved to the next timestamp (or to the end of the input).
    fn scan_row(&mut self) -> Result<Option<MessageRecord>> {
        let input = self.input;
        let Some(caps) = timestamp_regex().captures_at(input, self.cursor) else {
            let offset = self.cursor;
            self.finished = true;
            return Err(ChatstatsError::malformed(
                offset,
                "expected a 'DD/MM/YY, H:MM am' timestamp but found none",
            ));
        };
        let anchor = caps.get(0).map_or(self.cursor..self.cursor, |m| m.range());
        self.stats.timestamps_matched += 1;

        let timestamp = match parse_whatsapp_timestamp(&caps, anchor.start) {
            Ok(ts) => ts,
            Err(err) => {
                self.finished = true;
                return Err(err);
            }
        };

        let sender_start = advance_chars(input, anchor.end, SEPARATOR_LEN);
        let next = self.next_timestamp_start(sender_start);
        let row_end = next.unwrap_or(input.len());

        // The window never reaches into the following row, whose own
        // timestamp contains a ':'.
        let window_end = advance_chars(input, sender_start, SENDER_LOOKAHEAD).min(row_end);
        let window = &input[sender_start..window_end];

        let sender = window
            .find(SENDER_DELIMITER)
            .map(|i| (i, input[sender_start..sender_start + i].trim()))
            .filter(|(_, name)| !name.is_empty());

        let Some((delimiter, sender)) = sender else {
            self.stats.system_messages_skipped += 1;
            debug!(offset = anchor.start, "skipping system message");
            match next {
                Some(next) => self.cursor = next,
                None => self.finish(),
            }
            return Ok(None);
        };

        // Skip the delimiter and the single space after it.
        let body_start = advance_chars(input, sender_start + delimiter, 2).min(row_end);
        let body = &input[body_start..row_end];
        match next {
            Some(next) => self.cursor = next,
            None => self.finish(),
        }

        self.check_order(timestamp, anchor.start);
        self.stats.records_emitted += 1;
        Ok(Some(MessageRecord::new(timestamp, sender, body.trim())))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<MessageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.scan_row() {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}

/// Scans a whole export into records.
///
/// # Errors
///
/// - [`ChatstatsError::MalformedLog`] if the input contains no timestamp
/// - [`ChatstatsError::InvalidTimestamp`] if a matched timestamp is not a
///   real date/time
pub fn scan(raw: &str) -> Result<Vec<MessageRecord>> {
    scan_with_stats(raw).map(|(records, _)| records)
}

/// Like [`scan`], but also returns the scan counters.
pub fn scan_with_stats(raw: &str) -> Result<(Vec<MessageRecord>, ScanStats)> {
    let mut scanner = Scanner::new(raw);
    let records = scanner.by_ref().collect::<Result<Vec<_>>>()?;
    debug_assert!(scanner.is_exhausted());
    Ok((records, scanner.stats()))
}
