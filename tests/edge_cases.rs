//! Edge case tests for scanning and cleaning real-world exports.

use chatstats::core::{clean_text, disambiguate_apostrophes, is_media_placeholder};
use chatstats::prelude::*;
use chatstats::scanner::scan_with_stats;

// ============================================================================
// Scanner: export format quirks
// ============================================================================

mod scanner_format {
    use super::*;

    #[test]
    fn test_crlf_line_endings() {
        let raw = "01/01/20, 10:00 am - Alice: hi\r\n01/01/20, 10:01 am - Bob: hey\r\n";
        let records = scan(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "hi");
        assert_eq!(records[1].message, "hey");
    }

    #[test]
    fn test_narrow_no_break_space_before_meridiem() {
        let raw = "01/01/20, 10:00\u{202f}pm - Alice: late night";
        let records = scan(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "late night");
    }

    #[test]
    fn test_ios_bracketed_format_is_malformed() {
        let raw = "[01/01/2020, 10:00:00] Alice: hi";
        let err = scan(raw).unwrap_err();
        assert!(matches!(err, ChatstatsError::MalformedLog { .. }));
    }

    #[test]
    fn test_24_hour_format_is_malformed() {
        let err = scan("01/01/20, 22:00 - Alice: hi").unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.offset(), Some(0));
    }

    #[test]
    fn test_month_out_of_range() {
        let err = scan("01/13/20, 10:00 am - Alice: hi").unwrap_err();
        assert!(matches!(err, ChatstatsError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_hour_out_of_range() {
        let err = scan("01/01/20, 13:00 pm - Alice: hi").unwrap_err();
        assert!(matches!(err, ChatstatsError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_phone_number_sender() {
        let records = scan("01/01/20, 10:00 am - +91 98765 43210: hello").unwrap();
        assert_eq!(records[0].sender, "+91 98765 43210");
    }

    #[test]
    fn test_very_long_sender_reads_as_system_row() {
        // The sender delimiter has to appear within the lookahead window
        let raw = "01/01/20, 10:00 am - Someone With An Extremely Long Display Name: hi\n\
                   01/01/20, 10:01 am - Bob: short";
        let (records, stats) = scan_with_stats(raw).unwrap();
        assert_eq!(stats.system_messages_skipped, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sender, "Bob");
    }

    #[test]
    fn test_short_system_row_before_next_timestamp() {
        // The next row's "9:01" must not be taken for a sender delimiter
        let raw = "01/01/20, 9:00 am - Bob left\n01/01/20, 9:01 am - Alice: bye Bob";
        let (records, stats) = scan_with_stats(raw).unwrap();
        assert_eq!(stats.system_messages_skipped, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sender, "Alice");
        assert_eq!(records[0].message, "bye Bob");
    }

    #[test]
    fn test_whitespace_only_sender_is_system_row() {
        let raw = "01/01/20, 9:00 am -    : ghost\n01/01/20, 9:01 am - Alice: hi";
        let (records, stats) = scan_with_stats(raw).unwrap();
        assert_eq!(stats.system_messages_skipped, 1);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_out_of_order_timestamps_are_kept() {
        let raw = "02/01/20, 9:00 am - Alice: later\n01/01/20, 9:00 am - Bob: earlier";
        let records = scan(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].timestamp > records[1].timestamp);
    }

    #[test]
    fn test_trailing_newlines_trimmed() {
        let records = scan("01/01/20, 9:00 am - Alice: hi\n\n\n").unwrap();
        assert_eq!(records[0].message, "hi");
    }

    #[test]
    fn test_scanner_position_reaches_end() {
        let raw = "01/01/20, 9:00 am - Alice: hi\n01/01/20, 9:01 am - Bob left";
        let mut scanner = Scanner::new(raw);
        assert_eq!(scanner.position(), 0);
        let records: Vec<_> = scanner.by_ref().filter_map(Result::ok).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(scanner.position(), raw.len());
        assert!(scanner.is_exhausted());
    }
}

// ============================================================================
// Normalizer
// ============================================================================

mod normalizer {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(message: &str) -> MessageRecord {
        let ts = Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap();
        MessageRecord::new(ts, "Alice", message)
    }

    #[test]
    fn test_media_placeholder_inside_longer_text() {
        assert!(is_media_placeholder("look <Media omitted> here", "<Media omitted>"));
        let cleaned = normalize(
            vec![record("look <Media omitted> here")],
            &AnalysisConfig::default(),
        );
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_single_letter_survives() {
        let cleaned = normalize(vec![record("k 👍 100%")], &AnalysisConfig::default());
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].message(), "k  ");
    }

    #[test]
    fn test_apostrophe_only_message_dropped() {
        let cleaned = normalize(vec![record("'''")], &AnalysisConfig::default());
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_non_latin_scripts_removed() {
        assert_eq!(clean_text("Привет hello 你好"), " hello ");
        assert_eq!(clean_text("naïve café"), "nave caf");
    }

    #[test]
    fn test_uppercase_expanding_letters() {
        // 'İ' lowercases to "i" plus a combining dot, which is removed
        assert_eq!(clean_text("İstanbul"), "istanbul");
    }

    #[test]
    fn test_symbols_outside_ascii_punctuation() {
        assert_eq!(clean_text("price: ₹500 … ok"), "price   ok");
    }
}

// ============================================================================
// Tokenizer
// ============================================================================

mod tokenizer {
    use super::*;

    #[test]
    fn test_possessive_and_contractions() {
        assert_eq!(disambiguate_apostrophes("batch's"), "batch's");
        assert_eq!(disambiguate_apostrophes("y'all"), "y'all");
        assert_eq!(disambiguate_apostrophes("'em"), "em");
    }

    #[test]
    fn test_stopwords_are_case_sensitive() {
        let stopwords = ["the".to_string()].into_iter().collect();
        let words = vec!["the".to_string(), "The".to_string()];
        assert_eq!(remove_stopwords(words, &stopwords), vec!["The"]);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(tokenize(&[]).is_empty());
        assert!(count::<String>(&[]).is_empty());
    }
}
