//! Property-based tests for chatstats.
//!
//! These tests generate random exports and texts to find edge cases.

use proptest::prelude::*;

use chatstats::core::{clean_text, disambiguate_apostrophes};
use chatstats::prelude::*;
use chatstats::scanner::scan_with_stats;
use chrono::{Duration, TimeZone, Utc};

/// Sender names that never contain the sender delimiter
fn arb_sender() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Vibhu Jain".to_string(),
        "Иван".to_string(),
        "+91 98765 43210".to_string(),
        "🔥FireUser🔥".to_string(),
    ])
}

/// Message bodies without anything shaped like a timestamp
fn arb_body() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "Hi there!".to_string(),
        "note: colons: everywhere".to_string(),
        "first line\nsecond line".to_string(),
        "<Media omitted>".to_string(),
        "Привет мир".to_string(),
        "🎉🔥💀 emoji".to_string(),
        "it's 5:30 already".to_string(),
        "   padded   ".to_string(),
        String::new(),
    ])
}

/// A row is either a message or a system notice.
#[derive(Debug, Clone)]
enum Row {
    Message(String, String),
    System,
}

fn arb_row() -> impl Strategy<Value = Row> {
    prop_oneof![
        8 => (arb_sender(), arb_body()).prop_map(|(s, b)| Row::Message(s, b)),
        1 => Just(Row::System),
    ]
}

/// Renders rows as an export, one minute apart (or more).
fn render(rows: &[Row], gaps: &[i64]) -> String {
    let mut at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let mut out = String::new();
    for (row, gap) in rows.iter().zip(gaps.iter().cycle()) {
        at += Duration::minutes(*gap);
        let ts = at.format("%d/%m/%y, %-I:%M %P");
        match row {
            Row::Message(sender, body) => out.push_str(&format!("{ts} - {sender}: {body}\n")),
            Row::System => out.push_str(&format!("{ts} - Alice changed this group's icon\n")),
        }
    }
    out
}

proptest! {
    #[test]
    fn scan_recovers_every_message_row(
        rows in prop::collection::vec(arb_row(), 1..40),
        gaps in prop::collection::vec(1i64..2000, 1..10),
    ) {
        let raw = render(&rows, &gaps);
        let expected: Vec<(String, String)> = rows
            .iter()
            .filter_map(|row| match row {
                Row::Message(s, b) => Some((s.clone(), b.trim().to_string())),
                Row::System => None,
            })
            .collect();
        let system_rows = rows.len() - expected.len();

        let (records, stats) = scan_with_stats(&raw).unwrap();

        prop_assert_eq!(stats.timestamps_matched, rows.len());
        prop_assert_eq!(stats.system_messages_skipped, system_rows);
        prop_assert_eq!(records.len(), stats.timestamps_matched - stats.system_messages_skipped);

        let actual: Vec<(String, String)> = records
            .iter()
            .map(|r| (r.sender.clone(), r.message.clone()))
            .collect();
        prop_assert_eq!(actual, expected);

        prop_assert!(records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn scan_never_panics(raw in any::<String>()) {
        let _ = scan(&raw);
    }

    #[test]
    fn scan_never_panics_after_valid_anchor(tail in any::<String>()) {
        let raw = format!("01/01/20, 10:00 am - {tail}");
        let _ = scan(&raw);
    }

    #[test]
    fn clean_text_is_idempotent(text in any::<String>()) {
        let once = clean_text(&text);
        prop_assert_eq!(clean_text(&once), once.clone());
    }

    #[test]
    fn clean_text_alphabet(text in any::<String>()) {
        let cleaned = clean_text(&text);
        prop_assert!(cleaned
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '\'' || c.is_whitespace()));
    }

    #[test]
    fn normalize_twice_is_idempotent(
        bodies in prop::collection::vec(any::<String>(), 0..20),
    ) {
        let ts = Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap();
        let config = AnalysisConfig::default();
        let records: Vec<MessageRecord> = bodies
            .into_iter()
            .map(|b| MessageRecord::new(ts, "Alice", b))
            .collect();

        let once = normalize(records, &config);
        let twice = normalize(once.iter().cloned().map(MessageRecord::from).collect(), &config);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn disambiguated_tokens_have_no_edge_apostrophes(token in "[a-z']{0,12}") {
        let word = disambiguate_apostrophes(&token);
        prop_assert!(!word.starts_with('\''));
        prop_assert!(!word.ends_with('\''));
        prop_assert!(!word.contains("''"));
    }

    #[test]
    fn count_totals_match(words in prop::collection::vec("[a-e]{1,3}", 0..100)) {
        let table = count(&words);
        prop_assert_eq!(table.total(), words.len() as u64);

        let top = table.top(table.len());
        prop_assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn report_totals_match_records(
        rows in prop::collection::vec(arb_row(), 1..40),
        gaps in prop::collection::vec(1i64..2000, 1..10),
    ) {
        let analysis = Pipeline::new(AnalysisConfig::empty())
            .run_str(&render(&rows, &gaps))
            .unwrap();
        let report = &analysis.report;

        prop_assert_eq!(report.total_messages(), analysis.records.len());
        prop_assert_eq!(report.per_hour.iter().sum::<usize>(), analysis.records.len());
        prop_assert_eq!(
            report.per_date.iter().map(|(_, n)| n).sum::<usize>(),
            analysis.records.len()
        );
        prop_assert!(report.per_date.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
