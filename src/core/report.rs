//! Aggregate views over cleaned records.
//!
//! A [`Report`] groups the records four ways, one per chart:
//!
//! | View | Order |
//! |------|-------|
//! | messages per sender | count, highest first (ties: first seen) |
//! | messages per date | calendar date, ascending |
//! | messages per hour | hour `0..=23`, every hour present |
//! | word bars | words-of-interest counts, ranked |
//!
//! Sender aliases are applied beforehand with [`apply_aliases`].

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::frequency::WordFrequencyTable;
use crate::message::NormalizedRecord;

/// Hours in a day, one bucket each.
pub const HOURS_PER_DAY: usize = 24;

/// Renames senders that have an alias; others are left as they are.
pub fn apply_aliases(records: &mut [NormalizedRecord], aliases: &HashMap<String, String>) {
    if aliases.is_empty() {
        return;
    }
    for record in records.iter_mut() {
        if let Some(alias) = aliases.get(record.sender()) {
            record.set_sender(alias.clone());
        }
    }
}

/// The grouped data behind every chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// `(sender, messages)`, most active first.
    pub per_sender: Vec<(String, usize)>,
    /// `(date, messages)`, ascending by date.
    pub per_date: Vec<(NaiveDate, usize)>,
    /// Messages sent in each hour of the day.
    pub per_hour: [usize; HOURS_PER_DAY],
    /// `(word, count)` for the words chart, most used first.
    pub word_bars: Vec<(String, u64)>,
}

impl Report {
    /// Groups `records` and ranks `words`.
    pub fn build(records: &[NormalizedRecord], words: &WordFrequencyTable) -> Self {
        Self {
            per_sender: messages_per_sender(records),
            per_date: messages_per_date(records),
            per_hour: messages_per_hour(records),
            word_bars: words
                .ranked()
                .into_iter()
                .map(|(word, n)| (word.to_string(), n))
                .collect(),
        }
    }

    /// Number of records the report was built from.
    pub fn total_messages(&self) -> usize {
        self.per_sender.iter().map(|(_, n)| n).sum()
    }

    /// Busiest hour of the day, earliest hour on ties.
    pub fn peak_hour(&self) -> Option<u32> {
        let max = *self.per_hour.iter().max()?;
        if max == 0 {
            return None;
        }
        self.per_hour
            .iter()
            .position(|&n| n == max)
            .map(|h| h as u32)
    }

    /// Returns `true` if no record was grouped.
    pub fn is_empty(&self) -> bool {
        self.per_sender.is_empty()
    }
}

/// Message count per sender, most active first.
pub fn messages_per_sender(records: &[NormalizedRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.sender()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(record.sender(), counts.len());
                counts.push((record.sender().to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Message count per calendar date, ascending.
pub fn messages_per_date(records: &[NormalizedRecord]) -> Vec<(NaiveDate, usize)> {
    let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *by_date.entry(record.date()).or_insert(0) += 1;
    }
    by_date.into_iter().collect()
}

/// Message count for each hour of the day.
pub fn messages_per_hour(records: &[NormalizedRecord]) -> [usize; HOURS_PER_DAY] {
    let mut hours = [0usize; HOURS_PER_DAY];
    for record in records {
        hours[record.hour() as usize] += 1;
    }
    hours
}
