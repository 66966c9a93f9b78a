//! Word frequency counting.
//!
//! [`WordFrequencyTable`] maps each word to its number of occurrences and
//! remembers the order in which words were first seen. Ranking with
//! [`top`](WordFrequencyTable::top) sorts by count, highest first; words with
//! equal counts stay in first-seen order, so reports are deterministic.
//!
//! # Example
//!
//! ```
//! use chatstats::core::frequency::count;
//!
//! let words = ["yaar", "class", "yaar", "ugh"].map(String::from);
//! let table = count(&words);
//!
//! assert_eq!(table.get("yaar"), 2);
//! assert_eq!(table.get("missing"), 0);
//! assert_eq!(table.top(2), vec![("yaar", 2), ("class", 1)]);
//! ```

use std::collections::{HashMap, HashSet};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Occurrence counts per word, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Occurrences of `word` (0 if never seen).
    pub fn get(&self, word: &str) -> u64 {
        self.index.get(word).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no word was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Iterates `(word, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(w, n)| (w.as_str(), *n))
    }

    /// The `n` most frequent words, ties in first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Every word ranked by [`top`](Self::top) order.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        self.top(self.len())
    }

    /// A copy holding only the words in `allow`.
    pub fn restricted_to(&self, allow: &HashSet<&str>) -> WordFrequencyTable {
        let mut table = WordFrequencyTable::new();
        for (word, n) in self.iter().filter(|(w, _)| allow.contains(w)) {
            table.index.insert(word.to_string(), table.entries.len());
            table.entries.push((word.to_string(), n));
        }
        table
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordFrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = WordFrequencyTable::new();
        for word in iter {
            table.add(word.as_ref());
        }
        table
    }
}

impl Serialize for WordFrequencyTable {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, n) in &self.entries {
            map.serialize_entry(word, n)?;
        }
        map.end()
    }
}

/// Builds the frequency table of `words`.
pub fn count<S: AsRef<str>>(words: &[S]) -> WordFrequencyTable {
    let mut table = WordFrequencyTable::new();
    for word in words {
        table.add(word.as_ref());
    }
    table
}

/// Same as [`count`], but only for words in the allow-list.
pub fn count_of_interest<S: AsRef<str>>(words: &[S], allow: &HashSet<&str>) -> WordFrequencyTable {
    let mut table = WordFrequencyTable::new();
    for word in words {
        let word: &str = word.as_ref();
        if allow.contains(word) {
            table.add(word);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_count_basic() {
        let table = count(&words(&["a", "b", "a", "c", "a", "b"]));
        assert_eq!(table.get("a"), 3);
        assert_eq!(table.get("b"), 2);
        assert_eq!(table.get("c"), 1);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_count_empty() {
        let table = count::<String>(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.top(5).is_empty());
    }

    #[test]
    fn test_iter_first_seen_order() {
        let table = count(&words(&["z", "y", "z", "x"]));
        let order: Vec<&str> = table.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_top_ties_first_seen() {
        let table = count(&words(&["b", "a", "c", "a", "b", "d"]));
        assert_eq!(table.top(3), vec![("b", 2), ("a", 2), ("c", 1)]);
        assert_eq!(table.top(10).len(), 4);
    }

    #[test]
    fn test_count_of_interest() {
        let allow: HashSet<&str> = ["yaar", "ugh"].into_iter().collect();
        let table = count_of_interest(&words(&["yaar", "hi", "ugh", "yaar"]), &allow);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("yaar"), 2);
        assert_eq!(table.get("hi"), 0);
    }

    #[test]
    fn test_restricted_matches_count_of_interest() {
        let corpus = words(&["yaar", "hi", "ugh", "yaar", "class"]);
        let allow: HashSet<&str> = ["yaar", "class"].into_iter().collect();
        assert_eq!(
            count(&corpus).restricted_to(&allow),
            count_of_interest(&corpus, &allow)
        );
    }

    #[test]
    fn test_serialize_as_map() {
        let table = count(&words(&["hello", "there", "hello"]));
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"hello":2,"there":1}"#);
    }
}
