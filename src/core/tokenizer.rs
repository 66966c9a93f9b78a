//! Word tokenization over cleaned messages.
//!
//! Cleaned text only holds `a-z`, `'` and whitespace, so tokens are whitespace
//! separated. The one subtle step is telling a contraction (`don't`,
//! `rock'n'roll`) from an apostrophe used as a quotation mark (`'quoted'`);
//! see [`disambiguate_apostrophes`].

use std::collections::HashSet;

use crate::message::NormalizedRecord;

/// Strips the apostrophes from `token` if any of them is a quotation mark.
///
/// An apostrophe is part of the word only when it is neither the first nor
/// the last character and both neighbors are alphabetic. A single failing
/// occurrence strips every apostrophe in the token.
///
/// ```
/// use chatstats::core::tokenizer::disambiguate_apostrophes;
///
/// assert_eq!(disambiguate_apostrophes("don't"), "don't");
/// assert_eq!(disambiguate_apostrophes("'quoted'"), "quoted");
/// assert_eq!(disambiguate_apostrophes("rock'n'roll"), "rock'n'roll");
/// ```
pub fn disambiguate_apostrophes(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let stray = chars.iter().enumerate().any(|(i, c)| {
        *c == '\''
            && (i == 0
                || i + 1 == chars.len()
                || !chars[i - 1].is_alphabetic()
                || !chars[i + 1].is_alphabetic())
    });

    if stray {
        chars.into_iter().filter(|c| *c != '\'').collect()
    } else {
        token.to_string()
    }
}

/// Splits every message into words, in record order.
///
/// Tokens made only of apostrophes vanish entirely.
pub fn tokenize(records: &[NormalizedRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.message().split_whitespace())
        .map(disambiguate_apostrophes)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Removes stopwords, keeping the order of the remaining words.
pub fn remove_stopwords(words: Vec<String>, stopwords: &HashSet<String>) -> Vec<String> {
    words
        .into_iter()
        .filter(|word| !stopwords.contains(word))
        .collect()
}
