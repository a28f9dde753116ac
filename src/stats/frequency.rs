// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use super::words::split_words;

/// Characters stripped from the leading and trailing edge of each word.
pub const EDGE_PUNCTUATION: [char; 14] =
    ['.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\''];

/// `(word, count)` pairs sorted by count descending.
pub type RankedList = Vec<(String, usize)>;

/// Word → occurrence count, iterated in first-seen order.
///
/// Backed by an entry vector plus a hash index so that building the table is
/// a single pass and tie order in [`FrequencyTable::ranked`] is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `word`, appending it if unseen.
    pub fn add(&mut self, word: &str, count: usize) {
        match self.index.get(word) {
            Some(&position) => self.entries[position].1 += count,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), count));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Entries sorted by count descending; equal counts keep first-seen order.
    pub fn ranked(&self) -> RankedList {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl FromIterator<(String, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |mut table, (word, count)| {
            table.add(&word, count);
            table
        })
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

fn is_edge_punctuation(c: char) -> bool {
    EDGE_PUNCTUATION.contains(&c)
}

/// Strip edge punctuation from a word. Inner punctuation is kept.
pub fn normalize_word(word: &str) -> &str {
    word.trim_matches(is_edge_punctuation)
}

/// Build the frequency table of a text.
///
/// The text is lowercased, split, stripped of edge punctuation, and words
/// that end up empty are dropped.
pub fn word_frequencies(text: &str) -> FrequencyTable {
    let lowered = text.to_lowercase();
    split_words(&lowered)
        .into_iter()
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .fold(FrequencyTable::new(), |mut table, word| {
            table.add(word, 1);
            table
        })
}

/// The `n` most frequent words, most frequent first.
pub fn top_words(text: &str, n: usize) -> RankedList {
    word_frequencies(text).ranked().into_iter().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequencies_normalize_case_and_punctuation() {
        let table = word_frequencies("The the THE.");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("the"), Some(3));
    }

    #[test]
    fn test_only_edge_punctuation_is_stripped() {
        let table = word_frequencies("(hello) \"don't\" e.g. ... !!");
        let words: Vec<&str> = table.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["hello", "don't", "e.g"]);
    }

    #[test]
    fn test_empty_text_has_empty_table() {
        assert!(word_frequencies("").is_empty());
        assert!(word_frequencies("  ?! ...  ").is_empty());
        assert!(top_words("", 5).is_empty());
    }

    #[test]
    fn test_top_words_sorted_and_truncated() {
        let text = "b a b c a b";
        assert_eq!(
            top_words(text, 2),
            vec![("b".to_string(), 3), ("a".to_string(), 2)]
        );
        assert_eq!(top_words(text, 0), vec![]);
        assert_eq!(top_words(text, 10).len(), 3);
    }

    #[test]
    fn test_top_words_ties_keep_first_seen_order() {
        let text = "zeta alpha mid zeta alpha mid omega";
        let ranked = top_words(text, 10);
        assert_eq!(
            ranked,
            vec![
                ("zeta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("mid".to_string(), 2),
                ("omega".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let table: FrequencyTable = vec![("beta".to_string(), 1), ("alpha".to_string(), 4)]
            .into_iter()
            .collect();
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"beta":1,"alpha":4}"#);
    }

    #[test]
    fn test_total_matches_normalized_word_count() {
        let table = word_frequencies("One, two; two! -- three");
        // "--" survives because '-' is not edge punctuation.
        assert_eq!(table.total(), 5);
        assert_eq!(table.get("--"), Some(1));
    }
}
