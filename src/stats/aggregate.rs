// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Map / filter / reduce aggregates over the word sequence.
//!
//! These are written as iterator chains on purpose: each one is a
//! filter→map→fold pipeline over [`split_words`], with no counters mutated in
//! a loop.

use serde::Serialize;

use super::counts::find_longest_word;
use super::words::{split_words, word_len};
use crate::traits::TextTransform;

/// Short per-text summary: counts plus the words at or above a length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSummary {
    pub word_count: usize,
    pub longest_word: String,
    /// Unrounded mean word length.
    pub average: f64,
    pub long_words: Vec<String>,
}

/// Sum of all word lengths.
pub fn total_word_length(text: &str) -> usize {
    split_words(text)
        .into_iter()
        .fold(0, |acc, word| acc + word_len(word))
}

/// Number of words with at least `min_length` characters.
pub fn count_words_at_least(text: &str, min_length: usize) -> usize {
    split_words(text)
        .into_iter()
        .filter(|word| word_len(word) >= min_length)
        .fold(0, |acc, _| acc + 1)
}

/// Total length of the words with at least `min_length` characters.
pub fn sum_length_of_words_at_least(text: &str, min_length: usize) -> usize {
    split_words(text)
        .into_iter()
        .filter(|word| word_len(word) >= min_length)
        .map(word_len)
        .fold(0, |acc, len| acc + len)
}

pub fn filter_words_by_length(text: &str, min_length: usize) -> Vec<&str> {
    split_words(text)
        .into_iter()
        .filter(|word| word_len(word) >= min_length)
        .collect()
}

/// Words whose length falls in `min_length..=max_length`.
pub fn filter_words_in_range(text: &str, min_length: usize, max_length: usize) -> Vec<&str> {
    split_words(text)
        .into_iter()
        .filter(|word| (min_length..=max_length).contains(&word_len(word)))
        .collect()
}

/// Apply `transformation` to every word independently.
pub fn transform_words(text: &str, transformation: &dyn TextTransform) -> Vec<String> {
    split_words(text)
        .into_iter()
        .map(|word| transformation.transform(word))
        .collect()
}

pub fn summarize(text: &str, min_length: usize) -> TextSummary {
    let words = split_words(text);
    let average = if words.is_empty() {
        0.0
    } else {
        total_word_length(text) as f64 / words.len() as f64
    };

    TextSummary {
        word_count: words.len(),
        longest_word: find_longest_word(text),
        average,
        long_words: filter_words_by_length(text, min_length)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_fox_example() {
        assert_eq!(count_words_at_least(FOX, 5), 3);
        assert_eq!(sum_length_of_words_at_least(FOX, 5), 15);
        assert_eq!(filter_words_by_length(FOX, 5), vec!["quick", "brown", "jumps"]);
    }

    #[test]
    fn test_total_word_length() {
        assert_eq!(total_word_length(""), 0);
        assert_eq!(total_word_length(FOX), 35);
        assert_eq!(total_word_length("  ab   c "), 3);
    }

    #[test]
    fn test_min_length_zero_counts_everything() {
        assert_eq!(count_words_at_least(FOX, 0), 9);
        assert_eq!(sum_length_of_words_at_least(FOX, 0), total_word_length(FOX));
    }

    #[test]
    fn test_filter_words_in_range() {
        assert_eq!(filter_words_in_range(FOX, 4, 4), vec!["over", "lazy"]);
        assert!(filter_words_in_range(FOX, 6, 3).is_empty());
    }

    #[test]
    fn test_transform_words_maps_each_word() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(transform_words("ab  cd", &upper), vec!["AB", "CD"]);
        assert!(transform_words("", &upper).is_empty());
    }

    #[test]
    fn test_summarize() {
        let summary = summarize("aa bbbb c", 2);
        assert_eq!(summary.word_count, 3);
        assert_eq!(summary.longest_word, "bbbb");
        assert!((summary.average - 7.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.long_words, vec!["aa", "bbbb"]);

        let empty = summarize("", 5);
        assert_eq!(empty.average, 0.0);
        assert!(empty.long_words.is_empty());
    }
}
