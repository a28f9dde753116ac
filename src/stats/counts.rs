// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use super::words::{split_words, word_len};

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Aggregate statistics for a single text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub word_count: usize,
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub sentence_count: usize,
    /// Rounded to two decimal places.
    pub average_word_length: f64,
    pub longest_word: String,
    pub shortest_word: String,
}

pub fn count_words(text: &str) -> usize {
    split_words(text).len()
}

/// Character count including whitespace.
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Character count with every U+0020 removed. Other whitespace still counts.
pub fn count_characters_no_spaces(text: &str) -> usize {
    text.chars().filter(|c| *c != ' ').count()
}

/// Number of `.`, `!` and `?` in the text.
///
/// Non-blank text always has at least one sentence; blank text has none.
pub fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    let terminators = text
        .chars()
        .filter(|c| SENTENCE_TERMINATORS.contains(c))
        .count();
    terminators.max(1)
}

/// Mean word length, or `0.0` when there are no words.
pub fn average_word_length(text: &str) -> f64 {
    let words = split_words(text);
    if words.is_empty() {
        return 0.0;
    }
    let total: usize = words.iter().map(|w| word_len(w)).sum();
    total as f64 / words.len() as f64
}

/// Longest word; the first one wins on ties. Empty when there are no words.
pub fn find_longest_word(text: &str) -> String {
    pick_word(text, |candidate, best| candidate > best)
}

/// Shortest word; the first one wins on ties. Empty when there are no words.
pub fn find_shortest_word(text: &str) -> String {
    pick_word(text, |candidate, best| candidate < best)
}

// `replaces(candidate_len, best_len)` must be strict so earlier words keep ties.
fn pick_word(text: &str, replaces: impl Fn(usize, usize) -> bool) -> String {
    split_words(text)
        .into_iter()
        .fold(None::<(&str, usize)>, |best, word| {
            let len = word_len(word);
            match best {
                Some((_, best_len)) if !replaces(len, best_len) => best,
                _ => Some((word, len)),
            }
        })
        .map(|(word, _)| word.to_string())
        .unwrap_or_default()
}

pub fn analyze(text: &str) -> TextAnalysis {
    TextAnalysis {
        word_count: count_words(text),
        character_count: count_characters(text),
        character_count_no_spaces: count_characters_no_spaces(text),
        sentence_count: count_sentences(text),
        average_word_length: round_to_hundredths(average_word_length(text)),
        longest_word: find_longest_word(text),
        shortest_word: find_shortest_word(text),
    }
}

pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
