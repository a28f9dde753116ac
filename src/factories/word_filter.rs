// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::stats::{filter_words_in_range, word_len};
use crate::traits::TextPredicate;

/// Word filter capturing an inclusive length range.
///
/// As a [`TextPredicate`] it judges a single word; [`WordRangeFilter::filter_text`]
/// applies it to every word of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WordRangeFilter {
    pub min_length: usize,
    pub max_length: usize,
}

impl WordRangeFilter {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self { min_length, max_length }
    }

    pub fn filter_text<'t>(&self, text: &'t str) -> Vec<&'t str> {
        filter_words_in_range(text, self.min_length, self.max_length)
    }
}

impl Default for WordRangeFilter {
    fn default() -> Self {
        Self::new(0, usize::MAX)
    }
}

impl TextPredicate for WordRangeFilter {
    fn test(&self, word: &str) -> bool {
        (self.min_length..=self.max_length).contains(&word_len(word))
    }
}
