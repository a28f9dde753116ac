// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::observability::messages::{registry::UnknownSortCriteria, StructuredLog};
use crate::stats::{split_words, word_len};

/// How [`sort_by_criteria`] orders words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SortCriteria {
    /// Ascending by (length, value).
    #[default]
    Length,
    /// Descending by length; equal lengths keep text order.
    LengthDesc,
    /// Case-insensitive; equal words keep text order.
    Alphabetical,
    /// Text order. Anything unrecognized maps here.
    Unsorted,
}

impl SortCriteria {
    /// Parse a criteria name. Unknown names become [`SortCriteria::Unsorted`].
    pub fn parse(criteria: &str) -> Self {
        match criteria {
            "length" => SortCriteria::Length,
            "length_desc" => SortCriteria::LengthDesc,
            "alphabetical" => SortCriteria::Alphabetical,
            "unsorted" => SortCriteria::Unsorted,
            other => {
                UnknownSortCriteria { criteria: other }.log();
                SortCriteria::Unsorted
            }
        }
    }
}

impl From<&str> for SortCriteria {
    fn from(criteria: &str) -> Self {
        Self::parse(criteria)
    }
}

impl From<String> for SortCriteria {
    fn from(criteria: String) -> Self {
        Self::parse(&criteria)
    }
}

/// Sort the words of `text`. Accepts a [`SortCriteria`] or its name.
pub fn sort_by_criteria(text: &str, criteria: impl Into<SortCriteria>) -> Vec<&str> {
    let mut words = split_words(text);
    match criteria.into() {
        SortCriteria::Length => words.sort_by(|a, b| (word_len(a), a).cmp(&(word_len(b), b))),
        SortCriteria::LengthDesc => words.sort_by_key(|w| std::cmp::Reverse(word_len(w))),
        SortCriteria::Alphabetical => words.sort_by_cached_key(|w| w.to_lowercase()),
        SortCriteria::Unsorted => {}
    }
    words
}

/// Sort by (length, lowercase value), then drop case-insensitive duplicates.
///
/// The first occurrence in sorted order keeps its original casing.
pub fn remove_duplicates_sorted(text: &str) -> Vec<&str> {
    let mut words = split_words(text);
    words.sort_by_cached_key(|w| (word_len(w), w.to_lowercase()));

    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|w| seen.insert(w.to_lowercase()))
        .collect()
}
