// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Statistics engine: pure, total functions over a text.
//!
//! Every function here accepts any `&str`, including the empty string, and
//! returns a zero or empty sentinel instead of failing. Word boundaries come
//! from [`words::split_words`]; nothing in this module keeps state between
//! calls.
//!
//! Lengths are measured in `char`s, not bytes.

pub mod aggregate;
pub mod counts;
pub mod frequency;
pub mod words;

pub use aggregate::{
    count_words_at_least, filter_words_by_length, filter_words_in_range, summarize,
    sum_length_of_words_at_least, total_word_length, transform_words, TextSummary,
};
pub use counts::{
    analyze, average_word_length, count_characters, count_characters_no_spaces,
    count_sentences, count_words, find_longest_word, find_shortest_word, TextAnalysis,
};
pub use frequency::{top_words, word_frequencies, FrequencyTable, RankedList};
pub use words::{join_words, split_words, word_len};
