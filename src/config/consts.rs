// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Number of entries in the frequency summary of an `analyze` response
pub const ANALYZE_TOP_WORDS: usize = 5;
/// Number of entries in the `map_filter_reduce` top words
pub const MAP_FILTER_REDUCE_TOP_WORDS: usize = 10;
/// Minimum length of a "long" word in aggregate counts
pub const DEFAULT_LONG_WORD_LENGTH: usize = 5;
/// Words strictly longer than this are "long" in the map/filter/reduce demo
pub const LONG_WORD_THRESHOLD: usize = 5;
/// Words at most this long are "short" in the map/filter/reduce demo
pub const SHORT_WORD_MAX_LENGTH: usize = 3;
/// Upper bound of the word length range when a filter request omits it
pub const DEFAULT_FILTER_MAX_LENGTH: usize = 100;
/// Registry name used when a transform request omits `type`
pub const DEFAULT_TRANSFORMATION: &str = "uppercase";
