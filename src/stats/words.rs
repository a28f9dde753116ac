// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Split a text into words on any run of whitespace.
///
/// Leading and trailing whitespace is discarded and no empty fragments are
/// produced, so blank text yields an empty vector.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Rejoin words with single spaces.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Length of a word in characters.
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_table_driven() {
        struct TestCase {
            name: &'static str,
            input: &'static str,
            expected: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase { name: "empty", input: "", expected: vec![] },
            TestCase { name: "whitespace only", input: " \t\n ", expected: vec![] },
            TestCase { name: "single word", input: "hello", expected: vec!["hello"] },
            TestCase { name: "surrounding space", input: "  hello world  ", expected: vec!["hello", "world"] },
            TestCase { name: "mixed runs", input: "a\t\tb\n c", expected: vec!["a", "b", "c"] },
            TestCase { name: "punctuation stays", input: "hi, there!", expected: vec!["hi,", "there!"] },
        ];

        for tc in test_cases {
            assert_eq!(split_words(tc.input), tc.expected, "case: {}", tc.name);
        }
    }

    #[test]
    fn test_split_is_idempotent_after_join() {
        let text = "  the   quick\tbrown \n fox ";
        let words = split_words(text);
        let rejoined = join_words(&words);
        assert_eq!(rejoined, "the quick brown fox");
        assert_eq!(split_words(&rejoined), words);
    }

    #[test]
    fn test_word_len_counts_chars() {
        assert_eq!(word_len("naïve"), 5);
        assert_eq!(word_len(""), 0);
    }
}
