// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::stats::{count_characters, count_words};
use crate::traits::TextPredicate;

/// Rules recognized by [`ValidatorFactory::create`].
///
/// `max_words: None` means unbounded.
///
/// # Example
/// ```yaml
/// min_words: 3
/// max_words: 50
/// min_chars: 10
/// required_words: [fox, dog]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidationRules {
    pub min_words: usize,
    pub max_words: Option<usize>,
    pub min_chars: usize,
    pub required_words: Vec<String>,
}

/// Factory for configured text validators.
pub struct ValidatorFactory;

impl ValidatorFactory {
    pub fn create(rules: ValidationRules) -> TextValidator {
        let required_lowercase = rules
            .required_words
            .iter()
            .map(|word| word.to_lowercase())
            .collect();
        TextValidator {
            rules,
            required_lowercase,
        }
    }
}

/// Predicate built by [`ValidatorFactory`].
///
/// Checks, in order and stopping at the first failure: word count within
/// `[min_words, max_words]`, character count at least `min_chars`, and each
/// required word present as a case-insensitive substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextValidator {
    rules: ValidationRules,
    required_lowercase: Vec<String>,
}

impl TextValidator {
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    fn word_count_in_bounds(&self, text: &str) -> bool {
        let words = count_words(text);
        words >= self.rules.min_words && self.rules.max_words.map_or(true, |max| words <= max)
    }

    fn has_required_words(&self, text: &str) -> bool {
        if self.required_lowercase.is_empty() {
            return true;
        }
        let lowered = text.to_lowercase();
        self.required_lowercase
            .iter()
            .all(|required| lowered.contains(required.as_str()))
    }
}

impl TextPredicate for TextValidator {
    fn test(&self, text: &str) -> bool {
        self.word_count_in_bounds(text)
            && count_characters(text) >= self.rules.min_chars
            && self.has_required_words(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_accept_everything() {
        let validator = ValidatorFactory::create(ValidationRules::default());
        assert!(validator.test(""));
        assert!(validator.test("anything at all"));
    }

    #[test]
    fn test_validator_table_driven() {
        struct TestCase {
            name: &'static str,
            rules: &'static str,
            input: &'static str,
            expected: bool,
        }

        let test_cases = vec![
            TestCase { name: "below min words", rules: r#"{"min_words": 3}"#, input: "one two", expected: false },
            TestCase { name: "at min words", rules: r#"{"min_words": 2}"#, input: "one two", expected: true },
            TestCase { name: "above max words", rules: r#"{"max_words": 1}"#, input: "one two", expected: false },
            TestCase { name: "at max words", rules: r#"{"max_words": 2}"#, input: "one two", expected: true },
            TestCase { name: "too few chars", rules: r#"{"min_chars": 8}"#, input: "one two", expected: false },
            TestCase { name: "chars include spaces", rules: r#"{"min_chars": 7}"#, input: "one two", expected: true },
            TestCase {
                name: "required word any case",
                rules: r#"{"required_words": ["FOX"]}"#,
                input: "the quick fox",
                expected: true,
            },
            TestCase {
                name: "required word is a substring match",
                rules: r#"{"required_words": ["ick"]}"#,
                input: "the quick fox",
                expected: true,
            },
            TestCase {
                name: "missing required word",
                rules: r#"{"required_words": ["fox", "dog"]}"#,
                input: "the quick fox",
                expected: false,
            },
            TestCase {
                name: "unknown keys ignored",
                rules: r#"{"max_sentences": 1, "min_words": 1}"#,
                input: "one. two. three.",
                expected: true,
            },
        ];

        for tc in test_cases {
            let rules: ValidationRules = serde_json::from_str(tc.rules).unwrap();
            let validator = ValidatorFactory::create(rules);
            assert_eq!(validator.test(tc.input), tc.expected, "case: {}", tc.name);
        }
    }

    #[test]
    fn test_max_words_defaults_to_unbounded() {
        let rules: ValidationRules = serde_json::from_str("{}").unwrap();
        assert_eq!(rules.max_words, None);
        let long = "word ".repeat(10_000);
        assert!(ValidatorFactory::create(rules).test(&long));
    }
}
