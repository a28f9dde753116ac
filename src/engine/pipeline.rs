// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validate → transform → filter over a single text.
//!
//! Validators, transformers and filters are supplied as three independent
//! collections of function values. Validation short-circuits: when any
//! validator rejects the text, transformers and filters never run.

use serde::Serialize;
use std::time::Instant;

use crate::combinators::apply_sequence;
use crate::observability::messages::pipeline::{
    PipelineRunCompleted, PipelineRunStarted, PipelineValidationFailed,
};
use crate::observability::messages::StructuredLog;
use crate::stats::split_words;
use crate::traits::{Predicate, Transform};

/// Outcome of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub original: String,
    pub valid: bool,
    /// Empty when `valid` is false.
    pub transformed: String,
    /// Words of `transformed` accepted by every filter; empty when `valid` is false.
    pub filtered_words: Vec<String>,
}

impl PipelineResult {
    fn rejected(text: &str) -> Self {
        Self {
            original: text.to_string(),
            valid: false,
            transformed: String::new(),
            filtered_words: Vec::new(),
        }
    }
}

pub struct PipelineRunner;

impl PipelineRunner {
    pub fn run(
        text: &str,
        validators: &[Predicate],
        transformers: &[Transform],
        filters: &[Predicate],
    ) -> PipelineResult {
        let start_msg = PipelineRunStarted {
            input_size: text.len(),
            validator_count: validators.len(),
            transformer_count: transformers.len(),
            filter_count: filters.len(),
        };
        let span = start_msg.span("pipeline_run");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();

        if let Some(validator_index) = validators.iter().position(|v| !v.test(text)) {
            PipelineValidationFailed {
                validator_index,
                input_size: text.len(),
            }
            .log();
            return PipelineResult::rejected(text);
        }

        let transformed = apply_sequence(text, transformers);
        let filtered_words: Vec<String> = split_words(&transformed)
            .into_iter()
            .filter(|word| filters.iter().all(|f| f.test(word)))
            .map(str::to_string)
            .collect();

        PipelineRunCompleted {
            output_size: transformed.len(),
            retained_words: filtered_words.len(),
            duration: start_time.elapsed(),
        }
        .log();

        PipelineResult {
            original: text.to_string(),
            valid: true,
            transformed,
            filtered_words,
        }
    }
}

/// A reusable set of pipeline steps.
#[derive(Clone, Default)]
pub struct Pipeline {
    pub validators: Vec<Predicate>,
    pub transformers: Vec<Transform>,
    pub filters: Vec<Predicate>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validator(mut self, validator: Predicate) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn transformer(mut self, transformer: Transform) -> Self {
        self.transformers.push(transformer);
        self
    }

    pub fn filter(mut self, filter: Predicate) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn run(&self, text: &str) -> PipelineResult {
        PipelineRunner::run(text, &self.validators, &self.transformers, &self.filters)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("validator_count", &self.validators.len())
            .field(
                "transformers",
                &self.transformers.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .field("filter_count", &self.filters.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::{ValidationRules, ValidatorFactory, WordRangeFilter};
    use crate::factories::counter::Counter;
    use crate::transforms::lookup;
    use std::sync::Arc;

    const TEXT: &str = "  The quick brown fox jumps over the lazy dog ";

    #[test]
    fn test_empty_pipeline_is_passthrough() {
        let result = PipelineRunner::run(TEXT, &[], &[], &[]);
        assert!(result.valid);
        assert_eq!(result.original, TEXT);
        assert_eq!(result.transformed, TEXT);
        assert_eq!(result.filtered_words, split_words(TEXT));
    }

    #[test]
    fn test_full_pipeline() {
        let validator: Predicate = Arc::new(ValidatorFactory::create(ValidationRules {
            min_words: 3,
            required_words: vec!["FOX".to_string()],
            ..ValidationRules::default()
        }));
        let transformers = vec![lookup("strip"), lookup("uppercase")];
        let filters: Vec<Predicate> = vec![
            Arc::new(WordRangeFilter::new(4, 5)),
            Arc::new(|w: &str| !w.starts_with('J')),
        ];

        let result = PipelineRunner::run(TEXT, &[validator], &transformers, &filters);

        assert!(result.valid);
        assert_eq!(result.transformed, "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG");
        assert_eq!(result.filtered_words, vec!["QUICK", "BROWN", "OVER", "LAZY"]);
    }

    #[test]
    fn test_failed_validation_skips_transformers_and_filters() {
        let calls = Arc::new(Counter::new());
        let counting_transform: Transform = {
            let calls = Arc::clone(&calls);
            Arc::new(move |s: &str| {
                calls.increment();
                s.to_string()
            })
        };
        let counting_filter: Predicate = {
            let calls = Arc::clone(&calls);
            Arc::new(move |_: &str| {
                calls.increment();
                true
            })
        };
        let accept: Predicate = Arc::new(|_: &str| true);
        let reject: Predicate = Arc::new(|_: &str| false);

        let result = PipelineRunner::run(
            TEXT,
            &[accept, reject],
            &[counting_transform],
            &[counting_filter],
        );

        assert_eq!(result, PipelineResult::rejected(TEXT));
        assert_eq!(calls.current(), 0);
    }

    #[test]
    fn test_pipeline_builder_reuse() {
        let pipeline = Pipeline::new()
            .transformer(lookup("lowercase"))
            .filter(Arc::new(WordRangeFilter::new(3, usize::MAX)));

        assert_eq!(pipeline.run("A Big CAT").filtered_words, vec!["big", "cat"]);
        assert_eq!(pipeline.run("to be").filtered_words, Vec::<String>::new());
        assert_eq!(pipeline.run("to be").transformed, "to be");
    }

    #[test]
    fn test_result_serializes_with_expected_keys() {
        let json = serde_json::to_value(PipelineRunner::run("hi", &[], &[], &[])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "original": "hi",
                "valid": true,
                "transformed": "hi",
                "filtered_words": ["hi"],
            })
        );
    }
}
