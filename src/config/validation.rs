// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};

use super::loader::{PipelineConfig, TransformStep};
use crate::observability::messages::config::PipelineConfigWarning;
use crate::observability::messages::StructuredLog;
use crate::transforms::TransformationRegistry;

/// Something in a pipeline config that runs but cannot do what it reads like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The step names no registered transformation and will act as identity.
    UnknownTransformation { step_index: usize, name: String },
    /// `min_length > max_length`: the filter rejects every word.
    EmptyWordRange {
        filter_index: usize,
        min_length: usize,
        max_length: usize,
    },
    /// `min_words > max_words`: the validator rejects every text.
    ContradictoryWordBounds {
        validator_index: usize,
        min_words: usize,
        max_words: usize,
    },
}

impl ConfigWarning {
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigWarning::UnknownTransformation { .. } => "unknown_transformation",
            ConfigWarning::EmptyWordRange { .. } => "empty_word_range",
            ConfigWarning::ContradictoryWordBounds { .. } => "contradictory_word_bounds",
        }
    }
}

impl Display for ConfigWarning {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownTransformation { step_index, name } => write!(
                f,
                "transformation {} '{}' is not registered and will be treated as identity",
                step_index, name
            ),
            ConfigWarning::EmptyWordRange {
                filter_index,
                min_length,
                max_length,
            } => write!(
                f,
                "filter {} has min_length {} > max_length {} and drops every word",
                filter_index, min_length, max_length
            ),
            ConfigWarning::ContradictoryWordBounds {
                validator_index,
                min_words,
                max_words,
            } => write!(
                f,
                "validator {} has min_words {} > max_words {} and rejects every text",
                validator_index, min_words, max_words
            ),
        }
    }
}

/// Check a pipeline config against `registry`, logging each finding.
pub fn validate_pipeline_config(
    config: &PipelineConfig,
    registry: &TransformationRegistry,
) -> Vec<ConfigWarning> {
    let unknown_steps = config
        .transformations
        .iter()
        .enumerate()
        .filter_map(|(step_index, step)| match step {
            TransformStep::Named(name) if !registry.contains(name) => {
                Some(ConfigWarning::UnknownTransformation {
                    step_index,
                    name: name.clone(),
                })
            }
            _ => None,
        });

    let empty_ranges = config
        .filters
        .iter()
        .enumerate()
        .filter(|(_, filter)| filter.min_length > filter.max_length)
        .map(|(filter_index, filter)| ConfigWarning::EmptyWordRange {
            filter_index,
            min_length: filter.min_length,
            max_length: filter.max_length,
        });

    let bad_bounds = config
        .validators
        .iter()
        .enumerate()
        .filter_map(|(validator_index, rules)| {
            rules
                .max_words
                .filter(|max| rules.min_words > *max)
                .map(|max_words| ConfigWarning::ContradictoryWordBounds {
                    validator_index,
                    min_words: rules.min_words,
                    max_words,
                })
        });

    let warnings: Vec<ConfigWarning> = bad_bounds.chain(unknown_steps).chain(empty_ranges).collect();

    for warning in &warnings {
        PipelineConfigWarning { warning }.log();
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::{ValidationRules, WordRangeFilter};
    use crate::transforms::default_registry;

    #[test]
    fn test_clean_config_has_no_warnings() {
        let config = PipelineConfig {
            validators: vec![ValidationRules {
                min_words: 1,
                max_words: Some(10),
                ..Default::default()
            }],
            transformations: vec![TransformStep::Named("strip".to_string())],
            filters: vec![WordRangeFilter::new(2, 8)],
        };
        assert!(validate_pipeline_config(&config, default_registry()).is_empty());
    }

    #[test]
    fn test_warnings_table_driven() {
        struct TestCase {
            name: &'static str,
            config: PipelineConfig,
            expected_kinds: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "unknown transformation",
                config: PipelineConfig {
                    transformations: vec![
                        TransformStep::Named("uppercase".to_string()),
                        TransformStep::Named("shout".to_string()),
                    ],
                    ..Default::default()
                },
                expected_kinds: vec!["unknown_transformation"],
            },
            TestCase {
                name: "inverted filter range",
                config: PipelineConfig {
                    filters: vec![WordRangeFilter::new(9, 3)],
                    ..Default::default()
                },
                expected_kinds: vec!["empty_word_range"],
            },
            TestCase {
                name: "validator bounds cross",
                config: PipelineConfig {
                    validators: vec![ValidationRules {
                        min_words: 5,
                        max_words: Some(2),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
                expected_kinds: vec!["contradictory_word_bounds"],
            },
            TestCase {
                name: "validators first, then steps, then filters",
                config: PipelineConfig {
                    validators: vec![ValidationRules {
                        min_words: 3,
                        max_words: Some(1),
                        ..Default::default()
                    }],
                    transformations: vec![TransformStep::Named("nope".to_string())],
                    filters: vec![WordRangeFilter::new(4, 1)],
                },
                expected_kinds: vec![
                    "contradictory_word_bounds",
                    "unknown_transformation",
                    "empty_word_range",
                ],
            },
        ];

        for tc in test_cases {
            let kinds: Vec<&str> = validate_pipeline_config(&tc.config, default_registry())
                .iter()
                .map(ConfigWarning::kind)
                .collect();
            assert_eq!(kinds, tc.expected_kinds, "Test case '{}' failed", tc.name);
        }
    }

    #[test]
    fn test_unknown_transformation_message() {
        let warning = ConfigWarning::UnknownTransformation {
            step_index: 2,
            name: "shout".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "transformation 2 'shout' is not registered and will be treated as identity"
        );
    }
}
