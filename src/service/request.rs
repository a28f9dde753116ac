// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

use crate::config::consts::{
    DEFAULT_FILTER_MAX_LENGTH, DEFAULT_LONG_WORD_LENGTH, DEFAULT_TRANSFORMATION,
};
use crate::config::PipelineConfig;
use crate::factories::ProcessorConfig;

/// One service request. Missing options take their defaults; a missing
/// `text` is treated as empty and rejected.
///
/// # Example
/// ```json
/// {"operation": "filter", "text": "a bb ccc", "min_length": 2}
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Request {
    Analyze {
        #[serde(default)]
        text: String,
    },
    Transform {
        #[serde(default)]
        text: String,
        #[serde(rename = "type", default = "default_transformation")]
        transformation: String,
    },
    TransformAdvanced {
        #[serde(default)]
        text: String,
        #[serde(default)]
        config: ProcessorConfig,
    },
    Filter {
        #[serde(default)]
        text: String,
        #[serde(default)]
        min_length: usize,
        #[serde(default = "default_filter_max_length")]
        max_length: usize,
        #[serde(default)]
        remove_duplicates: bool,
    },
    MapFilterReduce {
        #[serde(default)]
        text: String,
    },
    Lambda {
        #[serde(default)]
        text: String,
    },
    Summary {
        #[serde(default)]
        text: String,
        #[serde(default = "default_summary_min_length")]
        min_length: usize,
    },
    Pipeline {
        #[serde(default)]
        text: String,
        #[serde(default)]
        pipeline: PipelineConfig,
    },
}

fn default_transformation() -> String {
    DEFAULT_TRANSFORMATION.to_string()
}

fn default_filter_max_length() -> usize {
    DEFAULT_FILTER_MAX_LENGTH
}

fn default_summary_min_length() -> usize {
    DEFAULT_LONG_WORD_LENGTH
}

impl Request {
    /// Request for `operation` with `text` and default options.
    pub fn with_defaults(operation: &str, text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::json!({
            "operation": operation,
            "text": text,
        }))
    }

    pub fn operation(&self) -> &'static str {
        match self {
            Request::Analyze { .. } => "analyze",
            Request::Transform { .. } => "transform",
            Request::TransformAdvanced { .. } => "transform_advanced",
            Request::Filter { .. } => "filter",
            Request::MapFilterReduce { .. } => "map_filter_reduce",
            Request::Lambda { .. } => "lambda",
            Request::Summary { .. } => "summary",
            Request::Pipeline { .. } => "pipeline",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Request::Analyze { text }
            | Request::Transform { text, .. }
            | Request::TransformAdvanced { text, .. }
            | Request::Filter { text, .. }
            | Request::MapFilterReduce { text }
            | Request::Lambda { text }
            | Request::Summary { text, .. }
            | Request::Pipeline { text, .. } => text,
        }
    }
}
