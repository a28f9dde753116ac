// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::engine::PipelineResult;
use crate::stats::{FrequencyTable, TextAnalysis, TextSummary};

/// Wire envelope: `{"success": true, ...body}`.
#[derive(Debug, Clone, Serialize)]
pub struct Success<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Analyze(AnalyzeResponse),
    Transform(TransformResponse),
    TransformAdvanced(AdvancedTransformResponse),
    Filter(FilterResponse),
    MapFilterReduce(MapFilterReduceResponse),
    Lambda(LambdaResponse),
    Summary(TextSummary),
    Pipeline(PipelineResult),
}

impl Response {
    pub fn into_envelope(self) -> Success<Self> {
        Success::new(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Success::new(self))
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Success::new(self))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: TextAnalysis,
    /// Top words, most frequent first.
    pub word_frequencies: FrequencyTable,
    pub total_word_length: usize,
    /// Total length of the words at or above the long-word length.
    pub long_words_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResponse {
    pub original: String,
    pub transformed: String,
    pub transformed_words: Vec<String>,
    pub transformation_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvancedTransformResponse {
    pub original: String,
    pub processed: String,
    pub piped: String,
    pub composed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterResponse {
    pub original: String,
    pub filtered_by_min_length: Vec<String>,
    pub filtered_by_range: Vec<String>,
    pub sorted_by_length: Vec<String>,
    /// `null` unless duplicates were requested removed.
    pub unique_words: Option<Vec<String>>,
    pub long_words_total_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFilterReduceResponse {
    pub map_results: MapResults,
    pub filter_results: FilterResults,
    pub reduce_results: ReduceResults,
    pub combined_results: CombinedResults,
    pub complex_processing: ComplexProcessing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapResults {
    pub uppercased_words: Vec<String>,
    pub word_lengths: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterResults {
    pub long_words: Vec<String>,
    pub short_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReduceResults {
    pub total_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedResults {
    pub long_words_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexProcessing {
    pub word_frequencies: FrequencyTable,
    pub top_words: FrequencyTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LambdaResponse {
    pub lambda_transformations: LambdaTransformations,
    pub sorted_by_length: Vec<String>,
    pub sorted_by_length_desc: Vec<String>,
    pub sorted_alphabetically: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LambdaTransformations {
    pub uppercase: String,
    pub lowercase: String,
    pub double: String,
    pub square_length: Vec<usize>,
}
