// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use super::request::Request;
use super::response::*;
use crate::combinators::{compose, pipe, remove_duplicates_sorted, sort_by_criteria, SortCriteria};
use crate::config::consts::{
    ANALYZE_TOP_WORDS, DEFAULT_LONG_WORD_LENGTH, LONG_WORD_THRESHOLD, MAP_FILTER_REDUCE_TOP_WORDS,
    SHORT_WORD_MAX_LENGTH,
};
use crate::config::load_and_validate_pipeline_config;
use crate::config::PipelineConfig;
use crate::errors::ServiceError;
use crate::factories::{ProcessorConfig, ProcessorFactory};
use crate::observability::messages::service::{RequestCompleted, RequestReceived, RequestRejected};
use crate::observability::messages::StructuredLog;
use crate::stats::{
    analyze, filter_words_by_length, filter_words_in_range, split_words, sum_length_of_words_at_least,
    summarize, top_words, total_word_length, transform_words, word_frequencies, word_len,
    FrequencyTable,
};
use crate::traits::{TextTransform, Transform};
use crate::transforms::{default_registry, BuiltinTransform};

/// Handle one request, rejecting blank text before any core call.
pub fn handle(request: &Request) -> Result<Response, ServiceError> {
    let operation = request.operation();
    let text = request.text();

    let received = RequestReceived {
        operation,
        text_size: text.len(),
    };
    let span = received.span("service_request");
    let _guard = span.enter();
    received.log();

    if text.trim().is_empty() {
        let error = ServiceError::EmptyText;
        RequestRejected {
            operation,
            error: &error,
        }
        .log();
        return Err(error);
    }

    let start_time = Instant::now();
    let response = dispatch(request);

    RequestCompleted {
        operation,
        duration: start_time.elapsed(),
    }
    .log();

    Ok(response)
}

/// Parse a JSON request body, then [`handle`] it.
pub fn handle_json(body: &str) -> Result<Response, ServiceError> {
    let request: Request = serde_json::from_str(body).map_err(|error| {
        let error = ServiceError::InvalidRequest(error);
        RequestRejected {
            operation: "unknown",
            error: &error,
        }
        .log();
        error
    })?;
    handle(&request)
}

/// Load a pipeline config file and run it over `text` as a `pipeline` request.
pub fn run_pipeline_file<P: AsRef<Path>>(path: P, text: &str) -> Result<Response, ServiceError> {
    let pipeline = load_and_validate_pipeline_config(path, default_registry())?;
    handle(&Request::Pipeline {
        text: text.to_string(),
        pipeline,
    })
}

fn dispatch(request: &Request) -> Response {
    match request {
        Request::Analyze { text } => Response::Analyze(analyze_text(text)),
        Request::Transform {
            text,
            transformation,
        } => Response::Transform(transform_text(text, transformation)),
        Request::TransformAdvanced { text, config } => {
            Response::TransformAdvanced(transform_advanced(text, config))
        }
        Request::Filter {
            text,
            min_length,
            max_length,
            remove_duplicates,
        } => Response::Filter(filter_text(text, *min_length, *max_length, *remove_duplicates)),
        Request::MapFilterReduce { text } => Response::MapFilterReduce(map_filter_reduce(text)),
        Request::Lambda { text } => Response::Lambda(lambda_demo(text)),
        Request::Summary { text, min_length } => Response::Summary(summarize(text, *min_length)),
        Request::Pipeline { text, pipeline } => Response::Pipeline(run_pipeline(text, pipeline)),
    }
}

fn owned(words: Vec<&str>) -> Vec<String> {
    words.into_iter().map(str::to_string).collect()
}

fn builtin(transform: BuiltinTransform) -> Transform {
    Arc::new(transform)
}

fn analyze_text(text: &str) -> AnalyzeResponse {
    AnalyzeResponse {
        analysis: analyze(text),
        word_frequencies: top_words(text, ANALYZE_TOP_WORDS).into_iter().collect(),
        total_word_length: total_word_length(text),
        long_words_count: sum_length_of_words_at_least(text, DEFAULT_LONG_WORD_LENGTH),
    }
}

fn transform_text(text: &str, transformation_type: &str) -> TransformResponse {
    let transformation = default_registry().lookup(transformation_type);
    TransformResponse {
        original: text.to_string(),
        transformed: transformation.transform(text),
        transformed_words: transform_words(text, transformation.as_ref()),
        transformation_type: transformation_type.to_string(),
    }
}

fn transform_advanced(text: &str, config: &ProcessorConfig) -> AdvancedTransformResponse {
    let processor = ProcessorFactory::create(config.clone());
    let piped = pipe(
        text,
        &[
            builtin(BuiltinTransform::Strip),
            builtin(BuiltinTransform::Lowercase),
            builtin(BuiltinTransform::Capitalize),
        ],
    );
    let composed = compose([
        builtin(BuiltinTransform::Strip),
        builtin(BuiltinTransform::Lowercase),
        builtin(BuiltinTransform::Title),
    ]);

    AdvancedTransformResponse {
        original: text.to_string(),
        processed: processor.transform(text),
        piped,
        composed: composed.transform(text),
    }
}

fn filter_text(
    text: &str,
    min_length: usize,
    max_length: usize,
    remove_duplicates: bool,
) -> FilterResponse {
    FilterResponse {
        original: text.to_string(),
        filtered_by_min_length: owned(filter_words_by_length(text, min_length)),
        filtered_by_range: owned(filter_words_in_range(text, min_length, max_length)),
        sorted_by_length: owned(sort_by_criteria(text, SortCriteria::Length)),
        unique_words: remove_duplicates.then(|| owned(remove_duplicates_sorted(text))),
        long_words_total_length: sum_length_of_words_at_least(text, min_length),
    }
}

fn map_filter_reduce(text: &str) -> MapFilterReduceResponse {
    let words = split_words(text);

    MapFilterReduceResponse {
        map_results: MapResults {
            uppercased_words: words.iter().map(|w| w.to_uppercase()).collect(),
            word_lengths: words.iter().map(|w| word_len(w)).collect(),
        },
        filter_results: FilterResults {
            long_words: owned(
                words
                    .iter()
                    .copied()
                    .filter(|w| word_len(w) > LONG_WORD_THRESHOLD)
                    .collect(),
            ),
            short_words: owned(
                words
                    .iter()
                    .copied()
                    .filter(|w| word_len(w) <= SHORT_WORD_MAX_LENGTH)
                    .collect(),
            ),
        },
        reduce_results: ReduceResults {
            total_length: total_word_length(text),
        },
        combined_results: CombinedResults {
            long_words_count: sum_length_of_words_at_least(text, DEFAULT_LONG_WORD_LENGTH),
        },
        complex_processing: ComplexProcessing {
            word_frequencies: word_frequencies(text),
            top_words: top_words(text, MAP_FILTER_REDUCE_TOP_WORDS)
                .into_iter()
                .collect::<FrequencyTable>(),
        },
    }
}

fn lambda_demo(text: &str) -> LambdaResponse {
    let words = split_words(text);

    let mut by_length = words.clone();
    by_length.sort_by_key(|w| word_len(w));

    LambdaResponse {
        lambda_transformations: LambdaTransformations {
            uppercase: text.to_uppercase(),
            lowercase: text.to_lowercase(),
            double: words
                .iter()
                .map(|w| w.repeat(2))
                .collect::<Vec<_>>()
                .join(" "),
            square_length: words.iter().map(|w| word_len(w).pow(2)).collect(),
        },
        sorted_by_length: owned(by_length),
        sorted_by_length_desc: owned(sort_by_criteria(text, SortCriteria::LengthDesc)),
        sorted_alphabetically: owned(sort_by_criteria(text, SortCriteria::Alphabetical)),
    }
}

fn run_pipeline(text: &str, config: &PipelineConfig) -> crate::engine::PipelineResult {
    config.build(default_registry()).run(text)
}
