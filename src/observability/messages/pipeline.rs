// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline runs.
//!
//! This module contains message types for logging events related to:
//! * Pipeline run start, with the size of each step collection
//! * Validation short-circuits
//! * Pipeline completion

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Pipeline run started.
///
/// # Log Level
/// `debug!` - Per-call detail
///
/// # Example
/// ```
/// use textsmith::observability::messages::pipeline::PipelineRunStarted;
///
/// let msg = PipelineRunStarted {
///     input_size: 42,
///     validator_count: 1,
///     transformer_count: 2,
///     filter_count: 0,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct PipelineRunStarted {
    pub input_size: usize,
    pub validator_count: usize,
    pub transformer_count: usize,
    pub filter_count: usize,
}

impl Display for PipelineRunStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline run started: input_size={} bytes, validators={}, transformers={}, filters={}",
            self.input_size, self.validator_count, self.transformer_count, self.filter_count
        )
    }
}

impl StructuredLog for PipelineRunStarted {
    fn log(&self) {
        tracing::debug!(
            input_size = self.input_size,
            validator_count = self.validator_count,
            transformer_count = self.transformer_count,
            filter_count = self.filter_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            input_size = self.input_size,
            validator_count = self.validator_count,
            transformer_count = self.transformer_count,
            filter_count = self.filter_count,
        )
    }
}

/// A validator rejected the input; transformers and filters were skipped.
///
/// # Log Level
/// `info!` - Expected outcome that callers usually want to see
pub struct PipelineValidationFailed {
    /// Zero-based position of the first validator that returned false.
    pub validator_index: usize,
    pub input_size: usize,
}

impl Display for PipelineValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline input rejected by validator #{}: input_size={} bytes",
            self.validator_index, self.input_size
        )
    }
}

impl StructuredLog for PipelineValidationFailed {
    fn log(&self) {
        tracing::info!(
            validator_index = self.validator_index,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            validator_index = self.validator_index,
            input_size = self.input_size,
        )
    }
}

/// Pipeline run completed.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct PipelineRunCompleted {
    pub output_size: usize,
    pub retained_words: usize,
    pub duration: Duration,
}

impl Display for PipelineRunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline run completed: output_size={} bytes, retained_words={}, duration={:?}",
            self.output_size, self.retained_words, self.duration
        )
    }
}

impl StructuredLog for PipelineRunCompleted {
    fn log(&self) {
        tracing::debug!(
            output_size = self.output_size,
            retained_words = self.retained_words,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            output_size = self.output_size,
            retained_words = self.retained_words,
        )
    }
}
