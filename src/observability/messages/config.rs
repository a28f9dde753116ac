// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline config loading and checking.

use crate::config::ConfigWarning;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline config loaded from disk.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineConfigLoaded<'a> {
    pub path: &'a str,
    pub validator_count: usize,
    pub transformation_count: usize,
    pub filter_count: usize,
}

impl Display for PipelineConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline config '{}' loaded: validators={}, transformations={}, filters={}",
            self.path, self.validator_count, self.transformation_count, self.filter_count
        )
    }
}

impl StructuredLog for PipelineConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            validator_count = self.validator_count,
            transformation_count = self.transformation_count,
            filter_count = self.filter_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            path = self.path,
        )
    }
}

/// Pipeline config could not be read or parsed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PipelineConfigFailed<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for PipelineConfigFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipeline config '{}' failed to load: {}", self.path, self.error)
    }
}

impl StructuredLog for PipelineConfigFailed<'_> {
    fn log(&self) {
        tracing::error!(path = self.path, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            path = self.path,
            error = %self.error,
        )
    }
}

/// A pipeline config check found something that will run, but not usefully.
///
/// # Log Level
/// `warn!` - Degraded behavior, not an error
pub struct PipelineConfigWarning<'a> {
    pub warning: &'a ConfigWarning,
}

impl Display for PipelineConfigWarning<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipeline config warning: {}", self.warning)
    }
}

impl StructuredLog for PipelineConfigWarning<'_> {
    fn log(&self) {
        tracing::warn!(kind = self.warning.kind(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            kind = self.warning.kind(),
        )
    }
}
