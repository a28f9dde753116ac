// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the request/response boundary.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A request reached the service layer.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use textsmith::observability::messages::service::RequestReceived;
///
/// let msg = RequestReceived { operation: "analyze", text_size: 128 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RequestReceived<'a> {
    pub operation: &'a str,
    pub text_size: usize,
}

impl Display for RequestReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Request '{}' received: text_size={} bytes",
            self.operation, self.text_size
        )
    }
}

impl StructuredLog for RequestReceived<'_> {
    fn log(&self) {
        tracing::info!(operation = self.operation, text_size = self.text_size, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            operation = self.operation,
            text_size = self.text_size,
        )
    }
}

/// A request was rejected before reaching the core.
///
/// # Log Level
/// `warn!` - Client error
pub struct RequestRejected<'a> {
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RequestRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Request '{}' rejected: {}", self.operation, self.error)
    }
}

impl StructuredLog for RequestRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            operation = self.operation,
            error = %self.error,
        )
    }
}

/// A request was handled.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RequestCompleted<'a> {
    pub operation: &'a str,
    pub duration: Duration,
}

impl Display for RequestCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Request '{}' completed: duration={:?}",
            self.operation, self.duration
        )
    }
}

impl StructuredLog for RequestCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            operation = self.operation,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            operation = self.operation,
        )
    }
}
