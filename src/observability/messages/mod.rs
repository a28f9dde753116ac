// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit the same message as a `tracing` event with
//! structured fields attached.

pub mod config;
pub mod pipeline;
pub mod registry;
pub mod service;

use tracing::Span;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
