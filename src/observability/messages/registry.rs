// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for registry and option fallbacks.
//!
//! None of these are failures: an unknown name always degrades to a
//! well-defined default. They are logged so a misspelled config is visible.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A transformation name was not found and resolved to identity.
///
/// # Log Level
/// `warn!` - Degraded behavior, not an error
///
/// # Example
/// ```
/// use textsmith::observability::messages::registry::UnknownTransformation;
///
/// let msg = UnknownTransformation { name: "sparkle" };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct UnknownTransformation<'a> {
    pub name: &'a str,
}

impl Display for UnknownTransformation<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unknown transformation '{}', falling back to identity",
            self.name
        )
    }
}

impl StructuredLog for UnknownTransformation<'_> {
    fn log(&self) {
        tracing::warn!(transformation = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            transformation = self.name,
        )
    }
}

/// A sort criteria was not recognized; words are returned unsorted.
///
/// # Log Level
/// `warn!` - Degraded behavior, not an error
pub struct UnknownSortCriteria<'a> {
    pub criteria: &'a str,
}

impl Display for UnknownSortCriteria<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unknown sort criteria '{}', returning words unsorted",
            self.criteria
        )
    }
}

impl StructuredLog for UnknownSortCriteria<'_> {
    fn log(&self) {
        tracing::warn!(criteria = self.criteria, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            criteria = self.criteria,
        )
    }
}
