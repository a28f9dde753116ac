// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in textsmith. Message types follow a struct-based pattern with a `Display`
//! implementation so that call sites never carry magic strings and log output stays
//! consistent.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::config` - Pipeline config loading
//! * `messages::pipeline` - Pipeline runner lifecycle
//! * `messages::registry` - Registry and criteria fallbacks
//! * `messages::service` - Request/response boundary events
//!
//! # Usage
//!
//! ```rust
//! use textsmith::observability::messages::{registry::UnknownTransformation, StructuredLog};
//!
//! let msg = UnknownTransformation { name: "sparkle" };
//! msg.log();
//! ```

pub mod messages;
