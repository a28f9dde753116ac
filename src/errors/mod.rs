// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised at the edges of the crate.
//!
//! Core operations never fail. Errors only come from reading pipeline
//! configs and from requests rejected at the service boundary.

mod config;
mod service;

pub use config::ConfigError;
pub use service::ServiceError;
