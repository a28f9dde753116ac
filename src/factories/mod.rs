// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Factories that turn declarative configuration into function values.
//!
//! Each factory reads a fixed set of recognized options, ignores everything
//! else, and returns an owned struct that captures the configuration and
//! implements one of the callable traits in [`crate::traits`]. The factories
//! themselves never touch text.
//!
//! ```text
//! Configuration → Factory → Function value → Pipeline
//! ```

pub mod counter;
pub mod processor;
pub mod validator;
pub mod word_filter;

pub use counter::Counter;
pub use processor::{CaseMode, ProcessorConfig, ProcessorFactory, TextProcessor};
pub use validator::{TextValidator, ValidationRules, ValidatorFactory};
pub use word_filter::WordRangeFilter;
