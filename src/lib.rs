// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod combinators;   // compose, pipe, sort helpers
pub mod config;        // pipeline config + loader
pub mod engine;        // pipeline runner
pub mod errors;        // error handling
pub mod factories;     // closure-style processors and validators
pub mod observability;
pub mod service;       // request/response boundary
pub mod stats;         // statistics engine
pub mod traits;        // unified abstractions
pub mod transforms;    // transformation registry
