// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Callable abstractions shared by registries, factories and the pipeline.

pub mod predicate;
pub mod transform;

pub use predicate::{Predicate, TextPredicate};
pub use transform::{TextTransform, Transform};
