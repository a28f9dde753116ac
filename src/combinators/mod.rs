// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Combinators: functions that build or sequence other functions.
//!
//! Composition is expressed over ordered slices of function values instead of
//! variadic arguments. The order of application is always left to right, and
//! an empty sequence is a passthrough.

pub mod compose;
pub mod higher_order;
pub mod sorting;

pub use compose::{apply_sequence, compose, pipe, TransformChain};
pub use higher_order::{filter_by, map_by};
pub use sorting::{remove_duplicates_sorted, sort_by_criteria, SortCriteria};
