// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request/response boundary over the core.
//!
//! Requests are tagged by `operation`. Blank text is rejected here with
//! [`crate::errors::ServiceError::EmptyText`] before any core function runs;
//! everything past that point is infallible.

mod handler;
mod request;
mod response;

pub use handler::{handle, handle_json, run_pipeline_file};
pub use request::Request;
pub use response::{
    AdvancedTransformResponse, AnalyzeResponse, CombinedResults, ComplexProcessing,
    FilterResponse, FilterResults, LambdaResponse, LambdaTransformations, MapFilterReduceResponse,
    MapResults, ReduceResults, Response, Success, TransformResponse,
};
