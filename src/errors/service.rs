// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::ConfigError;

/// Errors returned by the request/response boundary.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request text was empty or whitespace-only.
    #[error("Please provide a text")]
    EmptyText,

    /// The request body could not be parsed.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// A pipeline config referenced by the request could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ServiceError {
    /// HTTP-style status code for the error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::EmptyText | ServiceError::InvalidRequest(_) => 400,
            ServiceError::Config(_) => 500,
        }
    }
}
