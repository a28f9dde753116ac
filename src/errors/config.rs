// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a pipeline config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read pipeline config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for a pipeline config.
    #[error("Invalid YAML pipeline config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file is not valid TOML for a pipeline config.
    #[error("Invalid TOML pipeline config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension is neither YAML nor TOML.
    #[error("Unsupported pipeline config format '{extension}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat { extension: String },
}
