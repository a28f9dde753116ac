// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_pipeline_config, load_pipeline_config, parse_toml_pipeline,
    parse_yaml_pipeline, ConfigFormat, PipelineConfig, TransformStep,
};
pub use validation::{validate_pipeline_config, ConfigWarning};
