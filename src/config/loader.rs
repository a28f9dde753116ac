// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::engine::Pipeline;
use crate::errors::ConfigError;
use crate::factories::{ProcessorConfig, ProcessorFactory, ValidationRules, ValidatorFactory, WordRangeFilter};
use crate::observability::messages::config::{PipelineConfigFailed, PipelineConfigLoaded};
use crate::observability::messages::StructuredLog;
use crate::traits::{Predicate, Transform};
use crate::transforms::TransformationRegistry;

/// Declarative description of a pipeline.
///
/// Every section is optional; an empty config is a passthrough pipeline.
///
/// # Example
/// ```yaml
/// validators:
///   - min_words: 2
///     required_words: [fox]
/// transformations:
///   - strip
///   - processor:
///       case: upper
///       min_length: 3
/// filters:
///   - min_length: 3
///     max_length: 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub validators: Vec<ValidationRules>,
    pub transformations: Vec<TransformStep>,
    pub filters: Vec<WordRangeFilter>,
}

/// One transformation step: a registry name or an inline processor config.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TransformStep {
    Named(String),
    Processor { processor: ProcessorConfig },
}

impl TransformStep {
    fn resolve(&self, registry: &TransformationRegistry) -> Transform {
        match self {
            TransformStep::Named(name) => registry.lookup(name),
            TransformStep::Processor { processor } => {
                Arc::new(ProcessorFactory::create(processor.clone()))
            }
        }
    }
}

impl PipelineConfig {
    /// Turn the description into function values.
    ///
    /// Unknown transformation names resolve to identity, as with any lookup.
    pub fn build(&self, registry: &TransformationRegistry) -> Pipeline {
        Pipeline {
            validators: self
                .validators
                .iter()
                .map(|rules| Arc::new(ValidatorFactory::create(rules.clone())) as Predicate)
                .collect(),
            transformers: self
                .transformations
                .iter()
                .map(|step| step.resolve(registry))
                .collect(),
            filters: self
                .filters
                .iter()
                .map(|filter| Arc::new(*filter) as Predicate)
                .collect(),
        }
    }
}

/// On-disk pipeline config formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat { extension }),
        }
    }
}

pub fn parse_yaml_pipeline(content: &str) -> Result<PipelineConfig, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn parse_toml_pipeline(content: &str) -> Result<PipelineConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load a pipeline config from a YAML or TOML file, chosen by extension.
pub fn load_pipeline_config<P: AsRef<Path>>(path: P) -> Result<PipelineConfig, ConfigError> {
    let path = path.as_ref();
    let display_path = path.display().to_string();

    let result = ConfigFormat::from_path(path).and_then(|format| {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match format {
            ConfigFormat::Yaml => parse_yaml_pipeline(&content),
            ConfigFormat::Toml => parse_toml_pipeline(&content),
        }
    });

    match &result {
        Ok(cfg) => PipelineConfigLoaded {
            path: &display_path,
            validator_count: cfg.validators.len(),
            transformation_count: cfg.transformations.len(),
            filter_count: cfg.filters.len(),
        }
        .log(),
        Err(error) => PipelineConfigFailed {
            path: &display_path,
            error,
        }
        .log(),
    }

    result
}

/// Load a pipeline config and run the config checks against `registry`.
///
/// Checks only produce warnings (logged); they never turn into errors.
pub fn load_and_validate_pipeline_config<P: AsRef<Path>>(
    path: P,
    registry: &TransformationRegistry,
) -> Result<PipelineConfig, ConfigError> {
    let cfg = load_pipeline_config(path)?;
    crate::config::validate_pipeline_config(&cfg, registry);
    Ok(cfg)
}
