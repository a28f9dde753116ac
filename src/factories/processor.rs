// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::stats::{join_words, split_words, word_len};
use crate::traits::TextTransform;

/// Case change applied by a [`TextProcessor`] before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "String")]
pub enum CaseMode {
    #[serde(rename = "upper")]
    Upper,
    #[serde(rename = "lower")]
    Lower,
    /// Leave case alone. Unrecognized modes also land here.
    #[default]
    #[serde(rename = "none")]
    Unchanged,
}

impl From<String> for CaseMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "upper" => CaseMode::Upper,
            "lower" => CaseMode::Lower,
            _ => CaseMode::Unchanged,
        }
    }
}

/// Options recognized by [`ProcessorFactory::create`].
///
/// Missing keys take their defaults and unknown keys are ignored.
///
/// # Example
/// ```yaml
/// case: upper
/// remove_spaces: false
/// min_length: 4
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessorConfig {
    pub case: CaseMode,
    pub remove_spaces: bool,
    pub min_length: usize,
}

/// Factory for configured text processors.
pub struct ProcessorFactory;

impl ProcessorFactory {
    /// Capture `config` in a reusable processor. No text is processed here.
    pub fn create(config: ProcessorConfig) -> TextProcessor {
        TextProcessor { config }
    }
}

/// Text processor built by [`ProcessorFactory`].
///
/// On each call: change case, optionally drop every U+0020, split into words,
/// keep words of at least `min_length` characters, rejoin with single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextProcessor {
    config: ProcessorConfig,
}

impl TextProcessor {
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}

impl TextTransform for TextProcessor {
    fn transform(&self, text: &str) -> String {
        let cased = match self.config.case {
            CaseMode::Upper => text.to_uppercase(),
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Unchanged => text.to_string(),
        };

        let spaced = if self.config.remove_spaces {
            cased.replace(' ', "")
        } else {
            cased
        };

        let kept: Vec<&str> = split_words(&spaced)
            .into_iter()
            .filter(|word| word_len(word) >= self.config.min_length)
            .collect();

        join_words(&kept)
    }

    fn name(&self) -> &str {
        "text_processor"
    }
}
