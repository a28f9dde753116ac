// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::case;
use crate::traits::TextTransform;

/// The fixed set of transformations known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinTransform {
    Identity,
    Uppercase,
    Lowercase,
    Capitalize,
    Title,
    Strip,
    Reverse,
}

impl BuiltinTransform {
    pub const ALL: [BuiltinTransform; 7] = [
        BuiltinTransform::Identity,
        BuiltinTransform::Uppercase,
        BuiltinTransform::Lowercase,
        BuiltinTransform::Capitalize,
        BuiltinTransform::Title,
        BuiltinTransform::Strip,
        BuiltinTransform::Reverse,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            BuiltinTransform::Identity => "identity",
            BuiltinTransform::Uppercase => "uppercase",
            BuiltinTransform::Lowercase => "lowercase",
            BuiltinTransform::Capitalize => "capitalize",
            BuiltinTransform::Title => "title",
            BuiltinTransform::Strip => "strip",
            BuiltinTransform::Reverse => "reverse",
        }
    }
}

impl TextTransform for BuiltinTransform {
    fn transform(&self, text: &str) -> String {
        match self {
            BuiltinTransform::Identity => text.to_string(),
            BuiltinTransform::Uppercase => text.to_uppercase(),
            BuiltinTransform::Lowercase => text.to_lowercase(),
            BuiltinTransform::Capitalize => case::capitalize(text),
            BuiltinTransform::Title => case::title(text),
            BuiltinTransform::Strip => text.trim().to_string(),
            BuiltinTransform::Reverse => text.chars().rev().collect(),
        }
    }

    fn name(&self) -> &str {
        self.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_transforms() {
        let test_cases = vec![
            (BuiltinTransform::Identity, "  Mixed Case  ", "  Mixed Case  "),
            (BuiltinTransform::Uppercase, "hello", "HELLO"),
            (BuiltinTransform::Lowercase, "HELLO", "hello"),
            (BuiltinTransform::Capitalize, "hello WORLD", "Hello world"),
            (BuiltinTransform::Title, "hello world", "Hello World"),
            (BuiltinTransform::Strip, " \t hello \n", "hello"),
            (BuiltinTransform::Reverse, "hello", "olleh"),
        ];

        for (transform, input, expected) in test_cases {
            assert_eq!(transform.transform(input), expected, "Failed for: {}", transform.name());
        }
    }

    #[test]
    fn test_ids_match_serde_names() {
        for transform in BuiltinTransform::ALL {
            let serialized = serde_json::to_string(&transform).unwrap();
            assert_eq!(serialized, format!("\"{}\"", transform.id()));
        }
    }
}
