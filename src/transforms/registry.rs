// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

use super::builtin::BuiltinTransform;
use crate::observability::messages::{registry::UnknownTransformation, StructuredLog};
use crate::traits::Transform;

static DEFAULT_REGISTRY: Lazy<TransformationRegistry> = Lazy::new(TransformationRegistry::builtin);

/// Identifier → transformation table.
///
/// The process-wide instance from [`default_registry`] is built once and never
/// mutated afterwards. Custom registries can be assembled with
/// [`TransformationRegistry::register`] before they are shared.
#[derive(Clone)]
pub struct TransformationRegistry {
    entries: HashMap<String, Transform>,
    identity: Transform,
}

impl TransformationRegistry {
    /// An empty registry; every lookup resolves to identity.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            identity: Arc::new(BuiltinTransform::Identity),
        }
    }

    /// Registry holding every [`BuiltinTransform`] except identity.
    pub fn builtin() -> Self {
        BuiltinTransform::ALL
            .into_iter()
            .filter(|t| *t != BuiltinTransform::Identity)
            .fold(Self::new(), |mut registry, t| {
                registry.register(t.id(), Arc::new(t));
                registry
            })
    }

    pub fn register(&mut self, name: impl Into<String>, transform: Transform) {
        self.entries.insert(name.into(), transform);
    }

    pub fn get(&self, name: &str) -> Option<Transform> {
        self.entries.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Resolve `name`, falling back to identity for unknown names.
    pub fn lookup(&self, name: &str) -> Transform {
        match self.entries.get(name) {
            Some(transform) => Arc::clone(transform),
            None => {
                UnknownTransformation { name }.log();
                Arc::clone(&self.identity)
            }
        }
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TransformationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for TransformationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformationRegistry")
            .field("transformations", &self.names())
            .finish()
    }
}

pub fn default_registry() -> &'static TransformationRegistry {
    &DEFAULT_REGISTRY
}

/// [`TransformationRegistry::lookup`] against the default registry.
pub fn lookup(name: &str) -> Transform {
    default_registry().lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_names() {
        assert_eq!(
            default_registry().names(),
            vec!["capitalize", "lowercase", "reverse", "strip", "title", "uppercase"]
        );
    }

    #[test]
    fn test_lookup_known_names() {
        let test_cases = vec![
            ("uppercase", "Hello", "HELLO"),
            ("lowercase", "Hello", "hello"),
            ("capitalize", "hELLO there", "Hello there"),
            ("title", "hello there", "Hello There"),
            ("strip", "  hello  ", "hello"),
            ("reverse", "abc", "cba"),
        ];

        for (name, input, expected) in test_cases {
            assert_eq!(lookup(name).transform(input), expected, "Failed for: {}", name);
            assert_eq!(lookup(name).name(), name);
        }
    }

    #[test]
    fn test_unknown_name_is_identity() {
        for text in ["", "  keep  me  ", "MiXeD"] {
            assert_eq!(lookup("nonexistent-key").transform(text), text);
        }
        assert_eq!(lookup("").name(), "identity");
        // The identity entry itself is not addressable by name.
        assert!(!default_registry().contains("identity"));
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = TransformationRegistry::new();
        assert_eq!(registry.lookup("uppercase").transform("abc"), "abc");

        registry.register("shout", Arc::new(|s: &str| format!("{}!", s.to_uppercase())));
        assert!(registry.contains("shout"));
        assert_eq!(registry.lookup("shout").transform("hi"), "HI!");
        assert!(registry.get("missing").is_none());
    }
}
