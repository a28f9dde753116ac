// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

/// A pure text-to-text function value.
///
/// Implemented by the registry entries, by the factory-built processors and,
/// through the blanket impl, by any `Fn(&str) -> String` closure. Every
/// implementor must be `Send + Sync` so a single value can be shared across
/// threads without coordination.
pub trait TextTransform: Send + Sync {
    fn transform(&self, text: &str) -> String;

    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> TextTransform for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn transform(&self, text: &str) -> String {
        self(text)
    }
}

/// Shared, storable handle to a transformation.
pub type Transform = Arc<dyn TextTransform>;

/// Apply a function value to text.
pub fn apply(text: &str, f: &dyn TextTransform) -> String {
    f.transform(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_transform() {
        let shout = |s: &str| format!("{}!", s);
        assert_eq!(apply("hey", &shout), "hey!");
        assert_eq!(shout.name(), "anonymous");
    }

    #[test]
    fn test_transform_stored_behind_arc() {
        let stored: Vec<Transform> = vec![
            Arc::new(|s: &str| s.to_uppercase()),
            Arc::new(|s: &str| s.replace(' ', "_")),
        ];
        let out: Vec<String> = stored.iter().map(|t| t.transform("a b")).collect();
        assert_eq!(out, vec!["A B", "a_b"]);
    }
}
