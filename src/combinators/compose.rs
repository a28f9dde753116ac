// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::traits::{TextTransform, Transform};
use crate::transforms::TransformationRegistry;

/// Fold `fns` over `text` left to right, each output feeding the next input.
pub fn apply_sequence(text: &str, fns: &[Transform]) -> String {
    fns.iter()
        .fold(text.to_string(), |acc, f| f.transform(&acc))
}

/// Same as [`apply_sequence`]; reads better at call sites that build the list inline.
pub fn pipe(text: &str, fns: &[Transform]) -> String {
    apply_sequence(text, fns)
}

/// Build one reusable function value out of `fns`, applied left to right.
pub fn compose<I>(fns: I) -> TransformChain
where
    I: IntoIterator<Item = Transform>,
{
    TransformChain::new(fns.into_iter().collect())
}

/// An ordered chain of transformations behaving as a single transformation.
#[derive(Clone, Default)]
pub struct TransformChain {
    steps: Vec<Transform>,
}

impl TransformChain {
    pub fn new(steps: Vec<Transform>) -> Self {
        Self { steps }
    }

    /// Resolve each name through `registry`; unknown names become identity steps.
    pub fn from_names<S: AsRef<str>>(registry: &TransformationRegistry, names: &[S]) -> Self {
        Self::new(names.iter().map(|n| registry.lookup(n.as_ref())).collect())
    }

    /// Append a step and return the chain, for builder-style construction.
    pub fn then(mut self, step: Transform) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Wrap the chain so it can be stored next to other transformations.
    pub fn into_transform(self) -> Transform {
        Arc::new(self)
    }
}

impl TextTransform for TransformChain {
    fn transform(&self, text: &str) -> String {
        apply_sequence(text, &self.steps)
    }

    fn name(&self) -> &str {
        "chain"
    }
}

impl std::fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformChain")
            .field("steps", &self.steps.iter().map(|s| s.name()).collect::<Vec<_>>())
            .finish()
    }
}
