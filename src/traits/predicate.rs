// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

/// A pure text-to-boolean function value, used for validators and word filters.
pub trait TextPredicate: Send + Sync {
    fn test(&self, text: &str) -> bool;
}

impl<F> TextPredicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn test(&self, text: &str) -> bool {
        self(text)
    }
}

/// Shared, storable handle to a predicate.
pub type Predicate = Arc<dyn TextPredicate>;
