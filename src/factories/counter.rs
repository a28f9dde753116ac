// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicUsize, Ordering};

/// Stateful counter closure.
///
/// The cell is private; the only mutation is [`Counter::increment`], which
/// adds one and returns the new value in a single atomic step.
#[derive(Debug, Default)]
pub struct Counter {
    count: AtomicUsize,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the new count. The first call returns 1.
    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
