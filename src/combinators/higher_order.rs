// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Keep the items for which `predicate` holds.
pub fn filter_by<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Apply `f` to every item.
pub fn map_by<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(f).collect()
}
