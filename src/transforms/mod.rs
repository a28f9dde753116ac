// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Named text-to-text transformations.
//!
//! [`registry::TransformationRegistry`] maps identifiers such as `uppercase`
//! or `strip` to [`crate::traits::Transform`] values. Lookup never fails:
//! unknown names resolve to [`BuiltinTransform::Identity`].

pub mod builtin;
pub mod case;
pub mod registry;

pub use builtin::BuiltinTransform;
pub use registry::{default_registry, lookup, TransformationRegistry};
