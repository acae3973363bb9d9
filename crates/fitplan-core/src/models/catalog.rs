// ABOUTME: Read-only catalog snapshot shared by every plan request
// ABOUTME: Explicit Available/Unavailable state instead of a missing global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::sync::Arc;

/// Immutable reference catalog (foods or exercises)
///
/// Built once at start-up and cloned cheaply into every request. An
/// `Unavailable` catalog behaves exactly like an empty one: every query
/// against it yields no candidates.
#[derive(Debug)]
pub enum CatalogSnapshot<T> {
    /// Catalog loaded; items keep their insertion order
    Available(Arc<[T]>),
    /// Catalog could not be loaded
    Unavailable,
}

impl<T> CatalogSnapshot<T> {
    /// Wrap loaded items
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self::Available(Arc::from(items))
    }

    /// Catalog that was never loaded
    #[must_use]
    pub const fn unavailable() -> Self {
        Self::Unavailable
    }

    /// Items in insertion order; empty when unavailable
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Available(items) => items,
            Self::Unavailable => &[],
        }
    }

    /// Whether the catalog was loaded
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// True when there is nothing to rank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl<T> Clone for CatalogSnapshot<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Available(items) => Self::Available(Arc::clone(items)),
            Self::Unavailable => Self::Unavailable,
        }
    }
}

impl<T> Default for CatalogSnapshot<T> {
    fn default() -> Self {
        Self::Unavailable
    }
}
