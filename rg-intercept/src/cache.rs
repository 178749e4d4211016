// RG - rg-intercept
// Module: Catalog Cache
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Per-method cache of resolved constraint catalogs.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use log::trace;

use crate::{catalog::ConstraintCatalog, registry::ConstraintRegistry};

/// Memoizes [`ConstraintRegistry::resolve`] per method name
///
/// Safe to share between threads. When two threads miss on the same method
/// at once, both resolve and the first insert wins; the registry is immutable
/// so both resolutions are equal.
#[derive(Debug, Default)]
pub struct CatalogCache {
    entries: RwLock<HashMap<String, Arc<ConstraintCatalog>>>,
}

impl CatalogCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached catalog for `method`, resolving it on first use
    pub fn get_or_resolve(
        &self,
        registry: &ConstraintRegistry,
        method: &str,
    ) -> Arc<ConstraintCatalog> {
        if let Ok(entries) = self.entries.read() {
            if let Some(catalog) = entries.get(method) {
                return Arc::clone(catalog);
            }
        }

        trace!("Catalog cache miss for `{method}`");
        let resolved = Arc::new(registry.resolve(method));

        // A poisoned lock only costs the caching, the resolution is still valid
        if let Ok(mut entries) = self.entries.write() {
            return Arc::clone(entries.entry(method.to_string()).or_insert(resolved));
        }
        resolved
    }

    /// Number of cached methods
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    /// `true` if nothing is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached catalogs
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}
