// RG - rg-intercept
// Module: Interception Configuration
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Configuration for the interception layer

/// What to do when more than one range descriptor targets the same call
/// position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail registration with a malformed metadata error
    #[default]
    Reject,
    /// Keep the descriptor registered first, ignore later ones
    KeepFirst,
    /// Keep the descriptor registered last
    KeepLast,
}

/// Configuration shared by both dispatchers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptConfig {
    /// Cache resolved catalogs per method for the lifetime of the dispatcher
    pub cache_catalogs: bool,
    /// Emit a `warn` log record for every range violation
    pub log_violations: bool,
}

impl Default for InterceptConfig {
    fn default() -> Self {
        Self { cache_catalogs: true, log_violations: true }
    }
}
