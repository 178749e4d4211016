// RG - rg-error
// Module: Range Guard Error Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for rg-error
//!
//! Re-exports the error types and codes so downstream crates can pull them
//! in with a single glob import.

pub use crate::{
    codes,
    kinds::{self, CallPosition, ErrorDetail, RangeViolation},
    Error,
    ErrorCategory,
    Result,
};
