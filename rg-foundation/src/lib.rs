// RG - rg-foundation
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Core value and type definitions for Range Guard.
//!
//! Intercepted calls are described with a small dynamic value model: every
//! argument and every result travels as a [`Value`], and every declared call
//! position has a [`ValType`]. Typed code converts in and out of the model
//! through [`FromValue`] and `Into<Value>`.
//!
//! Range constraints can only be bound to types that are both representable
//! as a [`Value`] and partially ordered; [`RangeValue`] names that set.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod prelude;
/// Declared value types of call positions
pub mod types;
/// Dynamic values and conversions
pub mod values;

// Re-export error related types for convenience
pub use rg_error::{codes, Error, ErrorCategory, Result};
pub use types::ValType;
pub use values::{typed_arg, FromValue, RangeValue, Value};
