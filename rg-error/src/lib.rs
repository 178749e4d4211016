// RG - rg-error
// Module: Range Guard Error Handling
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Range Guard error handling library
//!
//! This library provides the error type shared by every Range Guard crate.
//! Errors carry a category, a numeric code and a static message, and may
//! carry a structured detail describing *where* the failure happened.
//!
//! # Error Categories
//!
//! ## Range Errors (1000-1999)
//! - Argument out of its declared range
//! - Return value out of its declared range
//!
//! ## Metadata Errors (2000-2999)
//! - Duplicate range descriptors on one call position
//! - Bound type does not match the declared position type
//! - Bounds that cannot be compared or are inverted
//! - Unknown methods or parameters
//!
//! ## Dispatch Errors (3000-3999)
//! - Unknown method on a dynamic target
//! - Argument count mismatch
//! - Unsupported message kinds
//!
//! ## Type Errors (4000-4999) and Runtime Errors (5000-5999)
//!
//! # Usage
//!
//! ```
//! use rg_error::{codes, CallPosition, Error, ErrorCategory, RangeViolation};
//!
//! let error = Error::new(ErrorCategory::Runtime, codes::RUNTIME_ERROR, "Division by zero");
//! assert!(error.is_runtime_error());
//!
//! let violation = Error::range_violation(RangeViolation::parameter("sector_area", "angle", 1, "-0.5"));
//! assert_eq!(violation.code, codes::PARAMETER_OUT_OF_RANGE);
//! assert_eq!(
//!     violation.violation().map(|v| v.position.clone()),
//!     Some(CallPosition::parameter("angle", 1))
//! );
//! ```

#![forbid(unsafe_code)] // Rule 2
#![warn(clippy::missing_panics_doc)]
#![warn(missing_docs)]

/// Error codes for Range Guard
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory};
pub use kinds::{CallPosition, ErrorDetail, RangeViolation};

/// A specialized `Result` type for Range Guard operations.
pub type Result<T> = core::result::Result<T, Error>;
