// RG - rg-error
// Module: Range Guard Error Types
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Unified error handling for Range Guard
///
/// Every error has a category, a numeric code from [`codes`] and a static
/// message. Errors raised by the interception layer itself additionally
/// carry an [`ErrorDetail`]; errors raised by target code are passed
/// through the dispatchers untouched.
use core::fmt;

use crate::{
    codes,
    kinds::{CallPosition, ErrorDetail, RangeViolation},
};

/// `Error` categories for Range Guard operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Argument or return value outside its declared range
    Range    = 1,
    /// Malformed constraint metadata, detected at registration
    Metadata = 2,
    /// Call routing errors (unknown method, arity, message kind)
    Dispatch = 3,
    /// Value type errors at typed boundaries
    Type     = 4,
    /// Errors raised by target code
    Runtime  = 5,
}

/// Range Guard `Error` type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
    detail:       Option<Box<ErrorDetail>>,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
            detail: None,
        }
    }

    /// Attach a structured detail, replacing any previous one
    #[must_use]
    pub fn with_detail(mut self, detail: ErrorDetail) -> Self {
        self.detail = Some(Box::new(detail));
        self
    }

    /// Attach free-form context
    #[must_use]
    pub fn with_context(self, context: impl Into<String>) -> Self {
        self.with_detail(ErrorDetail::Context(context.into()))
    }

    /// The structured detail, if any
    #[must_use]
    pub fn detail(&self) -> Option<&ErrorDetail> {
        self.detail.as_deref()
    }

    /// The range violation carried by this error, if it is one
    #[must_use]
    pub fn violation(&self) -> Option<&RangeViolation> {
        match self.detail() {
            Some(ErrorDetail::Range(violation)) => Some(violation),
            _ => None,
        }
    }

    // Factory methods

    /// Create a range violation error
    ///
    /// The code distinguishes parameter from return violations; the kind is
    /// the same.
    #[must_use]
    pub fn range_violation(violation: RangeViolation) -> Self {
        let code = if violation.position.is_return() {
            codes::RETURN_OUT_OF_RANGE
        } else {
            codes::PARAMETER_OUT_OF_RANGE
        };
        Self::new(
            ErrorCategory::Range,
            code,
            "Argument or return value out of declared range",
        )
        .with_detail(ErrorDetail::Range(violation))
    }

    /// Create a malformed metadata error
    #[must_use]
    pub fn malformed_metadata(
        code: u16,
        message: &'static str,
        method: impl Into<String>,
        position: Option<CallPosition>,
    ) -> Self {
        Self::new(ErrorCategory::Metadata, code, message).with_detail(ErrorDetail::Metadata {
            method: method.into(),
            position,
        })
    }

    /// Create a method not found error
    #[must_use]
    pub const fn method_not_found(message: &'static str) -> Self {
        Self::new(ErrorCategory::Dispatch, codes::METHOD_NOT_FOUND, message)
    }

    /// Create an argument count mismatch error
    #[must_use]
    pub const fn argument_count_mismatch(message: &'static str) -> Self {
        Self::new(ErrorCategory::Dispatch, codes::ARGUMENT_COUNT_MISMATCH, message)
    }

    /// Create an unsupported message error
    #[must_use]
    pub const fn unsupported_message(message: &'static str) -> Self {
        Self::new(ErrorCategory::Dispatch, codes::UNSUPPORTED_MESSAGE, message)
    }

    /// Create a type mismatch error
    #[must_use]
    pub const fn type_mismatch(message: &'static str) -> Self {
        Self::new(ErrorCategory::Type, codes::TYPE_MISMATCH, message)
    }

    /// Create a runtime error
    #[must_use]
    pub const fn runtime_error(message: &'static str) -> Self {
        Self::new(ErrorCategory::Runtime, codes::RUNTIME_ERROR, message)
    }

    /// Create a runtime execution error
    #[must_use]
    pub const fn runtime_execution_error(message: &'static str) -> Self {
        Self::new(ErrorCategory::Runtime, codes::EXECUTION_ERROR, message)
    }

    /// Create a runtime invalid argument error
    #[must_use]
    pub const fn runtime_invalid_argument(message: &'static str) -> Self {
        Self::new(ErrorCategory::Runtime, codes::INVALID_ARGUMENT, message)
    }

    /// Check if this is a range violation
    #[must_use]
    pub fn is_range_violation(&self) -> bool {
        self.category == ErrorCategory::Range
    }

    /// Check if this is a metadata error
    #[must_use]
    pub fn is_metadata_error(&self) -> bool {
        self.category == ErrorCategory::Metadata
    }

    /// Check if this is a dispatch error
    #[must_use]
    pub fn is_dispatch_error(&self) -> bool {
        self.category == ErrorCategory::Dispatch
    }

    /// Check if this is a type error
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        self.category == ErrorCategory::Type
    }

    /// Check if this is a runtime error
    #[must_use]
    pub fn is_runtime_error(&self) -> bool {
        self.category == ErrorCategory::Runtime
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}][E{:04X}] {}", self.category, self.code, self.message)?;
        if let Some(detail) = self.detail() {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_violation_codes() {
        let parameter = Error::range_violation(RangeViolation::parameter("f", "x", 0, "2"));
        assert_eq!(parameter.code, codes::PARAMETER_OUT_OF_RANGE);
        assert!(parameter.is_range_violation());

        let ret = Error::range_violation(RangeViolation::return_value("f", "2"));
        assert_eq!(ret.code, codes::RETURN_OUT_OF_RANGE);
        assert_eq!(ret.category, parameter.category);
    }

    #[test]
    fn test_display_includes_detail() {
        let error = Error::range_violation(RangeViolation::return_value("probability", "-1"));
        assert_eq!(
            error.to_string(),
            "[Range][E03E9] Argument or return value out of declared range: return value of \
             `probability` out of declared range: -1"
        );

        let plain = Error::runtime_error("boom");
        assert_eq!(plain.to_string(), "[Runtime][E1388] boom");
    }

    #[test]
    fn test_context_replaces_detail() {
        let error = Error::range_violation(RangeViolation::return_value("f", "1"))
            .with_context("while replaying");
        assert!(error.violation().is_none());
        assert_eq!(error.detail(), Some(&ErrorDetail::Context("while replaying".to_string())));
    }
}
