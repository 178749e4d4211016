// RG - rg-error
// Module: Range Guard Error Kinds
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Structured error details.
//!
//! A plain [`Error`](crate::Error) says *what* went wrong. The kinds in this
//! module say *where*: which method, which call position, which value.

use core::fmt::{self, Display};

/// A parameter slot or the return slot of a method
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallPosition {
    /// A parameter, by declared name and 0-based index
    Parameter {
        /// Declared parameter name
        name:  String,
        /// 0-based position in the parameter list
        index: usize,
    },
    /// The return value of the method
    Return,
}

impl CallPosition {
    /// Create a parameter position
    #[must_use]
    pub fn parameter(name: impl Into<String>, index: usize) -> Self {
        Self::Parameter { name: name.into(), index }
    }

    /// Check if this is the return position
    #[must_use]
    pub fn is_return(&self) -> bool {
        matches!(self, Self::Return)
    }
}

impl Display for CallPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter { name, index } => write!(f, "parameter `{name}` (position {index})"),
            Self::Return => f.write_str("return value"),
        }
    }
}

/// An argument or return value that failed its declared range constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeViolation {
    /// Name of the intercepted method
    pub method:   String,
    /// Where the offending value was observed
    pub position: CallPosition,
    /// The offending value rendered as text
    pub value:    String,
}

impl RangeViolation {
    /// Violation of a parameter constraint
    #[must_use]
    pub fn parameter(
        method: impl Into<String>,
        name: impl Into<String>,
        index: usize,
        value: impl Into<String>,
    ) -> Self {
        Self {
            method:   method.into(),
            position: CallPosition::parameter(name, index),
            value:    value.into(),
        }
    }

    /// Violation of a return constraint
    #[must_use]
    pub fn return_value(method: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            method:   method.into(),
            position: CallPosition::Return,
            value:    value.into(),
        }
    }

    /// Name of the offending parameter, `None` for return values
    #[must_use]
    pub fn parameter_name(&self) -> Option<&str> {
        match &self.position {
            CallPosition::Parameter { name, .. } => Some(name),
            CallPosition::Return => None,
        }
    }

    /// Index of the offending parameter, `None` for return values
    #[must_use]
    pub fn parameter_index(&self) -> Option<usize> {
        match self.position {
            CallPosition::Parameter { index, .. } => Some(index),
            CallPosition::Return => None,
        }
    }
}

impl Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of `{}` out of declared range: {}",
            self.position, self.method, self.value
        )
    }
}

/// Structured detail attached to an [`Error`](crate::Error)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    /// A range violation
    Range(RangeViolation),
    /// Malformed metadata on a method or call position
    Metadata {
        /// Method the metadata was declared on
        method:   String,
        /// Offending position, if the fault is position-specific
        position: Option<CallPosition>,
    },
    /// Free-form context
    Context(String),
}

impl Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(violation) => violation.fmt(f),
            Self::Metadata { method, position: Some(position) } => {
                write!(f, "{position} of `{method}`")
            },
            Self::Metadata { method, position: None } => write!(f, "method `{method}`"),
            Self::Context(context) => f.write_str(context),
        }
    }
}
