// RG - rg-intercept
// Module: Boundary Messages
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Messages and replies that travel a boundary's sink chain.
//!
//! Synchronous method calls are validated on their way to the target. Raw
//! messages and posted messages pass the validation sink unchanged.

use rg_error::{Error, Result};
use rg_foundation::Value;

/// A method invocation crossing the boundary
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// Target method name
    pub method: String,
    /// Arguments in parameter order
    pub args: Vec<Value>,
}

/// Any other message crossing the boundary
///
/// Raw messages are not method invocations, so range validation never
/// applies to them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMessage {
    /// Application-defined message kind
    pub kind: String,
    /// Message payload
    pub payload: Vec<Value>,
}

impl RawMessage {
    /// Create a raw message
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: Vec<Value>) -> Self {
        Self { kind: kind.into(), payload }
    }
}

/// A message travelling through a sink chain
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A method call
    Call(MethodCall),
    /// A non-call message
    Raw(RawMessage),
}

impl Message {
    /// A method call message
    #[must_use]
    pub fn call(method: impl Into<String>, args: Vec<Value>) -> Self {
        Self::Call(MethodCall { method: method.into(), args })
    }

    /// A raw message
    #[must_use]
    pub fn raw(kind: impl Into<String>, payload: Vec<Value>) -> Self {
        Self::Raw(RawMessage::new(kind, payload))
    }

    /// The call carried by this message, if it is one
    #[must_use]
    pub fn as_call(&self) -> Option<&MethodCall> {
        match self {
            Self::Call(call) => Some(call),
            Self::Raw(_) => None,
        }
    }
}

/// The answer to a synchronously processed message
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Returned value or failure
    pub result: Result<Value>,
}

impl Reply {
    /// A successful reply
    #[must_use]
    pub fn ok(value: Value) -> Self {
        Self { result: Ok(value) }
    }

    /// A failed reply
    #[must_use]
    pub fn failed(error: Error) -> Self {
        Self { result: Err(error) }
    }

    /// `true` if the reply carries an error
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    /// Unwrap into the carried result
    ///
    /// # Errors
    ///
    /// Returns the carried error for a failed reply.
    pub fn into_result(self) -> Result<Value> {
        self.result
    }
}

impl From<Result<Value>> for Reply {
    fn from(result: Result<Value>) -> Self {
        Self { result }
    }
}

/// Callback receiving the reply to an asynchronously processed message
pub type ReplyHandler = Box<dyn FnOnce(Reply) + Send>;
