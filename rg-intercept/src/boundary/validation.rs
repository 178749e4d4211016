// RG - rg-intercept
// Module: Range Validation Sink
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Sink that enforces declared ranges on synchronous method calls.

use std::sync::Arc;

use super::{
    message::{Message, Reply, ReplyHandler},
    sink::{MessageSink, SinkProvider},
};
use crate::validate::RangeValidator;

/// Checks synchronous method calls before and after the rest of the chain
///
/// Raw messages and asynchronous messages are handed on unmodified. A failed
/// reply from further down the chain is returned as it is.
pub struct RangeValidationSink {
    next: Arc<dyn MessageSink>,
    validator: Arc<RangeValidator>,
}

impl RangeValidationSink {
    /// Validate in front of `next`
    #[must_use]
    pub fn new(next: Arc<dyn MessageSink>, validator: Arc<RangeValidator>) -> Self {
        Self { next, validator }
    }
}

impl MessageSink for RangeValidationSink {
    fn name(&self) -> &str {
        "range-validation"
    }

    fn process_sync(&self, message: Message) -> Reply {
        let call = match message {
            Message::Call(call) => call,
            other => return self.next.process_sync(other),
        };

        let catalog = self.validator.catalog(&call.method);
        if let Err(error) = self.validator.check_arguments(&catalog, &call.args) {
            return Reply::failed(error);
        }

        let reply = self.next.process_sync(Message::Call(call));
        if let Ok(value) = &reply.result {
            if let Err(error) = self.validator.check_return(&catalog, value) {
                return Reply::failed(error);
            }
        }
        reply
    }

    fn process_async(&self, message: Message, on_reply: ReplyHandler) {
        self.next.process_async(message, on_reply);
    }

    fn next_sink(&self) -> Option<&dyn MessageSink> {
        Some(&*self.next)
    }
}

impl core::fmt::Debug for RangeValidationSink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RangeValidationSink")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

/// Installs a [`RangeValidationSink`] in front of a chain
#[derive(Debug, Clone)]
pub struct RangeValidationProvider {
    validator: Arc<RangeValidator>,
}

impl RangeValidationProvider {
    /// Provider whose sinks share `validator`
    #[must_use]
    pub fn new(validator: Arc<RangeValidator>) -> Self {
        Self { validator }
    }
}

impl SinkProvider for RangeValidationProvider {
    fn create_sink(&self, next: Arc<dyn MessageSink>) -> Arc<dyn MessageSink> {
        Arc::new(RangeValidationSink::new(next, Arc::clone(&self.validator)))
    }
}
