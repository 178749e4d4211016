// RG - rg-intercept
// Module: Dynamic Call Targets
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Objects that can be called by method name with dynamic arguments.

use std::sync::Arc;

use rg_error::{Error, Result};
use rg_foundation::Value;

use crate::boundary::RawMessage;

/// A callee addressed by method name
///
/// Implemented by user types that want to sit behind a [`Boundary`], and by
/// both dispatchers so that one can be substituted for the other.
///
/// [`Boundary`]: crate::boundary::Boundary
pub trait DynamicTarget: Send + Sync {
    /// Invoke `method` with `args`
    ///
    /// # Errors
    ///
    /// Whatever the method itself returns, or a dispatch error if the method
    /// does not exist or the arguments do not fit it.
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value>;

    /// Handle a message that is not a method call
    ///
    /// # Errors
    ///
    /// The default rejects every raw message as unsupported.
    fn receive(&self, message: &RawMessage) -> Result<Value> {
        let _ = message;
        Err(Error::unsupported_message("Target does not accept raw messages"))
    }
}

impl<T: DynamicTarget + ?Sized> DynamicTarget for Arc<T> {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        (**self).invoke(method, args)
    }

    fn receive(&self, message: &RawMessage) -> Result<Value> {
        (**self).receive(message)
    }
}

impl<T: DynamicTarget + ?Sized> DynamicTarget for Box<T> {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        (**self).invoke(method, args)
    }

    fn receive(&self, message: &RawMessage) -> Result<Value> {
        (**self).receive(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rg_error::codes;

    struct Echo;

    impl DynamicTarget for Echo {
        fn invoke(&self, _method: &str, args: &[Value]) -> Result<Value> {
            Ok(args.first().cloned().unwrap_or_default())
        }
    }

    #[test]
    fn test_raw_messages_unsupported_by_default() {
        let raw = RawMessage::new("ping", Vec::new());
        assert_eq!(Echo.receive(&raw).unwrap_err().code, codes::UNSUPPORTED_MESSAGE);
    }

    #[test]
    fn test_shared_targets_forward() {
        let shared: Arc<dyn DynamicTarget> = Arc::new(Echo);
        assert_eq!(shared.invoke("echo", &[Value::S32(4)]), Ok(Value::S32(4)));
        assert_eq!(Box::new(Echo).invoke("echo", &[]), Ok(Value::Unit));
    }
}
