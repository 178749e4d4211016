// RG - rg-intercept
// Module: Message Sinks
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Links of a boundary's message chain.
//!
//! Every message entering a [`Boundary`](super::Boundary) is handed to the
//! first sink. Each sink either answers it or passes it to the next sink;
//! the last sink, [`DispatchSink`], invokes the target.

use std::sync::Arc;

use log::trace;

use super::message::{Message, Reply, ReplyHandler};
use crate::target::DynamicTarget;

/// A link in a boundary's message chain
pub trait MessageSink: Send + Sync {
    /// Short name, used when describing the chain
    fn name(&self) -> &str;

    /// Process a message and wait for its reply
    fn process_sync(&self, message: Message) -> Reply;

    /// Process a message and deliver the reply to `on_reply`
    fn process_async(&self, message: Message, on_reply: ReplyHandler);

    /// The sink this one hands messages to, `None` for the terminal sink
    fn next_sink(&self) -> Option<&dyn MessageSink>;
}

/// Creates a sink in front of an existing chain
pub trait SinkProvider: Send + Sync {
    /// Wrap `next` in a new sink
    fn create_sink(&self, next: Arc<dyn MessageSink>) -> Arc<dyn MessageSink>;
}

/// Terminal sink that invokes the target
pub struct DispatchSink<T> {
    target: T,
}

impl<T> DispatchSink<T> {
    /// Dispatch to `target`
    #[must_use]
    pub fn new(target: T) -> Self {
        Self { target }
    }
}

impl<T: DynamicTarget> MessageSink for DispatchSink<T> {
    fn name(&self) -> &str {
        "dispatch"
    }

    fn process_sync(&self, message: Message) -> Reply {
        match message {
            Message::Call(call) => {
                trace!("Dispatching `{}` to target", call.method);
                self.target.invoke(&call.method, &call.args).into()
            },
            Message::Raw(raw) => self.target.receive(&raw).into(),
        }
    }

    fn process_async(&self, message: Message, on_reply: ReplyHandler) {
        on_reply(self.process_sync(message));
    }

    fn next_sink(&self) -> Option<&dyn MessageSink> {
        None
    }
}

impl<T> core::fmt::Debug for DispatchSink<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DispatchSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rg_error::{codes, Error, Result};
    use rg_foundation::Value;

    use super::*;
    use crate::boundary::RawMessage;

    struct Doubler;

    impl DynamicTarget for Doubler {
        fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
            match (method, args) {
                ("double", [Value::S64(v)]) => Ok(Value::S64(v * 2)),
                _ => Err(Error::method_not_found("Doubler only doubles")),
            }
        }

        fn receive(&self, message: &RawMessage) -> Result<Value> {
            Ok(Value::from(message.kind.as_str()))
        }
    }

    #[test]
    fn test_dispatch_calls_and_raw_messages() {
        let sink = DispatchSink::new(Doubler);
        assert_eq!(
            sink.process_sync(Message::call("double", vec![Value::S64(21)])),
            Reply::ok(Value::S64(42))
        );
        assert_eq!(
            sink.process_sync(Message::raw("ping", Vec::new())),
            Reply::ok(Value::from("ping"))
        );
        assert_eq!(
            sink.process_sync(Message::call("halve", Vec::new())).into_result().unwrap_err().code,
            codes::METHOD_NOT_FOUND
        );
        assert!(sink.next_sink().is_none());
    }

    #[test]
    fn test_async_reply_delivered() {
        let sink = DispatchSink::new(Doubler);
        let received = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&received);
        sink.process_async(
            Message::call("double", vec![Value::S64(2)]),
            Box::new(move |reply: Reply| *slot.lock().unwrap() = Some(reply)),
        );
        assert_eq!(*received.lock().unwrap(), Some(Reply::ok(Value::S64(4))));
    }
}
