// RG - rg-intercept
// Module: Execution Boundaries
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Interception by routing every call through a message chain.
//!
//! A [`Boundary`] takes ownership of its target and exposes it only as a
//! chain of [`MessageSink`]s. Callers send messages into the chain; the
//! terminal sink invokes the target. Sinks installed in front of the
//! dispatch sink see every message first, which is how
//! [`RangeValidationSink`] enforces declared ranges without the target
//! knowing.
//!
//! Types opt in declaratively by implementing [`RangeChecked`]; every
//! instance created through [`Boundary::construct`] is then range checked.

mod message;
mod sink;
mod validation;

use core::{fmt, marker::PhantomData};
use std::sync::Arc;

use log::debug;
use rg_error::Result;
use rg_foundation::Value;

pub use message::{Message, MethodCall, RawMessage, Reply, ReplyHandler};
pub use sink::{DispatchSink, MessageSink, SinkProvider};
pub use validation::{RangeValidationProvider, RangeValidationSink};

use crate::{
    config::InterceptConfig, registry::ConstraintRegistry, target::DynamicTarget,
    validate::RangeValidator,
};

/// Marker for types whose instances always live inside a range-checking
/// boundary
///
/// The registry is the type's declarative metadata: which methods it has and
/// which ranges apply to them.
pub trait RangeChecked {
    /// Constraints declared for this type
    ///
    /// # Errors
    ///
    /// Returns a metadata error if the declarations are malformed.
    fn constraint_registry() -> Result<Arc<ConstraintRegistry>>;

    /// Move `self` into a range-checking boundary
    ///
    /// # Errors
    ///
    /// Returns a metadata error if the type's declarations are malformed.
    fn into_boundary(self) -> Result<Boundary<Self>>
    where
        Self: DynamicTarget + Sized + 'static,
    {
        Boundary::construct(self)
    }
}

/// Handle to a target that can only be reached through its sink chain
pub struct Boundary<T> {
    chain: Arc<dyn MessageSink>,
    _target: PhantomData<fn() -> T>,
}

impl<T: DynamicTarget + 'static> Boundary<T> {
    /// Create a range-checked instance of a [`RangeChecked`] type
    ///
    /// # Errors
    ///
    /// Returns a metadata error if the type's declarations are malformed;
    /// the target is dropped without ever being reachable.
    pub fn construct(target: T) -> Result<Self>
    where
        T: RangeChecked,
    {
        let registry = T::constraint_registry()?;
        Ok(Self::builder(target).with_range_validation(registry).build())
    }

    /// A boundary with only the dispatch sink
    #[must_use]
    pub fn unchecked(target: T) -> Self {
        Self::builder(target).build()
    }

    /// Assemble a boundary sink by sink
    #[must_use]
    pub fn builder(target: T) -> BoundaryBuilder<T> {
        BoundaryBuilder::new(target)
    }
}

impl<T> Boundary<T> {
    /// Call `method` and wait for its result
    ///
    /// # Errors
    ///
    /// Returns a range violation if a sink rejected the call, or the
    /// target's own error.
    pub fn call(&self, method: &str, args: Vec<Value>) -> Result<Value> {
        self.send(Message::call(method, args)).into_result()
    }

    /// Send any message synchronously
    #[must_use]
    pub fn send(&self, message: Message) -> Reply {
        self.chain.process_sync(message)
    }

    /// Send a message asynchronously; `on_reply` receives the answer
    pub fn post(&self, message: Message, on_reply: ReplyHandler) {
        self.chain.process_async(message, on_reply);
    }

    /// The first sink of the chain
    #[must_use]
    pub fn chain(&self) -> &dyn MessageSink {
        &*self.chain
    }

    /// Names of the sinks, outermost first
    #[must_use]
    pub fn sink_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = Some(self.chain());
        while let Some(sink) = current {
            names.push(sink.name());
            current = sink.next_sink();
        }
        names
    }
}

impl<T> Clone for Boundary<T> {
    fn clone(&self) -> Self {
        Self { chain: Arc::clone(&self.chain), _target: PhantomData }
    }
}

impl<T> fmt::Debug for Boundary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boundary").field("sinks", &self.sink_names()).finish()
    }
}

impl<T> DynamicTarget for Boundary<T> {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        self.call(method, args.to_vec())
    }

    fn receive(&self, message: &RawMessage) -> Result<Value> {
        self.send(Message::Raw(message.clone())).into_result()
    }
}

enum Layer {
    Provider(Arc<dyn SinkProvider>),
    RangeValidation(Arc<ConstraintRegistry>),
}

/// Builder for a [`Boundary`]
///
/// Sinks are listed outermost first; the dispatch sink is always last.
pub struct BoundaryBuilder<T> {
    target: T,
    layers: Vec<Layer>,
    config: InterceptConfig,
}

impl<T: DynamicTarget + 'static> BoundaryBuilder<T> {
    /// Start with no sinks in front of `target`
    #[must_use]
    pub fn new(target: T) -> Self {
        Self { target, layers: Vec::new(), config: InterceptConfig::default() }
    }

    /// Configuration for range validation sinks
    #[must_use]
    pub fn with_config(mut self, config: InterceptConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a sink created by `provider`
    #[must_use]
    pub fn with_sink(mut self, provider: Arc<dyn SinkProvider>) -> Self {
        self.layers.push(Layer::Provider(provider));
        self
    }

    /// Add a range validation sink for `registry`
    #[must_use]
    pub fn with_range_validation(mut self, registry: Arc<ConstraintRegistry>) -> Self {
        self.layers.push(Layer::RangeValidation(registry));
        self
    }

    /// Link the chain and seal the target inside it
    #[must_use]
    pub fn build(self) -> Boundary<T> {
        let mut chain: Arc<dyn MessageSink> = Arc::new(DispatchSink::new(self.target));
        for layer in self.layers.into_iter().rev() {
            chain = match layer {
                Layer::Provider(provider) => provider.create_sink(chain),
                Layer::RangeValidation(registry) => {
                    let validator = RangeValidator::with_config(registry, self.config.clone());
                    RangeValidationProvider::new(Arc::new(validator)).create_sink(chain)
                },
            };
        }

        let boundary = Boundary { chain, _target: PhantomData };
        debug!("Constructed boundary with sinks {:?}", boundary.sink_names());
        boundary
    }
}

impl<T> fmt::Debug for BoundaryBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryBuilder")
            .field("layers", &self.layers.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
