// RG - rg-intercept
// Module: Range-Checked Call Interception
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! # Range-Checked Call Interception
//!
//! This crate enforces declared range constraints on the arguments and
//! return values of method calls, transparently to both the caller and the
//! callee.
//!
//! ## Overview
//!
//! Constraints are declared once, against method signatures, in a
//! [`ConstraintRegistry`]. The registry validates the declarations when it is
//! built and resolves them per method into a [`ConstraintCatalog`]. Two
//! dispatch strategies then enforce the catalog on every call:
//!
//! - [`RangeProxy`] wraps the target and intercepts each call directly
//! - [`Boundary`] seals the target behind a chain of message sinks, with a
//!   [`RangeValidationSink`] in front of the dispatch sink
//!
//! Both strategies share one [`RangeValidator`], so a sequence of calls
//! produces the same results and the same target-side effects under either.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rg_foundation::{ValType, Value};
//! use rg_intercept::{
//!     Boundary, ConstraintRegistry, DynamicTarget, MethodSignature, RangeConstraint, RangeProxy,
//! };
//!
//! struct Gauge;
//!
//! impl DynamicTarget for Gauge {
//!     fn invoke(&self, _method: &str, args: &[Value]) -> rg_error::Result<Value> {
//!         Ok(args[0].clone())
//!     }
//! }
//!
//! let registry = Arc::new(
//!     ConstraintRegistry::builder()
//!         .method(MethodSignature::new("set").param("level", ValType::F64).returns(ValType::F64))
//!         .constrain_parameter("set", "level", RangeConstraint::between(0.0_f64, 1.0))
//!         .build()?,
//! );
//!
//! let proxy = RangeProxy::new(Gauge, Arc::clone(&registry));
//! let boundary = Boundary::builder(Gauge).with_range_validation(registry).build();
//!
//! assert!(proxy.invoke("set", &[Value::F64(0.5)]).is_ok());
//! assert!(proxy.invoke("set", &[Value::F64(1.5)]).is_err());
//! assert!(boundary.call("set", vec![Value::F64(1.5)]).is_err());
//! # Ok::<(), rg_error::Error>(())
//! ```

#![forbid(unsafe_code)] // Rule 2
#![deny(missing_docs)]
#![warn(clippy::missing_panics_doc)]

pub mod prelude;

pub mod boundary;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod constraint;
pub mod evaluator;
pub mod proxy;
pub mod registry;
pub mod signature;
pub mod target;
pub mod validate;

pub use boundary::{
    Boundary, BoundaryBuilder, Message, MessageSink, RangeChecked, RangeValidationSink,
    RawMessage, Reply, SinkProvider,
};
pub use cache::CatalogCache;
pub use catalog::{ConstraintCatalog, ParameterSlot};
pub use config::{DuplicatePolicy, InterceptConfig};
pub use constraint::{RangeConstraint, ValueConstraint};
pub use evaluator::{evaluate, Verdict};
pub use proxy::RangeProxy;
pub use registry::{ConstraintRegistry, RegistryBuilder};
pub use rg_foundation::Value;
pub use signature::{MethodSignature, ParamRef};
pub use target::DynamicTarget;
pub use validate::RangeValidator;
