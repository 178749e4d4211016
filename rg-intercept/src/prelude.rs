//! Prelude module for rg-intercept
//!
//! Re-exports everything needed to declare constraints and put a target
//! behind either dispatcher.

pub use rg_foundation::prelude::*;

pub use crate::{
    boundary::{
        Boundary, BoundaryBuilder, Message, MessageSink, MethodCall, RangeChecked, RawMessage,
        Reply, ReplyHandler, SinkProvider,
    },
    config::{DuplicatePolicy, InterceptConfig},
    constraint::{RangeConstraint, ValueConstraint},
    intercept,
    proxy::RangeProxy,
    registry::{ConstraintRegistry, RegistryBuilder},
    signature::{MethodSignature, ParamRef},
    target::DynamicTarget,
};
