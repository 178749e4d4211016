// RG - rg-intercept
// Module: Range Proxy
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Interception by wrapping the target in a proxy.
//!
//! A [`RangeProxy`] owns its target. Callers reach the target only through
//! [`RangeProxy::intercept_call`], which checks the arguments before the call
//! and the return value after it. The [`intercept!`](crate::intercept) macro
//! builds the dynamic argument list from the same bindings it forwards, so
//! a trait implementation for the proxy stays a one-liner per method.

use std::sync::Arc;

use log::debug;
use rg_error::Result;
use rg_foundation::Value;

use crate::{
    boundary::RawMessage, config::InterceptConfig, registry::ConstraintRegistry,
    target::DynamicTarget, validate::RangeValidator,
};

/// Proxy that enforces declared ranges around every call to `T`
#[derive(Debug)]
pub struct RangeProxy<T> {
    target: T,
    validator: RangeValidator,
}

impl<T> RangeProxy<T> {
    /// Wrap `target` with the default configuration
    #[must_use]
    pub fn new(target: T, registry: Arc<ConstraintRegistry>) -> Self {
        Self::with_config(target, registry, InterceptConfig::default())
    }

    /// Wrap `target` with an explicit configuration
    #[must_use]
    pub fn with_config(
        target: T,
        registry: Arc<ConstraintRegistry>,
        config: InterceptConfig,
    ) -> Self {
        debug!("Creating range proxy over {} declared method(s)", registry.len());
        Self { target, validator: RangeValidator::with_config(registry, config) }
    }

    /// Intercepts a call to the wrapped target
    ///
    /// # Arguments
    ///
    /// * `method` - Name the constraints are declared under
    /// * `args` - The call's arguments as dynamic values, in parameter order
    /// * `call_fn` - Forwards the call to the target
    ///
    /// # Returns
    ///
    /// * `Result<R>` - The target's result, unchanged
    ///
    /// # Errors
    ///
    /// Returns a range violation, without calling the target, if an argument
    /// is out of range. Returns a range violation if the target returned a
    /// value outside the return range. Errors from the target itself are
    /// returned as they are and the return constraint is not consulted.
    pub fn intercept_call<R, F>(&self, method: &str, args: &[Value], call_fn: F) -> Result<R>
    where
        R: Clone + Into<Value>,
        F: FnOnce(&T) -> Result<R>,
    {
        let catalog = self.validator.catalog(method);
        self.validator.check_arguments(&catalog, args)?;

        let result = call_fn(&self.target)?;

        if catalog.return_constraint().is_some() {
            self.validator.check_return(&catalog, &result.clone().into())?;
        }
        Ok(result)
    }

    /// The validator shared by every call through this proxy
    #[must_use]
    pub fn validator(&self) -> &RangeValidator {
        &self.validator
    }

    /// Unwrap the target, ending interception
    #[must_use]
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T: DynamicTarget> DynamicTarget for RangeProxy<T> {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        self.intercept_call(method, args, |target| target.invoke(method, args))
    }

    // Raw messages carry no declared parameters
    fn receive(&self, message: &RawMessage) -> Result<Value> {
        self.target.receive(message)
    }
}

/// Forward a method call through a [`RangeProxy`]
///
/// `intercept!(proxy, method(a, b))` checks `a` and `b` against the ranges
/// declared for `"method"`, calls `method(a, b)` on the wrapped target, and
/// checks the result against the return range.
///
/// ```
/// use std::sync::Arc;
///
/// use rg_error::Result;
/// use rg_foundation::ValType;
/// use rg_intercept::{intercept, ConstraintRegistry, MethodSignature, RangeConstraint, RangeProxy};
///
/// struct Dice;
///
/// impl Dice {
///     fn face(&self, roll: u32) -> Result<u32> {
///         Ok(roll % 6 + 1)
///     }
/// }
///
/// let registry = ConstraintRegistry::builder()
///     .method(MethodSignature::new("face").param("roll", ValType::U32).returns(ValType::U32))
///     .constrain_parameter("face", "roll", RangeConstraint::at_most(100_u32))
///     .build()?;
/// let proxy = RangeProxy::new(Dice, Arc::new(registry));
///
/// let roll = 7_u32;
/// assert_eq!(intercept!(proxy, face(roll))?, 2);
///
/// let roll = 101_u32;
/// assert!(intercept!(proxy, face(roll)).is_err());
/// # Ok::<(), rg_error::Error>(())
/// ```
#[macro_export]
macro_rules! intercept {
    ($proxy:expr, $method:ident ( $($arg:ident),* $(,)? )) => {
        $proxy.intercept_call(
            stringify!($method),
            &[$($crate::Value::from(::core::clone::Clone::clone(&$arg))),*],
            |target| target.$method($($arg),*),
        )
    };
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use rg_error::{codes, Error};
    use rg_foundation::{typed_arg, ValType};

    use super::*;
    use crate::{constraint::RangeConstraint, signature::MethodSignature};

    #[derive(Default)]
    struct Meter {
        calls: AtomicUsize,
        reading: f64,
    }

    impl Meter {
        fn scale(&self, factor: f64) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reading * factor)
        }

        fn fail(&self) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::runtime_execution_error("sensor offline"))
        }
    }

    impl DynamicTarget for Meter {
        fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
            match method {
                "scale" => self.scale(typed_arg(args, 0)?).map(Value::from),
                "fail" => self.fail().map(Value::from),
                _ => Err(Error::method_not_found("No such method on meter")),
            }
        }
    }

    fn registry() -> Arc<ConstraintRegistry> {
        let registry = ConstraintRegistry::builder()
            .method(
                MethodSignature::new("scale").param("factor", ValType::F64).returns(ValType::F64),
            )
            .method(MethodSignature::new("fail").returns(ValType::F64))
            .constrain_parameter("scale", "factor", RangeConstraint::between(0.0_f64, 10.0))
            .constrain_return("scale", RangeConstraint::at_most(50.0_f64))
            .constrain_return("fail", RangeConstraint::at_least(0.0_f64))
            .build()
            .unwrap();
        Arc::new(registry)
    }

    #[test]
    fn test_admitted_call_reaches_target() {
        let proxy = RangeProxy::new(Meter { reading: 2.0, ..Meter::default() }, registry());
        let factor = 3.0_f64;
        assert_eq!(intercept!(proxy, scale(factor)), Ok(6.0));
        assert_eq!(proxy.into_inner().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rejected_argument_skips_target() {
        let proxy = RangeProxy::new(Meter::default(), registry());
        let factor = 11.0_f64;
        let error = intercept!(proxy, scale(factor)).unwrap_err();
        assert_eq!(error.code, codes::PARAMETER_OUT_OF_RANGE);
        assert_eq!(proxy.into_inner().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_rejected_return_after_target_ran() {
        let proxy = RangeProxy::new(Meter { reading: 10.0, ..Meter::default() }, registry());
        let error = proxy.invoke("scale", &[Value::F64(6.0)]).unwrap_err();
        assert_eq!(error.code, codes::RETURN_OUT_OF_RANGE);
        assert_eq!(error.violation().map(|v| v.value.as_str()), Some("60"));
        assert_eq!(proxy.into_inner().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_target_error_passes_through_unchanged() {
        let proxy = RangeProxy::new(Meter::default(), registry());
        let error = proxy.intercept_call("fail", &[], Meter::fail).unwrap_err();
        assert_eq!(error, Error::runtime_execution_error("sensor offline"));
    }

    #[test]
    fn test_undeclared_method_is_forwarded() {
        let proxy = RangeProxy::new(Meter::default(), registry());
        let error = proxy.invoke("calibrate", &[Value::F64(-1.0)]).unwrap_err();
        assert_eq!(error.code, codes::METHOD_NOT_FOUND);
    }
}
