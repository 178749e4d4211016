// RG - rg-intercept
// Module: Range Constraints
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Range constraints attached to parameters and return values.
//!
//! [`RangeConstraint`] is the typed descriptor a user writes. The registry
//! stores it behind the object-safe [`ValueConstraint`] trait so that
//! constraints of different bound types can live in one catalog.

use core::{cmp::Ordering, fmt};

use rg_foundation::{RangeValue, ValType, Value};

use crate::evaluator::Verdict;

/// An optional lower and upper bound of one comparable type
///
/// Both bounds are inclusive. An absent bound is unbounded on that side, so
/// a constraint with neither bound admits everything. A disabled constraint
/// also admits everything.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeConstraint<T> {
    enabled: bool,
    lower: Option<T>,
    upper: Option<T>,
}

impl<T> RangeConstraint<T> {
    /// Create an enabled constraint with no bounds
    #[must_use]
    pub const fn new() -> Self {
        Self { enabled: true, lower: None, upper: None }
    }

    /// Only a lower bound
    #[must_use]
    pub fn at_least(lower: T) -> Self {
        Self::new().with_lower(lower)
    }

    /// Only an upper bound
    #[must_use]
    pub fn at_most(upper: T) -> Self {
        Self::new().with_upper(upper)
    }

    /// Both bounds, inclusive
    #[must_use]
    pub fn between(lower: T, upper: T) -> Self {
        Self::new().with_lower(lower).with_upper(upper)
    }

    /// Set the lower bound
    #[must_use]
    pub fn with_lower(mut self, lower: T) -> Self {
        self.lower = Some(lower);
        self
    }

    /// Set the upper bound
    #[must_use]
    pub fn with_upper(mut self, upper: T) -> Self {
        self.upper = Some(upper);
        self
    }

    /// Switch the constraint on or off
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Keep the bounds but stop checking them
    #[must_use]
    pub fn disabled(self) -> Self {
        self.with_enabled(false)
    }

    /// Whether the constraint is checked at all
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The lower bound, if any
    #[must_use]
    pub fn lower(&self) -> Option<&T> {
        self.lower.as_ref()
    }

    /// The upper bound, if any
    #[must_use]
    pub fn upper(&self) -> Option<&T> {
        self.upper.as_ref()
    }
}

impl<T> Default for RangeConstraint<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> RangeConstraint<T> {
    /// Classify `value` against this constraint
    ///
    /// A value that has no order relative to a present bound (NaN, for
    /// example) is [`Verdict::Incomparable`], which passes.
    pub fn assess(&self, value: &T) -> Verdict {
        if !self.enabled {
            return Verdict::Disabled;
        }
        if let Some(lower) = &self.lower {
            match value.partial_cmp(lower) {
                None => return Verdict::Incomparable,
                Some(Ordering::Less) => return Verdict::BelowLower,
                Some(_) => {},
            }
        }
        if let Some(upper) = &self.upper {
            match value.partial_cmp(upper) {
                None => return Verdict::Incomparable,
                Some(Ordering::Greater) => return Verdict::AboveUpper,
                Some(_) => {},
            }
        }
        Verdict::Within
    }

    /// `true` if `value` satisfies the constraint
    pub fn evaluate(&self, value: &T) -> bool {
        self.assess(value).passed()
    }
}

impl<T: RangeValue> fmt::Display for RangeConstraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bounds(
            f,
            self.enabled,
            self.lower.clone().map(Into::into),
            self.upper.clone().map(Into::into),
        )
    }
}

/// Object-safe view of a [`RangeConstraint`] over dynamic values
pub trait ValueConstraint: fmt::Debug + Send + Sync {
    /// The type the bounds are expressed in
    fn bound_type(&self) -> ValType;

    /// Whether the constraint is checked at all
    fn is_enabled(&self) -> bool;

    /// The lower bound as a dynamic value
    fn lower(&self) -> Option<Value>;

    /// The upper bound as a dynamic value
    fn upper(&self) -> Option<Value>;

    /// Classify a dynamic value against this constraint
    ///
    /// A value of a different type than the bounds is
    /// [`Verdict::Incomparable`].
    fn assess_value(&self, value: &Value) -> Verdict;
}

impl<T: RangeValue> ValueConstraint for RangeConstraint<T> {
    fn bound_type(&self) -> ValType {
        T::VAL_TYPE
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn lower(&self) -> Option<Value> {
        self.lower.clone().map(Into::into)
    }

    fn upper(&self) -> Option<Value> {
        self.upper.clone().map(Into::into)
    }

    fn assess_value(&self, value: &Value) -> Verdict {
        if !self.enabled {
            return Verdict::Disabled;
        }
        match T::from_value(value) {
            Some(value) => self.assess(&value),
            None => Verdict::Incomparable,
        }
    }
}

impl fmt::Display for dyn ValueConstraint + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bounds(f, self.is_enabled(), self.lower(), self.upper())
    }
}

/// Two constraints are the same if they check the same bounds the same way
pub fn same_constraint(a: &dyn ValueConstraint, b: &dyn ValueConstraint) -> bool {
    a.bound_type() == b.bound_type()
        && a.is_enabled() == b.is_enabled()
        && a.lower() == b.lower()
        && a.upper() == b.upper()
}

fn write_bounds(
    f: &mut fmt::Formatter<'_>,
    enabled: bool,
    lower: Option<Value>,
    upper: Option<Value>,
) -> fmt::Result {
    match lower {
        Some(lower) => write!(f, "[{lower}, ")?,
        None => f.write_str("(-∞, ")?,
    }
    match upper {
        Some(upper) => write!(f, "{upper}]")?,
        None => f.write_str("∞)")?,
    }
    if !enabled {
        f.write_str(" (disabled)")?;
    }
    Ok(())
}
