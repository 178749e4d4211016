// RG - rg-intercept
// Module: Constraint Evaluation
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Evaluation of one value against one constraint.
//!
//! Evaluation fails open: a constraint only rejects a value it can order
//! and that lies outside one of its present bounds.

use core::fmt;

use rg_foundation::Value;

use crate::constraint::ValueConstraint;

/// Outcome of checking a value against a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The constraint is switched off
    Disabled,
    /// The value cannot be ordered against a bound
    Incomparable,
    /// The value lies within the bounds
    Within,
    /// The value is less than the lower bound
    BelowLower,
    /// The value is greater than the upper bound
    AboveUpper,
}

impl Verdict {
    /// Whether the value is admitted
    #[must_use]
    pub const fn passed(self) -> bool {
        !matches!(self, Self::BelowLower | Self::AboveUpper)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disabled => "constraint disabled",
            Self::Incomparable => "not comparable with the bounds",
            Self::Within => "within bounds",
            Self::BelowLower => "below lower bound",
            Self::AboveUpper => "above upper bound",
        })
    }
}

/// Classify `value` against `constraint`
pub fn assess(constraint: &dyn ValueConstraint, value: &Value) -> Verdict {
    constraint.assess_value(value)
}

/// `true` if `value` satisfies `constraint`
pub fn evaluate(constraint: &dyn ValueConstraint, value: &Value) -> bool {
    assess(constraint, value).passed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::RangeConstraint;

    #[test]
    fn test_only_out_of_bounds_fails() {
        assert!(Verdict::Disabled.passed());
        assert!(Verdict::Incomparable.passed());
        assert!(Verdict::Within.passed());
        assert!(!Verdict::BelowLower.passed());
        assert!(!Verdict::AboveUpper.passed());
    }

    #[test]
    fn test_evaluate_dynamic_values() {
        let probability = RangeConstraint::between(0.0_f64, 1.0);
        assert!(evaluate(&probability, &Value::F64(0.25)));
        assert!(!evaluate(&probability, &Value::F64(-1.0)));
        assert!(evaluate(&probability, &Value::F64(f64::NAN)));
        assert!(evaluate(&probability, &Value::F32(-1.0)));
        assert!(evaluate(&probability, &Value::from("-1")));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::BelowLower.to_string(), "below lower bound");
        assert_eq!(Verdict::AboveUpper.to_string(), "above upper bound");
    }
}
