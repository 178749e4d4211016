//! Property tests for constraint evaluation

use proptest::prelude::*;
use rg_foundation::Value;
use rg_intercept::{evaluate, RangeConstraint, ValueConstraint, Verdict};

fn finite() -> impl Strategy<Value = f64> {
    -1e12_f64..1e12_f64
}

proptest! {
    #[test]
    fn disabled_admits_everything(lower in finite(), upper in finite(), v in any::<f64>()) {
        let constraint = RangeConstraint::between(lower, upper).disabled();
        prop_assert!(constraint.evaluate(&v));
        prop_assert!(evaluate(&constraint, &Value::F64(v)));
    }

    #[test]
    fn unbounded_admits_everything(v in any::<i64>()) {
        prop_assert!(RangeConstraint::<i64>::new().evaluate(&v));
    }

    #[test]
    fn lower_only_admits_exactly_the_values_above(lower in finite(), v in finite()) {
        let constraint = RangeConstraint::at_least(lower);
        prop_assert_eq!(constraint.evaluate(&v), v >= lower);
        prop_assert_eq!(evaluate(&constraint, &Value::F64(v)), v >= lower);
    }

    #[test]
    fn upper_only_admits_exactly_the_values_below(upper in any::<i32>(), v in any::<i32>()) {
        let constraint = RangeConstraint::at_most(upper);
        prop_assert_eq!(constraint.evaluate(&v), v <= upper);
    }

    #[test]
    fn closed_range_is_inclusive(a in finite(), b in finite(), v in finite()) {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        let constraint = RangeConstraint::between(lower, upper);

        prop_assert!(constraint.evaluate(&lower));
        prop_assert!(constraint.evaluate(&upper));
        prop_assert_eq!(constraint.evaluate(&v), lower <= v && v <= upper);
    }

    #[test]
    fn typed_and_dynamic_evaluation_agree(lower in any::<u64>(), upper in any::<u64>(), v in any::<u64>()) {
        let constraint = RangeConstraint::between(lower, upper);
        let dynamic: &dyn ValueConstraint = &constraint;
        prop_assert_eq!(dynamic.assess_value(&Value::U64(v)), constraint.assess(&v));
    }

    #[test]
    fn other_value_types_are_incomparable(lower in finite(), upper in finite(), v in any::<i32>()) {
        let constraint = RangeConstraint::between(lower, upper);
        prop_assert_eq!(constraint.assess_value(&Value::S32(v)), Verdict::Incomparable);
        prop_assert!(evaluate(&constraint, &Value::S32(v)));
    }

    #[test]
    fn nan_passes_any_bounded_constraint(lower in finite(), upper in finite()) {
        let constraint = RangeConstraint::between(lower, upper);
        prop_assert!(constraint.evaluate(&f64::NAN));
        prop_assert!(RangeConstraint::at_least(lower).evaluate(&f64::NAN));
        prop_assert!(RangeConstraint::at_most(upper).evaluate(&f64::NAN));
    }
}
