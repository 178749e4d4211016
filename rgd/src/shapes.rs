//! Sample target for the demo scenarios.
//!
//! `Shapes` knows nothing about ranges. The ranges live in [`registry`], and
//! the two `Geometry` adapters at the bottom expose the same call surface
//! through a proxy and through a boundary.

use core::f64::consts::PI;
use std::sync::Arc;

use rg_error::{Error, Result};
use rg_foundation::{typed_arg, ValType, Value};
use rg_intercept::{
    intercept, Boundary, ConstraintRegistry, DynamicTarget, MethodSignature, RangeChecked,
    RangeConstraint, RangeProxy,
};

/// Largest admitted sector angle, in radians
#[allow(clippy::approx_constant)]
pub const MAX_ANGLE: f64 = 6.28;

/// Call surface shared by the target and both dispatchers
pub trait Geometry {
    /// Area of a circular sector
    fn sector_area(&self, radius: f64, angle: f64) -> Result<f64>;

    /// A probability, declared to lie in `[0, 1]`
    fn probability(&self) -> Result<f64>;
}

/// The unprotected target
#[derive(Debug, Default)]
pub struct Shapes;

impl Geometry for Shapes {
    // π·r²·angle, so a unit sector is π (the 3.14 of the demo output, rounded)
    fn sector_area(&self, radius: f64, angle: f64) -> Result<f64> {
        Ok(PI * radius * radius * angle)
    }

    // Deliberately outside its declared range
    fn probability(&self) -> Result<f64> {
        Ok(-1.0)
    }
}

impl DynamicTarget for Shapes {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        match method {
            "sector_area" => {
                self.sector_area(typed_arg(args, 0)?, typed_arg(args, 1)?).map(Value::from)
            },
            "probability" => self.probability().map(Value::from),
            _ => Err(Error::method_not_found("Shapes has no such method")),
        }
    }
}

impl RangeChecked for Shapes {
    fn constraint_registry() -> Result<Arc<ConstraintRegistry>> {
        registry().map(Arc::new)
    }
}

/// Declared ranges of [`Shapes`]
///
/// # Errors
///
/// Returns a metadata error if the declarations are malformed.
pub fn registry() -> Result<ConstraintRegistry> {
    ConstraintRegistry::builder()
        .method(
            MethodSignature::new("sector_area")
                .param("radius", ValType::F64)
                .param("angle", ValType::F64)
                .returns(ValType::F64),
        )
        .method(MethodSignature::new("probability").returns(ValType::F64))
        .constrain_parameter("sector_area", "radius", RangeConstraint::at_least(0.0_f64))
        .constrain_parameter("sector_area", "angle", RangeConstraint::between(0.0_f64, MAX_ANGLE))
        .constrain_return("probability", RangeConstraint::between(0.0_f64, 1.0))
        .build()
}

impl Geometry for RangeProxy<Shapes> {
    fn sector_area(&self, radius: f64, angle: f64) -> Result<f64> {
        intercept!(self, sector_area(radius, angle))
    }

    fn probability(&self) -> Result<f64> {
        intercept!(self, probability())
    }
}

impl Geometry for Boundary<Shapes> {
    fn sector_area(&self, radius: f64, angle: f64) -> Result<f64> {
        self.call("sector_area", vec![radius.into(), angle.into()])?.decode()
    }

    fn probability(&self) -> Result<f64> {
        self.call("probability", Vec::new())?.decode()
    }
}
