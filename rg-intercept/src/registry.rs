// RG - rg-intercept
// Module: Constraint Registry
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Declaration and resolution of range constraints.
//!
//! Constraints are declared against method signatures through a
//! [`RegistryBuilder`]. All metadata is validated once, in
//! [`RegistryBuilder::build`], so that a malformed declaration never reaches
//! a dispatcher. Resolution of a method afterwards cannot fail.

use core::cmp::Ordering;
use std::{collections::HashMap, sync::Arc};

use log::{debug, trace};
use rg_error::{codes, CallPosition, Error, Result};
use rg_foundation::{RangeValue, ValType};

use crate::{
    catalog::{ConstraintCatalog, ParameterSlot},
    config::DuplicatePolicy,
    constraint::{RangeConstraint, ValueConstraint},
    signature::{MethodSignature, ParamRef},
};

#[derive(Debug)]
enum Target {
    Parameter(ParamRef),
    Return,
}

#[derive(Debug)]
struct Declaration {
    method: String,
    target: Target,
    constraint: Arc<dyn ValueConstraint>,
}

#[derive(Debug)]
struct MethodEntry {
    signature: MethodSignature,
    parameters: Vec<Option<Arc<dyn ValueConstraint>>>,
    return_constraint: Option<Arc<dyn ValueConstraint>>,
}

impl MethodEntry {
    fn new(signature: MethodSignature) -> Self {
        let parameters = vec![None; signature.params().len()];
        Self { signature, parameters, return_constraint: None }
    }

    fn catalog(&self) -> ConstraintCatalog {
        let parameters = self
            .signature
            .params()
            .iter()
            .zip(&self.parameters)
            .map(|(decl, constraint)| ParameterSlot {
                name: decl.name.clone(),
                ty: decl.ty,
                constraint: constraint.clone(),
            })
            .collect();
        ConstraintCatalog::from_parts(
            self.signature.name(),
            parameters,
            self.return_constraint.clone(),
        )
    }
}

/// Collects method signatures and range declarations
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    signatures: Vec<MethodSignature>,
    declarations: Vec<Declaration>,
    policy: DuplicatePolicy,
}

impl RegistryBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how repeated declarations on one call position are handled
    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Declare a method that can carry constraints
    #[must_use]
    pub fn method(mut self, signature: MethodSignature) -> Self {
        self.signatures.push(signature);
        self
    }

    /// Attach a constraint to a parameter, by name or position
    #[must_use]
    pub fn constrain_parameter<T: RangeValue>(
        mut self,
        method: impl Into<String>,
        parameter: impl Into<ParamRef>,
        constraint: RangeConstraint<T>,
    ) -> Self {
        self.declarations.push(Declaration {
            method: method.into(),
            target: Target::Parameter(parameter.into()),
            constraint: Arc::new(constraint),
        });
        self
    }

    /// Attach a constraint to the return value of a method
    #[must_use]
    pub fn constrain_return<T: RangeValue>(
        mut self,
        method: impl Into<String>,
        constraint: RangeConstraint<T>,
    ) -> Self {
        self.declarations.push(Declaration {
            method: method.into(),
            target: Target::Return,
            constraint: Arc::new(constraint),
        });
        self
    }

    /// Validate every declaration and freeze the registry
    ///
    /// # Errors
    ///
    /// Returns a metadata error if a method is declared twice, a declaration
    /// names an unknown method or parameter, a bound has a different type than
    /// its call position, a bound is not comparable with itself, the lower
    /// bound exceeds the upper bound, or (under
    /// [`DuplicatePolicy::Reject`]) a call position is constrained twice.
    pub fn build(self) -> Result<ConstraintRegistry> {
        let mut methods: HashMap<String, MethodEntry> = HashMap::new();

        for signature in self.signatures {
            if methods.contains_key(signature.name()) {
                return Err(Error::malformed_metadata(
                    codes::DUPLICATE_METHOD,
                    "Method declared more than once",
                    signature.name(),
                    None,
                ));
            }
            methods.insert(signature.name().to_string(), MethodEntry::new(signature));
        }

        for declaration in self.declarations {
            let Some(entry) = methods.get_mut(&declaration.method) else {
                return Err(Error::malformed_metadata(
                    codes::UNKNOWN_METHOD,
                    "Range declared on an undeclared method",
                    declaration.method,
                    None,
                ));
            };

            let (position, declared) = match &declaration.target {
                Target::Parameter(parameter) => {
                    let Some(index) = parameter.resolve(&entry.signature) else {
                        return Err(Error::malformed_metadata(
                            codes::UNKNOWN_PARAMETER,
                            "Range declared on a parameter the method does not have",
                            declaration.method.as_str(),
                            None,
                        )
                        .with_context(format!(
                            "method `{}` has no parameter {parameter}",
                            declaration.method
                        )));
                    };
                    let decl = &entry.signature.params()[index];
                    (CallPosition::parameter(decl.name.as_str(), index), decl.ty)
                },
                Target::Return => (CallPosition::Return, entry.signature.return_type()),
            };

            check_bounds(&declaration.method, &position, declared, &*declaration.constraint)?;

            let slot = match &position {
                CallPosition::Parameter { index, .. } => &mut entry.parameters[*index],
                CallPosition::Return => &mut entry.return_constraint,
            };
            assign(slot, declaration, position, self.policy)?;
        }

        debug!("Built constraint registry for {} method(s)", methods.len());
        Ok(ConstraintRegistry { methods })
    }
}

/// Bounds must match the declared type, be self-comparable and be ordered
fn check_bounds(
    method: &str,
    position: &CallPosition,
    declared: ValType,
    constraint: &dyn ValueConstraint,
) -> Result<()> {
    let fault = |code: u16, message: &'static str| {
        Error::malformed_metadata(code, message, method, Some(position.clone()))
    };

    if constraint.bound_type() != declared {
        debug!(
            "{position} of `{method}` is {declared}, bounds are {}",
            constraint.bound_type()
        );
        return Err(fault(codes::BOUND_TYPE_MISMATCH, "Bound type differs from the declared type"));
    }

    let lower = constraint.lower();
    let upper = constraint.upper();
    for bound in lower.iter().chain(upper.iter()) {
        if bound.compare(bound).is_none() {
            return Err(fault(codes::INCOMPARABLE_BOUND, "Bound is not comparable with itself"));
        }
    }
    if let (Some(lower), Some(upper)) = (&lower, &upper) {
        if lower.compare(upper) == Some(Ordering::Greater) {
            return Err(fault(codes::INVERTED_BOUNDS, "Lower bound exceeds upper bound"));
        }
    }
    Ok(())
}

fn assign(
    slot: &mut Option<Arc<dyn ValueConstraint>>,
    declaration: Declaration,
    position: CallPosition,
    policy: DuplicatePolicy,
) -> Result<()> {
    if slot.is_none() {
        *slot = Some(declaration.constraint);
        return Ok(());
    }
    match policy {
        DuplicatePolicy::Reject => Err(Error::malformed_metadata(
            codes::DUPLICATE_CONSTRAINT,
            "More than one range declared on a call position",
            declaration.method,
            Some(position),
        )),
        DuplicatePolicy::KeepFirst => {
            debug!("Ignoring repeated range on {position} of `{}`", declaration.method);
            Ok(())
        },
        DuplicatePolicy::KeepLast => {
            debug!("Replacing range on {position} of `{}`", declaration.method);
            *slot = Some(declaration.constraint);
            Ok(())
        },
    }
}

/// Validated, immutable set of method constraints
#[derive(Debug, Default)]
pub struct ConstraintRegistry {
    methods: HashMap<String, MethodEntry>,
}

impl ConstraintRegistry {
    /// Start declaring constraints
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// A registry with no methods; every resolution is empty
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve the catalog for `method`
    ///
    /// An undeclared method resolves to an empty catalog.
    #[must_use]
    pub fn resolve(&self, method: &str) -> ConstraintCatalog {
        trace!("Resolving constraints for `{method}`");
        match self.methods.get(method) {
            Some(entry) => entry.catalog(),
            None => ConstraintCatalog::empty(method),
        }
    }

    /// Signature of a declared method
    #[must_use]
    pub fn signature(&self, method: &str) -> Option<&MethodSignature> {
        self.methods.get(method).map(|entry| &entry.signature)
    }

    /// Names of all declared methods
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Number of declared methods
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// `true` if no method is declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rg_error::ErrorDetail;

    fn sector() -> MethodSignature {
        MethodSignature::new("sector_area")
            .param("radius", ValType::F64)
            .param("angle", ValType::F64)
            .returns(ValType::F64)
    }

    #[test]
    fn test_resolve_declared_method() {
        let registry = ConstraintRegistry::builder()
            .method(sector())
            .constrain_parameter("sector_area", "radius", RangeConstraint::at_least(0.0_f64))
            .constrain_parameter("sector_area", 1_usize, RangeConstraint::between(0.0_f64, 6.0))
            .build()
            .unwrap();

        let catalog = registry.resolve("sector_area");
        assert_eq!(catalog.parameters().len(), 2);
        assert_eq!(catalog.parameter(0).and_then(|c| c.lower()), Some(0.0_f64.into()));
        assert_eq!(catalog.parameter(1).and_then(|c| c.upper()), Some(6.0_f64.into()));
        assert!(catalog.return_constraint().is_none());
    }

    #[test]
    fn test_undeclared_method_resolves_empty() {
        let registry = ConstraintRegistry::builder().method(sector()).build().unwrap();
        assert_eq!(registry.resolve("volume"), ConstraintCatalog::empty("volume"));
        assert!(ConstraintRegistry::empty().resolve("sector_area").is_unconstrained());
    }

    #[test]
    fn test_resolution_is_stable() {
        let registry = ConstraintRegistry::builder()
            .method(sector())
            .constrain_return("sector_area", RangeConstraint::at_least(0.0_f64))
            .build()
            .unwrap();
        assert_eq!(registry.resolve("sector_area"), registry.resolve("sector_area"));
    }

    #[test]
    fn test_duplicate_rejected_by_default() {
        let error = ConstraintRegistry::builder()
            .method(sector())
            .constrain_parameter("sector_area", "angle", RangeConstraint::at_least(0.0_f64))
            .constrain_parameter("sector_area", 1_usize, RangeConstraint::at_most(6.0_f64))
            .build()
            .unwrap_err();
        assert_eq!(error.code, codes::DUPLICATE_CONSTRAINT);
        assert!(error.is_metadata_error());
        assert_eq!(
            error.detail(),
            Some(&ErrorDetail::Metadata {
                method: "sector_area".to_string(),
                position: Some(CallPosition::parameter("angle", 1)),
            })
        );
    }

    #[test]
    fn test_duplicate_policies() {
        let build = |policy| {
            ConstraintRegistry::builder()
                .with_duplicate_policy(policy)
                .method(sector())
                .constrain_return("sector_area", RangeConstraint::at_least(0.0_f64))
                .constrain_return("sector_area", RangeConstraint::at_least(1.0_f64))
                .build()
                .unwrap()
                .resolve("sector_area")
                .return_constraint()
                .and_then(|c| c.lower())
        };
        assert_eq!(build(DuplicatePolicy::KeepFirst), Some(0.0_f64.into()));
        assert_eq!(build(DuplicatePolicy::KeepLast), Some(1.0_f64.into()));
    }

    #[test]
    fn test_bound_type_mismatch() {
        let error = ConstraintRegistry::builder()
            .method(sector())
            .constrain_parameter("sector_area", "radius", RangeConstraint::at_least(0_i32))
            .build()
            .unwrap_err();
        assert_eq!(error.code, codes::BOUND_TYPE_MISMATCH);
    }

    #[test]
    fn test_nan_bound_rejected() {
        let error = ConstraintRegistry::builder()
            .method(sector())
            .constrain_return("sector_area", RangeConstraint::at_most(f64::NAN))
            .build()
            .unwrap_err();
        assert_eq!(error.code, codes::INCOMPARABLE_BOUND);
        assert_eq!(
            error.detail(),
            Some(&ErrorDetail::Metadata {
                method: "sector_area".to_string(),
                position: Some(CallPosition::Return),
            })
        );
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let error = ConstraintRegistry::builder()
            .method(sector())
            .constrain_parameter("sector_area", "angle", RangeConstraint::between(6.0_f64, 0.0))
            .build()
            .unwrap_err();
        assert_eq!(error.code, codes::INVERTED_BOUNDS);
        assert_eq!(
            error.detail(),
            Some(&ErrorDetail::Metadata {
                method: "sector_area".to_string(),
                position: Some(CallPosition::parameter("angle", 1)),
            })
        );
    }

    #[test]
    fn test_unknown_targets_rejected() {
        let unknown_method = ConstraintRegistry::builder()
            .constrain_return("volume", RangeConstraint::at_least(0.0_f64))
            .build()
            .unwrap_err();
        assert_eq!(unknown_method.code, codes::UNKNOWN_METHOD);

        let unknown_parameter = ConstraintRegistry::builder()
            .method(sector())
            .constrain_parameter("sector_area", "depth", RangeConstraint::at_least(0.0_f64))
            .build()
            .unwrap_err();
        assert_eq!(unknown_parameter.code, codes::UNKNOWN_PARAMETER);

        let out_of_range_index = ConstraintRegistry::builder()
            .method(sector())
            .constrain_parameter("sector_area", 2_usize, RangeConstraint::at_least(0.0_f64))
            .build()
            .unwrap_err();
        assert_eq!(out_of_range_index.code, codes::UNKNOWN_PARAMETER);
    }

    #[test]
    fn test_duplicate_method_rejected() {
        let error =
            ConstraintRegistry::builder().method(sector()).method(sector()).build().unwrap_err();
        assert_eq!(error.code, codes::DUPLICATE_METHOD);
    }

    #[test]
    fn test_disabled_constraint_is_still_validated() {
        let error = ConstraintRegistry::builder()
            .method(sector())
            .constrain_return("sector_area", RangeConstraint::between(1.0_f64, 0.0).disabled())
            .build()
            .unwrap_err();
        assert_eq!(error.code, codes::INVERTED_BOUNDS);
    }
}
