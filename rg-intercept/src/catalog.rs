// RG - rg-intercept
// Module: Constraint Catalogs
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The constraints that apply to one method.

use std::sync::Arc;

use rg_foundation::ValType;

use crate::constraint::{same_constraint, ValueConstraint};

/// One parameter of a resolved method and its constraint, if declared
#[derive(Debug, Clone)]
pub struct ParameterSlot {
    /// Declared parameter name
    pub name: String,
    /// Declared parameter type
    pub ty: ValType,
    /// Constraint attached to the parameter
    pub constraint: Option<Arc<dyn ValueConstraint>>,
}

impl PartialEq for ParameterSlot {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.ty == other.ty
            && same_optional(self.constraint.as_deref(), other.constraint.as_deref())
    }
}

/// Per-method view of the constraint registry
///
/// A catalog is a snapshot: once resolved it does not change, so it can be
/// cached and shared between threads.
#[derive(Debug, Clone)]
pub struct ConstraintCatalog {
    method: String,
    parameters: Vec<ParameterSlot>,
    return_constraint: Option<Arc<dyn ValueConstraint>>,
}

impl ConstraintCatalog {
    /// Catalog with no constraints, used for undeclared methods
    #[must_use]
    pub fn empty(method: impl Into<String>) -> Self {
        Self { method: method.into(), parameters: Vec::new(), return_constraint: None }
    }

    pub(crate) fn from_parts(
        method: impl Into<String>,
        parameters: Vec<ParameterSlot>,
        return_constraint: Option<Arc<dyn ValueConstraint>>,
    ) -> Self {
        Self { method: method.into(), parameters, return_constraint }
    }

    /// Method this catalog was resolved for
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// All parameters in declaration order
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSlot] {
        &self.parameters
    }

    /// Constraint of the parameter at `index`
    #[must_use]
    pub fn parameter(&self, index: usize) -> Option<&dyn ValueConstraint> {
        self.parameters.get(index)?.constraint.as_deref()
    }

    /// Constraint of the return value
    #[must_use]
    pub fn return_constraint(&self) -> Option<&dyn ValueConstraint> {
        self.return_constraint.as_deref()
    }

    /// Parameters that carry a constraint, with their positions
    pub fn constrained_parameters(
        &self,
    ) -> impl Iterator<Item = (usize, &ParameterSlot, &dyn ValueConstraint)> {
        self.parameters.iter().enumerate().filter_map(|(index, slot)| {
            slot.constraint.as_deref().map(|constraint| (index, slot, constraint))
        })
    }

    /// `true` if nothing in this catalog needs checking
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.return_constraint.is_none()
            && self.parameters.iter().all(|slot| slot.constraint.is_none())
    }
}

impl PartialEq for ConstraintCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method
            && self.parameters == other.parameters
            && same_optional(self.return_constraint(), other.return_constraint())
    }
}

fn same_optional(a: Option<&dyn ValueConstraint>, b: Option<&dyn ValueConstraint>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => same_constraint(a, b),
        (None, None) => true,
        _ => false,
    }
}
