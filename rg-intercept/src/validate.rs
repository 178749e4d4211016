// RG - rg-intercept
// Module: Call Validation
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Argument and return checks shared by both dispatchers.
//!
//! The proxy and the boundary sink only differ in how a call reaches the
//! target. Everything that decides whether a call is admitted lives here, so
//! the two strategies observe the same constraints the same way.

use std::sync::Arc;

use log::warn;
use rg_error::{Error, RangeViolation, Result};
use rg_foundation::Value;

use crate::{
    cache::CatalogCache,
    catalog::ConstraintCatalog,
    config::InterceptConfig,
    constraint::ValueConstraint,
    evaluator::{self, Verdict},
    registry::ConstraintRegistry,
};

/// Checks calls against a constraint registry
#[derive(Debug)]
pub struct RangeValidator {
    registry: Arc<ConstraintRegistry>,
    cache: CatalogCache,
    config: InterceptConfig,
}

impl RangeValidator {
    /// Validator with the default configuration
    #[must_use]
    pub fn new(registry: Arc<ConstraintRegistry>) -> Self {
        Self::with_config(registry, InterceptConfig::default())
    }

    /// Validator with an explicit configuration
    #[must_use]
    pub fn with_config(registry: Arc<ConstraintRegistry>, config: InterceptConfig) -> Self {
        Self { registry, cache: CatalogCache::new(), config }
    }

    /// The registry this validator reads from
    #[must_use]
    pub fn registry(&self) -> &Arc<ConstraintRegistry> {
        &self.registry
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &InterceptConfig {
        &self.config
    }

    /// The catalog for `method`, from the cache when caching is enabled
    #[must_use]
    pub fn catalog(&self, method: &str) -> Arc<ConstraintCatalog> {
        if self.config.cache_catalogs {
            self.cache.get_or_resolve(&self.registry, method)
        } else {
            Arc::new(self.registry.resolve(method))
        }
    }

    /// Check each argument against the constraint of its parameter
    ///
    /// Parameters are checked in declaration order and the first violation
    /// wins. A constrained parameter with no matching argument is skipped.
    ///
    /// # Errors
    ///
    /// Returns a range violation naming the first offending parameter.
    pub fn check_arguments(&self, catalog: &ConstraintCatalog, args: &[Value]) -> Result<()> {
        for (index, slot, constraint) in catalog.constrained_parameters() {
            let Some(arg) = args.get(index) else {
                continue;
            };
            let verdict = evaluator::assess(constraint, arg);
            if !verdict.passed() {
                let violation = RangeViolation::parameter(
                    catalog.method(),
                    slot.name.as_str(),
                    index,
                    arg.to_string(),
                );
                return Err(self.reject(violation, verdict, constraint));
            }
        }
        Ok(())
    }

    /// Check a return value against the return constraint
    ///
    /// # Errors
    ///
    /// Returns a range violation for the return position.
    pub fn check_return(&self, catalog: &ConstraintCatalog, value: &Value) -> Result<()> {
        let Some(constraint) = catalog.return_constraint() else {
            return Ok(());
        };
        let verdict = evaluator::assess(constraint, value);
        if verdict.passed() {
            return Ok(());
        }
        let violation = RangeViolation::return_value(catalog.method(), value.to_string());
        Err(self.reject(violation, verdict, constraint))
    }

    fn reject(
        &self,
        violation: RangeViolation,
        verdict: Verdict,
        constraint: &dyn ValueConstraint,
    ) -> Error {
        if self.config.log_violations {
            warn!("{violation} ({verdict}, allowed {constraint})");
        }
        Error::range_violation(violation)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rg_error::{codes, CallPosition};
    use rg_foundation::ValType;

    use super::*;
    use crate::{constraint::RangeConstraint, signature::MethodSignature};

    fn validator(config: InterceptConfig) -> RangeValidator {
        let registry = ConstraintRegistry::builder()
            .method(
                MethodSignature::new("sector_area")
                    .param("radius", ValType::F64)
                    .param("angle", ValType::F64)
                    .returns(ValType::F64),
            )
            .constrain_parameter("sector_area", "radius", RangeConstraint::at_least(0.0_f64))
            .constrain_parameter("sector_area", "angle", RangeConstraint::between(0.0_f64, 6.0))
            .constrain_return("sector_area", RangeConstraint::at_most(100.0_f64))
            .build()
            .unwrap();
        RangeValidator::with_config(Arc::new(registry), config)
    }

    #[test]
    fn test_first_violation_wins() {
        let validator = validator(InterceptConfig::default());
        let catalog = validator.catalog("sector_area");

        let error = validator
            .check_arguments(&catalog, &[Value::F64(-1.0), Value::F64(-1.0)])
            .unwrap_err();
        assert_eq!(
            error.violation().map(|v| v.position.clone()),
            Some(CallPosition::parameter("radius", 0))
        );

        let error = validator
            .check_arguments(&catalog, &[Value::F64(1.0), Value::F64(-0.5)])
            .unwrap_err();
        assert_eq!(error.code, codes::PARAMETER_OUT_OF_RANGE);
        assert_eq!(
            error.violation(),
            Some(&RangeViolation::parameter("sector_area", "angle", 1, "-0.5"))
        );
    }

    #[test]
    fn test_missing_arguments_are_skipped() {
        let validator = validator(InterceptConfig::default());
        let catalog = validator.catalog("sector_area");
        assert_eq!(validator.check_arguments(&catalog, &[Value::F64(1.0)]), Ok(()));
        assert_eq!(validator.check_arguments(&catalog, &[]), Ok(()));
    }

    #[test]
    fn test_mismatched_argument_types_pass() {
        let validator = validator(InterceptConfig::default());
        let catalog = validator.catalog("sector_area");
        let args = [Value::S32(-1), Value::F32(-1.0)];
        assert_eq!(validator.check_arguments(&catalog, &args), Ok(()));
    }

    #[test]
    fn test_return_check() {
        let validator = validator(InterceptConfig::default());
        let catalog = validator.catalog("sector_area");
        assert_eq!(validator.check_return(&catalog, &Value::F64(3.0)), Ok(()));

        let error = validator.check_return(&catalog, &Value::F64(101.0)).unwrap_err();
        assert_eq!(error.code, codes::RETURN_OUT_OF_RANGE);
        assert_eq!(error.violation(), Some(&RangeViolation::return_value("sector_area", "101")));
    }

    #[test]
    fn test_uncached_resolution() {
        let validator =
            validator(InterceptConfig { cache_catalogs: false, log_violations: false });
        let first = validator.catalog("sector_area");
        let second = validator.catalog("sector_area");
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }
}
