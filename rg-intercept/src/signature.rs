// RG - rg-intercept
// Module: Method Signatures
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Declared shape of an intercepted method.

use rg_foundation::ValType;

/// One declared parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
    /// Parameter name
    pub name: String,
    /// Declared type
    pub ty: ValType,
}

/// Name, parameter list and return type of a method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    name: String,
    params: Vec<ParamDecl>,
    returns: ValType,
}

impl MethodSignature {
    /// A method with no parameters returning unit
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), params: Vec::new(), returns: ValType::Unit }
    }

    /// Append a parameter
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: ValType) -> Self {
        self.params.push(ParamDecl { name: name.into(), ty });
        self
    }

    /// Set the return type
    #[must_use]
    pub fn returns(mut self, ty: ValType) -> Self {
        self.returns = ty;
        self
    }

    /// Method name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameters in order
    #[must_use]
    pub fn params(&self) -> &[ParamDecl] {
        &self.params
    }

    /// Declared return type
    #[must_use]
    pub fn return_type(&self) -> ValType {
        self.returns
    }

    /// Position of the parameter called `name`
    #[must_use]
    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|param| param.name == name)
    }
}

/// Reference to a parameter by name or position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamRef {
    /// By declared name
    Name(String),
    /// By 0-based position
    Index(usize),
}

impl ParamRef {
    /// Resolve to a position within `signature`
    #[must_use]
    pub fn resolve(&self, signature: &MethodSignature) -> Option<usize> {
        match self {
            Self::Name(name) => signature.param_index(name),
            Self::Index(index) => (*index < signature.params().len()).then_some(*index),
        }
    }
}

impl From<&str> for ParamRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ParamRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for ParamRef {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl core::fmt::Display for ParamRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "`{name}`"),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_lookup() {
        let signature = MethodSignature::new("sector_area")
            .param("radius", ValType::F64)
            .param("angle", ValType::F64)
            .returns(ValType::F64);

        assert_eq!(signature.param_index("angle"), Some(1));
        assert_eq!(ParamRef::from("radius").resolve(&signature), Some(0));
        assert_eq!(ParamRef::from(1_usize).resolve(&signature), Some(1));
        assert_eq!(ParamRef::from(2_usize).resolve(&signature), None);
        assert_eq!(ParamRef::from("depth").resolve(&signature), None);
        assert_eq!(signature.return_type(), ValType::F64);
    }

    #[test]
    fn test_defaults_to_unit_return() {
        let signature = MethodSignature::new("reset");
        assert!(signature.params().is_empty());
        assert_eq!(signature.return_type(), ValType::Unit);
    }
}
