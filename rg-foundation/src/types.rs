// RG - rg-foundation
// Module: Value Types
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Declared types of parameter and return positions.

use core::fmt;

/// Declared type of a parameter or return position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValType {
    /// No value (`void` return)
    Unit,
    /// Boolean
    Bool,
    /// Signed 32-bit integer
    S32,
    /// Signed 64-bit integer
    S64,
    /// Unsigned 32-bit integer
    U32,
    /// Unsigned 64-bit integer
    U64,
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    F64,
    /// Unicode scalar value
    Char,
    /// UTF-8 string
    String,
}

impl ValType {
    /// Short lowercase name, as used in signatures
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool => "bool",
            Self::S32 => "s32",
            Self::S64 => "s64",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "string",
        }
    }

    /// Check if values of this type are numbers
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::S32 | Self::S64 | Self::U32 | Self::U64 | Self::F32 | Self::F64
        )
    }
}

impl fmt::Display for ValType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
