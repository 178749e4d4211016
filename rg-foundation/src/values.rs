// RG - rg-foundation
// Module: Dynamic Values
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Dynamically typed call values.
//!
//! A [`Value`] carries one argument or result across a dispatcher. Two
//! values only compare when they hold the same variant; nothing is widened.

use core::{cmp::Ordering, fmt};

use rg_error::{Error, Result};

use crate::types::ValType;

/// A dynamically typed argument or result of an intercepted call
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value (`void` return)
    #[default]
    Unit,
    /// Boolean value
    Bool(bool),
    /// Signed 32-bit integer
    S32(i32),
    /// Signed 64-bit integer
    S64(i64),
    /// Unsigned 32-bit integer
    U32(u32),
    /// Unsigned 64-bit integer
    U64(u64),
    /// 32-bit floating point
    F32(f32),
    /// 64-bit floating point
    F64(f64),
    /// Character value
    Char(char),
    /// String value
    String(String),
}

impl Value {
    /// Get the type of this value
    #[must_use]
    pub const fn value_type(&self) -> ValType {
        match self {
            Value::Unit => ValType::Unit,
            Value::Bool(_) => ValType::Bool,
            Value::S32(_) => ValType::S32,
            Value::S64(_) => ValType::S64,
            Value::U32(_) => ValType::U32,
            Value::U64(_) => ValType::U64,
            Value::F32(_) => ValType::F32,
            Value::F64(_) => ValType::F64,
            Value::Char(_) => ValType::Char,
            Value::String(_) => ValType::String,
        }
    }

    /// Decode into a concrete Rust type
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if the value does not hold a `T`.
    pub fn decode<T: FromValue>(&self) -> Result<T> {
        T::from_value(self).ok_or_else(|| {
            Error::type_mismatch("Value does not have the expected type").with_context(format!(
                "expected {}, found {} `{}`",
                T::VAL_TYPE,
                self.value_type(),
                self
            ))
        })
    }

    /// Compare two values of the same type
    ///
    /// Values of different types, and float comparisons involving NaN, are
    /// unordered.
    #[must_use]
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Unit, Value::Unit) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::S32(a), Value::S32(b)) => a.partial_cmp(b),
            (Value::S64(a), Value::S64(b)) => a.partial_cmp(b),
            (Value::U32(a), Value::U32(b)) => a.partial_cmp(b),
            (Value::U64(a), Value::U64(b)) => a.partial_cmp(b),
            (Value::F32(a), Value::F32(b)) => a.partial_cmp(b),
            (Value::F64(a), Value::F64(b)) => a.partial_cmp(b),
            (Value::Char(a), Value::Char(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::S32(v) => write!(f, "{v}"),
            Value::S64(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
        }
    }
}

/// Conversion from a dynamic [`Value`] into a concrete type
///
/// The conversion is exact: a value of a different variant yields `None`,
/// it is never widened or narrowed.
pub trait FromValue: Sized {
    /// The declared type this Rust type maps to
    const VAL_TYPE: ValType;

    /// Extract `Self` from a value of the matching variant
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_value_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                const VAL_TYPE: ValType = ValType::$variant;

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_value_conversions! {
    bool => Bool,
    i32 => S32,
    i64 => S64,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    char => Char,
}

impl FromValue for String {
    const VAL_TYPE: ValType = ValType::String;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl FromValue for () {
    const VAL_TYPE: ValType = ValType::Unit;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Unit => Some(()),
            _ => None,
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

/// Types a range constraint can be bound to
///
/// Anything that round-trips through [`Value`] and has a partial order.
pub trait RangeValue:
    FromValue + Into<Value> + Clone + PartialOrd + fmt::Debug + Send + Sync + 'static
{
}

impl<T> RangeValue for T where
    T: FromValue + Into<Value> + Clone + PartialOrd + fmt::Debug + Send + Sync + 'static
{
}

/// Decode the argument at `index` of a dynamic call
///
/// # Errors
///
/// Returns an argument count error if there is no argument at `index`, or a
/// type mismatch error if it has the wrong type.
pub fn typed_arg<T: FromValue>(args: &[Value], index: usize) -> Result<T> {
    args.get(index)
        .ok_or_else(|| {
            Error::argument_count_mismatch("Missing argument for call")
                .with_context(format!("no argument at position {index}, got {}", args.len()))
        })?
        .decode()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rg_error::codes;

    use super::*;

    #[test]
    fn test_value_types() {
        assert_eq!(Value::from(1.5_f64).value_type(), ValType::F64);
        assert_eq!(Value::from(-3_i32).value_type(), ValType::S32);
        assert_eq!(Value::from("x").value_type(), ValType::String);
        assert_eq!(Value::from(()).value_type(), ValType::Unit);
    }

    #[test]
    fn test_decode_is_exact() {
        assert_eq!(Value::F64(2.0).decode::<f64>(), Ok(2.0));
        assert_eq!(f32::from_value(&Value::F64(2.0)), None);
        assert_eq!(i64::from_value(&Value::S32(2)), None);

        let error = Value::S32(2).decode::<f64>().unwrap_err();
        assert_eq!(error.code, codes::TYPE_MISMATCH);
    }

    #[test]
    fn test_display_renders_plain_text() {
        assert_eq!(Value::F64(-0.5).to_string(), "-0.5");
        assert_eq!(Value::F64(1.0).to_string(), "1");
        assert_eq!(Value::S32(-1).to_string(), "-1");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::Unit.to_string(), "()");
    }

    #[test]
    fn test_compare_requires_same_type() {
        assert_eq!(Value::S32(1).compare(&Value::S32(2)), Some(Ordering::Less));
        assert_eq!(Value::S32(1).compare(&Value::S64(1)), None);
        assert_eq!(Value::F64(f64::NAN).compare(&Value::F64(1.0)), None);
    }

    #[test]
    fn test_typed_arg() {
        let args = vec![Value::F64(1.0), Value::S32(7)];
        assert_eq!(typed_arg::<f64>(&args, 0), Ok(1.0));
        assert_eq!(typed_arg::<i32>(&args, 1), Ok(7));
        assert_eq!(typed_arg::<f64>(&args, 2).unwrap_err().code, codes::ARGUMENT_COUNT_MISMATCH);
        assert_eq!(typed_arg::<f64>(&args, 1).unwrap_err().code, codes::TYPE_MISMATCH);
    }
}
