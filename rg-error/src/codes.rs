// RG - rg-error
// Module: Range Guard Error Codes
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for Range Guard

// Range violation codes (1000-1999)
/// An argument failed the range constraint declared on its parameter
pub const PARAMETER_OUT_OF_RANGE: u16 = 1000;
/// A return value failed the range constraint declared on its method
pub const RETURN_OUT_OF_RANGE: u16 = 1001;

// Metadata error codes (2000-2999)
/// More than one range descriptor attached to the same call position
pub const DUPLICATE_CONSTRAINT: u16 = 2000;
/// Bound type differs from the declared type of the call position
pub const BOUND_TYPE_MISMATCH: u16 = 2001;
/// A bound that cannot be compared with itself (e.g. NaN)
pub const INCOMPARABLE_BOUND: u16 = 2002;
/// Lower bound greater than upper bound
pub const INVERTED_BOUNDS: u16 = 2003;
/// Metadata refers to a method that was never declared
pub const UNKNOWN_METHOD: u16 = 2004;
/// Metadata refers to a parameter the method does not have
pub const UNKNOWN_PARAMETER: u16 = 2005;
/// The same method signature was declared twice
pub const DUPLICATE_METHOD: u16 = 2006;

// Dispatch error codes (3000-3999)
/// A dynamic target has no method with the requested name
pub const METHOD_NOT_FOUND: u16 = 3000;
/// Wrong number of arguments for the called method
pub const ARGUMENT_COUNT_MISMATCH: u16 = 3001;
/// The receiving sink does not handle this kind of message
pub const UNSUPPORTED_MESSAGE: u16 = 3002;

// Type error codes (4000-4999)
/// A value did not have the type required at a typed boundary
pub const TYPE_MISMATCH: u16 = 4000;

// Runtime error codes (5000-5999)
/// General runtime error raised by target code
pub const RUNTIME_ERROR: u16 = 5000;
/// Execution of the target method failed
pub const EXECUTION_ERROR: u16 = 5001;
/// The target rejected an argument on its own terms
pub const INVALID_ARGUMENT: u16 = 5002;
