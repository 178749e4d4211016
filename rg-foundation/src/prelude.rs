// RG - rg-foundation
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for rg-foundation
//!
//! Re-exports the value model together with the error types so dependent
//! crates can use a single glob import.

pub use core::{cmp::Ordering, fmt, fmt::Debug, fmt::Display};
pub use std::{
    collections::HashMap,
    string::{String, ToString},
    sync::{Arc, RwLock},
    vec::Vec,
};

pub use rg_error::prelude::*;

pub use crate::{
    types::ValType,
    values::{typed_arg, FromValue, RangeValue, Value},
};
