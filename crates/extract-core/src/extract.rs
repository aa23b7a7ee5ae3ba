// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Typed coercion of document nodes into native scalar values

use std::fmt;

use toml::Value;

use crate::error::{ExtractError, Result};
use crate::path::resolve;
use crate::Document;

/// The kind of a document node, as reported in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Boolean,
    Integer,
    Float,
    String,
    Datetime,
    Array,
    Table,
}

impl ValueKind {
    /// The kind of a parsed node.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Boolean(_) => Self::Boolean,
            Value::Integer(_) => Self::Integer,
            Value::Float(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Datetime(_) => Self::Datetime,
            Value::Array(_) => Self::Array,
            Value::Table(_) => Self::Table,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Datetime => "datetime",
            Self::Array => "array",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for bool {}
    impl Sealed for i64 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for u8 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
}

/// A native scalar type the engine can coerce a document node into.
///
/// The set is closed. Coercion policy: a float node never satisfies an
/// integer request, an integer node satisfies a float request, and the
/// narrowing integer requests (`i32`, `u32`, `u8`) reject out-of-range
/// values rather than truncate. Every impl is total: a node is either
/// coerced or cleanly rejected, with no partial writes.
pub trait Native: sealed::Sealed + Sized {
    /// The node kind reported as `expected` in mismatch diagnostics.
    const KIND: ValueKind;

    /// Coerce a node, or reject it.
    fn from_value(value: &Value) -> Option<Self>;
}

impl Native for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Native for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_integer()
    }
}

impl Native for i32 {
    const KIND: ValueKind = ValueKind::Integer;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_integer().and_then(|n| i32::try_from(n).ok())
    }
}

impl Native for u32 {
    const KIND: ValueKind = ValueKind::Integer;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_integer().and_then(|n| u32::try_from(n).ok())
    }
}

impl Native for u8 {
    const KIND: ValueKind = ValueKind::Integer;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_integer().and_then(|n| u8::try_from(n).ok())
    }
}

impl Native for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(*x),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl Native for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

/// Resolve `path` and coerce the node to `T`.
///
/// Distinguishes the two failure kinds: [`ExtractError::Missing`] when the
/// path resolves to nothing, [`ExtractError::TypeMismatch`] when it resolves
/// to a node that cannot be coerced.
pub fn required<T: Native>(doc: &Document, path: &str) -> Result<T> {
    let node = resolve(doc, path).ok_or_else(|| ExtractError::Missing(path.to_string()))?;
    T::from_value(node).ok_or_else(|| ExtractError::TypeMismatch {
        path: path.to_string(),
        expected: T::KIND,
    })
}

/// Resolve `path` and coerce the node to `T`, falling back to `default` on
/// absence or mismatch. Never fails.
pub fn optional<T: Native>(doc: &Document, path: &str, default: T) -> T {
    resolve(doc, path)
        .and_then(T::from_value)
        .unwrap_or(default)
}

/// A dynamically-tagged scalar, for callers that pick the target kind at
/// runtime rather than through [`Native`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// Kind-indexed companion to [`required`].
///
/// Requesting a kind with no registered scalar coercion (tables, arrays,
/// datetimes) is a programming error and fails with
/// [`ExtractError::UnsupportedType`].
pub fn required_scalar(doc: &Document, path: &str, kind: ValueKind) -> Result<Scalar> {
    let node = resolve(doc, path).ok_or_else(|| ExtractError::Missing(path.to_string()))?;
    let coerced = match kind {
        ValueKind::Boolean => bool::from_value(node).map(Scalar::Boolean),
        ValueKind::Integer => i64::from_value(node).map(Scalar::Integer),
        ValueKind::Float => f64::from_value(node).map(Scalar::Float),
        ValueKind::String => String::from_value(node).map(Scalar::String),
        unsupported => return Err(ExtractError::UnsupportedType(unsupported)),
    };
    coerced.ok_or_else(|| ExtractError::TypeMismatch {
        path: path.to_string(),
        expected: kind,
    })
}
