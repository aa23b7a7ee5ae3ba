// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Typed extraction over parsed TOML configuration documents.
//!
//! This crate lets a caller declare, field by field, what a config document
//! is expected to contain, and obtain either the populated values or a
//! precise diagnostic of what is structurally wrong:
//!
//! - [`resolve`]: dotted-path lookup over the document tree
//! - [`required`] / [`optional`]: typed coercion of scalar fields
//! - [`load_array`]: bounded, all-or-nothing homogeneous array extraction
//! - [`Pipeline`]: fail-fast chains of field-loading steps
//! - [`FlagLookup`] / [`resolve_flags`]: named-bit-flag resolution
//!
//! Two error disciplines coexist by design. Structural problems such as a
//! missing field, a wrong node kind, or an oversized array are hard
//! [`ExtractError`]s that abort the enclosing pipeline and carry the
//! originating document path. Unrecognized flag names are soft: the flag
//! resolver collects them into a caller-owned diagnostics list, in order,
//! while the recognized names still resolve. Nothing here is ever converted
//! from one discipline to the other internally.
//!
//! The engine only reads documents, owns no output storage, and performs no
//! logging; collaborators decide how to surface diagnostics.

pub mod array;
pub mod error;
pub mod extract;
pub mod flags;
pub mod loader;
pub mod path;
pub mod pipeline;

pub use array::load_array;
pub use error::{ExtractError, Result};
pub use extract::{optional, required, required_scalar, Native, Scalar, ValueKind};
pub use flags::{load_flags, resolve_flags, FlagLookup};
pub use loader::{parse_document, read_document};
pub use path::resolve;
pub use pipeline::Pipeline;

/// A parsed configuration document: a tree of tables, arrays, and scalar
/// leaves. The engine never mutates one.
pub type Document = toml::Table;
