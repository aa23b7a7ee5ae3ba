// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Fail-fast chains of field-loading steps

use toml::Value;

use crate::error::{ExtractError, Result};
use crate::extract::{optional, required, Native};
use crate::flags::FlagLookup;
use crate::path::resolve;
use crate::Document;

/// A chainable loader that threads a document through a sequence of
/// field-loading steps.
///
/// Hard steps ([`load`](Self::load), [`subtable`](Self::subtable),
/// [`load_array`](Self::load_array), [`load_flags`](Self::load_flags))
/// poison the chain on failure; once poisoned, no later step runs, so output
/// slots reflect exactly the steps that executed before the failure. Soft
/// steps ([`load_or`](Self::load_or)) never fail. [`finish`](Self::finish)
/// yields the current document, or the first hard error unchanged.
///
/// Errors name full document paths even after the chain re-roots at a
/// subtable.
#[must_use]
pub struct Pipeline<'doc> {
    state: Result<&'doc Document>,
    prefix: String,
}

impl<'doc> Pipeline<'doc> {
    /// Start a chain over `doc`.
    pub fn new(doc: &'doc Document) -> Self {
        Self {
            state: Ok(doc),
            prefix: String::new(),
        }
    }

    fn qualify(&self, path: &str) -> String {
        if self.prefix.is_empty() {
            path.to_string()
        } else {
            format!("{}.{}", self.prefix, path)
        }
    }

    fn and_then(self, op: impl FnOnce(&'doc Document) -> Result<&'doc Document>) -> Self {
        Self {
            state: self.state.and_then(op),
            prefix: self.prefix,
        }
    }

    /// Hard step: re-root the chain at the table `path` resolves to.
    pub fn subtable(self, path: &str) -> Self {
        let full = self.qualify(path);
        let state = self.state.and_then(|doc| match resolve(doc, path) {
            Some(Value::Table(table)) => Ok(table),
            Some(_) => Err(ExtractError::NotATable(full.clone())),
            None => Err(ExtractError::Missing(full.clone())),
        });
        Self {
            state,
            prefix: full,
        }
    }

    /// Hard step: extract the field at `path` into `out`.
    pub fn load<T: Native>(self, path: &str, out: &mut T) -> Self {
        let full = self.qualify(path);
        self.and_then(|doc| match required(doc, path) {
            Ok(value) => {
                *out = value;
                Ok(doc)
            }
            Err(err) => Err(err.located_at(full)),
        })
    }

    /// Soft step: extract the field at `path` into `out`, or write `default`.
    pub fn load_or<T: Native>(self, path: &str, out: &mut T, default: T) -> Self {
        self.and_then(|doc| {
            *out = optional(doc, path, default);
            Ok(doc)
        })
    }

    /// Hard step: extract a bounded homogeneous array at `path` into `out`.
    pub fn load_array<T: Native>(self, path: &str, out: &mut [T]) -> Self {
        let full = self.qualify(path);
        self.and_then(|doc| match crate::array::load_array(doc, path, out) {
            Ok(_) => Ok(doc),
            Err(err) => Err(err.located_at(full)),
        })
    }

    /// Step that is hard for the flag array's shape only: unknown flag names
    /// degrade into `diagnostics` while the chain continues.
    pub fn load_flags(
        self,
        path: &str,
        lookup: &FlagLookup,
        capacity: usize,
        out: &mut u32,
        diagnostics: &mut Vec<String>,
    ) -> Self {
        let full = self.qualify(path);
        self.and_then(|doc| {
            match crate::flags::load_flags(doc, path, lookup, capacity, out, diagnostics) {
                Ok(()) => Ok(doc),
                Err(err) => Err(err.located_at(full)),
            }
        })
    }

    /// The chain's result: the current document, or the first hard error.
    pub fn finish(self) -> Result<&'doc Document> {
        self.state
    }
}
