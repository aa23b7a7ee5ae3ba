// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for document extraction

use thiserror::Error;

use crate::extract::ValueKind;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting values from a document.
///
/// Every variant carries the dotted path it originated at and propagates
/// through a pipeline unchanged. Unrecognized flag names are deliberately not
/// represented here; the flag resolver collects them as diagnostics instead
/// of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("missing required field: {0}")]
    Missing(String),

    #[error("{path} must have type {expected}, but it doesn't")]
    TypeMismatch { path: String, expected: ValueKind },

    #[error("{0} must be a table")]
    NotATable(String),

    #[error("{0} must be an array")]
    NotAnArray(String),

    #[error("all values in {path} must be {expected}")]
    HeterogeneousArray { path: String, expected: ValueKind },

    #[error("{path} can have at most {capacity} items, but it has {actual}")]
    CapacityExceeded {
        path: String,
        capacity: usize,
        actual: usize,
    },

    #[error("no extraction is defined for {0}")]
    UnsupportedType(ValueKind),
}

impl ExtractError {
    /// Re-anchor the originating path.
    ///
    /// Pipelines re-root at subtables and look fields up by their relative
    /// key, but errors must name the full document path.
    #[must_use]
    pub fn located_at(self, path: String) -> Self {
        match self {
            Self::Missing(_) => Self::Missing(path),
            Self::TypeMismatch { expected, .. } => Self::TypeMismatch { path, expected },
            Self::NotATable(_) => Self::NotATable(path),
            Self::NotAnArray(_) => Self::NotAnArray(path),
            Self::HeterogeneousArray { expected, .. } => {
                Self::HeterogeneousArray { path, expected }
            }
            Self::CapacityExceeded {
                capacity, actual, ..
            } => Self::CapacityExceeded {
                path,
                capacity,
                actual,
            },
            unsupported @ Self::UnsupportedType(_) => unsupported,
        }
    }
}
