// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Dotted-path resolution over a document tree

use toml::Value;

use crate::Document;

/// Resolve a dotted key path against a document.
///
/// Segments are matched exactly (case-sensitive) against nested table keys;
/// there is no wildcard or array-index syntax. Absence of any segment along
/// the way yields `None`, as does resolving *through* a non-table node.
/// Whoever expected a table at that point raises the error, not the resolver.
pub fn resolve<'a>(doc: &'a Document, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut node = doc.get(segments.next()?)?;
    for segment in segments {
        node = node.as_table()?.get(segment)?;
    }
    Some(node)
}
