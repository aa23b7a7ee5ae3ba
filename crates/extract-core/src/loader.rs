// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Reading and parsing config documents from disk

use std::path::Path;

use anyhow::{Context, Result};

use crate::Document;

/// Parse a TOML string into a document.
pub fn parse_document(text: &str) -> Result<Document> {
    toml::from_str(text).context("parsing config document")
}

/// Read and parse a config document from a file.
pub fn read_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        anyhow::bail!("expected a config at {:?}, but the file doesn't exist", path);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {:?}", path))?;
    toml::from_str(&content).with_context(|| format!("parsing config file {:?}", path))
}
