// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Renderer configuration schema

use std::sync::OnceLock;

use extract_core::{resolve, Document, FlagLookup, Pipeline, Result};
use serde::Serialize;

use crate::MAX_FLAG_NAMES;

// Renderer creation flags, SDL2 ABI values.
pub const RENDERER_SOFTWARE: u32 = 0x0000_0001;
pub const RENDERER_ACCELERATED: u32 = 0x0000_0002;
pub const RENDERER_PRESENT_VSYNC: u32 = 0x0000_0004;
pub const RENDERER_TARGET_TEXTURE: u32 = 0x0000_0008;

/// Validated renderer parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RendererConfig {
    /// Index of the rendering driver; `-1` for the first one that matches.
    pub driver_index: i32,
    pub flags: u32,
}

/// The renderer flag-name table.
///
/// Acceptable names: software, accelerated, present-vsync, target-texture.
pub fn renderer_flag_lookup() -> &'static FlagLookup {
    static LOOKUP: OnceLock<FlagLookup> = OnceLock::new();
    LOOKUP.get_or_init(|| {
        FlagLookup::new(&[
            ("software", RENDERER_SOFTWARE),
            ("accelerated", RENDERER_ACCELERATED),
            ("present-vsync", RENDERER_PRESENT_VSYNC),
            ("target-texture", RENDERER_TARGET_TEXTURE),
        ])
    })
}

/// Load the `renderer` subtree of a document.
///
/// Optional fields: `driver_index` (integer, default `-1`) and `flags`
/// (array of strings, see [`renderer_flag_lookup`]). Unrecognized flag names
/// are appended to `diagnostics` and logged; they never fail the load.
pub fn load_renderer(doc: &Document, diagnostics: &mut Vec<String>) -> Result<RendererConfig> {
    let mut driver_index = -1i32;
    let mut flags = 0u32;

    let before = diagnostics.len();
    let mut chain = Pipeline::new(doc)
        .subtable("renderer")
        .load_or("driver_index", &mut driver_index, -1);
    if resolve(doc, "renderer.flags").is_some() {
        chain = chain.load_flags(
            "flags",
            renderer_flag_lookup(),
            MAX_FLAG_NAMES,
            &mut flags,
            diagnostics,
        );
    }
    chain.finish()?;

    for name in &diagnostics[before..] {
        tracing::warn!(flag = %name, "no renderer flag with this name, skipping");
    }

    Ok(RendererConfig {
        driver_index,
        flags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract_core::ExtractError;

    fn doc(text: &str) -> Document {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn loads_flags_and_driver_index() {
        let doc = doc(
            "[renderer]\n\
             driver_index = 2\n\
             flags = [\"accelerated\", \"present-vsync\", \"glitter\"]",
        );
        let mut diagnostics = Vec::new();
        let config = load_renderer(&doc, &mut diagnostics).unwrap();
        assert_eq!(config.driver_index, 2);
        assert_eq!(config.flags, RENDERER_ACCELERATED | RENDERER_PRESENT_VSYNC);
        assert_eq!(diagnostics, ["glitter"]);
    }

    #[test]
    fn driver_index_reads_the_snake_case_key() {
        // The field key is snake_case, unlike the kebab-case flag names.
        let doc = doc("[renderer]\ndriver_index = 2");
        let mut diagnostics = Vec::new();
        let config = load_renderer(&doc, &mut diagnostics).unwrap();
        assert_eq!(config.driver_index, 2);
    }

    #[test]
    fn driver_index_defaults_to_first_match() {
        let doc = doc("[renderer]\nflags = [\"software\"]");
        let mut diagnostics = Vec::new();
        let config = load_renderer(&doc, &mut diagnostics).unwrap();
        assert_eq!(config.driver_index, -1);
        assert_eq!(config.flags, RENDERER_SOFTWARE);
    }

    #[test]
    fn missing_renderer_table_is_hard() {
        let doc = doc("[window]\ntitle = \"g\"");
        let mut diagnostics = Vec::new();
        assert_eq!(
            load_renderer(&doc, &mut diagnostics),
            Err(ExtractError::Missing("renderer".to_string()))
        );
    }
}
