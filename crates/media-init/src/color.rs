// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! RGBA color values read from a document

use extract_core::{load_array, Document, ExtractError, Result};
use serde::Serialize;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Load a color from the array of exactly four channel values (red, green,
/// blue, alpha, each 0-255) at `path`.
///
/// Fewer than four channels is reported as a missing element; more than four
/// exceeds the slot's capacity. A channel outside 0-255 rejects the array
/// like any other non-coercible element.
pub fn load_color(doc: &Document, path: &str) -> Result<Color> {
    let mut channels = [0u8; 4];
    let count = load_array::<u8>(doc, path, &mut channels)?;
    if count < channels.len() {
        return Err(ExtractError::Missing(format!("{path}[{count}]")));
    }
    let [r, g, b, a] = channels;
    Ok(Color { r, g, b, a })
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract_core::ValueKind;

    fn doc(text: &str) -> Document {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn loads_four_channels_in_order() {
        let doc = doc("[renderer]\ndraw-color = [66, 135, 245, 255]");
        assert_eq!(
            load_color(&doc, "renderer.draw-color"),
            Ok(Color {
                r: 66,
                g: 135,
                b: 245,
                a: 255,
            })
        );
    }

    #[test]
    fn too_few_channels_name_the_first_missing_one() {
        let doc = doc("tint = [66, 135, 245]");
        assert_eq!(
            load_color(&doc, "tint"),
            Err(ExtractError::Missing("tint[3]".to_string()))
        );
    }

    #[test]
    fn too_many_channels_exceed_the_slot() {
        let doc = doc("tint = [1, 2, 3, 4, 5]");
        assert_eq!(
            load_color(&doc, "tint"),
            Err(ExtractError::CapacityExceeded {
                path: "tint".to_string(),
                capacity: 4,
                actual: 5,
            })
        );
    }

    #[test]
    fn out_of_range_channels_are_rejected() {
        let doc = doc("tint = [66, 135, 300, 255]");
        assert_eq!(
            load_color(&doc, "tint"),
            Err(ExtractError::HeterogeneousArray {
                path: "tint".to_string(),
                expected: ValueKind::Integer,
            })
        );
    }
}
