// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Flag-name resolution with soft failure for unknown names
//!
//! This is the second error discipline the engine carries: structural
//! problems with the flag *array* are hard errors, but an unrecognized flag
//! *name* never aborts. It is appended to the caller's diagnostics list and
//! the remaining names still resolve.

use std::collections::BTreeMap;

use crate::array::load_array;
use crate::error::Result;
use crate::Document;

/// Immutable lowercase-name → bit lookup, built once per call site.
///
/// The table is configuration data, not global state: callers construct one
/// per resource kind and pass it in.
#[derive(Debug, Clone, Default)]
pub struct FlagLookup {
    bits: BTreeMap<String, u32>,
}

impl FlagLookup {
    /// Build a lookup from name/bit pairs. Names are stored lowercase.
    pub fn new(entries: &[(&str, u32)]) -> Self {
        let bits = entries
            .iter()
            .map(|(name, bit)| (name.to_lowercase(), *bit))
            .collect();
        Self { bits }
    }

    /// The bit registered for a (lowercase) name.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.bits.get(name).copied()
    }
}

/// Union the bits of every recognized name.
///
/// Names are lowercased before lookup. Unrecognized names are appended to
/// `diagnostics` in their original relative order; normalization never
/// reorders. Total: this never fails, and resolving an already-lowercase
/// list is indistinguishable from resolving a mixed-case spelling of it.
pub fn resolve_flags<I, S>(names: I, lookup: &FlagLookup, diagnostics: &mut Vec<String>) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut union = 0u32;
    for name in names {
        let lower = name.as_ref().to_lowercase();
        match lookup.get(&lower) {
            Some(bit) => union |= bit,
            None => diagnostics.push(lower),
        }
    }
    union
}

/// Read a capacity-limited array of flag names at `path` and resolve it
/// against `lookup`, writing the union to `out`.
///
/// Hard only with respect to the array shape (missing, not an array,
/// non-string elements, over capacity). Unknown flag names degrade into
/// `diagnostics`; a caller that wants them fatal checks the list itself.
pub fn load_flags(
    doc: &Document,
    path: &str,
    lookup: &FlagLookup,
    capacity: usize,
    out: &mut u32,
    diagnostics: &mut Vec<String>,
) -> Result<()> {
    let mut names = vec![String::new(); capacity];
    let count = load_array::<String>(doc, path, &mut names)?;
    *out = resolve_flags(&names[..count], lookup, diagnostics);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    fn lookup() -> FlagLookup {
        FlagLookup::new(&[("timer", 0x1), ("audio", 0x10), ("video", 0x20)])
    }

    fn doc(text: &str) -> Document {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn unions_known_bits_and_collects_unknown_names_in_order() {
        let mut diagnostics = Vec::new();
        let mask = resolve_flags(
            ["video", "animation", "timer", "geometry"],
            &lookup(),
            &mut diagnostics,
        );
        assert_eq!(mask, 0x21);
        assert_eq!(diagnostics, ["animation", "geometry"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut mixed_diags = Vec::new();
        let mut lower_diags = Vec::new();
        let mixed = resolve_flags(["VIDEO", "video", "made-up"], &lookup(), &mut mixed_diags);
        let lower = resolve_flags(["video", "video", "made-up"], &lookup(), &mut lower_diags);
        assert_eq!(mixed, lower);
        assert_eq!(mixed, 0x20);
        assert_eq!(mixed_diags, lower_diags);
        assert_eq!(mixed_diags, ["made-up"]);
    }

    #[test]
    fn empty_name_list_is_an_empty_mask() {
        let mut diagnostics = Vec::new();
        assert_eq!(resolve_flags::<_, &str>([], &lookup(), &mut diagnostics), 0);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn load_flags_is_hard_on_array_shape_only() {
        let doc = doc("flags = [\"audio\", \"bogus\"]\nbad = 7");
        let mut mask = 0u32;
        let mut diagnostics = Vec::new();

        load_flags(&doc, "flags", &lookup(), 8, &mut mask, &mut diagnostics).unwrap();
        assert_eq!(mask, 0x10);
        assert_eq!(diagnostics, ["bogus"]);

        assert_eq!(
            load_flags(&doc, "missing", &lookup(), 8, &mut mask, &mut diagnostics),
            Err(ExtractError::Missing("missing".to_string()))
        );
        assert_eq!(
            load_flags(&doc, "bad", &lookup(), 8, &mut mask, &mut diagnostics),
            Err(ExtractError::NotAnArray("bad".to_string()))
        );
    }

    #[test]
    fn load_flags_enforces_capacity() {
        let doc = doc("flags = [\"timer\", \"audio\", \"video\"]");
        let mut mask = 0u32;
        let mut diagnostics = Vec::new();
        assert_eq!(
            load_flags(&doc, "flags", &lookup(), 2, &mut mask, &mut diagnostics),
            Err(ExtractError::CapacityExceeded {
                path: "flags".to_string(),
                capacity: 2,
                actual: 3,
            })
        );
    }
}
