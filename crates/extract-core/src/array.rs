// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Bounded extraction of homogeneous arrays

use crate::error::{ExtractError, Result};
use crate::extract::Native;
use crate::path::resolve;
use crate::Document;

/// Extract a homogeneous array at `path` into a caller-owned slot.
///
/// The slot's length is its capacity. Every element must coerce to `T`
/// ([`ExtractError::HeterogeneousArray`] otherwise), and the array must fit
/// the slot ([`ExtractError::CapacityExceeded`]). Elements are written in
/// document order and the count written is returned. All-or-nothing: on any
/// failure the slot is left untouched.
pub fn load_array<T: Native>(doc: &Document, path: &str, out: &mut [T]) -> Result<usize> {
    let node = resolve(doc, path).ok_or_else(|| ExtractError::Missing(path.to_string()))?;
    let items = node
        .as_array()
        .ok_or_else(|| ExtractError::NotAnArray(path.to_string()))?;

    // Stage everything before touching the slot.
    let mut staged = Vec::with_capacity(items.len());
    for item in items {
        let value = T::from_value(item).ok_or_else(|| ExtractError::HeterogeneousArray {
            path: path.to_string(),
            expected: T::KIND,
        })?;
        staged.push(value);
    }

    if staged.len() > out.len() {
        return Err(ExtractError::CapacityExceeded {
            path: path.to_string(),
            capacity: out.len(),
            actual: staged.len(),
        });
    }

    let count = staged.len();
    for (slot, value) in out.iter_mut().zip(staged) {
        *slot = value;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ValueKind;

    fn doc(text: &str) -> Document {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn writes_elements_in_document_order() {
        let doc = doc("flags = [\"a\", \"b\", \"c\"]");
        let mut slot = vec![String::new(); 4];
        let count = load_array::<String>(&doc, "flags", &mut slot).unwrap();
        assert_eq!(count, 3);
        assert_eq!(&slot[..count], ["a", "b", "c"]);
    }

    #[test]
    fn missing_and_shape_errors() {
        let doc = doc("flags = 3");
        let mut slot = vec![String::new(); 4];
        assert_eq!(
            load_array::<String>(&doc, "nothing", &mut slot),
            Err(ExtractError::Missing("nothing".to_string()))
        );
        assert_eq!(
            load_array::<String>(&doc, "flags", &mut slot),
            Err(ExtractError::NotAnArray("flags".to_string()))
        );
    }

    #[test]
    fn mixed_element_kinds_are_rejected() {
        let doc = doc("flags = [\"a\", 2]");
        let mut slot = vec![String::new(); 4];
        assert_eq!(
            load_array::<String>(&doc, "flags", &mut slot),
            Err(ExtractError::HeterogeneousArray {
                path: "flags".to_string(),
                expected: ValueKind::String,
            })
        );
    }

    #[test]
    fn over_capacity_leaves_the_slot_untouched() {
        let doc = doc("sizes = [1, 2, 3, 4, 5]");
        let mut slot = [0i64; 3];
        assert_eq!(
            load_array::<i64>(&doc, "sizes", &mut slot),
            Err(ExtractError::CapacityExceeded {
                path: "sizes".to_string(),
                capacity: 3,
                actual: 5,
            })
        );
        assert_eq!(slot, [0, 0, 0]);
    }

    #[test]
    fn failure_part_way_through_writes_nothing() {
        let doc = doc("sizes = [1, 2, \"three\"]");
        let mut slot = [0i64; 4];
        assert!(load_array::<i64>(&doc, "sizes", &mut slot).is_err());
        assert_eq!(slot, [0, 0, 0, 0]);
    }

    #[test]
    fn empty_array_writes_nothing_and_counts_zero() {
        let doc = doc("flags = []");
        let mut slot = vec![String::new(); 2];
        assert_eq!(load_array::<String>(&doc, "flags", &mut slot), Ok(0));
    }
}
