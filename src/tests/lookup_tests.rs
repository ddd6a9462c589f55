// src/tests/lookup_tests.rs

//! tests for `lookup.rs`

use crate::common::{Entries, Key};
use crate::variants::lookup::{
    hash_map_from,
    DenseArray,
    KeyLookup,
    LookupError,
    LookupVariant,
};

use std::collections::HashMap;

use ::test_case::test_case;

fn entries_abc() -> Entries {
    vec![
        (0, String::from("a")),
        (7, String::from("b")),
        (10, String::from("c")),
    ]
}

#[test]
fn test_hash_map_get() {
    let map: HashMap<Key, String> = hash_map_from(&entries_abc());
    assert_eq!(KeyLookup::get(&map, 7), Some("b"));
    assert_eq!(KeyLookup::get(&map, 8), None);
    assert_eq!(KeyLookup::len(&map), 3);
}

#[test]
fn test_dense_array_get() {
    let dense = DenseArray::new(&entries_abc(), 10);
    assert_eq!(dense.slots(), 11);
    assert_eq!(dense.len(), 3);
    assert_eq!(dense.get(0), Some("a"));
    assert_eq!(dense.get(1), None);
    assert_eq!(dense.get(10), Some("c"));
}

#[test]
fn test_dense_array_empty() {
    let dense = DenseArray::new(&[], 4);
    assert!(dense.is_empty());
    for key in 0..=4 {
        assert_eq!(dense.get(key), None);
    }
}

#[test_case(10 => Ok(Some(String::from("c"))); "last slot")]
#[test_case(5 => Ok(None); "absent")]
#[test_case(11 => Err(LookupError::KeyOutOfBounds { key: 11, slots: 11 }); "beyond")]
#[test_case(Key::MAX => Err(LookupError::KeyOutOfBounds { key: Key::MAX, slots: 11 }); "max")]
fn test_dense_array_try_get(key: Key) -> Result<Option<String>, LookupError> {
    let dense = DenseArray::new(&entries_abc(), 10);

    dense.try_get(key).map(|value| value.map(String::from))
}

#[test]
#[should_panic]
fn test_dense_array_get_out_of_bounds() {
    let dense = DenseArray::new(&entries_abc(), 10);
    dense.get(11);
}

#[test]
#[should_panic]
fn test_dense_array_new_key_beyond_upper_limit() {
    DenseArray::new(&entries_abc(), 9);
}

#[test]
fn test_lookup_error_display() {
    let err = LookupError::KeyOutOfBounds { key: 12, slots: 11 };
    assert_eq!(err.to_string(), "key 12 is out of bounds for a dense array of 11 slots");
}

#[test]
fn test_variants_agree() {
    let entries = entries_abc();
    let lookups: Vec<Box<dyn KeyLookup>> = LookupVariant::ALL
        .iter()
        .map(|variant| variant.build(&entries, 12))
        .collect();
    for key in 0..=12 {
        let expect = lookups[0].get(key);
        for lookup in lookups.iter() {
            assert_eq!(lookup.get(key), expect, "key {}", key);
            assert_eq!(lookup.len(), 3);
        }
    }
}

#[test]
fn test_later_entry_wins() {
    let entries: Entries = vec![(3, String::from("first")), (3, String::from("second"))];
    for variant in LookupVariant::ALL.iter() {
        let lookup = variant.build(&entries, 3);
        assert_eq!(lookup.get(3), Some("second"), "variant {}", variant);
        assert_eq!(lookup.len(), 1, "variant {}", variant);
    }
}

#[test]
fn test_variant_order_baseline_first() {
    assert_eq!(LookupVariant::ALL[0], LookupVariant::BASELINE);
    assert_eq!(LookupVariant::BASELINE, LookupVariant::DenseArray);
    assert_eq!(format!("{}", LookupVariant::FrozenTuned), "frozen_tuned");
}
