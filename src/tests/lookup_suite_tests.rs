// src/tests/lookup_suite_tests.rs

//! tests for `lookup_suite.rs`

use crate::common::{bench_rng, Key};
use crate::harness::lookup_suite::{lookup_items, LookupFixture};
use crate::harness::params::{lookup_param_grid, LookupParams};
use crate::variants::lookup::{DenseArray, LookupVariant};

use ::test_case::test_case;

fn params_small() -> LookupParams {
    LookupParams::new(2000, 1000, 300)
}

#[test_case(LookupVariant::HashMap)]
#[test_case(LookupVariant::FrozenUntuned)]
#[test_case(LookupVariant::FrozenTuned)]
#[test_case(LookupVariant::DenseArray)]
fn test_verify_variant_grid(variant: LookupVariant) {
    for params in lookup_param_grid().into_iter() {
        let fixture = LookupFixture::setup(params, bench_rng(11));
        fixture.verify(variant).unwrap();
    }
}

/// 300 entries below 2000; every generated key returns the same value on
/// every structure, an absent key returns `None` on every structure
#[test]
fn test_generated_keys_and_absent_key() {
    let fixture = LookupFixture::setup(params_small(), bench_rng(3));
    let dataset = fixture.dataset();
    assert!(dataset.len() <= 300);
    for (key, value) in dataset.entries().iter() {
        for variant in LookupVariant::ALL.iter() {
            assert_eq!(fixture.lookup(*variant).get(*key), Some(value.as_str()), "{} key {}", variant, key);
        }
    }
    let absent: Key = dataset.absent_keys().next().unwrap();
    for variant in LookupVariant::ALL.iter() {
        assert_eq!(fixture.lookup(*variant).get(absent), None, "{} key {}", variant, absent);
    }
}

#[test]
fn test_lookup_lens_agree() {
    let fixture = LookupFixture::setup(params_small(), bench_rng(4));
    for variant in LookupVariant::ALL.iter() {
        assert_eq!(fixture.lookup(*variant).len(), fixture.dataset().len(), "{}", variant);
    }
}

#[test]
fn test_run_same_across_variants() {
    // equal seeds draw equal datasets and equal request keys, so every
    // variant must return the same sequence of results
    let mut fixtures: Vec<(LookupVariant, LookupFixture)> = LookupVariant::ALL
        .iter()
        .map(|variant| (*variant, LookupFixture::setup(params_small(), bench_rng(99))))
        .collect();
    for _ in 0..20 {
        let results: Vec<Option<String>> = fixtures
            .iter_mut()
            .map(|(variant, fixture)| fixture.run(*variant).map(String::from))
            .collect();
        for result in results.iter() {
            assert_eq!(result, &results[0]);
        }
    }
}

#[test]
fn test_run_deterministic() {
    let mut fixture1 = LookupFixture::setup(params_small(), bench_rng(8));
    let mut fixture2 = LookupFixture::setup(params_small(), bench_rng(8));
    for _ in 0..10 {
        let result1 = fixture1.run(LookupVariant::FrozenTuned).map(String::from);
        let result2 = fixture2.run(LookupVariant::FrozenTuned).map(String::from);
        assert_eq!(result1, result2);
    }
}

#[test]
fn test_verify_idempotent_after_runs() {
    let mut fixture = LookupFixture::setup(params_small(), bench_rng(21));
    for variant in LookupVariant::ALL.iter() {
        fixture.verify(*variant).unwrap();
        fixture.run(*variant);
        fixture.verify(*variant).unwrap();
    }
}

#[test]
fn test_lookup_items_zero_requests() {
    let dense = DenseArray::new(&[(0, String::from("zero"))], 1);
    let mut rng = bench_rng(0);
    assert_eq!(lookup_items(&dense, &mut rng, 1, 0), None);
    // `upper_limit` 1 only draws key 0
    assert_eq!(lookup_items(&dense, &mut rng, 1, 5), Some("zero"));
}

#[test]
fn test_lookup_items_boxed() {
    let boxed = LookupVariant::FrozenUntuned.build(&[(0, String::from("zero"))], 1);
    let mut rng = bench_rng(0);
    assert_eq!(lookup_items(&boxed, &mut rng, 1, 3), Some("zero"));
    assert_eq!(lookup_items(&*boxed, &mut rng, 1, 3), Some("zero"));
}
