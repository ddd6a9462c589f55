// src/harness/lookup_suite.rs

//! The lookup suite: all four [`KeyLookup`] variants built from one random
//! dataset per configuration.

use crate::common::{BenchRng, Count, Key};
use crate::data::dataset::{random_key, Dataset};
use crate::harness::params::LookupParams;
use crate::harness::verify::{VerifyError, VerifyResult};
use crate::variants::frozenmap::{FrozenMap, TunedFrozenMap};
use crate::variants::lookup::{hash_map_from, DenseArray, KeyLookup, LookupVariant};

use std::collections::HashMap;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Do `request_count` lookups of keys drawn from `rng` within
/// `0..upper_limit`. Returns the result of the last lookup, or `None` if
/// `request_count` is `0`.
#[inline(always)]
pub fn lookup_items<'a, L: KeyLookup + ?Sized>(
    lookup: &'a L,
    rng: &mut BenchRng,
    upper_limit: Key,
    request_count: Count,
) -> Option<&'a str> {
    let mut result: Option<&'a str> = None;
    for _ in 0..request_count {
        let key: Key = random_key(rng, upper_limit);
        result = lookup.get(key);
    }

    result
}

/// Fixtures for one configuration of the lookup suite.
///
/// Built once by [`LookupFixture::setup`] and never modified after, except
/// that [`LookupFixture::run`] advances `rng`.
pub struct LookupFixture {
    pub params: LookupParams,
    /// shared by construction and the per-iteration key draws
    rng: BenchRng,
    dataset: Dataset,
    hash_map: HashMap<Key, String>,
    frozen_untuned: FrozenMap,
    frozen_tuned: TunedFrozenMap,
    dense_array: DenseArray,
}

impl LookupFixture {
    /// Generate the dataset from `rng` and build every variant from it.
    ///
    /// # Panics
    ///
    /// If `params.upper_limit` is `0`.
    pub fn setup(
        params: LookupParams,
        mut rng: BenchRng,
    ) -> LookupFixture {
        defn!("{:?}", params);
        let dataset = Dataset::generate(&mut rng, params.upper_limit, params.entry_count);
        let hash_map = hash_map_from(dataset.entries());
        let frozen_untuned = FrozenMap::new(dataset.entries());
        let frozen_tuned = TunedFrozenMap::new(dataset.entries());
        let dense_array = DenseArray::new(dataset.entries(), params.upper_limit);
        defx!("{} entries", dataset.len());

        LookupFixture {
            params,
            rng,
            dataset,
            hash_map,
            frozen_untuned,
            frozen_tuned,
            dense_array,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// `variant` behind the capability.
    pub fn lookup(
        &self,
        variant: LookupVariant,
    ) -> &dyn KeyLookup {
        match variant {
            LookupVariant::HashMap => &self.hash_map,
            LookupVariant::FrozenUntuned => &self.frozen_untuned,
            LookupVariant::FrozenTuned => &self.frozen_tuned,
            LookupVariant::DenseArray => &self.dense_array,
        }
    }

    /// The benchmarked operation; `request_count` lookups with `variant` of
    /// freshly drawn keys. Each arm is monomorphized so the timed loop has no
    /// dynamic dispatch.
    #[inline(always)]
    pub fn run(
        &mut self,
        variant: LookupVariant,
    ) -> Option<&str> {
        let upper_limit: Key = self.params.upper_limit;
        let request_count: Count = self.params.request_count;
        let rng: &mut BenchRng = &mut self.rng;
        match variant {
            LookupVariant::HashMap => lookup_items(&self.hash_map, rng, upper_limit, request_count),
            LookupVariant::FrozenUntuned => lookup_items(&self.frozen_untuned, rng, upper_limit, request_count),
            LookupVariant::FrozenTuned => lookup_items(&self.frozen_tuned, rng, upper_limit, request_count),
            LookupVariant::DenseArray => lookup_items(&self.dense_array, rng, upper_limit, request_count),
        }
    }

    /// The correctness check of `variant`; every key in
    /// `0..=upper_limit` must return what the dataset holds, or `None`.
    /// Does not touch the random source.
    pub fn verify(
        &self,
        variant: LookupVariant,
    ) -> VerifyResult {
        defn!("{} {}", variant, self.params);
        let lookup: &dyn KeyLookup = self.lookup(variant);
        for key in 0..=self.params.upper_limit {
            let expected: Option<&str> = self.dataset.expected(key);
            let actual: Option<&str> = lookup.get(key);
            if actual != expected {
                defx!("mismatch at key {}", key);
                return Err(VerifyError::LookupMismatch {
                    variant,
                    params: self.params,
                    key,
                    expected: expected.map(String::from),
                    actual: actual.map(String::from),
                });
            }
        }
        defx!("ok");

        Ok(())
    }
}
