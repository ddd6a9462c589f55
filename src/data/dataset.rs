// src/data/dataset.rs

//! Random lookup datasets.

use crate::common::{BenchRng, Count, Entries, Entry, Key, Value};

use std::collections::BTreeMap;

use ::itertools::Itertools; // for `unique_by`
use ::rand::Rng;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Draw a key uniformly from `0..upper_limit`.
///
/// `upper_limit` itself is never drawn, yet it is a valid slot of a
/// [`DenseArray`].
///
/// # Panics
///
/// If `upper_limit` is `0`.
///
/// [`DenseArray`]: crate::variants::lookup::DenseArray
#[inline(always)]
pub fn random_key(
    rng: &mut BenchRng,
    upper_limit: Key,
) -> Key {
    rng.random_range(0..upper_limit)
}

/// The decimal text of a uniformly drawn non-negative `i32`.
pub fn random_value(rng: &mut BenchRng) -> Value {
    rng.random_range(0..i32::MAX).to_string()
}

/// Draw `count` random entries with keys in `0..upper_limit` then drop every
/// entry whose key was already drawn. The first entry drawn for a key is kept.
///
/// The returned entries number `count` or fewer.
pub fn generate_entries(
    rng: &mut BenchRng,
    upper_limit: Key,
    count: Count,
) -> Entries {
    defn!("upper_limit {}, count {}", upper_limit, count);
    let drawn: Entries = (0..count)
        .map(|_| {
            let key: Key = random_key(rng, upper_limit);
            let value: Value = random_value(rng);
            (key, value)
        })
        .collect();
    let entries: Entries = drawn
        .into_iter()
        .unique_by(|(key, _)| *key)
        .collect();
    defx!("{} unique entries of {} drawn", entries.len(), count);

    entries
}

/// Generated entries plus the ground truth every lookup variant is checked
/// against.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub upper_limit: Key,
    pub entries: Entries,
    truth: BTreeMap<Key, Value>,
}

impl Dataset {
    pub fn generate(
        rng: &mut BenchRng,
        upper_limit: Key,
        count: Count,
    ) -> Dataset {
        let entries = generate_entries(rng, upper_limit, count);

        Dataset::from_entries(upper_limit, entries)
    }

    /// `entries` keys must be unique and `<= upper_limit`.
    pub fn from_entries(
        upper_limit: Key,
        entries: Entries,
    ) -> Dataset {
        let truth: BTreeMap<Key, Value> = entries.iter().cloned().collect();
        debug_assert_eq!(truth.len(), entries.len(), "entries keys are not unique");

        Dataset {
            upper_limit,
            entries,
            truth,
        }
    }

    /// The value stored for `key`, or `None`.
    pub fn expected(
        &self,
        key: Key,
    ) -> Option<&str> {
        self.truth.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> Count {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Every key in `0..=upper_limit` without an entry.
    pub fn absent_keys(&self) -> impl Iterator<Item = Key> + '_ {
        (0..=self.upper_limit).filter(|key| !self.truth.contains_key(key))
    }
}
