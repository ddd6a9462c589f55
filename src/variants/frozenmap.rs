// src/variants/frozenmap.rs

//! Frozen (build once, read only) maps of [`Key`] to [`Value`].
//!
//! * [`FrozenMap`] is the untuned variant; a flat bucketed hash table whose
//!   bucket count is fixed by the entry count. Construction does no analysis
//!   of the keys.
//! * [`TunedFrozenMap`] spends construction time searching for a perfect hash
//!   of the keys (see [`phf_generator`]). A lookup is then one hash and one
//!   probe with no collision chain.
//!
//! Both keep keys and values in separate boxed slices so a probe only touches
//! keys until a match is found.
//!
//! [`phf_generator`]: https://docs.rs/phf_generator/0.11

use crate::common::{Count, Entry, Key, Value};
use crate::variants::lookup::KeyLookup;

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault};

use ::more_asserts::{debug_assert_le, debug_assert_lt};
use ::phf_shared::{HashKey, Hashes};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Select between [`FrozenMap`] and [`TunedFrozenMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrozenMapTuning {
    /// build a [`FrozenMap`]
    Disabled,
    /// build a [`TunedFrozenMap`]
    Enabled,
}

/// Freeze `entries` into the variant chosen by `tuning`.
pub fn freeze(
    entries: &[Entry],
    tuning: FrozenMapTuning,
) -> Box<dyn KeyLookup> {
    match tuning {
        FrozenMapTuning::Disabled => Box::new(FrozenMap::new(entries)),
        FrozenMapTuning::Enabled => Box::new(TunedFrozenMap::new(entries)),
    }
}

/// One entry per key, ordered by key. A later entry for a key replaces an
/// earlier one, same as collecting into a `HashMap`.
fn unique_entries(entries: &[Entry]) -> Vec<(Key, &Value)> {
    let unique: BTreeMap<Key, &Value> = entries
        .iter()
        .map(|(key, value)| (*key, value))
        .collect();

    unique.into_iter().collect()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FrozenMap
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Deterministic SipHash-1-3 (`DefaultHasher` with zero keys).
type FrozenHasher = BuildHasherDefault<DefaultHasher>;

/// Bucketed hash table, frozen at construction.
///
/// The bucket count is the entry count rounded up to a power of two. Bucket
/// `b` holds `keys[bucket_starts[b]..bucket_starts[b + 1]]`.
pub struct FrozenMap {
    hasher: FrozenHasher,
    /// `bucket_count - 1`
    mask: u64,
    /// `bucket_count + 1` offsets into `keys`
    bucket_starts: Box<[u32]>,
    keys: Box<[Key]>,
    /// parallel to `keys`
    values: Box<[Value]>,
}

impl FrozenMap {
    pub fn new(entries: &[Entry]) -> FrozenMap {
        defn!("{} entries", entries.len());
        let hasher = FrozenHasher::default();
        let unique = unique_entries(entries);
        let bucket_count: usize = unique.len().max(1).next_power_of_two();
        let mask: u64 = (bucket_count - 1) as u64;

        let buckets: Vec<usize> = unique
            .iter()
            .map(|(key, _)| (hasher.hash_one(key) & mask) as usize)
            .collect();
        let mut bucket_starts: Vec<u32> = vec![0; bucket_count + 1];
        for bucket in buckets.iter() {
            bucket_starts[bucket + 1] += 1;
        }
        for at in 1..bucket_starts.len() {
            bucket_starts[at] += bucket_starts[at - 1];
        }
        // stable, so keys within a bucket stay in key order
        let mut order: Vec<usize> = (0..unique.len()).collect();
        order.sort_by_key(|at| buckets[*at]);

        let keys: Box<[Key]> = order.iter().map(|at| unique[*at].0).collect();
        let values: Box<[Value]> = order.iter().map(|at| unique[*at].1.clone()).collect();
        debug_assert_eq!(bucket_starts[bucket_count] as usize, keys.len());
        defx!("{} keys in {} buckets", keys.len(), bucket_count);

        FrozenMap {
            hasher,
            mask,
            bucket_starts: bucket_starts.into_boxed_slice(),
            keys,
            values,
        }
    }

    /// count of buckets
    pub fn buckets(&self) -> Count {
        self.bucket_starts.len() - 1
    }

    /// Length of the longest collision chain.
    pub fn longest_bucket(&self) -> Count {
        self.bucket_starts
            .windows(2)
            .map(|w| (w[1] - w[0]) as Count)
            .max()
            .unwrap_or(0)
    }
}

impl KeyLookup for FrozenMap {
    #[inline(always)]
    fn get(&self, key: Key) -> Option<&str> {
        let bucket: usize = (self.hasher.hash_one(key) & self.mask) as usize;
        let start: usize = self.bucket_starts[bucket] as usize;
        let end: usize = self.bucket_starts[bucket + 1] as usize;
        debug_assert_le!(start, end);

        self.keys[start..end]
            .iter()
            .position(|key_| *key_ == key)
            .map(|at| self.values[start + at].as_str())
    }

    fn len(&self) -> Count {
        self.keys.len()
    }
}

impl fmt::Debug for FrozenMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrozenMap")
            .field("len", &self.keys.len())
            .field("buckets", &self.buckets())
            .field("longest_bucket", &self.longest_bucket())
            .finish()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TunedFrozenMap
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Perfect-hash table, frozen at construction.
///
/// `keys[i]` is the one key whose hash and displacement land on slot `i`, so
/// a lookup probes exactly one slot and compares one key.
pub struct TunedFrozenMap {
    hash_key: HashKey,
    /// per-bucket displacements chosen by the generator
    disps: Box<[(u32, u32)]>,
    keys: Box<[Key]>,
    /// parallel to `keys`
    values: Box<[Value]>,
}

impl TunedFrozenMap {
    pub fn new(entries: &[Entry]) -> TunedFrozenMap {
        defn!("{} entries", entries.len());
        let unique = unique_entries(entries);
        if unique.is_empty() {
            defx!("empty");
            return TunedFrozenMap {
                hash_key: 0,
                disps: Box::new([]),
                keys: Box::new([]),
                values: Box::new([]),
            };
        }
        let keys_unique: Vec<Key> = unique.iter().map(|(key, _)| *key).collect();
        // the expensive part; retries hash keys until every bucket can be
        // displaced without collision
        let state = ::phf_generator::generate_hash(&keys_unique);
        debug_assert_eq!(state.map.len(), unique.len());

        let keys: Box<[Key]> = state.map.iter().map(|at| unique[*at].0).collect();
        let values: Box<[Value]> = state.map.iter().map(|at| unique[*at].1.clone()).collect();
        defx!("{} keys, {} displacements, hash_key {:#x}", keys.len(), state.disps.len(), state.key);

        TunedFrozenMap {
            hash_key: state.key,
            disps: state.disps.into_boxed_slice(),
            keys,
            values,
        }
    }

    #[inline(always)]
    fn slot(&self, key: Key) -> usize {
        let hashes: Hashes = ::phf_shared::hash(&key, &self.hash_key);

        ::phf_shared::get_index(&hashes, &self.disps, self.keys.len()) as usize
    }
}

impl KeyLookup for TunedFrozenMap {
    #[inline(always)]
    fn get(&self, key: Key) -> Option<&str> {
        if self.keys.is_empty() {
            return None;
        }
        let slot: usize = self.slot(key);
        debug_assert_lt!(slot, self.keys.len());
        if self.keys[slot] == key {
            Some(self.values[slot].as_str())
        } else {
            None
        }
    }

    fn len(&self) -> Count {
        self.keys.len()
    }
}

impl fmt::Debug for TunedFrozenMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TunedFrozenMap")
            .field("len", &self.keys.len())
            .field("disps", &self.disps.len())
            .field("hash_key", &self.hash_key)
            .finish()
    }
}
