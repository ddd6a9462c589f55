// src/variants/lookup.rs

//! The [`KeyLookup`] capability and the plain lookup variants,
//! [`HashMap`] and [`DenseArray`].
//!
//! The frozen variants are in [`frozenmap`].
//!
//! [`frozenmap`]: crate::variants::frozenmap

use crate::common::{Count, Entry, Key, Value};
use crate::variants::frozenmap::{FrozenMap, TunedFrozenMap};

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use ::more_asserts::debug_assert_lt;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// KeyLookup
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Read-only `key → value` lookup.
///
/// Every implementation built from the same entries must return the same
/// answer for the same key. `None` is the absent-value marker.
pub trait KeyLookup {
    fn get(&self, key: Key) -> Option<&str>;

    /// count of stored entries
    fn len(&self) -> Count;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: BuildHasher> KeyLookup for HashMap<Key, Value, S> {
    #[inline(always)]
    fn get(&self, key: Key) -> Option<&str> {
        HashMap::get(self, &key).map(String::as_str)
    }

    fn len(&self) -> Count {
        HashMap::len(self)
    }
}

impl<T: KeyLookup + ?Sized> KeyLookup for Box<T> {
    #[inline(always)]
    fn get(&self, key: Key) -> Option<&str> {
        (**self).get(key)
    }

    fn len(&self) -> Count {
        (**self).len()
    }
}

/// Build the general-purpose [`HashMap`] variant.
pub fn hash_map_from(entries: &[Entry]) -> HashMap<Key, Value> {
    entries.iter().cloned().collect()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LookupError
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Error from [`DenseArray::try_get`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// `key` is not a slot of a dense array with `slots` slots.
    KeyOutOfBounds { key: Key, slots: Count },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::KeyOutOfBounds { key, slots } => {
                write!(f, "key {} is out of bounds for a dense array of {} slots", key, slots)
            }
        }
    }
}

impl std::error::Error for LookupError {}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DenseArray
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One slot per key in `0..=upper_limit`, indexed directly by key.
/// Slots without an entry hold `None`. No hashing.
pub struct DenseArray {
    slots: Box<[Option<Value>]>,
    /// count of `Some` slots
    len: Count,
}

impl DenseArray {
    /// Keys of `entries` must be `<= upper_limit`. A later entry for the same
    /// key replaces an earlier one.
    ///
    /// # Panics
    ///
    /// If an entry key is greater than `upper_limit`.
    pub fn new(
        entries: &[Entry],
        upper_limit: Key,
    ) -> DenseArray {
        defn!("{} entries, upper_limit {}", entries.len(), upper_limit);
        let mut slots: Vec<Option<Value>> = vec![None; upper_limit as usize + 1];
        for (key, value) in entries.iter() {
            debug_assert_lt!(*key as usize, slots.len(), "entry key beyond upper_limit {}", upper_limit);
            slots[*key as usize] = Some(value.clone());
        }
        let len: Count = slots.iter().filter(|slot| slot.is_some()).count();
        defx!("{} slots, {} filled", slots.len(), len);

        DenseArray {
            slots: slots.into_boxed_slice(),
            len,
        }
    }

    /// count of slots, `upper_limit + 1`
    pub fn slots(&self) -> Count {
        self.slots.len()
    }

    /// Like [`KeyLookup::get`] but a `key` outside the slots is an `Err`
    /// instead of a panic.
    pub fn try_get(
        &self,
        key: Key,
    ) -> Result<Option<&str>, LookupError> {
        match self.slots.get(key as usize) {
            Some(slot) => Ok(slot.as_deref()),
            None => Err(LookupError::KeyOutOfBounds {
                key,
                slots: self.slots.len(),
            }),
        }
    }
}

impl KeyLookup for DenseArray {
    /// # Panics
    ///
    /// If `key` is outside `0..=upper_limit`. Use [`DenseArray::try_get`] for
    /// arbitrary keys.
    #[inline(always)]
    fn get(&self, key: Key) -> Option<&str> {
        self.slots[key as usize].as_deref()
    }

    fn len(&self) -> Count {
        self.len
    }
}

impl fmt::Debug for DenseArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseArray")
            .field("slots", &self.slots.len())
            .field("len", &self.len)
            .finish()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LookupVariant
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The lookup variants under comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LookupVariant {
    /// `std::collections::HashMap`
    HashMap,
    /// [`FrozenMap`]
    FrozenUntuned,
    /// [`TunedFrozenMap`]
    FrozenTuned,
    /// [`DenseArray`]; the baseline.
    DenseArray,
}

impl LookupVariant {
    /// Baseline first.
    pub const ALL: [LookupVariant; 4] = [
        LookupVariant::DenseArray,
        LookupVariant::HashMap,
        LookupVariant::FrozenUntuned,
        LookupVariant::FrozenTuned,
    ];

    pub const BASELINE: LookupVariant = LookupVariant::DenseArray;

    /// benchmark id
    pub const fn name(&self) -> &'static str {
        match self {
            LookupVariant::HashMap => "hash_map",
            LookupVariant::FrozenUntuned => "frozen_untuned",
            LookupVariant::FrozenTuned => "frozen_tuned",
            LookupVariant::DenseArray => "dense_array",
        }
    }

    /// Build this variant from `entries`, boxed behind the capability.
    pub fn build(
        &self,
        entries: &[Entry],
        upper_limit: Key,
    ) -> Box<dyn KeyLookup> {
        defñ!("{:?}", self);
        match self {
            LookupVariant::HashMap => Box::new(hash_map_from(entries)),
            LookupVariant::FrozenUntuned => Box::new(FrozenMap::new(entries)),
            LookupVariant::FrozenTuned => Box::new(TunedFrozenMap::new(entries)),
            LookupVariant::DenseArray => Box::new(DenseArray::new(entries, upper_limit)),
        }
    }
}

impl fmt::Display for LookupVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
