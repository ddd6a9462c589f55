// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

use ::rand::rngs::StdRng;
#[doc(hidden)]
pub use ::rand::SeedableRng;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// keyed lookup
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Key of a lookup entry. Generated keys are always within
/// `0..=upper_limit`.
pub type Key = u32;
/// Value of a lookup entry.
pub type Value = String;
/// A single `(key, value)` lookup entry.
pub type Entry = (Key, Value);
pub type Entries = Vec<Entry>;

/// A count of things; requests, entries, checks.
pub type Count = usize;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// containment
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Integer coordinate of a [`Rectangle`] edge.
///
/// [`Rectangle`]: crate::data::rectangle::Rectangle
pub type Bound = i32;
/// Floating-point coordinate of a [`Point`].
///
/// [`Point`]: crate::data::rectangle::Point
pub type Coord = f32;

/// Index into the 3×3 grid of points around a rectangle.
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
pub type PositionIndex = usize;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// randomness
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The one random source type shared by fixture construction and the
/// per-iteration draws. Always passed explicitly, never global.
pub type BenchRng = StdRng;

/// Seed used by the benches and by `fbb` when `--seed` is not passed.
pub const SEED_DEFAULT: u64 = 0x5EED_F0B5;

/// Create a [`BenchRng`] from `seed`.
pub fn bench_rng(seed: u64) -> BenchRng {
    BenchRng::seed_from_u64(seed)
}
