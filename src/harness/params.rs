// src/harness/params.rs

//! The declared parameter grid.

use crate::common::{Bound, Count, Key, PositionIndex};
use crate::data::rectangle::Rectangle;

use std::fmt;

use ::itertools::iproduct;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// containment
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Every grid position; see [`PositionIndex`].
pub const POSITION_INDEXES: [PositionIndex; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// `left, right, top, bottom` of the rectangle checked by the containment
/// suite. Width 30, height 40.
pub const RECT_LRTB: (Bound, Bound, Bound, Bound) = (20, 50, 30, 70);

/// The rectangle checked by the containment suite.
pub fn bench_rectangle() -> Rectangle {
    let (left, right, top, bottom) = RECT_LRTB;

    Rectangle::new(left, right, top, bottom)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// lookup
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const UPPER_LIMITS: [Key; 2] = [2000, 10000];
pub const REQUEST_COUNTS: [Count; 1] = [1000];
pub const ENTRY_COUNTS: [Count; 2] = [300, 600];

/// One configuration of the lookup suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LookupParams {
    /// keys are within `0..=upper_limit`
    pub upper_limit: Key,
    /// lookups per benchmarked operation
    pub request_count: Count,
    /// random entries drawn before deduplication
    pub entry_count: Count,
}

impl LookupParams {
    pub const fn new(
        upper_limit: Key,
        request_count: Count,
        entry_count: Count,
    ) -> LookupParams {
        LookupParams {
            upper_limit,
            request_count,
            entry_count,
        }
    }
}

/// benchmark parameter id, e.g. `2000-1000-300`
impl fmt::Display for LookupParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.upper_limit, self.request_count, self.entry_count)
    }
}

/// Cartesian product of the passed values, `upper_limits` outermost.
pub fn lookup_params_product(
    upper_limits: &[Key],
    request_counts: &[Count],
    entry_counts: &[Count],
) -> Vec<LookupParams> {
    iproduct!(upper_limits.iter(), request_counts.iter(), entry_counts.iter())
        .map(|(u, r, e)| LookupParams::new(*u, *r, *e))
        .collect()
}

/// The declared lookup grid; [`UPPER_LIMITS`] × [`REQUEST_COUNTS`] ×
/// [`ENTRY_COUNTS`].
pub fn lookup_param_grid() -> Vec<LookupParams> {
    lookup_params_product(&UPPER_LIMITS, &REQUEST_COUNTS, &ENTRY_COUNTS)
}
