// src/data/rectangle.rs

//! Geometry primitives [`Rectangle`] and [`Point`].

use crate::common::{Bound, Coord};

use std::fmt;

/// An axis-aligned rectangle with integer edges. `top` is the smaller
/// vertical coordinate (screen orientation).
///
/// The constructor does not validate edge ordering; callers must pass
/// `left <= right` and `top <= bottom`. When that precondition does not hold
/// the results of [`contains_unsigned_pair`] and [`contains_unsigned_expr`]
/// are unspecified.
///
/// [`contains_unsigned_pair`]: crate::variants::containment::contains_unsigned_pair
/// [`contains_unsigned_expr`]: crate::variants::containment::contains_unsigned_expr
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub left: Bound,
    pub right: Bound,
    pub top: Bound,
    pub bottom: Bound,
    /// `right - left`
    pub width: Bound,
    /// `bottom - top`
    pub height: Bound,
    /// [`ordered_key`] of `left`
    left_key: i32,
    /// [`ordered_key`] of `top`
    top_key: i32,
    /// [`key_offset`] of `right` from `left`
    width_span: u32,
    /// [`key_offset`] of `bottom` from `top`
    height_span: u32,
}

impl Rectangle {
    pub fn new(
        left: Bound,
        right: Bound,
        top: Bound,
        bottom: Bound,
    ) -> Rectangle {
        let width: Bound = right.wrapping_sub(left);
        let height: Bound = bottom.wrapping_sub(top);
        let left_key: i32 = ordered_key(left as Coord);
        let top_key: i32 = ordered_key(top as Coord);

        Rectangle {
            left,
            right,
            top,
            bottom,
            width,
            height,
            left_key,
            top_key,
            width_span: key_offset(right as Coord, left_key),
            height_span: key_offset(bottom as Coord, top_key),
        }
    }

    /// Horizontal middle, `(left + right) / 2`.
    pub fn mid_x(&self) -> Coord {
        (self.left as Coord + self.right as Coord) / 2.0
    }

    /// Vertical middle, `(top + bottom) / 2`.
    pub fn mid_y(&self) -> Coord {
        (self.top as Coord + self.bottom as Coord) / 2.0
    }

    #[inline(always)]
    pub const fn left_key(&self) -> i32 {
        self.left_key
    }

    #[inline(always)]
    pub const fn top_key(&self) -> i32 {
        self.top_key
    }

    /// Unsigned bound for a [`key_offset`] from [`left_key`].
    ///
    /// [`left_key`]: Rectangle::left_key
    #[inline(always)]
    pub const fn width_span(&self) -> u32 {
        self.width_span
    }

    /// Unsigned bound for a [`key_offset`] from [`top_key`].
    ///
    /// [`top_key`]: Rectangle::top_key
    #[inline(always)]
    pub const fn height_span(&self) -> u32 {
        self.height_span
    }
}

impl fmt::Debug for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rectangle")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("top", &self.top)
            .field("bottom", &self.bottom)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// A 2-D point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Point {
        Point { x, y }
    }
}

impl From<(Coord, Coord)> for Point {
    fn from(xy: (Coord, Coord)) -> Self {
        Point::new(xy.0, xy.1)
    }
}

/// Map `coord` to an `i32` that orders the same as `coord`.
///
/// Non-negative `f32` bit patterns already order like their values. Negative
/// ones order backwards by magnitude, so all bits but the sign are flipped.
/// Adding `+0.0` first turns `-0.0` into `+0.0` so both zeros share a key.
///
/// A positive NaN maps above `+inf`, a negative NaN below `-inf`.
#[inline(always)]
pub fn ordered_key(coord: Coord) -> i32 {
    let bits: i32 = (coord + 0.0).to_bits() as i32;

    bits ^ (((bits >> 31) as u32) >> 1) as i32
}

/// The offset of `coord` from `origin_key` in [`ordered_key`] space,
/// reinterpreted as unsigned.
///
/// A `coord` below the origin wraps around to a large value; this is the
/// "wraparound" that folds the two-sided check `origin <= coord <= end` into
/// one unsigned comparison `key_offset(coord, origin_key) <= span`, where
/// `span` is `key_offset(end, origin_key)`. No float arithmetic besides the
/// `-0.0` normalization, so the check is exact for every `f32`.
#[inline(always)]
pub fn key_offset(
    coord: Coord,
    origin_key: i32,
) -> u32 {
    ordered_key(coord).wrapping_sub(origin_key) as u32
}
