// src/variants/containment.rs

//! Three equivalent point-in-rectangle checks.
//!
//! Each returns `true` iff the point lies within the closed rectangle
//! `[left, right] × [top, bottom]`.

use crate::common::{Coord, PositionIndex};
use crate::data::rectangle::{key_offset, Point, Rectangle};

use std::fmt;

/// Four comparisons, short-circuiting.
#[inline(always)]
pub fn contains_compare(
    rect: &Rectangle,
    point: &Point,
) -> bool {
    rect.left as Coord <= point.x
        && point.x <= rect.right as Coord
        && rect.top as Coord <= point.y
        && point.y <= rect.bottom as Coord
}

/// Two unsigned comparisons held in named booleans, joined with bitwise `&`
/// so that there is no second branch.
///
/// Requires `left <= right` and `top <= bottom`.
#[inline(always)]
pub fn contains_unsigned_pair(
    rect: &Rectangle,
    point: &Point,
) -> bool {
    let inside_x: bool = key_offset(point.x, rect.left_key()) <= rect.width_span();
    let inside_y: bool = key_offset(point.y, rect.top_key()) <= rect.height_span();

    inside_x & inside_y
}

/// Same arithmetic as [`contains_unsigned_pair`] in a single expression.
///
/// Requires `left <= right` and `top <= bottom`.
#[inline(always)]
pub fn contains_unsigned_expr(
    rect: &Rectangle,
    point: &Point,
) -> bool {
    key_offset(point.x, rect.left_key()) <= rect.width_span()
        && key_offset(point.y, rect.top_key()) <= rect.height_span()
}

pub type ContainsFn = fn(&Rectangle, &Point) -> bool;

/// The containment variants under comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainmentVariant {
    /// [`contains_compare`]; the reference.
    Compare,
    /// [`contains_unsigned_pair`]
    UnsignedPair,
    /// [`contains_unsigned_expr`]
    UnsignedExpr,
}

impl ContainmentVariant {
    pub const ALL: [ContainmentVariant; 3] = [
        ContainmentVariant::Compare,
        ContainmentVariant::UnsignedPair,
        ContainmentVariant::UnsignedExpr,
    ];

    pub const REFERENCE: ContainmentVariant = ContainmentVariant::Compare;

    /// benchmark id
    pub const fn name(&self) -> &'static str {
        match self {
            ContainmentVariant::Compare => "compare",
            ContainmentVariant::UnsignedPair => "unsigned_pair",
            ContainmentVariant::UnsignedExpr => "unsigned_expr",
        }
    }

    pub const fn contains_fn(&self) -> ContainsFn {
        match self {
            ContainmentVariant::Compare => contains_compare,
            ContainmentVariant::UnsignedPair => contains_unsigned_pair,
            ContainmentVariant::UnsignedExpr => contains_unsigned_expr,
        }
    }

    #[inline(always)]
    pub fn contains(
        &self,
        rect: &Rectangle,
        point: &Point,
    ) -> bool {
        match self {
            ContainmentVariant::Compare => contains_compare(rect, point),
            ContainmentVariant::UnsignedPair => contains_unsigned_pair(rect, point),
            ContainmentVariant::UnsignedExpr => contains_unsigned_expr(rect, point),
        }
    }
}

impl fmt::Display for ContainmentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 3×3 grid of points around `rect`, left to right, top to bottom.
/// Index 4 is the center of `rect`; every other point is one `width` and/or
/// one `height` away from the center. When `width` and `height` are both
/// positive that puts every other point strictly outside. A zero `width`
/// (or `height`) collapses the middle column (or row) onto the center.
pub fn grid_points(rect: &Rectangle) -> [Point; 9] {
    let mid_x: Coord = rect.mid_x();
    let mid_y: Coord = rect.mid_y();
    let w: Coord = rect.width as Coord;
    let h: Coord = rect.height as Coord;

    let mut points: [Point; 9] = [Point::default(); 9];
    for (at, point) in points.iter_mut().enumerate() {
        let col = (at % 3) as Coord - 1.0;
        let row = (at / 3) as Coord - 1.0;
        *point = Point::new(mid_x + col * w, mid_y + row * h);
    }

    points
}

/// Grid position of the center of the rectangle.
pub const POSITION_INSIDE: PositionIndex = 4;
