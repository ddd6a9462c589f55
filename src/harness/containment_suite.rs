// src/harness/containment_suite.rs

//! The containment suite: one point of the 3×3 grid per configuration.

use crate::common::PositionIndex;
use crate::data::rectangle::{Point, Rectangle};
use crate::harness::params::bench_rectangle;
use crate::harness::verify::{VerifyError, VerifyResult};
use crate::variants::containment::{grid_points, ContainmentVariant, POSITION_INSIDE};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Fixture for one grid position of the containment suite.
#[derive(Clone, Copy, Debug)]
pub struct ContainmentFixture {
    pub rect: Rectangle,
    pub position_index: PositionIndex,
    pub point: Point,
}

impl ContainmentFixture {
    /// Set up the point at `position_index` around the suite's rectangle.
    ///
    /// # Panics
    ///
    /// If `position_index` is not within `0..9`.
    pub fn setup(position_index: PositionIndex) -> ContainmentFixture {
        ContainmentFixture::setup_around(bench_rectangle(), position_index)
    }

    pub fn setup_around(
        rect: Rectangle,
        position_index: PositionIndex,
    ) -> ContainmentFixture {
        let point: Point = grid_points(&rect)[position_index];
        defñ!("position_index {}, point {:?}", position_index, point);

        ContainmentFixture {
            rect,
            position_index,
            point,
        }
    }

    /// `true` only for the center position.
    pub const fn expected(&self) -> bool {
        self.position_index == POSITION_INSIDE
    }

    /// The benchmarked operation; one check of `variant`.
    #[inline(always)]
    pub fn run(
        &self,
        variant: ContainmentVariant,
    ) -> bool {
        variant.contains(&self.rect, &self.point)
    }

    /// The correctness check of `variant` for this fixture.
    pub fn verify(
        &self,
        variant: ContainmentVariant,
    ) -> VerifyResult {
        let expected: bool = self.expected();
        let actual: bool = self.run(variant);
        if actual != expected {
            return Err(VerifyError::ContainmentMismatch {
                variant,
                position_index: self.position_index,
                point: self.point,
                expected,
                actual,
            });
        }

        Ok(())
    }
}

/// The correctness check of `variant` at `position_index`; independent of
/// any benchmark run.
pub fn verify_containment(
    variant: ContainmentVariant,
    position_index: PositionIndex,
) -> VerifyResult {
    defn!("{} position {}", variant, position_index);
    let result = ContainmentFixture::setup(position_index).verify(variant);
    defx!("{:?}", result);

    result
}
