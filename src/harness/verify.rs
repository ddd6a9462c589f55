// src/harness/verify.rs

//! Correctness failures and a tally of checks.

use crate::common::{Count, Key, PositionIndex};
use crate::data::rectangle::Point;
use crate::harness::params::LookupParams;
use crate::variants::containment::ContainmentVariant;
use crate::variants::lookup::LookupVariant;

use std::fmt;

/// A variant disagreed with the expected result.
#[derive(Clone, Debug, PartialEq)]
pub enum VerifyError {
    ContainmentMismatch {
        variant: ContainmentVariant,
        position_index: PositionIndex,
        point: Point,
        expected: bool,
        actual: bool,
    },
    LookupMismatch {
        variant: LookupVariant,
        params: LookupParams,
        key: Key,
        expected: Option<String>,
        actual: Option<String>,
    },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::ContainmentMismatch {
                variant,
                position_index,
                point,
                expected,
                actual,
            } => write!(
                f,
                "containment variant {} at position {} ({}, {}) returned {}, expected {}",
                variant, position_index, point.x, point.y, actual, expected,
            ),
            VerifyError::LookupMismatch {
                variant,
                params,
                key,
                expected,
                actual,
            } => write!(
                f,
                "lookup variant {} ({}) for key {} returned {:?}, expected {:?}",
                variant, params, key, actual, expected,
            ),
        }
    }
}

impl std::error::Error for VerifyError {}

pub type VerifyResult = Result<(), VerifyError>;

/// Tally of verification checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: Count,
    pub failed: Count,
}

impl Summary {
    pub fn new() -> Summary {
        Summary::default()
    }

    pub fn update(
        &mut self,
        result: &VerifyResult,
    ) {
        match result {
            Ok(_) => self.passed += 1,
            Err(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> Count {
        self.passed + self.failed
    }

    /// `true` if no check failed.
    pub fn ok(&self) -> bool {
        self.failed == 0
    }
}
