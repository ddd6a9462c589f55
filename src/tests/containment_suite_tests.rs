// src/tests/containment_suite_tests.rs

//! tests for `containment_suite.rs`

use crate::common::PositionIndex;
use crate::data::rectangle::{Point, Rectangle};
use crate::harness::containment_suite::{verify_containment, ContainmentFixture};
use crate::harness::verify::VerifyError;
use crate::variants::containment::ContainmentVariant;

use ::test_case::test_case;

#[test_case(0)]
#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(4)]
#[test_case(5)]
#[test_case(6)]
#[test_case(7)]
#[test_case(8)]
fn test_verify_compare(position_index: PositionIndex) {
    verify_containment(ContainmentVariant::Compare, position_index).unwrap();
}

#[test_case(0)]
#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(4)]
#[test_case(5)]
#[test_case(6)]
#[test_case(7)]
#[test_case(8)]
fn test_verify_unsigned_pair(position_index: PositionIndex) {
    verify_containment(ContainmentVariant::UnsignedPair, position_index).unwrap();
}

#[test_case(0)]
#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(4)]
#[test_case(5)]
#[test_case(6)]
#[test_case(7)]
#[test_case(8)]
fn test_verify_unsigned_expr(position_index: PositionIndex) {
    verify_containment(ContainmentVariant::UnsignedExpr, position_index).unwrap();
}

#[test_case(4 => true; "center")]
#[test_case(0 => false; "corner")]
fn test_fixture_run(position_index: PositionIndex) -> bool {
    let fixture = ContainmentFixture::setup(position_index);
    let result = fixture.run(ContainmentVariant::UnsignedPair);
    assert_eq!(fixture.run(ContainmentVariant::UnsignedPair), result);

    result
}

#[test]
#[should_panic]
fn test_fixture_setup_position_9() {
    ContainmentFixture::setup(9);
}

#[test]
fn test_verify_reports_mismatch() {
    // reversed edges; the center point of the grid is not inside
    let rect = Rectangle::new(50, 20, 70, 30);
    let fixture = ContainmentFixture::setup_around(rect, 4);
    assert_eq!(fixture.point, Point::new(35.0, 50.0));
    match fixture.verify(ContainmentVariant::Compare) {
        Err(VerifyError::ContainmentMismatch {
            variant,
            position_index,
            expected,
            actual,
            ..
        }) => {
            assert_eq!(variant, ContainmentVariant::Compare);
            assert_eq!(position_index, 4);
            assert!(expected);
            assert!(!actual);
        }
        result => panic!("expected ContainmentMismatch, got {:?}", result),
    }
}
