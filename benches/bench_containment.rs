// benches/bench_containment.rs
//
// compare the point-in-rectangle checks at each position of the 3×3 grid

use ::criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BenchmarkId,
    Criterion,
};
use ::lazy_static::lazy_static;

use fbblib::common::PositionIndex;
use fbblib::harness::containment_suite::{verify_containment, ContainmentFixture};
use fbblib::harness::params::POSITION_INDEXES;
use fbblib::variants::containment::{
    contains_compare,
    contains_unsigned_expr,
    contains_unsigned_pair,
    ContainmentVariant,
};

lazy_static! {
    /// one fixture per grid position, set up once
    static ref FIXTURES: Vec<ContainmentFixture> = POSITION_INDEXES
        .iter()
        .map(|position_index| ContainmentFixture::setup(*position_index))
        .collect();
}

/// quick self-check that every variant is correct before timing any of them
fn fixtures_check() {
    for position_index in POSITION_INDEXES.iter() {
        for variant in ContainmentVariant::ALL.iter() {
            if let Err(err) = verify_containment(*variant, *position_index) {
                panic!("ERROR {}", err);
            }
        }
    }
}

// criterion runners

fn criterion_benchmark(c: &mut Criterion) {
    fixtures_check();

    let mut bg = c.benchmark_group("containment");
    if cfg!(debug_assertions) {
        bg.sample_size(10);
    }
    for fixture in FIXTURES.iter() {
        let position_index: PositionIndex = fixture.position_index;
        bg.bench_with_input(
            BenchmarkId::new(ContainmentVariant::Compare.name(), position_index),
            fixture,
            |b, f| b.iter(|| contains_compare(black_box(&f.rect), black_box(&f.point))),
        );
        bg.bench_with_input(
            BenchmarkId::new(ContainmentVariant::UnsignedPair.name(), position_index),
            fixture,
            |b, f| b.iter(|| contains_unsigned_pair(black_box(&f.rect), black_box(&f.point))),
        );
        bg.bench_with_input(
            BenchmarkId::new(ContainmentVariant::UnsignedExpr.name(), position_index),
            fixture,
            |b, f| b.iter(|| contains_unsigned_expr(black_box(&f.rect), black_box(&f.point))),
        );
    }
    bg.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
