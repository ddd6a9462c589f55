// benches/bench_lookup.rs
//
// compare keyed lookups on a `HashMap`, the two frozen maps, and a dense
// array, for each configuration of the lookup parameter grid

use ::criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BenchmarkId,
    Criterion,
};

use fbblib::common::{bench_rng, SEED_DEFAULT};
use fbblib::harness::lookup_suite::LookupFixture;
use fbblib::harness::params::{lookup_param_grid, LookupParams};
use fbblib::variants::lookup::LookupVariant;

/// Set up the fixture for `params` once, then self-check every variant
/// before timing any of them.
fn fixture_setup(params: LookupParams) -> LookupFixture {
    let fixture = LookupFixture::setup(params, bench_rng(SEED_DEFAULT));
    for variant in LookupVariant::ALL.iter() {
        if let Err(err) = fixture.verify(*variant) {
            panic!("ERROR {}", err);
        }
    }

    fixture
}

// criterion runners

fn criterion_benchmark(c: &mut Criterion) {
    let mut bg = c.benchmark_group("lookup");
    if cfg!(debug_assertions) {
        bg.sample_size(10);
    }
    for params in lookup_param_grid().into_iter() {
        let mut fixture = fixture_setup(params);
        // `LookupVariant::ALL` is ordered baseline first
        for variant in LookupVariant::ALL.iter() {
            let variant: LookupVariant = *variant;
            bg.bench_function(BenchmarkId::new(variant.name(), params), |b| {
                b.iter(|| black_box(fixture.run(variant)).map(str::len))
            });
        }
    }
    bg.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
