use circ_pack::entities::{BoundingRegion, Instance, Item, NestedItem};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tgf::TGFOptimizer;
use tgf::config::{SearchConfig, TGFConfig};
use tgf::opt::multi_seed::MultiSeedOptimizer;

criterion_main!(benches);
criterion_group!(benches, multi_seed_bench, nested_bench);

const N_ANGLE_SAMPLES: [usize; 3] = [12, 36, 72];

/// A conduit with a realistic mix of cable sizes, filled to roughly 35%
fn create_instance() -> Instance {
    let radii = [6.0, 6.0, 5.0, 4.5, 4.5, 4.0, 3.5, 3.5, 3.0, 3.0, 2.5, 2.5, 2.0, 2.0, 1.5];
    Instance::from_radii(25.0, &radii).expect("valid instance")
}

/// Benchmark the multi-seed search with different numbers of sampled angles.
fn multi_seed_bench(c: &mut Criterion) {
    let instance = create_instance();

    let mut group = c.benchmark_group("multi_seed");
    for n in N_ANGLE_SAMPLES {
        let config = SearchConfig {
            n_angle_samples: n,
            ..SearchConfig::default()
        };
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                MultiSeedOptimizer::new(instance.region, instance.items(), &config).solve()
            })
        });
    }
    group.finish();
}

/// Benchmark a complete run, including the layout of the conductors inside every cable.
fn nested_bench(c: &mut Criterion) {
    let region = BoundingRegion::centered(25.0).expect("valid region");
    let items = (0..8)
        .map(|id| Item::new(id, 5.0).with_nested(vec![NestedItem::unspecified(); 4]))
        .collect();
    let instance = Instance::new(region, items).expect("valid instance");

    c.bench_function("tgf_nested", |b| {
        b.iter(|| TGFOptimizer::new(instance.clone(), TGFConfig::default(), false).solve())
    });
}
