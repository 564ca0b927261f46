use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polylsq::datasets::DatasetBase;
use polylsq::helpers::test_helpers::generate_random_data;
use polylsq::{Fit, PolyFit, SolveStrategy};
use tracing_subscriber::EnvFilter;

fn bench_fit(c: &mut Criterion) {
    // Silent unless RUST_LOG is set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let mut group = c.benchmark_group("polyfit");
    group.sample_size(10);

    for n_samples in [100, 1000] {
        for n_dimensions in [1, 4] {
            for order in [2, 5] {
                let (x, y) = generate_random_data(n_samples, n_dimensions, order, 0.1);
                let dataset = DatasetBase::from((x, y));

                for strategy in [SolveStrategy::Cholesky, SolveStrategy::ExplicitInverse] {
                    let params = PolyFit::params().order(order).strategy(strategy);
                    let config = (n_samples, n_dimensions, order);
                    let config_string = format!(
                        "{:?}, {}, {}, {}",
                        strategy, n_samples, n_dimensions, order
                    );

                    group.bench_with_input(
                        BenchmarkId::new("polylsq", config_string),
                        &config,
                        |b, _| b.iter(|| params.fit(&dataset).unwrap()),
                    );
                }
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
