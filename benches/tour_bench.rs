//! Criterion benchmarks for the tour search.
//!
//! Uses random Euclidean instances so timings reflect the search itself.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_tour::ga::{SearchConfig, SearchRunner, Variant};
use u_tour::local_search::{Improvement, LocalSearch, LocalSearchConfig, MoveOperator};
use u_tour::random::create_rng;
use u_tour::tour::{Tour, WeightMatrix};

// ===========================================================================
// Instances
// ===========================================================================

fn euclidean(n: usize, seed: u64) -> WeightMatrix {
    let mut rng = create_rng(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    WeightMatrix::from_fn(n, |i, j| {
        let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
        (dx * dx + dy * dy).sqrt()
    })
    .expect("finite distances")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for &n in &[20, 50] {
        let wm = euclidean(n, 42);
        for variant in [Variant::Genetic, Variant::Memetic] {
            let config = SearchConfig::default()
                .with_variant(variant)
                .with_population_size(100)
                .with_max_iterations(200)
                .with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(format!("{variant:?}"), n),
                &(&wm, config),
                |b, (wm, config)| {
                    b.iter(|| {
                        let result = SearchRunner::run(black_box(wm), black_box(config));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search");
    group.sample_size(10);

    let wm = euclidean(100, 7);
    let start = Tour::random(100, &mut create_rng(7));
    for operator in [MoveOperator::Swap, MoveOperator::Shift, MoveOperator::Invert] {
        for improvement in [Improvement::First, Improvement::Best] {
            let config = LocalSearchConfig::new(operator, improvement);
            group.bench_with_input(
                BenchmarkId::new(format!("{operator:?}"), format!("{improvement:?}")),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result =
                            LocalSearch::run(black_box(&wm), start.clone(), black_box(config));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_local_search);
criterion_main!(benches);
