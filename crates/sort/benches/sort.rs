use std::hint::black_box;

use bench::{apply_runtime_for_size, default_rng, random_keys};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use sort::{SortAlgorithm, algorithm_name, all_algorithms, sort_i64};

const QUADRATIC_SIZES: [usize; 2] = [256, 1024];
const FAST_SIZES: [usize; 3] = [1024, 16384, 65536];
const KEY_MAX: i64 = (1 << 20) - 1;

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }
}

const DISTRIBUTIONS: [Distribution; 2] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
];

#[inline]
fn is_quadratic(algo: SortAlgorithm) -> bool {
    matches!(
        algo,
        SortAlgorithm::BubbleSort
            | SortAlgorithm::GnomeSort
            | SortAlgorithm::InsertionSort
            | SortAlgorithm::SelectionSort
    )
}

fn generate_dataset(dist: Distribution, size: usize) -> Vec<i64> {
    let mut rng = default_rng();
    match dist {
        Distribution::RandomUniform => random_keys(&mut rng, size, KEY_MAX),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<i64> = (0..size as i64).collect();
            let swaps = (size / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
            data
        }
    }
}

fn bench_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &algo in all_algorithms() {
            let sizes: &[usize] = if is_quadratic(algo) {
                &QUADRATIC_SIZES
            } else {
                &FAST_SIZES
            };
            for &size in sizes {
                apply_runtime_for_size(&mut group, size);
                let base = generate_dataset(dist, size);
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_batched(
                        || base.clone(),
                        |mut data| {
                            sort_i64(algo, &mut data).unwrap();
                            black_box(data)
                        },
                        BatchSize::LargeInput,
                    );
                });
            }
        }

        for &size in &FAST_SIZES {
            apply_runtime_for_size(&mut group, size);
            let base = generate_dataset(dist, size);
            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter_batched(
                    || base.clone(),
                    |mut data| {
                        data.sort();
                        black_box(data)
                    },
                    BatchSize::LargeInput,
                );
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
