//! Probemap Benchmarks
//!
//! Benchmarks for the probing table, implemented with the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use probemap_lib::data_structures::probing_table::{
    KeyHashAlgorithm, ProbingTable, ProbingTableConfig,
};
use std::time::Duration;

fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("bench_key_{i}")).collect()
}

fn filled_table(capacity: usize, fill: usize, hasher: KeyHashAlgorithm) -> ProbingTable<usize> {
    let config = ProbingTableConfig::new()
        .with_capacity(capacity)
        .with_hasher(hasher);
    let mut table = ProbingTable::with_config(&config);
    for (i, key) in keys(fill).into_iter().enumerate() {
        table.set(key, i);
    }
    table
}

/// Benchmark inserts into an empty table up to several load factors
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("probing_table_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let capacity = 10_000;
    for load in [50, 75, 100] {
        let fill = capacity * load / 100;
        let keys = keys(fill);
        group.throughput(Throughput::Elements(fill as u64));
        group.bench_with_input(BenchmarkId::new("load_percent", load), &keys, |b, keys| {
            b.iter_batched(
                || ProbingTable::<usize>::new(capacity),
                |mut table| {
                    for (i, key) in keys.iter().enumerate() {
                        black_box(table.set(key.as_str(), i));
                    }
                    table
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark hits and misses on tables at several load factors
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("probing_table_lookup");
    group.measurement_time(Duration::from_secs(2));

    let capacity = 10_000;
    for hasher in [KeyHashAlgorithm::Fnv, KeyHashAlgorithm::Polynomial] {
        for load in [50, 90] {
            let fill = capacity * load / 100;
            let table = filled_table(capacity, fill, hasher);
            let probe_keys = keys(fill);

            group.bench_function(BenchmarkId::new(format!("hit_{hasher}"), load), |b| {
                b.iter(|| {
                    for key in &probe_keys {
                        black_box(table.get(key));
                    }
                });
            });

            // misses walk the whole probe sequence
            group.bench_function(BenchmarkId::new(format!("miss_{hasher}"), load), |b| {
                b.iter(|| black_box(table.locate("absent-key")));
            });
        }
    }

    group.finish();
}

/// Benchmark delete-then-reinsert churn at high load
fn bench_churn(c: &mut Criterion) {
    let capacity = 4_096;
    let fill = capacity * 9 / 10;
    let churn_keys = keys(fill);

    c.bench_function("probing_table_churn", |b| {
        b.iter_batched(
            || filled_table(capacity, fill, KeyHashAlgorithm::Fnv),
            |mut table| {
                for (i, key) in churn_keys.iter().enumerate().step_by(3) {
                    black_box(table.delete(key));
                    table.set(key.as_str(), i);
                }
                table
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_insert, bench_lookup, bench_churn);
criterion_main!(benches);
