use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use ranksort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Median");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;
    let values: Vec<u64> = (0..count).map(|_| rng.random_range(0..1 << 40)).collect();

    group.throughput(Throughput::Elements(count as u64));

    // Quickselect
    group.bench_function("median (quickselect)", |b| {
        b.iter_batched(
            || values.clone(),
            |mut data| median(black_box(&mut data), |a, b| (a + b) / 2),
            BatchSize::LargeInput,
        )
    });

    // Full sort then index
    group.bench_function("quicksort + index", |b| {
        let sorter = Sorter::default();
        b.iter_batched(
            || values.clone(),
            |mut data| {
                sorter.sort(black_box(&mut data));
                (data[count / 2] + data[count / 2 - 1]) / 2
            },
            BatchSize::LargeInput,
        )
    });

    // Std selection
    group.bench_function("slice::select_nth_unstable", |b| {
        b.iter_batched(
            || values.clone(),
            |mut data| *data.select_nth_unstable(count / 2).1,
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_1m_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Sort");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60));

    let mut rng = rand::rng();
    let count = 1_000_000;
    let values: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.throughput(Throughput::Elements(count as u64));

    for method in [SortingMethod::Quicksort, SortingMethod::Heapsort] {
        let sorter = Sorter::create(method);
        group.bench_function(method.name(), |b| {
            b.iter_batched(
                || values.clone(),
                |mut data| sorter.sort(black_box(&mut data)),
                BatchSize::LargeInput,
            )
        });
    }

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || values.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_median, bench_1m_sort);
criterion_main!(benches);
