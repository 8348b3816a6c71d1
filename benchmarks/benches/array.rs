// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use sequin_adapt::Stack;
use sequin_vec::DynArray;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench array
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs DynArray
// =============================================================================

fn bench_push_growing(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_push_growing");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("DynArray", size), &size, |b, &s| {
            b.iter(|| {
                let mut arr = DynArray::new();
                for i in 0..s {
                    arr.push(i as u64);
                }
                black_box(arr)
            });
        });
    }

    group.finish();
}

fn bench_push_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_push_reserved");
    configure_group(&mut group);

    for size in [1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("DynArray", size), &size, |b, &s| {
            let mut arr = DynArray::with_capacity(s);
            b.iter(|| {
                arr.clear();
                for i in 0..s {
                    arr.push(i as u64);
                }
                black_box(&arr);
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_insert_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.insert(0, i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("DynArray", size), &size, |b, &s| {
            b.iter(|| {
                let mut arr = DynArray::new();
                for i in 0..s {
                    arr.insert(0, i as u32);
                }
                black_box(arr)
            });
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_clone_strings");
    configure_group(&mut group);

    for size in [100, 10_000] {
        let vec: Vec<String> = (0..size).map(|i| i.to_string()).collect();
        let arr: DynArray<String> = vec.iter().cloned().collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &vec, |b, v| {
            b.iter(|| black_box(v.clone()));
        });

        group.bench_with_input(BenchmarkId::new("DynArray", size), &arr, |b, a| {
            b.iter(|| black_box(a.clone()));
        });
    }

    group.finish();
}

fn bench_stack_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_drain");
    configure_group(&mut group);

    let size = 10_000;
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("Stack<DynArray>", |b| {
        b.iter_batched(
            || {
                let mut stack = Stack::new();
                for i in 0..size {
                    stack.push(i as u64);
                }
                stack
            },
            |mut stack| {
                while let Some(v) = stack.try_pop() {
                    black_box(v);
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("Stack<Vec>", |b| {
        b.iter_batched(
            || {
                let mut stack: Stack<u64, Vec<u64>> = Stack::default();
                for i in 0..size {
                    stack.push(i as u64);
                }
                stack
            },
            |mut stack| {
                while let Some(v) = stack.try_pop() {
                    black_box(v);
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_growing,
    bench_push_reserved,
    bench_insert_front,
    bench_clone,
    bench_stack_drain,
);
criterion_main!(benches);
