//! Criterion micro-benchmarks for append, insert/erase shifting, and copy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use ferrovec_bench::{preallocated, sequential, with_factor, LARGE, SMALL};
use ferrovec_buffer::Vector;

/// Benchmark: push LARGE elements from empty with the default doubling policy.
fn bench_push_grow(c: &mut Criterion) {
    c.bench_function("push_grow_100k", |b| {
        b.iter(|| black_box(sequential(LARGE)));
    });
}

/// Benchmark: push LARGE elements into an exactly reserved vector.
fn bench_push_reserved(c: &mut Criterion) {
    c.bench_function("push_reserved_100k", |b| {
        b.iter(|| black_box(preallocated(LARGE)));
    });
}

/// Benchmark: push LARGE elements with a factor-4 policy.
fn bench_push_factor4(c: &mut Criterion) {
    c.bench_function("push_factor4_100k", |b| {
        b.iter(|| black_box(with_factor(LARGE, 4)));
    });
}

/// Benchmark: insert at the front then erase it, shifting SMALL elements twice.
fn bench_insert_erase_front(c: &mut Criterion) {
    let mut v = preallocated(SMALL);
    v.reserve(SMALL + 1);
    c.bench_function("insert_erase_front_1k", |b| {
        b.iter(|| {
            v.insert(0, black_box(7));
            v.erase(0);
        });
    });
}

/// Benchmark: deep copy of LARGE elements.
fn bench_clone(c: &mut Criterion) {
    let v = sequential(LARGE);
    c.bench_function("clone_100k", |b| {
        b.iter(|| black_box(v.clone()));
    });
}

/// Benchmark: traverse LARGE elements through positions.
fn bench_position_walk(c: &mut Criterion) {
    let v = sequential(LARGE);
    c.bench_function("position_walk_100k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            let mut pos = v.begin();
            let end = v.end();
            while pos != end {
                sum = sum.wrapping_add(*pos);
                pos.inc();
            }
            black_box(sum)
        });
    });
}

/// Benchmark: resize up to LARGE then clear, reusing the allocation.
fn bench_resize_clear(c: &mut Criterion) {
    c.bench_function("resize_clear_100k", |b| {
        b.iter_batched(
            || Vector::<u64>::with_capacity(LARGE),
            |mut v| {
                v.resize(LARGE);
                v.clear();
                v
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_push_grow,
    bench_push_reserved,
    bench_push_factor4,
    bench_insert_erase_front,
    bench_clone,
    bench_position_walk,
    bench_resize_clear
);
criterion_main!(benches);
