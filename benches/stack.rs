// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use arraystack::ArrayStack;

const SIZES: &[usize] = &[1024, 2048, 4096, 8192, 16384, 32768, 65536, 131_072];

struct BigLumpOfUsize([usize; 64]);

impl Default for BigLumpOfUsize {
    fn default() -> Self {
        Self([0; 64])
    }
}

pub fn push<A: Default>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter_batched_ref(
                Vec::new,
                |vec| {
                    for _ in 0..size {
                        vec.push(A::default());
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("empty stack", size), size, |b, &size| {
            b.iter_batched_ref(
                || ArrayStack::new(0),
                |stack| {
                    for _ in 0..size {
                        stack.push(A::default());
                    }
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("presized stack", size), size, |b, &size| {
            b.iter_batched_ref(
                || ArrayStack::new(size),
                |stack| {
                    for _ in 0..size {
                        stack.push(A::default());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

pub fn drain<A: Default>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter_batched_ref(
                || (0..size).map(|_| A::default()).collect::<Vec<_>>(),
                |vec| {
                    while let Some(value) = vec.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("stack", size), size, |b, &size| {
            b.iter_batched_ref(
                || {
                    let mut stack = ArrayStack::new(size);
                    for _ in 0..size {
                        stack.push(A::default());
                    }
                    stack
                },
                |stack| {
                    while let Ok(value) = stack.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn push_usize(c: &mut Criterion) {
    push::<usize>("push/usize", c)
}

fn drain_usize(c: &mut Criterion) {
    drain::<usize>("drain/usize", c)
}

fn push_64x_usize(c: &mut Criterion) {
    push::<BigLumpOfUsize>("push/64xusize", c)
}

fn drain_64x_usize(c: &mut Criterion) {
    drain::<BigLumpOfUsize>("drain/64xusize", c)
}

criterion_group!(
    arraystack,
    push_usize,
    drain_usize,
    push_64x_usize,
    drain_64x_usize
);
criterion_main!(arraystack);
