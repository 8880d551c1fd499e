// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use plinth_trig::{cos, reduce, sin, sin_cos};

/// Representative arguments per reduction path
const INPUTS: [(&str, f64); 4] = [
    ("direct", 0.5),
    ("medium", 123.456),
    ("near limit", 1.6e6),
    ("large", 1e22),
];

fn benchmark_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("trig");

    for (label, x) in INPUTS.iter() {
        group.bench_with_input(format!("sin {}", label), x, |b, &x| {
            b.iter(|| sin(black_box(x)));
        });
        group.bench_with_input(format!("cos {}", label), x, |b, &x| {
            b.iter(|| cos(black_box(x)));
        });
        group.bench_with_input(format!("sin_cos {}", label), x, |b, &x| {
            b.iter(|| sin_cos(black_box(x)));
        });
        group.bench_with_input(format!("reduce {}", label), x, |b, &x| {
            b.iter(|| reduce(black_box(x)));
        });
        group.bench_with_input(format!("std sin {}", label), x, |b, &x| {
            b.iter(|| black_box(x).sin());
        });
    }
    group.finish();
}

fn benchmark_trig_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("trig_sweep");
    let inputs: Vec<f64> = (0..10_000).map(|i| -10.0 + i as f64 * 2e-3).collect();

    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("sin_cos [-10, 10]", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &inputs {
                let (s, c) = sin_cos(black_box(x));
                acc += s + c;
            }
            acc
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_trig, benchmark_trig_sweep);
criterion_main!(benches);
