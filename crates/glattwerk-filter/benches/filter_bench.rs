// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the smoothing filters in the glattwerk-filter crate.
// Runs mean and median filters of a few window sizes over a synthetic noisy
// grid.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use glattwerk_core::Grid;
use glattwerk_filter::{FilterKind, psnr};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// 128x128 gradient with every 13th pixel forced to white (salt noise).
fn noisy_grid() -> Grid {
    Grid::from_fn(128, 128, |row, col| {
        if (row * 128 + col) % 13 == 0 {
            255.0
        } else {
            ((row + col) % 256) as f64
        }
    })
}

/// Mean and median filters at window sizes 3, 5 and 7.
fn bench_filters(c: &mut Criterion) {
    let grid = noisy_grid();
    let mut group = c.benchmark_group("smoothing (128x128)");

    for kind in FilterKind::ALL {
        for size in [3usize, 5, 7] {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, &size| {
                b.iter(|| black_box(kind.apply(black_box(&grid), size)));
            });
        }
    }
    group.finish();
}

/// PSNR between the noisy grid and its median-filtered version.
fn bench_psnr(c: &mut Criterion) {
    let grid = noisy_grid();
    let smoothed = match FilterKind::Median.apply(&grid, 3) {
        Ok(smoothed) => smoothed,
        Err(err) => panic!("median filter failed: {err}"),
    };

    c.bench_function("psnr (128x128)", |b| {
        b.iter(|| black_box(psnr(black_box(&grid), black_box(&smoothed))));
    });
}

criterion_group!(benches, bench_filters, bench_psnr);
criterion_main!(benches);
