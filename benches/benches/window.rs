// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use revolve_window::{VirtualizationWindow, WindowMetrics};

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("window/recompute");

    let cases = [
        ("linear", WindowMetrics::linear(1920.0, 200.0, 5.0)),
        ("arranged", WindowMetrics::arranged(1920.0, 150.0, 120.0, 60.0)),
        // Tiny steps make the walk long.
        ("dense", WindowMetrics::arranged(3840.0, 10.0, 4.0, 2.0)),
    ];
    for (name, metrics) in cases {
        group.bench_function(BenchmarkId::new(name, 1_000_000), |b| {
            let mut window = VirtualizationWindow::new();
            let mut selected = 500_000usize;
            b.iter(|| {
                selected = if selected == 500_010 { 500_000 } else { selected + 1 };
                window.recompute(selected, 1_000_000, &metrics);
                black_box(window.diff());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
