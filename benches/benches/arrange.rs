// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use revolve_arrange::{ArrangeInput, ArrangeParams, ViewMode, arrange};

fn params(view_mode: ViewMode) -> ArrangeParams {
    ArrangeParams {
        viewport: Size::new(1280.0, 720.0),
        view_mode,
        ..ArrangeParams::default()
    }
}

fn bench_arrange(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrange");

    for len in [16usize, 128, 1_024] {
        let fresh: Vec<ArrangeInput> = (0..len).map(ArrangeInput::fresh).collect();
        let selected = len / 2;
        group.throughput(Throughput::Elements(len as u64));

        for mode in [ViewMode::Default, ViewMode::Linear] {
            let params = params(mode);
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}/fresh"), len),
                &fresh,
                |b, items| b.iter(|| black_box(arrange(items, selected, &params))),
            );

            // Every item already placed around the previous selection, so
            // all of them get a transition.
            let prior = arrange(&fresh, selected - 1, &params);
            let placed: Vec<ArrangeInput> = prior
                .items()
                .iter()
                .map(|item| ArrangeInput {
                    index: item.index,
                    prior: Some(item.target),
                })
                .collect();
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}/animated"), len),
                &placed,
                |b, items| b.iter(|| black_box(arrange(items, selected, &params))),
            );
        }
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrange/hit_test");
    for len in [16usize, 128] {
        let items: Vec<ArrangeInput> = (0..len).map(ArrangeInput::fresh).collect();
        let plan = arrange(&items, len / 2, &params(ViewMode::Default));
        let probe = kurbo::Point::new(900.0, 360.0);
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| black_box(plan.hit_test(black_box(probe))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_arrange, bench_hit_test);
criterion_main!(benches);
