// Copyright 2026 the Revolve Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use revolve_carousel::{Carousel, CarouselConfig, ContentResolver, MovementMode};

fn carousel(config: CarouselConfig, len: usize) -> Carousel<usize, usize> {
    let mut carousel = Carousel::new(config, ContentResolver::fixed(|item: &usize| *item));
    carousel.set_viewport(Size::new(1280.0, 720.0));
    carousel.set_items_source(Some((0..len).collect()));
    if let Some(token) = carousel.pending_layout() {
        carousel.run_deferred(token);
    }
    carousel.drain_events().for_each(drop);
    carousel
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/move_next");

    for (name, virtualize) in [("full", false), ("virtualized", true)] {
        for len in [100usize, 10_000] {
            let config = CarouselConfig::default().with_virtualization(virtualize);
            group.bench_with_input(BenchmarkId::new(name, len), &len, |b, &len| {
                b.iter_batched(
                    || carousel(config.clone(), len),
                    |mut carousel| {
                        for _ in 0..32 {
                            carousel.move_next();
                        }
                        black_box(carousel.drain_events().count());
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_swipe(c: &mut Criterion) {
    let config = CarouselConfig::default()
        .with_virtualization(true)
        .with_movement_mode(MovementMode::MultipleItems);
    let mut carousel = carousel(config, 10_000);
    carousel.set_selected_index(9_000);

    c.bench_function("carousel/swipe_gesture", |b| {
        b.iter(|| {
            carousel.on_pointer_down(Point::new(1000.0, 360.0));
            for step in 0..40 {
                carousel.on_pointer_move(Point::new(1000.0 - f64::from(step) * 20.0, 362.0));
            }
            carousel.on_pointer_up();
            carousel.set_selected_index(9_000);
            black_box(carousel.drain_events().count());
        });
    });
}

criterion_group!(benches, bench_navigation, bench_swipe);
criterion_main!(benches);
