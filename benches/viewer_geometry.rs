// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-event viewer computations.
//!
//! Measures the performance of:
//! - Drag bounds computation and pan clamping (every pointer move while zoomed)
//! - Rendered size fitting (every resize and slide change)
//! - Navigation wrap-around
//! - Thumbnail row packing for a large gallery

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::domain::gallery::{pack_rows, AspectRatio, LayoutWeight};
use iced_gallery::domain::ui::geometry::{self, Dimensions, DragBounds, PanOffset};
use iced_gallery::domain::ui::newtypes::{ViewportFill, ZoomFactor};
use iced_gallery::ui::viewer::subcomponents::navigation;
use std::hint::black_box;

fn bench_drag_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_geometry");
    let viewport = Dimensions::new(1920.0, 1080.0);
    let natural = Dimensions::new(6000.0, 4000.0);

    group.bench_function("compute_and_clamp", |b| {
        b.iter(|| {
            let rendered =
                geometry::rendered_size(black_box(natural), viewport, ViewportFill::default());
            let bounds = DragBounds::compute(rendered, viewport, ZoomFactor::new(2.0));
            black_box(bounds.clamp(black_box(PanOffset::new(5000.0, -5000.0))))
        });
    });

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_navigation");

    group.bench_function("next_wraps_1000", |b| {
        b.iter(|| {
            let mut state = navigation::State::new(1000, 0);
            for _ in 0..1000 {
                black_box(state.handle(navigation::Message::Next));
            }
            black_box(state.index())
        });
    });

    group.finish();
}

fn bench_pack_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_layout");
    let weights: Vec<LayoutWeight> = (0..10_000u32)
        .map(|i| {
            let ratio = AspectRatio::from_dimensions(300 + (i * 37) % 900, 400).unwrap_or_default();
            LayoutWeight::from_aspect_ratio(ratio)
        })
        .collect();

    group.bench_function("pack_10k_thumbnails", |b| {
        b.iter(|| black_box(pack_rows(black_box(weights.iter().copied()))));
    });

    group.finish();
}

criterion_group!(benches, bench_drag_bounds, bench_navigation, bench_pack_rows);
criterion_main!(benches);
