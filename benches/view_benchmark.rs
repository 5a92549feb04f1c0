//! Throughput benchmarks for the hot paths: dab emission along a stroke,
//! coordinate round trips, and zoom-change recomputation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rasterview::geometry::{Point, Rect};
use rasterview::view::{Canvas, EventBuffer, FixedViewport, View, ViewTransform};
use rasterview::zoom::ZoomLevel;
use rasterview::{DabsConfig, DabsStrategy, UiThread};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn bench_dab_emission(c: &mut Criterion) {
    init_tracing();
    c.bench_function("dabs_wavy_stroke_1000_points", |b| {
        b.iter(|| {
            let mut dabs = DabsStrategy::new(DabsConfig::default(), 10.0);
            dabs.on_drag_start(0.0, 0.0);
            let mut placed = 0usize;
            for i in 1..1000 {
                let x = i as f64;
                let y = (x * 0.05).sin() * 40.0;
                placed += dabs.on_new_point(x, y).len();
            }
            black_box(placed)
        })
    });
}

fn bench_transform_round_trip(c: &mut Criterion) {
    let mut transform = ViewTransform::new();
    transform.set_view_size(1920.0, 1080.0);
    transform.set_canvas_size(2828.0, 2828.0);
    transform.set_scale(1.414213562373095);

    c.bench_function("transform_round_trip_1000_points", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                let p = Point::new(i as f64 * 1.7, i as f64 * 0.9);
                let back = transform.image_to_component(transform.component_to_image(p));
                acc += back.x + back.y;
            }
            black_box(acc)
        })
    });
}

fn bench_zoom_ladder_walk(c: &mut Criterion) {
    let ui = UiThread::claim();
    let canvas = Canvas::new(4000, 3000).expect("valid size");
    let mut view = View::new(canvas, &ui);
    let viewport = FixedViewport(Rect::new(0.0, 0.0, 1920.0, 1080.0));
    let mut sink = EventBuffer::new();
    view.on_resize(1920.0, 1080.0, &mut sink);

    c.bench_function("zoom_full_ladder_walk", |b| {
        b.iter(|| {
            for _ in 0..ZoomLevel::COUNT {
                view.zoom_in(None, &viewport, &mut sink);
            }
            for _ in 0..ZoomLevel::COUNT {
                view.zoom_out(None, &viewport, &mut sink);
            }
            black_box(sink.drain().len())
        })
    });
}

criterion_group!(
    benches,
    bench_dab_emission,
    bench_transform_round_trip,
    bench_zoom_ladder_walk
);
criterion_main!(benches);
