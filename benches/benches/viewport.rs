// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use isoview_camera::Camera;
use isoview_controller::{TileRenderer, ViewportController};
use isoview_grid::GridTransform;
use kurbo::Point;

/// Renderer that only folds its inputs so the draw loop is not optimized away.
#[derive(Default)]
struct Sink {
    acc: f64,
    tiles: u64,
}

impl TileRenderer for Sink {
    fn clear(&mut self) {
        self.acc = 0.0;
        self.tiles = 0;
    }

    fn draw_tile(&mut self, origin: Point, style: &str) {
        self.acc += origin.x + origin.y + style.len() as f64;
        self.tiles += 1;
    }

    fn draw_grid_lines(&mut self, start_x: i64, start_y: i64, end_x: i64, end_y: i64) {
        self.acc += (start_x + start_y + end_x + end_y) as f64;
    }
}

fn controller(zoom: f64) -> ViewportController {
    let mut view = ViewportController::new(
        GridTransform::new(64.0, 32.0).unwrap(),
        Camera::new(1920.0, 1080.0).unwrap(),
    );
    view.camera_mut().set_zoom(zoom).unwrap();
    view
}

fn bench_pick(c: &mut Criterion) {
    let view = controller(1.0);
    let points: Vec<Point> = (0..1_024_u32)
        .map(|i| Point::new(f64::from(i % 64) * 30.0, f64::from(i / 64) * 67.5))
        .collect();

    let mut group = c.benchmark_group("controller/grid_cell_at");
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("1024_points", |b| {
        b.iter(|| {
            for p in &points {
                black_box(view.grid_cell_at(black_box(p.x), black_box(p.y)));
            }
        });
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/render");

    // Hypothesis: render cost is linear in visible cell count, which grows
    // with the square of 1 / zoom.
    for zoom in [2.0, 1.0, 0.5, 0.25] {
        let view = controller(zoom);
        group.throughput(Throughput::Elements(view.visible_cells().cell_count()));
        group.bench_with_input(BenchmarkId::from_parameter(zoom), &view, |b, view| {
            let mut sink = Sink::default();
            b.iter(|| {
                view.render(&mut sink);
                black_box(sink.acc);
            });
        });
    }

    group.finish();
}

fn bench_pan_and_zoom(c: &mut Criterion) {
    c.bench_function("controller/drag_then_wheel", |b| {
        let mut view = controller(1.0);
        b.iter(|| {
            view.start_pan(500.0, 500.0);
            for i in 0..32_u32 {
                view.update_pan(500.0 + f64::from(i), 500.0 - f64::from(i));
            }
            view.end_pan();
            view.zoom(-1.0, 960.0, 540.0).unwrap();
            view.zoom(1.0, 960.0, 540.0).unwrap();
            black_box(view.camera().position());
        });
    });
}

criterion_group!(benches, bench_pick, bench_render, bench_pan_and_zoom);
criterion_main!(benches);
