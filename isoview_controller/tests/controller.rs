// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `isoview_controller` crate.
//!
//! These drive a `ViewportController` end to end the way a host UI would, and
//! check what a recording `TileRenderer` receives.

use isoview_camera::{Camera, CameraError};
use isoview_controller::{
    FrameInfo, TILE_STYLE_EVEN, TILE_STYLE_ODD, TileRenderer, ViewportController, ViewportEvent,
};
use isoview_grid::{GridCell, GridTransform};
use kurbo::Point;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Begin(FrameInfo),
    Clear,
    Tile(Point, String),
    Lines(i64, i64, i64, i64),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Recorder {
    fn tiles(&self) -> impl Iterator<Item = (&Point, &str)> {
        self.calls.iter().filter_map(|c| match c {
            Call::Tile(p, s) => Some((p, s.as_str())),
            _ => None,
        })
    }
}

impl TileRenderer for Recorder {
    fn begin_frame(&mut self, frame: &FrameInfo) {
        self.calls.push(Call::Begin(*frame));
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn draw_tile(&mut self, origin: Point, style: &str) {
        self.calls.push(Call::Tile(origin, style.to_owned()));
    }

    fn draw_grid_lines(&mut self, start_x: i64, start_y: i64, end_x: i64, end_y: i64) {
        self.calls.push(Call::Lines(start_x, start_y, end_x, end_y));
    }
}

fn controller(width: f64, height: f64) -> ViewportController {
    ViewportController::new(
        GridTransform::new(64.0, 32.0).unwrap(),
        Camera::new(width, height).unwrap(),
    )
}

#[test]
fn gesture_sequence_from_host_events() {
    let mut view = controller(800.0, 600.0);

    let events = [
        ViewportEvent::PointerDown(Point::new(50.0, 50.0)),
        ViewportEvent::PointerMove(Point::new(60.0, 60.0)),
        ViewportEvent::PointerMove(Point::new(60.0, 60.0)),
    ];
    for event in events {
        view.handle_event(event).unwrap();
    }
    // Repeating the same move does not double the pan.
    assert_eq!(view.camera().position(), Point::new(-10.0, -10.0));

    view.handle_event(ViewportEvent::PointerUp).unwrap();
    view.handle_event(ViewportEvent::PointerMove(Point::new(500.0, 500.0)))
        .unwrap();
    assert_eq!(view.camera().position(), Point::new(-10.0, -10.0));
}

#[test]
fn focal_zoom_keeps_picked_cell_through_many_notches() {
    let mut view = controller(800.0, 600.0);
    let focal = Point::new(100.0, 100.0);
    let cell = view.grid_cell_at(focal.x, focal.y);

    for delta in [-1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0] {
        view.zoom(delta, focal.x, focal.y).unwrap();
        assert_eq!(view.grid_cell_at(focal.x, focal.y), cell);
    }
}

#[test]
fn wheel_during_drag_is_not_undone_by_the_next_move() {
    let mut view = controller(800.0, 600.0);
    let pointer = Point::new(400.0, 300.0);
    let cursor = Point::new(100.0, 100.0);
    let world = view.camera().viewport_to_world(cursor.x, cursor.y);

    view.handle_event(ViewportEvent::PointerDown(pointer)).unwrap();
    view.handle_event(ViewportEvent::Wheel {
        delta_y: -1.0,
        position: cursor,
    })
    .unwrap();
    view.handle_event(ViewportEvent::PointerMove(pointer)).unwrap();

    let after = view.camera().viewport_to_world(cursor.x, cursor.y);
    assert!((after - world).hypot() < 1e-9);
    assert!(view.camera().zoom() > 1.0);
}

#[test]
fn zoom_then_pan_moves_in_world_units_divided_by_zoom() {
    let mut view = controller(800.0, 600.0);
    view.camera_mut().set_zoom(4.0).unwrap();
    let start = view.camera().position();

    view.start_pan(0.0, 0.0);
    view.update_pan(40.0, 80.0);
    view.end_pan();

    let moved = view.camera().position();
    assert_eq!(moved, Point::new(start.x - 10.0, start.y - 20.0));
}

#[test]
fn render_draws_each_visible_cell_once_after_clear() {
    let view = controller(320.0, 240.0);
    let mut rec = Recorder::default();
    view.render(&mut rec);

    let cells = view.visible_cells();
    assert!(matches!(rec.calls.first(), Some(Call::Begin(_))));
    assert_eq!(rec.calls.get(1), Some(&Call::Clear));
    assert_eq!(rec.tiles().count() as u64, cells.cell_count());

    let (min, max) = (cells.min(), cells.max());
    assert_eq!(
        rec.calls.last(),
        Some(&Call::Lines(min.x, min.y, max.x, max.y))
    );
}

#[test]
fn render_positions_match_camera_and_grid() {
    let mut view = controller(320.0, 240.0);
    view.camera_mut().set_position(-100.0, 40.0);
    view.camera_mut().set_zoom(1.5).unwrap();

    let mut rec = Recorder::default();
    view.render(&mut rec);

    for (cell, (origin, style)) in view.visible_cells().iter().zip(rec.tiles()) {
        let world = view.grid().grid_to_world(cell.x as f64, cell.y as f64);
        let expected = view.camera().world_to_viewport(world.x, world.y);
        assert_eq!(*origin, expected);
        let want = if (cell.x + cell.y).rem_euclid(2) == 0 {
            TILE_STYLE_EVEN
        } else {
            TILE_STYLE_ODD
        };
        assert_eq!(style, want);
    }
}

#[test]
fn frame_info_reports_scaled_tile_size() {
    let mut view = controller(320.0, 240.0);
    view.camera_mut().set_zoom(2.0).unwrap();

    let mut rec = Recorder::default();
    view.render(&mut rec);

    let Some(Call::Begin(frame)) = rec.calls.first() else {
        panic!("render did not begin a frame");
    };
    assert_eq!(frame.zoom, 2.0);
    assert_eq!(frame.tile_size, kurbo::Size::new(128.0, 64.0));
    assert_eq!(frame.cells, view.visible_cells());

    // The frame transform lands grid points where the tiles were drawn.
    let min = frame.cells.min();
    let (first_origin, _) = rec.tiles().next().unwrap();
    let mapped = frame.grid_to_viewport * Point::new(min.x as f64, min.y as f64);
    assert!((mapped - *first_origin).hypot() < 1e-9);
}

#[test]
fn render_with_uses_custom_styles_and_dyn_renderers() {
    let view = controller(200.0, 200.0);
    let mut rec = Recorder::default();
    {
        let renderer: &mut dyn TileRenderer = &mut rec;
        view.render_with(renderer, |cell: GridCell| format!("cell-{}-{}", cell.x, cell.y));
    }
    let first = view.visible_cells().min();
    let (_, style) = rec.tiles().next().unwrap();
    assert_eq!(style, format!("cell-{}-{}", first.x, first.y));
}

#[test]
fn visible_cells_grow_when_zooming_out_and_follow_resize() {
    let mut view = controller(400.0, 300.0);
    let base = view.visible_cells().cell_count();

    for _ in 0..5 {
        view.zoom(1.0, 200.0, 150.0).unwrap();
    }
    assert!(view.visible_cells().cell_count() > base);

    view.camera_mut().resize(800.0, 600.0).unwrap();
    let resized = view.visible_cells();
    assert!(resized.contains(view.grid_cell_at(799.0, 599.0)));
}

#[test]
fn invalid_camera_input_is_rejected_without_side_effects() {
    let mut view = controller(400.0, 300.0);
    view.camera_mut().set_zoom(3.0).unwrap();
    for bad in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            view.camera_mut().set_zoom(bad),
            Err(CameraError::InvalidZoom(_))
        ));
    }
    assert_eq!(view.camera().zoom(), 3.0);
}
