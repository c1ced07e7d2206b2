// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use isoview_camera::{Camera, CameraError};
use isoview_grid::{CellRange, GridCell, GridTransform};
use kurbo::{Point, Rect, Size};
use log::{debug, trace};

use crate::gesture::PanGesture;
use crate::input::ViewportEvent;
use crate::render::{FrameInfo, TileRenderer, checkerboard_style};
use crate::zoom::ZoomStep;

/// Cells added around the visible bounding box so partially visible tiles at
/// the edges are still drawn.
const VISIBLE_MARGIN: i64 = 1;

/// Navigation and picking over an isometric grid.
///
/// `ViewportController` owns a [`Camera`] and a copy of an immutable
/// [`GridTransform`], and layers on top of them:
/// - A pan gesture driven by pointer down/move/up.
/// - Wheel zoom that keeps the world point under the cursor fixed.
/// - Cell picking from viewport pixels.
/// - Enumeration and rendering of the cells covering the viewport.
#[derive(Clone, Debug)]
pub struct ViewportController {
    grid: GridTransform,
    camera: Camera,
    gesture: PanGesture,
    zoom_step: ZoomStep,
}

impl ViewportController {
    /// Creates a controller with an idle gesture and the default zoom step.
    #[must_use]
    pub fn new(grid: GridTransform, camera: Camera) -> Self {
        Self {
            grid,
            camera,
            gesture: PanGesture::Idle,
            zoom_step: ZoomStep::DEFAULT,
        }
    }

    /// Replaces the wheel zoom step, consuming and returning the controller.
    #[must_use]
    pub fn with_zoom_step(mut self, step: ZoomStep) -> Self {
        self.zoom_step = step;
        self
    }

    /// Returns the grid transform.
    #[must_use]
    pub fn grid(&self) -> &GridTransform {
        &self.grid
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the camera for direct adjustment (resize, limits, jumps).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Returns the current pan gesture state.
    #[must_use]
    pub fn gesture(&self) -> PanGesture {
        self.gesture
    }

    /// Returns `true` while a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.gesture.is_panning()
    }

    /// Returns the wheel zoom step.
    #[must_use]
    pub fn zoom_step(&self) -> ZoomStep {
        self.zoom_step
    }

    /// Sets the wheel zoom step.
    pub fn set_zoom_step(&mut self, step: ZoomStep) {
        self.zoom_step = step;
    }

    /// Returns the cell under a viewport pixel.
    #[must_use]
    pub fn grid_cell_at(&self, viewport_x: f64, viewport_y: f64) -> GridCell {
        let world = self.camera.viewport_to_world(viewport_x, viewport_y);
        self.grid.cell_at(world.x, world.y)
    }

    /// Begins a pan anchored at a viewport position.
    ///
    /// Calling this while already panning restarts the gesture from the new
    /// anchor.
    pub fn start_pan(&mut self, viewport_x: f64, viewport_y: f64) {
        if self.gesture.is_panning() {
            debug!("pan restarted without end_pan; re-anchoring");
        }
        let anchor = Point::new(viewport_x, viewport_y);
        self.gesture.start(anchor, self.camera.position());
        debug!(
            "pan started at {anchor:?} with camera at {:?}",
            self.camera.position()
        );
    }

    /// Moves the camera to follow the pointer during a pan.
    ///
    /// Returns the new camera position, or `None` (and does nothing) when no
    /// pan is active.
    pub fn update_pan(&mut self, viewport_x: f64, viewport_y: f64) -> Option<Point> {
        let current = Point::new(viewport_x, viewport_y);
        let position = self.gesture.update(current, self.camera.zoom())?;
        self.camera.set_position(position.x, position.y);
        trace!("pan to {current:?}; camera at {position:?}");
        Some(position)
    }

    /// Ends the current pan. Does nothing when idle.
    pub fn end_pan(&mut self) {
        if self.gesture.is_panning() {
            self.gesture.end();
            debug!("pan ended with camera at {:?}", self.camera.position());
        }
    }

    /// Zooms one wheel notch about a focal viewport point.
    ///
    /// The world point under `(focal_x, focal_y)` stays under it after the
    /// zoom. Only the sign of `delta` matters (see [`ZoomStep`]). Returns the
    /// zoom now in effect.
    ///
    /// An active pan is re‑anchored, so the next pointer move continues from
    /// the zoomed view instead of undoing it.
    pub fn zoom(&mut self, delta: f64, focal_x: f64, focal_y: f64) -> Result<f64, CameraError> {
        let old_zoom = self.camera.zoom();
        let focal_world = self.camera.viewport_to_world(focal_x, focal_y);
        let (min_zoom, max_zoom) = self.camera.zoom_limits();
        let new_zoom = (old_zoom * self.zoom_step.factor(delta)).clamp(min_zoom, max_zoom);
        if new_zoom == old_zoom {
            return Ok(old_zoom);
        }

        self.camera.set_zoom(new_zoom)?;
        let new_zoom = self.camera.zoom();
        self.camera.set_position(
            focal_world.x - focal_x / new_zoom,
            focal_world.y - focal_y / new_zoom,
        );
        self.gesture.rebase(self.camera.position(), new_zoom);
        debug!("zoom {old_zoom} -> {new_zoom} about ({focal_x}, {focal_y})");
        Ok(new_zoom)
    }

    /// Dispatches a host input event.
    ///
    /// Returns `true` when the camera moved or zoomed.
    pub fn handle_event(&mut self, event: ViewportEvent) -> Result<bool, CameraError> {
        match event {
            ViewportEvent::PointerDown(p) => {
                self.start_pan(p.x, p.y);
                Ok(false)
            }
            ViewportEvent::PointerMove(p) => Ok(self.update_pan(p.x, p.y).is_some()),
            ViewportEvent::PointerUp => {
                self.end_pan();
                Ok(false)
            }
            ViewportEvent::Wheel { delta_y, position } => {
                let before = (self.camera.zoom(), self.camera.position());
                self.zoom(delta_y, position.x, position.y)?;
                Ok(before != (self.camera.zoom(), self.camera.position()))
            }
        }
    }

    /// Centers the camera on a cell.
    pub fn center_on_cell(&mut self, cell: GridCell) {
        self.camera.center_on(self.grid.cell_center(cell));
    }

    /// A cell's diamond vertices in viewport space (top, right, bottom, left).
    #[must_use]
    pub fn cell_viewport_corners(&self, cell: GridCell) -> [Point; 4] {
        self.grid
            .cell_corners(cell)
            .map(|w| self.camera.world_to_viewport(w.x, w.y))
    }

    /// The rectangular range of cells covering the viewport.
    ///
    /// All four viewport corners are taken to grid space, their bounding box
    /// is floored/ceiled to whole cells, then grown by one cell on every side.
    #[must_use]
    pub fn visible_cells(&self) -> CellRange {
        let size = self.camera.viewport_size();
        let [c0, c1, c2, c3] = [
            (0.0, 0.0),
            (size.width, 0.0),
            (0.0, size.height),
            (size.width, size.height),
        ]
        .map(|(vx, vy)| {
            let world = self.camera.viewport_to_world(vx, vy);
            self.grid.world_to_grid(world.x, world.y)
        });
        let grid_rect = Rect::from_points(c0, c1).union_pt(c2).union_pt(c3);
        CellRange::covering(grid_rect, VISIBLE_MARGIN)
    }

    /// Draws every visible cell with the default checkerboard style.
    ///
    /// See [`ViewportController::render_with`].
    pub fn render<R: TileRenderer + ?Sized>(&self, renderer: &mut R) {
        self.render_with(renderer, checkerboard_style);
    }

    /// Draws every visible cell, asking `style` for each cell's style name.
    ///
    /// The renderer sees `begin_frame`, `clear`, one `draw_tile` per cell of
    /// [`ViewportController::visible_cells`] in row‑major order, then a single
    /// `draw_grid_lines` over the same range.
    pub fn render_with<R, F, S>(&self, renderer: &mut R, mut style: F)
    where
        R: TileRenderer + ?Sized,
        F: FnMut(GridCell) -> S,
        S: AsRef<str>,
    {
        let cells = self.visible_cells();
        let zoom = self.camera.zoom();
        let frame = FrameInfo {
            viewport: self.camera.viewport_size(),
            zoom,
            tile_size: Size::new(
                self.grid.tile_width() * zoom,
                self.grid.tile_height() * zoom,
            ),
            cells,
            grid_to_viewport: self.camera.world_to_viewport_transform() * self.grid.to_affine(),
        };
        trace!("rendering {} cells in {cells:?}", cells.cell_count());

        renderer.begin_frame(&frame);
        renderer.clear();
        for cell in cells {
            let world = self.grid.cell_origin(cell);
            let origin = self.camera.world_to_viewport(world.x, world.y);
            renderer.draw_tile(origin, style(cell).as_ref());
        }
        let (min, max) = (cells.min(), cells.max());
        renderer.draw_grid_lines(min.x, min.y, max.x, max.y);
    }
}
