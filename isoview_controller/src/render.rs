// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use isoview_grid::{CellRange, GridCell};
use kurbo::{Affine, Point, Size};

/// Style identifier for cells whose `x + y` is even.
pub const TILE_STYLE_EVEN: &str = "#5b8c3a";

/// Style identifier for cells whose `x + y` is odd.
pub const TILE_STYLE_ODD: &str = "#4c7a30";

/// Per‑frame context handed to [`TileRenderer::begin_frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInfo {
    /// Viewport size in device pixels.
    pub viewport: Size,
    /// Current camera zoom.
    pub zoom: f64,
    /// On‑screen diamond size: tile size multiplied by zoom.
    pub tile_size: Size,
    /// Cells about to be drawn.
    pub cells: CellRange,
    /// Grid → viewport mapping for this frame, for drawing grid lines.
    pub grid_to_viewport: Affine,
}

/// Drawing collaborator driven by [`crate::ViewportController::render`].
///
/// Implementations receive finished viewport coordinates and style names.
/// Nothing is returned to the controller.
pub trait TileRenderer {
    /// Called once before [`TileRenderer::clear`] with the frame's geometry.
    ///
    /// The default implementation does nothing.
    fn begin_frame(&mut self, frame: &FrameInfo) {
        let _ = frame;
    }

    /// Clear the drawing surface.
    fn clear(&mut self);

    /// Draw one diamond tile whose top vertex is at `origin` in viewport space.
    fn draw_tile(&mut self, origin: Point, style: &str);

    /// Draw grid lines over the inclusive cell range `start..=end`.
    fn draw_grid_lines(&mut self, start_x: i64, start_y: i64, end_x: i64, end_y: i64);
}

/// Default two‑tone checkerboard style.
#[must_use]
pub fn checkerboard_style(cell: GridCell) -> &'static str {
    // Parity of x + y without risking overflow.
    if (cell.x ^ cell.y) & 1 == 0 {
        TILE_STYLE_EVEN
    } else {
        TILE_STYLE_ODD
    }
}
