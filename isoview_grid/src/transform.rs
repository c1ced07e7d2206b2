// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point};

use crate::cell::{GridCell, floor_to_i64};

/// Error returned when a [`GridTransform`] is built from unusable tile dimensions.
///
/// Both dimensions must be finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSizeError {
    /// The rejected tile width.
    pub width: f64,
    /// The rejected tile height.
    pub height: f64,
}

impl fmt::Display for TileSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tile size {}x{} is invalid: both dimensions must be finite and positive",
            self.width, self.height
        )
    }
}

impl core::error::Error for TileSizeError {}

/// Stateless mapping between grid space and world space for diamond tiles.
///
/// With `hw = tile_width / 2` and `hh = tile_height / 2`:
///
/// ```text
/// world_x = (grid_x - grid_y) * hw
/// world_y = (grid_x + grid_y) * hh
/// ```
///
/// The transform is immutable and `Copy`; share it freely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTransform {
    tile_width: f64,
    tile_height: f64,
}

impl GridTransform {
    /// Creates a transform for tiles of the given on‑screen size in world units.
    ///
    /// Fails if either dimension is non‑finite or not strictly positive.
    pub fn new(tile_width: f64, tile_height: f64) -> Result<Self, TileSizeError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(tile_width) || !valid(tile_height) {
            return Err(TileSizeError {
                width: tile_width,
                height: tile_height,
            });
        }
        Ok(Self {
            tile_width,
            tile_height,
        })
    }

    /// Full diamond width in world units.
    #[must_use]
    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    /// Full diamond height in world units.
    #[must_use]
    pub fn tile_height(&self) -> f64 {
        self.tile_height
    }

    /// Half the tile width; the world X step per grid unit.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.tile_width / 2.0
    }

    /// Half the tile height; the world Y step per grid unit.
    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.tile_height / 2.0
    }

    /// Projects a (possibly fractional) grid position into world space.
    #[must_use]
    pub fn grid_to_world(&self, grid_x: f64, grid_y: f64) -> Point {
        Point::new(
            (grid_x - grid_y) * self.half_width(),
            (grid_x + grid_y) * self.half_height(),
        )
    }

    /// Inverse of [`GridTransform::grid_to_world`].
    ///
    /// Non‑finite input yields non‑finite output.
    #[must_use]
    pub fn world_to_grid(&self, world_x: f64, world_y: f64) -> Point {
        let u = world_x / self.half_width();
        let v = world_y / self.half_height();
        Point::new((u + v) / 2.0, (v - u) / 2.0)
    }

    /// Returns the cell containing the given world point.
    ///
    /// Each grid component is floored toward negative infinity, so a grid X of
    /// `-0.3` belongs to cell `-1`. Grid positions outside the `i64` range
    /// saturate, and NaN maps to `0`.
    #[must_use]
    pub fn cell_at(&self, world_x: f64, world_y: f64) -> GridCell {
        let grid = self.world_to_grid(world_x, world_y);
        GridCell::new(floor_to_i64(grid.x), floor_to_i64(grid.y))
    }

    /// World position of a cell's top vertex.
    #[must_use]
    pub fn cell_origin(&self, cell: GridCell) -> Point {
        self.grid_to_world(cell.x as f64, cell.y as f64)
    }

    /// World position of a cell's centre.
    #[must_use]
    pub fn cell_center(&self, cell: GridCell) -> Point {
        self.grid_to_world(cell.x as f64 + 0.5, cell.y as f64 + 0.5)
    }

    /// The four diamond vertices of a cell in world space.
    ///
    /// Order is top, right, bottom, left.
    #[must_use]
    pub fn cell_corners(&self, cell: GridCell) -> [Point; 4] {
        let (x, y) = (cell.x as f64, cell.y as f64);
        [
            self.grid_to_world(x, y),
            self.grid_to_world(x + 1.0, y),
            self.grid_to_world(x + 1.0, y + 1.0),
            self.grid_to_world(x, y + 1.0),
        ]
    }

    /// The grid → world projection as an affine matrix.
    ///
    /// Useful for renderers that prefer to push a transform and draw unit
    /// squares in grid space.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        let hw = self.half_width();
        let hh = self.half_height();
        Affine::new([hw, hh, -hw, hh, 0.0, 0.0])
    }
}
