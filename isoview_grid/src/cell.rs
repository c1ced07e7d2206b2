// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;

use kurbo::Rect;

/// Integer address of a single tile in the grid lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    /// Cell index along the grid X axis.
    pub x: i64,
    /// Cell index along the grid Y axis.
    pub y: i64,
}

impl GridCell {
    /// Creates a cell address.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for GridCell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Inclusive, axis‑aligned rectangle of grid cells.
///
/// A range always holds at least one cell: `min` and `max` are both part of
/// it. Iteration is row‑major, walking `x` from `min.x` to `max.x` for each
/// `y` from `min.y` to `max.y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRange {
    min: GridCell,
    max: GridCell,
}

impl CellRange {
    /// Creates a range spanning the two given corner cells.
    ///
    /// The corners may be given in any order; each axis is normalized so that
    /// `min <= max`.
    #[must_use]
    pub fn new(a: GridCell, b: GridCell) -> Self {
        Self {
            min: GridCell::new(a.x.min(b.x), a.y.min(b.y)),
            max: GridCell::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest range whose cells cover a grid‑space rectangle, grown by
    /// `margin` cells on every side.
    ///
    /// The minimum edges are floored and the maximum edges ceiled before the
    /// margin is applied. Coordinates outside the `i64` range saturate.
    #[must_use]
    pub fn covering(grid_rect: Rect, margin: i64) -> Self {
        let min = GridCell::new(
            floor_to_i64(grid_rect.min_x()).saturating_sub(margin),
            floor_to_i64(grid_rect.min_y()).saturating_sub(margin),
        );
        let max = GridCell::new(
            ceil_to_i64(grid_rect.max_x()).saturating_add(margin),
            ceil_to_i64(grid_rect.max_y()).saturating_add(margin),
        );
        Self::new(min, max)
    }

    /// Returns the minimum corner (inclusive).
    #[must_use]
    pub fn min(&self) -> GridCell {
        self.min
    }

    /// Returns the maximum corner (inclusive).
    #[must_use]
    pub fn max(&self) -> GridCell {
        self.max
    }

    /// Number of columns in the range.
    #[must_use]
    pub fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    /// Number of rows in the range.
    #[must_use]
    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Total number of cells, saturating at `u64::MAX`.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    /// Returns `true` if `cell` lies inside the range.
    #[must_use]
    pub fn contains(&self, cell: GridCell) -> bool {
        (self.min.x..=self.max.x).contains(&cell.x) && (self.min.y..=self.max.y).contains(&cell.y)
    }

    /// Returns a row‑major iterator over every cell in the range.
    #[must_use]
    pub fn iter(&self) -> CellRangeIter {
        CellRangeIter {
            range: *self,
            next: Some(self.min),
        }
    }
}

impl IntoIterator for CellRange {
    type Item = GridCell;
    type IntoIter = CellRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &CellRange {
    type Item = GridCell;
    type IntoIter = CellRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row‑major iterator over a [`CellRange`].
#[derive(Clone, Debug)]
pub struct CellRangeIter {
    range: CellRange,
    next: Option<GridCell>,
}

impl Iterator for CellRangeIter {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        let cell = self.next?;
        self.next = if cell.x < self.range.max.x {
            Some(GridCell::new(cell.x + 1, cell.y))
        } else if cell.y < self.range.max.y {
            Some(GridCell::new(self.range.min.x, cell.y + 1))
        } else {
            None
        };
        Some(cell)
    }
}

impl FusedIterator for CellRangeIter {}

#[allow(
    clippy::cast_possible_truncation,
    reason = "grid coordinates saturate into i64 and NaN maps to 0"
)]
pub(crate) fn floor_to_i64(v: f64) -> i64 {
    libm::floor(v) as i64
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "grid coordinates saturate into i64 and NaN maps to 0"
)]
fn ceil_to_i64(v: f64) -> i64 {
    libm::ceil(v) as i64
}
