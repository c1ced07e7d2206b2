// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=isoview_grid --heading-base-level=0

//! Isoview Grid: isometric tile lattice geometry.
//!
//! This crate maps between two coordinate spaces:
//! - **Grid space**: addresses in an infinite diamond‑tile lattice. Fractional
//!   values are allowed; integer parts name a cell.
//! - **World space**: the unscaled screen plane after isometric projection,
//!   before any camera pan or zoom is applied.
//!
//! A tile of size `tile_width × tile_height` is drawn as a diamond whose top
//! vertex sits at [`GridTransform::grid_to_world`] of its cell address. The
//! mapping is linear and exactly invertible, so a world point can always be
//! resolved back to a grid position with [`GridTransform::world_to_grid`] and
//! to the cell containing it with [`GridTransform::cell_at`].
//!
//! The crate does not know about cameras, viewports, or rendering. Pair it
//! with `isoview_camera` for pan/zoom and `isoview_controller` for picking and
//! visible-cell enumeration.
//!
//! ## Minimal example
//!
//! ```rust
//! use isoview_grid::{GridCell, GridTransform};
//!
//! let grid = GridTransform::new(64.0, 32.0).unwrap();
//!
//! let world = grid.grid_to_world(1.0, 0.0);
//! assert_eq!((world.x, world.y), (32.0, 16.0));
//!
//! assert_eq!(grid.cell_at(world.x, world.y), GridCell::new(1, 0));
//! ```
//!
//! ## Cell ranges
//!
//! [`CellRange`] is an inclusive rectangle of cells that iterates in
//! row‑major order (`y` outer, `x` inner):
//!
//! ```rust
//! use isoview_grid::{CellRange, GridCell};
//!
//! let range = CellRange::new(GridCell::new(-1, 0), GridCell::new(0, 1));
//! let cells: Vec<GridCell> = range.iter().collect();
//! assert_eq!(
//!     cells,
//!     [
//!         GridCell::new(-1, 0),
//!         GridCell::new(0, 0),
//!         GridCell::new(-1, 1),
//!         GridCell::new(0, 1),
//!     ]
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod cell;
mod transform;

pub use cell::{CellRange, CellRangeIter, GridCell};
pub use transform::{GridTransform, TileSizeError};
