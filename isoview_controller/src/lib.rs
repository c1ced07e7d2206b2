// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=isoview_controller --heading-base-level=0

//! Isoview Controller: navigation, picking, and rendering for an isometric grid.
//!
//! [`ViewportController`] composes an [`isoview_grid::GridTransform`] (grid ↔
//! world) with an [`isoview_camera::Camera`] (world ↔ viewport) and answers the
//! questions a host UI asks:
//! - *Which cell is under this pixel?* [`ViewportController::grid_cell_at`].
//! - *The user is dragging; where is the camera now?*
//!   [`ViewportController::start_pan`], [`ViewportController::update_pan`],
//!   [`ViewportController::end_pan`].
//! - *The wheel turned over this pixel.* [`ViewportController::zoom`], which
//!   keeps the world point under the cursor fixed.
//! - *Which cells must be drawn?* [`ViewportController::visible_cells`] and
//!   [`ViewportController::render`], which drives a [`TileRenderer`].
//!
//! The controller holds no timers and performs no drawing itself. Host input
//! can be fed either through the individual methods or as
//! [`ViewportEvent`]s via [`ViewportController::handle_event`].
//!
//! ## Minimal example
//!
//! ```rust
//! use isoview_camera::Camera;
//! use isoview_controller::ViewportController;
//! use isoview_grid::{GridCell, GridTransform};
//!
//! let grid = GridTransform::new(64.0, 32.0).unwrap();
//! let camera = Camera::new(800.0, 600.0).unwrap();
//! let mut view = ViewportController::new(grid, camera);
//!
//! // Drag the grid 10px right and down.
//! view.start_pan(50.0, 50.0);
//! view.update_pan(60.0, 60.0);
//! view.end_pan();
//! assert_eq!(view.camera().position(), kurbo::Point::new(-10.0, -10.0));
//!
//! // Zoom in about the cursor; the cell under it does not change.
//! let before = view.grid_cell_at(100.0, 100.0);
//! view.zoom(-1.0, 100.0, 100.0).unwrap();
//! assert_eq!(view.grid_cell_at(100.0, 100.0), before);
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use isoview_camera::Camera;
//! use isoview_controller::{TileRenderer, ViewportController};
//! use isoview_grid::GridTransform;
//! use kurbo::Point;
//!
//! #[derive(Default)]
//! struct CountTiles(usize);
//!
//! impl TileRenderer for CountTiles {
//!     fn clear(&mut self) {
//!         self.0 = 0;
//!     }
//!     fn draw_tile(&mut self, _origin: Point, _style: &str) {
//!         self.0 += 1;
//!     }
//!     fn draw_grid_lines(&mut self, _: i64, _: i64, _: i64, _: i64) {}
//! }
//!
//! let view = ViewportController::new(
//!     GridTransform::new(64.0, 32.0).unwrap(),
//!     Camera::new(320.0, 240.0).unwrap(),
//! );
//! let mut counter = CountTiles::default();
//! view.render(&mut counter);
//! assert_eq!(counter.0 as u64, view.visible_cells().cell_count());
//! ```
//!
//! ## Logging
//!
//! Gesture and zoom transitions are reported through the [`log`] facade at
//! `debug` level, per‑move and per‑frame detail at `trace`. Install any
//! `log` backend to see them.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
pub mod gesture;
mod input;
mod render;
mod zoom;

pub use controller::ViewportController;
pub use gesture::PanGesture;
pub use input::ViewportEvent;
pub use render::{FrameInfo, TILE_STYLE_EVEN, TILE_STYLE_ODD, TileRenderer, checkerboard_style};
pub use zoom::{ZoomStep, ZoomStepError};
