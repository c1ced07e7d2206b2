// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=isoview_camera --heading-base-level=0

//! Isoview Camera: pan + zoom state over an unbounded world plane.
//!
//! A [`Camera`] owns three pieces of state:
//! - The viewport size in device pixels.
//! - A world‑space `position`: the world point shown at the viewport's
//!   top‑left corner.
//! - A uniform `zoom` factor, always kept inside configurable limits.
//!
//! and converts points between world space and viewport space:
//!
//! ```text
//! viewport = (world - position) * zoom
//! world    = viewport / zoom + position
//! ```
//!
//! Panning is expressed in world units and is never clamped; the world is
//! treated as infinite. Zoom is validated before it is clamped, so a
//! non‑positive or non‑finite zoom is rejected instead of silently becoming
//! the minimum.
//!
//! ## Minimal example
//!
//! ```rust
//! use isoview_camera::Camera;
//!
//! let mut camera = Camera::new(800.0, 600.0).unwrap();
//! camera.pan(10.0, 5.0);
//! camera.set_zoom(2.0).unwrap();
//!
//! let on_screen = camera.world_to_viewport(20.0, 15.0);
//! assert_eq!((on_screen.x, on_screen.y), (20.0, 20.0));
//!
//! let world = camera.viewport_to_world(on_screen.x, on_screen.y);
//! assert_eq!((world.x, world.y), (20.0, 15.0));
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis‑aligned with a **uniform** zoom factor; there is no
//!   rotation.
//! - It knows nothing about grids or tiles. Isometric projection happens
//!   before world space, in `isoview_grid`.
//! - Gesture handling (drag anchors, wheel steps) lives in
//!   `isoview_controller`.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod error;

pub use camera::{Camera, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
pub use error::CameraError;
