// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture state: anchor a drag and derive camera positions from it.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`PanGesture::start`] with the pointer position and
//!    the camera's current world position.
//! 2) On each pointer move, call [`PanGesture::update`] to get the camera
//!    position that keeps the grabbed world point under the pointer.
//! 3) If the camera is moved some other way mid‑drag (a wheel zoom), call
//!    [`PanGesture::rebase`] so the next update continues from there.
//! 4) On pointer up, call [`PanGesture::end`].
//!
//! Every update is computed from the anchor, never from the previous update,
//! so dropped or coalesced move events cannot accumulate drift.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use isoview_controller::PanGesture;
//!
//! let mut pan = PanGesture::default();
//! pan.start(Point::new(50.0, 50.0), Point::new(0.0, 0.0));
//! assert!(pan.is_panning());
//!
//! // Dragging right/down by 10px at zoom 1 moves the camera up/left by 10.
//! let pos = pan.camera_position_for(Point::new(60.0, 60.0), 1.0).unwrap();
//! assert_eq!(pos, Point::new(-10.0, -10.0));
//! ```

use kurbo::{Point, Vec2};

/// Pan gesture state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PanGesture {
    /// No pan in progress.
    #[default]
    Idle,
    /// A pan is in progress.
    Panning {
        /// Viewport position where the gesture began.
        anchor_viewport: Point,
        /// Camera world position when the gesture began.
        anchor_camera: Point,
        /// Most recent pointer position seen by [`PanGesture::update`].
        last_viewport: Point,
    },
}

impl PanGesture {
    /// Begin a pan, replacing any gesture already in progress.
    pub fn start(&mut self, anchor_viewport: Point, anchor_camera: Point) {
        *self = Self::Panning {
            anchor_viewport,
            anchor_camera,
            last_viewport: anchor_viewport,
        };
    }

    /// Records the pointer at `current` and returns the camera position for it.
    ///
    /// Returns `None` while idle.
    pub fn update(&mut self, current: Point, zoom: f64) -> Option<Point> {
        let position = self.camera_position_for(current, zoom)?;
        if let Self::Panning { last_viewport, .. } = self {
            *last_viewport = current;
        }
        Some(position)
    }

    /// Re‑anchors an active pan after the camera moved outside the gesture.
    ///
    /// Afterwards, an update at the last pointer position yields `camera`
    /// under `zoom`, and further movement pans from there. Does nothing while
    /// idle.
    pub fn rebase(&mut self, camera: Point, zoom: f64) {
        if let Self::Panning {
            anchor_viewport,
            anchor_camera,
            last_viewport,
        } = self
        {
            *anchor_camera = camera + (*last_viewport - *anchor_viewport) / zoom;
        }
    }

    /// End the current pan. Safe to call while idle.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// Returns `true` while a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Viewport‑space offset of `current` from the anchor.
    #[must_use]
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        match *self {
            Self::Idle => None,
            Self::Panning {
                anchor_viewport, ..
            } => Some(current - anchor_viewport),
        }
    }

    /// Camera position that follows a pointer at `current` under `zoom`.
    ///
    /// The viewport offset is divided by `zoom` to get a world offset, which is
    /// then subtracted from the anchored camera position: the camera moves
    /// opposite to the drag.
    #[must_use]
    pub fn camera_position_for(&self, current: Point, zoom: f64) -> Option<Point> {
        match *self {
            Self::Idle => None,
            Self::Panning {
                anchor_viewport,
                anchor_camera,
                ..
            } => Some(anchor_camera - (current - anchor_viewport) / zoom),
        }
    }
}
