// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Host input, already translated into viewport (canvas‑relative) pixels.
///
/// Feed these to [`crate::ViewportController::handle_event`]:
/// - [`ViewportEvent::PointerDown`] starts a pan.
/// - [`ViewportEvent::PointerMove`] updates it; ignored when no pan is active.
/// - [`ViewportEvent::PointerUp`] ends it.
/// - [`ViewportEvent::Wheel`] zooms about the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// Primary button pressed at a viewport position.
    PointerDown(Point),
    /// Pointer moved to a viewport position.
    PointerMove(Point),
    /// Primary button released.
    PointerUp,
    /// Wheel scrolled with the cursor at `position`.
    Wheel {
        /// Vertical wheel delta; only its sign is used.
        delta_y: f64,
        /// Cursor position in viewport space.
        position: Point,
    },
}
