// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::CameraError;

/// Default lower zoom limit.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Default upper zoom limit.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;

/// Pan + zoom camera over an unbounded world plane.
///
/// `Camera` tracks a viewport size in device pixels, the world point shown at
/// the viewport's top‑left corner, and a uniform zoom factor. It can be used
/// to:
/// - Convert points between world and viewport coordinates.
/// - Pan by world‑space deltas or jump to an absolute position.
/// - Zoom within configurable limits.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    viewport: Size,
    position: Point,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Camera {
    /// Creates a camera for a viewport of the given pixel size.
    ///
    /// - Initial position is the world origin.
    /// - Initial zoom is `1.0`.
    /// - Zoom is clamped to [`DEFAULT_MIN_ZOOM`]..=[`DEFAULT_MAX_ZOOM`].
    pub fn new(viewport_width: f64, viewport_height: f64) -> Result<Self, CameraError> {
        let viewport = validate_viewport(viewport_width, viewport_height)?;
        Ok(Self {
            viewport,
            position: Point::ORIGIN,
            zoom: 1.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        })
    }

    /// Replaces the zoom limits, consuming and returning the camera.
    ///
    /// See [`Camera::set_zoom_limits`].
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Result<Self, CameraError> {
        self.set_zoom_limits(min_zoom, max_zoom)?;
        Ok(self)
    }

    /// Returns the viewport size in device pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Resizes the viewport.
    ///
    /// Position and zoom are unchanged, so the world point at the top‑left
    /// corner stays put while the visible region grows or shrinks.
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) -> Result<(), CameraError> {
        self.viewport = validate_viewport(viewport_width, viewport_height)?;
        Ok(())
    }

    /// Returns the world point at the viewport's top‑left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the camera to an absolute world position. No clamping is applied.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    /// Pans by a delta in world units.
    ///
    /// Pans accumulate and are unbounded.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.position += Vec2::new(delta_x, delta_y);
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor, clamping it into the configured limits.
    ///
    /// Non‑finite and non‑positive values are rejected before clamping and
    /// leave the zoom unchanged.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), CameraError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(CameraError::InvalidZoom(zoom));
        }
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        Ok(())
    }

    /// Returns `(min_zoom, max_zoom)`.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) -> Result<(), CameraError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(min_zoom) || !valid(max_zoom) {
            return Err(CameraError::InvalidZoomLimits {
                min: min_zoom,
                max: max_zoom,
            });
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
        Ok(())
    }

    /// Converts a world‑space point into viewport coordinates.
    #[must_use]
    pub fn world_to_viewport(&self, world_x: f64, world_y: f64) -> Point {
        Point::new(
            (world_x - self.position.x) * self.zoom,
            (world_y - self.position.y) * self.zoom,
        )
    }

    /// Converts a viewport‑space point into world coordinates.
    #[must_use]
    pub fn viewport_to_world(&self, viewport_x: f64, viewport_y: f64) -> Point {
        Point::new(
            viewport_x / self.zoom + self.position.x,
            viewport_y / self.zoom + self.position.y,
        )
    }

    /// World → viewport mapping as an affine matrix.
    #[must_use]
    pub fn world_to_viewport_transform(&self) -> Affine {
        Affine::scale(self.zoom) * Affine::translate(-self.position.to_vec2())
    }

    /// Viewport → world mapping as an affine matrix.
    #[must_use]
    pub fn viewport_to_world_transform(&self) -> Affine {
        Affine::translate(self.position.to_vec2()) * Affine::scale(1.0 / self.zoom)
    }

    /// Returns the world‑space rectangle currently covered by the viewport.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let p0 = self.viewport_to_world(0.0, 0.0);
        let p1 = self.viewport_to_world(self.viewport.width, self.viewport.height);
        Rect::from_points(p0, p1)
    }

    /// Centers the viewport on the given world‑space point.
    pub fn center_on(&mut self, world: Point) {
        let half = self.viewport.to_vec2() / 2.0;
        self.position = world - half / self.zoom;
    }
}

fn validate_viewport(width: f64, height: f64) -> Result<Size, CameraError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok(Size::new(width, height))
    } else {
        Err(CameraError::InvalidViewport { width, height })
    }
}
