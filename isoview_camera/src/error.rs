// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors reported by [`crate::Camera`] constructors and setters.
///
/// Whenever one of these is returned the camera state is left untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraError {
    /// Viewport dimensions were non‑finite or not strictly positive.
    InvalidViewport {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
    /// A zoom factor was non‑finite or not strictly positive.
    InvalidZoom(f64),
    /// Zoom limits were non‑finite or not strictly positive.
    InvalidZoomLimits {
        /// The rejected lower limit.
        min: f64,
        /// The rejected upper limit.
        max: f64,
    },
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => write!(
                f,
                "viewport size {width}x{height} is invalid: both dimensions must be finite and positive"
            ),
            Self::InvalidZoom(zoom) => {
                write!(f, "zoom {zoom} is invalid: must be finite and positive")
            }
            Self::InvalidZoomLimits { min, max } => write!(
                f,
                "zoom limits [{min}, {max}] are invalid: both must be finite and positive"
            ),
        }
    }
}

impl core::error::Error for CameraError {}
