// Copyright 2026 the Isoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by [`ZoomStep::new`] for a step that would not zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomStepError(pub f64);

impl fmt::Display for ZoomStepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zoom step {} is invalid: must be finite and greater than 1",
            self.0
        )
    }
}

impl core::error::Error for ZoomStepError {}

/// Multiplicative zoom applied per wheel notch.
///
/// Only the sign of a wheel delta matters: a positive delta (wheel pulled
/// toward the user) zooms out by `1 / step`, a negative delta zooms in by
/// `step`, and a zero or NaN delta leaves the zoom alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomStep(f64);

impl ZoomStep {
    /// The default step of `1.1` (10% per notch).
    pub const DEFAULT: Self = Self(1.1);

    /// Creates a step. It must be finite and strictly greater than `1`.
    pub fn new(step: f64) -> Result<Self, ZoomStepError> {
        if step.is_finite() && step > 1.0 {
            Ok(Self(step))
        } else {
            Err(ZoomStepError(step))
        }
    }

    /// Returns the raw step.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Zoom multiplier for a wheel delta.
    #[must_use]
    pub fn factor(self, delta: f64) -> f64 {
        if delta > 0.0 {
            1.0 / self.0
        } else if delta < 0.0 {
            self.0
        } else {
            1.0
        }
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::{ZoomStep, ZoomStepError};

    #[test]
    fn factor_follows_delta_sign() {
        let step = ZoomStep::default();
        assert_eq!(step.factor(-3.0), 1.1);
        assert_eq!(step.factor(120.0), 1.0 / 1.1);
        assert_eq!(step.factor(0.0), 1.0);
        assert_eq!(step.factor(f64::NAN), 1.0);
    }

    #[test]
    fn new_rejects_non_zooming_steps() {
        for bad in [1.0, 0.5, -2.0, f64::INFINITY] {
            assert_eq!(ZoomStep::new(bad), Err(ZoomStepError(bad)));
        }
        assert!(ZoomStep::new(f64::NAN).is_err());
        assert_eq!(ZoomStep::new(1.25).map(ZoomStep::get), Ok(1.25));
    }
}
