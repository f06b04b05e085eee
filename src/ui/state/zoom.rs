// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! Zoom is expressed as a factor (1.0 = image fitted to the viewer area).
//! Every value produced here is already clamped, so no caller can observe an
//! out-of-range zoom.

pub use crate::config::{
    DEFAULT_ZOOM, DEFAULT_ZOOM_STEP, MAX_ZOOM, MAX_ZOOM_STEP, MIN_ZOOM, MIN_ZOOM_STEP,
};

/// Zoom factor, guaranteed to be within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a new zoom level, clamping the value to the valid range.
    ///
    /// Non-finite input (NaN, infinities) yields the default zoom instead of
    /// saturating, so a degenerate computation can never pin zoom to a bound.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(MIN_ZOOM, MAX_ZOOM))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Whether the image is magnified, i.e. panning is meaningful.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.0 > DEFAULT_ZOOM
    }

    #[must_use]
    pub fn zoom_in(self, step: ZoomStep) -> Self {
        Self::new(self.0 + step.value())
    }

    #[must_use]
    pub fn zoom_out(self, step: ZoomStep) -> Self {
        Self::new(self.0 - step.value())
    }

    /// Multiplies the zoom by `ratio` (pinch), clamping the result.
    #[must_use]
    pub fn scaled(self, ratio: f32) -> Self {
        Self::new(self.0 * ratio)
    }

    /// Rounded percentage for display (e.g. 1.25 → 125).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_percent(self) -> i32 {
        // Bounded by MAX_ZOOM * 100, far inside i32.
        (self.0 * 100.0).round() as i32
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

/// Zoom step, guaranteed to be within `[MIN_ZOOM_STEP, MAX_ZOOM_STEP]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_finite() {
            Self(step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP)
    }
}
