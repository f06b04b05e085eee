// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds and step
//! - **Gestures**: Swipe threshold and pinch guard
//! - **Gallery**: Default image set and asset location

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor applied whenever an image is (re)displayed.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM: f32 = 4.0;

/// Zoom step used by the buttons and the modifier+wheel shortcut.
pub const DEFAULT_ZOOM_STEP: f32 = 0.25;

/// Smallest configurable zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.05;

/// Largest configurable zoom step.
pub const MAX_ZOOM_STEP: f32 = 1.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal travel (pixels) a single-finger swipe must exceed to navigate.
/// The comparison is strict: a swipe of exactly this distance is ignored.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 60.0;

/// Minimum configurable swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum configurable swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Two-finger distances below this are treated as degenerate and ignored.
pub const PINCH_MIN_DISTANCE: f32 = 1.0;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Menu image identifiers shipped with the storefront.
pub const DEFAULT_IMAGE_IDS: [&str; 6] = ["01", "02", "03", "04", "05", "06"];

/// Directory holding the `img/` folder, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// File extension of the menu images.
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpeg";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM > 0.0);
    assert!(MIN_ZOOM < DEFAULT_ZOOM);
    assert!(MAX_ZOOM > DEFAULT_ZOOM);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);

    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    assert!(PINCH_MIN_DISTANCE > 0.0);
};
