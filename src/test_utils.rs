// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Zoom factors, pinch ratios and fitted image sizes are all `f32`, so tests
//! compare them with `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;
