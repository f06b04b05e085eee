// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the viewer state logic separated from the widgets,
//! so it can be driven and tested without a window.

pub mod gesture;
pub mod pan;
pub mod scroll_lock;
pub mod zoom;

pub use gesture::{GestureKind, GestureSession, TouchPoints};
pub use pan::PanOffset;
pub use scroll_lock::{BackgroundScroll, ScrollBehavior, ScrollLockGuard};
pub use zoom::{ZoomLevel, ZoomStep};
