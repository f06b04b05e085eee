// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns a `State`, consumes a `Message` and reports an `Effect` for its
//! parent to act on.
//!
//! # Screens
//!
//! - [`gallery`] - Grid of menu images, each opening the viewer
//! - [`viewer`] - Full-screen image viewer with zoom, pan and swipe
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Zoom, pan, gesture session and scroll lock state
//! - [`widgets`] - Custom Iced widgets (scroll gate)
//! - [`theming`] - Palette and Light/Dark/System theme mode

pub mod gallery;
pub mod state;
pub mod theming;
pub mod viewer;
pub mod widgets;
