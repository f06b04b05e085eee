// SPDX-License-Identifier: MPL-2.0
//! `menu_gallery` is a storefront menu gallery built with the Iced GUI framework.
//!
//! Activating a menu image opens a full-screen viewer with zoom, mouse and
//! touch panning, pinch-to-zoom and swipe navigation. Text is localized with
//! Fluent and preferences are read from a `settings.toml` file.

pub mod app;
pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
