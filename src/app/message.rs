// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{gallery, viewer};
use iced::{keyboard, Size};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Viewer(viewer::Message),
    /// Natural sizes of the gallery images, in gallery order.
    ImageSizesProbed(Vec<Option<Size<u32>>>),
    /// Keyboard modifiers changed, whether or not a viewer is mounted.
    ModifiersChanged(keyboard::Modifiers),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MENU_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional assets root overriding `[gallery] assets_dir`.
    pub assets_dir: Option<String>,
    /// Open the viewer on this image right away (clamped to the set).
    pub initial_index: Option<usize>,
}
