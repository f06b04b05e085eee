// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the storefront palette.

use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Storefront brand colors.
pub mod palette {
    use iced::Color;

    /// Deep blue used by the header, footer and gallery title (#1e3a8a).
    pub const BRAND_BLUE: Color = Color::from_rgb(0.118, 0.227, 0.541);
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);
    /// Backdrop of the full-screen viewer.
    pub const VIEWER_BACKDROP: Color = Color::BLACK;
    /// Bottom control bar of the viewer (black at 80%).
    pub const VIEWER_BAR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.8,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Resolves the mode into the iced theme used by the application.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Page background behind the gallery for this mode.
    #[must_use]
    pub fn page_background(self) -> Color {
        if self.is_dark() {
            Color::from_rgb(0.1, 0.1, 0.1)
        } else {
            palette::GRAY_50
        }
    }
}
