// SPDX-License-Identifier: MPL-2.0
//! Pan offset of the displayed image.
//!
//! The offset is kept even when zoom drops back to 1 or below, but it is only
//! rendered while the image is magnified.

use iced::{Point, Vector};

/// Translation applied to the image, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset shifted by the pointer travel from `origin` to `current`.
    #[must_use]
    pub fn dragged(self, origin: Point, current: Point) -> Self {
        Self {
            x: self.x + (current.x - origin.x),
            y: self.y + (current.y - origin.y),
        }
    }

    #[must_use]
    pub fn as_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }
}
