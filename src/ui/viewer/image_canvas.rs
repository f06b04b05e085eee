// SPDX-License-Identifier: MPL-2.0
//! Canvas drawing the current image with zoom and pan applied.
//!
//! The image is fitted (contain) into a frame covering most of the viewer
//! area, scaled around the area centre, then translated by the pan offset.
//! The surrounding container clips whatever overflows.

use iced::advanced::image::{Handle, Image};
use iced::widget::canvas;
use iced::{mouse, Rectangle, Size, Theme, Vector};

/// Share of the viewer area the unzoomed image may occupy.
pub const FRAME_FILL: f32 = 0.92;

/// Frame aspect ratio used while the natural image size is unknown.
pub const FALLBACK_ASPECT: f32 = 4.0 / 3.0;

/// Canvas program for a single zoomable image.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    pub handle: Handle,
    pub natural_size: Option<Size<u32>>,
    pub zoom: f32,
    pub pan: Vector,
}

impl<Message> canvas::Program<Message> for ImageCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let target = image_bounds(bounds.size(), self.natural_size, self.zoom, self.pan);
        if target.width > 0.0 && target.height > 0.0 {
            frame.draw_image(target, Image::new(self.handle.clone()));
        }
        vec![frame.into_geometry()]
    }
}

/// Size of the image at zoom 1 inside an area of `area` size.
#[must_use]
pub fn fitted_size(area: Size, natural: Option<Size<u32>>) -> Size {
    let max_width = area.width * FRAME_FILL;
    let max_height = area.height * FRAME_FILL;
    if max_width <= 0.0 || max_height <= 0.0 {
        return Size::ZERO;
    }

    let aspect = natural
        .filter(|size| size.width > 0 && size.height > 0)
        .map_or(FALLBACK_ASPECT, |size| {
            size.width as f32 / size.height as f32
        });

    // Contain: whichever side hits its limit first decides the scale.
    if max_width / max_height > aspect {
        Size::new(max_height * aspect, max_height)
    } else {
        Size::new(max_width, max_width / aspect)
    }
}

/// Rectangle (relative to the canvas) the image is drawn into.
#[must_use]
pub fn image_bounds(area: Size, natural: Option<Size<u32>>, zoom: f32, pan: Vector) -> Rectangle {
    let fitted = fitted_size(area, natural);
    let width = fitted.width * zoom;
    let height = fitted.height * zoom;
    Rectangle {
        x: (area.width - width) / 2.0 + pan.x,
        y: (area.height - height) / 2.0 + pan.y,
        width,
        height,
    }
}

const _: () = {
    assert!(FRAME_FILL > 0.0 && FRAME_FILL <= 1.0);
    assert!(FALLBACK_ASPECT > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn wide_image_is_limited_by_width() {
        let size = fitted_size(Size::new(1000.0, 1000.0), Some(Size::new(400, 200)));
        assert_abs_diff_eq!(size.width, 920.0, epsilon = 1e-3);
        assert_abs_diff_eq!(size.height, 460.0, epsilon = 1e-3);
    }

    #[test]
    fn tall_image_is_limited_by_height() {
        let size = fitted_size(Size::new(1000.0, 500.0), Some(Size::new(100, 200)));
        assert_abs_diff_eq!(size.height, 460.0, epsilon = 1e-3);
        assert_abs_diff_eq!(size.width, 230.0, epsilon = 1e-3);
    }

    #[test]
    fn unknown_size_uses_four_by_three_frame() {
        let size = fitted_size(Size::new(1200.0, 600.0), None);
        assert_abs_diff_eq!(size.width / size.height, FALLBACK_ASPECT, epsilon = 1e-4);
        let degenerate = fitted_size(Size::new(1200.0, 600.0), Some(Size::new(0, 10)));
        assert_eq!(size, degenerate);
    }

    #[test]
    fn empty_area_yields_empty_image() {
        assert_eq!(fitted_size(Size::ZERO, None), Size::ZERO);
    }

    #[test]
    fn zoom_scales_around_centre() {
        let area = Size::new(800.0, 600.0);
        let natural = Some(Size::new(400, 300));
        let unzoomed = image_bounds(area, natural, 1.0, Vector::ZERO);
        let zoomed = image_bounds(area, natural, 2.0, Vector::ZERO);
        assert_abs_diff_eq!(zoomed.width, unzoomed.width * 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(zoomed.center().x, 400.0, epsilon = 1e-3);
        assert_abs_diff_eq!(zoomed.center().y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn pan_translates_image() {
        let area = Size::new(800.0, 600.0);
        let centred = image_bounds(area, None, 2.0, Vector::ZERO);
        let moved = image_bounds(area, None, 2.0, Vector::new(30.0, -20.0));
        assert_abs_diff_eq!(moved.x - centred.x, 30.0, epsilon = 1e-3);
        assert_abs_diff_eq!(moved.y - centred.y, -20.0, epsilon = 1e-3);
    }
}
