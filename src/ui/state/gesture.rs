// SPDX-License-Identifier: MPL-2.0
//! Gesture session state management
//!
//! A viewer interprets pointer and touch input through at most one gesture
//! session at a time. Starting any session replaces the previous one, so two
//! interpretations can never act on the same input.

use crate::ui::state::{PanOffset, ZoomLevel};
use iced::touch::Finger;
use iced::Point;

/// The single in-flight gesture interpretation of a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureSession {
    /// No gesture in progress.
    #[default]
    None,
    /// Two fingers; their distance ratio drives zoom.
    Pinch {
        start_distance: f32,
        start_zoom: ZoomLevel,
    },
    /// One finger dragging a magnified image.
    TouchPan {
        finger: Finger,
        origin: Point,
        start_pan: PanOffset,
    },
    /// One finger on an unmagnified image; horizontal travel may navigate.
    Swipe { finger: Finger, start_x: f32 },
    /// Primary mouse button dragging a magnified image.
    MousePan { origin: Point, start_pan: PanOffset },
}

/// Discriminant of [`GestureSession`], handy for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    None,
    Pinch,
    TouchPan,
    Swipe,
    MousePan,
}

impl GestureSession {
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureSession::None => GestureKind::None,
            GestureSession::Pinch { .. } => GestureKind::Pinch,
            GestureSession::TouchPan { .. } => GestureKind::TouchPan,
            GestureSession::Swipe { .. } => GestureKind::Swipe,
            GestureSession::MousePan { .. } => GestureKind::MousePan,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, GestureSession::None)
    }

    /// Replaces the current session, returning the one that was cancelled.
    pub fn begin(&mut self, session: GestureSession) -> GestureKind {
        let previous = self.kind();
        if previous != GestureKind::None && previous != session.kind() {
            log::debug!("{:?} session cancelled by {:?}", previous, session.kind());
        }
        *self = session;
        previous
    }

    /// Ends whatever session is active.
    pub fn clear(&mut self) -> GestureKind {
        let previous = self.kind();
        *self = GestureSession::None;
        previous
    }

    /// Pan resulting from moving the mouse to `position` during a mouse pan.
    #[must_use]
    pub fn mouse_pan_to(&self, position: Point) -> Option<PanOffset> {
        match *self {
            GestureSession::MousePan { origin, start_pan } => {
                Some(start_pan.dragged(origin, position))
            }
            _ => None,
        }
    }

    /// Pan resulting from moving `finger` to `position` during a touch pan.
    #[must_use]
    pub fn touch_pan_to(&self, moved: Finger, position: Point) -> Option<PanOffset> {
        match *self {
            GestureSession::TouchPan {
                finger,
                origin,
                start_pan,
            } if finger == moved => Some(start_pan.dragged(origin, position)),
            _ => None,
        }
    }
}

/// Fingers currently touching the viewer, in the order they went down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchPoints {
    points: Vec<(Finger, Point)>,
}

impl TouchPoints {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Records a new contact, or updates it if the finger is already known.
    pub fn press(&mut self, finger: Finger, position: Point) {
        if !self.update(finger, position) {
            self.points.push((finger, position));
        }
    }

    /// Moves a known contact. Returns false for fingers we never saw go down.
    pub fn update(&mut self, finger: Finger, position: Point) -> bool {
        match self.points.iter_mut().find(|(id, _)| *id == finger) {
            Some(entry) => {
                entry.1 = position;
                true
            }
            None => false,
        }
    }

    /// Removes a contact, returning its last known position.
    pub fn release(&mut self, finger: Finger) -> Option<Point> {
        let index = self.points.iter().position(|(id, _)| *id == finger)?;
        Some(self.points.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Distance between the first two contacts, if there are at least two.
    #[must_use]
    pub fn pinch_distance(&self) -> Option<f32> {
        match self.points.as_slice() {
            [(_, a), (_, b), ..] => Some(a.distance(*b)),
            _ => None,
        }
    }
}
