// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component: button, wheel and pinch zoom on a clamped level.

use crate::ui::state::{ZoomLevel, ZoomStep};

/// Zoom sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    level: ZoomLevel,
    step: ZoomStep,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Zoom in by one step.
    ZoomIn,
    /// Zoom out by one step.
    ZoomOut,
    /// Modifier+wheel; positive means scroll up (zoom in).
    Wheel(f32),
    /// Pinch: scale the zoom captured at pinch start by `ratio`.
    Pinch { start_zoom: ZoomLevel, ratio: f32 },
    /// Back to the default zoom.
    Reset,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    ZoomChanged(ZoomLevel),
}

impl State {
    #[must_use]
    pub fn new(step: ZoomStep) -> Self {
        Self {
            level: ZoomLevel::default(),
            step,
        }
    }

    /// Handle a zoom message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        let next = match msg {
            Message::ZoomIn if self.level.is_max() => return Effect::None,
            Message::ZoomIn => self.level.zoom_in(self.step),
            Message::ZoomOut if self.level.is_min() => return Effect::None,
            Message::ZoomOut => self.level.zoom_out(self.step),
            Message::Wheel(delta) if delta > 0.0 => return self.handle(Message::ZoomIn),
            Message::Wheel(delta) if delta < 0.0 => return self.handle(Message::ZoomOut),
            Message::Wheel(_) => return Effect::None,
            Message::Pinch { start_zoom, ratio } => {
                if !ratio.is_finite() || ratio <= 0.0 {
                    return Effect::None;
                }
                start_zoom.scaled(ratio)
            }
            Message::Reset => ZoomLevel::default(),
        };

        if next == self.level {
            Effect::None
        } else {
            self.level = next;
            Effect::ZoomChanged(next)
        }
    }

    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        self.level
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        !self.level.is_max()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        !self.level.is_min()
    }
}
