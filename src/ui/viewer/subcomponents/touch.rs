// SPDX-License-Identifier: MPL-2.0
//! Multi-touch interpretation: pinch zoom, one-finger pan and swipe navigation.
//!
//! iced reports touch input per finger. This module keeps the set of fingers
//! currently down and turns the finger count at each press into one of the
//! exclusive [`GestureSession`] variants.

use crate::config::{DEFAULT_SWIPE_THRESHOLD_PX, PINCH_MIN_DISTANCE};
use crate::ui::state::{GestureKind, GestureSession, PanOffset, TouchPoints, ZoomLevel};
use iced::event;
use iced::touch::Finger;
use iced::Point;

/// Touch sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    touches: TouchPoints,
    swipe_threshold: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Messages for the touch sub-component, one per iced finger event.
#[derive(Debug, Clone)]
pub enum Message {
    Pressed { finger: Finger, position: Point },
    Moved { finger: Finger, position: Point },
    Lifted { finger: Finger, position: Point },
    /// The platform cancelled the contact. Ends sessions without navigating.
    Lost { finger: Finger, position: Point },
}

/// Effects produced by touch gestures.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Zoom to `start_zoom` scaled by `ratio`.
    Pinch { start_zoom: ZoomLevel, ratio: f32 },
    SetPan(PanOffset),
    NavigatePrevious,
    NavigateNext,
}

/// Viewer state the touch handler reads or updates.
pub struct Context<'a> {
    pub session: &'a mut GestureSession,
    pub zoom: ZoomLevel,
    pub pan: PanOffset,
}

impl State {
    /// Creates a touch handler with the given swipe distance, in pixels.
    ///
    /// A swipe navigates only when its horizontal travel is strictly greater
    /// than the threshold.
    #[must_use]
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            touches: TouchPoints::default(),
            swipe_threshold,
        }
    }

    /// Number of fingers currently down.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    /// Forgets all fingers, used when the displayed image changes.
    pub fn reset(&mut self) {
        self.touches.clear();
    }

    /// Handles a finger event.
    ///
    /// The returned status is [`event::Status::Captured`] when the default
    /// behaviour (page scrolling) must be suppressed.
    pub fn handle(&mut self, ctx: Context<'_>, msg: Message) -> (Effect, event::Status) {
        match msg {
            Message::Pressed { finger, position } => {
                self.touches.press(finger, position);
                self.start_session(ctx, finger, position);
                (Effect::None, event::Status::Ignored)
            }
            Message::Moved { finger, position } => {
                if !self.touches.update(finger, position) {
                    return (Effect::None, event::Status::Ignored);
                }
                self.track_move(ctx, finger, position)
            }
            Message::Lifted { finger, position } => {
                (self.end_touch(ctx, finger, position, true), event::Status::Ignored)
            }
            Message::Lost { finger, position } => {
                (self.end_touch(ctx, finger, position, false), event::Status::Ignored)
            }
        }
    }

    fn start_session(&self, ctx: Context<'_>, finger: Finger, position: Point) {
        match self.touches.len() {
            1 if ctx.zoom.is_zoomed() => {
                ctx.session.begin(GestureSession::TouchPan {
                    finger,
                    origin: position,
                    start_pan: ctx.pan,
                });
            }
            1 => {
                ctx.session.begin(GestureSession::Swipe {
                    finger,
                    start_x: position.x,
                });
            }
            2 => match self.touches.pinch_distance() {
                Some(distance) if distance.is_finite() && distance >= PINCH_MIN_DISTANCE => {
                    ctx.session.begin(GestureSession::Pinch {
                        start_distance: distance,
                        start_zoom: ctx.zoom,
                    });
                }
                _ => {
                    log::debug!("Pinch ignored: fingers too close to measure");
                    ctx.session.clear();
                }
            },
            count => {
                log::debug!("{} fingers down, gesture cleared", count);
                ctx.session.clear();
            }
        }
    }

    fn track_move(
        &self,
        ctx: Context<'_>,
        finger: Finger,
        position: Point,
    ) -> (Effect, event::Status) {
        match *ctx.session {
            GestureSession::Pinch {
                start_distance,
                start_zoom,
            } => {
                let effect = match self.touches.pinch_distance() {
                    Some(distance) if distance.is_finite() && distance >= PINCH_MIN_DISTANCE => {
                        Effect::Pinch {
                            start_zoom,
                            ratio: distance / start_distance,
                        }
                    }
                    _ => Effect::None,
                };
                (effect, event::Status::Captured)
            }
            GestureSession::TouchPan { .. } => {
                let effect = if ctx.zoom.is_zoomed() {
                    ctx.session
                        .touch_pan_to(finger, position)
                        .map_or(Effect::None, Effect::SetPan)
                } else {
                    Effect::None
                };
                (effect, event::Status::Captured)
            }
            GestureSession::Swipe { .. } => (Effect::None, event::Status::Captured),
            GestureSession::None | GestureSession::MousePan { .. } => {
                (Effect::None, event::Status::Ignored)
            }
        }
    }

    fn end_touch(
        &mut self,
        ctx: Context<'_>,
        finger: Finger,
        position: Point,
        may_navigate: bool,
    ) -> Effect {
        if self.touches.release(finger).is_none() {
            return Effect::None;
        }

        if self.touches.is_empty() {
            let effect = match *ctx.session {
                GestureSession::Swipe {
                    finger: swiping,
                    start_x,
                } if may_navigate && swiping == finger && !ctx.zoom.is_zoomed() => {
                    self.swipe_effect(position.x - start_x)
                }
                _ => Effect::None,
            };
            if ctx.session.kind() != GestureKind::MousePan {
                ctx.session.clear();
            }
            return effect;
        }

        let owned_by_lifted = match *ctx.session {
            GestureSession::Pinch { .. } => true,
            GestureSession::TouchPan { finger: owner, .. }
            | GestureSession::Swipe { finger: owner, .. } => owner == finger,
            GestureSession::None | GestureSession::MousePan { .. } => false,
        };
        if owned_by_lifted {
            ctx.session.clear();
        }
        Effect::None
    }

    fn swipe_effect(&self, delta_x: f32) -> Effect {
        if delta_x > self.swipe_threshold {
            log::debug!("Swipe right ({:.0}px): previous image", delta_x);
            Effect::NavigatePrevious
        } else if delta_x < -self.swipe_threshold {
            log::debug!("Swipe left ({:.0}px): next image", delta_x);
            Effect::NavigateNext
        } else {
            Effect::None
        }
    }
}
