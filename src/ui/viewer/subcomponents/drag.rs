// SPDX-License-Identifier: MPL-2.0
//! Mouse drag-to-pan sub-component.
//!
//! Owns only the cursor position; the pan session itself lives in the
//! viewer's shared [`GestureSession`] so touch gestures can cancel it.

use crate::ui::state::{GestureKind, GestureSession, PanOffset, ZoomLevel};
use iced::{mouse, Point};

/// Drag sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Current cursor position within the viewer.
    cursor_position: Option<Point>,
}

/// Messages for the drag sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    CursorMoved(Point),
    ButtonPressed(mouse::Button),
    ButtonReleased(mouse::Button),
    CursorLeft,
}

/// Effects produced by drag operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// A mouse-pan session started.
    Started,
    /// New pan offset to apply.
    SetPan(PanOffset),
    /// The mouse-pan session ended.
    Ended,
}

/// Viewer state the drag handler reads or updates.
pub struct Context<'a> {
    pub session: &'a mut GestureSession,
    pub zoom: ZoomLevel,
    pub pan: PanOffset,
}

impl State {
    /// Handle a drag message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, ctx: Context<'_>, msg: Message) -> Effect {
        match msg {
            Message::CursorMoved(position) => {
                self.cursor_position = Some(position);
                if !ctx.zoom.is_zoomed() {
                    return Effect::None;
                }
                ctx.session
                    .mouse_pan_to(position)
                    .map_or(Effect::None, Effect::SetPan)
            }
            Message::ButtonPressed(mouse::Button::Left) => {
                let Some(origin) = self.cursor_position else {
                    return Effect::None;
                };
                if !ctx.zoom.is_zoomed() {
                    return Effect::None;
                }
                ctx.session.begin(GestureSession::MousePan {
                    origin,
                    start_pan: ctx.pan,
                });
                log::debug!("Mouse pan started at {:?}", origin);
                Effect::Started
            }
            Message::ButtonReleased(mouse::Button::Left) => end_mouse_pan(ctx.session),
            Message::CursorLeft => {
                self.cursor_position = None;
                end_mouse_pan(ctx.session)
            }
            Message::ButtonPressed(_) | Message::ButtonReleased(_) => Effect::None,
        }
    }
}

fn end_mouse_pan(session: &mut GestureSession) -> Effect {
    if session.kind() == GestureKind::MousePan {
        session.clear();
        log::debug!("Mouse pan ended");
        Effect::Ended
    } else {
        Effect::None
    }
}
