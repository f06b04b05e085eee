// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! A [`State`] exists exactly as long as the viewer is mounted. It holds the
//! background scroll lock for its whole lifetime, so dropping the state is
//! the only teardown needed, whichever way the viewer goes away.

use crate::config::{DEFAULT_SWIPE_THRESHOLD_PX, PINCH_MIN_DISTANCE};
use crate::i18n::fluent::I18n;
use crate::ui::state::{GestureSession, PanOffset, ScrollLockGuard, ZoomLevel, ZoomStep};
use crate::ui::theming::palette;
use crate::ui::viewer::image_canvas::ImageCanvas;
use crate::ui::viewer::{controls, subcomponents};
use iced::widget::image::Handle;
use iced::widget::{canvas, container, mouse_area, Column, Container, Text};
use iced::{event, keyboard, mouse, touch, window, Element, Length, Size};

use subcomponents::{drag, keyboard as keys, touch as touches, zoom};

/// Messages emitted by viewer widgets or routed to it from the event
/// subscription.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Requests the viewer makes to its owner. The viewer never acts on them
/// itself: closing and index advancement belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Close,
    NavigatePrevious,
    NavigateNext,
}

/// Result of feeding one native event to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub effect: Effect,
    /// `Captured` when the default behaviour of the event (page scrolling)
    /// is suppressed.
    pub status: event::Status,
}

impl Outcome {
    const IGNORED: Self = Self {
        effect: Effect::None,
        status: event::Status::Ignored,
    };

    fn captured(effect: Effect) -> Self {
        Self {
            effect,
            status: event::Status::Captured,
        }
    }
}

/// Tunables fixed for the lifetime of a mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub zoom_step: ZoomStep,
    pub swipe_threshold: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zoom_step: ZoomStep::default(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    /// Handle of the image at the current index, if it resolves.
    pub image: Option<Handle>,
    pub natural_size: Option<Size<u32>>,
    pub image_count: usize,
}

/// Complete viewer component state.
#[derive(Debug)]
pub struct State {
    current_index: usize,
    zoom: zoom::State,
    pan: PanOffset,
    session: GestureSession,
    drag: drag::State,
    touch: touches::State,
    keyboard: keys::State,
    _scroll_lock: ScrollLockGuard,
}

impl State {
    /// Mounts a viewer on `current_index`, taking ownership of the
    /// background scroll lock until the state is dropped.
    #[must_use]
    pub fn mount(current_index: usize, scroll_lock: ScrollLockGuard, settings: Settings) -> Self {
        log::info!("Viewer mounted at index {}", current_index);
        Self {
            current_index,
            zoom: zoom::State::new(settings.zoom_step),
            pan: PanOffset::ZERO,
            session: GestureSession::None,
            drag: drag::State::default(),
            touch: touches::State::new(settings.swipe_threshold),
            keyboard: keys::State::default(),
            _scroll_lock: scroll_lock,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom.level()
    }

    /// Stored pan offset, kept even while it has no visual effect.
    #[must_use]
    pub fn pan(&self) -> PanOffset {
        self.pan
    }

    /// Pan offset actually rendered: zero unless the image is magnified.
    #[must_use]
    pub fn effective_pan(&self) -> PanOffset {
        if self.zoom.level().is_zoomed() {
            self.pan
        } else {
            PanOffset::ZERO
        }
    }

    #[must_use]
    pub fn gesture(&self) -> &GestureSession {
        &self.session
    }

    /// Number of fingers the viewer currently tracks.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touch.active_touches()
    }

    /// Keyboard modifiers currently held, tracked by the owner even while no
    /// viewer is mounted.
    pub fn set_modifiers(&mut self, modifiers: keyboard::Modifiers) {
        self.keyboard.handle(keys::Message::ModifiersChanged(modifiers));
    }

    /// Shows another image: zoom and pan reset, in-flight gestures dropped.
    pub fn set_current_index(&mut self, index: usize) {
        log::info!("Viewer index {} -> {}", self.current_index, index);
        self.current_index = index;
        self.apply_zoom(zoom::Message::Reset);
        self.pan = PanOffset::ZERO;
        self.session.clear();
        self.touch.reset();
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Controls(controls::Message::ZoomIn) => {
                self.apply_zoom(zoom::Message::ZoomIn);
                Effect::None
            }
            Message::Controls(controls::Message::ZoomOut) => {
                self.apply_zoom(zoom::Message::ZoomOut);
                Effect::None
            }
            Message::Controls(controls::Message::Close) => Effect::Close,
            Message::Controls(controls::Message::Previous) => Effect::NavigatePrevious,
            Message::Controls(controls::Message::Next) => Effect::NavigateNext,
            Message::RawEvent { event, .. } => self.handle_event(&event).effect,
        }
    }

    /// Interprets one native input event.
    pub fn handle_event(&mut self, event: &event::Event) -> Outcome {
        match event {
            event::Event::Keyboard(keyboard_event) => self.handle_keyboard(keyboard_event),
            event::Event::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            event::Event::Touch(touch_event) => self.handle_touch(touch_event),
            _ => Outcome::IGNORED,
        }
    }

    fn handle_keyboard(&mut self, event: &keyboard::Event) -> Outcome {
        match keys::message_for(event) {
            Some(message) => self.apply_key(message),
            None => Outcome::IGNORED,
        }
    }

    fn apply_key(&mut self, message: keys::Message) -> Outcome {
        match self.keyboard.handle(message) {
            keys::Effect::None => Outcome::IGNORED,
            keys::Effect::Close => Outcome::captured(Effect::Close),
            keys::Effect::NavigatePrevious => Outcome::captured(Effect::NavigatePrevious),
            keys::Effect::NavigateNext => Outcome::captured(Effect::NavigateNext),
        }
    }

    fn handle_mouse(&mut self, event: &mouse::Event) -> Outcome {
        let message = match *event {
            mouse::Event::WheelScrolled { delta } => return self.handle_wheel(delta),
            mouse::Event::CursorMoved { position } => drag::Message::CursorMoved(position),
            mouse::Event::ButtonPressed(button) => drag::Message::ButtonPressed(button),
            mouse::Event::ButtonReleased(button) => drag::Message::ButtonReleased(button),
            mouse::Event::CursorLeft => drag::Message::CursorLeft,
            _ => return Outcome::IGNORED,
        };

        let ctx = drag::Context {
            session: &mut self.session,
            zoom: self.zoom.level(),
            pan: self.pan,
        };
        match self.drag.handle(ctx, message) {
            drag::Effect::SetPan(pan) => {
                self.set_pan(pan);
                Outcome::captured(Effect::None)
            }
            drag::Effect::Started => Outcome::captured(Effect::None),
            drag::Effect::Ended | drag::Effect::None => Outcome::IGNORED,
        }
    }

    fn handle_wheel(&mut self, delta: mouse::ScrollDelta) -> Outcome {
        if !self.keyboard.zoom_modifier_held() {
            return Outcome::IGNORED;
        }
        let y = match delta {
            mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => y,
        };
        self.apply_zoom(zoom::Message::Wheel(y));
        Outcome::captured(Effect::None)
    }

    fn handle_touch(&mut self, event: &touch::Event) -> Outcome {
        let message = match *event {
            touch::Event::FingerPressed { id, position } => touches::Message::Pressed {
                finger: id,
                position,
            },
            touch::Event::FingerMoved { id, position } => touches::Message::Moved {
                finger: id,
                position,
            },
            touch::Event::FingerLifted { id, position } => touches::Message::Lifted {
                finger: id,
                position,
            },
            touch::Event::FingerLost { id, position } => touches::Message::Lost {
                finger: id,
                position,
            },
        };

        let ctx = touches::Context {
            session: &mut self.session,
            zoom: self.zoom.level(),
            pan: self.pan,
        };
        let (effect, status) = self.touch.handle(ctx, message);
        let effect = match effect {
            touches::Effect::None => Effect::None,
            touches::Effect::Pinch { start_zoom, ratio } => {
                self.apply_zoom(zoom::Message::Pinch { start_zoom, ratio });
                Effect::None
            }
            touches::Effect::SetPan(pan) => {
                self.set_pan(pan);
                Effect::None
            }
            touches::Effect::NavigatePrevious => Effect::NavigatePrevious,
            touches::Effect::NavigateNext => Effect::NavigateNext,
        };
        Outcome { effect, status }
    }

    fn apply_zoom(&mut self, message: zoom::Message) {
        if let zoom::Effect::ZoomChanged(level) = self.zoom.handle(message) {
            log::debug!("Zoom now {}%", level.as_percent());
        }
    }

    fn set_pan(&mut self, pan: PanOffset) {
        if self.zoom.level().is_zoomed() {
            self.pan = pan;
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let zoomed = self.zoom.level().is_zoomed();

        let image_area: Element<'a, Message> = match env.image {
            Some(handle) => canvas::Canvas::new(ImageCanvas {
                handle,
                natural_size: env.natural_size,
                zoom: self.zoom.level().value(),
                pan: self.effective_pan().as_vector(),
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => Container::new(Text::new(env.i18n.tr("error-image")))
                .center(Length::Fill)
                .into(),
        };

        let image_area = Container::new(image_area)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true);

        let controls = controls::view(controls::ViewContext {
            i18n: env.i18n,
            zoom: self.zoom.level(),
            can_zoom_in: self.zoom.can_zoom_in(),
            can_zoom_out: self.zoom.can_zoom_out(),
            current_index: self.current_index,
            image_count: env.image_count,
        })
        .map(Message::Controls);

        let dialog = Container::new(Column::new().push(image_area).push(controls))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(palette::VIEWER_BACKDROP.into()),
                text_color: Some(palette::WHITE),
                ..container::Style::default()
            });

        let interaction = match self.session {
            GestureSession::MousePan { .. } => mouse::Interaction::Grabbing,
            _ if zoomed => mouse::Interaction::Grab,
            _ => mouse::Interaction::Idle,
        };

        mouse_area(dialog).interaction(interaction).into()
    }
}

const _: () = {
    assert!(PINCH_MIN_DISTANCE > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX > 0.0);
};

/// Decides which native events reach a mounted viewer.
///
/// Presses and key strokes a widget already consumed (a control button, for
/// instance) are left alone. Releases, motion and wheel input are always
/// routed so sessions end reliably and modifier+wheel zoom works anywhere.
/// Modifier changes are not routed: the owner tracks them at all times and
/// hands them over through [`State::set_modifiers`].
pub fn route_event(
    event: event::Event,
    status: event::Status,
    window: window::Id,
) -> Option<Message> {
    if matches!(
        event,
        event::Event::Keyboard(keyboard::Event::ModifiersChanged(_))
    ) {
        return None;
    }

    let always = matches!(
        event,
        event::Event::Mouse(
            mouse::Event::WheelScrolled { .. }
                | mouse::Event::CursorMoved { .. }
                | mouse::Event::CursorLeft
                | mouse::Event::ButtonReleased(_)
        ) | event::Event::Touch(
            touch::Event::FingerMoved { .. }
                | touch::Event::FingerLifted { .. }
                | touch::Event::FingerLost { .. }
        )
    );
    let relevant = matches!(
        event,
        event::Event::Keyboard(_) | event::Event::Mouse(_) | event::Event::Touch(_)
    );

    match status {
        _ if always => Some(Message::RawEvent { window, event }),
        event::Status::Ignored if relevant => Some(Message::RawEvent { window, event }),
        _ => None,
    }
}
