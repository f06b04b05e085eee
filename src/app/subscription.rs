// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard modifiers are tracked for the whole application lifetime, so a
//! viewer mounted while ctrl is already held starts out knowing it.
//!
//! The viewer's native event listener only exists while a viewer is mounted.
//! iced drops a listener as soon as `subscription()` stops returning it, so
//! unmounting the viewer detaches its input handling on the next cycle.

use super::Message;
use crate::ui::viewer;
use iced::{event, keyboard, window, Subscription};

/// Creates the event subscription for the current mount state.
pub fn create_event_subscription(viewer_mounted: bool) -> Subscription<Message> {
    let modifiers = event::listen_with(route_modifiers);
    if viewer_mounted {
        Subscription::batch([modifiers, event::listen_with(route_viewer_event)])
    } else {
        modifiers
    }
}

fn route_modifiers(
    event: event::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(Message::ModifiersChanged(modifiers))
        }
        _ => None,
    }
}

fn route_viewer_event(
    event: event::Event,
    status: event::Status,
    window: window::Id,
) -> Option<Message> {
    viewer::route_event(event, status, window).map(Message::Viewer)
}
