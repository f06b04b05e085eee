// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts and modifier tracking for the viewer.

use iced::keyboard::{self, key, Key, Modifiers};

/// Keyboard sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    modifiers: Modifiers,
}

/// Messages for the keyboard sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    KeyPressed { key: Key, modifiers: Modifiers },
    ModifiersChanged(Modifiers),
}

/// Effects produced by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Close,
    NavigatePrevious,
    NavigateNext,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
                Effect::None
            }
            Message::KeyPressed { key, modifiers } => {
                self.modifiers = modifiers;
                match key.as_ref() {
                    Key::Named(key::Named::Escape) => Effect::Close,
                    Key::Named(key::Named::ArrowLeft) => Effect::NavigatePrevious,
                    Key::Named(key::Named::ArrowRight) => Effect::NavigateNext,
                    _ => Effect::None,
                }
            }
        }
    }

    /// Whether wheel input should zoom (ctrl on every platform, or the
    /// logo/command key).
    #[must_use]
    pub fn zoom_modifier_held(&self) -> bool {
        self.modifiers.control() || self.modifiers.logo()
    }
}

/// Converts an iced keyboard event into a sub-component message.
#[must_use]
pub fn message_for(event: &keyboard::Event) -> Option<Message> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Some(Message::KeyPressed {
            key: key.clone(),
            modifiers: *modifiers,
        }),
        keyboard::Event::ModifiersChanged(modifiers) => {
            Some(Message::ModifiersChanged(*modifiers))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut State, key: Key) -> Effect {
        state.handle(Message::KeyPressed {
            key,
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn navigation_keys_map_to_effects() {
        let mut state = State::default();
        assert_eq!(press(&mut state, Key::Named(key::Named::Escape)), Effect::Close);
        assert_eq!(
            press(&mut state, Key::Named(key::Named::ArrowLeft)),
            Effect::NavigatePrevious
        );
        assert_eq!(
            press(&mut state, Key::Named(key::Named::ArrowRight)),
            Effect::NavigateNext
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut state = State::default();
        assert_eq!(press(&mut state, Key::Character("a".into())), Effect::None);
        assert_eq!(press(&mut state, Key::Named(key::Named::ArrowUp)), Effect::None);
    }

    #[test]
    fn control_or_logo_enable_wheel_zoom() {
        let mut state = State::default();
        assert!(!state.zoom_modifier_held());

        state.handle(Message::ModifiersChanged(Modifiers::CTRL));
        assert!(state.zoom_modifier_held());

        state.handle(Message::ModifiersChanged(Modifiers::LOGO));
        assert!(state.zoom_modifier_held());

        state.handle(Message::ModifiersChanged(Modifiers::SHIFT));
        assert!(!state.zoom_modifier_held());
    }

    #[test]
    fn key_press_refreshes_modifiers() {
        let mut state = State::default();
        state.handle(Message::KeyPressed {
            key: Key::Named(key::Named::Control),
            modifiers: Modifiers::CTRL,
        });
        assert!(state.zoom_modifier_held());
    }
}
