// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that withholds scroll input from its content while the
//! page scroll is locked.
//!
//! The gallery scrollable sits behind the viewer overlay. While a viewer is
//! mounted the gate swallows wheel and touch input, so the page cannot move
//! underneath the overlay; once the lock is released input flows through
//! unchanged.

use crate::ui::state::ScrollBehavior;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Wraps scrollable content and drops scroll input while locked.
pub struct ScrollGate<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    behavior: ScrollBehavior,
}

impl<'a, Message, Theme, Renderer> ScrollGate<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        behavior: ScrollBehavior,
    ) -> Self {
        Self {
            content: content.into(),
            behavior,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollGate<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if blocks(self.behavior, event) {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ScrollGate<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(gate: ScrollGate<'a, Message, Theme, Renderer>) -> Self {
        Self::new(gate)
    }
}

/// Helper function to gate a scrollable on the page scroll behaviour.
pub fn scroll_gate<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    behavior: ScrollBehavior,
) -> ScrollGate<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScrollGate::new(content, behavior)
}

/// Whether `event` is withheld from the content under `behavior`.
fn blocks(behavior: ScrollBehavior, event: &Event) -> bool {
    behavior == ScrollBehavior::Locked
        && matches!(
            event,
            Event::Mouse(mouse::Event::WheelScrolled { .. }) | Event::Touch(_)
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::touch;

    fn wheel() -> Event {
        Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        })
    }

    #[test]
    fn wheel_passes_while_unlocked() {
        assert!(!blocks(ScrollBehavior::Auto, &wheel()));
    }

    #[test]
    fn wheel_and_touch_blocked_while_locked() {
        assert!(blocks(ScrollBehavior::Locked, &wheel()));
        let finger = Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(0),
            position: iced::Point::ORIGIN,
        });
        assert!(blocks(ScrollBehavior::Locked, &finger));
    }

    #[test]
    fn other_events_always_pass() {
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(!blocks(ScrollBehavior::Locked, &press));
        let resize = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert!(!blocks(ScrollBehavior::Locked, &resize));
    }
}
