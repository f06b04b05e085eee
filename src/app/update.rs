// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The viewer only *requests* closing and navigation; this module owns the
//! index arithmetic and the viewer's mount lifetime.

use super::Message;
use crate::ui::state::BackgroundScroll;
use crate::ui::{gallery, viewer};
use iced::{keyboard, Task};

/// Mutable application state the handlers operate on.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub viewer: &'a mut Option<viewer::State>,
    pub background: &'a BackgroundScroll,
    pub settings: viewer::Settings,
    pub modifiers: &'a mut keyboard::Modifiers,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.handle_message(message) {
        gallery::Effect::OpenViewer(index) => open_viewer(ctx, index),
        gallery::Effect::None => {}
    }
    Task::none()
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    let Some(state) = ctx.viewer.as_mut() else {
        log::debug!("Dropping viewer message after unmount: {:?}", message);
        return Task::none();
    };

    match state.handle_message(message) {
        viewer::Effect::None => {}
        viewer::Effect::Close => close_viewer(ctx),
        viewer::Effect::NavigatePrevious => {
            let target = ctx.gallery.images().previous_index(state.current_index());
            navigate(state, target);
        }
        viewer::Effect::NavigateNext => {
            let target = ctx.gallery.images().next_index(state.current_index());
            navigate(state, target);
        }
    }
    Task::none()
}

pub fn handle_image_sizes(
    ctx: &mut UpdateContext<'_>,
    sizes: Vec<Option<iced::Size<u32>>>,
) -> Task<Message> {
    ctx.gallery.set_natural_sizes(sizes);
    Task::none()
}

pub fn handle_modifiers_changed(
    ctx: &mut UpdateContext<'_>,
    modifiers: keyboard::Modifiers,
) -> Task<Message> {
    *ctx.modifiers = modifiers;
    if let Some(state) = ctx.viewer.as_mut() {
        state.set_modifiers(modifiers);
    }
    Task::none()
}

/// Mounts the viewer on `index`, or moves an already mounted one there.
pub fn open_viewer(ctx: &mut UpdateContext<'_>, index: usize) {
    let Some(index) = ctx.gallery.images().clamp_index(index) else {
        log::warn!("No images to show, viewer not opened");
        return;
    };

    match ctx.viewer.as_mut() {
        Some(state) => state.set_current_index(index),
        None => {
            let mut state = viewer::State::mount(index, ctx.background.lock(), ctx.settings);
            state.set_modifiers(*ctx.modifiers);
            *ctx.viewer = Some(state);
        }
    }
}

fn close_viewer(ctx: &mut UpdateContext<'_>) {
    if let Some(state) = ctx.viewer.take() {
        log::info!("Viewer closed at index {}", state.current_index());
    }
}

/// A single-image set navigates onto itself, which still resets zoom and pan.
fn navigate(state: &mut viewer::State, target: Option<usize>) {
    if let Some(index) = target {
        state.set_current_index(index);
    }
}
