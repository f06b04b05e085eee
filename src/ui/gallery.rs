// SPDX-License-Identifier: MPL-2.0
//! Menu gallery: one activation target per image, each opening the viewer.

use crate::assets::AssetResolver;
use crate::domain::ImageSet;
use crate::i18n::fluent::I18n;
use crate::ui::state::ScrollBehavior;
use crate::ui::theming::palette;
use crate::ui::widgets::scroll_gate;
use fluent_bundle::FluentValue;
use iced::widget::image::Handle;
use iced::widget::{button, container, tooltip, Column, Container, Image, Row, Scrollable, Text};
use iced::{ContentFit, Element, Length, Size};

/// Images per gallery row.
const COLUMNS: usize = 2;
const THUMBNAIL_HEIGHT: f32 = 240.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Activation of the image at this position.
    Open(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenViewer(usize),
}

/// Gallery state: the image set and how to reach its files.
#[derive(Debug, Clone)]
pub struct State {
    images: ImageSet,
    resolver: AssetResolver,
    natural_sizes: Vec<Option<Size<u32>>>,
}

impl State {
    #[must_use]
    pub fn new(images: ImageSet, resolver: AssetResolver) -> Self {
        Self {
            natural_sizes: vec![None; images.len()],
            images,
            resolver,
        }
    }

    #[must_use]
    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    #[must_use]
    pub fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    /// Stores probed image sizes. A result for a different set is ignored.
    pub fn set_natural_sizes(&mut self, sizes: Vec<Option<Size<u32>>>) {
        if sizes.len() == self.images.len() {
            self.natural_sizes = sizes;
        } else {
            log::warn!(
                "Ignoring {} probed sizes for {} images",
                sizes.len(),
                self.images.len()
            );
        }
    }

    #[must_use]
    pub fn natural_size(&self, index: usize) -> Option<Size<u32>> {
        self.natural_sizes.get(index).copied().flatten()
    }

    /// Render handle of the image at `index`.
    #[must_use]
    pub fn handle(&self, index: usize) -> Option<Handle> {
        self.images.get(index).map(|id| self.resolver.handle_for(id))
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(index) if index < self.images.len() => Effect::OpenViewer(index),
            Message::Open(index) => {
                log::warn!("Gallery activation for unknown index {}", index);
                Effect::None
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, scroll: ScrollBehavior) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("gallery-title"))
            .size(36)
            .color(palette::BRAND_BLUE);

        let mut grid = Column::new()
            .spacing(24)
            .padding(24)
            .align_x(iced::alignment::Horizontal::Center)
            .push(title);

        if self.images.is_empty() {
            grid = grid.push(Text::new(i18n.tr("gallery-empty")));
        }

        let tiles: Vec<Element<'a, Message>> = (0..self.images.len())
            .filter_map(|index| self.tile(i18n, index))
            .collect();
        let mut tiles = tiles.into_iter();
        loop {
            let row: Vec<Element<'a, Message>> = tiles.by_ref().take(COLUMNS).collect();
            if row.is_empty() {
                break;
            }
            grid = grid.push(Row::with_children(row).spacing(24));
        }

        let scrollable = Scrollable::new(Container::new(grid).center_x(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill);

        scroll_gate(scrollable, scroll).into()
    }

    fn tile<'a>(&'a self, i18n: &'a I18n, index: usize) -> Option<Element<'a, Message>> {
        let handle = self.handle(index)?;
        let number = FluentValue::from(index + 1);

        let picture = Image::new(handle)
            .content_fit(ContentFit::Contain)
            .width(Length::Fixed(THUMBNAIL_HEIGHT * 4.0 / 3.0))
            .height(Length::Fixed(THUMBNAIL_HEIGHT));
        let caption = Text::new(i18n.tr_with_args("gallery-image-alt", &[("index", number.clone())]))
            .size(14);

        let target = button(Column::new().spacing(8).push(picture).push(caption))
            .on_press(Message::Open(index))
            .padding(8)
            .style(button::text);

        let label = Container::new(Text::new(
            i18n.tr_with_args("gallery-open-item", &[("index", number)]),
        ))
        .padding(6)
        .style(container::rounded_box);

        Some(tooltip(target, label, tooltip::Position::Bottom).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_IMAGE_IDS;

    fn gallery() -> State {
        State::new(
            DEFAULT_IMAGE_IDS.into_iter().collect(),
            AssetResolver::default(),
        )
    }

    #[test]
    fn open_emits_viewer_effect() {
        let mut state = gallery();
        assert_eq!(state.handle_message(Message::Open(3)), Effect::OpenViewer(3));
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let mut state = gallery();
        assert_eq!(state.handle_message(Message::Open(42)), Effect::None);
    }

    #[test]
    fn natural_sizes_must_match_the_set() {
        let mut state = gallery();
        state.set_natural_sizes(vec![Some(Size::new(4, 3))]);
        assert_eq!(state.natural_size(0), None);

        let mut sizes = vec![None; state.images().len()];
        sizes[0] = Some(Size::new(4, 3));
        state.set_natural_sizes(sizes);
        assert_eq!(state.natural_size(0), Some(Size::new(4, 3)));
        assert_eq!(state.natural_size(99), None);
    }

    #[test]
    fn handles_exist_only_for_known_indices() {
        let state = gallery();
        assert!(state.handle(0).is_some());
        assert!(state.handle(6).is_none());
    }

    #[test]
    fn empty_gallery_renders() {
        let state = State::new(ImageSet::default(), AssetResolver::default());
        let i18n = I18n::default();
        let _element = state.view(&i18n, ScrollBehavior::Auto);
    }

    #[test]
    fn view_renders_locked_and_unlocked() {
        let state = gallery();
        let i18n = I18n::default();
        let _unlocked = state.view(&i18n, ScrollBehavior::Auto);
        let _locked = state.view(&i18n, ScrollBehavior::Locked);
    }
}
