// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page (header, gallery, footer) is always rendered; a mounted viewer is
//! stacked above it as a full-window layer.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::state::ScrollBehavior;
use crate::ui::theming::{palette, ThemeMode};
use crate::ui::{gallery, viewer};
use iced::widget::{container, Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub viewer: Option<&'a viewer::State>,
    pub scroll: ScrollBehavior,
    pub theme_mode: ThemeMode,
    /// Translated notice shown in the footer when settings failed to load.
    pub config_warning: Option<String>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page_background = ctx.theme_mode.page_background();

    let page = Column::new()
        .push(header(ctx.i18n))
        .push(
            Container::new(ctx.gallery.view(ctx.i18n, ctx.scroll).map(Message::Gallery))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_theme| container::Style {
                    background: Some(page_background.into()),
                    ..container::Style::default()
                }),
        )
        .push(footer(ctx.i18n, ctx.config_warning));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(state) = ctx.viewer {
        let index = state.current_index();
        let overlay = state
            .view(viewer::ViewEnv {
                i18n: ctx.i18n,
                image: ctx.gallery.handle(index),
                natural_size: ctx.gallery.natural_size(index),
                image_count: ctx.gallery.images().len(),
            })
            .map(Message::Viewer);
        layers = layers.push(overlay);
    }

    layers.into()
}

fn header(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("store-name")).size(28))
        .width(Length::Fill)
        .padding([16, 24])
        .style(brand_bar)
        .into()
}

fn footer(i18n: &I18n, config_warning: Option<String>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(4)
        .push(Text::new(i18n.tr("footer-copyright")).size(14));
    if let Some(warning) = config_warning {
        content = content.push(Text::new(warning).size(12));
    }

    Container::new(content)
        .width(Length::Fill)
        .padding([12, 24])
        .style(brand_bar)
        .into()
}

fn brand_bar(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(palette::BRAND_BLUE.into()),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}
