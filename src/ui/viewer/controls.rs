// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: zoom buttons, zoom percentage, navigation and close.

use crate::i18n::fluent::I18n;
use crate::ui::state::ZoomLevel;
use crate::ui::theming::palette;
use fluent_bundle::FluentValue;
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Space, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub zoom: ZoomLevel,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    /// Zero-based index of the displayed image.
    pub current_index: usize,
    pub image_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    Close,
    Previous,
    Next,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let zoom_out_button = button(Text::new(ctx.i18n.tr("viewer-zoom-out-button")).size(20))
        .on_press_maybe(ctx.can_zoom_out.then_some(Message::ZoomOut))
        .padding([6, 14]);

    let percent = Text::new(ctx.i18n.tr_with_args(
        "viewer-zoom-percent",
        &[("percent", FluentValue::from(ctx.zoom.as_percent()))],
    ))
    .width(Length::Fixed(64.0))
    .align_x(iced::alignment::Horizontal::Center);

    let zoom_in_button = button(Text::new(ctx.i18n.tr("viewer-zoom-in-button")).size(20))
        .on_press_maybe(ctx.can_zoom_in.then_some(Message::ZoomIn))
        .padding([6, 14]);

    let close_button = button(Text::new(ctx.i18n.tr("viewer-close-button")).size(20))
        .on_press(Message::Close)
        .padding([6, 14]);

    let mut row = Row::new().spacing(12).align_y(Vertical::Center);

    if ctx.image_count > 1 {
        let position = Text::new(ctx.i18n.tr_with_args(
            "viewer-position",
            &[
                ("current", FluentValue::from(ctx.current_index + 1)),
                ("total", FluentValue::from(ctx.image_count)),
            ],
        ));
        row = row
            .push(
                button(Text::new(ctx.i18n.tr("viewer-previous-button")).size(20))
                    .on_press(Message::Previous)
                    .padding([6, 14]),
            )
            .push(position)
            .push(
                button(Text::new(ctx.i18n.tr("viewer-next-button")).size(20))
                    .on_press(Message::Next)
                    .padding([6, 14]),
            )
            .push(Space::new().width(Length::Fixed(24.0)));
    }

    row = row
        .push(zoom_out_button)
        .push(percent)
        .push(zoom_in_button)
        .push(Space::new().width(Length::Fixed(24.0)))
        .push(close_button);

    Container::new(row)
        .center_x(Length::Fill)
        .padding(12)
        .style(|_theme| container::Style {
            background: Some(palette::VIEWER_BAR.into()),
            text_color: Some(palette::WHITE),
            ..container::Style::default()
        })
        .into()
}
