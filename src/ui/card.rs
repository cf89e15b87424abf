// SPDX-License-Identifier: MPL-2.0
//! A single gallery card: image, title, and description.

use crate::api::ImageRecord;
use crate::gallery::ImageState;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Messages emitted by a card.
#[derive(Debug, Clone)]
pub enum Message {
    /// The card was clicked; open the preview for this URL.
    ViewImage(String),
}

/// Render one card.
///
/// `image` is the current load state of the card's picture, looked up in
/// the image store by the caller.
pub fn view<'a>(
    record: &'a ImageRecord,
    image: Option<&'a ImageState>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match image {
        Some(ImageState::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageState::Failed) => placeholder(i18n.tr("preview-error")),
        _ => placeholder(i18n.tr("preview-loading")),
    };

    let title = Text::new(record.title.as_str()).size(typography::BODY_LG);

    let description = Text::new(record.description.as_str())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        });

    let body = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::SM)
        .push(title)
        .push(description);

    let content = Container::new(Column::new().push(picture).push(body))
        .width(Length::Fill)
        .style(styles::container::card);

    button(content)
        .padding(0.0)
        .width(Length::Fill)
        .on_press(Message::ViewImage(record.url.clone()))
        .style(styles::button::surface)
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_400),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
