// SPDX-License-Identifier: MPL-2.0
//! Full-view error state replacing the list when the initial fetch fails.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Renders the generic list error view.
///
/// `details` carries the technical error text; it is rendered dimmed
/// under the friendly message.
pub fn view<'a, Message: 'a>(i18n: &I18n, details: &str) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("gallery-error-title"))
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        });

    let body = Text::new(i18n.tr("gallery-error-body")).size(typography::BODY);

    let details = Text::new(details.to_string())
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        });

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(body)
        .push(details);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
