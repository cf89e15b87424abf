// SPDX-License-Identifier: MPL-2.0
//! Full-view loading state shown while the first page is fetched.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Spinner rotation advance per tick, in radians.
pub const SPINNER_SPEED: f32 = 0.35;

/// Renders a centered spinner with a short label.
///
/// `rotation` is advanced by the application's periodic tick while a
/// load is running.
pub fn view<'a, Message: 'static>(rotation: f32, i18n: &I18n) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element();

    let label = Text::new(i18n.tr("gallery-loading")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(label);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
