// SPDX-License-Identifier: MPL-2.0
//! Top header bar with the application title and the add-image action.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The add button is disabled while the upload form is already open.
    pub can_add: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    AddImage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenUploadForm,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::AddImage => Event::OpenUploadForm,
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_MD);

    let add_label = ctx.i18n.tr("header-add-button");
    let add_button = if ctx.can_add {
        button(Text::new(add_label))
            .on_press(Message::AddImage)
            .style(styles::button::primary)
    } else {
        button(Text::new(add_label)).style(styles::button::disabled())
    };

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(add_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}
