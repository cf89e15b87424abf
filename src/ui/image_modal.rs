// SPDX-License-Identifier: MPL-2.0
//! Full-size image preview modal.
//!
//! Single-instance: the application holds at most one `State`. Opening a
//! preview builds a fresh `State` for that URL, so switching images while
//! the modal is up never carries anything over from the previous one.

use crate::gallery::ImageState;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Preview state for a single URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    url: String,
}

/// Messages emitted by the preview modal.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

impl State {
    /// Opens a preview for `url`. Always a fresh state.
    #[must_use]
    pub fn open(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Renders the modal surface.
    ///
    /// `image` is this URL's entry in the image store; the store is shared
    /// with the grid, so a previewed card image is usually already decoded.
    pub fn view<'a>(&'a self, image: Option<&'a ImageState>, i18n: &'a I18n) -> Element<'a, Message> {
        let content: Element<'a, Message> = match image {
            Some(ImageState::Ready(handle)) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            Some(ImageState::Failed) => status_text(i18n.tr("preview-error"), true),
            _ => status_text(i18n.tr("preview-loading"), false),
        };

        let url_line = Text::new(self.url.as_str())
            .size(typography::CAPTION)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.color),
            });

        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(
                    Container::new(content)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(alignment::Horizontal::Center)
                        .align_y(alignment::Vertical::Center),
                )
                .push(url_line),
        )
        .padding(spacing::MD)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .height(Length::Fixed(sizing::MODAL_MAX_HEIGHT))
        .style(styles::container::panel)
        .into()
    }
}

fn status_text<'a>(label: String, is_error: bool) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(if is_error {
                palette::ERROR_500
            } else {
                theme.extended_palette().background.strong.color
            }),
        })
        .into()
}
