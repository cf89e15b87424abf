// SPDX-License-Identifier: MPL-2.0
//! The paginated card grid and its load-more row.

use crate::api::ImageRecord;
use crate::gallery::ImageStore;
use crate::i18n::I18n;
use crate::ui::card;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Cards per row, matching the reference layout.
const COLUMNS: usize = 3;

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub records: &'a [ImageRecord],
    pub images: &'a ImageStore,
    /// Whether the list has further pages.
    pub has_more: bool,
    /// Whether a follow-up page fetch is running.
    pub fetching_next: bool,
}

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    Card(card::Message),
    LoadMore,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenPreview(String),
    FetchNextPage,
}

/// Process a grid message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Card(card::Message::ViewImage(url)) => Event::OpenPreview(url),
        Message::LoadMore => Event::FetchNextPage,
    }
}

/// Render the scrollable grid with its optional load-more row.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().spacing(spacing::LG);

    if ctx.records.is_empty() {
        content = content.push(
            Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::XXL)
                .align_x(alignment::Horizontal::Center),
        );
    } else {
        content = content.push(grid(&ctx));
    }

    if ctx.has_more {
        content = content.push(load_more_row(&ctx));
    }

    let page = Container::new(content)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([spacing::LG, spacing::XL]);

    scrollable(
        Container::new(page)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Lay the cards out in fixed-width rows of [`COLUMNS`].
fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::LG);

    for chunk in ctx.records.chunks(COLUMNS) {
        let mut row = Row::new().spacing(spacing::LG);
        for record in chunk {
            let image = ctx.images.get(&record.url);
            row = row.push(
                Container::new(card::view(record, image, ctx.i18n).map(Message::Card))
                    .width(Length::Fixed(sizing::CARD_WIDTH)),
            );
        }
        column = column.push(row);
    }

    column.into()
}

/// The "load more" button, or a progress label while the fetch runs.
fn load_more_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = ctx.i18n.tr("gallery-load-more");

    let control: Element<'a, Message> = if ctx.fetching_next {
        button(Text::new(label))
            .style(styles::button::disabled())
            .into()
    } else {
        button(Text::new(label))
            .on_press(Message::LoadMore)
            .style(styles::button::primary)
            .into()
    };

    Container::new(control).into()
}
