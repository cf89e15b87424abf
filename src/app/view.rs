// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is the base layer; the upload form or the image preview
//! stack over it as a modal, and toasts render above everything.

use super::{App, Message, Modal};
use crate::gallery::Phase;
use crate::ui::components::{error_state, loading};
use crate::ui::gallery_grid;
use crate::ui::header;
use crate::ui::notifications::Toast;
use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, stack, Column, Container};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let header_view = header::view(header::ViewContext {
        i18n: &app.i18n,
        can_add: matches!(app.modal, Modal::None),
    })
    .map(Message::Header);

    let content: Element<'_, Message> = match app.loader.phase() {
        Phase::Loading => loading::view(app.spinner_rotation, &app.i18n),
        Phase::Failed(err) => error_state::view(&app.i18n, &err.to_string()),
        Phase::Ready | Phase::FetchingNext => gallery_grid::view(gallery_grid::ViewContext {
            i18n: &app.i18n,
            records: app.cache.records(),
            images: &app.images,
            has_more: app.cache.has_more(),
            fetching_next: app.loader.is_fetching(),
        })
        .map(Message::Grid),
    };

    let base = Column::new()
        .push(header_view)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let with_modal: Element<'_, Message> = match &app.modal {
        Modal::None => base.into(),
        Modal::Upload(form) => modal_overlay(
            base.into(),
            form.view(&app.i18n).map(Message::UploadForm),
        ),
        Modal::Preview(preview) => {
            let image = app.images.get(preview.url());
            modal_overlay(base.into(), preview.view(image, &app.i18n).map(Message::Preview))
        }
    };

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    stack![with_modal, toasts].into()
}

/// Stacks `surface` over `base` with a dimmed, click-to-close backdrop.
fn modal_overlay<'a>(
    base: Element<'a, Message>,
    surface: Element<'a, Message>,
) -> Element<'a, Message> {
    let backdrop = Container::new(center(opaque(surface)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop);

    stack![
        base,
        opaque(mouse_area(backdrop).on_press(Message::CloseModal))
    ]
    .into()
}
