// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{fetch_images_task, fetch_page_task, App, Message, Modal};
use crate::api::{ApiError, ImagePage};
use crate::gallery::Outcome;
use crate::ui::components::loading::SPINNER_SPEED;
use crate::ui::gallery_grid;
use crate::ui::header;
use crate::ui::image_modal;
use crate::ui::notifications::Notification;
use crate::ui::upload_form;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::PageLoaded { epoch, result } => handle_page_loaded(app, epoch, result),
        Message::ImageFetched { url, result } => {
            app.images.insert_result(url, result);
            Task::none()
        }
        Message::CacheInvalidated(epoch) => handle_cache_invalidated(app, epoch),
        Message::Header(message) => handle_header(app, message),
        Message::Grid(message) => handle_grid(app, message),
        Message::UploadForm(message) => handle_upload_form(app, message),
        Message::Preview(image_modal::Message::Close) | Message::CloseModal => {
            app.modal = Modal::None;
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(_) => handle_tick(app),
    }
}

fn handle_page_loaded(
    app: &mut App,
    epoch: u64,
    result: Result<ImagePage, ApiError>,
) -> Task<Message> {
    match app.loader.on_response(&mut app.cache, epoch, result) {
        Outcome::Applied => {
            // Kick off downloads for images the store has not seen yet.
            let urls = app
                .images
                .request(app.cache.records().iter().map(|r| r.url.as_str()));
            fetch_images_task(&app.api, urls)
        }
        Outcome::Stale => Task::none(),
        Outcome::InitialFailed(err) => {
            log::warn!(target: "app", "initial page fetch failed: {err}");
            Task::none()
        }
        Outcome::NextFailed(err) => {
            log::warn!(target: "app", "follow-up page fetch failed: {err}");
            app.notifications
                .push(Notification::error("notification-page-error"));
            Task::none()
        }
    }
}

/// Reacts to a cache invalidation notification from the data layer by
/// refetching from the first page.
fn handle_cache_invalidated(app: &mut App, epoch: u64) -> Task<Message> {
    if epoch != app.cache.epoch() {
        // Superseded by a later invalidation; its own notification follows.
        return Task::none();
    }
    app.loader.reset();
    app.loader
        .start_initial(&app.cache)
        .map(|request| fetch_page_task(&app.api, request))
        .unwrap_or_else(Task::none)
}

fn handle_header(app: &mut App, message: header::Message) -> Task<Message> {
    match header::update(message) {
        header::Event::OpenUploadForm => {
            if matches!(app.modal, Modal::None) {
                app.modal = Modal::Upload(upload_form::State::new());
            }
            Task::none()
        }
    }
}

fn handle_grid(app: &mut App, message: gallery_grid::Message) -> Task<Message> {
    match gallery_grid::update(message) {
        gallery_grid::Event::OpenPreview(url) => {
            // Always a fresh preview state, even when one is already open
            // for another URL; nothing carries over between previews.
            app.modal = Modal::Preview(image_modal::State::open(url.clone()));
            let urls = app.images.request([url.as_str()]);
            fetch_images_task(&app.api, urls)
        }
        gallery_grid::Event::FetchNextPage => app
            .loader
            .request_next(&app.cache)
            .map(|request| fetch_page_task(&app.api, request))
            .unwrap_or_else(Task::none),
    }
}

fn handle_upload_form(app: &mut App, message: upload_form::Message) -> Task<Message> {
    let Modal::Upload(form) = &mut app.modal else {
        // The form already closed; late task results have nowhere to go.
        return Task::none();
    };

    let (event, task) = form.update(message, &app.api, &app.host);
    let task = task.map(Message::UploadForm);

    match event {
        upload_form::Event::None => task,
        upload_form::Event::Notify(notification) => {
            app.notifications.push(notification);
            task
        }
        upload_form::Event::Created(record) => {
            log::info!(target: "app", "image {} created, refreshing list", record.id);
            app.notifications
                .push(Notification::success("notification-submit-success"));
            // Closing the modal destroys the draft; invalidating the cache
            // notifies the subscription, which triggers the refetch.
            app.modal = Modal::None;
            app.cache.invalidate();
            task
        }
    }
}

fn handle_tick(app: &mut App) -> Task<Message> {
    app.notifications.tick();
    if app.loader.is_fetching() {
        app.spinner_rotation = (app.spinner_rotation + SPINNER_SPEED) % std::f32::consts::TAU;
    }
    Task::none()
}
