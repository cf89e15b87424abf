// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the data-access layer (cache, loader,
//! image store), the API clients, localization, and the modal surfaces,
//! and translates messages into side effects like page fetches or cache
//! invalidation. Policy decisions (what a successful submission triggers,
//! when a refetch starts) live close to the update loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{ApiClient, HttpImageHost};
use crate::config;
use crate::gallery::{FetchRequest, ImageStore, ListCache, Loader};
use crate::i18n::I18n;
use crate::ui::image_modal;
use crate::ui::notifications;
use crate::ui::upload_form;
use iced::{Element, Subscription, Task, Theme};

/// The surface currently stacked over the gallery, if any.
///
/// At most one modal is open at a time, like the reference layout: the
/// upload form and the image preview replace each other.
#[derive(Debug, Default)]
pub enum Modal {
    #[default]
    None,
    Upload(upload_form::State),
    Preview(image_modal::State),
}

/// Root application state.
pub struct App {
    i18n: I18n,
    api: ApiClient,
    host: HttpImageHost,
    cache: ListCache,
    loader: Loader,
    images: ImageStore,
    modal: Modal,
    notifications: notifications::Manager,
    /// Spinner angle advanced by the periodic tick while a fetch runs.
    spinner_rotation: f32,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("phase", self.loader.phase())
            .field("records", &self.cache.records().len())
            .finish()
    }
}

impl App {
    /// Builds the initial state and kicks off the first page fetch.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            log::warn!(target: "app", "could not load config: {err}");
            config::Config::default()
        });

        let i18n = I18n::new(flags.lang, &config);

        let base_url = config.resolve_api_base_url(flags.api_url.as_deref());
        let upload_url = config.resolve_upload_url(&base_url);
        let api = ApiClient::new(base_url);
        let host = HttpImageHost::new(upload_url);

        let cache = ListCache::new();
        let mut loader = Loader::new();

        let initial_fetch = loader
            .start_initial(&cache)
            .map(|request| fetch_page_task(&api, request))
            .unwrap_or_else(Task::none);

        let app = Self {
            i18n,
            api,
            host,
            cache,
            loader,
            images: ImageStore::new(),
            modal: Modal::None,
            notifications: notifications::Manager::new(),
            spinner_rotation: 0.0,
        };

        (app, initial_fetch)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

/// Spawns a page fetch for the given request.
///
/// The result message carries the request's epoch tag so the loader can
/// recognize results that outlived an invalidation.
fn fetch_page_task(api: &ApiClient, request: FetchRequest) -> Task<Message> {
    let api = api.clone();
    let FetchRequest { cursor, epoch } = request;
    Task::perform(
        async move { api.list_images(cursor.as_ref()).await },
        move |result| Message::PageLoaded { epoch, result },
    )
}

/// Spawns downloads for every URL the image store does not know yet.
fn fetch_images_task(api: &ApiClient, urls: Vec<String>) -> Task<Message> {
    Task::batch(urls.into_iter().map(|url| {
        let api = api.clone();
        Task::perform(
            {
                let url = url.clone();
                async move { api.fetch_bytes(&url).await }
            },
            move |result| Message::ImageFetched {
                url: url.clone(),
                result,
            },
        )
    }))
}
