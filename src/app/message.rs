// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{ApiError, ImagePage};
use crate::ui::gallery_grid;
use crate::ui::header;
use crate::ui::image_modal;
use crate::ui::notifications;
use crate::ui::upload_form;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A page fetch finished. `epoch` tags the cache generation the fetch
    /// was issued under so stale results can be dropped.
    PageLoaded {
        epoch: u64,
        result: Result<ImagePage, ApiError>,
    },
    /// A remote image download finished.
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, ApiError>,
    },
    /// The list cache was invalidated; refetch from the first page.
    CacheInvalidated(u64),
    Header(header::Message),
    Grid(gallery_grid::Message),
    UploadForm(upload_form::Message),
    Preview(image_modal::Message),
    /// Backdrop click: close whichever modal is open.
    CloseModal,
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss and spinner animation.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional API base address override.
    /// Takes precedence over `ICED_GALLERY_API_URL` and the config file.
    pub api_url: Option<String>,
}
