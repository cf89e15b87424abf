// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the remote image-storage API and the file-hosting
//! collaborator.
//!
//! Two endpoints are consumed:
//!
//! - `GET /api/images?after=<cursor>` → `{ "data": [Image...], "after"?: cursor }`
//! - `POST /api/images` with `{ title, description, url }` → `{ "image": Image }`
//!
//! Hosting of the raw image bytes (to obtain a public `url` before the
//! create call) is delegated to an external collaborator reached through
//! the [`ImageHost`] seam.

mod client;
mod error;
mod host;
mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use host::{HostError, HttpImageHost, ImageHost};
pub use models::{Cursor, ImagePage, ImageRecord, NewImage};
