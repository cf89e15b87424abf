// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a desktop gallery client for a remote image-storage
//! API, built with the Iced GUI framework.
//!
//! It shows a paginated grid of uploaded images, lets the user add new
//! ones through a validated form, and previews any image full-size. All
//! list state lives in an explicit data-access layer with invalidate and
//! subscribe operations instead of ambient framework caching.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
pub mod upload;
