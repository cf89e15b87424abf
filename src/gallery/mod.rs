// SPDX-License-Identifier: MPL-2.0
//! Data-access layer for the paginated image list.
//!
//! The layer owns all list state the presentation reads:
//!
//! - [`ListCache`] - the flattened, ordered sequence of fetched pages,
//!   with explicit `invalidate` and `subscribe` operations instead of
//!   ambient framework cache state.
//! - [`Loader`] - a pure pagination state machine that decides when a
//!   fetch may be issued and how its result is applied. It enforces
//!   at-most-one in-flight page fetch and drops responses that belong to
//!   an invalidated cache generation.
//! - [`ImageStore`] - an LRU of decoded image handles per URL, so the
//!   grid and the preview modal never decode the same bytes twice.

mod cache;
mod image_store;
mod loader;

pub use cache::ListCache;
pub use image_store::{ImageState, ImageStore};
pub use loader::{FetchRequest, Loader, Outcome, Phase};
