// SPDX-License-Identifier: MPL-2.0
//! Per-URL cache of decoded image handles.
//!
//! The grid and the preview modal both display remote images; fetched
//! bytes are decoded once into an Iced handle and kept in an LRU so
//! scrolling back does not refetch. Invalidating the page list does not
//! touch this store: the binaries behind a URL never change.

use crate::api::ApiError;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

const DEFAULT_CAPACITY: usize = 256;

/// Load state of a single remote image.
#[derive(Debug, Clone)]
pub enum ImageState {
    /// A fetch for this URL is in flight.
    Loading,
    /// Decoded and displayable.
    Ready(Handle),
    /// The fetch failed; the URL will not be retried automatically.
    Failed,
}

/// LRU cache of remote images keyed by URL.
pub struct ImageStore {
    entries: LruCache<String, ImageState>,
}

impl std::fmt::Debug for ImageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageStore")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least one");
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Registers URLs for display and returns the ones that need fetching.
    ///
    /// Known URLs (loading, ready, or failed) are only touched to refresh
    /// their LRU position; unknown ones are marked `Loading` and returned
    /// so the caller can spawn fetches for them.
    pub fn request<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut to_fetch = Vec::new();
        for url in urls {
            if self.entries.get(url).is_none() {
                self.entries.put(url.to_string(), ImageState::Loading);
                to_fetch.push(url.to_string());
            }
        }
        to_fetch
    }

    /// Stores the result of a fetch spawned from [`request`](Self::request).
    pub fn insert_result(&mut self, url: String, result: Result<Vec<u8>, ApiError>) {
        let state = match result {
            Ok(bytes) => ImageState::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                log::warn!(target: "gallery", "image fetch failed for {url}: {err}");
                ImageState::Failed
            }
        };
        self.entries.put(url, state);
    }

    /// Looks a URL up without changing its LRU position.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ImageState> {
        self.entries.peek(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
