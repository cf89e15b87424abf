// SPDX-License-Identifier: MPL-2.0
//! Cached page list with explicit invalidation and change notification.

use crate::api::{Cursor, ImagePage, ImageRecord};
use tokio::sync::watch;

/// The cached image list.
///
/// Holds the concatenation of all fetched pages in fetch order plus the
/// cursor of the last fetched page. Mutation happens only through
/// [`append_page`](Self::append_page) and
/// [`invalidate`](Self::invalidate); the list is never patched in place.
///
/// Every invalidation bumps the cache epoch and notifies subscribers.
/// Fetches are tagged with the epoch they were issued under, so a result
/// that arrives after an invalidation can be recognized as stale.
#[derive(Debug)]
pub struct ListCache {
    records: Vec<ImageRecord>,
    next_cursor: Option<Cursor>,
    pages_loaded: usize,
    epoch: u64,
    notify: watch::Sender<u64>,
}

impl Default for ListCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ListCache {
    #[must_use]
    pub fn new() -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            records: Vec::new(),
            next_cursor: None,
            pages_loaded: 0,
            epoch: 0,
            notify,
        }
    }

    /// All fetched records, in fetch order.
    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Number of pages appended since the last invalidation.
    #[must_use]
    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    /// Cursor for the next page, if the last fetched page carried one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    /// True iff the last fetched page announced more records.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Current cache generation. Bumped by every invalidation.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Appends a fetched page, preserving fetch order.
    pub fn append_page(&mut self, page: ImagePage) {
        self.records.extend(page.data);
        self.next_cursor = page.after;
        self.pages_loaded += 1;
    }

    /// Drops everything, bumps the epoch, and notifies subscribers.
    ///
    /// The next read after an invalidation must refetch from the first
    /// page; subscribers learn about it through the watch channel.
    pub fn invalidate(&mut self) {
        self.records.clear();
        self.next_cursor = None;
        self.pages_loaded = 0;
        self.epoch += 1;
        self.notify.send_replace(self.epoch);
        log::debug!(target: "gallery", "cache invalidated (epoch {})", self.epoch);
    }

    /// Subscribes to invalidation notifications.
    ///
    /// The receiver yields the new epoch each time the cache is
    /// invalidated.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }
}
