// SPDX-License-Identifier: MPL-2.0
//! Pagination state machine for the image list.

use super::cache::ListCache;
use crate::api::{ApiError, Cursor, ImagePage};

/// Where the list currently stands, as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// First page not loaded yet.
    Loading,
    /// At least one page is loaded and no fetch is running.
    Ready,
    /// A follow-up page fetch is running; loaded pages stay visible.
    FetchingNext,
    /// The initial fetch failed; nothing to show.
    Failed(ApiError),
}

/// A fetch the caller should perform, tagged with the cache epoch it was
/// issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub cursor: Option<Cursor>,
    pub epoch: u64,
}

/// What applying a response amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The page was appended to the cache.
    Applied,
    /// The response belonged to an invalidated generation and was dropped.
    Stale,
    /// The initial fetch failed; the list has nothing to show.
    InitialFailed(ApiError),
    /// A follow-up fetch failed; already-loaded pages are untouched.
    NextFailed(ApiError),
}

/// Drives pagination over a [`ListCache`].
///
/// The loader never performs I/O. It hands out [`FetchRequest`]s when a
/// fetch is allowed and folds results back into the cache. At most one
/// fetch is in flight at any time; further triggers are suppressed until
/// the outstanding result arrives or the loader is reset.
#[derive(Debug)]
pub struct Loader {
    phase: Phase,
    in_flight: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            in_flight: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    /// Requests the first page.
    ///
    /// Returns `None` while another fetch is in flight.
    pub fn start_initial(&mut self, cache: &ListCache) -> Option<FetchRequest> {
        if self.in_flight {
            return None;
        }
        self.phase = Phase::Loading;
        self.in_flight = true;
        Some(FetchRequest {
            cursor: None,
            epoch: cache.epoch(),
        })
    }

    /// Requests the page after the last fetched one.
    ///
    /// Returns `None` when a fetch is already in flight (concurrent
    /// triggers are coalesced into the outstanding one) or when the cache
    /// reports no further pages.
    pub fn request_next(&mut self, cache: &ListCache) -> Option<FetchRequest> {
        if self.in_flight {
            return None;
        }
        let cursor = cache.next_cursor().cloned()?;
        self.phase = Phase::FetchingNext;
        self.in_flight = true;
        Some(FetchRequest {
            cursor: Some(cursor),
            epoch: cache.epoch(),
        })
    }

    /// Folds a fetch result back into the cache.
    ///
    /// `epoch` is the tag of the originating [`FetchRequest`]. A result
    /// from a generation older than the cache's is dropped without
    /// touching any state: the invalidation that bumped the epoch already
    /// reset this loader, and a newer fetch may be in flight.
    pub fn on_response(
        &mut self,
        cache: &mut ListCache,
        epoch: u64,
        result: Result<ImagePage, ApiError>,
    ) -> Outcome {
        if epoch != cache.epoch() {
            log::debug!(
                target: "gallery",
                "dropping stale page result (epoch {epoch}, cache at {})",
                cache.epoch()
            );
            return Outcome::Stale;
        }

        self.in_flight = false;
        match result {
            Ok(page) => {
                cache.append_page(page);
                self.phase = Phase::Ready;
                Outcome::Applied
            }
            Err(err) => {
                if matches!(self.phase, Phase::Loading) {
                    self.phase = Phase::Failed(err.clone());
                    Outcome::InitialFailed(err)
                } else {
                    // A failed follow-up page never discards loaded pages.
                    self.phase = Phase::Ready;
                    Outcome::NextFailed(err)
                }
            }
        }
    }

    /// Forgets any in-flight fetch and returns to the initial phase.
    ///
    /// Called when the cache is invalidated, right before a fresh
    /// `start_initial`.
    pub fn reset(&mut self) {
        self.phase = Phase::Loading;
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ImageRecord;
    use chrono::Utc;

    fn record(id: &str) -> ImageRecord {
        ImageRecord {
            id: id.to_string(),
            title: format!("title-{id}"),
            description: format!("description-{id}"),
            url: format!("https://host.example/{id}.png"),
            created_at: Utc::now(),
        }
    }

    fn page(ids: &[&str], after: Option<&str>) -> ImagePage {
        ImagePage {
            data: ids.iter().map(|id| record(id)).collect(),
            after: after.map(Cursor::new),
        }
    }

    fn ids(cache: &ListCache) -> Vec<&str> {
        cache.records().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn two_pages_concatenate_and_terminate() {
        let mut cache = ListCache::new();
        let mut loader = Loader::new();

        let first = loader.start_initial(&cache).expect("initial fetch allowed");
        assert!(first.cursor.is_none());
        loader.on_response(&mut cache, first.epoch, Ok(page(&["a", "b"], Some("c2"))));
        assert_eq!(*loader.phase(), Phase::Ready);
        assert!(cache.has_more());

        let second = loader.request_next(&cache).expect("next fetch allowed");
        assert_eq!(second.cursor.as_ref().map(Cursor::as_str), Some("c2"));
        loader.on_response(&mut cache, second.epoch, Ok(page(&["c", "d"], None)));

        assert_eq!(ids(&cache), vec!["a", "b", "c", "d"]);
        assert!(!cache.has_more());
        assert!(loader.request_next(&cache).is_none());
    }

    #[test]
    fn concurrent_next_triggers_are_suppressed() {
        let mut cache = ListCache::new();
        let mut loader = Loader::new();

        let first = loader.start_initial(&cache).unwrap();
        loader.on_response(&mut cache, first.epoch, Ok(page(&["a"], Some("c2"))));

        let next = loader.request_next(&cache);
        assert!(next.is_some());
        // Second trigger while the first is still in flight.
        assert!(loader.request_next(&cache).is_none());
        assert!(loader.start_initial(&cache).is_none());
    }

    #[test]
    fn next_page_failure_keeps_loaded_pages() {
        let mut cache = ListCache::new();
        let mut loader = Loader::new();

        let first = loader.start_initial(&cache).unwrap();
        loader.on_response(&mut cache, first.epoch, Ok(page(&["a", "b"], Some("c2"))));

        let next = loader.request_next(&cache).unwrap();
        let outcome = loader.on_response(
            &mut cache,
            next.epoch,
            Err(ApiError::Network("offline".into())),
        );

        assert!(matches!(outcome, Outcome::NextFailed(_)));
        assert_eq!(ids(&cache), vec!["a", "b"]);
        assert_eq!(*loader.phase(), Phase::Ready);
        // The cursor survives, so the user can retry.
        assert!(loader.request_next(&cache).is_some());
    }

    #[test]
    fn initial_failure_enters_failed_phase() {
        let mut cache = ListCache::new();
        let mut loader = Loader::new();

        let first = loader.start_initial(&cache).unwrap();
        let outcome = loader.on_response(
            &mut cache,
            first.epoch,
            Err(ApiError::Status {
                code: 500,
                body: "boom".into(),
            }),
        );

        assert!(matches!(outcome, Outcome::InitialFailed(_)));
        assert!(matches!(loader.phase(), Phase::Failed(_)));
        assert!(cache.records().is_empty());
    }

    #[test]
    fn stale_results_are_dropped_after_invalidation() {
        let mut cache = ListCache::new();
        let mut loader = Loader::new();

        let stale = loader.start_initial(&cache).unwrap();

        // An upload succeeded meanwhile: cache invalidated, loader reset,
        // fresh fetch issued.
        cache.invalidate();
        loader.reset();
        let fresh = loader.start_initial(&cache).expect("fresh fetch allowed");

        let outcome = loader.on_response(&mut cache, stale.epoch, Ok(page(&["old"], None)));
        assert_eq!(outcome, Outcome::Stale);
        assert!(cache.records().is_empty());
        assert!(loader.is_fetching());

        loader.on_response(&mut cache, fresh.epoch, Ok(page(&["new"], None)));
        assert_eq!(ids(&cache), vec!["new"]);
    }

    #[test]
    fn order_is_stable_across_runs() {
        for _ in 0..3 {
            let mut cache = ListCache::new();
            let mut loader = Loader::new();
            let first = loader.start_initial(&cache).unwrap();
            loader.on_response(&mut cache, first.epoch, Ok(page(&["a", "b"], Some("c2"))));
            let second = loader.request_next(&cache).unwrap();
            loader.on_response(&mut cache, second.epoch, Ok(page(&["c", "d"], None)));
            assert_eq!(ids(&cache), vec!["a", "b", "c", "d"]);
        }
    }
}
