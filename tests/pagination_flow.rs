// SPDX-License-Identifier: MPL-2.0
//! End-to-end flow of the data-access layer: pagination, invalidation,
//! and the observer channel, without any UI or network involved.

use iced_gallery::api::{ApiError, Cursor, ImagePage, ImageRecord};
use iced_gallery::gallery::{ListCache, Loader, Outcome, Phase};

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

fn ids(cache: &ListCache) -> Vec<String> {
    cache.records().iter().map(|r| r.id.clone()).collect()
}

#[test]
fn full_pagination_run_yields_stable_concatenation() {
    let mut cache = ListCache::new();
    let mut loader = Loader::new();

    let first = loader.start_initial(&cache).expect("initial fetch");
    assert_eq!(*loader.phase(), Phase::Loading);
    loader.on_response(&mut cache, first.epoch, Ok(page(&["a", "b"], Some("c2"))));

    let second = loader.request_next(&cache).expect("next fetch");
    assert_eq!(*loader.phase(), Phase::FetchingNext);
    loader.on_response(&mut cache, second.epoch, Ok(page(&["c", "d"], None)));

    assert_eq!(ids(&cache), ["a", "b", "c", "d"]);
    assert!(!cache.has_more());
    assert_eq!(*loader.phase(), Phase::Ready);
    // The final page had no cursor: pagination has terminated.
    assert!(loader.request_next(&cache).is_none());
}

#[tokio::test]
async fn submission_style_invalidation_reaches_subscribers_and_refetches() {
    let mut cache = ListCache::new();
    let mut loader = Loader::new();
    let mut invalidations = cache.subscribe();

    let first = loader.start_initial(&cache).unwrap();
    loader.on_response(&mut cache, first.epoch, Ok(page(&["a"], None)));
    assert_eq!(ids(&cache), ["a"]);

    // A successful upload invalidates the cached list.
    cache.invalidate();

    // The observer is notified with the new epoch...
    invalidations.changed().await.expect("notification arrives");
    let epoch = *invalidations.borrow_and_update();
    assert_eq!(epoch, cache.epoch());

    // ...and the next read refetches from the first page.
    loader.reset();
    let refetch = loader.start_initial(&cache).expect("refetch allowed");
    assert!(refetch.cursor.is_none());
    loader.on_response(&mut cache, refetch.epoch, Ok(page(&["fresh", "a"], None)));
    assert_eq!(ids(&cache), ["fresh", "a"]);
}

#[test]
fn error_paths_match_the_list_contract() {
    let mut cache = ListCache::new();
    let mut loader = Loader::new();

    // Initial failure: nothing to show.
    let first = loader.start_initial(&cache).unwrap();
    let outcome = loader.on_response(
        &mut cache,
        first.epoch,
        Err(ApiError::Network("offline".into())),
    );
    assert!(matches!(outcome, Outcome::InitialFailed(_)));
    assert!(matches!(loader.phase(), Phase::Failed(_)));

    // Recovery: a later successful initial fetch replaces the error state.
    loader.reset();
    let retry = loader.start_initial(&cache).unwrap();
    loader.on_response(&mut cache, retry.epoch, Ok(page(&["a"], Some("c2"))));
    assert_eq!(*loader.phase(), Phase::Ready);

    // Follow-up failure: loaded pages survive.
    let next = loader.request_next(&cache).unwrap();
    let outcome = loader.on_response(
        &mut cache,
        next.epoch,
        Err(ApiError::Status {
            code: 500,
            body: "boom".into(),
        }),
    );
    assert!(matches!(outcome, Outcome::NextFailed(_)));
    assert_eq!(ids(&cache), ["a"]);
}
