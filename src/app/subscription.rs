// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources feed the update loop from outside user input:
//!
//! - a periodic tick driving notification auto-dismiss and the loading
//!   spinner, active only while something needs it;
//! - the data layer's cache-invalidation channel, surfaced as messages so
//!   the presentation layer refetches without reaching into the cache.

use super::{App, Message};
use futures_util::stream;
use iced::{time, Subscription};
use std::time::Duration;

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([tick_subscription(app), invalidation_subscription(app)])
}

/// Periodic tick for notification auto-dismiss and spinner animation.
///
/// Suspended entirely while nothing is animating and no toast is up, so
/// an idle gallery schedules no wakeups.
fn tick_subscription(app: &App) -> Subscription<Message> {
    if app.notifications.has_notifications() || app.loader.is_fetching() {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Surfaces the cache's invalidation notifications as messages.
fn invalidation_subscription(app: &App) -> Subscription<Message> {
    let receiver = app.cache.subscribe();
    Subscription::run_with_id(
        "gallery-cache-invalidation",
        stream::unfold(receiver, |mut receiver| async move {
            receiver.changed().await.ok()?;
            let epoch = *receiver.borrow_and_update();
            Some((Message::CacheInvalidated(epoch), receiver))
        }),
    )
}
