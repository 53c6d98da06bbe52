use std::sync::Arc;

use crate::domain::FeedItem;
use crate::errors::{NotifeedError, NotifeedResult};
use crate::registry::SubscriptionRegistry;
use crate::sources::FeedClient;

/// Resolves "the latest item" for a channel: try the channel's feeds in
/// subscription order, first feed that yields an item wins. This is a crude
/// freshness heuristic, not a merge across feeds.
pub struct FeedFetcher<C: FeedClient> {
    registry: Arc<SubscriptionRegistry>,
    client: C,
}

impl<C: FeedClient> FeedFetcher<C> {
    pub fn new(registry: Arc<SubscriptionRegistry>, client: C) -> Self {
        Self { registry, client }
    }

    pub fn fetch_latest(&self, channel_id: &str) -> NotifeedResult<FeedItem> {
        // One registry read; the lock is released before any network call.
        let urls = self.registry.urls(channel_id);

        for url in urls {
            match self.client.fetch(&url) {
                Ok(feed) => {
                    if let Some(item) = feed.items.into_iter().next() {
                        return Ok(item);
                    }
                    tracing::debug!(url = %url, "Feed has no items, trying next");
                }
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Feed fetch failed, trying next");
                }
            }
        }

        Err(NotifeedError::NoItemsFound)
    }
}
