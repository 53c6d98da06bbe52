pub mod interval;

pub use interval::parse_duration;

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::errors::NotifeedResult;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30 * 60);

struct Inner {
    // channel id -> feed URLs in subscription order, unique per channel
    subscriptions: HashMap<String, Vec<String>>,
    poll_interval: Duration,
}

/// Shared store of per-channel feed subscriptions and the process-wide poll
/// interval. One coarse lock covers both; no I/O happens under it.
pub struct SubscriptionRegistry {
    inner: RwLock<Inner>,
}

impl SubscriptionRegistry {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            inner: RwLock::new(Inner {
                subscriptions: HashMap::new(),
                poll_interval,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Append `feed_url` to the channel's list. Returns false if the URL was
    /// already subscribed; the membership check runs under the write lock so
    /// racing adds cannot both insert.
    pub fn add(&self, channel_id: &str, feed_url: &str) -> bool {
        let mut inner = self.write();
        let feeds = inner
            .subscriptions
            .entry(channel_id.to_string())
            .or_default();
        if feeds.iter().any(|stored| stored == feed_url) {
            return false;
        }
        feeds.push(feed_url.to_string());
        true
    }

    /// Remove `feed_url` from the channel's list. Returns false if it was not
    /// subscribed; removal of an absent URL is a no-op, not an error.
    pub fn remove(&self, channel_id: &str, feed_url: &str) -> bool {
        let mut inner = self.write();
        match inner.subscriptions.get_mut(channel_id) {
            Some(feeds) => {
                let before = feeds.len();
                feeds.retain(|stored| stored != feed_url);
                feeds.len() != before
            }
            None => false,
        }
    }

    pub fn has(&self, channel_id: &str, feed_url: &str) -> bool {
        self.read()
            .subscriptions
            .get(channel_id)
            .map(|feeds| feeds.iter().any(|stored| stored == feed_url))
            .unwrap_or(false)
    }

    /// Human-readable summary of the channel's subscriptions.
    pub fn list(&self, channel_id: &str) -> String {
        let inner = self.read();
        match inner.subscriptions.get(channel_id) {
            Some(feeds) if !feeds.is_empty() => {
                format!("Subscribed feeds:\n{}", feeds.join("\n"))
            }
            _ => "No RSS feeds subscribed.".to_string(),
        }
    }

    /// Snapshot of the channel's URLs in subscription order.
    pub fn urls(&self, channel_id: &str) -> Vec<String> {
        self.read()
            .subscriptions
            .get(channel_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of every channel that has at least one subscription.
    pub fn channels(&self) -> Vec<String> {
        self.read()
            .subscriptions
            .iter()
            .filter(|(_, feeds)| !feeds.is_empty())
            .map(|(channel, _)| channel.clone())
            .collect()
    }

    pub fn poll_interval(&self) -> Duration {
        self.read().poll_interval
    }

    /// Replace the poll interval. Fails with `InvalidDuration` on a malformed
    /// string and leaves the current interval untouched.
    pub fn set_poll_interval(&self, duration_str: &str) -> NotifeedResult<Duration> {
        let duration = parse_duration(duration_str)?;
        self.write().poll_interval = duration;
        Ok(duration)
    }
}

impl Default for SubscriptionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_add_then_list_contains_url_once() {
        let registry = SubscriptionRegistry::default();

        assert!(registry.add("chan", "https://example.com/feed.xml"));
        assert!(!registry.add("chan", "https://example.com/feed.xml"));

        let listing = registry.list("chan");
        assert_eq!(listing.matches("https://example.com/feed.xml").count(), 1);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let registry = SubscriptionRegistry::default();

        registry.add("chan", "https://a.example/feed");
        registry.add("chan", "https://b.example/feed");
        registry.add("chan", "https://c.example/feed");

        assert_eq!(
            registry.urls("chan"),
            vec![
                "https://a.example/feed",
                "https://b.example/feed",
                "https://c.example/feed"
            ]
        );
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let registry = SubscriptionRegistry::default();
        registry.add("chan", "https://a.example/feed");

        assert!(!registry.remove("chan", "https://b.example/feed"));
        assert!(!registry.remove("other", "https://a.example/feed"));
        assert_eq!(registry.urls("chan").len(), 1);
    }

    #[test]
    fn test_remove_existing() {
        let registry = SubscriptionRegistry::default();
        registry.add("chan", "https://a.example/feed");

        assert!(registry.remove("chan", "https://a.example/feed"));
        assert!(!registry.has("chan", "https://a.example/feed"));
        assert_eq!(registry.list("chan"), "No RSS feeds subscribed.");
    }

    #[test]
    fn test_set_poll_interval() {
        let registry = SubscriptionRegistry::default();

        registry.set_poll_interval("10m").unwrap();
        assert_eq!(registry.poll_interval(), Duration::from_secs(600));
    }

    #[test]
    fn test_invalid_interval_leaves_previous() {
        let registry = SubscriptionRegistry::default();
        registry.set_poll_interval("10m").unwrap();

        let err = registry.set_poll_interval("not-a-duration");
        assert!(matches!(
            err,
            Err(crate::errors::NotifeedError::InvalidDuration(_))
        ));
        assert_eq!(registry.poll_interval(), Duration::from_secs(600));
    }

    #[test]
    fn test_channels_skips_empty_lists() {
        let registry = SubscriptionRegistry::default();
        registry.add("a", "https://a.example/feed");
        registry.add("b", "https://b.example/feed");
        registry.remove("b", "https://b.example/feed");

        assert_eq!(registry.channels(), vec!["a".to_string()]);
    }

    #[test]
    fn test_concurrent_adds_never_duplicate() {
        let registry = Arc::new(SubscriptionRegistry::default());
        let mut handles = Vec::new();

        for i in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                for n in 0..50 {
                    registry.add("chan", &format!("https://example.com/{}", n));
                    registry.add("chan", "https://contested.example/feed");
                    let _ = registry.has("chan", "https://contested.example/feed");
                    if i == 0 {
                        let _ = registry.list("chan");
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let urls = registry.urls("chan");
        assert_eq!(
            urls.iter()
                .filter(|u| *u == "https://contested.example/feed")
                .count(),
            1
        );
        // 50 distinct URLs plus the contested one, no losses, no duplicates
        assert_eq!(urls.len(), 51);
    }
}
