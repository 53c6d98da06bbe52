use crate::domain::FeedItem;
use crate::errors::NotifeedResult;

/// One fetched-and-parsed feed, items in the feed's own order.
#[derive(Debug, Clone)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub items: Vec<FeedItem>,
}

#[cfg_attr(test, mockall::automock)]
pub trait FeedClient: Send + Sync {
    /// Fetch a feed URL and parse it into items.
    fn fetch(&self, url: &str) -> NotifeedResult<ParsedFeed>;
}
