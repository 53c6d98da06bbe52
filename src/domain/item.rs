use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one feed entry, produced by a fetch and discarded after dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
}

impl FeedItem {
    pub fn new(title: String) -> Self {
        Self {
            title,
            link: None,
            published: None,
        }
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn with_published(mut self, published: Option<DateTime<Utc>>) -> Self {
        self.published = published;
        self
    }
}
