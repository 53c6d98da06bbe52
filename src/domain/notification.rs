use chrono::{DateTime, Utc};

use super::FeedItem;

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn from_item(item: &FeedItem) -> Self {
        Self {
            title: item.title.clone(),
            link: item.link.clone(),
            published: item.published,
        }
    }

    /// Format: "{title} {link} ({date})", dropping the parts that are absent
    pub fn format(&self) -> String {
        let mut message = self.title.clone();

        if let Some(link) = &self.link {
            message.push(' ');
            message.push_str(link);
        }

        if let Some(published) = &self.published {
            message.push_str(&format!(" ({})", published.format("%Y-%m-%d")));
        }

        message
    }
}
