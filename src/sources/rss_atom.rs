use feed_rs::parser;
use reqwest::blocking::Client;

use crate::domain::FeedItem;
use crate::errors::{NotifeedError, NotifeedResult};
use crate::sources::traits::{FeedClient, ParsedFeed};

/// Blocking RSS/Atom client. The 30s request timeout is the only deadline the
/// fetch path carries.
pub struct HttpFeedClient {
    client: Client,
}

impl HttpFeedClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn parse_bytes(bytes: &[u8]) -> NotifeedResult<ParsedFeed> {
        let parsed = parser::parse(bytes).map_err(|e| NotifeedError::FeedParse(e.to_string()))?;

        let title = parsed.title.map(|t| t.content);

        let items: Vec<FeedItem> = parsed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| t.content)
                    .unwrap_or_else(|| "Untitled".to_string());

                let link = entry.links.into_iter().next().map(|l| l.href);

                let published = entry.published.or(entry.updated);

                FeedItem::new(title)
                    .with_link(link)
                    .with_published(published)
            })
            .collect();

        Ok(ParsedFeed { title, items })
    }
}

impl Default for HttpFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedClient for HttpFeedClient {
    fn fetch(&self, url: &str) -> NotifeedResult<ParsedFeed> {
        let response = self.client.get(url).send()?;
        let bytes = response.bytes()?;
        Self::parse_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sample RSS feed (based on Rust Blog format)
    const SAMPLE_RSS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Rust Blog</title>
    <link>https://blog.rust-lang.org/</link>
    <description>Empowering everyone to build reliable and efficient software.</description>
    <item>
      <title>Announcing Rust 1.75.0</title>
      <link>https://blog.rust-lang.org/2023/12/28/Rust-1.75.0.html</link>
      <pubDate>Thu, 28 Dec 2023 00:00:00 +0000</pubDate>
      <guid>https://blog.rust-lang.org/2023/12/28/Rust-1.75.0.html</guid>
    </item>
    <item>
      <title>Rust 2024 Call for Testing</title>
      <link>https://blog.rust-lang.org/2024/01/10/Rust-2024-CFT.html</link>
      <pubDate>Wed, 10 Jan 2024 00:00:00 +0000</pubDate>
      <guid>https://blog.rust-lang.org/2024/01/10/Rust-2024-CFT.html</guid>
    </item>
  </channel>
</rss>"#;

    // Sample Atom feed
    const SAMPLE_ATOM: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Tech Blog</title>
  <link href="https://example.com/"/>
  <id>https://example.com/feed.atom</id>
  <updated>2024-01-15T12:00:00Z</updated>
  <entry>
    <title>Understanding WebAssembly</title>
    <link href="https://example.com/posts/wasm-intro"/>
    <id>https://example.com/posts/wasm-intro</id>
    <updated>2024-01-15T12:00:00Z</updated>
  </entry>
</feed>"#;

    const EMPTY_RSS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Quiet Blog</title>
    <link>https://quiet.example/</link>
    <description>Nothing here yet.</description>
  </channel>
</rss>"#;

    #[test]
    fn test_rss_items_in_feed_order() {
        let feed = HttpFeedClient::parse_bytes(SAMPLE_RSS).unwrap();

        assert_eq!(feed.title.as_deref(), Some("Rust Blog"));
        assert_eq!(feed.items.len(), 2);
        assert_eq!(feed.items[0].title, "Announcing Rust 1.75.0");
        assert_eq!(
            feed.items[0].link.as_deref(),
            Some("https://blog.rust-lang.org/2023/12/28/Rust-1.75.0.html")
        );
        assert!(feed.items[0].published.is_some());
        assert_eq!(feed.items[1].title, "Rust 2024 Call for Testing");
    }

    #[test]
    fn test_atom_entry_mapped() {
        let feed = HttpFeedClient::parse_bytes(SAMPLE_ATOM).unwrap();

        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].title, "Understanding WebAssembly");
        assert_eq!(
            feed.items[0].link.as_deref(),
            Some("https://example.com/posts/wasm-intro")
        );
        // Atom has no <published>, falls back to <updated>
        assert!(feed.items[0].published.is_some());
    }

    #[test]
    fn test_feed_with_no_items() {
        let feed = HttpFeedClient::parse_bytes(EMPTY_RSS).unwrap();
        assert!(feed.items.is_empty());
    }

    #[test]
    fn test_garbage_fails_to_parse() {
        assert!(matches!(
            HttpFeedClient::parse_bytes(b"not xml at all"),
            Err(NotifeedError::FeedParse(_))
        ));
    }
}
