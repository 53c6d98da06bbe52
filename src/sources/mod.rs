pub mod traits;
pub mod rss_atom;

pub use traits::{FeedClient, ParsedFeed};
pub use rss_atom::HttpFeedClient;

#[cfg(test)]
pub use traits::MockFeedClient;
