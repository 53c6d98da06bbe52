pub mod item;
pub mod notification;

pub use item::FeedItem;
pub use notification::Notification;
