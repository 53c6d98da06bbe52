pub mod fetch_service;
pub mod notification_service;
pub mod scheduler;

pub use fetch_service::FeedFetcher;
pub use notification_service::Dispatcher;
pub use scheduler::Scheduler;
