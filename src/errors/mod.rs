use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifeedError {
    // Configuration errors
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Subscription errors
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // Fetch errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("No items found for any subscribed feed")]
    NoItemsFound,

    // Messaging errors
    #[error("Channel error: {0}")]
    Channel(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<channels::ChannelError> for NotifeedError {
    fn from(err: channels::ChannelError) -> Self {
        NotifeedError::Channel(err.to_string())
    }
}

pub type NotifeedResult<T> = Result<T, NotifeedError>;
