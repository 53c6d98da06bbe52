use crate::domain::{FeedItem, Notification};
use crate::messaging::MessageSink;

/// Delivers discovered items to their channel. Fire-and-forget: a failed send
/// is logged at error level and never surfaces to the tick.
pub struct Dispatcher<S: MessageSink> {
    sink: S,
}

impl<S: MessageSink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn notify(&self, channel_id: &str, item: &FeedItem) {
        let message = Notification::from_item(item).format();

        if let Err(e) = self.sink.send(channel_id, &message) {
            tracing::error!(channel = %channel_id, error = %e, "Failed to deliver notification");
        }
    }
}
