use channels::ChannelClient;

use crate::errors::NotifeedResult;

/// Outbound message boundary. The scheduler and the command handler only ever
/// talk to the platform through this, so tests can swap in a mock.
#[cfg_attr(test, mockall::automock)]
pub trait MessageSink: Send + Sync {
    fn send(&self, channel_id: &str, text: &str) -> NotifeedResult<()>;
}

/// Notebrook-backed sink.
pub struct ChannelSink {
    client: ChannelClient,
}

impl ChannelSink {
    pub fn new(client: ChannelClient) -> Self {
        Self { client }
    }
}

impl MessageSink for ChannelSink {
    fn send(&self, channel_id: &str, text: &str) -> NotifeedResult<()> {
        self.client.send_message(channel_id, text)?;
        Ok(())
    }
}

impl<S: MessageSink + ?Sized> MessageSink for std::sync::Arc<S> {
    fn send(&self, channel_id: &str, text: &str) -> NotifeedResult<()> {
        (**self).send(channel_id, text)
    }
}

/// Prints messages instead of delivering them. Backs `--dry-run`.
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn send(&self, channel_id: &str, text: &str) -> NotifeedResult<()> {
        println!("[{}] {}", channel_id, text);
        Ok(())
    }
}
