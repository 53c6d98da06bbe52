use std::collections::HashMap;
use std::time::Duration;

use channels::ChannelClient;

use crate::bot::CommandHandler;
use crate::errors::NotifeedResult;
use crate::messaging::MessageSink;

const COMMAND_POLL_INTERVAL: Duration = Duration::from_secs(3);
const READ_LIMIT: u32 = 50;

/// Foreground command loop: polls every Notebrook channel for messages newer
/// than the last seen id and hands them to the command handler.
pub struct Session<S: MessageSink> {
    client: ChannelClient,
    handler: CommandHandler<S>,
    // channel id -> id of the newest message already seen
    watermarks: HashMap<i64, i64>,
}

impl<S: MessageSink> Session<S> {
    pub fn new(client: ChannelClient, handler: CommandHandler<S>) -> Self {
        Self {
            client,
            handler,
            watermarks: HashMap::new(),
        }
    }

    /// Record the newest message id per channel so pre-existing history is
    /// never replayed as commands.
    fn prime(&mut self) -> NotifeedResult<()> {
        for channel in self.client.list_channels()? {
            let messages = self.client.read_messages(channel.id, Some(1), None)?;
            let newest = messages.last().map(|m| m.id).unwrap_or(0);
            self.watermarks.insert(channel.id, newest);
        }
        Ok(())
    }

    fn poll_once(&mut self) -> NotifeedResult<()> {
        for channel in self.client.list_channels()? {
            let after = match self.watermarks.get(&channel.id) {
                Some(id) => *id,
                None => {
                    // Channel appeared after startup: start from its current tip
                    let messages = self.client.read_messages(channel.id, Some(1), None)?;
                    let newest = messages.last().map(|m| m.id).unwrap_or(0);
                    self.watermarks.insert(channel.id, newest);
                    continue;
                }
            };

            let messages = self
                .client
                .read_messages(channel.id, Some(READ_LIMIT), Some(after))?;

            for message in messages {
                self.watermarks.insert(channel.id, message.id);
                self.handler.handle(&channel.name, &message.content);
            }
        }
        Ok(())
    }

    /// Run forever. The initial sweep is part of session startup and its
    /// failure is fatal; after that, poll errors are logged and retried on the
    /// next cycle.
    pub fn run(mut self) -> NotifeedResult<()> {
        self.prime()?;
        tracing::info!("Command session started");

        loop {
            std::thread::sleep(COMMAND_POLL_INTERVAL);
            if let Err(e) = self.poll_once() {
                tracing::warn!(error = %e, "Command poll failed, retrying next cycle");
            }
        }
    }
}
