use std::sync::Arc;

use url::Url;

use crate::messaging::MessageSink;
use crate::registry::SubscriptionRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Add { url: String },
    Remove { url: String },
    List,
    UpdateTimeout { duration: String },
}

/// Outcome of parsing one inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Command(ChatCommand),
    /// Malformed invocation; reply with this and mutate nothing.
    Usage(String),
    /// Unknown verb. Ignored without a reply.
    Ignored,
    /// Not prefixed; ordinary chatter.
    NotACommand,
}

/// Parse a whitespace-delimited `<prefix> <verb> [arg]` line.
pub fn parse(prefix: &str, content: &str) -> Parsed {
    let mut fields = content.split_whitespace();

    match fields.next() {
        Some(first) if first == prefix => {}
        _ => return Parsed::NotACommand,
    }

    let verb = match fields.next() {
        Some(verb) => verb,
        None => {
            return Parsed::Usage(format!(
                "Usage: {} <add|remove|list|update_timeout> [url|duration]",
                prefix
            ))
        }
    };

    match verb {
        "add" => match fields.next() {
            Some(url) => Parsed::Command(ChatCommand::Add {
                url: url.to_string(),
            }),
            None => Parsed::Usage("Please provide a feed URL to add".to_string()),
        },
        "remove" => match fields.next() {
            Some(url) => Parsed::Command(ChatCommand::Remove {
                url: url.to_string(),
            }),
            None => Parsed::Usage("Please provide a feed URL to remove".to_string()),
        },
        "list" => Parsed::Command(ChatCommand::List),
        "update_timeout" => match fields.next() {
            Some(duration) => Parsed::Command(ChatCommand::UpdateTimeout {
                duration: duration.to_string(),
            }),
            None => Parsed::Usage(format!("Usage: {} update_timeout <10m|1h|etc>", prefix)),
        },
        _ => Parsed::Ignored,
    }
}

/// Applies chat commands to the registry and replies through the sink.
pub struct CommandHandler<S: MessageSink> {
    registry: Arc<SubscriptionRegistry>,
    sink: S,
    prefix: String,
}

impl<S: MessageSink> CommandHandler<S> {
    pub fn new(registry: Arc<SubscriptionRegistry>, sink: S, prefix: String) -> Self {
        Self {
            registry,
            sink,
            prefix,
        }
    }

    pub fn handle(&self, channel_id: &str, content: &str) {
        let command = match parse(&self.prefix, content) {
            Parsed::Command(command) => command,
            Parsed::Usage(message) => {
                self.reply(channel_id, &message);
                return;
            }
            Parsed::Ignored | Parsed::NotACommand => return,
        };

        match command {
            ChatCommand::Add { url } => {
                if Url::parse(&url).is_err() {
                    self.reply(channel_id, "Invalid feed URL.");
                } else if self.registry.add(channel_id, &url) {
                    self.reply(channel_id, "Feed added.");
                } else {
                    self.reply(channel_id, "URL already exists.");
                }
            }
            ChatCommand::Remove { url } => {
                if self.registry.remove(channel_id, &url) {
                    self.reply(channel_id, "Feed removed.");
                } else {
                    self.reply(channel_id, "URL is not subscribed.");
                }
            }
            ChatCommand::List => {
                let listing = self.registry.list(channel_id);
                self.reply(channel_id, &listing);
            }
            ChatCommand::UpdateTimeout { duration } => match self.registry.set_poll_interval(&duration) {
                Ok(_) => self.reply(channel_id, &format!("Timeout updated to {}", duration)),
                Err(e) => self.reply(channel_id, &format!("Invalid timeout format: {}", e)),
            },
        }
    }

    fn reply(&self, channel_id: &str, text: &str) {
        if let Err(e) = self.sink.send(channel_id, text) {
            tracing::error!(channel = %channel_id, error = %e, "Failed to send reply");
        }
    }
}
