use std::sync::Arc;
use std::thread::JoinHandle;

use crate::errors::{NotifeedError, NotifeedResult};
use crate::messaging::MessageSink;
use crate::registry::SubscriptionRegistry;
use crate::services::{Dispatcher, FeedFetcher};
use crate::sources::FeedClient;

/// Recurring fetch+dispatch cycle over every subscribed channel. Runs on one
/// worker thread, so a slow tick delays the next one instead of overlapping it.
pub struct Scheduler<C: FeedClient, S: MessageSink> {
    registry: Arc<SubscriptionRegistry>,
    fetcher: FeedFetcher<C>,
    dispatcher: Dispatcher<S>,
}

impl<C: FeedClient, S: MessageSink> Scheduler<C, S> {
    pub fn new(registry: Arc<SubscriptionRegistry>, client: C, sink: S) -> Self {
        Self {
            fetcher: FeedFetcher::new(Arc::clone(&registry), client),
            dispatcher: Dispatcher::new(sink),
            registry,
        }
    }

    /// One full cycle: snapshot the channel set, then fetch and dispatch per
    /// channel. A channel that yields nothing is skipped; nothing here aborts
    /// the cycle.
    pub fn run_tick(&self) {
        let channels = self.registry.channels();
        tracing::debug!(channels = channels.len(), "Tick started");

        for channel in channels {
            match self.fetcher.fetch_latest(&channel) {
                Ok(item) => self.dispatcher.notify(&channel, &item),
                Err(NotifeedError::NoItemsFound) => {
                    tracing::debug!(channel = %channel, "No items this tick");
                }
                Err(e) => {
                    tracing::warn!(channel = %channel, error = %e, "Fetch cycle failed for channel");
                }
            }
        }
    }
}

impl<C: FeedClient + 'static, S: MessageSink + 'static> Scheduler<C, S> {
    /// Spawn the tick loop. The interval is re-read from the registry before
    /// every sleep, so `update_timeout` takes effect on the next cycle without
    /// a restart. Runs until process exit; there is no stop path.
    pub fn start(self) -> NotifeedResult<JoinHandle<()>> {
        let handle = std::thread::Builder::new()
            .name("scheduler".to_string())
            .spawn(move || loop {
                let interval = self.registry.poll_interval();
                std::thread::sleep(interval);
                self.run_tick();
            })?;

        Ok(handle)
    }
}
