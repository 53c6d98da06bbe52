use std::sync::Arc;

use channels::ChannelClient;
use clap::Parser;

use notifeed::bot::{CommandHandler, Session};
use notifeed::cli::Cli;
use notifeed::config::Config;
use notifeed::errors::NotifeedResult;
use notifeed::messaging::{ChannelSink, StdoutSink};
use notifeed::registry::SubscriptionRegistry;
use notifeed::services::Scheduler;
use notifeed::sources::HttpFeedClient;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> NotifeedResult<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("notifeed=info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let registry = Arc::new(SubscriptionRegistry::new(config.poll_interval));

    // Dry run: one tick, notifications printed instead of sent
    if cli.dry_run {
        let scheduler = Scheduler::new(registry, HttpFeedClient::new(), StdoutSink);
        scheduler.run_tick();
        return Ok(());
    }

    let sink = Arc::new(ChannelSink::new(ChannelClient::new(
        &config.notebrook_url,
        &config.notebrook_token,
    )?));

    let scheduler = Scheduler::new(
        Arc::clone(&registry),
        HttpFeedClient::new(),
        Arc::clone(&sink),
    );

    if cli.once {
        scheduler.run_tick();
        return Ok(());
    }

    let _scheduler = scheduler.start()?;

    let handler = CommandHandler::new(registry, sink, config.command_prefix.clone());
    let session = Session::new(
        ChannelClient::new(&config.notebrook_url, &config.notebrook_token)?,
        handler,
    );

    tracing::info!(
        interval = ?config.poll_interval,
        prefix = %config.command_prefix,
        "notifeed started"
    );

    session.run()
}
