use clap::Parser;

#[derive(Parser)]
#[command(name = "notifeed")]
#[command(about = "Channel RSS subscription bot with Notebrook notifications")]
#[command(version)]
pub struct Cli {
    /// Run a single fetch+dispatch tick over all subscribed channels and exit
    #[arg(long)]
    pub once: bool,

    /// Dry run - fetch feeds but print notifications instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}
