pub mod commands;
pub mod session;

pub use commands::{ChatCommand, CommandHandler, Parsed};
pub use session::Session;
