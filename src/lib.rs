pub mod bot;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod messaging;
pub mod registry;
pub mod services;
pub mod sources;
