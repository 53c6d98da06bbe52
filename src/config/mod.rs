use std::time::Duration;

use crate::errors::{NotifeedError, NotifeedResult};
use crate::registry::{parse_duration, DEFAULT_POLL_INTERVAL};

#[derive(Debug, Clone)]
pub struct Config {
    pub notebrook_url: String,
    pub notebrook_token: String,
    pub command_prefix: String,
    pub poll_interval: Duration,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NotifeedResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let notebrook_url = std::env::var("NOTEBROOK_URL")
            .map_err(|_| NotifeedError::MissingEnvVar("NOTEBROOK_URL".to_string()))?;

        let notebrook_token = std::env::var("NOTEBROOK_TOKEN")
            .map_err(|_| NotifeedError::MissingEnvVar("NOTEBROOK_TOKEN".to_string()))?;

        let command_prefix =
            std::env::var("NOTIFEED_PREFIX").unwrap_or_else(|_| "/rss".to_string());

        let poll_interval = match std::env::var("NOTIFEED_INTERVAL") {
            Ok(raw) => parse_duration(&raw)?,
            Err(_) => DEFAULT_POLL_INTERVAL,
        };

        Ok(Self {
            notebrook_url,
            notebrook_token,
            command_prefix,
            poll_interval,
        })
    }
}
