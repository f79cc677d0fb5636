//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the backing Redis instance
    pub redis_url: String,
    /// Whether the binary flushes the backing namespace at startup.
    /// Flushing is destructive and never implicit; this flag is the only
    /// way the walkthrough binary opts in.
    pub reset_on_startup: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Backing store URL (default: `redis://127.0.0.1:6379/`)
    /// - `RESET_ON_STARTUP` - Flush the namespace at startup (default: false)
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379/".to_string()),
            reset_on_startup: env::var("RESET_ON_STARTUP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379/".to_string(),
            reset_on_startup: false,
        }
    }
}
