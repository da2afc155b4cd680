//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_MAX_ENTRIES;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of avatars the cache can hold
    pub max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the avatar lookup service; the account name is appended as a path segment
    pub avatar_api_url: String,
    /// Value served for accounts without an avatar
    pub avatar_placeholder: String,
    /// Timeout applied to each avatar lookup, in milliseconds
    pub fetch_timeout_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `AVATAR_API_URL` - Avatar service base URL (default: http://localhost:8888/v1/avatars)
    /// - `AVATAR_PLACEHOLDER` - Placeholder avatar path (default: /images/default-avatar.png)
    /// - `FETCH_TIMEOUT_MS` - Avatar lookup timeout (default: 5000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            avatar_api_url: env::var("AVATAR_API_URL").unwrap_or(defaults.avatar_api_url),
            avatar_placeholder: env::var("AVATAR_PLACEHOLDER")
                .unwrap_or(defaults.avatar_placeholder),
            fetch_timeout_ms: parse_var("FETCH_TIMEOUT_MS").unwrap_or(defaults.fetch_timeout_ms),
        }
    }

    /// Avatar lookup timeout as a Duration.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            server_port: 3000,
            avatar_api_url: "http://localhost:8888/v1/avatars".to_string(),
            avatar_placeholder: "/images/default-avatar.png".to_string(),
            fetch_timeout_ms: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.avatar_placeholder, "/images/default-avatar.png");
        assert_eq!(config.fetch_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("MAX_ENTRIES");
        env::remove_var("SERVER_PORT");
        env::remove_var("AVATAR_API_URL");
        env::remove_var("AVATAR_PLACEHOLDER");
        env::remove_var("FETCH_TIMEOUT_MS");

        let config = Config::from_env();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.avatar_api_url, "http://localhost:8888/v1/avatars");
        assert_eq!(config.fetch_timeout_ms, 5000);
    }
}
