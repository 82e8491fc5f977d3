//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path to the persisted item collection (a single JSON file)
    pub data_path: PathBuf,
    /// Statistics cache TTL in seconds
    pub stats_ttl: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `DATA_PATH` - Item collection file (default: data/items.json)
    /// - `STATS_TTL` - Stats cache TTL in seconds (default: 300)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/items.json")),
            stats_ttl: env::var("STATS_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3001,
            data_path: PathBuf::from("data/items.json"),
            stats_ttl: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3001);
        assert_eq!(config.data_path, PathBuf::from("data/items.json"));
        assert_eq!(config.stats_ttl, 300);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("DATA_PATH");
        env::remove_var("STATS_TTL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3001);
        assert_eq!(config.data_path, PathBuf::from("data/items.json"));
        assert_eq!(config.stats_ttl, 300);
    }
}
