//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Principal allowed to change the cache capacity
    pub admin_principal: String,
    /// Initial maximum number of cache entries
    pub max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Expired-record purge interval in seconds, 0 disables the task
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ADMIN_PRINCIPAL` - Admin identity (default: deployer)
    /// - `MAX_ENTRIES` - Initial cache capacity (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Purge frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            admin_principal: env::var("ADMIN_PRINCIPAL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.admin_principal),
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_principal: "deployer".to_string(),
            max_entries: 1000,
            server_port: 3000,
            cleanup_interval: 1,
        }
    }
}
