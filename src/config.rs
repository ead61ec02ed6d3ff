//! Server configuration.
//!
//! Loaded from environment variables (after `.env` is applied) with defaults
//! for everything, so a bare `cargo run` serves the built-in rooms.

use std::{collections::HashMap, env, path::PathBuf, time::Duration};

use thiserror::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

pub const DEFAULT_WEB_DIR: &str = "web";

pub const DEFAULT_SSE_KEEP_ALIVE_SECONDS: u64 = 15;

/// Updates buffered per room before a slow subscriber starts skipping.
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,

    /// Directory served under `/web`.
    pub web_dir: PathBuf,

    /// JSON room catalog; the built-in rooms are used when unset.
    pub rooms_file: Option<PathBuf>,

    pub sse_keep_alive: Duration,

    pub event_channel_capacity: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid SSE keep-alive configuration: {0}")]
    InvalidKeepAlive(String),

    #[error("Invalid event channel capacity: {0}")]
    InvalidChannelCapacity(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            web_dir: PathBuf::from(DEFAULT_WEB_DIR),
            rooms_file: None,
            sse_keep_alive: Duration::from_secs(DEFAULT_SSE_KEEP_ALIVE_SECONDS),
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let web_dir = vars
            .get("WEB_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WEB_DIR));

        let rooms_file = vars
            .get("ROOMS_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let sse_keep_alive = if let Some(value_str) = vars.get("SSE_KEEP_ALIVE_SECONDS") {
            let value: u64 = value_str.parse().map_err(|e| {
                ConfigError::InvalidKeepAlive(format!(
                    "SSE_KEEP_ALIVE_SECONDS must be a valid positive integer, got '{}': {}",
                    value_str, e
                ))
            })?;

            if value == 0 {
                return Err(ConfigError::InvalidKeepAlive(
                    "SSE_KEEP_ALIVE_SECONDS must be greater than 0".to_string(),
                ));
            }

            Duration::from_secs(value)
        } else {
            Duration::from_secs(DEFAULT_SSE_KEEP_ALIVE_SECONDS)
        };

        let event_channel_capacity = if let Some(value_str) = vars.get("EVENT_CHANNEL_CAPACITY") {
            let value: usize = value_str.parse().map_err(|e| {
                ConfigError::InvalidChannelCapacity(format!(
                    "EVENT_CHANNEL_CAPACITY must be a valid positive integer, got '{}': {}",
                    value_str, e
                ))
            })?;

            if value == 0 {
                return Err(ConfigError::InvalidChannelCapacity(
                    "EVENT_CHANNEL_CAPACITY must be greater than 0".to_string(),
                ));
            }

            value
        } else {
            DEFAULT_EVENT_CHANNEL_CAPACITY
        };

        Ok(Config {
            bind_address,
            web_dir,
            rooms_file,
            sse_keep_alive,
            event_channel_capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vars_defaults() {
        let config = Config::from_vars(&HashMap::new()).unwrap();

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.web_dir, PathBuf::from("web"));
        assert!(config.rooms_file.is_none());
        assert_eq!(config.sse_keep_alive, Duration::from_secs(15));
        assert_eq!(config.event_channel_capacity, 64);
    }

    #[test]
    fn test_from_vars_custom_values() {
        let vars = HashMap::from([
            ("BIND_ADDRESS".to_string(), "0.0.0.0:8080".to_string()),
            ("WEB_DIR".to_string(), "/srv/quiz/web".to_string()),
            ("ROOMS_FILE".to_string(), "rooms.json".to_string()),
            ("SSE_KEEP_ALIVE_SECONDS".to_string(), "5".to_string()),
            ("EVENT_CHANNEL_CAPACITY".to_string(), "8".to_string()),
        ]);

        let config = Config::from_vars(&vars).unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.web_dir, PathBuf::from("/srv/quiz/web"));
        assert_eq!(config.rooms_file, Some(PathBuf::from("rooms.json")));
        assert_eq!(config.sse_keep_alive, Duration::from_secs(5));
        assert_eq!(config.event_channel_capacity, 8);
    }

    #[test]
    fn test_blank_rooms_file_means_builtin() {
        let vars = HashMap::from([("ROOMS_FILE".to_string(), "  ".to_string())]);
        assert!(Config::from_vars(&vars).unwrap().rooms_file.is_none());
    }

    #[test]
    fn test_keep_alive_rejects_zero_and_garbage() {
        let zero = HashMap::from([("SSE_KEEP_ALIVE_SECONDS".to_string(), "0".to_string())]);
        assert!(matches!(
            Config::from_vars(&zero),
            Err(ConfigError::InvalidKeepAlive(_))
        ));

        let garbage = HashMap::from([("SSE_KEEP_ALIVE_SECONDS".to_string(), "soon".to_string())]);
        assert!(matches!(
            Config::from_vars(&garbage),
            Err(ConfigError::InvalidKeepAlive(_))
        ));
    }

    #[test]
    fn test_channel_capacity_rejects_zero() {
        let vars = HashMap::from([("EVENT_CHANNEL_CAPACITY".to_string(), "0".to_string())]);
        assert!(matches!(
            Config::from_vars(&vars),
            Err(ConfigError::InvalidChannelCapacity(_))
        ));
    }
}
