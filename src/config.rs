//! Configuration file parser for ~/.config/feedloom/config.toml.
//!
//! The config file is optional: a missing file yields `Config::default()`.
//! Unknown keys are accepted but logged, since they are usually typos.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::feed::FetchOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

/// Fetch settings for the command line.
///
/// Every field has a default, so any subset of keys may be given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of feeds fetched at the same time.
    pub max_concurrent_fetches: usize,

    /// Timeout for a single request, body included.
    pub request_timeout_secs: u64,

    /// Responses larger than this are rejected.
    pub max_feed_size_bytes: usize,

    /// Retries after the first attempt for 429, 5xx and truncated bodies.
    pub max_retries: u32,

    /// Delay before the first retry, doubled on each further retry.
    pub retry_base_delay_ms: u64,

    pub user_agent: String,

    /// Permit feeds on localhost and private address ranges.
    pub allow_private_networks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_fetch_options(&FetchOptions::default())
    }
}

impl Config {
    /// Maximum config file size (1 MiB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 7] = [
        "max_concurrent_fetches",
        "request_timeout_secs",
        "max_feed_size_bytes",
        "max_retries",
        "retry_base_delay_ms",
        "user_agent",
        "allow_private_networks",
    ];

    fn from_fetch_options(options: &FetchOptions) -> Self {
        Self {
            max_concurrent_fetches: options.max_concurrent,
            request_timeout_secs: options.timeout.as_secs(),
            max_feed_size_bytes: options.max_size,
            max_retries: options.max_retries,
            retry_base_delay_ms: u64::try_from(options.retry_base_delay.as_millis())
                .unwrap_or(u64::MAX),
            user_agent: options.user_agent.clone(),
            allow_private_networks: options.allow_private_networks,
        }
    }

    /// `$XDG_CONFIG_HOME/feedloom/config.toml`, falling back to
    /// `$HOME/.config/feedloom/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(base.join("feedloom").join("config.toml"))
    }

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML or wrong value types → `Err(ConfigError::Parse)`
    /// - Unknown keys → accepted, logged as a warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(content)?;
        tracing::info!(
            path = %path.display(),
            max_concurrent = config.max_concurrent_fetches,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Settings for [`crate::feed::fetch_all`].
    ///
    /// A concurrency of zero would never make progress, so it is raised to one.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            max_concurrent: self.max_concurrent_fetches.max(1),
            timeout: Duration::from_secs(self.request_timeout_secs),
            max_size: self.max_feed_size_bytes,
            max_retries: self.max_retries,
            retry_base_delay: Duration::from_millis(self.retry_base_delay_ms),
            user_agent: self.user_agent.clone(),
            allow_private_networks: self.allow_private_networks,
        }
    }
}
