use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Explorer backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the explorer REST API (e.g., "http://127.0.0.1:8080").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds, enforced by the HTTP client.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Dashboard behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Channel selected at startup. When unset, the first channel
    /// reported by `/api/channels/info` is used.
    #[serde(default)]
    pub channel: Option<String>,
    /// Seconds between automatic refreshes of the visible tables (0 disables).
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
    /// Event loop tick in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_refresh_interval() -> u64 {
    60
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            channel: None,
            refresh_interval_seconds: default_refresh_interval(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds as u64)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds as u64)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// `None` when periodic refresh is disabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_interval_seconds > 0)
            .then(|| Duration::from_secs(self.refresh_interval_seconds))
    }
}
