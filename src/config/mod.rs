//! Configuration loading and storage.
//!
//! The config file lives at `~/.config/explorer-tui/config.toml`. A missing
//! file yields `Config::default()`; CLI flags are applied on top after load.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::{ConfigOverrides, ConfigStore};
pub use types::{ApiConfig, Config, UiConfig};
