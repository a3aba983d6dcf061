//! Thread-safe configuration storage.
//!
//! In-memory config container shared between the UI loop and the
//! operation tasks it spawns.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Command-line values that win over the file, on load and on every reload.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub channel: Option<String>,
}

impl ConfigOverrides {
    fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(channel) = &self.channel {
            config.ui.channel = Some(channel.clone());
        }
    }
}

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
    overrides: ConfigOverrides,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
            overrides: ConfigOverrides::default(),
        }
    }

    /// Load `path`, apply `overrides` and validate the result.
    pub fn load(path: PathBuf, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let config = Self::read(&path, &overrides)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(config)),
            path,
            overrides,
        })
    }

    fn read(path: &Path, overrides: &ConfigOverrides) -> Result<Config, ConfigError> {
        let mut config = Config::load_from(path)?;
        overrides.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Reload config from the file, re-applying the command-line overrides.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Self::read(&self.path, &self.overrides)?;
        *self.inner.write() = config;
        Ok(())
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
