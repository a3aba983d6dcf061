//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{Config, ConfigError, ConfigOverrides, ConfigStore};

#[derive(Debug, Parser)]
#[command(name = "explorer-tui", version, about = "Terminal dashboard for a blockchain explorer API")]
pub struct Cli {
    /// Config file (default: ~/.config/explorer-tui/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the explorer API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Channel to open
    #[arg(long, global = true, value_name = "NAME")]
    pub channel: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one resource and print it as JSON
    Fetch(FetchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// Resource to fetch
    #[arg(value_enum)]
    pub resource: Resource,

    /// Block list offset
    #[arg(long, default_value_t = 0)]
    pub offset: u64,

    /// Transaction id, required for `transaction`
    #[arg(long, value_name = "ID")]
    pub tx: Option<String>,

    /// Transaction list lower bound
    #[arg(long, default_value_t = 0)]
    pub from: u64,

    /// Transaction list upper bound
    #[arg(long, default_value_t = 0)]
    pub to: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Blocks,
    Chaincodes,
    Channels,
    Peers,
    Transaction,
    Transactions,
}

impl Resource {
    /// True when the endpoint is scoped to a channel.
    pub fn needs_channel(self) -> bool {
        !matches!(self, Resource::Channels)
    }
}

impl Cli {
    /// Load the config file and apply flag overrides on top.
    pub fn load_config(&self) -> Result<ConfigStore, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let overrides = ConfigOverrides {
            base_url: self.base_url.clone(),
            channel: self.channel.clone(),
        };
        ConfigStore::load(path, overrides)
    }
}
