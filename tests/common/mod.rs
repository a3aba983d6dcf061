//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use explorer_tui::api::RestClient;
use explorer_tui::config::{ApiConfig, Config, ConfigStore};
use explorer_tui::store::{Action, Dispatch};
use explorer_tui::tables::Operations;
use parking_lot::Mutex;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL nothing listens on, so every request is refused.
pub fn refused_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Operations backed by a real HTTP client pointed at `base_url`.
pub fn operations_for(base_url: &str) -> Operations {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    let client = RestClient::new(&api).expect("Failed to build client");
    Operations::new(Arc::new(client))
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn default_config_store() -> ConfigStore {
    ConfigStore::new(Config::default(), PathBuf::from("/tmp/explorer-tui-test.toml"))
}

/// Dispatch target that records every action.
#[derive(Default)]
pub struct Recorder(Mutex<Vec<Action>>);

impl Recorder {
    pub fn actions(&self) -> Vec<Action> {
        self.0.lock().clone()
    }
}

impl Dispatch for Recorder {
    fn dispatch(&self, action: Action) {
        self.0.lock().push(action);
    }
}

// -- App helpers --------------------------------------------------------------

pub fn press_key(code: crossterm::event::KeyCode) -> crossterm::event::KeyEvent {
    crossterm::event::KeyEvent::new(code, crossterm::event::KeyModifiers::NONE)
}

/// App wired to `base_url`, spawning operations on the current runtime.
pub fn make_app(base_url: &str) -> explorer_tui::ui::app::App {
    explorer_tui::ui::app::App::new(
        default_config_store(),
        explorer_tui::store::Store::new(),
        operations_for(base_url),
        tokio::runtime::Handle::current(),
    )
}

/// Poll `condition` until it holds or two seconds pass.
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < std::time::Duration::from_secs(2) {
        if condition() {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    condition()
}
