use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for TUI mode.
pub const LOG_ENV: &str = "EXPLORER_TUI_LOG";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// File logging for TUI mode.
///
/// Disabled unless `EXPLORER_TUI_LOG` is set, since stdout belongs to the
/// terminal UI. Each run writes `{path}.{timestamp}.{pid}` so concurrent
/// instances never share a file.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(file_layer)
        .init();
}

/// Stderr logging for headless commands. Stdout carries the JSON result.
pub fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_carries_pid_suffix() {
        let path = unique_log_path("/tmp/explorer.log");
        assert!(path.starts_with("/tmp/explorer.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
