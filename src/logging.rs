use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file path.
pub const LOG_ENV_VAR: &str = "POKEDEX_LOG";

/// Default stderr filter for headless commands. Synchronizer failures are
/// already reported as the command's error, so their warnings are muted.
pub const HEADLESS_FILTER: &str = "warn,pokedex::sync=error";

/// Where log output goes when no log file is configured.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogMode {
    /// Full-screen browser: stay silent so the display is not corrupted.
    Interactive,
    /// `list` / `show`: warnings and errors go to stderr.
    Headless,
}

/// Initialize tracing.
///
/// With `POKEDEX_LOG` set, logs go to `{path}.{timestamp}.{pid}` so that
/// concurrent instances never share a file. The filter comes from `RUST_LOG`
/// and defaults to `info` for files and [`HEADLESS_FILTER`] for stderr.
pub fn init_tracing(mode: LogMode) {
    if let Some(log_path) = std::env::var(LOG_ENV_VAR).ok().filter(|p| !p.is_empty()) {
        let unique_path = unique_log_path(&log_path);
        match std::fs::File::create(&unique_path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true);
                tracing_subscriber::registry()
                    .with(filter_or("info"))
                    .with(file_layer)
                    .init();
                return;
            }
            Err(err) => {
                eprintln!("Warning: Failed to create log file {unique_path}: {err}");
            }
        }
    }

    if mode == LogMode::Headless {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time();
        tracing_subscriber::registry()
            .with(filter_or(HEADLESS_FILTER))
            .with(stderr_layer)
            .init();
    }
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{base}.{timestamp}.{pid}")
}
