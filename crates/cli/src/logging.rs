//! Tracing setup for the CLI: a stderr layer plus an optional file layer.

use pelipost_core::config::types::LoggingConfig;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static FILE_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the global subscriber from the `[logging]` settings.
///
/// `RUST_LOG` takes precedence over the configured levels. An unknown level
/// name falls back to `info` for stderr and `debug` for the file.
pub fn init(cfg: &LoggingConfig) {
    let stderr_level = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter(stderr_level));

    let file_layer = cfg.file.as_deref().map(|path| {
        let level = cfg
            .file_level
            .as_deref()
            .and_then(parse_level)
            .or_else(|| parse_level(&cfg.level))
            .unwrap_or(LevelFilter::DEBUG);
        fmt::layer()
            .with_writer(open_log_file(path))
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter(level))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

/// Flush and stop the file writer, if any.
pub fn shutdown() {
    if let Ok(mut guard) = FILE_GUARD.lock() {
        guard.take();
    }
}

fn env_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(default.into()).from_env_lossy()
}

fn open_log_file(path: &Path) -> NonBlocking {
    let file = OpenOptions::new().create(true).append(true).open(path).unwrap_or_else(|e| {
        eprintln!("Failed to open log file {}: {}", path.display(), e);
        std::process::exit(1);
    });

    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut slot) = FILE_GUARD.lock() {
        *slot = Some(guard);
    }
    writer
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level("ERROR"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("Warning"), Some(LevelFilter::WARN));
        assert_eq!(parse_level(" debug "), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
    }

    #[test]
    fn unknown_level_is_none() {
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level(""), None);
    }
}
