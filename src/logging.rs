// src/logging.rs

//! Logging setup for `watchrun` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `WATCHRUN_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `warn`
//!
//! Log lines go to stderr so they never interleave with the status lines or
//! with the stdout of the monitored command. ANSI coloring follows the same
//! explicit `--color` flag as the status reporter; it is never left to the
//! subscriber's own default, which colors unconditionally.

use anyhow::Result;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::MakeWriter;

use crate::cli::LogLevel;

/// Build the subscriber with the crate's formatting options.
///
/// Split out from [`init_logging`] so tests can install it with a captured
/// writer instead of the process-global stderr.
pub fn build_subscriber<W>(
    level: tracing::Level,
    color: bool,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_ansi(color)
        .with_writer(writer)
        .with_thread_ids(false)
        .with_thread_names(false)
        .finish()
}

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>, color: bool) -> Result<()> {
    let level = match cli_level {
        Some(lvl) => level_from_log_level(lvl),
        None => std::env::var("WATCHRUN_LOG")
            .ok()
            .and_then(|s| parse_level_str(&s))
            .unwrap_or(tracing::Level::WARN),
    };

    tracing::subscriber::set_global_default(build_subscriber(level, color, std::io::stderr))?;
    Ok(())
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
