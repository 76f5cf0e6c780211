// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;
pub mod trigger;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::RunConfig;
use crate::errors::Result;
use crate::report::Reporter;
use crate::trigger::ChangeDetector;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - CLI argument resolution into a [`RunConfig`]
/// - the change detector (baseline fingerprint)
/// - the run loop: execute, sleep, poll, re-execute
/// - Ctrl-C handling
///
/// There is no normal return in steady state: the loop runs until the process
/// is signalled, or a fatal error (watched file vanished, spawn failure)
/// propagates out.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = RunConfig::from_args(args)?;
    let reporter = Reporter::new(cfg.status, cfg.color);

    // Baseline is captured before the first run, so edits made while the
    // command is still running are caught on the next poll.
    let mut detector = ChangeDetector::new(&cfg.file, cfg.trigger)?;

    spawn_ctrl_c_handler();

    reporter.startup(&cfg.command, cfg.trigger, cfg.interval);
    info!(file = ?cfg.file, trigger = %cfg.trigger, "watchrun started");

    let code = exec::run_command(&cfg.command).await?;
    reporter.run_finished(code);

    loop {
        tokio::time::sleep(cfg.interval).await;

        if detector.has_changed()? {
            debug!(file = ?cfg.file, "change detected, re-running");
            let code = exec::run_command(&cfg.command).await?;
            reporter.run_finished(code);
        }
    }
}

/// Ctrl-C → immediate shutdown.
///
/// Installing our own handler keeps the exit path explicit; 130 is the
/// conventional status for death-by-SIGINT.
fn spawn_ctrl_c_handler() {
    tokio::spawn(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        info!("interrupted, shutting down");
        std::process::exit(130);
    });
}
