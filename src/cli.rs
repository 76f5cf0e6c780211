// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::trigger::Trigger;

/// Command-line arguments for `watchrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watchrun",
    version,
    about = "Watch a single file and re-run it when it changes.",
    long_about = None
)]
pub struct CliArgs {
    /// File to watch. Executed directly unless --exec is given.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Change detection strategy.
    ///
    /// `mtime` compares the file's modification timestamp (fast, coarse);
    /// `content` hashes the whole file on every poll (slow, exact).
    #[arg(long, value_enum, value_name = "STRATEGY", default_value_t = Trigger::Mtime)]
    pub trigger: Trigger,

    /// Polling interval in seconds.
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// Interpreter to invoke with the file as its first argument,
    /// instead of executing the file itself.
    #[arg(long, value_name = "PATH")]
    pub exec: Option<String>,

    /// Print a startup line and a status line after every run.
    #[arg(long)]
    pub status: bool,

    /// Colorize status lines with ANSI escapes.
    #[arg(long)]
    pub color: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Arguments forwarded to the command on every run, after `--`.
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
