// src/config.rs

//! Startup-time resolution of CLI arguments into an immutable run
//! configuration.
//!
//! All configuration errors the CLI parser cannot catch (missing file,
//! non-executable file without `--exec`) surface here, before anything is
//! executed or slept on.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::CliArgs;
use crate::errors::{Result, WatchrunError};
use crate::exec::{resolve_command, ResolvedCommand};
use crate::trigger::Trigger;

/// Everything the run loop needs, resolved once and never mutated.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    pub command: ResolvedCommand,
    pub interval: Duration,
    pub trigger: Trigger,
    pub status: bool,
    pub color: bool,
}

impl RunConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        if !args.file.exists() {
            return Err(WatchrunError::Config(format!(
                "watched file {:?} does not exist",
                args.file
            )));
        }

        let command = resolve_command(&args.file, args.exec.as_deref(), &args.args)?;

        Ok(Self {
            file: args.file,
            command,
            interval: Duration::from_secs(args.interval),
            trigger: args.trigger,
            status: args.status,
            color: args.color,
        })
    }
}
