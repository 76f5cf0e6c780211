// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for:
//! - Resolving the watched file (plus optional interpreter and trailing
//!   arguments) into a concrete invocation, once, at startup.
//! - Running that invocation with `tokio::process::Command`, stdio inherited,
//!   and handing the exit code back to the run loop.

pub mod command;

pub use command::{current_dir_qualified, resolve_command, run_command, ResolvedCommand};
