// src/trigger/mod.rs

//! Change detection for the watched file.
//!
//! This module is responsible for:
//! - Computing a [`Fingerprint`] of the watched file under the selected
//!   strategy (modification time or blake3 content hash).
//! - Answering "has the file changed since the last poll?" via
//!   [`ChangeDetector`], which remembers the most recent fingerprint.
//!
//! It does **not** know about the command being run or the polling interval;
//! it only turns a file's on-disk state into a change/no-change decision.

pub mod detector;
pub mod fingerprint;

pub use detector::ChangeDetector;
pub use fingerprint::{fingerprint, Fingerprint};

use clap::ValueEnum;

/// Strategy used to decide whether the watched file has changed.
///
/// A closed set: the strategy is picked once at startup and fixed for the
/// lifetime of the process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Trigger {
    /// Compare the file's last-modification timestamp. Fast, but bounded by
    /// the filesystem's timestamp granularity (often ~1 second).
    Mtime,
    /// Hash the full file contents on every poll. Exact, O(file size).
    Content,
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trigger::Mtime => write!(f, "mtime"),
            Trigger::Content => write!(f, "content"),
        }
    }
}
