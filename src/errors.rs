// src/errors.rs

//! Crate-wide error types.
//!
//! Fatal conditions fall into two buckets: configuration problems caught at
//! startup, and watched-file access failures during polling. A non-zero exit
//! code from the monitored command is deliberately *not* an error here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchrunError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cannot access watched file {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WatchrunError>;
