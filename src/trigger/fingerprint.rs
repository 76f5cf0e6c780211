// src/trigger/fingerprint.rs

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::time::SystemTime;

use blake3::Hasher;
use tracing::debug;

use crate::errors::{Result, WatchrunError};
use crate::trigger::Trigger;

/// Snapshot of the watched file's state under one strategy.
///
/// Only equality is meaningful: an mtime that moved *backwards* (restored
/// backup, clock adjustment) still counts as a change. Fingerprints from
/// different strategies are never compared in practice because the strategy
/// is fixed per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fingerprint {
    Mtime(SystemTime),
    Content(String),
}

/// Compute the file's fingerprint under the given strategy.
///
/// Any stat/read failure becomes a [`WatchrunError::FileAccess`]; callers
/// treat that as fatal (no retry).
pub fn fingerprint(path: &Path, trigger: Trigger) -> Result<Fingerprint> {
    match trigger {
        Trigger::Mtime => {
            let meta = fs::metadata(path).map_err(|e| file_access(path, e))?;
            let mtime = meta.modified().map_err(|e| file_access(path, e))?;
            Ok(Fingerprint::Mtime(mtime))
        }
        Trigger::Content => hash_file(path).map(Fingerprint::Content),
    }
}

/// Hash the file's full contents with blake3, returning a hex digest.
fn hash_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| file_access(path, e))?;

    let mut hasher = Hasher::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf).map_err(|e| file_access(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let hash = hasher.finalize().to_hex().to_string();
    debug!(hash = %hash, path = ?path, "computed content hash");
    Ok(hash)
}

fn file_access(path: &Path, source: std::io::Error) -> WatchrunError {
    WatchrunError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}
