// src/trigger/detector.rs

use std::path::PathBuf;

use tracing::debug;

use crate::errors::Result;
use crate::trigger::{fingerprint, Fingerprint, Trigger};

/// Stateful "has the file changed since the last poll?" question.
///
/// Holds exactly one fingerprint: the most recently observed one. Created
/// from the baseline fingerprint at startup, before the first run of the
/// command, so edits made during that run are caught on the next poll.
#[derive(Debug)]
pub struct ChangeDetector {
    path: PathBuf,
    trigger: Trigger,
    last: Fingerprint,
}

impl ChangeDetector {
    /// Capture the baseline fingerprint for `path` under `trigger`.
    ///
    /// Fails with [`crate::errors::WatchrunError::FileAccess`] if the file
    /// cannot be read or stat'ed.
    pub fn new(path: impl Into<PathBuf>, trigger: Trigger) -> Result<Self> {
        let path = path.into();
        let last = fingerprint(&path, trigger)?;
        debug!(path = ?path, %trigger, "captured baseline fingerprint");
        Ok(Self {
            path,
            trigger,
            last,
        })
    }

    /// Compare the file's current fingerprint against the stored one.
    ///
    /// The stored fingerprint is overwritten on *every* call, whether or not
    /// it differed. That makes the answer "changed since the last poll", not
    /// "changed since startup": any number of edits between two polls
    /// collapse into a single `true`, and no change is ever reported twice.
    pub fn has_changed(&mut self) -> Result<bool> {
        let next = fingerprint(&self.path, self.trigger)?;
        let changed = next != self.last;
        self.last = next;
        Ok(changed)
    }
}
