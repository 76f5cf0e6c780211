// src/exec/command.rs

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{Result, WatchrunError};

/// Fully-resolved invocation of the monitored command.
///
/// Built once at startup and reused verbatim on every run; trailing arguments
/// keep their original order across reruns.
#[derive(Debug, Clone)]
pub struct ResolvedCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl std::fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Resolve the watched file into a concrete invocation.
///
/// - With `exec = Some(interpreter)`: run `interpreter <file> <extra...>`.
/// - Without: the file itself must be executable; it is invoked directly,
///   qualified with `./` when its path has no directory component so it is
///   never looked up on `PATH`.
pub fn resolve_command(
    file: &Path,
    exec: Option<&str>,
    extra: &[String],
) -> Result<ResolvedCommand> {
    let resolved = match exec {
        Some(interpreter) => {
            let mut args = Vec::with_capacity(extra.len() + 1);
            args.push(file.to_string_lossy().into_owned());
            args.extend(extra.iter().cloned());
            ResolvedCommand {
                program: PathBuf::from(interpreter),
                args,
            }
        }
        None => {
            if !is_executable(file)? {
                return Err(WatchrunError::Config(format!(
                    "{:?} is not executable; pass --exec <interpreter> to run it indirectly",
                    file
                )));
            }
            ResolvedCommand {
                program: current_dir_qualified(file),
                args: extra.to_vec(),
            }
        }
    };

    debug!(command = %resolved, "resolved command");
    Ok(resolved)
}

/// Qualify a bare file name with the current directory.
///
/// `x` becomes `./x`; anything already carrying a directory component is
/// returned unchanged.
pub fn current_dir_qualified(file: &Path) -> PathBuf {
    if file.components().count() == 1 {
        Path::new(".").join(file)
    } else {
        file.to_path_buf()
    }
}

#[cfg(unix)]
fn is_executable(file: &Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    let meta = std::fs::metadata(file).map_err(|e| WatchrunError::FileAccess {
        path: file.to_path_buf(),
        source: e,
    })?;
    Ok(meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(_file: &Path) -> Result<bool> {
    // No executable bit to inspect; let the OS reject the spawn if the file
    // is not runnable.
    Ok(true)
}

/// Run the resolved command once, blocking until the child exits.
///
/// Stdin/stdout/stderr are inherited, so the child's own output goes straight
/// to the terminal. Returns the exit code, `-1` if the child was killed by a
/// signal. A non-zero code is *not* an error; failing to spawn or wait is.
pub async fn run_command(cmd: &ResolvedCommand) -> Result<i32> {
    info!(command = %cmd, "starting command");

    let status = Command::new(&cmd.program)
        .args(&cmd.args)
        .status()
        .await
        .with_context(|| format!("running '{cmd}'"))?;

    let code = status.code().unwrap_or(-1);
    info!(
        command = %cmd,
        exit_code = code,
        success = status.success(),
        "command exited"
    );

    Ok(code)
}
