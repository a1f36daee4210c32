// src/platform.rs

//! Detaching from the invoking terminal.
//!
//! On Unix the process forks: the parent returns to the caller's shell and
//! the child becomes a session leader, so closing the terminal (SIGHUP) no
//! longer reaches it. Elsewhere the current executable is re-run with a
//! hidden `--detached-child` flag and the original process exits.

use crate::errors::{BgnotifyError, Result};

/// Which side of the split the caller is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detached {
    /// The invoking process; it should exit right away.
    Parent,
    /// The background process; it runs the job.
    Child,
}

/// Spawn the detached background task.
///
/// `already_detached` is true when this process *is* the re-executed child,
/// in which case no further split happens.
///
/// Must be called before any threads (including the Tokio runtime) exist.
pub fn detach(already_detached: bool) -> Result<Detached> {
    if already_detached {
        return Ok(Detached::Child);
    }
    split()
}

#[cfg(unix)]
fn split() -> Result<Detached> {
    use nix::unistd::{fork, setsid, ForkResult};
    use tracing::{debug, warn};

    // SAFETY: called from `run` before the Tokio runtime is built, so the
    // process is single-threaded and the child may continue normally.
    match unsafe { fork() } {
        Ok(ForkResult::Parent { child }) => {
            debug!(%child, "forked background process");
            Ok(Detached::Parent)
        }
        Ok(ForkResult::Child) => {
            if let Err(e) = setsid() {
                warn!(error = %e, "setsid failed; staying in the caller's session");
            }
            Ok(Detached::Child)
        }
        Err(e) => Err(BgnotifyError::Detach(format!("fork failed: {e}"))),
    }
}

#[cfg(not(unix))]
fn split() -> Result<Detached> {
    use anyhow::Context;
    use tracing::debug;

    let exe = std::env::current_exe().context("determining current executable path")?;
    let child = std::process::Command::new(&exe)
        .arg("--detached-child")
        .args(std::env::args_os().skip(1))
        .spawn()
        .map_err(|e| BgnotifyError::Detach(format!("spawning {}: {e}", exe.display())))?;
    debug!(pid = child.id(), "spawned background process");
    Ok(Detached::Parent)
}
