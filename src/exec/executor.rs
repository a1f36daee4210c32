// src/exec/executor.rs

//! Runs the job's command line and completes the job.

use std::process::ExitStatus;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::exec::Shell;
use crate::job::{ExitOutcome, JobCompleter};

/// Run the job through `shell`, then record the outcome on `completer`.
///
/// Blocks (asynchronously) for as long as the command runs. Failures to
/// start or wait on the interpreter are not errors of the tool: they are
/// logged and recorded as [`ExitOutcome::NotStarted`].
pub async fn run_job(shell: &Shell, completer: JobCompleter) -> ExitOutcome {
    let outcome = match execute(shell, completer.command()).await {
        Ok(status) => classify_status(&status),
        Err(err) => {
            error!(
                shell = %shell.program,
                command = %completer.command(),
                error = %err,
                "command could not be executed"
            );
            ExitOutcome::NotStarted
        }
    };

    info!(
        command = %completer.command(),
        exit_code = outcome.exit_code(),
        success = outcome.is_success(),
        "command finished"
    );

    completer.complete(outcome);
    outcome
}

/// Map a process exit status onto an [`ExitOutcome`].
pub fn classify_status(status: &ExitStatus) -> ExitOutcome {
    if let Some(code) = status.code() {
        return ExitOutcome::Exited(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ExitOutcome::Signaled(signal);
        }
    }

    ExitOutcome::NotStarted
}

/// Spawn the interpreter and wait for it.
///
/// The command inherits this process's stdin, stdout and stderr; nothing is
/// captured.
async fn execute(shell: &Shell, line: &str) -> Result<ExitStatus> {
    info!(shell = %shell.program, command = %line, "starting command");

    let mut child = shell
        .command(line)
        .spawn()
        .with_context(|| format!("spawning '{}' for '{}'", shell.program, line))?;

    child
        .wait()
        .await
        .with_context(|| format!("waiting for '{}'", line))
}
