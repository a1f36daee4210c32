// src/job.rs

//! The single background job and its one-shot completion handoff.
//!
//! The executor owns a [`JobCompleter`] and the notifier owns a
//! [`JobCompletion`]. Completing consumes the completer, so the result can be
//! written at most once; waiting consumes the receiver, so it is read once.

use tokio::sync::oneshot;
use tracing::warn;

/// Exit code recorded when no valid exit status was obtained.
pub const SENTINEL_EXIT_CODE: i32 = -1;

/// How the shell process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Normal exit with the given status.
    Exited(i32),
    /// Terminated by the given signal number.
    Signaled(i32),
    /// The interpreter could not be started or waited on.
    NotStarted,
}

impl ExitOutcome {
    /// Shell-style exit code: the status, `128 + signal`, or the sentinel.
    pub fn exit_code(self) -> i32 {
        match self {
            ExitOutcome::Exited(code) => code,
            ExitOutcome::Signaled(signal) => 128 + signal,
            ExitOutcome::NotStarted => SENTINEL_EXIT_CODE,
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitOutcome::Exited(0)
    }
}

/// Result record shared between the executor and the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    pub command: String,
    pub completed: bool,
    pub exit_code: i32,
}

impl JobResult {
    /// The state before the executor has written anything.
    pub fn pending(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            completed: false,
            exit_code: SENTINEL_EXIT_CODE,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Write half of the completion channel.
#[derive(Debug)]
pub struct JobCompleter {
    command: String,
    tx: oneshot::Sender<JobResult>,
}

/// Read half of the completion channel.
#[derive(Debug)]
pub struct JobCompletion {
    command: String,
    rx: oneshot::Receiver<JobResult>,
}

/// Create the handoff for a job running `command`.
pub fn completion_channel(command: impl Into<String>) -> (JobCompleter, JobCompletion) {
    let command = command.into();
    let (tx, rx) = oneshot::channel();
    (
        JobCompleter {
            command: command.clone(),
            tx,
        },
        JobCompletion { command, rx },
    )
}

impl JobCompleter {
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Record the outcome and mark the job completed in one step, waking the
    /// waiting notifier.
    pub fn complete(self, outcome: ExitOutcome) {
        let mut result = JobResult::pending(self.command);
        result.exit_code = outcome.exit_code();
        result.completed = true;
        if self.tx.send(result).is_err() {
            warn!("job completed but nobody is waiting for the result");
        }
    }
}

impl JobCompletion {
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Wait until the executor has completed the job.
    ///
    /// If the completer was dropped without writing, the job is reported as
    /// completed with the sentinel exit code.
    pub async fn wait(self) -> JobResult {
        match self.rx.await {
            Ok(result) => result,
            Err(_) => {
                warn!(command = %self.command, "executor ended without reporting a result");
                let mut result = JobResult::pending(self.command);
                result.completed = true;
                result
            }
        }
    }
}
