// src/notify/notifier.rs

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::errors::{BgnotifyError, Result};
use crate::job::{JobCompletion, JobResult};
use crate::notify::Presenter;

/// Waits for the job to complete and then presents the result.
pub struct Notifier<P> {
    presenter: P,
    settle: Duration,
}

impl<P> Notifier<P>
where
    P: Presenter + 'static,
{
    pub fn new(presenter: P, settle: Duration) -> Self {
        Self { presenter, settle }
    }

    /// Block until the executor completes the job, pause for the settle
    /// delay, then present the result on a blocking thread (the terminal
    /// modal waits for a keypress).
    ///
    /// There is no timeout: a command that never ends keeps this waiting.
    pub async fn run(self, completion: JobCompletion) -> Result<JobResult> {
        debug!(command = %completion.command(), "waiting for command to finish");
        let result = completion.wait().await;
        info!(
            command = %result.command,
            exit_code = result.exit_code,
            "command completed; notifying"
        );

        if !self.settle.is_zero() {
            sleep(self.settle).await;
        }

        let mut presenter = self.presenter;
        let shown = result.clone();
        tokio::task::spawn_blocking(move || presenter.present(&shown))
            .await
            .map_err(|e| BgnotifyError::Other(anyhow::anyhow!("presenter task failed: {e}")))??;

        Ok(result)
    }
}
