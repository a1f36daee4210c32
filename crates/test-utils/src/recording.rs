use std::sync::{Arc, Mutex};

use bgnotify::errors::Result;
use bgnotify::job::JobResult;
use bgnotify::notify::Presenter;

/// A fake presenter that:
/// - records every result it was asked to show
/// - never touches the terminal.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    shown: Arc<Mutex<Vec<JobResult>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded results, usable after the presenter has
    /// been moved into a notifier.
    pub fn shown(&self) -> Arc<Mutex<Vec<JobResult>>> {
        Arc::clone(&self.shown)
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, result: &JobResult) -> Result<()> {
        self.shown.lock().unwrap().push(result.clone());
        Ok(())
    }
}
