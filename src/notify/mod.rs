// src/notify/mod.rs

//! Completion notification.
//!
//! - [`layout`] computes popup geometry and fits text into it.
//! - [`popup`] is the `ratatui` widget plus the plain-text summary.
//! - [`presenter`] abstracts how a result is shown (terminal modal or text).
//! - [`notifier`] waits for the job, then hands the result to a presenter.

use std::time::Duration;

pub mod layout;
pub mod notifier;
pub mod popup;
pub mod presenter;

pub use notifier::Notifier;
pub use presenter::{PlainPresenter, Presenter, TerminalPresenter};

/// Whether the popup may use colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if the terminal reports support for them.
    #[default]
    Auto,
    Never,
}

/// Notification settings, derived from the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyOptions {
    /// Pause between completion and drawing, so the terminal can settle.
    pub settle: Duration,
    pub color: ColorMode,
    pub target_width: u16,
    pub target_height: u16,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(100),
            color: ColorMode::Auto,
            target_width: layout::TARGET_WIDTH,
            target_height: layout::TARGET_HEIGHT,
        }
    }
}
