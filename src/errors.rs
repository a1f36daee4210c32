// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BgnotifyError {
    /// No command was given on the command line.
    #[error("no command given")]
    Usage,

    /// The process split (fork / re-exec) failed before any background work
    /// was started.
    #[error("failed to detach from terminal: {0}")]
    Detach(String),

    /// The terminal could not be put into (or restored from) the modal
    /// session.
    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BgnotifyError>;
