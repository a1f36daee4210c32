// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command_line`] joins CLI arguments into one shell command line.
//! - [`shell`] describes the interpreter used for the shell passthrough.
//! - [`executor`] runs the command line, classifies how it ended and
//!   completes the job.

pub mod command_line;
pub mod executor;
pub mod shell;

pub use command_line::build_command_line;
pub use executor::{classify_status, run_job};
pub use shell::Shell;
