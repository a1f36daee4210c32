// src/logging.rs

//! Diagnostic logging via `tracing`.
//!
//! `--log-level` wins. Without it, `BGNOTIFY_LOG` is read as an `EnvFilter`
//! directive string, so both `debug` and `bgnotify::notify=trace` work. The
//! fallback is `warn`: the detached process keeps writing to the user's
//! terminal, and routine events should not land on top of their shell.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

pub const LOG_ENV: &str = "BGNOTIFY_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber (stderr, no timestamps).
///
/// Runs before the process split so the background child keeps it.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(cli_level, env.as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))
}

fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level.as_directive());
    }
    env.filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
