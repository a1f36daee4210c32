// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Options must come before the command: everything from the first
//! positional argument onward (flags included) is passed through to the
//! shell untouched. A command whose first token starts with `-` has to be
//! separated with `--`, otherwise it is parsed as an option of `bgnotify`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `bgnotify`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bgnotify",
    version,
    about = "Run a command in the background and show a terminal notification when it completes.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BGNOTIFY_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Stay attached to the terminal instead of detaching.
    #[arg(long)]
    pub no_detach: bool,

    /// Interpreter used to run the command line (`sh` by default).
    #[arg(long, value_name = "PATH")]
    pub shell: Option<String>,

    /// Delay before the notification is drawn, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 100)]
    pub settle_ms: u64,

    /// Never use colors in the notification.
    #[arg(long)]
    pub no_color: bool,

    /// Set on the re-executed child on platforms without `fork`.
    #[arg(long, hide = true)]
    pub detached_child: bool,

    /// The command to run, followed by its arguments.
    ///
    /// Put `--` first if the command itself starts with `-`.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The level as a `tracing` filter directive.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Usage text printed to stderr when no command is supplied.
pub fn usage_text(program: &str) -> String {
    format!(
        "Usage: {program} <command> [args...]\n\
         \n\
         Description:\n\
         \x20 Execute a command in the background without blocking the terminal.\n\
         \x20 A notification will appear when the command completes.\n\
         \x20 Use `--` before a command that starts with '-'.\n\
         \n\
         Examples:\n\
         \x20 {program} sleep 10\n\
         \x20 {program} wget https://example.com/file.zip\n\
         \x20 {program} make -j4\n"
    )
}

/// Name the program was invoked as, falling back to `bgnotify`.
pub fn program_name() -> String {
    std::env::args()
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "bgnotify".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_keeps_its_own_flags() {
        let args = CliArgs::try_parse_from(["bgnotify", "--no-detach", "ls", "-la", "--color"])
            .unwrap();
        assert!(args.no_detach);
        assert_eq!(args.command, vec!["ls", "-la", "--color"]);
    }

    #[test]
    fn double_dash_allows_leading_hyphen_command() {
        let args = CliArgs::try_parse_from(["bgnotify", "--no-color", "--", "-la", "x"]).unwrap();
        assert!(args.no_color);
        assert_eq!(args.command, vec!["-la", "x"]);
    }

    #[test]
    fn leading_hyphen_without_separator_is_rejected() {
        let err = CliArgs::try_parse_from(["bgnotify", "-la"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_command_parses() {
        let args = CliArgs::try_parse_from(["bgnotify"]).unwrap();
        assert!(args.command.is_empty());
        assert_eq!(args.settle_ms, 100);
    }

    #[test]
    fn usage_lists_three_examples() {
        let text = usage_text("bgn");
        assert!(text.starts_with("Usage: bgn <command> [args...]"));
        assert!(text.contains("bgn sleep 10"));
        assert!(text.contains("bgn wget https://example.com/file.zip"));
        assert!(text.contains("bgn make -j4"));
    }
}
