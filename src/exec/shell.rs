// src/exec/shell.rs

//! Shell passthrough.
//!
//! The command line is handed to an interpreter as a single string, so pipes,
//! globs and redirections work the way the user typed them. The flip side is
//! that nothing is escaped: whoever controls the arguments controls the shell.

use std::path::Path;

use tokio::process::Command;

/// Interpreter plus the flag that makes it run a command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub program: String,
    pub command_flag: String,
}

impl Shell {
    /// `cmd /C` on Windows, `sh -c` everywhere else.
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Self::from_program("cmd")
        } else {
            Self::from_program("sh")
        }
    }

    /// Use `program`, picking `/C` for `cmd` and `-c` for anything else.
    pub fn from_program(program: impl Into<String>) -> Self {
        let program = program.into();
        let is_cmd = Path::new(&program)
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.eq_ignore_ascii_case("cmd"));
        let command_flag = if is_cmd { "/C" } else { "-c" }.to_string();
        Self {
            program,
            command_flag,
        }
    }

    /// Build (but do not spawn) the interpreter invocation for `line`.
    pub fn command(&self, line: &str) -> Command {
        let mut c = Command::new(&self.program);
        c.arg(&self.command_flag).arg(line);
        c
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::platform_default()
    }
}
