// tests/cli.rs

use std::process::{Command, Stdio};

fn bgnotify() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bgnotify"))
}

#[test]
fn no_command_prints_usage_and_fails() {
    let output = bgnotify().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<command> [args...]"), "{stderr}");
    assert!(stderr.contains("Examples:"), "{stderr}");
    assert!(stderr.contains("make -j4"), "{stderr}");
}

#[cfg(unix)]
#[test]
fn foreground_run_without_terminal_prints_summary() {
    let output = bgnotify()
        .args(["--no-detach", "--settle-ms", "0", "exit", "3"])
        .output()
        .unwrap();

    // The command's exit code never becomes ours.
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Starting background command: exit 3"), "{stdout}");
    assert!(stdout.contains("You can continue using the terminal."), "{stdout}");
    assert!(stdout.contains("✗ COMMAND FAILED"), "{stdout}");
    assert!(stdout.contains("Command: exit 3"), "{stdout}");
    assert!(stdout.contains("Exit Code: 3"), "{stdout}");
}

#[cfg(unix)]
#[test]
fn command_uses_the_callers_standard_streams() {
    use std::io::Write;

    let mut child = bgnotify()
        .args(["--no-detach", "--settle-ms", "0"])
        .args(["read", "line", "&&", "echo", "got-$line", "&&"])
        .args(["echo", "to-stderr", ">&2", "&&", "test", "$line", "=", "hello"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"hello\n").unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("got-hello"), "{stdout}");
    assert!(stdout.contains("Exit Code: 0"), "{stdout}");
    assert!(stderr.contains("to-stderr"), "{stderr}");
}

#[test]
fn leading_hyphen_command_needs_a_separator() {
    let output = bgnotify().args(["--no-detach", "-la"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn separator_passes_leading_hyphen_command_through() {
    let output = bgnotify()
        .args(["--no-detach", "--settle-ms", "0", "--", "-not-a-program"])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Starting background command: -not-a-program"), "{stdout}");
    assert!(stdout.contains("Command: -not-a-program"), "{stdout}");
    assert!(stdout.contains("✗ COMMAND FAILED"), "{stdout}");
}

#[cfg(unix)]
#[test]
fn detached_run_returns_immediately() {
    let start = std::time::Instant::now();
    let status = bgnotify()
        .args(["--settle-ms", "0", "sleep", "2"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();

    // Only the parent is waited on; the command keeps running in the
    // detached child.
    assert!(status.success());
    assert!(start.elapsed() < std::time::Duration::from_millis(1500));
}
