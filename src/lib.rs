// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod job;
pub mod logging;
pub mod notify;
pub mod platform;

use std::io::Write;
use std::time::Duration;

use tracing::{error, info};

use crate::cli::CliArgs;
use crate::errors::{BgnotifyError, Result};
use crate::exec::{build_command_line, run_job, Shell};
use crate::job::{completion_channel, JobResult};
use crate::notify::{ColorMode, Notifier, NotifyOptions, Presenter, TerminalPresenter};
use crate::platform::Detached;

/// High-level entry point used by `main.rs`.
///
/// Builds the command line, prints the starting message, detaches (unless
/// `--no-detach`), and in the background process runs the executor and the
/// notifier to completion.
///
/// Returns `Ok(())` in both the exiting parent and the finished background
/// process: the command's own exit code is only ever shown in the popup.
pub fn run(args: CliArgs) -> Result<()> {
    if args.command.is_empty() {
        return Err(BgnotifyError::Usage);
    }

    let command = build_command_line(&args.command);
    let shell = args
        .shell
        .clone()
        .map(Shell::from_program)
        .unwrap_or_default();
    let options = notify_options(&args);

    if !args.detached_child {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "Starting background command: {command}")?;
        writeln!(
            stdout,
            "You can continue using the terminal. A notification will appear when complete."
        )?;
        // Flush before forking so the child doesn't repeat buffered output.
        stdout.flush()?;
    }

    if !args.no_detach && platform::detach(args.detached_child)? == Detached::Parent {
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let settle = options.settle;
    let presenter = TerminalPresenter::new(options);
    if let Err(err) = runtime.block_on(execute_and_notify(command, shell, presenter, settle)) {
        error!(error = %err, "background job did not finish cleanly");
    }

    Ok(())
}

/// Run the executor and the notifier as two concurrent tasks and wait for
/// both.
///
/// The executor publishes the result exactly once through the completion
/// channel; the notifier waits for it and hands it to `presenter`.
pub async fn execute_and_notify<P>(
    command: String,
    shell: Shell,
    presenter: P,
    settle: Duration,
) -> Result<JobResult>
where
    P: Presenter + 'static,
{
    let (completer, completion) = completion_channel(command);

    let executor = tokio::spawn(async move { run_job(&shell, completer).await });
    let notifier = tokio::spawn(Notifier::new(presenter, settle).run(completion));

    let (exec_res, notify_res) = tokio::join!(executor, notifier);

    match exec_res {
        Ok(outcome) => info!(exit_code = outcome.exit_code(), "executor finished"),
        Err(e) => error!(error = %e, "executor task failed"),
    }

    notify_res.map_err(|e| BgnotifyError::Other(anyhow::anyhow!("notifier task failed: {e}")))?
}

fn notify_options(args: &CliArgs) -> NotifyOptions {
    NotifyOptions {
        settle: Duration::from_millis(args.settle_ms),
        color: if args.no_color {
            ColorMode::Never
        } else {
            ColorMode::Auto
        },
        ..NotifyOptions::default()
    }
}
