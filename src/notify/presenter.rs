// src/notify/presenter.rs

//! How a finished job is shown to the user.
//!
//! The notifier talks to a [`Presenter`] instead of the terminal directly.
//! [`TerminalPresenter`] drives the full-screen modal through `ratatui` +
//! `crossterm`; [`PlainPresenter`] writes a text summary and is also the
//! terminal presenter's fallback.

use std::io::{self, IsTerminal, Stdout, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, error, info, warn};

use crate::errors::{BgnotifyError, Result};
use crate::job::JobResult;
use crate::notify::layout::popup_area;
use crate::notify::popup::{plain_summary, NotificationPopup, Palette};
use crate::notify::{ColorMode, NotifyOptions};

/// Shows a completed job. Called once, on a blocking thread.
pub trait Presenter: Send {
    fn present(&mut self, result: &JobResult) -> Result<()>;
}

/// Writes [`plain_summary`] to any writer.
#[derive(Debug)]
pub struct PlainPresenter<W> {
    out: W,
}

impl<W: Write + Send> PlainPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl PlainPresenter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Presenter for PlainPresenter<W> {
    fn present(&mut self, result: &JobResult) -> Result<()> {
        self.out.write_all(plain_summary(result).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Whether the popup may use colors, given `TERM` and `NO_COLOR`.
///
/// An unset, empty or `dumb` terminal is monochrome, as is any non-empty
/// `NO_COLOR`. Otherwise crossterm's color count decides.
pub fn terminal_supports_color(term: Option<&str>, no_color: Option<&str>) -> bool {
    if no_color.is_some_and(|v| !v.is_empty()) {
        return false;
    }
    match term.map(str::trim) {
        None | Some("") | Some("dumb") => false,
        Some(_) => crossterm::style::available_color_count() >= 8,
    }
}

/// What happened when the modal was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalOutcome {
    Dismissed,
    NoTerminal,
    TooSmall,
}

/// Full-screen modal on the process's terminal.
#[derive(Debug, Clone)]
pub struct TerminalPresenter {
    options: NotifyOptions,
}

impl TerminalPresenter {
    pub fn new(options: NotifyOptions) -> Self {
        Self { options }
    }

    fn palette(&self) -> Palette {
        match self.options.color {
            ColorMode::Never => Palette::monochrome(),
            ColorMode::Auto
                if terminal_supports_color(
                    std::env::var("TERM").ok().as_deref(),
                    std::env::var("NO_COLOR").ok().as_deref(),
                ) =>
            {
                Palette::color()
            }
            ColorMode::Auto => {
                debug!("terminal reports no color support; using bold only");
                Palette::monochrome()
            }
        }
    }

    fn show_modal(&self, result: &JobResult) -> Result<ModalOutcome> {
        if !io::stdout().is_terminal() {
            return Ok(ModalOutcome::NoTerminal);
        }

        let (cols, rows) = crossterm::terminal::size()
            .map_err(|e| BgnotifyError::Terminal(format!("querying terminal size: {e}")))?;
        let screen = ratatui::layout::Rect::new(0, 0, cols, rows);
        if popup_area(screen, self.options.target_width, self.options.target_height).is_none() {
            return Ok(ModalOutcome::TooSmall);
        }

        let palette = self.palette();
        let mut session = TerminalSession::enter()?;
        info!(cols, rows, "showing completion popup");

        loop {
            session.draw(result, palette, &self.options)?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => break,
                Event::Resize(cols, rows) => {
                    debug!(cols, rows, "terminal resized; redrawing popup");
                }
                _ => {}
            }
        }

        session.leave()?;
        Ok(ModalOutcome::Dismissed)
    }
}

impl Presenter for TerminalPresenter {
    fn present(&mut self, result: &JobResult) -> Result<()> {
        let outcome = match self.show_modal(result) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, "could not show completion popup");
                ModalOutcome::NoTerminal
            }
        };

        match outcome {
            ModalOutcome::Dismissed => {
                debug!("completion popup dismissed");
                Ok(())
            }
            ModalOutcome::NoTerminal | ModalOutcome::TooSmall => {
                warn!(?outcome, "falling back to a plain-text summary");
                PlainPresenter::stdout().present(result)
            }
        }
    }
}

/// Raw mode + alternate screen + hidden cursor for as long as it lives.
///
/// Dropping the session restores the terminal, so an error while drawing
/// never leaves the user's shell in raw mode.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode()
            .map_err(|e| BgnotifyError::Terminal(format!("enabling raw mode: {e}")))?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(BgnotifyError::Terminal(format!(
                "entering alternate screen: {e}"
            )));
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(BgnotifyError::Terminal(format!("creating terminal: {e}")));
            }
        };

        Ok(Self {
            terminal,
            active: true,
        })
    }

    fn draw(&mut self, result: &JobResult, palette: Palette, options: &NotifyOptions) -> Result<()> {
        self.terminal.draw(|frame| {
            if let Some(area) = popup_area(frame.area(), options.target_width, options.target_height)
            {
                frame.render_widget(NotificationPopup::new(result, palette), area);
            }
        })?;
        Ok(())
    }

    fn leave(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.terminal.backend_mut(), Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!(error = %e, "failed to restore terminal");
        }
    }
}
