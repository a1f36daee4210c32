// src/notify/popup.rs

//! The completion popup widget and its plain-text counterpart.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Widget};

use crate::job::JobResult;
use crate::notify::layout::{rows_for_height, text_width, truncate_with_ellipsis, PopupRow, TEXT_INSET};

pub const SUCCESS_TITLE: &str = "✓ COMMAND COMPLETED";
pub const FAILURE_TITLE: &str = "✗ COMMAND FAILED";
pub const COMMAND_LABEL: &str = "Command:";
pub const DISMISS_HINT: &str = "Press any key to dismiss...";

/// Colors used by the popup.
///
/// `None` means monochrome: titles fall back to bold only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub colors: Option<(Color, Color)>,
}

impl Palette {
    /// Green for success, red for failure.
    pub fn color() -> Self {
        Self {
            colors: Some((Color::Green, Color::Red)),
        }
    }

    pub fn monochrome() -> Self {
        Self { colors: None }
    }

    pub fn title_style(&self, success: bool) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        match self.colors {
            Some((ok, _)) if success => style.fg(ok),
            Some((_, failed)) => style.fg(failed),
            None => style,
        }
    }
}

pub fn title(result: &JobResult) -> &'static str {
    if result.succeeded() {
        SUCCESS_TITLE
    } else {
        FAILURE_TITLE
    }
}

pub fn exit_code_line(result: &JobResult) -> String {
    format!("Exit Code: {}", result.exit_code)
}

/// Modal box reporting a finished job. Render it into the area returned by
/// [`crate::notify::layout::popup_area`].
pub struct NotificationPopup<'a> {
    result: &'a JobResult,
    palette: Palette,
}

impl<'a> NotificationPopup<'a> {
    pub fn new(result: &'a JobResult, palette: Palette) -> Self {
        Self { result, palette }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.width < 2 || area.height < 2 {
            return;
        }

        Clear.render(area, buf);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = text_width(area.width);
        if width == 0 {
            return;
        }
        let x = area.x + TEXT_INSET;

        for (i, row) in rows_for_height(inner.height).into_iter().enumerate() {
            let y = inner.y + i as u16;
            let (text, style) = match row {
                PopupRow::Title => (
                    title(self.result).to_string(),
                    self.palette.title_style(self.result.succeeded()),
                ),
                PopupRow::Spacer => continue,
                PopupRow::CommandLabel => (COMMAND_LABEL.to_string(), Style::default()),
                PopupRow::Command => (
                    truncate_with_ellipsis(&self.result.command, width as usize),
                    Style::default(),
                ),
                PopupRow::ExitCode => (exit_code_line(self.result), Style::default()),
                PopupRow::Hint => (
                    DISMISS_HINT.to_string(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            };
            buf.set_stringn(x, y, text, width as usize, style);
        }
    }
}

/// Text printed instead of the popup when no usable terminal is available.
pub fn plain_summary(result: &JobResult) -> String {
    format!(
        "{}\n{} {}\n{}\n",
        title(result),
        COMMAND_LABEL,
        result.command,
        exit_code_line(result)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(command: &str, exit_code: i32) -> JobResult {
        JobResult {
            command: command.to_string(),
            completed: true,
            exit_code,
        }
    }

    #[test]
    fn monochrome_titles_are_bold_only() {
        let style = Palette::monochrome().title_style(false);
        assert_eq!(style.fg, None);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn colored_titles() {
        let p = Palette::color();
        assert_eq!(p.title_style(true).fg, Some(Color::Green));
        assert_eq!(p.title_style(false).fg, Some(Color::Red));
    }

    #[test]
    fn plain_summary_has_everything() {
        let text = plain_summary(&finished("sleep 0", 0));
        assert_eq!(text, "✓ COMMAND COMPLETED\nCommand: sleep 0\nExit Code: 0\n");
        assert!(plain_summary(&finished("false", -1)).contains("✗ COMMAND FAILED"));
    }

    #[test]
    fn tiny_area_is_ignored() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        NotificationPopup::new(&finished("x", 0), Palette::color())
            .render(Rect::new(0, 0, 1, 1), &mut buf);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 4, 4)));
    }
}
