use bgnotify::job::JobResult;
use bgnotify::notify::layout::{popup_area, TARGET_HEIGHT, TARGET_WIDTH};
use bgnotify::notify::popup::{NotificationPopup, Palette};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Draw the popup for `result` on a `width` x `height` test terminal, the way
/// the real presenter does, and return the resulting buffer together with the
/// popup area (if one fit).
pub fn render_popup(
    result: &JobResult,
    palette: Palette,
    width: u16,
    height: u16,
) -> (Buffer, Option<Rect>) {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).expect("Failed to create test terminal");
    let mut drawn = None;
    terminal
        .draw(|frame| {
            drawn = popup_area(frame.area(), TARGET_WIDTH, TARGET_HEIGHT);
            if let Some(area) = drawn {
                frame.render_widget(NotificationPopup::new(result, palette), area);
            }
        })
        .expect("Failed to render");
    (terminal.backend().buffer().clone(), drawn)
}

/// Buffer contents as one string per row.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// A finished job with the given command and exit code.
pub fn finished(command: &str, exit_code: i32) -> JobResult {
    JobResult {
        command: command.to_string(),
        completed: true,
        exit_code,
    }
}
