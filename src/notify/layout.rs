// src/notify/layout.rs

//! Popup geometry and text fitting.
//!
//! Everything here is pure so it can be tested without a terminal.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Preferred popup size.
pub const TARGET_WIDTH: u16 = 60;
pub const TARGET_HEIGHT: u16 = 9;

/// Smallest popup that still shows title, command and exit code. The width
/// leaves exactly enough text columns for the longer title.
pub const MIN_WIDTH: u16 = 23;
pub const MIN_HEIGHT: u16 = 5;

/// Free cells kept between the popup and every screen edge.
pub const SCREEN_MARGIN: u16 = 1;

/// Columns between the popup border and its text, on each side (border
/// included).
pub const TEXT_INSET: u16 = 2;

/// One row of popup content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupRow {
    Title,
    Spacer,
    CommandLabel,
    Command,
    ExitCode,
    Hint,
}

const FULL_ROWS: [PopupRow; 7] = [
    PopupRow::Title,
    PopupRow::Spacer,
    PopupRow::CommandLabel,
    PopupRow::Command,
    PopupRow::ExitCode,
    PopupRow::Spacer,
    PopupRow::Hint,
];

/// Rows dropped, in order, when the popup is shorter than the target.
const DROP_ORDER: [PopupRow; 4] = [
    PopupRow::Spacer,
    PopupRow::Spacer,
    PopupRow::CommandLabel,
    PopupRow::Hint,
];

/// Centered popup region for a `target` size on `screen`.
///
/// The size is clamped so at least [`SCREEN_MARGIN`] cells stay free on each
/// side. Returns `None` if the clamped popup would be smaller than
/// [`MIN_WIDTH`] × [`MIN_HEIGHT`].
pub fn popup_area(screen: Rect, target_width: u16, target_height: u16) -> Option<Rect> {
    let width = target_width.min(screen.width.saturating_sub(2 * SCREEN_MARGIN));
    let height = target_height.min(screen.height.saturating_sub(2 * SCREEN_MARGIN));

    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return None;
    }

    let x = screen.x + (screen.width - width) / 2;
    let y = screen.y + (screen.height - height) / 2;
    Some(Rect::new(x, y, width, height))
}

/// Width available for a line of text inside a popup of `popup_width`.
pub fn text_width(popup_width: u16) -> u16 {
    popup_width.saturating_sub(2 * TEXT_INSET)
}

/// Rows that fit in `inner_height` lines, top to bottom.
pub fn rows_for_height(inner_height: u16) -> Vec<PopupRow> {
    let mut rows = FULL_ROWS.to_vec();
    for drop in DROP_ORDER {
        if rows.len() <= inner_height as usize {
            break;
        }
        if let Some(pos) = rows.iter().position(|r| *r == drop) {
            rows.remove(pos);
        }
    }
    rows.truncate(inner_height as usize);
    rows
}

/// Cut `text` to at most `max` terminal columns, ending with `...` when cut.
///
/// Wide characters count as two columns and are never split.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    const ELLIPSIS: &str = "...";

    if text.width() <= max {
        return text.to_string();
    }
    if max <= ELLIPSIS.len() {
        return ".".repeat(max);
    }

    let budget = max - ELLIPSIS.len();
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}
