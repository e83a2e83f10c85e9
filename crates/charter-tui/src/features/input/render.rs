//! Input rendering.
//!
//! Draws the bordered message box, the placeholder when the buffer is empty,
//! and the send hint that doubles as the send control's enabled state.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use super::text_buffer::TextBuffer;
use crate::state::AppState;

/// Height with one text row plus borders.
pub const INPUT_HEIGHT_MIN: u16 = 3;
/// Maximum share of the terminal the input may take.
const INPUT_HEIGHT_MAX_PERCENT: f32 = 0.4;

const SEND_HINT: &str = " Enter send · Shift+Enter newline ";

/// Wrapped rows plus the cursor's visual position.
struct WrappedInput {
    rows: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
}

/// Wraps buffer rows at `width` columns, char by char, tracking the cursor.
fn wrap_buffer(buffer: &TextBuffer, width: usize) -> WrappedInput {
    let width = width.max(1);
    let (cursor_line, cursor_char) = buffer.cursor();
    let mut rows = Vec::new();
    let mut cursor_row = 0;
    let mut cursor_col = 0;

    for (line_idx, line) in buffer.lines().iter().enumerate() {
        let mut row = String::new();
        let mut row_width = 0;

        for (char_idx, ch) in line.chars().enumerate() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width + ch_width > width && row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            if line_idx == cursor_line && char_idx == cursor_char {
                cursor_row = rows.len();
                cursor_col = row_width;
            }
            row.push(ch);
            row_width += ch_width;
        }

        if line_idx == cursor_line && cursor_char >= line.chars().count() {
            // Cursor after the last char: wrap it onto a fresh row if the
            // current one is full.
            if row_width >= width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            cursor_row = rows.len();
            cursor_col = row_width;
        }
        rows.push(row);
    }

    WrappedInput {
        rows,
        cursor_row,
        cursor_col,
    }
}

/// Calculates the input height from the number of buffer rows.
///
/// Grows with content up to 40% of the terminal, never below one text row.
pub fn calculate_input_height(app: &AppState, terminal_height: u16) -> u16 {
    let line_count = app.input.textarea.lines().len() as u16;
    let max_height = ((f32::from(terminal_height) * INPUT_HEIGHT_MAX_PERCENT) as u16)
        .max(INPUT_HEIGHT_MIN);
    line_count.saturating_add(2).clamp(INPUT_HEIGHT_MIN, max_height)
}

/// Renders the input box and places the terminal cursor.
pub fn render_input(app: &AppState, frame: &mut ratatui::Frame, area: Rect) {
    let can_send = app.input.can_send(app.session.lifecycle());
    let hint_style = if can_send {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_bottom(Line::from(Span::styled(SEND_HINT, hint_style)).alignment(Alignment::Right));

    let inner = block.inner(area);
    if inner.width == 0 || inner.height == 0 {
        frame.render_widget(block, area);
        return;
    }

    if app.input.textarea.is_empty() {
        let placeholder = Line::from(Span::styled(
            app.placeholder.as_str(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(Paragraph::new(placeholder).block(block), area);
        frame.set_cursor_position((inner.x, inner.y));
        return;
    }

    let wrapped = wrap_buffer(&app.input.textarea, inner.width as usize);
    let viewport = inner.height as usize;
    // Keep the cursor row on screen.
    let offset = (wrapped.cursor_row + 1).saturating_sub(viewport);

    let lines: Vec<Line> = wrapped
        .rows
        .into_iter()
        .skip(offset)
        .take(viewport)
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);

    let cursor_x = inner.x + wrapped.cursor_col as u16;
    let cursor_y = inner.y + (wrapped.cursor_row - offset) as u16;
    if cursor_x < inner.right() && cursor_y < inner.bottom() {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
