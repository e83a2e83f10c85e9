//! Transcript pane rendering.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style as TuiStyle};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::projection::project_transcript;
use super::style::{Style, StyledLine};
use crate::common::Scrollbar;
use crate::state::AppState;

/// Horizontal margin on each side of the transcript.
pub const TRANSCRIPT_MARGIN: u16 = 1;
/// Column reserved for the scrollbar.
pub const SCROLLBAR_WIDTH: u16 = 1;

/// Text width available to the projection for a pane of `area_width` columns.
pub fn content_width(area_width: u16) -> usize {
    area_width.saturating_sub(TRANSCRIPT_MARGIN * 2 + SCROLLBAR_WIDTH) as usize
}

/// Projects the current transcript at `width`.
pub fn transcript_lines(app: &AppState, width: usize) -> Vec<StyledLine> {
    project_transcript(
        app.session.messages(),
        app.session.is_sending(),
        app.spinner_frame,
        width,
    )
}

fn style_to_tui(style: Style) -> TuiStyle {
    match style {
        Style::Plain | Style::Bot => TuiStyle::default(),
        Style::UserPrefix => TuiStyle::default().fg(Color::Cyan),
        Style::User => TuiStyle::default()
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC),
        Style::Notes => TuiStyle::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        Style::SourcesHeader => TuiStyle::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
        Style::SourceIndex => TuiStyle::default().fg(Color::DarkGray),
        Style::Link => TuiStyle::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
        Style::TypingIndicator => TuiStyle::default().fg(Color::Yellow),
    }
}

fn to_line(line: StyledLine) -> Line<'static> {
    Line::from(
        line.spans
            .into_iter()
            .map(|span| Span::styled(span.text, style_to_tui(span.style)))
            .collect::<Vec<_>>(),
    )
}

/// Renders the visible slice of the transcript plus its scrollbar.
pub fn render_transcript(app: &AppState, frame: &mut ratatui::Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let lines = transcript_lines(app, content_width(area.width));
    let total = lines.len();
    let viewport = area.height as usize;
    let offset = app.autoscroll.offset_for(total, viewport);

    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(offset)
        .take(viewport)
        .map(to_line)
        .collect();

    let text_area = Rect {
        x: area.x + TRANSCRIPT_MARGIN,
        y: area.y,
        width: area
            .width
            .saturating_sub(TRANSCRIPT_MARGIN * 2 + SCROLLBAR_WIDTH),
        height: area.height,
    };
    frame.render_widget(Paragraph::new(visible), text_area);
    frame.render_widget(Scrollbar::new(total, viewport, offset), area);
}
