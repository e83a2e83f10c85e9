//! Top-level view.
//!
//! Splits the screen into header, transcript, input and status line, and
//! delegates each pane to its feature renderer. Reads state only.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::common::truncate_with_ellipsis;
use crate::state::AppState;
use crate::{input, transcript};

pub const HEADER_HEIGHT: u16 = 1;
pub const STATUS_HEIGHT: u16 = 1;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const KEY_HINTS: &str = "Ctrl+O sources · PgUp/PgDn scroll · Ctrl+C quit";

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub transcript: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Computes the screen regions for `area`.
///
/// The reducer uses this too, so scroll math sees the same viewport the
/// renderer draws.
pub fn layout(app: &AppState, area: Rect) -> ScreenLayout {
    let input_height = input::calculate_input_height(app, area.height);
    let [header, transcript, input, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(input_height),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);
    ScreenLayout {
        header,
        transcript,
        input,
        status,
    }
}

/// Renders the whole screen.
pub fn render(app: &AppState, frame: &mut ratatui::Frame) {
    let areas = layout(app, frame.area());
    render_header(app, frame, areas.header);
    transcript::render_transcript(app, frame, areas.transcript);
    input::render_input(app, frame, areas.input);
    render_status_line(app, frame, areas.status);
}

fn render_header(app: &AppState, frame: &mut ratatui::Frame, area: Rect) {
    let title = truncate_with_ellipsis(&app.title, area.width as usize);
    let header = Paragraph::new(Line::from(Span::styled(
        title.into_owned(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_status_line(app: &AppState, frame: &mut ratatui::Frame, area: Rect) {
    let state = if app.session.is_sending() {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        Span::styled(
            format!(" {spinner} Waiting for answer…"),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(" ● Ready", Style::default().fg(Color::Green))
    };

    let dim = Style::default().fg(Color::DarkGray);
    let left_width = state.content.width();
    let right = format!("{KEY_HINTS} · {} ", app.endpoint);
    let room = (area.width as usize).saturating_sub(left_width + 1);
    let right = truncate_with_ellipsis(&right, room).into_owned();
    let gap = (area.width as usize).saturating_sub(left_width + right.width());

    let line = Line::from(vec![
        state,
        Span::raw(" ".repeat(gap)),
        Span::styled(right, dim),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
