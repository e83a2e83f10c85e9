//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use charter_core::SessionEffect;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::mutations::{SessionMutation, StateMutation, TranscriptMutation};
use crate::state::AppState;
use crate::{input, render, transcript};

/// Lines scrolled per mouse wheel notch.
const MOUSE_SCROLL_LINES: usize = 3;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute. Transcript changes made while handling the
/// event are pushed to the autoscroll view before returning.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(app, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ChatResponse(outcome) => session_effects(app.session.complete(outcome)),
    };
    app.autoscroll.sync();
    effects
}

/// Maps session effects to runtime effects.
fn session_effects(effects: Vec<SessionEffect>) -> Vec<UiEffect> {
    effects
        .into_iter()
        .map(|effect| match effect {
            SessionEffect::PostQuestion { text } => UiEffect::PostQuestion { text },
            SessionEffect::ReportFailure { error } => UiEffect::ReportFailure { error },
        })
        .collect()
}

fn handle_frame(app: &mut AppState, width: u16, height: u16) {
    app.terminal_size = (width, height);
    let area = render::layout(app, Rect::new(0, 0, width, height)).transcript;
    let total = transcript::transcript_lines(app, transcript::content_width(area.width)).len();
    app.autoscroll.update_layout(total, area.height as usize);
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        // Release events are reported by some terminals; act on press/repeat only.
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            input::handle_paste(&mut app.input, &text);
            vec![]
        }
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            vec![]
        }
        Event::Resize(width, height) => {
            handle_frame(app, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('o') && key.modifiers == KeyModifiers::CONTROL {
        return open_latest_sources(app);
    }

    let (mut effects, mutations) =
        input::handle_main_key(&mut app.input, app.session.lifecycle(), key);
    effects.extend(apply_mutations(app, mutations));
    effects
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.autoscroll.scroll_up(MOUSE_SCROLL_LINES),
        MouseEventKind::ScrollDown => app.autoscroll.scroll_down(MOUSE_SCROLL_LINES),
        _ => {}
    }
}

/// Opens every source of the newest bot message that has sources.
fn open_latest_sources(app: &AppState) -> Vec<UiEffect> {
    app.session
        .messages()
        .iter()
        .rev()
        .find(|m| m.is_bot() && !m.sources.is_empty())
        .map(|m| {
            m.sources
                .iter()
                .map(|s| UiEffect::OpenBrowser { url: s.url.clone() })
                .collect()
        })
        .unwrap_or_default()
}

// ============================================================================
// Mutations
// ============================================================================

fn apply_mutations(app: &mut AppState, mutations: Vec<StateMutation>) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    for mutation in mutations {
        match mutation {
            StateMutation::Session(SessionMutation::SendMessage(text)) => {
                effects.extend(session_effects(app.session.send_message(&text)));
            }
            StateMutation::Transcript(mutation) => apply_transcript_mutation(app, mutation),
        }
    }
    effects
}

fn apply_transcript_mutation(app: &mut AppState, mutation: TranscriptMutation) {
    let view = &mut app.autoscroll;
    match mutation {
        TranscriptMutation::ScrollUp(lines) => view.scroll_up(lines),
        TranscriptMutation::ScrollDown(lines) => view.scroll_down(lines),
        TranscriptMutation::PageUp => view.page_up(),
        TranscriptMutation::PageDown => view.page_down(),
        TranscriptMutation::ScrollToTop => view.scroll_to_top(),
        TranscriptMutation::ScrollToBottom => view.scroll_to_bottom(),
    }
}
