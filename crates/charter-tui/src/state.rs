//! Application state for the terminal UI.
//!
//! Everything the reducer mutates and the renderer reads lives here. The
//! session owns the transcript and request lifecycle; the UI only adds the
//! input buffer, the autoscroll view and display settings.

use charter_core::ChatSession;
use charter_core::config::Config;

use crate::input::InputState;
use crate::transcript::AutoscrollView;

#[derive(Debug)]
pub struct AppState {
    /// Transcript plus IDLE/SENDING lifecycle.
    pub session: ChatSession,
    pub input: InputState,
    /// Subscribed to `session` transcript changes.
    pub autoscroll: AutoscrollView,
    /// Header title.
    pub title: String,
    /// Hint shown while the input is empty.
    pub placeholder: String,
    /// Chat endpoint, shown in the status line.
    pub endpoint: String,
    /// Animation counter advanced on every tick.
    pub spinner_frame: usize,
    pub terminal_size: (u16, u16),
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &Config, endpoint: impl Into<String>) -> Self {
        let session = ChatSession::new(config.greeting.clone());
        let autoscroll = AutoscrollView::new(session.subscribe());
        Self {
            session,
            input: InputState::new(),
            autoscroll,
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
            endpoint: endpoint.into(),
            spinner_frame: 0,
            terminal_size: (0, 0),
            should_quit: false,
        }
    }
}
