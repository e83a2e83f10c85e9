//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! frame ticks, and results of async work sent back through the runtime inbox.

use charter_core::{ChatError, ChatReply};
use crossterm::event::Event;

#[derive(Debug)]
pub enum UiEvent {
    /// Animation tick (drives the typing indicator).
    Tick,
    /// Current terminal size, emitted once per loop iteration.
    Frame { width: u16, height: u16 },
    /// Raw terminal event (key, mouse, paste, resize).
    Terminal(Event),
    /// Outcome of the outstanding chat request.
    ChatResponse(Result<ChatReply, ChatError>),
}
