//! Cross-feature state mutations.
//!
//! Feature reducers only own their slice of state. When a key handled by one
//! feature must change another (the input submitting to the session, or
//! scrolling the transcript), it returns a mutation that the top-level
//! reducer applies.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    Session(SessionMutation),
    Transcript(TranscriptMutation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMutation {
    /// Hand an already-trimmed question to the request lifecycle.
    SendMessage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptMutation {
    ScrollUp(usize),
    ScrollDown(usize),
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
}
