//! UI-agnostic chat session.
//!
//! `ChatSession` is the request lifecycle controller: it owns the transcript
//! and the IDLE/SENDING flag, and exposes pure transitions that mutate state
//! and return effects for the caller to execute. It never performs I/O.
//!
//! ```text
//!            send_message(text)            complete(Ok | Err)
//!   Idle ───────────────────────▶ Sending ─────────────────────▶ Idle
//!    │ append user msg              │ append answer or fallback
//!    │ effect: PostQuestion         │ effect (Err only): ReportFailure
//! ```
//!
//! At most one request is outstanding per session. `send_message` while
//! `Sending` is dropped, not queued.

mod store;

use charter_types::Message;
pub use store::MessageStore;
use tokio::sync::watch;

use crate::client::ChatReply;
use crate::error::ChatError;

/// Text of the bot message appended when a request attempt fails.
pub const FALLBACK_TEXT: &str = "Sorry, I could not reach the server.";

/// Request lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// No request outstanding; a new question may be sent.
    #[default]
    Idle,
    /// Exactly one request is outstanding.
    Sending,
}

/// Effects returned by session transitions for the caller to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Issue one HTTP request carrying `text`.
    PostQuestion { text: String },
    /// Record a failed attempt to the diagnostic log (never shown to the user).
    ReportFailure { error: ChatError },
}

/// One chat session: transcript plus request lifecycle.
#[derive(Debug)]
pub struct ChatSession {
    store: MessageStore,
    lifecycle: Lifecycle,
}

impl ChatSession {
    /// Creates a session seeded with the greeting bot message.
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            store: MessageStore::seeded(greeting),
            lifecycle: Lifecycle::Idle,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_sending(&self) -> bool {
        self.lifecycle == Lifecycle::Sending
    }

    pub fn transcript(&self) -> &MessageStore {
        &self.store
    }

    pub fn messages(&self) -> &[Message] {
        self.store.snapshot()
    }

    /// Subscribes to transcript changes (see `MessageStore::subscribe`).
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.store.subscribe()
    }

    /// Accepts a question if no request is outstanding.
    ///
    /// The user message is appended before the request effect is returned, so
    /// transcript order always follows send order. Returns no effects when the
    /// send is dropped.
    pub fn send_message(&mut self, text: &str) -> Vec<SessionEffect> {
        if self.lifecycle != Lifecycle::Idle {
            tracing::debug!("send dropped: a request is already outstanding");
            return vec![];
        }

        self.store.append(Message::user(text));
        self.lifecycle = Lifecycle::Sending;
        vec![SessionEffect::PostQuestion {
            text: text.to_string(),
        }]
    }

    /// Applies the outcome of the outstanding request.
    ///
    /// Appends exactly one bot message and returns to `Idle` on both paths.
    /// An outcome arriving while `Idle` has no request to belong to and is
    /// ignored.
    pub fn complete(&mut self, outcome: Result<ChatReply, ChatError>) -> Vec<SessionEffect> {
        if self.lifecycle != Lifecycle::Sending {
            tracing::debug!("response ignored: no request outstanding");
            return vec![];
        }
        self.lifecycle = Lifecycle::Idle;

        match outcome {
            Ok(reply) => {
                self.store.append(reply.into_message());
                vec![]
            }
            Err(error) => {
                self.store.append(Message::bot(FALLBACK_TEXT));
                vec![SessionEffect::ReportFailure { error }]
            }
        }
    }
}
