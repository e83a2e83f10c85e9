//! Append-only transcript storage.

use charter_types::Message;
use tokio::sync::watch;

/// Ordered, append-only transcript of one session.
///
/// Entries are never updated, reordered or removed. Every append bumps the
/// change channel so views can react without polling the messages themselves.
#[derive(Debug)]
pub struct MessageStore {
    messages: Vec<Message>,
    changes: watch::Sender<usize>,
}

impl MessageStore {
    /// Creates a store whose first entry is the seed greeting.
    pub fn seeded(greeting: impl Into<String>) -> Self {
        let messages = vec![Message::bot(greeting)];
        let (changes, _) = watch::channel(messages.len());
        Self { messages, changes }
    }

    /// Appends a message to the end of the transcript and notifies subscribers.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.changes.send_replace(self.messages.len());
    }

    /// Current ordered sequence of messages.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Subscribes to transcript changes.
    ///
    /// The receiver yields the transcript length after each append; the value
    /// present at subscription time is already marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.changes.subscribe()
    }
}
