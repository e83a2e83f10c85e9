//! Input controller state.

use charter_core::Lifecycle;

use super::text_buffer::TextBuffer;

/// The editable question buffer.
///
/// Whitespace is preserved while editing; only submission looks at the
/// trimmed text.
#[derive(Debug, Default)]
pub struct InputState {
    pub textarea: TextBuffer,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw buffer contents.
    pub fn text(&self) -> String {
        self.textarea.text()
    }

    /// Replaces the buffer contents verbatim.
    pub fn set_input(&mut self, text: &str) {
        self.textarea.set_text(text);
    }

    /// Buffer contents with leading and trailing whitespace removed.
    pub fn trimmed(&self) -> String {
        self.text().trim().to_string()
    }

    /// True when the trimmed text is non-empty and no request is outstanding.
    pub fn can_send(&self, lifecycle: Lifecycle) -> bool {
        lifecycle == Lifecycle::Idle && !self.trimmed().is_empty()
    }

    /// Takes the trimmed text for sending and clears the buffer.
    ///
    /// Returns `None` and leaves the buffer untouched when sending is not
    /// allowed. The buffer is cleared before any response arrives, so text
    /// submitted for a request that later fails is not restored.
    pub fn submit(&mut self, lifecycle: Lifecycle) -> Option<String> {
        if !self.can_send(lifecycle) {
            return None;
        }
        let text = self.trimmed();
        self.textarea.clear();
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_send_requires_text_and_idle() {
        let mut input = InputState::new();
        assert!(!input.can_send(Lifecycle::Idle));

        input.set_input("   \n\t ");
        assert!(!input.can_send(Lifecycle::Idle));

        input.set_input("When does term start?");
        assert!(input.can_send(Lifecycle::Idle));
        assert!(!input.can_send(Lifecycle::Sending));
    }

    #[test]
    fn test_set_input_preserves_whitespace() {
        let mut input = InputState::new();
        input.set_input("  padded  ");
        assert_eq!(input.text(), "  padded  ");
        assert_eq!(input.trimmed(), "padded");
    }

    #[test]
    fn test_submit_trims_and_clears() {
        let mut input = InputState::new();
        input.set_input("  What is the admission policy?  ");
        assert_eq!(
            input.submit(Lifecycle::Idle).as_deref(),
            Some("What is the admission policy?")
        );
        assert!(input.textarea.is_empty());
    }

    #[test]
    fn test_submit_blocked_keeps_buffer() {
        let mut input = InputState::new();
        input.set_input("second question");
        assert_eq!(input.submit(Lifecycle::Sending), None);
        assert_eq!(input.text(), "second question");

        input.set_input("   ");
        assert_eq!(input.submit(Lifecycle::Idle), None);
        assert_eq!(input.text(), "   ");
    }
}
