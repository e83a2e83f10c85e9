//! Shared data model for Charter Chat.
//!
//! These types are UI-agnostic: the session controller, the HTTP client and
//! the terminal renderer all speak in terms of `Message` and `Source`.

use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// A citation attached to a bot answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Source {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Display label: the title, or the raw URL when the title is absent or empty.
    pub fn label(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.url,
        }
    }
}

/// One transcript entry.
///
/// `sources` is always present (possibly empty); `notes` is only set when the
/// answering service attached a non-empty annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Message {
    /// Creates a user message with no sources or notes.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            sources: Vec::new(),
            notes: None,
        }
    }

    /// Creates a plain bot message with no sources or notes.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            sources: Vec::new(),
            notes: None,
        }
    }

    /// Creates a bot answer. Empty notes are treated as absent.
    pub fn answer(text: impl Into<String>, sources: Vec<Source>, notes: Option<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            sources,
            notes: notes.filter(|n| !n.is_empty()),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_bot(&self) -> bool {
        self.role == Role::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label_falls_back_to_url() {
        let bare = Source::new("https://example.org/charter#4");
        assert_eq!(bare.label(), "https://example.org/charter#4");

        let titled = Source::new("https://example.org").with_title("Charter");
        assert_eq!(titled.label(), "Charter");

        let empty_title = Source::new("https://example.org").with_title("");
        assert_eq!(empty_title.label(), "https://example.org");
    }

    #[test]
    fn test_answer_drops_empty_notes() {
        let msg = Message::answer("ok", Vec::new(), Some(String::new()));
        assert_eq!(msg.notes, None);

        let msg = Message::answer("ok", Vec::new(), Some("Updated 2023.".into()));
        assert_eq!(msg.notes.as_deref(), Some("Updated 2023."));
    }

    #[test]
    fn test_message_deserializes_without_sources() {
        let msg: Message = serde_json::from_str(r#"{"role":"bot","text":"hi"}"#).unwrap();
        assert!(msg.sources.is_empty());
        assert!(msg.notes.is_none());
        assert!(msg.is_bot());
    }
}
