/// A styled span of text (UI-agnostic).
///
/// Converted to ratatui `Span`/`Line` types at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A line of styled spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    pub fn empty() -> Self {
        StyledLine { spans: vec![] }
    }

    pub fn from_spans(spans: Vec<StyledSpan>) -> Self {
        StyledLine { spans }
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Semantic style identifiers (UI-agnostic).
///
/// The renderer maps these to terminal styles, which keeps projection free of
/// terminal dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Bar in front of user messages ("│ ").
    UserPrefix,
    /// User message content.
    User,
    /// Bot message content.
    Bot,
    /// Dimmed annotation under an answer.
    Notes,
    /// The "Sources:" label.
    SourcesHeader,
    /// "[n]" index in front of a source.
    SourceIndex,
    /// Underlined link label.
    Link,
    /// Animated typing row shown while a request is outstanding.
    TypingIndicator,
}
