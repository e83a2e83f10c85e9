//! Projects transcript messages into styled display lines.
//!
//! Pure functions of `(messages, lifecycle, width)`; nothing here touches the
//! terminal.

use charter_types::{Message, Role};
use unicode_width::UnicodeWidthStr;

use super::style::{Style, StyledLine, StyledSpan};
use crate::common::{sanitize_for_display, truncate_with_ellipsis, wrap_text};

const USER_PREFIX: &str = "│ ";
const NOTES_PREFIX: &str = "Note: ";
const SOURCES_LABEL: &str = "Sources:";
const TYPING_FRAMES: [&str; 4] = ["   ", "•  ", "•• ", "•••"];
/// Ticks spent on each typing frame.
const TYPING_TICKS_PER_FRAME: usize = 4;

/// Projects one message.
///
/// An empty answer still produces one (empty) text row.
pub fn project_message(message: &Message, width: usize) -> Vec<StyledLine> {
    let text = sanitize_for_display(&message.text);
    let mut lines = Vec::new();

    match message.role {
        Role::User => {
            let body_width = width.saturating_sub(USER_PREFIX.width()).max(1);
            for row in wrap_text(&text, body_width) {
                lines.push(StyledLine::from_spans(vec![
                    StyledSpan::new(USER_PREFIX, Style::UserPrefix),
                    StyledSpan::new(row, Style::User),
                ]));
            }
        }
        Role::Bot => {
            for row in wrap_text(&text, width) {
                lines.push(StyledLine::from_spans(vec![StyledSpan::new(row, Style::Bot)]));
            }
        }
    }

    if let Some(notes) = message.notes.as_deref().filter(|n| !n.is_empty()) {
        let notes = format!("{NOTES_PREFIX}{}", sanitize_for_display(notes));
        for row in wrap_text(&notes, width) {
            lines.push(StyledLine::from_spans(vec![StyledSpan::new(row, Style::Notes)]));
        }
    }

    if !message.sources.is_empty() {
        lines.push(StyledLine::from_spans(vec![StyledSpan::new(
            SOURCES_LABEL,
            Style::SourcesHeader,
        )]));
        for (idx, source) in message.sources.iter().enumerate() {
            let index = format!("  [{}] ", idx + 1);
            let label = sanitize_for_display(source.label()).replace('\n', " ");
            let label = truncate_with_ellipsis(&label, width.saturating_sub(index.len()).max(1));
            lines.push(StyledLine::from_spans(vec![
                StyledSpan::new(index, Style::SourceIndex),
                StyledSpan::new(label, Style::Link),
            ]));
        }
    }

    lines
}

/// The typing indicator row for the given animation tick.
pub fn typing_indicator(spinner_frame: usize) -> StyledLine {
    let frame = TYPING_FRAMES[(spinner_frame / TYPING_TICKS_PER_FRAME) % TYPING_FRAMES.len()];
    StyledLine::from_spans(vec![StyledSpan::new(frame, Style::TypingIndicator)])
}

/// Projects the whole transcript, one blank row between messages.
///
/// While `sending`, a typing indicator row follows the last message.
pub fn project_transcript(
    messages: &[Message],
    sending: bool,
    spinner_frame: usize,
    width: usize,
) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    for (idx, message) in messages.iter().enumerate() {
        if idx > 0 {
            lines.push(StyledLine::empty());
        }
        lines.extend(project_message(message, width));
    }
    if sending {
        if !lines.is_empty() {
            lines.push(StyledLine::empty());
        }
        lines.push(typing_indicator(spinner_frame));
    }
    lines
}

#[cfg(test)]
mod tests {
    use charter_types::Source;

    use super::*;

    fn texts(lines: &[StyledLine]) -> Vec<String> {
        lines.iter().map(StyledLine::text).collect()
    }

    #[test]
    fn test_user_message_has_prefix() {
        let lines = project_message(&Message::user("When does term start?"), 40);
        assert_eq!(texts(&lines), vec!["│ When does term start?"]);
        assert_eq!(lines[0].spans[0].style, Style::UserPrefix);
        assert_eq!(lines[0].spans[1].style, Style::User);
    }

    #[test]
    fn test_bot_answer_with_notes_and_sources() {
        let message = Message::answer(
            "See section 4.",
            vec![
                Source::new("https://example.org/charter#4").with_title("Charter §4"),
                Source::new("https://example.org/calendar"),
            ],
            Some("Updated 2023.".into()),
        );
        let lines = project_message(&message, 60);
        assert_eq!(
            texts(&lines),
            vec![
                "See section 4.",
                "Note: Updated 2023.",
                "Sources:",
                "  [1] Charter §4",
                "  [2] https://example.org/calendar",
            ]
        );
        assert_eq!(lines[1].spans[0].style, Style::Notes);
        assert_eq!(lines[3].spans[1].style, Style::Link);
    }

    #[test]
    fn test_empty_answer_still_renders_a_row() {
        let lines = project_message(&Message::bot(""), 20);
        assert_eq!(texts(&lines), vec![""]);
    }

    #[test]
    fn test_empty_sources_and_notes_omitted() {
        let message = Message::answer("ok", vec![], None);
        assert_eq!(texts(&project_message(&message, 20)), vec!["ok"]);
    }

    #[test]
    fn test_long_text_wraps_to_width() {
        let lines = project_message(&Message::bot("alpha beta gamma"), 10);
        assert_eq!(texts(&lines), vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn test_transcript_separates_messages_and_shows_typing() {
        let messages = vec![Message::bot("Hi!"), Message::user("q")];
        let idle = project_transcript(&messages, false, 0, 40);
        assert_eq!(texts(&idle), vec!["Hi!", "", "│ q"]);

        let sending = project_transcript(&messages, true, 0, 40);
        assert_eq!(sending.len(), 5);
        assert_eq!(
            sending.last().map(|l| l.spans[0].style),
            Some(Style::TypingIndicator)
        );
    }

    #[test]
    fn test_typing_indicator_animates() {
        let first = typing_indicator(0).text();
        let later = typing_indicator(TYPING_TICKS_PER_FRAME).text();
        assert_ne!(first, later);
        assert_eq!(typing_indicator(TYPING_TICKS_PER_FRAME * TYPING_FRAMES.len()).text(), first);
    }
}
