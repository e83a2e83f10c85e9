//! Input feature reducer.
//!
//! Handles editing keys, submission and paste for the message buffer.
//! Keys that affect other features come back as effects or mutations.

use charter_core::Lifecycle;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers as CrosstermKeyModifiers};

use super::CursorMove;
use super::state::InputState;
use crate::common::sanitize_for_display;
use crate::effects::UiEffect;
use crate::mutations::{SessionMutation, StateMutation, TranscriptMutation};

/// Result type for key handlers.
pub type KeyResult = (Vec<UiEffect>, Vec<StateMutation>);

fn handled() -> Option<KeyResult> {
    Some((vec![], vec![]))
}

fn scroll(mutation: TranscriptMutation) -> Option<KeyResult> {
    Some((vec![], vec![StateMutation::Transcript(mutation)]))
}

/// Inserts pasted text at the cursor after stripping escapes and tabs.
pub fn handle_paste(input: &mut InputState, text: &str) {
    input.textarea.insert_str(&sanitize_for_display(text));
}

/// Handles a key press aimed at the input.
pub fn handle_main_key(input: &mut InputState, lifecycle: Lifecycle, key: KeyEvent) -> KeyResult {
    let mods = Modifiers::from(&key);

    // First match wins.
    handle_control_keys(input, key.code, &mods)
        .or_else(|| handle_line_editing(input, key.code, &mods))
        .or_else(|| handle_word_editing(input, key.code, &mods))
        .or_else(|| handle_navigation(input, key.code, &mods))
        .or_else(|| handle_submission(input, lifecycle, key.code, &mods))
        .unwrap_or_else(|| handle_default_input(input, key.code, &mods))
}

/// Parsed key modifiers for cleaner pattern matching.
struct Modifiers {
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl Modifiers {
    fn from(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(CrosstermKeyModifiers::CONTROL),
            shift: key.modifiers.contains(CrosstermKeyModifiers::SHIFT),
            alt: key.modifiers.contains(CrosstermKeyModifiers::ALT),
        }
    }

    fn only_ctrl(&self) -> bool {
        self.ctrl && !self.shift && !self.alt
    }

    fn only_alt(&self) -> bool {
        self.alt && !self.ctrl && !self.shift
    }
}

// =============================================================================
// Control keys: Ctrl+C, Ctrl+D
// =============================================================================

fn handle_control_keys(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<KeyResult> {
    match code {
        KeyCode::Char('c') if mods.only_ctrl() => Some((vec![UiEffect::Quit], vec![])),
        // Ctrl+D quits on an empty buffer and deletes forward otherwise.
        KeyCode::Char('d') if mods.only_ctrl() => {
            if input.textarea.is_empty() {
                Some((vec![UiEffect::Quit], vec![]))
            } else {
                input.textarea.delete_next_char();
                handled()
            }
        }
        _ => None,
    }
}

// =============================================================================
// Line editing: Ctrl+A, Ctrl+E, Ctrl+U, Ctrl+K, Ctrl+J
// =============================================================================

fn handle_line_editing(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<KeyResult> {
    if !mods.only_ctrl() {
        return None;
    }
    match code {
        KeyCode::Char('a') => input.textarea.move_cursor(CursorMove::Head),
        KeyCode::Char('e') => input.textarea.move_cursor(CursorMove::End),
        KeyCode::Char('u') => input.textarea.delete_line_by_head(),
        KeyCode::Char('k') => input.textarea.delete_line_by_end(),
        // Terminals without keyboard enhancement report Shift+Enter as a
        // plain Enter; Ctrl+J is the portable newline.
        KeyCode::Char('j') => input.textarea.insert_newline(),
        _ => return None,
    }
    handled()
}

// =============================================================================
// Word editing: Ctrl+W, Alt+Backspace, Alt+Left/Right
// =============================================================================

fn handle_word_editing(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<KeyResult> {
    match code {
        KeyCode::Char('w') if mods.only_ctrl() => input.textarea.delete_word_left(),
        KeyCode::Backspace if mods.only_alt() || mods.only_ctrl() => {
            input.textarea.delete_word_left();
        }
        KeyCode::Left if mods.only_alt() || mods.only_ctrl() => input.textarea.move_word_left(),
        KeyCode::Right if mods.only_alt() || mods.only_ctrl() => {
            input.textarea.move_word_right();
        }
        _ => return None,
    }
    handled()
}

// =============================================================================
// Navigation: arrows inside the buffer, paging through the transcript
// =============================================================================

fn handle_navigation(input: &mut InputState, code: KeyCode, mods: &Modifiers) -> Option<KeyResult> {
    match code {
        KeyCode::PageUp => scroll(TranscriptMutation::PageUp),
        KeyCode::PageDown => scroll(TranscriptMutation::PageDown),
        KeyCode::Home if mods.ctrl => scroll(TranscriptMutation::ScrollToTop),
        KeyCode::End if mods.ctrl => scroll(TranscriptMutation::ScrollToBottom),
        KeyCode::Left => {
            input.textarea.move_cursor(CursorMove::Back);
            handled()
        }
        KeyCode::Right => {
            input.textarea.move_cursor(CursorMove::Forward);
            handled()
        }
        KeyCode::Up => {
            input.textarea.move_cursor(CursorMove::Up);
            handled()
        }
        KeyCode::Down => {
            input.textarea.move_cursor(CursorMove::Down);
            handled()
        }
        KeyCode::Home => {
            input.textarea.move_cursor(CursorMove::Head);
            handled()
        }
        KeyCode::End => {
            input.textarea.move_cursor(CursorMove::End);
            handled()
        }
        _ => None,
    }
}

// =============================================================================
// Submission: Enter key
// =============================================================================

fn handle_submission(
    input: &mut InputState,
    lifecycle: Lifecycle,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<KeyResult> {
    match code {
        KeyCode::Enter if mods.shift => {
            input.textarea.insert_newline();
            handled()
        }
        KeyCode::Enter => match input.submit(lifecycle) {
            Some(text) => Some((
                vec![],
                vec![StateMutation::Session(SessionMutation::SendMessage(text))],
            )),
            None => handled(),
        },
        _ => None,
    }
}

// =============================================================================
// Default input handling: character insertion, Tab, Backspace, Delete
// =============================================================================

fn handle_default_input(input: &mut InputState, code: KeyCode, mods: &Modifiers) -> KeyResult {
    match code {
        // Tabs are stored as spaces so cursor math matches what is drawn.
        KeyCode::Tab => input.textarea.insert_str("    "),
        KeyCode::Backspace => input.textarea.delete_prev_char(),
        KeyCode::Delete => input.textarea.delete_next_char(),
        KeyCode::Char(ch) if !mods.ctrl => input.textarea.insert_char(ch),
        _ => {}
    }
    (vec![], vec![])
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn type_text(input: &mut InputState, text: &str) {
        for ch in text.chars() {
            handle_main_key(input, Lifecycle::Idle, key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_enter_submits_trimmed_text() {
        let mut input = InputState::new();
        input.set_input("  What is the admission policy?  ");

        let (effects, mutations) = handle_main_key(&mut input, Lifecycle::Idle, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(
            mutations,
            vec![StateMutation::Session(SessionMutation::SendMessage(
                "What is the admission policy?".into()
            ))]
        );
        assert!(input.textarea.is_empty());
    }

    #[test]
    fn test_enter_while_sending_does_nothing() {
        let mut input = InputState::new();
        input.set_input("second question");

        let (effects, mutations) =
            handle_main_key(&mut input, Lifecycle::Sending, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(mutations.is_empty());
        assert_eq!(input.text(), "second question");
    }

    #[test]
    fn test_enter_on_blank_input_does_nothing() {
        let mut input = InputState::new();
        input.set_input("   ");
        let (_, mutations) = handle_main_key(&mut input, Lifecycle::Idle, key(KeyCode::Enter));
        assert!(mutations.is_empty());
        assert_eq!(input.text(), "   ");
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        let mut input = InputState::new();
        type_text(&mut input, "line one");
        let (_, mutations) = handle_main_key(
            &mut input,
            Lifecycle::Idle,
            key_with(KeyCode::Enter, KeyModifiers::SHIFT),
        );
        type_text(&mut input, "two");

        assert!(mutations.is_empty());
        assert_eq!(input.text(), "line one\ntwo");
    }

    #[test]
    fn test_alt_enter_submits() {
        let mut input = InputState::new();
        input.set_input("hi");

        let (_, mutations) = handle_main_key(
            &mut input,
            Lifecycle::Idle,
            key_with(KeyCode::Enter, KeyModifiers::ALT),
        );
        assert_eq!(
            mutations,
            vec![StateMutation::Session(SessionMutation::SendMessage(
                "hi".into()
            ))]
        );
        assert!(input.textarea.is_empty());
    }

    #[test]
    fn test_ctrl_j_inserts_newline() {
        let mut input = InputState::new();
        type_text(&mut input, "a");
        handle_main_key(
            &mut input,
            Lifecycle::Idle,
            key_with(KeyCode::Char('j'), KeyModifiers::CONTROL),
        );
        assert_eq!(input.text(), "a\n");
    }

    #[test]
    fn test_editing_allowed_while_sending() {
        let mut input = InputState::new();
        for ch in "draft".chars() {
            handle_main_key(&mut input, Lifecycle::Sending, key(KeyCode::Char(ch)));
        }
        handle_main_key(&mut input, Lifecycle::Sending, key(KeyCode::Backspace));
        assert_eq!(input.text(), "draf");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut input = InputState::new();
        input.set_input("unsent");
        let (effects, _) = handle_main_key(
            &mut input,
            Lifecycle::Idle,
            key_with(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(effects, vec![UiEffect::Quit]);
    }

    #[test]
    fn test_ctrl_d_quits_only_when_empty() {
        let ctrl_d = key_with(KeyCode::Char('d'), KeyModifiers::CONTROL);

        let mut input = InputState::new();
        let (effects, _) = handle_main_key(&mut input, Lifecycle::Idle, ctrl_d);
        assert_eq!(effects, vec![UiEffect::Quit]);

        input.set_input("ab");
        input.textarea.move_cursor(CursorMove::Head);
        let (effects, _) = handle_main_key(&mut input, Lifecycle::Idle, ctrl_d);
        assert!(effects.is_empty());
        assert_eq!(input.text(), "b");
    }

    #[test]
    fn test_page_keys_scroll_transcript() {
        let mut input = InputState::new();
        let (_, mutations) = handle_main_key(&mut input, Lifecycle::Idle, key(KeyCode::PageUp));
        assert_eq!(
            mutations,
            vec![StateMutation::Transcript(TranscriptMutation::PageUp)]
        );
    }

    #[test]
    fn test_paste_is_sanitized() {
        let mut input = InputState::new();
        handle_paste(&mut input, "\x1b[1mbold\x1b[0m\tand\r\nmore");
        assert_eq!(input.text(), "bold    and\nmore");
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut input = InputState::new();
        type_text(&mut input, "staff policies");
        handle_main_key(
            &mut input,
            Lifecycle::Idle,
            key_with(KeyCode::Char('w'), KeyModifiers::CONTROL),
        );
        assert_eq!(input.text(), "staff ");
    }
}
