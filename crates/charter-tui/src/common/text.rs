//! Text helpers shared by the transcript and input renderers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// CSI sequences, OSC sequences (BEL or ST terminated), other two-byte
/// escapes, and a bare ESC as the last resort.
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b(?:\[[0-?]*[ -/]*[@-~]|\][^\x07\x1b]*(?:\x07|\x1b\\)?|[@-Z\\^_])?")
        .expect("Failed to compile ANSI escape regex")
});

/// Makes untrusted text safe to draw in the terminal.
///
/// ANSI escape sequences are removed whole, tabs become four spaces and
/// `\r\n` / `\r` line endings become `\n`. Borrows when there is nothing to
/// change.
pub fn sanitize_for_display(s: &str) -> Cow<'_, str> {
    if !s.contains(['\x1b', '\t', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        ANSI_ESCAPE
            .replace_all(s, "")
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace('\t', "    "),
    )
}

/// Truncates `s` to at most `max_width` terminal columns, ending with `…`.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> Cow<'_, str> {
    if s.width() <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = g.width();
        if used + w > budget {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}

/// Word-wraps `text` to `width` columns.
///
/// Explicit newlines always start a new row (an empty paragraph yields an
/// empty row). Words wider than the row are broken at grapheme boundaries.
/// Whitespace at a wrap point is dropped.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, width, &mut rows);
    }
    rows
}

fn wrap_paragraph(paragraph: &str, width: usize, rows: &mut Vec<String>) {
    let mut row = String::new();
    let mut row_width = 0;

    for token in paragraph.split_word_bounds() {
        let token_width = token.width();
        if row_width + token_width <= width {
            row.push_str(token);
            row_width += token_width;
            continue;
        }

        if token.trim().is_empty() {
            rows.push(finish_row(&mut row));
            row_width = 0;
            continue;
        }

        if row_width > 0 {
            rows.push(finish_row(&mut row));
            row_width = 0;
        }

        for g in token.graphemes(true) {
            let w = g.width();
            if row_width + w > width && row_width > 0 {
                rows.push(finish_row(&mut row));
                row_width = 0;
            }
            row.push_str(g);
            row_width += w;
        }
    }

    rows.push(finish_row(&mut row));
}

fn finish_row(row: &mut String) -> String {
    let mut taken = std::mem::take(row);
    let kept = taken.trim_end().len();
    taken.truncate(kept);
    taken
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_escapes_and_tabs() {
        let result = sanitize_for_display("\x1b[31mred\x1b[0m\ttext");
        assert_eq!(result, "red    text");
    }

    #[test]
    fn test_sanitize_strips_whole_sequences() {
        assert_eq!(sanitize_for_display("\x1b[1;32mok\x1b[K"), "ok");
        assert_eq!(
            sanitize_for_display("\x1b]8;;https://example.org\x07link\x1b]8;;\x1b\\"),
            "link"
        );
        assert_eq!(sanitize_for_display("a\x1bMb\x1b"), "ab");
    }

    #[test]
    fn test_sanitize_normalizes_line_endings() {
        assert_eq!(sanitize_for_display("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_sanitize_borrows_clean_text() {
        assert!(matches!(sanitize_for_display("clean"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("charter", 10), "charter");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_with_ellipsis("ISSA Charter Chat", 8), "ISSA Ch…");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        // Each CJK character takes two columns.
        assert_eq!(truncate_with_ellipsis("中文test", 6), "中文t…");
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(wrap_text("hello world", 5), vec!["hello", "world"]);
        assert_eq!(
            wrap_text("see the admissions policy", 12),
            vec!["see the", "admissions", "policy"]
        );
    }

    #[test]
    fn test_wrap_keeps_explicit_newlines() {
        assert_eq!(wrap_text("one\n\ntwo", 20), vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_empty_text_is_one_empty_row() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
