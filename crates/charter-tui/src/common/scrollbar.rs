//! Transcript scrollbar.
//!
//! Drawn in the rightmost column of its area. The thumb keeps a fixed length
//! for a given content size and lands exactly on the last row when the view
//! is pinned to the bottom.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB: &str = "█";
const TRACK: &str = "│";

#[derive(Debug, Clone, Copy)]
pub struct Scrollbar {
    total_lines: usize,
    viewport_height: usize,
    offset: usize,
}

impl Scrollbar {
    pub fn new(total_lines: usize, viewport_height: usize, offset: usize) -> Self {
        Self {
            total_lines,
            viewport_height,
            offset,
        }
    }

    /// Hidden when everything fits on screen.
    pub fn is_visible(&self) -> bool {
        self.total_lines > self.viewport_height
    }

    /// Returns `(thumb_start, thumb_len)` in rows for a track of `track_len`.
    fn thumb(&self, track_len: usize) -> (usize, usize) {
        let max_offset = self.total_lines.saturating_sub(self.viewport_height);
        let visible = self.viewport_height.min(track_len);

        let denom = (self.total_lines + visible).saturating_sub(1).max(1) as u64;
        let len = ((track_len as u64 * visible as u64 + denom / 2) / denom) as usize;
        let len = len.clamp(1, track_len.max(1));

        let room = track_len.saturating_sub(len);
        let start = if max_offset == 0 {
            0
        } else {
            (self.offset.min(max_offset) as u64 * room as u64 / max_offset as u64) as usize
        };
        (start, len)
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.is_visible() || area.height == 0 || area.width == 0 {
            return;
        }

        let (start, len) = self.thumb(area.height as usize);
        let x = area.right() - 1;
        let style = Style::default().fg(Color::DarkGray);
        for (row, y) in (area.top()..area.bottom()).enumerate() {
            let symbol = if (start..start + len).contains(&row) {
                THUMB
            } else {
                TRACK
            };
            buf.set_string(x, y, symbol, style);
        }
    }
}
