//! Autoscroll view over the transcript.
//!
//! The view subscribes to the message store's change channel. Every change
//! re-pins it to the newest message, so after each append the visible offset
//! equals the maximum scrollable offset. Manual scrolling anchors the view
//! until the next change.

use tokio::sync::watch;

/// Scroll mode for the transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollMode {
    /// Pinned to the bottom; offset tracks the content.
    #[default]
    FollowLatest,
    /// Held at a fixed offset (lines from the top).
    Anchored { offset: usize },
}

#[derive(Debug)]
pub struct AutoscrollView {
    changes: watch::Receiver<usize>,
    mode: ScrollMode,
    /// Content height from the last layout pass.
    total_lines: usize,
    /// Visible rows from the last layout pass.
    viewport_height: usize,
}

impl AutoscrollView {
    /// Creates a view pinned to the bottom, listening on `changes`.
    pub fn new(changes: watch::Receiver<usize>) -> Self {
        Self {
            changes,
            mode: ScrollMode::FollowLatest,
            total_lines: 0,
            viewport_height: 0,
        }
    }

    /// Reacts to transcript changes since the last call.
    ///
    /// Returns true when the transcript changed (and the view was re-pinned).
    pub fn sync(&mut self) -> bool {
        if !self.changes.has_changed().unwrap_or(false) {
            return false;
        }
        let len = *self.changes.borrow_and_update();
        tracing::trace!(messages = len, "transcript changed, following latest");
        self.mode = ScrollMode::FollowLatest;
        true
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn is_following(&self) -> bool {
        self.mode == ScrollMode::FollowLatest
    }

    pub fn update_layout(&mut self, total_lines: usize, viewport_height: usize) {
        self.total_lines = total_lines;
        self.viewport_height = viewport_height;
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }

    /// Offset (first visible line) for the last layout pass.
    pub fn offset(&self) -> usize {
        self.offset_for(self.total_lines, self.viewport_height)
    }

    /// Offset for content of `total_lines` shown in `viewport_height` rows.
    pub fn offset_for(&self, total_lines: usize, viewport_height: usize) -> usize {
        let max = total_lines.saturating_sub(viewport_height);
        match self.mode {
            ScrollMode::FollowLatest => max,
            ScrollMode::Anchored { offset } => offset.min(max),
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        if self.max_offset() == 0 {
            return;
        }
        let offset = self.offset().saturating_sub(lines);
        self.mode = ScrollMode::Anchored { offset };
    }

    /// Scrolls down; reaching the bottom resumes following.
    pub fn scroll_down(&mut self, lines: usize) {
        let offset = self.offset().saturating_add(lines);
        self.mode = if offset >= self.max_offset() {
            ScrollMode::FollowLatest
        } else {
            ScrollMode::Anchored { offset }
        };
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    pub fn scroll_to_top(&mut self) {
        if self.max_offset() > 0 {
            self.mode = ScrollMode::Anchored { offset: 0 };
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        self.mode = ScrollMode::FollowLatest;
    }

    /// One viewport minus a line of overlap.
    fn page_size(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use charter_core::MessageStore;
    use charter_types::Message;

    use super::*;

    fn view_with_layout(total: usize, viewport: usize) -> (MessageStore, AutoscrollView) {
        let store = MessageStore::seeded("Hi!");
        let mut view = AutoscrollView::new(store.subscribe());
        view.update_layout(total, viewport);
        (store, view)
    }

    #[test]
    fn test_starts_following_at_max_offset() {
        let (_store, view) = view_with_layout(50, 10);
        assert!(view.is_following());
        assert_eq!(view.offset(), 40);
    }

    #[test]
    fn test_offset_is_zero_when_content_fits() {
        let (_store, view) = view_with_layout(5, 10);
        assert_eq!(view.offset(), 0);
        assert_eq!(view.max_offset(), 0);
    }

    #[test]
    fn test_scroll_up_anchors_and_down_resumes_following() {
        let (_store, mut view) = view_with_layout(50, 10);
        view.scroll_up(5);
        assert_eq!(view.mode(), ScrollMode::Anchored { offset: 35 });

        // Growing content leaves an anchored view where it is.
        view.update_layout(60, 10);
        assert_eq!(view.offset(), 35);

        view.scroll_down(100);
        assert!(view.is_following());
        assert_eq!(view.offset(), 50);
    }

    #[test]
    fn test_store_change_repins_to_bottom() {
        let (mut store, mut view) = view_with_layout(50, 10);
        view.page_up();
        assert!(!view.is_following());
        assert!(!view.sync());

        store.append(Message::user("q"));
        assert!(view.sync());
        view.update_layout(55, 10);
        assert_eq!(view.offset(), view.max_offset());

        // Each change is observed once.
        assert!(!view.sync());
    }

    #[test]
    fn test_scroll_up_is_noop_without_overflow() {
        let (_store, mut view) = view_with_layout(3, 10);
        view.scroll_up(1);
        view.scroll_to_top();
        assert!(view.is_following());
    }

    #[test]
    fn test_page_size_overlaps_by_one_line() {
        let (_store, mut view) = view_with_layout(100, 10);
        view.page_up();
        assert_eq!(view.offset(), 81);
        view.scroll_to_top();
        assert_eq!(view.offset(), 0);
        view.page_down();
        assert_eq!(view.offset(), 9);
    }
}
