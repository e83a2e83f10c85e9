mod scrollbar;
mod text;

pub use scrollbar::Scrollbar;
pub use text::{sanitize_for_display, truncate_with_ellipsis, wrap_text};
