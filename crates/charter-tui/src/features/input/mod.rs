//! Input feature: the question buffer, its key handling and rendering.

mod render;
mod state;
mod text_buffer;
mod update;

pub use render::{calculate_input_height, render_input};
pub use state::InputState;
pub use text_buffer::{CursorMove, TextBuffer};
pub use update::{KeyResult, handle_main_key, handle_paste};
