//! Transcript feature: projection of messages into display lines, the
//! autoscroll view and pane rendering.

mod projection;
mod render;
mod scroll;
mod style;

pub use projection::{project_message, project_transcript, typing_indicator};
pub use render::{content_width, render_transcript, transcript_lines};
pub use scroll::{AutoscrollView, ScrollMode};
pub use style::{Style, StyledLine, StyledSpan};
