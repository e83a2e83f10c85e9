//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state and returns effects; it never performs I/O
//! or spawns tasks directly.

use charter_core::ChatError;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Start the single outstanding request for `text`.
    ///
    /// The result comes back as `UiEvent::ChatResponse`.
    PostQuestion { text: String },

    /// Write a failed request to the diagnostic log.
    ReportFailure { error: ChatError },

    /// Open a source link in the system browser.
    OpenBrowser { url: String },
}
