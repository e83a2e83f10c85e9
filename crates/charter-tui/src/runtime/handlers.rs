//! Effect handlers.
//!
//! Pure async functions (or plain I/O calls) that perform one effect and
//! report back as a `UiEvent` where there is a result to report. They never
//! touch `AppState`.

use charter_core::{ChatClient, ChatError};

use crate::events::UiEvent;

/// Issues the single request for `text` and wraps the outcome.
pub async fn post_question(client: ChatClient, text: String) -> UiEvent {
    let outcome = client.ask(&text).await;
    if outcome.is_ok() {
        tracing::debug!("answer received");
    }
    UiEvent::ChatResponse(outcome)
}

/// Writes a failed attempt to the diagnostic log.
pub fn report_failure(endpoint: &str, error: &ChatError) {
    tracing::warn!(endpoint, kind = error.kind(), error = %error, "chat request failed");
}

/// Opens `url` in the system browser. Failures are logged, not surfaced.
pub fn open_browser(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!(url, error = %e, "failed to open source link");
    }
}
