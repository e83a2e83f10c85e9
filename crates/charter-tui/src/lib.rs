//! Full-screen terminal chat UI for Charter.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use charter_core::ChatClient;
use charter_core::config::Config;
pub use features::{input, transcript};
pub use runtime::TuiRuntime;

/// Runs the interactive chat against `api_base` until the user quits.
///
/// # Errors
/// Returns an error when stdout is not a terminal, the HTTP client cannot be
/// built, or terminal I/O fails.
pub fn run_interactive_chat(config: &Config, api_base: &str) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "Chat mode requires a terminal.\n\
             Use `charter ask '...'` for non-interactive use."
        );
    }

    let client = ChatClient::new(api_base)?;
    tracing::info!(endpoint = client.endpoint(), "starting interactive chat");

    let mut runtime = TuiRuntime::new(config, client)?;
    let result = runtime.run();

    let exchanges = runtime
        .state
        .session
        .messages()
        .iter()
        .filter(|m| m.is_user())
        .count();
    tracing::info!(exchanges, "chat ended");
    result
}
