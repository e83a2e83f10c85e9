//! Chat command handler.

use std::io::{IsTerminal, Read};

use anyhow::{Context, Result};
use charter_core::config::Config;

use super::ask;

pub async fn run(config: &Config, api_base: &str) -> Result<()> {
    // Piped stdin means a one-shot question, not an interactive session.
    if !std::io::stdin().is_terminal() {
        let mut question = String::new();
        std::io::stdin().lock().read_to_string(&mut question)?;
        return ask::run(Some(&question), config, api_base).await;
    }

    charter_tui::run_interactive_chat(config, api_base).context("interactive chat failed")
}
