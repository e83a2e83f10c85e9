//! One-shot question handler.
//!
//! Drives the same session controller as the terminal UI, without a UI: the
//! question is sent, the single attempt is awaited and the resulting bot
//! message is printed.

use std::fmt::Write as _;
use std::io::{IsTerminal, Read};

use anyhow::{Context, Result};
use charter_core::config::Config;
use charter_core::{ChatClient, ChatSession, SessionEffect};
use charter_types::Message;

pub async fn run(question: Option<&str>, config: &Config, api_base: &str) -> Result<()> {
    let question = match question {
        Some(q) => q.to_string(),
        None => read_stdin_question()?,
    };
    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!("Question is empty");
    }

    let client = ChatClient::new(api_base).context("create HTTP client")?;
    let mut session = ChatSession::new(config.greeting.clone());

    let mut pending = session.send_message(question);
    while let Some(effect) = pending.pop() {
        match effect {
            SessionEffect::PostQuestion { text } => {
                let outcome = client.ask(&text).await;
                pending.extend(session.complete(outcome));
            }
            SessionEffect::ReportFailure { error } => {
                tracing::warn!(
                    endpoint = client.endpoint(),
                    kind = error.kind(),
                    error = %error,
                    "chat request failed"
                );
            }
        }
    }

    if let Some(answer) = session.transcript().last().filter(|m| m.is_bot()) {
        print!("{}", format_answer(answer));
    }
    Ok(())
}

fn read_stdin_question() -> Result<String> {
    if std::io::stdin().is_terminal() {
        anyhow::bail!("No question provided. Pass it as an argument or pipe it via stdin.");
    }
    let mut question = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut question)
        .context("read question from stdin")?;
    Ok(question)
}

/// Plain-text rendering of a bot message: text, notes, numbered sources.
fn format_answer(message: &Message) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", message.text);
    if let Some(notes) = message.notes.as_deref() {
        let _ = writeln!(out, "\nNote: {notes}");
    }
    if !message.sources.is_empty() {
        let _ = writeln!(out, "\nSources:");
        for (idx, source) in message.sources.iter().enumerate() {
            if source.label() == source.url {
                let _ = writeln!(out, "  [{}] {}", idx + 1, source.url);
            } else {
                let _ = writeln!(out, "  [{}] {} <{}>", idx + 1, source.label(), source.url);
            }
        }
    }
    out
}
