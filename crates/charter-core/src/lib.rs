//! Core Charter Chat library (config, answering-service client, session).

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use client::{ChatClient, ChatReply};
pub use error::ChatError;
pub use session::{ChatSession, Lifecycle, MessageStore, SessionEffect};
