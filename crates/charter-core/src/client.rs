//! HTTP client for the answering service.
//!
//! One call is one attempt: no retries, no backoff and no request timeout.

use charter_types::{Message, Source};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChatError;

/// Standard User-Agent header for Charter requests.
pub const USER_AGENT: &str = concat!("charter/", env!("CARGO_PKG_VERSION"));

/// Stands in for an error response body that could not be read.
const UNREADABLE_BODY: &str = "<unreadable body>";

/// Request body for `POST {api_base}/chat`.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Successful response body.
///
/// `answer` is optional on purpose: a missing answer still renders (as empty
/// text) instead of being treated as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub sources: Option<Vec<Source>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ChatReply {
    /// Converts the reply into the bot message appended to the transcript.
    pub fn into_message(self) -> Message {
        Message::answer(
            self.answer.unwrap_or_default(),
            self.sources.unwrap_or_default(),
            self.notes,
        )
    }

    /// Parses a response body, requiring a JSON object.
    ///
    /// # Errors
    /// Returns `ChatError::Parse` for invalid JSON, non-object bodies or
    /// fields of the wrong type.
    pub fn parse(body: &str) -> Result<Self, ChatError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ChatError::Parse(e.to_string()))?;
        if !value.is_object() {
            return Err(ChatError::Parse(format!(
                "expected a JSON object, got {}",
                json_type_name(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| ChatError::Parse(e.to_string()))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Client for the answering service.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ChatClient {
    /// Creates a client for `api_base` (already normalized, no trailing slash).
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_base: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            endpoint: format!("{api_base}/chat"),
        })
    }

    /// Full URL of the chat endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one question and waits for the answer.
    ///
    /// # Errors
    /// Returns `Network` for transport failures, `Http` for non-2xx statuses and
    /// `Parse` for bodies that are not the expected JSON shape.
    pub async fn ask(&self, message: &str) -> Result<ChatReply, ChatError> {
        tracing::debug!(endpoint = %self.endpoint, chars = message.chars().count(), "sending question");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(status = status.as_u16(), error = %e, "failed to read error body");
                    format!("{UNREADABLE_BODY}: {e}")
                }
            };
            return Err(ChatError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        ChatReply::parse(&body)
    }
}
