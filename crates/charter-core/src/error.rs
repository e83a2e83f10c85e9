//! Failure taxonomy for a single request to the answering service.
//!
//! Every variant is collapsed into the same fallback message by the session;
//! they only differ in the detail written to the log.

use thiserror::Error;

/// Why a request attempt failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The request never reached the service or no response came back.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The status was 2xx but the body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Parse(String),
}

impl ChatError {
    /// Short machine-friendly label, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::Network(_) => "network",
            ChatError::Http { .. } => "http",
            ChatError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = ChatError::Http {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "HTTP 502: bad gateway");
        assert_eq!(err.kind(), "http");
        assert_eq!(ChatError::Parse("eof".into()).kind(), "parse");
    }
}
