//! Wire DTOs and errors for the chat proxy endpoint.
//!
//! DESIGN
//! ======
//! The backend may answer with its own `{ "reply": ... }` shape or forward an
//! OpenAI-style completion. Reply extraction accepts both and never fails:
//! an unknown shape is shown verbatim rather than dropped.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text shown when a transport failure carries no message of its own.
pub const NETWORK_ERROR_TEXT: &str = "Network error — try again.";

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Opportunity the conversation is about, `null` when opened without one.
    pub subject: Option<String>,
    /// Trimmed user message.
    pub message: String,
}

/// Failure of a chat round-trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The server answered with a non-2xx status.
    #[error("Server {0}")]
    Server(u16),
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("{0}")]
    Transport(String),
    /// The response body was not valid JSON.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Network calls are only possible in the browser build.
    #[error("chat is not available on the server")]
    Unavailable,
}

impl ChatError {
    /// Text that replaces the optimistic placeholder.
    pub fn display_text(&self) -> String {
        match self {
            Self::Transport(message) if message.trim().is_empty() => NETWORK_ERROR_TEXT.to_owned(),
            other => other.to_string(),
        }
    }
}

/// Pull the assistant reply out of a response body.
///
/// Order: string `reply`, then non-empty `choices[0].message.content`, then
/// the serialized body itself.
pub fn extract_reply(body: &Value) -> String {
    if let Some(reply) = body.get("reply").and_then(Value::as_str) {
        return reply.to_owned();
    }
    let content = body
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty());
    if let Some(content) = content {
        return content.to_owned();
    }
    body.to_string()
}
