//! Deal-intelligence chat session: message log and request lifecycle.
//!
//! LIFECYCLE
//! =========
//! `idle -> sending -> idle`. [`ChatSession::begin_submit`] appends the user
//! message plus an optimistic assistant placeholder and hands back the one
//! request to send. [`ChatSession::resolve`] rewrites that placeholder in
//! place with the reply or the error text and returns the session to idle.
//! The network call itself lives in the chat modal so this state stays pure.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{ChatError, ChatRequest};
use crate::util::clock;

/// Text of the assistant placeholder while a reply is pending.
pub const PLACEHOLDER_TEXT: &str = "Working on your query…";
/// Stand-in for a missing subject in headings and the welcome message.
pub const NO_SUBJECT: &str = "—";

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Ai,
    User,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    /// Epoch milliseconds of the last write to `text`.
    pub timestamp: Option<f64>,
}

impl ChatMessage {
    fn new(prefix: &str, role: ChatRole, text: String) -> Self {
        Self {
            id: message_id(prefix),
            role,
            text,
            timestamp: Some(clock::now_ms()),
        }
    }
}

/// The request produced by a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingChat {
    /// Id of the placeholder message the response will overwrite.
    pub placeholder_id: String,
    pub request: ChatRequest,
}

/// State behind the chat modal.
#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    pub subject: Option<String>,
    pub messages: Vec<ChatMessage>,
    /// Compose-field contents.
    pub input: String,
    pub is_sending: bool,
    pub is_typing: bool,
    /// Bumped on every resolution so the modal can hand focus back to the
    /// compose field once it is enabled again.
    pub focus_seq: u64,
}

impl ChatSession {
    /// Start a fresh conversation about `subject`.
    ///
    /// The log is replaced by a single welcome message. Any reply still in
    /// flight for the previous log will find no placeholder and be dropped.
    pub fn open(&mut self, subject: Option<String>) {
        let welcome = ChatMessage::new("ai_", ChatRole::Ai, welcome_text(subject.as_deref()));
        self.subject = subject;
        self.messages = vec![welcome];
        self.input.clear();
    }

    /// Whether the compose field currently holds something sendable.
    pub fn can_send(&self) -> bool {
        !self.is_sending && normalize_input(&self.input).is_some()
    }

    /// Consume the compose field and enter the sending state.
    ///
    /// Returns `None` (and changes nothing) while a request is in flight or
    /// when the input is blank.
    pub fn begin_submit(&mut self) -> Option<PendingChat> {
        if self.is_sending {
            return None;
        }
        let message = normalize_input(&self.input)?;

        self.messages.push(ChatMessage::new("u_", ChatRole::User, message.clone()));
        self.input.clear();

        let placeholder = ChatMessage::new("ai_tmp_", ChatRole::Ai, PLACEHOLDER_TEXT.to_owned());
        let placeholder_id = placeholder.id.clone();
        self.messages.push(placeholder);
        self.is_sending = true;
        self.is_typing = true;

        Some(PendingChat {
            placeholder_id,
            request: ChatRequest {
                subject: self.subject.clone(),
                message,
            },
        })
    }

    /// Apply the outcome of the request started by [`Self::begin_submit`].
    ///
    /// Returns `false` if the placeholder is no longer in the log. The
    /// sending/typing flags are cleared and `focus_seq` bumped either way.
    pub fn resolve(&mut self, placeholder_id: &str, outcome: Result<String, ChatError>) -> bool {
        self.is_sending = false;
        self.is_typing = false;
        self.focus_seq = self.focus_seq.wrapping_add(1);

        let Some(message) = self.messages.iter_mut().find(|m| m.id == placeholder_id) else {
            return false;
        };
        message.text = match outcome {
            Ok(reply) => reply,
            Err(err) => err.display_text(),
        };
        message.timestamp = Some(clock::now_ms());
        true
    }

    /// Subject as shown in the modal heading.
    pub fn subject_label(&self) -> &str {
        self.subject.as_deref().unwrap_or(NO_SUBJECT)
    }
}

/// Greeting that opens every conversation.
pub fn welcome_text(subject: Option<&str>) -> String {
    format!(
        "I can help you analyze this opportunity: {}. What would you like to know?",
        subject.unwrap_or(NO_SUBJECT)
    )
}

/// Strip trailing newlines then surrounding whitespace; `None` if nothing is left.
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim_end_matches(['\n', '\r']).trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Modifier keys held during a keypress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Plain Enter submits. Any modifier, or an Enter that confirms an IME
/// composition, does not.
pub fn is_submit_key(key: &str, modifiers: KeyModifiers, composing: bool) -> bool {
    key == "Enter" && !modifiers.any() && !composing
}

fn message_id(prefix: &str) -> String {
    format!("{prefix}{}", uuid::Uuid::new_v4().simple())
}
