//! REST helpers for the chat proxy.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`ChatError::Unavailable`], since the endpoint only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a [`ChatError`] so the chat session can show
//! it in place of the reply; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatError, ChatRequest};

/// Chat proxy endpoint, relative to the page origin.
pub const CHAT_ENDPOINT: &str = "/api/chat";

#[cfg(any(test, feature = "hydrate"))]
fn status_error(ok: bool, status: u16) -> Result<(), ChatError> {
    if ok { Ok(()) } else { Err(ChatError::Server(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ChatError {
    ChatError::Transport(err.to_string())
}

/// Send one chat turn via `POST /api/chat` and return the reply text.
///
/// # Errors
///
/// Returns [`ChatError::Server`] on a non-2xx status, [`ChatError::Transport`]
/// when the request cannot be sent, and [`ChatError::Decode`] when the body
/// is not JSON.
pub async fn post_chat(request: &ChatRequest) -> Result<String, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("chat: POST {CHAT_ENDPOINT} ({} chars)", request.message.len());
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if let Err(err) = status_error(resp.ok(), resp.status()) {
            log::warn!("chat: {err}");
            return Err(err);
        }
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))?;
        Ok(super::types::extract_reply(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ChatError::Unavailable)
    }
}
