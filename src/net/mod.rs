//! Networking modules for the chat proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines the request body, reply
//! extraction, and error type shared with the chat session state.

pub mod api;
pub mod types;
