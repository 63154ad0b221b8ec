//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `notifications`, etc.) so individual
//! components can depend on small focused models.

pub mod chat;
pub mod ingestion;
pub mod notifications;
pub mod pricing;
pub mod ui;
