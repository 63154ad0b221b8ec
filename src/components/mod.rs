//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and panels while reading/writing shared
//! state from Leptos context providers.

pub mod chart_section;
pub mod chat_modal;
pub mod header;
pub mod message_block;
pub mod metric_card;
pub mod notification_dropdown;
pub mod stat_card;
pub mod tab_slider;
