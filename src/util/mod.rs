//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure math from
//! page and component logic to improve reuse and testability.

pub mod badge;
pub mod chart_geometry;
pub mod chart_math;
pub mod clock;
pub mod markdown;
pub mod modal;
pub mod viewport;
