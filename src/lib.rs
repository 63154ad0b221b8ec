//! # revenue-dashboard
//!
//! Leptos + WASM front end for a revenue-intelligence dashboard: commodity
//! pricing chart, notification center, data-ingestion view, and a deal
//! chat that proxies questions to `/api/chat`.
//!
//! Pure logic (chart normalization, chat session lifecycle, notification
//! bookkeeping) lives in `util` and `state` and is tested natively; browser
//! behavior sits behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
