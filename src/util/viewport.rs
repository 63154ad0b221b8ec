//! Responsive breakpoint checks.
//!
//! Requires a browser environment; SSR paths report a large screen so the
//! server render matches the desktop layout.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Media query for the compact chart layout.
pub const SMALL_SCREEN_QUERY: &str = "(max-width: 640px)";

/// Whether `query` currently matches.
pub fn matches_media(query: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        false
    }
}

/// Whether the compact layout applies.
pub fn is_small_screen() -> bool {
    matches_media(SMALL_SCREEN_QUERY)
}
