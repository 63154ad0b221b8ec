//! Wall-clock access and time-of-day labels.
//!
//! Browser builds read `Date` so labels follow the user's local time zone;
//! native builds fall back to UTC from `SystemTime`.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Refresh period of the header clock.
pub const CLOCK_TICK_MS: u32 = 1_000;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1_000.0)
    }
}

/// Hours, minutes, and seconds of `ms` in the display time zone.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn time_parts(ms: f64) -> (u32, u32, u32) {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
        (date.get_hours(), date.get_minutes(), date.get_seconds())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = (ms.max(0.0) / 1_000.0) as u64;
        (((secs / 3_600) % 24) as u32, ((secs / 60) % 60) as u32, (secs % 60) as u32)
    }
}

/// 12-hour label such as `03:57 PM`, or `3:57:09 PM` with seconds.
pub fn format_time_of_day(hours: u32, minutes: u32, seconds: Option<u32>) -> String {
    let suffix = if hours % 24 >= 12 { "PM" } else { "AM" };
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    match seconds {
        Some(s) => format!("{hour12}:{minutes:02}:{s:02} {suffix}"),
        None => format!("{hour12:02}:{minutes:02} {suffix}"),
    }
}

/// Live-clock label for the header (with seconds).
pub fn clock_label(ms: f64) -> String {
    let (h, m, s) = time_parts(ms);
    format_time_of_day(h, m, Some(s))
}

/// Short label for chat message timestamps; empty when unknown.
pub fn message_time_label(timestamp: Option<f64>) -> String {
    match timestamp {
        Some(ms) if ms > 0.0 => {
            let (h, m, _) = time_parts(ms);
            format_time_of_day(h, m, None)
        }
        _ => String::new(),
    }
}
