//! Wall-clock helpers for console timestamps.

#[cfg(not(target_arch = "wasm32"))]
const MS_PER_SECOND: f64 = 1000.0;
#[cfg(not(target_arch = "wasm32"))]
const SECONDS_PER_DAY: u64 = 86_400;

/// Milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * MS_PER_SECOND)
        .unwrap_or(0.0)
}

/// Format a timestamp as the browser's local time of day.
#[cfg(target_arch = "wasm32")]
pub fn format_clock(timestamp_ms: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
    String::from(date.to_locale_time_string("en-US"))
}

/// Format a timestamp as `HH:MM:SS` (UTC).
#[cfg(not(target_arch = "wasm32"))]
pub fn format_clock(timestamp_ms: f64) -> String {
    let secs = (timestamp_ms.max(0.0) / MS_PER_SECOND) as u64 % SECONDS_PER_DAY;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
