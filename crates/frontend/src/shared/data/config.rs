//! Backend endpoint configuration.
//!
//! Resolution order: compile-time environment (`LOGISYNC_BACKEND_URL`,
//! `LOGISYNC_ANON_KEY`), then a same-named global on `window` (set by the
//! hosting page), then a local-development default. Each value resolves
//! once on first use and is reused for every request after that.

use once_cell::sync::Lazy;
use wasm_bindgen::JsValue;

static BACKEND_URL: Lazy<String> = Lazy::new(|| {
    if let Some(url) = option_env!("LOGISYNC_BACKEND_URL") {
        return normalize_url(url);
    }
    window_global("LOGISYNC_BACKEND_URL")
        .map(|u| normalize_url(&u))
        .unwrap_or_else(|| "http://127.0.0.1:54321".to_string())
});

static ANON_KEY: Lazy<String> = Lazy::new(|| {
    if let Some(key) = option_env!("LOGISYNC_ANON_KEY") {
        return key.to_string();
    }
    window_global("LOGISYNC_ANON_KEY").unwrap_or_else(|| {
        log::warn!("LOGISYNC_ANON_KEY is not configured; requests will be rejected");
        String::new()
    })
});

fn window_global(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(name))
        .ok()?
        .as_string()
}

fn normalize_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}

/// Base URL of the hosted backend, without a trailing slash.
pub fn backend_url() -> &'static str {
    &BACKEND_URL
}

/// Publishable API key sent with every request. Row-level security on the
/// backend is what actually scopes the data.
pub fn anon_key() -> &'static str {
    &ANON_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes_only() {
        assert_eq!(normalize_url("http://localhost:54321/"), "http://localhost:54321");
        assert_eq!(normalize_url("http://localhost:54321"), "http://localhost:54321");
        assert_eq!(normalize_url("https://api.example.com//"), "https://api.example.com");
    }
}
