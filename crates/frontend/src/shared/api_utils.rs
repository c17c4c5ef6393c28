//! API base resolution and page-URL helpers.

/// Base URL for the catalog API, with a trailing slash.
///
/// Fixed at build time via the `CATALOG_API_BASE` env var; otherwise
/// derived from the current window location, assuming a same-origin
/// backend under `/api/products/`.
///
/// # Returns
/// - A URL like "https://example.com/api/products/"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("CATALOG_API_BASE") {
        return base.to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}/api/products/", protocol, hostname)
}

/// Vendor filter from the page's own query string, if present.
///
/// Read once at startup; the vendor never changes during the page's life.
pub fn vendor_from_query() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("vendor").filter(|v| !v.trim().is_empty())
}
