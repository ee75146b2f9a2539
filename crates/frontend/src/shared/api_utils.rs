//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the analysis endpoint listens on.
pub const DEFAULT_API_PORT: u16 = 8000;

/// Compile-time override of the API base, e.g. `https://analyzer.internal`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("LOG_ANALYZER_API_BASE");

/// Get the base URL for API requests
///
/// Uses `LOG_ANALYZER_API_BASE` if it was set at build time, otherwise
/// the current window location with port 8000.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - "http://localhost:8000" if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://localhost:{}", DEFAULT_API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(ANALYZE_PATH);
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
