//! API utilities for frontend-backend communication
//!
//! The backend serves the built frontend itself, so API calls go to the
//! page's own origin. Under `trunk serve` the proxies in `Trunk.toml`
//! forward `/api` and `/health` to the backend.

/// Origin of the current page, e.g. "https://chaibisket.example"
///
/// Empty when no window is available; requests then stay relative.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(CONTACT_ENDPOINT);
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_keeps_page_origin() {
        assert_eq!(
            join_url("http://host:8080", "/api/contact"),
            "http://host:8080/api/contact"
        );
        assert_eq!(
            join_url("https://chaibisket.example/", "/health"),
            "https://chaibisket.example/health"
        );
    }

    #[test]
    fn test_join_url_without_origin_is_relative() {
        assert_eq!(join_url("", "/api/contact"), "/api/contact");
    }
}
