//! API utilities for frontend-backend communication
//!
//! Provides helpers for building API URLs and posting form-encoded requests.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    location.origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// Absolute URLs are returned unchanged.
pub fn api_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// POST `params` as `application/x-www-form-urlencoded` and decode the JSON body.
pub async fn post_form<P, R>(url: &str, params: &P) -> Result<R, String>
where
    P: Serialize,
    R: DeserializeOwned,
{
    let body =
        serde_qs::to_string(params).map_err(|e| format!("Failed to encode params: {}", e))?;

    let response = Request::post(url)
        .header(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=UTF-8",
        )
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET a JSON document.
pub async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_base_and_path() {
        assert_eq!(
            api_url("http://localhost:8000/", "/a/aaa/api/"),
            "http://localhost:8000/a/aaa/api/"
        );
        assert_eq!(api_url("", "/a/aaa/api/"), "/a/aaa/api/");
    }

    #[test]
    fn test_api_url_keeps_absolute_urls() {
        assert_eq!(
            api_url("http://localhost:8000", "https://cdn.example.org/x"),
            "https://cdn.example.org/x"
        );
    }
}
