//! Page configuration embedded by the server.
//!
//! The server renders a `<script id="initial_page_data" type="application/json">`
//! element with route templates and viewer context. Everything is optional;
//! missing keys fall back to defaults.

use serde::Deserialize;
use std::collections::HashMap;

pub const PAGE_DATA_ELEMENT_ID: &str = "initial_page_data";

/// Route name of the beneficiary details page template.
pub const DETAILS_PAGE_ROUTE: &str = "unified_beneficiary_details";
/// Route name of the beneficiary details API.
pub const DETAILS_API_ROUTE: &str = "unified_beneficiary_details_api";
/// Route name of the beneficiary list API.
pub const LIST_API_ROUTE: &str = "unified_beneficiary_api";
/// Route name of the location lookup API.
pub const LOCATION_API_ROUTE: &str = "icds_locations";
/// Base of the indicator report endpoints.
pub const REPORTS_API_ROUTE: &str = "icds_dashboard";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Overrides the origin-derived API base (useful behind a proxy).
    pub api_base: Option<String>,
    /// Route name -> URL template.
    pub urls: HashMap<String, String>,
    pub beneficiary_id: Option<String>,
    pub user_location_id: Option<String>,
    pub have_access_to_all_locations: bool,
    pub have_access_to_features: bool,
    pub is_mobile: bool,
    pub selected_month: Option<u32>,
    pub selected_year: Option<i32>,
}

impl PageConfig {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse page data: {}", e))
    }

    /// Read the configuration from the page, falling back to defaults.
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(PAGE_DATA_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(text) => Self::from_json(&text).unwrap_or_else(|e| {
                log::warn!("{}; using defaults", e);
                Self::default()
            }),
            None => {
                log::debug!("No #{} element; using defaults", PAGE_DATA_ELEMENT_ID);
                Self::default()
            }
        }
    }

    /// URL template registered for `name`.
    pub fn reverse(&self, name: &str) -> Option<&str> {
        self.urls.get(name).map(String::as_str)
    }

    /// Absolute API URL for a route name.
    pub fn api_url(&self, name: &str) -> Option<String> {
        let path = self.reverse(name)?;
        let base = self
            .api_base
            .clone()
            .unwrap_or_else(super::api_utils::api_base);
        Some(super::api_utils::api_url(&base, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_with_partial_data() {
        let config = PageConfig::from_json(
            r#"{
                "urls": {"unified_beneficiary_details": "/a/d/details_type/beneficiary_id/"},
                "beneficiary_id": "abc",
                "is_mobile": true
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.reverse(DETAILS_PAGE_ROUTE),
            Some("/a/d/details_type/beneficiary_id/")
        );
        assert_eq!(config.beneficiary_id.as_deref(), Some("abc"));
        assert!(config.is_mobile);
        assert!(!config.have_access_to_all_locations);
        assert_eq!(config.reverse("missing"), None);
    }

    #[test]
    fn test_api_url_uses_configured_base() {
        let config = PageConfig {
            api_base: Some("http://hq.local".into()),
            urls: HashMap::from([(DETAILS_API_ROUTE.to_string(), "/a/api/".to_string())]),
            ..Default::default()
        };
        assert_eq!(
            config.api_url(DETAILS_API_ROUTE).as_deref(),
            Some("http://hq.local/a/api/")
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(PageConfig::from_json("{not json").is_err());
    }
}
