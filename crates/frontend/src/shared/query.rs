//! Page query string access.

use std::collections::HashMap;
use web_sys::window;

/// Current `window.location.search` as a key/value map.
pub fn read_query() -> HashMap<String, String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query(&search)
}

pub fn parse_query(search: &str) -> HashMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Replace the query string without adding a history entry.
pub fn replace_query(query_string: &str) {
    let new_url = format!("?{}", query_string);
    let current_search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if current_search == new_url {
        return;
    }
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let query = parse_query("?location_id=d1&selectedLocationLevel=1");
        assert_eq!(query.get("location_id").map(String::as_str), Some("d1"));
        assert_eq!(query.get("selectedLocationLevel").map(String::as_str), Some("1"));
        assert!(parse_query("").is_empty());
    }
}
