use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Location level of the national (unscoped) view.
pub const NATIONAL_LEVEL: i32 = -1;

/// Location and period filters shared by every report page.
///
/// Carried in the page query string and restored from storage when the user
/// navigates back to a report without query parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFilterState {
    #[serde(default)]
    pub location_id: String,
    #[serde(rename = "selectedLocationLevel", default = "national_level")]
    pub selected_location_level: i32,
    #[serde(default)]
    pub location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Page-specific query keys (gender, age, ...), passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

fn national_level() -> i32 {
    NATIONAL_LEVEL
}

impl Default for ReportFilterState {
    fn default() -> Self {
        Self {
            location_id: String::new(),
            selected_location_level: NATIONAL_LEVEL,
            location_name: String::new(),
            month: None,
            year: None,
            extra: BTreeMap::new(),
        }
    }
}

impl ReportFilterState {
    pub fn is_national(&self) -> bool {
        self.location_id.is_empty() && self.selected_location_level == NATIONAL_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_national() {
        let filters = ReportFilterState::default();
        assert!(filters.is_national());
        assert_eq!(filters.selected_location_level, -1);
    }

    #[test]
    fn test_json_uses_query_key_names() {
        let filters = ReportFilterState {
            location_id: "d1".into(),
            selected_location_level: 1,
            location_name: "North".into(),
            month: Some(3),
            year: None,
            extra: BTreeMap::from([("gender".to_string(), "F".to_string())]),
        };
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["selectedLocationLevel"], 1);
        assert_eq!(json["gender"], "F");
        assert!(json.get("year").is_none());
        assert!(json.get("extra").is_none());

        let restored: ReportFilterState = serde_json::from_value(json).unwrap();
        assert_eq!(restored, filters);
    }
}
