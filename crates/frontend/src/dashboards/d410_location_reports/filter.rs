//! Location and period filters of report pages.

use crate::shared::storage::{get_json, set_json, KeyValueStore};
use contracts::dashboards::d410_location_reports::{LocationDto, ReportFilterState, NATIONAL_LEVEL};
use std::collections::HashMap;

/// Storage key holding the last filters used on any report page.
pub const SEARCH_KEY: &str = "search";

/// Query keys mapped onto named [`ReportFilterState`] fields.
const FILTER_KEYS: [&str; 5] = [
    "location_id",
    "selectedLocationLevel",
    "location_name",
    "month",
    "year",
];

/// Location ids that mean "no location selected".
pub const LOCATION_SENTINELS: [&str; 3] = ["all", "null", "undefined"];

/// Where the location filter should point.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationTarget {
    National,
    Location(LocationDto),
}

pub fn is_location_sentinel(location_id: &str) -> bool {
    location_id.is_empty() || LOCATION_SENTINELS.contains(&location_id)
}

/// Location to resolve on init: the filter's, else the viewer's own.
/// `None` loads at national scope.
pub fn effective_location_id(
    filters: &ReportFilterState,
    user_location_id: Option<&str>,
) -> Option<String> {
    let candidate = if filters.location_id.is_empty() {
        user_location_id.unwrap_or_default()
    } else {
        filters.location_id.as_str()
    };
    if is_location_sentinel(candidate) {
        None
    } else {
        Some(candidate.to_string())
    }
}

pub fn move_to_location(filters: &mut ReportFilterState, target: &LocationTarget, index: i32) {
    match target {
        LocationTarget::National => {
            filters.location_id = String::new();
            filters.selected_location_level = NATIONAL_LEVEL;
            filters.location_name = String::new();
        }
        LocationTarget::Location(location) => {
            filters.location_id = location.location_id.clone();
            filters.selected_location_level = index;
            filters.location_name = location.name.clone();
        }
    }
}

pub fn filters_from_query(query: &HashMap<String, String>) -> ReportFilterState {
    let mut filters = ReportFilterState::default();
    if let Some(id) = query.get("location_id") {
        filters.location_id = id.clone();
    }
    if let Some(level) = query.get("selectedLocationLevel") {
        filters.selected_location_level = level.trim().parse().unwrap_or(NATIONAL_LEVEL);
    }
    if let Some(name) = query.get("location_name") {
        filters.location_name = name.clone();
    }
    filters.month = query.get("month").and_then(|m| m.trim().parse().ok());
    filters.year = query.get("year").and_then(|y| y.trim().parse().ok());
    filters.extra = query
        .iter()
        .filter(|(key, _)| !FILTER_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    filters
}

pub fn filters_to_query(filters: &ReportFilterState) -> String {
    serde_qs::to_string(filters).unwrap_or_else(|e| {
        log::error!("Failed to encode report filters: {}", e);
        String::new()
    })
}

/// An empty query restores the stored filters; otherwise the query wins and
/// is stored for the next page.
pub fn restore_or_persist(
    query: &HashMap<String, String>,
    store: &dyn KeyValueStore,
) -> ReportFilterState {
    if query.is_empty() {
        get_json(store, SEARCH_KEY).unwrap_or_default()
    } else {
        let filters = filters_from_query(query);
        persist(store, &filters);
        filters
    }
}

pub fn persist(store: &dyn KeyValueStore, filters: &ReportFilterState) {
    set_json(store, SEARCH_KEY, filters);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn district() -> LocationDto {
        LocationDto {
            location_id: "d1".into(),
            name: "North".into(),
            location_type: "district".into(),
            user_have_access: true,
        }
    }

    #[test]
    fn test_move_to_national_clears_location() {
        let mut filters = ReportFilterState::default();
        move_to_location(&mut filters, &LocationTarget::Location(district()), 1);
        assert_eq!(filters.location_id, "d1");
        assert_eq!(filters.selected_location_level, 1);
        assert_eq!(filters.location_name, "North");

        move_to_location(&mut filters, &LocationTarget::National, 4);
        assert_eq!(filters.location_id, "");
        assert_eq!(filters.selected_location_level, -1);
        assert_eq!(filters.location_name, "");
    }

    #[test]
    fn test_effective_location_id() {
        let mut filters = ReportFilterState::default();
        assert_eq!(effective_location_id(&filters, Some("u1")).as_deref(), Some("u1"));
        assert_eq!(effective_location_id(&filters, None), None);
        for sentinel in LOCATION_SENTINELS {
            filters.location_id = sentinel.to_string();
            assert_eq!(effective_location_id(&filters, Some("u1")), None);
        }
        filters.location_id = "d1".into();
        assert_eq!(effective_location_id(&filters, Some("u1")).as_deref(), Some("d1"));
    }

    #[test]
    fn test_query_parsing() {
        let filters = filters_from_query(&query(&[
            ("location_id", "d1"),
            ("selectedLocationLevel", "1"),
            ("location_name", "North"),
            ("month", "3"),
            ("year", "bad"),
        ]));
        assert_eq!(filters.location_id, "d1");
        assert_eq!(filters.selected_location_level, 1);
        assert_eq!(filters.month, Some(3));
        assert_eq!(filters.year, None);
        assert_eq!(
            filters_to_query(&filters),
            "location_id=d1&selectedLocationLevel=1&location_name=North&month=3"
        );
    }

    #[test]
    fn test_restore_or_persist() {
        let store = MemoryStore::new();
        let empty = HashMap::new();
        assert!(restore_or_persist(&empty, &store).is_national());

        let saved = restore_or_persist(&query(&[("location_id", "d1")]), &store);
        assert_eq!(saved.location_id, "d1");

        let restored = restore_or_persist(&empty, &store);
        assert_eq!(restored, saved);
    }

    #[test]
    fn test_extra_query_keys_survive_round_trip() {
        let store = MemoryStore::new();
        let filters = restore_or_persist(
            &query(&[
                ("location_id", "d1"),
                ("selectedLocationLevel", "1"),
                ("location_name", "North"),
                ("month", "3"),
                ("gender", "F"),
            ]),
            &store,
        );
        assert_eq!(filters.extra.get("gender").map(String::as_str), Some("F"));
        assert!(!filters.extra.contains_key("location_id"));
        assert_eq!(
            filters_to_query(&filters),
            "location_id=d1&selectedLocationLevel=1&location_name=North&month=3&gender=F"
        );

        let restored = restore_or_persist(&HashMap::new(), &store);
        assert_eq!(restored, filters);
    }
}
