//! Location selection path rules.

use contracts::dashboards::d410_location_reports::LocationDto;

/// Selection depth that triggers re-anchoring.
pub const DRILLDOWN_DEPTH: usize = 6;
/// Entry of the selection path the filter is moved back to.
pub const ANCHOR_INDEX: usize = 3;
/// Storage key of the "too deep" advisory flag.
pub const MESSAGE_KEY: &str = "message";
pub const MESSAGE_RESET_MS: u32 = 3000;

/// Location picker path, one entry per level; `None` for unset levels.
pub type SelectionPath = Vec<Option<LocationDto>>;

/// Ancestor to re-anchor to when the path is exactly [`DRILLDOWN_DEPTH`] deep.
pub fn drilldown_anchor(path: &[Option<LocationDto>]) -> Option<&LocationDto> {
    if path.len() == DRILLDOWN_DEPTH {
        path.get(ANCHOR_INDEX)?.as_ref()
    } else {
        None
    }
}

/// Index of the first selected entry the viewer may not access, or -1.
///
/// Viewers with access to all locations are never restricted. Unset levels
/// and the "All" entry are skipped.
pub fn disabled_selection_index(path: &[Option<LocationDto>], have_access_to_all: bool) -> i32 {
    if have_access_to_all {
        return -1;
    }
    path.iter()
        .position(|entry| {
            entry
                .as_ref()
                .is_some_and(|loc| !loc.is_all() && !loc.user_have_access)
        })
        .map_or(-1, |idx| idx as i32)
}

/// Human label of a location's level.
pub fn location_type_label(location: Option<&LocationDto>) -> String {
    let Some(location) = location else {
        return "National".to_string();
    };
    if location.location_type == "supervisor" {
        return "Sector".to_string();
    }
    let mut chars = location.location_type.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// How the map step renders the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMode {
    #[default]
    Map,
    /// Below district level the map is replaced by a sector list.
    Sector,
}

impl MapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapMode::Map => "map",
            MapMode::Sector => "sector",
        }
    }
}

pub fn map_step_label(location: Option<&LocationDto>) -> (MapMode, String) {
    let label = location_type_label(location);
    let sector_level = location.is_some_and(|loc| {
        matches!(loc.location_type.as_str(), "block" | "supervisor" | "awc")
    });
    if sector_level {
        (MapMode::Sector, format!("{} View", label))
    } else {
        (MapMode::Map, format!("Map View: {}", label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(id: &str, location_type: &str, access: bool) -> Option<LocationDto> {
        Some(LocationDto {
            location_id: id.into(),
            name: id.to_uppercase(),
            location_type: location_type.into(),
            user_have_access: access,
        })
    }

    #[test]
    fn test_anchor_only_at_exact_depth() {
        let mut path: SelectionPath = (0..5).map(|i| loc(&format!("l{}", i), "state", true)).collect();
        assert!(drilldown_anchor(&path).is_none());
        path.push(loc("l5", "awc", true));
        assert_eq!(drilldown_anchor(&path).map(|l| l.location_id.as_str()), Some("l3"));
        path.push(None);
        assert!(drilldown_anchor(&path).is_none());
    }

    #[test]
    fn test_disabled_selection_index() {
        let path = vec![
            loc("s1", "state", true),
            None,
            loc("all", "district", false),
            loc("b1", "block", false),
            loc("sv1", "supervisor", false),
        ];
        assert_eq!(disabled_selection_index(&path, false), 3);
        assert_eq!(disabled_selection_index(&path, true), -1);
        assert_eq!(disabled_selection_index(&path[..3], false), -1);
    }

    #[test]
    fn test_location_type_label() {
        assert_eq!(location_type_label(None), "National");
        assert_eq!(location_type_label(loc("sv", "supervisor", true).as_ref()), "Sector");
        assert_eq!(location_type_label(loc("d", "district", true).as_ref()), "District");
    }

    #[test]
    fn test_map_step_label() {
        assert_eq!(
            map_step_label(None),
            (MapMode::Map, "Map View: National".to_string())
        );
        assert_eq!(
            map_step_label(loc("d", "district", true).as_ref()),
            (MapMode::Map, "Map View: District".to_string())
        );
        assert_eq!(
            map_step_label(loc("sv", "supervisor", true).as_ref()),
            (MapMode::Sector, "Sector View".to_string())
        );
        assert_eq!(
            map_step_label(loc("a", "awc", true).as_ref()),
            (MapMode::Sector, "Awc View".to_string())
        );
    }
}
