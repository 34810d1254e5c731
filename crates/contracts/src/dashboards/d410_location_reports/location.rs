use serde::{Deserialize, Serialize};

/// Node of the administrative location hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationDto {
    pub location_id: String,
    pub name: String,
    /// `state`, `district`, `block`, `supervisor` or `awc`.
    #[serde(default)]
    pub location_type: String,
    /// Set by the location service on entries of the viewer's selection path.
    #[serde(default)]
    pub user_have_access: bool,
}

impl LocationDto {
    /// Literal "All" entry offered at every level of the location picker.
    pub fn is_all(&self) -> bool {
        self.location_id == "all"
    }
}

/// Body of the location lookup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationsResponse {
    #[serde(default)]
    pub locations: Vec<LocationDto>,
}
