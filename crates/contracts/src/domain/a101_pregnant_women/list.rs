use crate::shared::FieldValue;
use serde::{Deserialize, Serialize};

/// One row of the pregnant women list as returned by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnantWomanListRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<FieldValue>,
    #[serde(default)]
    pub preg_month: Option<FieldValue>,
    #[serde(default)]
    pub high_risk_pregnancy: Option<FieldValue>,
    #[serde(default)]
    pub no_of_anc_check_ups: Option<FieldValue>,
}

/// Paging and filter parameters posted to the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnantWomenListRequest {
    pub selected_month: u32,
    pub selected_year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    pub start: usize,
    pub length: usize,
    pub sort_column: String,
    pub sort_ascending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnantWomenListResponse {
    #[serde(default)]
    pub data: Vec<PregnantWomanListRow>,
    #[serde(default)]
    pub records_total: usize,
    #[serde(default)]
    pub records_filtered: usize,
}
