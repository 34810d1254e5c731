use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Display mode of a report page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Map,
    Chart,
    Table,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Map => "map",
            Step::Chart => "chart",
            Step::Table => "table",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "map" => Some(Step::Map),
            "chart" => Some(Step::Chart),
            "table" => Some(Step::Table),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a report endpoint. The shape of `report_data` depends on the step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub report_data: Value,
}

/// Map step payload: per-location rows keyed by location name, plus legend
/// and colouring data consumed by the map widget as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapReportData {
    #[serde(default)]
    pub data: BTreeMap<String, Value>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

/// Chart step payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartReportData {
    #[serde(default)]
    pub chart_data: Vec<ChartSeries>,
    #[serde(default)]
    pub all_locations: Vec<LocationRanking>,
    #[serde(default)]
    pub top_five: Vec<LocationRanking>,
    #[serde(default)]
    pub bottom_five: Vec<LocationRanking>,
    #[serde(default)]
    pub location_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub key: String,
    #[serde(default)]
    pub values: Vec<ChartPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One point of a monthly series. `x` is a millisecond timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: i64,
    #[serde(default)]
    pub y: Option<f64>,
    /// Indicator-specific numbers used by tooltips (`all`, `in_month`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRanking {
    pub loc_name: String,
    #[serde(default)]
    pub percent: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// Indicator name/value pair rendered in popups and tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorLine {
    pub indicator_name: String,
    pub indicator_value: String,
}

impl IndicatorLine {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            indicator_name: name.into(),
            indicator_value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_payload_keeps_tooltip_fields() {
        let data: ChartReportData = serde_json::from_str(
            r#"{
                "chart_data": [{"key": "Total", "values": [{"x": 1548979200000, "y": 0.5, "all": 40}]}],
                "top_five": [{"loc_name": "North", "percent": 55.0}],
                "location_type": "State"
            }"#,
        )
        .unwrap();
        let point = &data.chart_data[0].values[0];
        assert_eq!(point.y, Some(0.5));
        assert_eq!(point.extra["all"], 40);
        assert!(data.bottom_five.is_empty());
        assert_eq!(data.location_type.as_deref(), Some("State"));
    }

    #[test]
    fn test_step_parse() {
        assert_eq!(Step::parse("chart"), Some(Step::Chart));
        assert_eq!(Step::parse("pie"), None);
        assert_eq!(Step::Table.to_string(), "table");
    }
}
