//! Seams between the shared report controller and a concrete report.

use async_trait::async_trait;
use contracts::dashboards::d410_location_reports::{
    ChartPoint, IndicatorLine, LocationDto, ReportFilterState, ReportResponse, Step,
};
use serde_json::Value;

/// One indicator report: how it fetches its data and labels its popups.
#[async_trait(?Send)]
pub trait ReportPage {
    /// Program summary section the page belongs to.
    fn section_slug(&self) -> &str;

    fn use_percentage(&self) -> bool {
        true
    }

    fn force_y_axis_from_zero(&self) -> bool {
        false
    }

    async fn fetch_step(
        &self,
        step: Step,
        filters: &ReportFilterState,
    ) -> Result<ReportResponse, String>;

    /// Indicator lines for one map row.
    fn popup_lines(&self, row: &Value) -> Vec<IndicatorLine>;

    /// Line inserted between the popup header and the indicators.
    fn popup_subheading(&self) -> String {
        String::new()
    }

    /// Indicator lines for the chart tooltip at one month.
    fn tooltip_lines(&self, point: Option<&ChartPoint>) -> Vec<IndicatorLine>;
}

#[async_trait(?Send)]
pub trait LocationService {
    async fn get_location(&self, location_id: &str) -> Result<LocationDto, String>;

    /// Locations one level below `parent_id`; top-level locations for `None`.
    async fn get_children(&self, parent_id: Option<&str>) -> Result<Vec<LocationDto>, String>;
}

/// Viewer facts taken from the page configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportContext {
    pub user_location_id: Option<String>,
    pub have_access_to_all_locations: bool,
    pub have_access_to_features: bool,
    pub is_mobile: bool,
}
