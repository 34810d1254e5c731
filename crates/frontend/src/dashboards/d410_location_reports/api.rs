use super::filter::filters_to_query;
use super::indicator::IndicatorReport;
use super::page::{LocationService, ReportPage};
use crate::shared::api_utils::get_json;
use async_trait::async_trait;
use contracts::dashboards::d410_location_reports::{
    ChartPoint, IndicatorLine, LocationDto, LocationsResponse, ReportFilterState, ReportResponse,
    Step,
};
use serde_json::Value;

/// Location lookups against the `icds_locations` endpoint.
pub struct HttpLocationService {
    url: String,
}

impl HttpLocationService {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl LocationService for HttpLocationService {
    async fn get_location(&self, location_id: &str) -> Result<LocationDto, String> {
        let url = format!(
            "{}?location_id={}",
            self.url,
            urlencoding::encode(location_id)
        );
        let response: LocationsResponse = get_json(&url).await?;
        response
            .locations
            .into_iter()
            .next()
            .ok_or_else(|| format!("Location {} not found", location_id))
    }

    async fn get_children(&self, parent_id: Option<&str>) -> Result<Vec<LocationDto>, String> {
        let url = format!(
            "{}?parent_id={}",
            self.url,
            urlencoding::encode(parent_id.unwrap_or_default())
        );
        let response: LocationsResponse = get_json(&url).await?;
        Ok(response.locations)
    }
}

/// Indicator report served by `<base>/<endpoint>/<step>/?<filters>`.
pub struct HttpIndicatorPage {
    base_url: String,
    report: IndicatorReport,
}

impl HttpIndicatorPage {
    pub fn new(base_url: impl Into<String>, report: IndicatorReport) -> Self {
        Self {
            base_url: base_url.into(),
            report,
        }
    }

    fn step_url(&self, step: Step, filters: &ReportFilterState) -> String {
        format!(
            "{}/{}/{}/?{}",
            self.base_url.trim_end_matches('/'),
            self.report.endpoint,
            step,
            filters_to_query(filters)
        )
    }
}

#[async_trait(?Send)]
impl ReportPage for HttpIndicatorPage {
    fn section_slug(&self) -> &str {
        self.report.section_slug
    }

    fn use_percentage(&self) -> bool {
        self.report.use_percentage
    }

    async fn fetch_step(
        &self,
        step: Step,
        filters: &ReportFilterState,
    ) -> Result<ReportResponse, String> {
        get_json(&self.step_url(step, filters)).await
    }

    fn popup_lines(&self, row: &Value) -> Vec<IndicatorLine> {
        self.report.popup_lines(row)
    }

    fn tooltip_lines(&self, point: Option<&ChartPoint>) -> Vec<IndicatorLine> {
        self.report.tooltip_lines(point)
    }
}
