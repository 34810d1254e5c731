//! Report page state and the step-response reducer.

use super::chart::{chart_ticks, y_axis_range, AxisBounds};
use super::drilldown::{MapMode, SelectionPath};
use crate::shared::request_tracker::{RequestTracker, Ticket};
use contracts::dashboards::d410_location_reports::{
    ChartReportData, ChartSeries, IndicatorLine, LocationDto, LocationRanking, MapReportData,
    ReportFilterState, ReportResponse, Step,
};
use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Uninitialized,
    Loading,
    Loaded,
}

/// Popup opened from a ranking row on mobile.
#[derive(Debug, Clone, PartialEq)]
pub struct MobilePopup {
    pub location: LocationRanking,
    pub lines: Vec<IndicatorLine>,
}

/// Chart-axis options of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSettings {
    pub use_percentage: bool,
    pub force_y_axis_from_zero: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportState {
    pub filters: ReportFilterState,
    pub step: Step,
    pub load_state: LoadState,
    /// Resolved location of the filter, `None` at national scope.
    pub location: Option<LocationDto>,

    pub map_data: Option<MapReportData>,
    pub chart_data: Vec<ChartSeries>,
    pub all_locations: Vec<LocationRanking>,
    pub top_five: Vec<LocationRanking>,
    pub bottom_five: Vec<LocationRanking>,
    pub location_type: Option<String>,
    pub table_data: Option<Value>,
    pub chart_ticks: Vec<i64>,
    pub force_y: Option<AxisBounds>,

    pub map_mode: MapMode,
    pub map_label: String,
    pub filters_open: bool,
    /// "Too deep" advisory shown after an automatic re-anchor.
    pub message: bool,
    pub selected_locations: SelectionPath,
    pub mobile_popup: Option<MobilePopup>,

    pending: BTreeSet<Step>,
    tracker: RequestTracker,
}

impl ReportState {
    pub fn new(filters: ReportFilterState, step: Step, message: bool) -> Self {
        Self {
            filters,
            step,
            load_state: LoadState::Uninitialized,
            location: None,
            map_data: None,
            chart_data: Vec::new(),
            all_locations: Vec::new(),
            top_five: Vec::new(),
            bottom_five: Vec::new(),
            location_type: None,
            table_data: None,
            chart_ticks: Vec::new(),
            force_y: None,
            map_mode: MapMode::default(),
            map_label: String::new(),
            filters_open: false,
            message,
            selected_locations: Vec::new(),
            mobile_popup: None,
            pending: BTreeSet::new(),
            tracker: RequestTracker::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Start a new generation of step requests.
    pub fn begin_load(&mut self, steps: &[Step]) -> Vec<Ticket<Step>> {
        self.tracker.advance();
        self.pending = steps.iter().copied().collect();
        self.load_state = if self.pending.is_empty() {
            LoadState::Loaded
        } else {
            LoadState::Loading
        };
        steps.iter().map(|step| self.tracker.ticket(*step)).collect()
    }

    /// Apply a finished step request. Stale generations are dropped and
    /// failures keep the previous data.
    pub fn complete(
        &mut self,
        ticket: Ticket<Step>,
        result: Result<ReportResponse, String>,
        axis: AxisSettings,
    ) -> bool {
        if !self.tracker.is_current(&ticket) {
            log::debug!(
                "Discarding stale {} response (generation {})",
                ticket.key,
                ticket.generation
            );
            return false;
        }
        self.pending.remove(&ticket.key);
        if self.pending.is_empty() {
            self.load_state = LoadState::Loaded;
        }

        match result.and_then(|response| self.apply_response(ticket.key, response, axis)) {
            Ok(()) => {}
            Err(e) => log::error!("Failed to load {} data: {}", ticket.key, e),
        }
        true
    }

    pub fn apply_response(
        &mut self,
        step: Step,
        response: ReportResponse,
        axis: AxisSettings,
    ) -> Result<(), String> {
        match step {
            Step::Map => {
                let data: MapReportData = serde_json::from_value(response.report_data)
                    .map_err(|e| format!("Invalid map data: {}", e))?;
                self.map_data = Some(data);
            }
            Step::Chart => {
                let data: ChartReportData = serde_json::from_value(response.report_data)
                    .map_err(|e| format!("Invalid chart data: {}", e))?;
                self.chart_ticks = chart_ticks(&data.chart_data);
                if let Some(bounds) = y_axis_range(
                    &data.chart_data,
                    axis.use_percentage,
                    axis.force_y_axis_from_zero,
                ) {
                    self.force_y = Some(bounds);
                }
                self.chart_data = data.chart_data;
                self.all_locations = data.all_locations;
                self.top_five = data.top_five;
                self.bottom_five = data.bottom_five;
                self.location_type = data.location_type;
            }
            Step::Table => {
                self.table_data = Some(response.report_data);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PERCENT: AxisSettings = AxisSettings {
        use_percentage: true,
        force_y_axis_from_zero: false,
    };

    fn chart_response() -> ReportResponse {
        ReportResponse {
            report_data: json!({
                "chart_data": [
                    {"key": "Total", "values": [{"x": 1, "y": 0.5}, {"x": 2, "y": 0.7}]}
                ],
                "all_locations": [{"loc_name": "North", "percent": 70.0}],
                "top_five": [{"loc_name": "North", "percent": 70.0}],
                "bottom_five": [],
                "location_type": "State"
            }),
        }
    }

    #[test]
    fn test_chart_response_sets_axis() {
        let mut state = ReportState::new(ReportFilterState::default(), Step::Chart, false);
        state
            .apply_response(Step::Chart, chart_response(), PERCENT)
            .unwrap();
        assert_eq!(state.chart_ticks, vec![1, 2]);
        assert_eq!(state.force_y, Some([0.48, 0.72]));
        assert_eq!(state.top_five.len(), 1);
        assert_eq!(state.location_type.as_deref(), Some("State"));
    }

    #[test]
    fn test_map_and_table_responses() {
        let mut state = ReportState::new(ReportFilterState::default(), Step::Map, false);
        state
            .apply_response(
                Step::Map,
                ReportResponse {
                    report_data: json!({"data": {"North": {"all": 3}}, "fills": {}}),
                },
                PERCENT,
            )
            .unwrap();
        let map = state.map_data.as_ref().unwrap();
        assert_eq!(map.data["North"]["all"], 3);
        assert!(map.extras.contains_key("fills"));

        state
            .apply_response(Step::Table, ReportResponse { report_data: json!([1, 2]) }, PERCENT)
            .unwrap();
        assert_eq!(state.table_data, Some(json!([1, 2])));
    }

    #[test]
    fn test_load_state_transitions() {
        let mut state = ReportState::new(ReportFilterState::default(), Step::Map, false);
        assert_eq!(state.load_state, LoadState::Uninitialized);

        let tickets = state.begin_load(&[Step::Map, Step::Chart]);
        assert!(state.is_loading());

        assert!(state.complete(tickets[1], Ok(chart_response()), PERCENT));
        assert!(state.is_loading());
        assert!(state.complete(tickets[0], Err("timeout".into()), PERCENT));
        assert_eq!(state.load_state, LoadState::Loaded);
        assert!(state.map_data.is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ReportState::new(ReportFilterState::default(), Step::Chart, false);
        let old = state.begin_load(&[Step::Chart]);
        let new = state.begin_load(&[Step::Chart]);

        assert!(!state.complete(old[0], Ok(chart_response()), PERCENT));
        assert!(state.chart_data.is_empty());
        assert!(state.is_loading());

        assert!(state.complete(new[0], Ok(chart_response()), PERCENT));
        assert_eq!(state.chart_data.len(), 1);
    }
}
