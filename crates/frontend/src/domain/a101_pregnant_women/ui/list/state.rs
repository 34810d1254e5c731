use crate::shared::request_tracker::{RequestTracker, Ticket};
use contracts::domain::a101_pregnant_women::{
    PregnantWomanListRow, PregnantWomenListRequest, PregnantWomenListResponse,
};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct PregnantWomenListState {
    pub rows: Vec<PregnantWomanListRow>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub sort_column: String,
    pub sort_ascending: bool,
    pub is_loaded: bool,
    tracker: RequestTracker,
}

impl Default for PregnantWomenListState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            sort_column: "name".to_string(),
            sort_ascending: true,
            is_loaded: false,
            tracker: RequestTracker::new(),
        }
    }
}

impl PregnantWomenListState {
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    /// Build the request for the current page. Issuing it supersedes every
    /// request still in flight.
    pub fn request(
        &mut self,
        month: u32,
        year: i32,
        location_id: Option<String>,
    ) -> (Ticket<()>, PregnantWomenListRequest) {
        self.tracker.advance();
        let request = PregnantWomenListRequest {
            selected_month: month,
            selected_year: year,
            location_id,
            start: self.page * self.page_size,
            length: self.page_size,
            sort_column: self.sort_column.clone(),
            sort_ascending: self.sort_ascending,
        };
        (self.tracker.ticket(()), request)
    }

    pub fn is_current(&self, ticket: &Ticket<()>) -> bool {
        self.tracker.is_current(ticket)
    }

    /// Returns `false` when the response belongs to a superseded request.
    pub fn apply_response(
        &mut self,
        ticket: &Ticket<()>,
        response: PregnantWomenListResponse,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.rows = response.data;
        self.total_count = response.records_filtered;
        self.is_loaded = true;
        true
    }

    /// Sort by `column`, flipping direction when it is already the sort key.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_column == column {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_column = column.to_string();
            self.sort_ascending = true;
        }
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_paging() {
        let mut state = PregnantWomenListState {
            page: 2,
            ..Default::default()
        };
        let (_, request) = state.request(4, 2019, Some("loc".into()));
        assert_eq!(request.start, 20);
        assert_eq!(request.length, DEFAULT_PAGE_SIZE);
        assert_eq!(request.selected_month, 4);
        assert_eq!(request.location_id.as_deref(), Some("loc"));
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = PregnantWomenListState {
            page: 3,
            ..Default::default()
        };
        state.toggle_sort("name");
        assert!(!state.sort_ascending);
        state.toggle_sort("age");
        assert_eq!(state.sort_column, "age");
        assert!(state.sort_ascending);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_total_pages() {
        let mut state = PregnantWomenListState::default();
        let (ticket, _) = state.request(1, 2019, None);
        state.apply_response(
            &ticket,
            PregnantWomenListResponse {
                data: Vec::new(),
                records_total: 40,
                records_filtered: 21,
            },
        );
        assert_eq!(state.total_pages(), 3);
        assert!(state.is_loaded);
    }

    fn page_of(ids: &[&str]) -> PregnantWomenListResponse {
        PregnantWomenListResponse {
            data: ids
                .iter()
                .map(|id| PregnantWomanListRow {
                    id: id.to_string(),
                    ..Default::default()
                })
                .collect(),
            records_total: 30,
            records_filtered: 30,
        }
    }

    #[test]
    fn test_late_response_for_earlier_page_is_dropped() {
        let mut state = PregnantWomenListState::default();
        state.page = 1;
        let (first, _) = state.request(1, 2019, None);
        state.page = 2;
        let (second, request) = state.request(1, 2019, None);
        assert_eq!(request.start, 20);

        assert!(state.apply_response(&second, page_of(&["c1", "c2"])));
        assert!(!state.apply_response(&first, page_of(&["b1", "b2"])));

        let ids: Vec<&str> = state.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
        assert_eq!(state.page, 2);
        assert!(!state.is_current(&first));
    }
}
