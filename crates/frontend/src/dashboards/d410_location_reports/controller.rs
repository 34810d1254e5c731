//! Behaviour shared by every location-scoped report page.
//!
//! The controller owns no reactive state itself: everything lives in a
//! [`ReportState`] behind a [`SharedState`], so the same code drives the
//! Leptos page and the in-memory tests.

use super::chart::{chart_options, point_at, tooltip_header, ChartFormat, ChartOptions};
use super::drilldown::{
    disabled_selection_index, drilldown_anchor, map_step_label, SelectionPath, ANCHOR_INDEX,
    MESSAGE_KEY, MESSAGE_RESET_MS,
};
use super::filter::{
    effective_location_id, filters_to_query, move_to_location, persist, restore_or_persist,
    LocationTarget,
};
use super::page::{LocationService, ReportContext, ReportPage};
use super::popup::{template_popup_html, tooltip_html};
use super::state::{AxisSettings, MobilePopup, ReportState};
use crate::shared::date_utils::{month_display, month_or_current, today};
use crate::shared::scheduler::Scheduler;
use crate::shared::state::SharedState;
use crate::shared::storage::{get_json, set_json, KeyValueStore};
use contracts::dashboards::d410_location_reports::{LocationDto, LocationRanking, Step};
use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;
use std::collections::HashMap;
use std::rc::Rc;

/// Initial state of a report page: filters from the query (or storage when
/// the query is empty) and the stored advisory flag.
pub fn initial_state(
    query: &HashMap<String, String>,
    step: Step,
    store: &dyn KeyValueStore,
) -> ReportState {
    let filters = restore_or_persist(query, store);
    let message = get_json(store, MESSAGE_KEY).unwrap_or(false);
    ReportState::new(filters, step, message)
}

pub struct ReportController<P, L, S> {
    page: Rc<P>,
    locations: Rc<L>,
    state: S,
    store: Rc<dyn KeyValueStore>,
    scheduler: Rc<dyn Scheduler>,
    context: ReportContext,
}

impl<P, L, S: Clone> Clone for ReportController<P, L, S> {
    fn clone(&self) -> Self {
        Self {
            page: Rc::clone(&self.page),
            locations: Rc::clone(&self.locations),
            state: self.state.clone(),
            store: Rc::clone(&self.store),
            scheduler: Rc::clone(&self.scheduler),
            context: self.context.clone(),
        }
    }
}

impl<P, L, S> ReportController<P, L, S>
where
    P: ReportPage,
    L: LocationService,
    S: SharedState<ReportState> + Clone + 'static,
{
    pub fn new(
        page: Rc<P>,
        locations: Rc<L>,
        state: S,
        store: Rc<dyn KeyValueStore>,
        scheduler: Rc<dyn Scheduler>,
        context: ReportContext,
    ) -> Self {
        Self {
            page,
            locations,
            state,
            store,
            scheduler,
            context,
        }
    }

    fn axis_settings(&self) -> AxisSettings {
        AxisSettings {
            use_percentage: self.page.use_percentage(),
            force_y_axis_from_zero: self.page.force_y_axis_from_zero(),
        }
    }

    /// Resolve the filter location, then load. Sentinel or missing ids load
    /// at national scope without a lookup.
    pub async fn init(&self) {
        let Some(filters) = self.state.with_state(|s| s.filters.clone()) else {
            return;
        };
        let location_id =
            effective_location_id(&filters, self.context.user_location_id.as_deref());

        if let Some(location_id) = location_id {
            match self.locations.get_location(&location_id).await {
                Ok(location) => {
                    self.state.update_state(|s| s.location = Some(location));
                }
                Err(e) => log::error!("Failed to resolve location {}: {}", location_id, e),
            }
        }
        self.load_data().await;
    }

    /// Fetch every step the page shows: map and chart on mobile, the current
    /// step otherwise.
    pub async fn load_data(&self) {
        let axis = self.axis_settings();
        let is_mobile = self.context.is_mobile;
        let Some((filters, tickets)) = self.state.update_state(|s| {
            let (mode, label) = map_step_label(s.location.as_ref());
            s.map_mode = mode;
            s.map_label = label;
            let steps = if is_mobile {
                vec![Step::Map, Step::Chart]
            } else {
                vec![s.step]
            };
            (s.filters.clone(), s.begin_load(&steps))
        }) else {
            return;
        };
        log::debug!("Loading report steps {:?}", tickets);

        let page = &self.page;
        let filters = &filters;
        let mut in_flight: FuturesUnordered<_> = tickets
            .into_iter()
            .map(|ticket| async move { (ticket, page.fetch_step(ticket.key, filters).await) })
            .collect();

        while let Some((ticket, result)) = in_flight.next().await {
            if self
                .state
                .update_state(|s| s.complete(ticket, result, axis))
                .is_none()
            {
                return;
            }
        }
    }

    /// Store the filters for the next page and reload.
    pub async fn on_filters_change(&self) {
        if let Some(filters) = self.state.with_state(|s| s.filters.clone()) {
            persist(self.store.as_ref(), &filters);
        }
        self.load_data().await;
    }

    /// Combined location and month change sent by the mobile filter sheet.
    pub async fn on_mobile_filter_change(
        &self,
        location: Option<LocationDto>,
        location_level: i32,
        month: u32,
        year: i32,
    ) {
        let target = match location {
            Some(location) => LocationTarget::Location(location),
            None => LocationTarget::National,
        };
        let level = match target {
            LocationTarget::National => -1,
            LocationTarget::Location(_) => location_level,
        };
        self.state.update_state(|s| {
            s.filters_open = false;
            move_to_location(&mut s.filters, &target, level);
            s.filters.month = Some(month);
            s.filters.year = Some(year);
        });
        self.on_filters_change().await;
    }

    pub fn move_to_location(&self, target: &LocationTarget, index: i32) {
        self.state
            .update_state(|s| move_to_location(&mut s.filters, target, index));
    }

    /// Record the location picker path. A path exactly six levels deep moves
    /// the filter back to its fourth entry, raises the advisory flag for
    /// three seconds and reloads.
    pub async fn on_selection_changed(&self, path: SelectionPath) {
        if path.is_empty() {
            return;
        }
        let anchor = drilldown_anchor(&path).cloned();
        self.state.update_state(|s| {
            s.selected_locations = path;
            if let Some(anchor) = &anchor {
                move_to_location(
                    &mut s.filters,
                    &LocationTarget::Location(anchor.clone()),
                    ANCHOR_INDEX as i32,
                );
                s.location = Some(anchor.clone());
                s.message = true;
            }
        });
        let Some(anchor) = anchor else {
            return;
        };
        log::info!("Selection too deep, moving to {}", anchor.name);
        set_json(self.store.as_ref(), MESSAGE_KEY, &true);

        let store = Rc::clone(&self.store);
        let state = self.state.clone();
        self.scheduler.schedule(
            MESSAGE_RESET_MS,
            Box::new(move || {
                set_json(store.as_ref(), MESSAGE_KEY, &false);
                state.update_state(|s| s.message = false);
            }),
        );
        self.on_filters_change().await;
    }

    /// Choices for the picker level below `parent`. Lookup failures leave the
    /// level empty.
    pub async fn location_options(&self, parent: Option<&LocationDto>) -> Vec<LocationDto> {
        let parent_id = parent.map(|p| p.location_id.as_str());
        match self.locations.get_children(parent_id).await {
            Ok(children) => children,
            Err(e) => {
                log::error!("Failed to load child locations of {:?}: {}", parent_id, e);
                Vec::new()
            }
        }
    }

    /// Move the filters to the deepest picked location (national when none)
    /// and reload.
    pub async fn apply_selection(&self) {
        self.state.update_state(|s| {
            let deepest = s
                .selected_locations
                .iter()
                .enumerate()
                .rev()
                .find_map(|(index, entry)| {
                    entry
                        .as_ref()
                        .filter(|loc| !loc.is_all())
                        .map(|loc| (index, loc.clone()))
                });
            match deepest {
                Some((index, location)) => {
                    move_to_location(
                        &mut s.filters,
                        &LocationTarget::Location(location.clone()),
                        index as i32,
                    );
                    s.location = Some(location);
                }
                None => {
                    move_to_location(&mut s.filters, &LocationTarget::National, -1);
                    s.location = None;
                }
            }
            s.filters_open = false;
        });
        self.on_filters_change().await;
    }

    pub fn disabled_selection_index(&self) -> i32 {
        self.state
            .with_state(|s| {
                disabled_selection_index(
                    &s.selected_locations,
                    self.context.have_access_to_all_locations,
                )
            })
            .unwrap_or(-1)
    }

    pub async fn set_step(&self, step: Step) {
        let changed = self
            .state
            .update_state(|s| std::mem::replace(&mut s.step, step) != step)
            .unwrap_or(false);
        if changed || !self.context.is_mobile {
            self.load_data().await;
        }
    }

    pub fn open_filter_menu(&self) {
        self.state.update_state(|s| s.filters_open = true);
    }

    pub fn close_filter_menu(&self) {
        self.state.update_state(|s| s.filters_open = false);
    }

    /// Map hover box for the region named `name`.
    pub fn template_popup(&self, name: &str, row: &Value) -> String {
        template_popup_html(
            name,
            &self.page.popup_lines(row),
            &self.page.popup_subheading(),
        )
    }

    pub fn display_mobile_popup(&self, location: &LocationRanking) {
        let row = self
            .state
            .with_state(|s| {
                s.map_data
                    .as_ref()
                    .and_then(|map| map.data.get(&location.loc_name).cloned())
            })
            .flatten()
            .unwrap_or(Value::Null);
        let lines = self.page.popup_lines(&row);
        self.state.update_state(|s| {
            s.mobile_popup = Some(MobilePopup {
                location: location.clone(),
                lines,
            })
        });
    }

    pub fn close_mobile_popup(&self) {
        self.state.update_state(|s| s.mobile_popup = None);
    }

    /// Program summary page of this report's section, with current filters.
    pub fn back_arrow_link(&self) -> String {
        let query = self
            .state
            .with_state(|s| filters_to_query(&s.filters))
            .unwrap_or_default();
        format!("program_summary/{}?{}", self.page.section_slug(), query)
    }

    pub fn selected_month_display(&self) -> String {
        let (month, year) = self
            .state
            .with_state(|s| month_or_current(s.filters.month, s.filters.year, today()))
            .unwrap_or_else(|| month_or_current(None, None, today()));
        month_display(month, year)
    }

    pub fn chart_options(&self, format: &ChartFormat) -> ChartOptions {
        let (ticks, force_y) = self
            .state
            .with_state(|s| (s.chart_ticks.clone(), s.force_y))
            .unwrap_or_default();
        chart_options(format, ticks, force_y)
    }

    /// Interactive tooltip for the month at timestamp `x`.
    pub fn tooltip_content(&self, x: i64) -> String {
        let lines = self
            .state
            .with_state(|s| self.page.tooltip_lines(point_at(&s.chart_data, x)))
            .unwrap_or_default();
        tooltip_html(&tooltip_header(x), &lines)
    }
}
