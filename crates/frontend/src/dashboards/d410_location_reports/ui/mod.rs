//! Report page shell: filters, step tabs and the three step views.

use super::api::{HttpIndicatorPage, HttpLocationService};
use super::chart::ChartFormat;
use super::controller::{initial_state, ReportController};
use super::drilldown::DRILLDOWN_DEPTH;
use super::filter::{filters_to_query, LocationTarget};
use super::indicator::IndicatorReport;
use super::page::ReportContext;
use super::state::ReportState;
use crate::shared::components::month_picker::MonthPicker;
use crate::shared::date_utils::{month_or_current, today};
use crate::shared::page_data::{PageConfig, LOCATION_API_ROUTE, REPORTS_API_ROUTE};
use crate::shared::query::{read_query, replace_query};
use crate::shared::scheduler::{Scheduler, TimeoutScheduler};
use crate::shared::storage::{BrowserStorage, KeyValueStore};
use contracts::dashboards::d410_location_reports::{LocationDto, LocationRanking, Step};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

type LiveController =
    ReportController<HttpIndicatorPage, HttpLocationService, RwSignal<ReportState>>;

const STEPS: [Step; 3] = [Step::Map, Step::Chart, Step::Table];

fn step_title(step: Step, state: &ReportState) -> String {
    match step {
        Step::Map => state.map_label.clone(),
        Step::Chart => "Chart View".to_string(),
        Step::Table => "Table View".to_string(),
    }
}

#[component]
pub fn LocationReport(report: &'static IndicatorReport, step: Step) -> impl IntoView {
    let config = use_context::<PageConfig>().unwrap_or_default();
    let store: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
    let state = RwSignal::new(initial_state(&read_query(), step, store.as_ref()));

    let base_url = config.api_url(REPORTS_API_ROUTE).unwrap_or_default();
    let location_url = config.api_url(LOCATION_API_ROUTE).unwrap_or_default();
    let controller: LiveController = ReportController::new(
        Rc::new(HttpIndicatorPage::new(base_url, report.clone())),
        Rc::new(HttpLocationService::new(location_url)),
        state,
        store,
        Rc::new(TimeoutScheduler) as Rc<dyn Scheduler>,
        ReportContext {
            user_location_id: config.user_location_id.clone(),
            have_access_to_all_locations: config.have_access_to_all_locations,
            have_access_to_features: config.have_access_to_features,
            is_mobile: config.is_mobile,
        },
    );
    let is_mobile = config.is_mobile;
    let controller = StoredValue::new_local(controller);

    {
        let c = controller.get_value();
        spawn_local(async move { c.init().await });
    }

    // Keep the address bar in sync with the filters.
    Effect::new(move |_| {
        let query = state.with(|s| filters_to_query(&s.filters));
        replace_query(&query);
    });

    let reload = move || {
        let c = controller.get_value();
        spawn_local(async move { c.on_filters_change().await });
    };

    let on_month = Callback::new(move |(month, year): (u32, i32)| {
        if is_mobile {
            let location = state.with_untracked(|s| s.location.clone());
            let level = state.with_untracked(|s| s.filters.selected_location_level);
            let c = controller.get_value();
            spawn_local(async move { c.on_mobile_filter_change(location, level, month, year).await });
        } else {
            state.update(|s| {
                s.filters.month = Some(month);
                s.filters.year = Some(year);
            });
            reload();
        }
    });

    let period = Signal::derive(move || {
        state.with(|s| month_or_current(s.filters.month, s.filters.year, today()))
    });
    let month = Signal::derive(move || period.get().0);
    let year = Signal::derive(move || period.get().1);

    view! {
        <div class="page page--dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <Show when=move || is_mobile>
                        <a class="back-arrow" href=move || {
                            state.track();
                            controller.with_value(|c| c.back_arrow_link())
                        }>"←"</a>
                    </Show>
                    <h2>{report.title}</h2>
                    <span class="report__period">
                        {move || {
                            state.track();
                            controller.with_value(|c| c.selected_month_display())
                        }}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| controller.with_value(|c| c.open_filter_menu())
                    >
                        "Filters"
                    </Button>
                </div>
            </div>

            <Show when=move || state.with(|s| s.filters_open)>
                <div class="report__filters">
                    <MonthPicker month=month year=year on_select=on_month />
                    <LocationPicker state=state controller=controller />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            controller.with_value(|c| c.move_to_location(&LocationTarget::National, -1));
                            reload();
                        }
                    >
                        "National"
                    </Button>
                    <Button on_click=move |_| controller.with_value(|c| c.close_filter_menu())>
                        "Close"
                    </Button>
                </div>
            </Show>

            <Show when=move || state.with(|s| s.message)>
                <div class="alert alert--info">
                    "Drill down is available up to the sector level only."
                </div>
            </Show>

            <div class="report__location">
                {move || state.with(|s| {
                    if s.filters.location_name.is_empty() {
                        "National".to_string()
                    } else {
                        s.filters.location_name.clone()
                    }
                })}
            </div>

            <Flex gap=FlexGap::Small class="report__steps">
                {STEPS
                    .into_iter()
                    .map(|step| {
                        view! {
                            <Button
                                appearance=Signal::derive(move || {
                                    if state.with(|s| s.step == step) {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                })
                                on_click=move |_| {
                                    let c = controller.get_value();
                                    spawn_local(async move { c.set_step(step).await });
                                }
                            >
                                {move || state.with(|s| step_title(step, s))}
                            </Button>
                        }
                    })
                    .collect_view()}
                <Show when=move || state.with(|s| s.is_loading())>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </Flex>

            <div class="page__content">
                {move || match state.with(|s| s.step) {
                    Step::Map => view! { <MapStep state=state controller=controller /> }.into_any(),
                    Step::Chart => view! { <ChartStep report=report state=state controller=controller /> }.into_any(),
                    Step::Table => view! { <TableStep state=state /> }.into_any(),
                }}
            </div>

            <MobilePopupView state=state controller=controller />
        </div>
    }
}

#[component]
fn MapStep(
    state: RwSignal<ReportState>,
    controller: StoredValue<LiveController, LocalStorage>,
) -> impl IntoView {
    view! {
        <div class=move || format!("report__map report__map--{}", state.with(|s| s.map_mode.as_str()))>
            {move || {
                let rows: Vec<(String, serde_json::Value)> = state.with(|s| {
                    s.map_data
                        .as_ref()
                        .map(|map| map.data.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
                        .unwrap_or_default()
                });
                rows.into_iter()
                    .map(|(name, row)| {
                        let html = controller.with_value(|c| c.template_popup(&name, &row));
                        view! { <div class="report__map-region" inner_html=html></div> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// One select per location level. Levels from the first one the viewer may
/// not access onwards are locked.
#[component]
fn LocationPicker(
    state: RwSignal<ReportState>,
    controller: StoredValue<LiveController, LocalStorage>,
) -> impl IntoView {
    let options = RwSignal::new(Vec::<Vec<LocationDto>>::new());

    let load_level = move |level: usize, parent: Option<LocationDto>| {
        let c = controller.get_value();
        spawn_local(async move {
            let children = c.location_options(parent.as_ref()).await;
            options.update(|o| {
                o.truncate(level);
                o.push(children);
            });
        });
    };
    load_level(0, None);

    let on_pick = move |level: usize, location_id: String| {
        let picked = options.with_untracked(|o| {
            o.get(level)
                .and_then(|choices| choices.iter().find(|loc| loc.location_id == location_id))
                .cloned()
        });
        let mut path = state.with_untracked(|s| s.selected_locations.clone());
        path.truncate(level);
        path.push(picked.clone());

        let deeper = path.len() < DRILLDOWN_DEPTH;
        let c = controller.get_value();
        spawn_local(async move { c.on_selection_changed(path).await });
        match picked {
            Some(location) if deeper => load_level(level + 1, Some(location)),
            _ => options.update(|o| o.truncate(level + 1)),
        }
    };

    view! {
        <div class="location-picker">
            {move || {
                state.track();
                let locked_from = controller.with_value(|c| c.disabled_selection_index());
                options
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(level, choices)| {
                        let selected = state.with(|s| {
                            s.selected_locations
                                .get(level)
                                .cloned()
                                .flatten()
                                .map(|loc| loc.location_id)
                                .unwrap_or_default()
                        });
                        let locked = locked_from >= 0 && level as i32 >= locked_from;
                        view! {
                            <select
                                class="location-picker__level"
                                disabled=locked
                                on:change=move |ev| on_pick(level, event_target_value(&ev))
                            >
                                <option value="" selected=selected.is_empty()>"All"</option>
                                {choices
                                    .into_iter()
                                    .map(|loc| {
                                        let is_selected = loc.location_id == selected;
                                        view! {
                                            <option value=loc.location_id.clone() selected=is_selected>
                                                {loc.name.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        }
                    })
                    .collect_view()
            }}
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| {
                    let c = controller.get_value();
                    spawn_local(async move { c.apply_selection().await });
                }
            >
                "Apply"
            </Button>
        </div>
    }
}

#[component]
fn ChartStep(
    report: &'static IndicatorReport,
    state: RwSignal<ReportState>,
    controller: StoredValue<LiveController, LocalStorage>,
) -> impl IntoView {
    let format = ChartFormat {
        x_axis_tick_format: "%b %Y".to_string(),
        y_axis_tick_format: if report.use_percentage { ".2%" } else { ",d" }.to_string(),
        caption_content: report.caption.to_string(),
    };
    let options_json = move || {
        state.track();
        let options = controller.with_value(|c| c.chart_options(&format));
        serde_json::to_string(&options).unwrap_or_default()
    };
    let data_json = move || state.with(|s| serde_json::to_string(&s.chart_data).unwrap_or_default());
    let tooltips = move || {
        state
            .with(|s| s.chart_ticks.clone())
            .into_iter()
            .map(|x| {
                let html = controller.with_value(|c| c.tooltip_content(x));
                view! { <div class="report__chart-tooltip" data-x=x.to_string() inner_html=html></div> }
            })
            .collect_view()
    };

    view! {
        <div class="report__chart" data-chart-options=options_json data-chart-data=data_json></div>
        <div class="report__chart-tooltips" hidden=true>{tooltips}</div>
        <div class="report__rankings">
            <RankingList title="Best performers" state=state controller=controller top=true />
            <RankingList title="Worst performers" state=state controller=controller top=false />
        </div>
    }
}

#[component]
fn RankingList(
    title: &'static str,
    state: RwSignal<ReportState>,
    controller: StoredValue<LiveController, LocalStorage>,
    top: bool,
) -> impl IntoView {
    let rows = move || {
        state.with(|s| {
            if top {
                s.top_five.clone()
            } else {
                s.bottom_five.clone()
            }
        })
    };
    view! {
        <div class="ranking">
            <h4>{title}</h4>
            <ol>
                {move || rows()
                    .into_iter()
                    .map(|ranking: LocationRanking| {
                        let label = match ranking.percent {
                            Some(p) => format!("{} ({:.2}%)", ranking.loc_name, p),
                            None => ranking.loc_name.clone(),
                        };
                        view! {
                            <li on:click=move |_| controller.with_value(|c| c.display_mobile_popup(&ranking))>
                                {label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
fn TableStep(state: RwSignal<ReportState>) -> impl IntoView {
    view! {
        <pre class="report__table">
            {move || state.with(|s| {
                s.table_data
                    .as_ref()
                    .and_then(|data| serde_json::to_string_pretty(data).ok())
                    .unwrap_or_default()
            })}
        </pre>
    }
}

#[component]
fn MobilePopupView(
    state: RwSignal<ReportState>,
    controller: StoredValue<LiveController, LocalStorage>,
) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| s.mobile_popup.is_some())>
            <div class="mobile-popup">
                {move || state.with(|s| {
                    s.mobile_popup.as_ref().map(|popup| {
                        view! {
                            <h4>{popup.location.loc_name.clone()}</h4>
                            {popup
                                .lines
                                .iter()
                                .map(|line| view! {
                                    <div>{line.indicator_name.clone()}<strong>{line.indicator_value.clone()}</strong></div>
                                })
                                .collect_view()}
                        }
                    })
                })}
                <Button on_click=move |_| controller.with_value(|c| c.close_mobile_popup())>"Close"</Button>
            </div>
        </Show>
    }
}
