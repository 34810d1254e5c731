use crate::dashboards::d410_location_reports::indicator::find_report;
use crate::dashboards::LocationReport;
use crate::domain::a101_pregnant_women::ui::details::PregnantWomanDetails;
use crate::domain::a101_pregnant_women::ui::list::PregnantWomenList;
use crate::shared::components::month_picker::MonthPicker;
use crate::shared::date_utils::{month_or_current, today};
use crate::shared::page_data::{PageConfig, DETAILS_API_ROUTE, DETAILS_PAGE_ROUTE, LIST_API_ROUTE};
use contracts::dashboards::d410_location_reports::Step;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_params_map, use_query_map};
use leptos_router::path;

fn page_config() -> PageConfig {
    use_context::<PageConfig>().unwrap_or_default()
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="page page--empty">"Page not found"</div> }
}

#[component]
fn PregnantWomenListPage() -> impl IntoView {
    let config = page_config();
    let (month, year) = month_or_current(config.selected_month, config.selected_year, today());
    let month = RwSignal::new(month);
    let year = RwSignal::new(year);

    let details_template = config.reverse(DETAILS_PAGE_ROUTE).unwrap_or_default().to_string();
    let api_url = config.api_url(LIST_API_ROUTE).unwrap_or_default();
    let location_id = config.user_location_id.clone();

    let on_select = Callback::new(move |(m, y): (u32, i32)| {
        month.set(m);
        year.set(y);
    });

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h2>"Pregnant Women"</h2>
            </div>
            <div class="page__header-right">
                <MonthPicker month=month year=year on_select=on_select />
            </div>
        </div>
        <PregnantWomenList
            details_template=details_template
            api_url=api_url
            location_id=location_id
            month=month
            year=year
        />
    }
}

#[component]
fn PregnantWomanDetailsPage() -> impl IntoView {
    let config = page_config();
    let params = use_params_map();
    let query = use_query_map();

    let beneficiary_id = params
        .with_untracked(|p| p.get("beneficiary_id"))
        .or_else(|| config.beneficiary_id.clone())
        .unwrap_or_default();
    let (month, year) = query.with_untracked(|q| {
        let month = q.get("month").and_then(|m| m.parse().ok()).or(config.selected_month);
        let year = q.get("year").and_then(|y| y.parse().ok()).or(config.selected_year);
        month_or_current(month, year, today())
    });
    let api_url = config.api_url(DETAILS_API_ROUTE).unwrap_or_default();

    view! {
        <PregnantWomanDetails
            beneficiary_id=beneficiary_id
            api_url=api_url
            month=month
            year=year
        />
    }
}

#[component]
fn LocationReportPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let (report, step) = params.with(|p| {
            (
                p.get("report").and_then(|r| find_report(&r)),
                p.get("step").and_then(|s| Step::parse(&s)),
            )
        });
        match (report, step) {
            (Some(report), Some(step)) => view! { <LocationReport report=report step=step /> }.into_any(),
            _ => view! { <NotFound /> }.into_any(),
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PregnantWomenListPage />
                <Route path=path!("/pregnant_women/:beneficiary_id") view=PregnantWomanDetailsPage />
                <Route path=path!("/reports/:report/:step") view=LocationReportPage />
            </Routes>
        </Router>
    }
}
