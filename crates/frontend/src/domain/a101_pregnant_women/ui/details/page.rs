//! Pregnant woman details page
//!
//! Every card renders immediately with "N/A" values and fills in as
//! its subsection arrives.

use super::display::{self, FieldRow, PREGNANCY_STATUS_STEPS};
use super::view_model::PregnantWomanDetailsVm;
use super::visits::{observation_labels, VisitRecord, VisitSlot};
use crate::shared::components::month_picker::MonthPicker;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PregnantWomanDetails(
    beneficiary_id: String,
    api_url: String,
    month: u32,
    year: i32,
) -> impl IntoView {
    let vm = PregnantWomanDetailsVm::new(beneficiary_id, api_url, month, year);
    vm.load();

    let is_loading = vm.is_loading();
    let name = vm.beneficiary_name();
    let state = vm.state;

    let on_period = Callback::new({
        let vm = vm.clone();
        move |(m, y): (u32, i32)| vm.set_period(m, y)
    });

    let person = Signal::derive(move || state.with(|s| display::person_rows(s.record.person.as_ref())));
    let husband = Signal::derive(move || state.with(|s| display::person_rows(s.record.husband.as_ref())));
    let other = Signal::derive(move || state.with(|s| display::other_info_rows(s.record.other.as_ref())));
    let pregnancy = Signal::derive(move || {
        state.with(|s| display::pregnancy_details_rows(s.record.pregnancy_details.as_ref()))
    });
    let risk = Signal::derive(move || {
        state.with(|s| display::pregnancy_risk_rows(s.record.pregnancy_risk.as_ref()))
    });
    let consumables = Signal::derive(move || {
        state.with(|s| display::consumables_rows(s.record.consumables_disbursed.as_ref()))
    });
    let immunization = Signal::derive(move || {
        state.with(|s| display::immunization_rows(s.record.immunization_counseling.as_ref()))
    });
    let abortion = Signal::derive(move || {
        state.with(|s| display::abortion_rows(s.record.abortion_details.as_ref()))
    });
    let maternal_death = Signal::derive(move || {
        state.with(|s| display::maternal_death_rows(s.record.maternal_death_details.as_ref()))
    });
    let delivery = Signal::derive(move || {
        state.with(|s| display::delivery_rows(s.record.delivery_details.as_ref()))
    });

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{move || name.get()}</h2>
                    <Show when=move || is_loading.get()>
                        <Spinner size=SpinnerSize::Small />
                    </Show>
                </div>
                <div class="page__header-right">
                    <MonthPicker
                        month=vm.selected_month
                        year=vm.selected_year
                        on_select=on_period
                    />
                </div>
            </div>

            <div class="page__content">
                <StatusTimeline vm=vm.clone() />

                <div class="details-grid">
                    <SectionCard title="Beneficiary" rows=person />
                    <SectionCard title="Husband" rows=husband />
                    <SectionCard title="Other Information" rows=other />
                </div>

                <ChildrenGrid vm=vm.clone() />

                <div class="details-grid">
                    <SectionCard title="Pregnancy Details" rows=pregnancy />
                    <SectionCard title="Pregnancy Risk" rows=risk />
                    <SectionCard title="Consumables Disbursed" rows=consumables />
                    <SectionCard title="Immunization and Counselling" rows=immunization />
                </div>

                <VisitGrid title="ANC Visits" slots=vm.anc_visits() />
                <VisitGrid title="PNC Visits" slots=vm.pnc_visits() />

                <div class="details-grid">
                    <SectionCard title="Delivery Details" rows=delivery />
                    <SectionCard title="Abortion Details" rows=abortion />
                    <SectionCard title="Maternal Death Details" rows=maternal_death />
                </div>
            </div>
        </div>
    }
}

#[component]
fn SectionCard(title: &'static str, #[prop(into)] rows: Signal<Vec<FieldRow>>) -> impl IntoView {
    view! {
        <div class="details-card">
            <h4 class="details-card__title">{title}</h4>
            <table class="details-card__table">
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <tr>
                                        <td class="details-card__label">{label}</td>
                                        <td class="details-card__value">{value}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn StatusTimeline(vm: PregnantWomanDetailsVm) -> impl IntoView {
    view! {
        <div class="status-timeline">
            {PREGNANCY_STATUS_STEPS
                .iter()
                .map(|(status, label)| {
                    let class = vm.status_class(*status);
                    view! {
                        <div class=move || format!("status-timeline__step {}", class.get())>
                            <span class="status-timeline__dot"></span>
                            <span class="status-timeline__label">{*label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ChildrenGrid(vm: PregnantWomanDetailsVm) -> impl IntoView {
    let children = vm.children();

    view! {
        <Show when=move || children.with(|c| !c.is_empty())>
            <h3 class="section-title">"Children"</h3>
            <div class="details-grid details-grid--children">
                {move || {
                    children
                        .get()
                        .into_iter()
                        .map(|child| match child {
                            Some(child) => {
                                let rows = display::child_rows(&child);
                                view! { <SectionCard title="Child" rows=Signal::stored(rows) /> }
                                    .into_any()
                            }
                            None => view! { <div class="details-card details-card--empty"></div> }
                                .into_any(),
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
fn VisitGrid<V>(title: &'static str, slots: Signal<Vec<VisitSlot<V>>>) -> impl IntoView
where
    V: VisitRecord + Clone + Send + Sync + 'static,
{
    let labels = observation_labels::<V>();

    view! {
        <div class="visit-grid">
            <h3 class="section-title">{title}</h3>
            <table class="visit-grid__table">
                <thead>
                    <tr>
                        <th>"Visit Date"</th>
                        {move || {
                            slots
                                .get()
                                .iter()
                                .map(|slot| view! { <th>{slot.date_label()}</th> })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    {labels
                        .into_iter()
                        .enumerate()
                        .map(|(row, label)| {
                            view! {
                                <tr>
                                    <td class="visit-grid__label">{label}</td>
                                    {move || {
                                        slots
                                            .get()
                                            .iter()
                                            .filter_map(|slot| slot.cells().into_iter().nth(row))
                                            .map(|cell| {
                                                view! {
                                                    <td title=cell.text>
                                                        <i class=cell.marker.icon_class()></i>
                                                    </td>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
