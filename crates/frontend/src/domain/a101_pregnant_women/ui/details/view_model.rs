//! ViewModel for pregnant women details
//!
//! Owns the reactive record and starts one request per subsection.

use super::loader::{DetailsLoader, DetailsState};
use super::model::HttpBeneficiaryTransport;
use super::visits::VisitSlot;
use contracts::domain::a101_pregnant_women::{AncVisitDto, PncVisitDto};
use contracts::domain::common::ChildDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone)]
pub struct PregnantWomanDetailsVm {
    pub state: RwSignal<DetailsState>,
    pub selected_month: RwSignal<u32>,
    pub selected_year: RwSignal<i32>,
    api_url: StoredValue<String>,
}

impl PregnantWomanDetailsVm {
    pub fn new(beneficiary_id: String, api_url: String, month: u32, year: i32) -> Self {
        Self {
            state: RwSignal::new(DetailsState::new(beneficiary_id)),
            selected_month: RwSignal::new(month),
            selected_year: RwSignal::new(year),
            api_url: StoredValue::new(api_url),
        }
    }

    /// Reload every subsection for the selected month.
    pub fn load(&self) {
        let loader = DetailsLoader::new(
            HttpBeneficiaryTransport::new(self.api_url.get_value()),
            self.state,
        );
        let month = self.selected_month.get_untracked();
        let year = self.selected_year.get_untracked();
        spawn_local(async move {
            loader.fetch_all(month, year).await;
        });
    }

    pub fn set_period(&self, month: u32, year: i32) {
        self.selected_month.set(month);
        self.selected_year.set(year);
        self.load();
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn beneficiary_name(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                s.record
                    .person
                    .as_ref()
                    .and_then(|p| p.name.clone())
                    .unwrap_or_else(|| super::display::NOT_AVAILABLE.to_string())
            })
        })
    }

    pub fn anc_visits(&self) -> Signal<Vec<VisitSlot<AncVisitDto>>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.record.anc_visits.clone()))
    }

    pub fn pnc_visits(&self) -> Signal<Vec<VisitSlot<PncVisitDto>>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.record.pnc_visits.clone()))
    }

    pub fn children(&self) -> Signal<Vec<Option<ChildDto>>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.record.children.clone()))
    }

    pub fn status_class(&self, status: i64) -> Signal<&'static str> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.record.pregnancy_status_class(status)))
    }
}
