//! Concurrent loading of every subsection of the detail page.

use super::record::BeneficiaryRecord;
use crate::shared::request_tracker::{RequestTracker, Ticket};
use crate::shared::state::SharedState;
use async_trait::async_trait;
use contracts::domain::a101_pregnant_women::{DetailsRequest, Subsection};
use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;
use std::collections::BTreeSet;

/// Fetches the raw payload of one subsection.
#[async_trait(?Send)]
pub trait BeneficiaryTransport {
    async fn fetch_subsection(&self, request: &DetailsRequest) -> Result<Value, String>;
}

/// Record plus bookkeeping of the requests filling it.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsState {
    pub record: BeneficiaryRecord,
    /// Subsections of the current generation still in flight.
    pub pending: BTreeSet<Subsection>,
    tracker: RequestTracker,
}

impl DetailsState {
    pub fn new(beneficiary_id: impl Into<String>) -> Self {
        Self {
            record: BeneficiaryRecord::new(beneficiary_id),
            pending: BTreeSet::new(),
            tracker: RequestTracker::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.tracker.generation()
    }

    /// Reset the record and issue tickets for every subsection.
    pub fn begin_reload(&mut self) -> Vec<Ticket<Subsection>> {
        self.tracker.advance();
        self.record = BeneficiaryRecord::new(self.record.id.clone());
        self.pending = Subsection::ALL.into_iter().collect();
        Subsection::ALL
            .into_iter()
            .map(|subsection| self.tracker.ticket(subsection))
            .collect()
    }

    /// Apply a finished request. Returns `false` when the response belongs to
    /// a superseded generation and was dropped.
    pub fn complete(&mut self, ticket: Ticket<Subsection>, result: Result<Value, String>) -> bool {
        if !self.tracker.is_current(&ticket) {
            log::debug!(
                "Discarding stale {} response (generation {}, current {})",
                ticket.key,
                ticket.generation,
                self.tracker.generation()
            );
            return false;
        }
        self.pending.remove(&ticket.key);

        match result {
            Ok(payload) => match self.record.apply_update(ticket.key, &payload) {
                Ok(ignored) if !ignored.is_empty() => {
                    log::warn!("Ignoring {} fields: {}", ticket.key, ignored.join(", "));
                }
                Ok(_) => {}
                Err(e) => log::error!("{}", e),
            },
            Err(e) => log::error!("Failed to load {}: {}", ticket.key, e),
        }
        true
    }
}

pub struct DetailsLoader<T, S> {
    transport: T,
    state: S,
}

impl<T, S> DetailsLoader<T, S>
where
    T: BeneficiaryTransport,
    S: SharedState<DetailsState>,
{
    pub fn new(transport: T, state: S) -> Self {
        Self { transport, state }
    }

    /// Request every subsection at once and apply each response as it
    /// arrives. Failures are logged and leave their subsection empty.
    pub async fn fetch_all(&self, month: u32, year: i32) {
        let Some((beneficiary_id, tickets)) = self
            .state
            .update_state(|s| (s.record.id.clone(), s.begin_reload()))
        else {
            return;
        };
        log::debug!(
            "Loading {} subsections for beneficiary {}",
            tickets.len(),
            beneficiary_id
        );

        let transport = &self.transport;
        let mut in_flight: FuturesUnordered<_> = tickets
            .into_iter()
            .map(|ticket| {
                let request = DetailsRequest::new(ticket.key, &beneficiary_id, month, year);
                async move {
                    let result = transport.fetch_subsection(&request).await;
                    (ticket, result)
                }
            })
            .collect();

        while let Some((ticket, result)) = in_flight.next().await {
            if self
                .state
                .update_state(|s| s.complete(ticket, result))
                .is_none()
            {
                // View was disposed
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_pregnant_women::ui::details::visits::{VisitMarker, NOT_DONE};
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeTransport {
        responses: HashMap<Subsection, Result<Value, String>>,
        requests: RefCell<Vec<DetailsRequest>>,
    }

    #[async_trait(?Send)]
    impl BeneficiaryTransport for FakeTransport {
        async fn fetch_subsection(&self, request: &DetailsRequest) -> Result<Value, String> {
            self.requests.borrow_mut().push(request.clone());
            self.responses
                .get(&request.subsection)
                .cloned()
                .unwrap_or_else(|| Ok(json!({})))
        }
    }

    #[test]
    fn test_fetch_all_requests_every_subsection() {
        let state = Rc::new(RefCell::new(DetailsState::new("b1")));
        let loader = DetailsLoader::new(FakeTransport::default(), Rc::clone(&state));

        block_on(loader.fetch_all(4, 2019));

        let requests = loader.transport.requests.borrow();
        assert_eq!(requests.len(), Subsection::ALL.len());
        assert!(requests
            .iter()
            .all(|r| r.beneficiary_id == "b1" && r.selected_month == 4 && r.selected_year == 2019));
        assert!(!state.borrow().is_loading());
    }

    #[test]
    fn test_two_anc_visits_render_four_columns() {
        let transport = FakeTransport {
            responses: HashMap::from([(
                Subsection::AntenatalCareDetails,
                Ok(json!({"visits": [
                    {"ancDate": "2019-01-10", "hb": 0},
                    {"ancDate": "2019-02-10", "hb": 12}
                ]})),
            )]),
            ..Default::default()
        };
        let state = Rc::new(RefCell::new(DetailsState::new("b1")));
        let loader = DetailsLoader::new(transport, Rc::clone(&state));

        block_on(loader.fetch_all(4, 2019));

        let state = state.borrow();
        let visits = &state.record.anc_visits;
        assert_eq!(visits.len(), 4);
        assert_eq!(visits[0].date_label(), "2019-01-10");
        assert_eq!(visits[1].date_label(), "2019-02-10");
        for slot in &visits[2..] {
            assert!(slot.placeholder);
            assert_eq!(slot.date_label(), NOT_DONE);
            assert!(slot
                .cells()
                .iter()
                .all(|c| c.marker == VisitMarker::NotRecorded));
        }
    }

    #[test]
    fn test_failed_subsection_does_not_block_others() {
        let transport = FakeTransport {
            responses: HashMap::from([
                (Subsection::PregnancyRisk, Err("HTTP error: 500".to_string())),
                (
                    Subsection::DeliveryDetails,
                    Ok(json!({"dod": "2019-05-01", "placeOfDelivery": "Hospital"})),
                ),
            ]),
            ..Default::default()
        };
        let state = Rc::new(RefCell::new(DetailsState::new("b1")));
        let loader = DetailsLoader::new(transport, Rc::clone(&state));

        block_on(loader.fetch_all(4, 2019));

        let state = state.borrow();
        assert_eq!(state.record.pregnancy_risk, None);
        assert_eq!(
            state.record.delivery_details.as_ref().unwrap().dod.as_deref(),
            Some("2019-05-01")
        );
        assert!(state.pending.is_empty());
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut state = DetailsState::new("b1");
        let old_tickets = state.begin_reload();
        let _ = state.begin_reload();

        let stale = old_tickets
            .into_iter()
            .find(|t| t.key == Subsection::AbortionDetails)
            .unwrap();
        let applied = state.complete(stale, Ok(json!({"abortionType": "MTP"})));

        assert!(!applied);
        assert_eq!(state.record.abortion_details, None);
        assert!(state.pending.contains(&Subsection::AbortionDetails));
    }

    #[test]
    fn test_reload_resets_record() {
        let mut state = DetailsState::new("b1");
        let tickets = state.begin_reload();
        let ticket = tickets
            .into_iter()
            .find(|t| t.key == Subsection::PregnancyDetails)
            .unwrap();
        state.complete(ticket, Ok(json!({"pregnancyStatus": 1})));
        assert_eq!(state.record.pregnancy_status(), Some(1));

        state.begin_reload();
        assert_eq!(state.record.pregnancy_status(), None);
        assert_eq!(state.record.anc_visits.len(), 4);
        assert_eq!(state.generation(), 2);
    }
}
