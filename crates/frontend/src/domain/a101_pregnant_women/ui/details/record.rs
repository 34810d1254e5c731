//! Aggregate record of one pregnant woman.
//!
//! Each subsection owns exactly one field of [`BeneficiaryRecord`]; applying a
//! subsection payload never touches another subsection.

use super::visits::{merge_visits, pad_visits, VisitSlot};
use contracts::domain::a101_pregnant_women::{
    AbortionDetails, AncVisitDto, ChildrenPayload, ConsumablesDisbursed, DeliveryDetails,
    ImmunizationCounselingDetails, MaternalDeathDetails, PersonDetailsPayload, PncVisitDto,
    PregnancyDetails, PregnancyRisk, Subsection, VisitsPayload,
};
use contracts::domain::common::{ChildDto, PersonDto, PersonOtherInfoDto};
use contracts::shared::FieldValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Children are laid out four to a row.
pub const CHILDREN_PER_ROW: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct BeneficiaryRecord {
    pub id: String,

    pub person: Option<PersonDto>,
    pub husband: Option<PersonDto>,
    pub other: Option<PersonOtherInfoDto>,
    /// `None` entries are empty cards completing the last row.
    pub children: Vec<Option<ChildDto>>,

    pub pregnancy_details: Option<PregnancyDetails>,
    pub pregnancy_risk: Option<PregnancyRisk>,
    pub consumables_disbursed: Option<ConsumablesDisbursed>,
    pub immunization_counseling: Option<ImmunizationCounselingDetails>,
    pub abortion_details: Option<AbortionDetails>,
    pub maternal_death_details: Option<MaternalDeathDetails>,
    pub delivery_details: Option<DeliveryDetails>,

    pub anc_visits: Vec<VisitSlot<AncVisitDto>>,
    pub pnc_visits: Vec<VisitSlot<PncVisitDto>>,
}

impl BeneficiaryRecord {
    pub fn new(id: impl Into<String>) -> Self {
        let mut anc_visits = Vec::new();
        pad_visits(&mut anc_visits);
        let mut pnc_visits = Vec::new();
        pad_visits(&mut pnc_visits);

        Self {
            id: id.into(),
            person: None,
            husband: None,
            other: None,
            children: Vec::new(),
            pregnancy_details: None,
            pregnancy_risk: None,
            consumables_disbursed: None,
            immunization_counseling: None,
            abortion_details: None,
            maternal_death_details: None,
            delivery_details: None,
            anc_visits,
            pnc_visits,
        }
    }

    /// Merge one subsection payload into the record.
    ///
    /// Flat subsections are assigned field by field. Returns the payload keys
    /// that were skipped, either unknown to the subsection or of a type it
    /// cannot hold. A payload that does not decode leaves the record untouched.
    pub fn apply_update(
        &mut self,
        subsection: Subsection,
        payload: &Value,
    ) -> Result<Vec<String>, String> {
        match subsection {
            Subsection::PersonDetails => {
                let data: PersonDetailsPayload = decode(subsection, payload)?;
                self.person = data.person;
                self.husband = data.husband;
                self.other = data.other;
                Ok(Vec::new())
            }
            Subsection::ChildDetails => {
                let data: ChildrenPayload = decode(subsection, payload)?;
                merge_children(&mut self.children, data.children);
                Ok(Vec::new())
            }
            Subsection::AntenatalCareDetails => {
                let data: VisitsPayload<AncVisitDto> = decode(subsection, payload)?;
                merge_visits(&mut self.anc_visits, data.visits);
                Ok(Vec::new())
            }
            Subsection::PostnatalCareDetails => {
                let data: VisitsPayload<PncVisitDto> = decode(subsection, payload)?;
                merge_visits(&mut self.pnc_visits, data.visits);
                Ok(Vec::new())
            }
            Subsection::PregnancyDetails => {
                assign(&mut self.pregnancy_details, subsection, payload)
            }
            Subsection::PregnancyRisk => assign(&mut self.pregnancy_risk, subsection, payload),
            Subsection::ConsumablesDisbursed => {
                assign(&mut self.consumables_disbursed, subsection, payload)
            }
            Subsection::ImmunizationCounselingDetails => {
                assign(&mut self.immunization_counseling, subsection, payload)
            }
            Subsection::AbortionDetails => assign(&mut self.abortion_details, subsection, payload),
            Subsection::MaternalDeathDetails => {
                assign(&mut self.maternal_death_details, subsection, payload)
            }
            Subsection::DeliveryDetails => assign(&mut self.delivery_details, subsection, payload),
        }
    }

    pub fn pregnancy_status(&self) -> Option<i64> {
        self.pregnancy_details
            .as_ref()
            .and_then(|d| d.pregnancy_status.as_ref())
            .and_then(FieldValue::as_i64)
    }

    /// CSS class of a step on the pregnancy status timeline.
    pub fn pregnancy_status_class(&self, status: i64) -> &'static str {
        status_class(status, self.pregnancy_status())
    }
}

/// `previous-status` before the current status, `current-status` on it.
pub fn status_class(candidate: i64, current: Option<i64>) -> &'static str {
    match current {
        Some(current) if candidate < current => "previous-status",
        Some(current) if candidate == current => "current-status",
        _ => "",
    }
}

/// Replace the empty cards with `incoming` and complete the last row.
pub fn merge_children(slots: &mut Vec<Option<ChildDto>>, incoming: Vec<ChildDto>) {
    slots.retain(Option::is_some);
    slots.extend(incoming.into_iter().map(Some));
    while slots.len() % CHILDREN_PER_ROW > 0 {
        slots.push(None);
    }
}

fn decode<T: DeserializeOwned>(subsection: Subsection, payload: &Value) -> Result<T, String> {
    T::deserialize(payload).map_err(|e| format!("Invalid {} payload: {}", subsection, e))
}

fn assign<T>(
    slot: &mut Option<T>,
    subsection: Subsection,
    payload: &Value,
) -> Result<Vec<String>, String>
where
    T: DeserializeOwned + Serialize + Default,
{
    let Value::Object(incoming) = payload else {
        return Err(format!("Invalid {} payload: expected an object", subsection));
    };
    let mut fields = match serde_json::to_value(T::default()) {
        Ok(Value::Object(map)) => map,
        _ => return Err(format!("{} is not a record type", subsection)),
    };

    // Fields are taken one at a time so a single mistyped value drops only itself.
    let mut ignored = Vec::new();
    for (key, value) in incoming {
        let Some(previous) = fields.insert(key.clone(), value.clone()) else {
            fields.remove(key);
            ignored.push(key.clone());
            continue;
        };
        if T::deserialize(&Value::Object(fields.clone())).is_err() {
            fields.insert(key.clone(), previous);
            ignored.push(key.clone());
        }
    }

    let section = decode(subsection, &Value::Object(fields))?;
    *slot = Some(section);
    Ok(ignored)
}
