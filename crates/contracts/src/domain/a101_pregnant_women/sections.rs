//! Flat subsections of the pregnant women detail page.
//!
//! Every field is optional: the server omits what was never recorded. Field
//! names follow the camelCase keys of the details endpoint.

use crate::domain::common::{ChildDto, PersonDto, PersonOtherInfoDto};
use crate::shared::FieldValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonDetailsPayload {
    pub person: Option<PersonDto>,
    pub husband: Option<PersonDto>,
    pub other: Option<PersonOtherInfoDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildrenPayload {
    pub children: Vec<ChildDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PregnancyDetails {
    pub date_of_lmp: Option<String>,
    pub weight_of_pw: Option<FieldValue>,
    pub date_of_registration: Option<String>,
    pub edd: Option<String>,
    pub twelve_weeks_pregnancy_registration: Option<FieldValue>,
    pub blood_group: Option<FieldValue>,
    /// Position on the pregnancy timeline (registered, ..., delivered).
    pub pregnancy_status: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PregnancyRisk {
    pub risk_pregnancy: Option<FieldValue>,
    pub referral_date: Option<String>,
    pub hrp_symptoms: Option<FieldValue>,
    pub illness_history: Option<FieldValue>,
    pub referred_out_facility_type: Option<FieldValue>,
    pub past_illness_details: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumablesDisbursed {
    pub ifa_tablets: Option<FieldValue>,
    pub thr_disbursed: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImmunizationCounselingDetails {
    pub tt_dose_one: Option<String>,
    pub tt_dose_two: Option<String>,
    pub tt_booster: Option<String>,
    pub birth_preparedness_visits_by_asha: Option<FieldValue>,
    pub birth_preparedness_visits_by_aww: Option<FieldValue>,
    pub counselling_on_maternal: Option<FieldValue>,
    pub counselling_on_ebf: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbortionDetails {
    pub abortion_date: Option<String>,
    pub abortion_type: Option<FieldValue>,
    pub abortion_days: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaternalDeathDetails {
    pub maternal_death_occurred: Option<FieldValue>,
    pub maternal_death_place: Option<FieldValue>,
    pub maternal_death_date: Option<String>,
    pub authorities_informed: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryDetails {
    pub dod: Option<String>,
    pub assistance_of_delivery: Option<FieldValue>,
    pub time_of_delivery: Option<String>,
    pub date_of_discharge: Option<String>,
    pub type_of_delivery: Option<FieldValue>,
    pub time_of_discharge: Option<String>,
    pub place_of_birth: Option<FieldValue>,
    pub delivery_complications: Option<FieldValue>,
    pub place_of_delivery: Option<FieldValue>,
    pub complication_details: Option<FieldValue>,
    pub hospital_type: Option<FieldValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload_leaves_missing_fields_empty() {
        let details: PregnancyDetails =
            serde_json::from_str(r#"{"dateOfLmp": "2019-01-02", "pregnancyStatus": 2}"#).unwrap();
        assert_eq!(details.date_of_lmp.as_deref(), Some("2019-01-02"));
        assert_eq!(details.pregnancy_status, Some(FieldValue::Number(2.0)));
        assert_eq!(details.edd, None);
    }

    #[test]
    fn test_serialization_lists_every_field() {
        let value = serde_json::to_value(ConsumablesDisbursed::default()).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["ifaTablets", "thrDisbursed"]);
    }
}
