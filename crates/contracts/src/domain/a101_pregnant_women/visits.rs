use crate::shared::FieldValue;
use serde::{Deserialize, Serialize};

/// `{ "visits": [...] }` body of the antenatal and postnatal subsections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitsPayload<V> {
    #[serde(default = "Vec::new")]
    pub visits: Vec<V>,
}

/// Antenatal check-up. The default value is the empty placeholder slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AncVisitDto {
    pub anc_date: Option<String>,
    pub anc_location: Option<FieldValue>,
    pub pw_weight: Option<FieldValue>,
    pub blood_pressure: Option<FieldValue>,
    pub hb: Option<FieldValue>,
    pub abdominal_examination: Option<FieldValue>,
    pub abnormalities_detected: Option<FieldValue>,
}

/// Postnatal visit. The default value is the empty placeholder slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PncVisitDto {
    pub pnc_date: Option<String>,
    pub postpartum_heamorrhage: Option<FieldValue>,
    pub fever: Option<FieldValue>,
    pub convulsions: Option<FieldValue>,
    pub abdominal_pain: Option<FieldValue>,
    pub painful_urination: Option<FieldValue>,
    pub congested_breasts: Option<FieldValue>,
    pub painful_nipples: Option<FieldValue>,
    pub other_breasts_issues: Option<FieldValue>,
    pub managing_breast_problems: Option<FieldValue>,
    pub increasing_food_intake: Option<FieldValue>,
    pub possible_maternal_complications: Option<FieldValue>,
    pub beneficiary_started_eating: Option<FieldValue>,
}
