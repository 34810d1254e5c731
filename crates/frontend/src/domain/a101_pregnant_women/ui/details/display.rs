//! Label/value rows of the detail cards.
//!
//! Sections that have not arrived yet render every label with "N/A".

use contracts::domain::a101_pregnant_women::{
    AbortionDetails, ConsumablesDisbursed, DeliveryDetails, ImmunizationCounselingDetails,
    MaternalDeathDetails, PregnancyDetails, PregnancyRisk,
};
use contracts::domain::common::{ChildDto, PersonDto, PersonOtherInfoDto};

pub type FieldRow = (&'static str, String);

pub const NOT_AVAILABLE: &str = "N/A";

/// Steps of the pregnancy status timeline.
pub const PREGNANCY_STATUS_STEPS: [(i64, &str); 4] = [
    (1, "Registered"),
    (2, "Antenatal Care"),
    (3, "Delivery"),
    (4, "Postnatal Care"),
];

fn text<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn person_rows(person: Option<&PersonDto>) -> Vec<FieldRow> {
    let p = person.cloned().unwrap_or_default();
    vec![
        ("Name", text(&p.name)),
        ("Sex", text(&p.sex)),
        ("Date of Birth", text(&p.dob)),
        ("Age", text(&p.age)),
        ("Marital Status", text(&p.marital_status)),
        ("Spouse Name", text(&p.spouse_name)),
        ("Has Aadhar Number", text(&p.has_aadhar_number)),
    ]
}

pub fn other_info_rows(other: Option<&PersonOtherInfoDto>) -> Vec<FieldRow> {
    let o = other.cloned().unwrap_or_default();
    vec![
        ("Husband Name", text(&o.husband_name)),
        ("Contact Phone Number", text(&o.contact_phone_number)),
        ("Village", text(&o.village)),
        ("AWC Name", text(&o.awc_name)),
        ("Ward Number", text(&o.ward_number)),
        ("Mother Name", text(&o.mother_name)),
        ("Religion", text(&o.religion)),
        ("Caste", text(&o.caste)),
    ]
}

pub fn child_rows(child: &ChildDto) -> Vec<FieldRow> {
    vec![
        ("Name", text(&child.name)),
        ("Age", text(&child.age)),
        ("Gender", text(&child.gender)),
        ("Last Immunization", text(&child.last_immunization_type)),
        ("Last Immunization Date", text(&child.last_immunization_date)),
    ]
}

pub fn pregnancy_details_rows(details: Option<&PregnancyDetails>) -> Vec<FieldRow> {
    let d = details.cloned().unwrap_or_default();
    vec![
        ("Date of LMP", text(&d.date_of_lmp)),
        ("Weight of PW", text(&d.weight_of_pw)),
        ("Date of Registration", text(&d.date_of_registration)),
        ("EDD", text(&d.edd)),
        (
            "Registered within 12 weeks",
            text(&d.twelve_weeks_pregnancy_registration),
        ),
        ("Blood Group", text(&d.blood_group)),
    ]
}

pub fn pregnancy_risk_rows(risk: Option<&PregnancyRisk>) -> Vec<FieldRow> {
    let r = risk.cloned().unwrap_or_default();
    vec![
        ("Risk Pregnancy", text(&r.risk_pregnancy)),
        ("Referral Date", text(&r.referral_date)),
        ("HRP Symptoms", text(&r.hrp_symptoms)),
        ("Illness History", text(&r.illness_history)),
        ("Referred Out Facility Type", text(&r.referred_out_facility_type)),
        ("Past Illness Details", text(&r.past_illness_details)),
    ]
}

pub fn consumables_rows(consumables: Option<&ConsumablesDisbursed>) -> Vec<FieldRow> {
    let c = consumables.cloned().unwrap_or_default();
    vec![
        ("IFA Tablets", text(&c.ifa_tablets)),
        ("THR Disbursed", text(&c.thr_disbursed)),
    ]
}

pub fn immunization_rows(details: Option<&ImmunizationCounselingDetails>) -> Vec<FieldRow> {
    let d = details.cloned().unwrap_or_default();
    vec![
        ("TT Dose One", text(&d.tt_dose_one)),
        ("TT Dose Two", text(&d.tt_dose_two)),
        ("TT Booster", text(&d.tt_booster)),
        (
            "Birth Preparedness Visits by ASHA",
            text(&d.birth_preparedness_visits_by_asha),
        ),
        (
            "Birth Preparedness Visits by AWW",
            text(&d.birth_preparedness_visits_by_aww),
        ),
        ("Counselling on Maternal Care", text(&d.counselling_on_maternal)),
        ("Counselling on EBF", text(&d.counselling_on_ebf)),
    ]
}

pub fn abortion_rows(details: Option<&AbortionDetails>) -> Vec<FieldRow> {
    let d = details.cloned().unwrap_or_default();
    vec![
        ("Abortion Date", text(&d.abortion_date)),
        ("Abortion Type", text(&d.abortion_type)),
        ("Abortion Days", text(&d.abortion_days)),
    ]
}

pub fn maternal_death_rows(details: Option<&MaternalDeathDetails>) -> Vec<FieldRow> {
    let d = details.cloned().unwrap_or_default();
    vec![
        ("Maternal Death Occurred", text(&d.maternal_death_occurred)),
        ("Place of Death", text(&d.maternal_death_place)),
        ("Date of Death", text(&d.maternal_death_date)),
        ("Authorities Informed", text(&d.authorities_informed)),
    ]
}

pub fn delivery_rows(details: Option<&DeliveryDetails>) -> Vec<FieldRow> {
    let d = details.cloned().unwrap_or_default();
    vec![
        ("Date of Delivery", text(&d.dod)),
        ("Assistance of Delivery", text(&d.assistance_of_delivery)),
        ("Time of Delivery", text(&d.time_of_delivery)),
        ("Date of Discharge", text(&d.date_of_discharge)),
        ("Type of Delivery", text(&d.type_of_delivery)),
        ("Time of Discharge", text(&d.time_of_discharge)),
        ("Place of Birth", text(&d.place_of_birth)),
        ("Delivery Complications", text(&d.delivery_complications)),
        ("Place of Delivery", text(&d.place_of_delivery)),
        ("Complication Details", text(&d.complication_details)),
        ("Hospital Type", text(&d.hospital_type)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::FieldValue;

    #[test]
    fn test_missing_section_renders_not_available() {
        let rows = abortion_rows(None);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|(_, value)| value == NOT_AVAILABLE));
    }

    #[test]
    fn test_present_values_render_as_text() {
        let consumables = ConsumablesDisbursed {
            ifa_tablets: Some(FieldValue::Number(30.0)),
            thr_disbursed: None,
        };
        let rows = consumables_rows(Some(&consumables));
        assert_eq!(rows[0], ("IFA Tablets", "30".to_string()));
        assert_eq!(rows[1], ("THR Disbursed", NOT_AVAILABLE.to_string()));
    }
}
