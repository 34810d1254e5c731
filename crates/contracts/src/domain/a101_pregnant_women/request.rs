use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of the `section` parameter for the pregnancy subsections.
pub const PREGNANT_WOMEN_SECTION: &str = "pregnant_women";

/// Independently fetched slice of a beneficiary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsection {
    PersonDetails,
    ChildDetails,
    PregnancyDetails,
    PregnancyRisk,
    AntenatalCareDetails,
    ConsumablesDisbursed,
    ImmunizationCounselingDetails,
    AbortionDetails,
    MaternalDeathDetails,
    DeliveryDetails,
    PostnatalCareDetails,
}

impl Subsection {
    /// Every subsection of the pregnant women detail page, in display order.
    pub const ALL: [Subsection; 11] = [
        Subsection::PersonDetails,
        Subsection::ChildDetails,
        Subsection::PregnancyDetails,
        Subsection::PregnancyRisk,
        Subsection::AntenatalCareDetails,
        Subsection::ConsumablesDisbursed,
        Subsection::ImmunizationCounselingDetails,
        Subsection::AbortionDetails,
        Subsection::MaternalDeathDetails,
        Subsection::DeliveryDetails,
        Subsection::PostnatalCareDetails,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subsection::PersonDetails => "person_details",
            Subsection::ChildDetails => "child_details",
            Subsection::PregnancyDetails => "pregnancy_details",
            Subsection::PregnancyRisk => "pregnancy_risk",
            Subsection::AntenatalCareDetails => "antenatal_care_details",
            Subsection::ConsumablesDisbursed => "consumables_disbursed",
            Subsection::ImmunizationCounselingDetails => "immunization_counseling_details",
            Subsection::AbortionDetails => "abortion_details",
            Subsection::MaternalDeathDetails => "maternal_death_details",
            Subsection::DeliveryDetails => "delivery_details",
            Subsection::PostnatalCareDetails => "postnatal_care_details",
        }
    }

    /// Person and child cards are shared between beneficiary types and are
    /// requested without a `section`.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Subsection::PersonDetails | Subsection::ChildDetails => None,
            _ => Some(PREGNANT_WOMEN_SECTION),
        }
    }
}

impl fmt::Display for Subsection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form parameters posted to the unified beneficiary details endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub subsection: Subsection,
    pub beneficiary_id: String,
    pub selected_month: u32,
    pub selected_year: i32,
}

impl DetailsRequest {
    pub fn new(subsection: Subsection, beneficiary_id: &str, month: u32, year: i32) -> Self {
        Self {
            section: subsection.section().map(str::to_string),
            subsection,
            beneficiary_id: beneficiary_id.to_string(),
            selected_month: month,
            selected_year: year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsection_names_match_serde() {
        for subsection in Subsection::ALL {
            let json = serde_json::to_string(&subsection).unwrap();
            assert_eq!(json, format!("\"{}\"", subsection.as_str()));
        }
    }

    #[test]
    fn test_section_only_for_pregnancy_subsections() {
        let person = DetailsRequest::new(Subsection::PersonDetails, "b1", 5, 2019);
        assert_eq!(person.section, None);

        let risk = DetailsRequest::new(Subsection::PregnancyRisk, "b1", 5, 2019);
        assert_eq!(risk.section.as_deref(), Some("pregnant_women"));
        assert_eq!(risk.beneficiary_id, "b1");
    }
}
