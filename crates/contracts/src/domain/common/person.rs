use crate::shared::FieldValue;
use serde::{Deserialize, Serialize};

/// Basic demographic card shown for the beneficiary and her husband.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub sex: Option<String>,
    pub dob: Option<String>,
    pub age: Option<FieldValue>,
    pub marital_status: Option<String>,
    pub spouse_name: Option<String>,
    pub has_aadhar_number: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonOtherInfoDto {
    pub husband_name: Option<String>,
    pub contact_phone_number: Option<String>,
    pub village: Option<String>,
    pub awc_name: Option<String>,
    pub ward_number: Option<String>,
    pub mother_name: Option<String>,
    pub religion: Option<String>,
    pub caste: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub age: Option<FieldValue>,
    pub gender: Option<String>,
    pub last_immunization_type: Option<String>,
    pub last_immunization_date: Option<String>,
}
