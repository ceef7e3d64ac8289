use serde::{Deserialize, Serialize};

/// Body handed to the caller's submit callback; tagged with the account role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RegistrationPayload {
    Individual(IndividualPayload),
    CorporateClient(CorporatePayload),
    SecurityCompany(SecurityCompanyPayload),
}

impl RegistrationPayload {
    pub fn email(&self) -> &str {
        match self {
            RegistrationPayload::Individual(p) => &p.email,
            RegistrationPayload::CorporateClient(p) => &p.email,
            RegistrationPayload::SecurityCompany(p) => &p.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub address: String,
    pub postcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sia_licence_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporatePayload {
    pub company_name: String,
    pub contact_name: String,
    pub job_title: String,
    pub industry: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub address: String,
    pub postcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityCompanyPayload {
    pub company_name: String,
    pub company_registration_number: String,
    pub contact_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub address: String,
    pub postcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_contractor_number: Option<String>,
    pub services: Vec<String>,
}
