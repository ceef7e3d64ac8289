use serde::{Deserialize, Serialize};

use super::fields::AccountFields;
use super::form::RegistrationFields;
use super::payload::{CorporatePayload, RegistrationPayload};
use crate::shared::validation::{validate_postcode_format, validate_required, FormErrors};

pub const INDUSTRIES: &[&str] = &[
    "Hospitality",
    "Retail",
    "Construction",
    "Events",
    "Healthcare",
    "Education",
    "Logistics",
    "Other",
];

/// Business hiring security services
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateFields {
    pub company_name: String,
    pub contact_name: String,
    pub job_title: String,
    pub industry: String,
    pub account: AccountFields,
}

impl RegistrationFields for CorporateFields {
    fn account(&self) -> &AccountFields {
        &self.account
    }

    fn account_mut(&mut self) -> &mut AccountFields {
        &mut self.account
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("companyName", validate_required(&self.company_name, "Company name"));
        errors.check("contactName", validate_required(&self.contact_name, "Contact name"));
        errors.check("jobTitle", validate_required(&self.job_title, "Job title"));
        if !INDUSTRIES.contains(&self.industry.as_str()) {
            errors.insert("industry", "Choose an industry");
        }
        self.account.validate_into(&mut errors);
        errors
    }

    fn to_payload(&self) -> Result<RegistrationPayload, FormErrors> {
        self.validate().into_result()?;
        let phone = self
            .account
            .phone()
            .ok_or_else(|| FormErrors::single("phoneNumber", "Enter a valid phone number"))?;

        Ok(RegistrationPayload::CorporateClient(CorporatePayload {
            company_name: self.company_name.trim().to_string(),
            contact_name: self.contact_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            industry: self.industry.clone(),
            email: self.account.email.trim().to_string(),
            password: self.account.password.clone(),
            phone_number: phone.e164,
            address: self.account.address.trim().to_string(),
            postcode: validate_postcode_format(&self.account.postcode).unwrap_or_default(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_registration::RegistrationForm;
    use crate::shared::postcode::PostcodeStatus;

    #[test]
    fn test_corporate_payload() {
        let mut form = RegistrationForm::<CorporateFields>::new();
        form.update("companyName", |f| f.company_name = " Acme Bars Ltd ".into());
        form.update("contactName", |f| f.contact_name = "Jo Park".into());
        form.update("jobTitle", |f| f.job_title = "Operations Manager".into());
        form.update("industry", |f| f.industry = "Hospitality".into());
        form.update("email", |f| f.account.email = "jo@acme.co.uk".into());
        form.update("password", |f| f.account.password = "Secur3_pass".into());
        form.update("confirmPassword", |f| f.account.confirm_password = "Secur3_pass".into());
        form.update("phoneNumber", |f| f.account.phone_number = "+44 20 7946 0958".into());
        form.update("address", |f| f.account.address = "2 Quay St".into());
        form.update("postcode", |f| f.account.postcode = "M1 1AE".into());
        form.update("acceptTerms", |f| f.account.accept_terms = true);
        assert!(form.is_form_valid(), "{:?}", form.form_errors());

        form.begin_submit().unwrap();
        let payload = form.finish_submit(Ok(PostcodeStatus::Valid)).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["role"], "corporate_client");
        assert_eq!(json["companyName"], "Acme Bars Ltd");
        assert_eq!(json["industry"], "Hospitality");
        assert_eq!(payload.email(), "jo@acme.co.uk");
    }

    #[test]
    fn test_unknown_industry_rejected() {
        let fields = CorporateFields {
            industry: "Mining".into(),
            ..Default::default()
        };
        assert!(fields.validate().contains("industry"));
    }
}
