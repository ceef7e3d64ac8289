use serde::{Deserialize, Serialize};

use super::fields::AccountFields;
use super::form::RegistrationFields;
use super::payload::{RegistrationPayload, SecurityCompanyPayload};
use crate::shared::validation::{validate_postcode_format, validate_required, FormErrors};

/// Security company sign-up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityCompanyFields {
    pub company_name: String,
    /// Companies House number: 8 characters, digits or a 2-letter prefix
    pub company_registration_number: String,
    pub contact_name: String,
    /// SIA Approved Contractor Scheme reference, optional
    pub approved_contractor_number: String,
    pub services: Vec<String>,
    pub account: AccountFields,
}

fn validate_company_number(value: &str) -> Result<(), String> {
    let value = value.trim().to_ascii_uppercase();
    if value.is_empty() {
        return Err("Company registration number is required".into());
    }
    let valid = value.len() == 8
        && value.chars().all(|c| c.is_ascii_alphanumeric())
        && value.chars().skip(2).all(|c| c.is_ascii_digit());
    if !valid {
        return Err("Company registration number must be 8 characters, e.g. 01234567 or SC123456".into());
    }
    Ok(())
}

impl SecurityCompanyFields {
    /// Tick or untick one offered service; order of first selection is kept
    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service.to_string());
        }
    }
}

impl RegistrationFields for SecurityCompanyFields {
    fn account(&self) -> &AccountFields {
        &self.account
    }

    fn account_mut(&mut self) -> &mut AccountFields {
        &mut self.account
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("companyName", validate_required(&self.company_name, "Company name"));
        errors.check(
            "companyRegistrationNumber",
            validate_company_number(&self.company_registration_number),
        );
        errors.check("contactName", validate_required(&self.contact_name, "Contact name"));
        if self.services.is_empty() {
            errors.insert("services", "Choose at least one service");
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
        let acs = self.approved_contractor_number.trim();

        Ok(RegistrationPayload::SecurityCompany(SecurityCompanyPayload {
            company_name: self.company_name.trim().to_string(),
            company_registration_number: self.company_registration_number.trim().to_ascii_uppercase(),
            contact_name: self.contact_name.trim().to_string(),
            email: self.account.email.trim().to_string(),
            password: self.account.password.clone(),
            phone_number: phone.e164,
            address: self.account.address.trim().to_string(),
            postcode: validate_postcode_format(&self.account.postcode).unwrap_or_default(),
            approved_contractor_number: (!acs.is_empty()).then(|| acs.to_string()),
            services: self.services.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_number() {
        assert!(validate_company_number("01234567").is_ok());
        assert!(validate_company_number("sc123456").is_ok());
        assert!(validate_company_number("1234").is_err());
        assert!(validate_company_number("SC12345X").is_err());
        assert!(validate_company_number("").is_err());
    }

    #[test]
    fn test_services_required() {
        let fields = SecurityCompanyFields::default();
        let errors = fields.validate();
        assert!(errors.contains("services"));
        assert!(errors.contains("companyRegistrationNumber"));
    }

    #[test]
    fn test_toggle_service() {
        let mut fields = SecurityCompanyFields::default();
        fields.toggle_service("Event Security");
        fields.toggle_service("Manned Guarding");
        fields.toggle_service("Event Security");
        assert_eq!(fields.services, vec!["Manned Guarding".to_string()]);
    }

    #[test]
    fn test_payload_tag() {
        let fields = SecurityCompanyFields {
            company_name: "Shield Ltd".into(),
            company_registration_number: "sc123456".into(),
            contact_name: "Ola Green".into(),
            approved_contractor_number: String::new(),
            services: vec!["Event Security".into()],
            account: AccountFields {
                email: "ops@shield.co.uk".into(),
                password: "Abcdef1!".into(),
                confirm_password: "Abcdef1!".into(),
                phone_number: "02079460958".into(),
                address: "3 Dock Rd".into(),
                postcode: "ls1 4ap".into(),
                accept_terms: true,
            },
        };
        let payload = fields.to_payload().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["role"], "security_company");
        assert_eq!(json["companyRegistrationNumber"], "SC123456");
        assert_eq!(json["postcode"], "LS1 4AP");
        assert!(json.get("approvedContractorNumber").is_none());
    }
}
