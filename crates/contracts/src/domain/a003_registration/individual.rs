use serde::{Deserialize, Serialize};

use super::fields::{AccountFields, DateOfBirth};
use super::form::RegistrationFields;
use super::payload::{IndividualPayload, RegistrationPayload};
use crate::shared::validation::{validate_postcode_format, validate_required, FormErrors};

/// Individual professional / client sign-up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualFields {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateOfBirth,
    /// Optional 16-digit SIA licence
    pub sia_licence_number: String,
    pub account: AccountFields,
}

fn validate_sia_licence(value: &str) -> Result<(), String> {
    let digits: String = value.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    if digits.is_empty() {
        return Ok(());
    }
    if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("SIA licence number must have 16 digits".into());
    }
    Ok(())
}

impl RegistrationFields for IndividualFields {
    fn account(&self) -> &AccountFields {
        &self.account
    }

    fn account_mut(&mut self) -> &mut AccountFields {
        &mut self.account
    }

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("firstName", validate_required(&self.first_name, "First name"));
        errors.check("lastName", validate_required(&self.last_name, "Last name"));
        errors.check("dateOfBirth", self.date_of_birth.to_iso());
        errors.check("siaLicenceNumber", validate_sia_licence(&self.sia_licence_number));
        self.account.validate_into(&mut errors);
        errors
    }

    fn to_payload(&self) -> Result<RegistrationPayload, FormErrors> {
        self.validate().into_result()?;
        let date_of_birth = self
            .date_of_birth
            .to_iso()
            .map_err(|e| FormErrors::single("dateOfBirth", e))?;
        let phone = self
            .account
            .phone()
            .ok_or_else(|| FormErrors::single("phoneNumber", "Enter a valid phone number"))?;
        let sia = self.sia_licence_number.trim();

        Ok(RegistrationPayload::Individual(IndividualPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.account.email.trim().to_string(),
            password: self.account.password.clone(),
            phone_number: phone.e164,
            date_of_birth,
            address: self.account.address.trim().to_string(),
            postcode: validate_postcode_format(&self.account.postcode).unwrap_or_default(),
            sia_licence_number: (!sia.is_empty()).then(|| sia.replace([' ', '-'], "")),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_registration::RegistrationForm;
    use crate::domain::common::ClientError;
    use crate::shared::postcode::PostcodeStatus;

    fn complete() -> RegistrationForm<IndividualFields> {
        let mut form = RegistrationForm::<IndividualFields>::new();
        form.update("firstName", |f| f.first_name = "Sam".into());
        form.update("lastName", |f| f.last_name = "Reed".into());
        form.update("dateOfBirth", |f| {
            f.date_of_birth = DateOfBirth {
                day: "5".into(),
                month: "3".into(),
                year: "1990".into(),
            }
        });
        form.update("email", |f| f.account.email = "sam@example.com".into());
        form.update("password", |f| f.account.password = "Abcdef1!".into());
        form.update("confirmPassword", |f| f.account.confirm_password = "Abcdef1!".into());
        form.update("phoneNumber", |f| f.account.phone_number = "020 7946 0958".into());
        form.update("address", |f| f.account.address = "1 High Street, London".into());
        form.update("postcode", |f| f.account.postcode = "sw1a 1aa".into());
        form.update("acceptTerms", |f| f.account.accept_terms = true);
        form
    }

    #[test]
    fn test_new_form_is_invalid_but_quiet() {
        let form = RegistrationForm::<IndividualFields>::new();
        assert!(!form.is_form_valid());
        assert_eq!(form.visible_error("email"), None);
    }

    #[test]
    fn test_touched_field_shows_error() {
        let mut form = RegistrationForm::<IndividualFields>::new();
        form.update("email", |f| f.account.email = "nope".into());
        assert_eq!(form.visible_error("email"), Some("Enter a valid email address"));
        assert_eq!(form.visible_error("password"), None);
    }

    #[test]
    fn test_complete_form_submits_payload() {
        let mut form = complete();
        assert!(form.is_form_valid(), "{:?}", form.form_errors());

        let postcode = form.begin_submit().unwrap();
        assert_eq!(postcode, "SW1A 1AA");
        assert!(form.is_submitting());
        assert!(!form.can_submit());

        let payload = form.finish_submit(Ok(PostcodeStatus::Valid)).unwrap();
        assert!(!form.is_submitting());
        let RegistrationPayload::Individual(p) = payload else {
            panic!("wrong payload variant");
        };
        assert_eq!(p.date_of_birth, "1990-03-05");
        assert_eq!(p.phone_number, "+442079460958");
        assert_eq!(p.postcode, "SW1A 1AA");
        assert_eq!(p.sia_licence_number, None);
    }

    #[test]
    fn test_payload_json_carries_role_tag() {
        let mut form = complete();
        form.begin_submit().unwrap();
        let payload = form.finish_submit(Ok(PostcodeStatus::Valid)).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["role"], "individual");
        assert_eq!(json["firstName"], "Sam");
        assert!(json.get("siaLicenceNumber").is_none());
    }

    #[test]
    fn test_remote_invalid_postcode_blocks_submission() {
        let mut form = complete();
        form.begin_submit().unwrap();
        let err = form.finish_submit(Ok(PostcodeStatus::Invalid)).unwrap_err();
        assert!(matches!(err, ClientError::InvalidPostcode(_)));
        assert_eq!(form.visible_error("postcode"), Some("Postcode not found"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_missing_date_part_blocks_submission() {
        let mut form = complete();
        form.update("dateOfBirth", |f| f.date_of_birth.month.clear());
        let err = form.begin_submit().unwrap_err();
        let ClientError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.contains("dateOfBirth"));
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = complete();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit().unwrap_err(), ClientError::InFlight);
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let mut form = complete();
        form.update("acceptTerms", |f| f.account.accept_terms = false);
        assert!(form.form_errors().contains("acceptTerms"));
    }

    #[test]
    fn test_sia_licence_format() {
        assert!(validate_sia_licence("").is_ok());
        assert!(validate_sia_licence("1234-5678-9012-3456").is_ok());
        assert!(validate_sia_licence("1234").is_err());
    }
}
