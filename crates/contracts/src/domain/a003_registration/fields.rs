use serde::{Deserialize, Serialize};

use crate::shared::validation::{
    compose_date_of_birth, validate_email, validate_password, validate_password_confirmation,
    validate_phone, validate_postcode_format, validate_required, validate_terms, FormErrors,
    PhoneCheck,
};

/// Fields every account type fills in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFields {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
    pub address: String,
    pub postcode: String,
    pub accept_terms: bool,
}

impl AccountFields {
    pub fn validate_into(&self, errors: &mut FormErrors) {
        errors.check("email", validate_email(&self.email));
        errors.check("password", validate_password(&self.password));
        errors.check(
            "confirmPassword",
            validate_password_confirmation(&self.password, &self.confirm_password),
        );
        errors.check("phoneNumber", validate_phone(&self.phone_number));
        errors.check("address", validate_required(&self.address, "Address"));
        errors.check("postcode", validate_postcode_format(&self.postcode));
        errors.check("acceptTerms", validate_terms(self.accept_terms));
    }

    /// Parsed phone number; only meaningful once validation passed
    pub fn phone(&self) -> Option<PhoneCheck> {
        validate_phone(&self.phone_number).ok()
    }
}

/// Three discrete selects; empty string means "not chosen"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateOfBirth {
    pub fn to_iso(&self) -> Result<String, String> {
        compose_date_of_birth(&self.day, &self.month, &self.year)
    }
}
