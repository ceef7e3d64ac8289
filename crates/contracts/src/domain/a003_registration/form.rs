use std::collections::BTreeSet;

use super::fields::AccountFields;
use super::payload::RegistrationPayload;
use crate::domain::common::{ClientError, ClientResult};
use crate::shared::postcode::PostcodeStatus;
use crate::shared::validation::{validate_postcode_format, FormErrors};

/// Field set of one account type
pub trait RegistrationFields: Clone + Default {
    fn account(&self) -> &AccountFields;

    fn account_mut(&mut self) -> &mut AccountFields;

    /// Full rule set: role fields plus the shared account fields
    fn validate(&self) -> FormErrors;

    /// Build the payload; called only when `validate` returned no errors
    fn to_payload(&self) -> Result<RegistrationPayload, FormErrors>;
}

/// Field state, error map and submission flag of a registration form.
///
/// Errors are recomputed on every change. The map always holds every
/// failing rule; [`RegistrationForm::visible_error`] hides the ones for
/// fields the user has not reached yet.
#[derive(Debug, Clone)]
pub struct RegistrationForm<F: RegistrationFields> {
    fields: F,
    form_errors: FormErrors,
    touched: BTreeSet<String>,
    submit_attempted: bool,
    is_submitting: bool,
}

impl<F: RegistrationFields> RegistrationForm<F> {
    pub fn new() -> Self {
        let fields = F::default();
        let form_errors = fields.validate();
        Self {
            fields,
            form_errors,
            touched: BTreeSet::new(),
            submit_attempted: false,
            is_submitting: false,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }

    pub fn is_form_valid(&self) -> bool {
        self.form_errors.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Submit button state
    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.is_submitting
    }

    /// Change one field and re-run validation
    pub fn update(&mut self, field: &str, change: impl FnOnce(&mut F)) {
        change(&mut self.fields);
        self.touched.insert(field.to_string());
        self.form_errors = self.fields.validate();
    }

    /// Field lost focus; its error becomes visible
    pub fn touch(&mut self, field: &str) {
        self.touched.insert(field.to_string());
    }

    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if self.submit_attempted || self.touched.contains(field) {
            self.form_errors.get(field)
        } else {
            None
        }
    }

    /// Local validation; on success the form is marked submitting and the
    /// normalised postcode to check remotely is returned.
    pub fn begin_submit(&mut self) -> ClientResult<String> {
        self.submit_attempted = true;
        if self.is_submitting {
            return Err(ClientError::InFlight);
        }
        self.form_errors = self.fields.validate();
        if !self.form_errors.is_empty() {
            return Err(ClientError::Validation(self.form_errors.clone()));
        }
        let postcode = validate_postcode_format(&self.fields.account().postcode)
            .map_err(|_| ClientError::InvalidPostcode(self.fields.account().postcode.clone()))?;
        self.is_submitting = true;
        Ok(postcode)
    }

    /// Complete with the remote postcode verdict and build the payload
    pub fn finish_submit(&mut self, outcome: ClientResult<PostcodeStatus>) -> ClientResult<RegistrationPayload> {
        self.is_submitting = false;
        let postcode = self.fields.account().postcode.clone();
        match outcome? {
            PostcodeStatus::Invalid => {
                let mut errors = self.form_errors.clone();
                errors.insert("postcode", "Postcode not found");
                self.form_errors = errors;
                Err(ClientError::InvalidPostcode(postcode))
            }
            PostcodeStatus::Valid => self.fields.to_payload().map_err(ClientError::Validation),
        }
    }

    /// Re-enable the form after the caller's submit callback failed
    pub fn submission_failed(&mut self) {
        self.is_submitting = false;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<F: RegistrationFields> Default for RegistrationForm<F> {
    fn default() -> Self {
        Self::new()
    }
}
