//! Multi-role registration forms.
//!
//! - fields.rs: account fields every role shares
//! - form.rs: validation/submission state around any role's fields
//! - individual.rs / corporate.rs / security_company.rs: role fields
//! - payload.rs: role-specific submission payloads

pub mod corporate;
pub mod fields;
pub mod form;
pub mod individual;
pub mod payload;
pub mod security_company;

pub use corporate::CorporateFields;
pub use fields::{AccountFields, DateOfBirth};
pub use form::{RegistrationFields, RegistrationForm};
pub use individual::IndividualFields;
pub use payload::{CorporatePayload, IndividualPayload, RegistrationPayload, SecurityCompanyPayload};
pub use security_company::SecurityCompanyFields;
