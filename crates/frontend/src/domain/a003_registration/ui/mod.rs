//! Registration UI
//!
//! - view_model.rs: signals and submit command shared by every role
//! - fields.rs: controls bound to a form field (text, date of birth, account block)
//! - individual.rs / corporate.rs / security_company.rs: role forms
//! - page.rs: `/register/:role` route

mod corporate;
mod fields;
mod individual;
mod page;
mod security_company;
mod view_model;

pub use corporate::CorporateForm;
pub use individual::ClientRegistrationForm;
pub use page::RegisterPage;
pub use security_company::SecurityCompanyForm;
pub use view_model::RegistrationViewModel;
