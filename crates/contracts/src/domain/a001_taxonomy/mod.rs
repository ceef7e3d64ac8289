pub mod aggregate;
pub mod selector;

pub use aggregate::{Category, Taxonomy, TaxonomyId};
pub use selector::{DropdownState, RoleChoice};
