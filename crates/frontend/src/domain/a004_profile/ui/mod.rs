//! Profile page UI
//!
//! - model.rs: section save and user refresh calls
//! - view_model.rs: `SectionViewModel<T>` around one section editor
//! - frame.rs: shared header with edit / save / cancel controls
//! - sections/: one editor per profile section
//! - page.rs: `/profile` route

mod frame;
mod model;
mod page;
mod sections;
mod view_model;

pub use page::ProfilePage;
pub use view_model::SectionViewModel;
