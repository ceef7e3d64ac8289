//! Search composer UI
//!
//! - model.rs: local-storage warm-start snapshot
//! - view_model.rs: signals and commands around `SearchComposer`
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use model::load_snapshot;
pub use view::SearchComponent;
pub use view_model::SearchComposerViewModel;
