pub mod composer;
pub mod options;
pub mod query;
pub mod selection;

pub use composer::{ModeToggle, PendingSearch, SearchComposer, SearchMode, SearchNavigation, SearchSnapshot};
pub use options::{DISTANCE_OPTIONS, EXPERIENCE_OPTIONS};
pub use selection::{SearchSelection, SelectionError};
