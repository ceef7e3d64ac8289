use contracts::domain::a001_taxonomy::TaxonomyId;
use contracts::domain::a002_search::{SearchMode, SearchSelection, SearchSnapshot};
use contracts::shared::storage_keys::{SEARCH_MODE, SEARCH_TITLE, SEARCH_VALUES};

use crate::system::auth::storage;

/// Store the submitted search for the results page
pub fn save_snapshot(snapshot: &SearchSnapshot) {
    storage::set_json(SEARCH_VALUES, &snapshot.values);
    storage::set_item(SEARCH_MODE, snapshot.mode.as_str());
    storage::set_item(SEARCH_TITLE, &snapshot.title);
}

/// Last search of directory `id`, if the stored one belongs to it
pub fn load_snapshot(id: TaxonomyId) -> Option<SearchSnapshot> {
    let title = storage::get_item(SEARCH_TITLE)?;
    if title != id.title() {
        return None;
    }
    let values = storage::get_json::<SearchSelection>(SEARCH_VALUES)?;
    let mode = storage::get_item(SEARCH_MODE)
        .and_then(|m| SearchMode::parse(&m))
        .unwrap_or_default();
    Some(SearchSnapshot {
        values,
        mode,
        title,
    })
}
