use contracts::domain::a001_taxonomy::TaxonomyId;
use contracts::domain::a002_search::query::parse_query;
use contracts::domain::a002_search::{SearchMode, SearchSelection, SearchSnapshot, DISTANCE_OPTIONS, EXPERIENCE_OPTIONS};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::super::composer::{load_snapshot, SearchComponent};
use crate::shared::components::PageHeader;

fn snapshot_for(id: TaxonomyId, search: &str) -> SearchSnapshot {
    merge_snapshot(id, parse_query(id, search), load_snapshot(id))
}

/// Selection for a results page. A URL naming a category and a postcode
/// wins and takes only the mode from storage; a bare directory URL resumes
/// the stored search.
fn merge_snapshot(id: TaxonomyId, values: SearchSelection, stored: Option<SearchSnapshot>) -> SearchSnapshot {
    let url_is_complete = !values.looking_for.is_empty() && !values.postcode.is_empty();
    let mode = match stored {
        Some(snapshot) if !url_is_complete => return snapshot,
        Some(ref s) if s.values.postcode == values.postcode => s.mode,
        _ if !values.distance.is_empty() || !values.experience.is_empty() => SearchMode::Advanced,
        _ => SearchMode::Basic,
    };
    SearchSnapshot {
        values,
        mode,
        title: id.title().to_string(),
    }
}

fn label_of(table: &[(&str, &str)], value: &str) -> String {
    table
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Human-readable criteria of the current search
fn criteria(values: &SearchSelection) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if !values.looking_for.is_empty() {
        rows.push(("Looking for", values.looking_for.clone()));
    }
    if !values.sub_category.is_empty() {
        rows.push(("Role", values.sub_category.replace(',', ", ")));
    }
    if !values.postcode.is_empty() {
        rows.push(("Near", values.postcode.clone()));
    }
    if !values.distance.is_empty() {
        rows.push(("Distance", label_of(DISTANCE_OPTIONS, &values.distance)));
    }
    if !values.experience.is_empty() {
        rows.push(("Experience", label_of(EXPERIENCE_OPTIONS, &values.experience)));
    }
    rows
}

#[component]
pub fn SearchResultsPage(taxonomy_id: TaxonomyId) -> impl IntoView {
    let location = use_location();

    view! {
        <div class="page page--results">
            <PageHeader title=taxonomy_id.title() subtitle="Refine your search" />
            {move || {
                let snapshot = snapshot_for(taxonomy_id, &location.search.get());
                let rows = criteria(&snapshot.values);
                view! {
                    <SearchComponent
                        taxonomy_id=taxonomy_id
                        hide_experience=!taxonomy_id.has_experience_filter()
                        initial=Some(snapshot)
                    />
                    <dl class="search-criteria">
                        {rows
                            .into_iter()
                            .map(|(name, value)| view! {
                                <dt>{name}</dt>
                                <dd>{value}</dd>
                            })
                            .collect_view()}
                    </dl>
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> SearchSnapshot {
        SearchSnapshot {
            values: SearchSelection {
                looking_for: "Door Supervision".into(),
                sub_category: "Close Protection".into(),
                distance: "10".into(),
                postcode: "SW1A 1AA".into(),
                ..Default::default()
            },
            mode: SearchMode::Advanced,
            title: TaxonomyId::Professionals.title().to_string(),
        }
    }

    #[test]
    fn test_bare_url_resumes_stored_search() {
        let merged = merge_snapshot(TaxonomyId::Professionals, SearchSelection::default(), Some(stored()));
        assert_eq!(merged, stored());
    }

    #[test]
    fn test_complete_url_wins_over_storage() {
        let values = parse_query(TaxonomyId::Professionals, "role=CCTV&subcategory=CCTV+Operator&pc=M1+1AE");
        let merged = merge_snapshot(TaxonomyId::Professionals, values.clone(), Some(stored()));
        assert_eq!(merged.values, values);
        assert_eq!(merged.mode, SearchMode::Basic);
    }

    #[test]
    fn test_same_postcode_keeps_stored_mode() {
        let values = parse_query(TaxonomyId::Professionals, "role=CCTV&subcategory=CCTV+Operator&pc=SW1A+1AA");
        let merged = merge_snapshot(TaxonomyId::Professionals, values, Some(stored()));
        assert_eq!(merged.mode, SearchMode::Advanced);
    }

    #[test]
    fn test_criteria_uses_labels() {
        let values = SearchSelection {
            looking_for: "Door Supervision".into(),
            sub_category: "Close Protection,Event Steward".into(),
            distance: "25".into(),
            experience: String::new(),
            postcode: "SW1A 1AA".into(),
        };
        let rows = criteria(&values);
        assert_eq!(rows[1], ("Role", "Close Protection, Event Steward".to_string()));
        assert_eq!(rows[3], ("Distance", "Within 25 miles".to_string()));
        assert_eq!(rows.len(), 4);
    }
}
