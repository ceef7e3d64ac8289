//! Search composer: owns one search session from the first pick to the
//! navigation to a results page.
//!
//! Submission is split in two so the network round trip stays outside:
//! [`SearchComposer::prepare_submit`] checks completeness and hands back a
//! [`PendingSearch`]; the caller asks the postcode service and feeds the
//! outcome to [`PendingSearch::resolve`].

use serde::{Deserialize, Serialize};

use super::query::compose_query;
use super::selection::{SearchSelection, SelectionError};
use crate::domain::a001_taxonomy::{RoleChoice, Taxonomy, TaxonomyId};
use crate::domain::common::{ClientError, ClientResult};
use crate::shared::postcode::PostcodeStatus;
use crate::shared::validation::{validate_postcode_format, FormErrors};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Basic,
    Advanced,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Basic => "basic",
            SearchMode::Advanced => "advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().trim_matches('"') {
            "basic" => Some(SearchMode::Basic),
            "advanced" => Some(SearchMode::Advanced),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SearchMode::Basic => SearchMode::Advanced,
            SearchMode::Advanced => SearchMode::Basic,
        }
    }
}

/// Result of the basic/advanced switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeToggle {
    Switched(SearchMode),
    SignInRequired,
}

/// What is persisted for the results page to warm-start from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSnapshot {
    pub values: SearchSelection,
    pub mode: SearchMode,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNavigation {
    pub path: String,
    pub query: String,
    pub snapshot: SearchSnapshot,
}

impl SearchNavigation {
    pub fn url(&self) -> String {
        format!("{}?{}", self.path, self.query)
    }
}

/// A complete search waiting on the postcode verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    postcode: String,
    navigation: SearchNavigation,
}

impl PendingSearch {
    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    /// Finish the submission with the postcode service's answer.
    ///
    /// An invalid postcode or a failed lookup yields an error and no
    /// navigation; a transport failure stays a retryable `Network` error.
    pub fn resolve(self, outcome: ClientResult<PostcodeStatus>) -> ClientResult<SearchNavigation> {
        match outcome? {
            PostcodeStatus::Valid => Ok(self.navigation),
            PostcodeStatus::Invalid => Err(ClientError::InvalidPostcode(self.postcode)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchComposer {
    id: TaxonomyId,
    taxonomy: Taxonomy,
    selection: SearchSelection,
    mode: SearchMode,
    hide_experience: bool,
    page_size: u32,
}

impl SearchComposer {
    pub fn new(id: TaxonomyId) -> Self {
        Self::with_taxonomy(id, Taxonomy::load(id).clone())
    }

    pub fn with_taxonomy(id: TaxonomyId, taxonomy: Taxonomy) -> Self {
        Self {
            id,
            taxonomy,
            selection: SearchSelection::default(),
            mode: SearchMode::Basic,
            hide_experience: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Drop the experience requirement (and select) for callers that have none
    pub fn hide_experience(mut self, hide: bool) -> Self {
        self.hide_experience = hide;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn id(&self) -> TaxonomyId {
        self.id
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn selection(&self) -> &SearchSelection {
        &self.selection
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn is_experience_hidden(&self) -> bool {
        self.hide_experience
    }

    /// Roles of the currently chosen category
    pub fn available_roles(&self) -> &[String] {
        self.taxonomy.roles_for(&self.selection.looking_for)
    }

    pub fn set_looking_for(&mut self, title: &str) -> Result<(), SelectionError> {
        self.selection.set_looking_for(&self.taxonomy, title)
    }

    pub fn set_sub_category(&mut self, role: &str) -> Result<(), SelectionError> {
        self.selection.set_sub_category(&self.taxonomy, role)
    }

    pub fn apply_choice(&mut self, choice: &RoleChoice) -> Result<(), SelectionError> {
        self.selection
            .select(&self.taxonomy, &choice.category_title, &choice.role)
    }

    pub fn set_distance(&mut self, distance: &str) {
        self.selection.distance = distance.to_string();
    }

    pub fn set_experience(&mut self, experience: &str) {
        self.selection.experience = experience.to_string();
    }

    pub fn set_postcode(&mut self, postcode: &str) {
        self.selection.postcode = postcode.to_string();
    }

    /// Required fields still empty in the current mode
    pub fn missing_fields(&self) -> FormErrors {
        let sel = &self.selection;
        let mut errors = FormErrors::new();
        if sel.looking_for.trim().is_empty() {
            errors.insert("lookingFor", "Choose what you are looking for");
        }
        if sel.sub_category.trim().is_empty() {
            errors.insert("subCategory", "Choose a role");
        }
        if sel.postcode.trim().is_empty() {
            errors.insert("postcode", "Enter a postcode");
        }
        if self.mode == SearchMode::Advanced {
            if sel.distance.trim().is_empty() {
                errors.insert("distance", "Choose a distance");
            }
            if !self.hide_experience && sel.experience.trim().is_empty() {
                errors.insert("experience", "Choose an experience level");
            }
        }
        errors
    }

    /// Enables the Go button
    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Switching mode is a signed-in feature
    pub fn toggle_mode(&mut self, has_session: bool) -> ModeToggle {
        if !has_session {
            return ModeToggle::SignInRequired;
        }
        self.mode = self.mode.toggled();
        ModeToggle::Switched(self.mode)
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    pub fn prepare_submit(&self) -> ClientResult<PendingSearch> {
        self.missing_fields()
            .into_result()
            .map_err(ClientError::Validation)?;

        let postcode = validate_postcode_format(&self.selection.postcode)
            .map_err(|_| ClientError::InvalidPostcode(self.selection.postcode.trim().to_string()))?;

        let mut values = self.selection.clone();
        values.postcode = postcode.clone();
        if self.mode == SearchMode::Basic {
            values.distance.clear();
            values.experience.clear();
        } else if self.hide_experience {
            values.experience.clear();
        }

        let query = compose_query(self.id, &values, self.mode, self.page_size);
        Ok(PendingSearch {
            postcode,
            navigation: SearchNavigation {
                path: self.id.results_path().to_string(),
                query,
                snapshot: SearchSnapshot {
                    values,
                    mode: self.mode,
                    title: self.id.title().to_string(),
                },
            },
        })
    }

    /// Warm-start from a persisted snapshot; stale picks are dropped
    pub fn restore(&mut self, snapshot: &SearchSnapshot) {
        let mut values = snapshot.values.clone();
        values.sanitize(&self.taxonomy);
        self.selection = values;
        self.mode = snapshot.mode;
    }

    pub fn reset(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(id: TaxonomyId) -> SearchComposer {
        let mut composer = SearchComposer::new(id);
        composer.set_looking_for("Door Supervision").unwrap();
        composer.set_sub_category("Close Protection").unwrap();
        composer.set_postcode("SW1A 1AA");
        composer
    }

    #[test]
    fn test_basic_submit_navigates_when_postcode_valid() {
        let composer = filled(TaxonomyId::Professionals);
        assert!(composer.can_submit());
        let pending = composer.prepare_submit().unwrap();
        assert_eq!(pending.postcode(), "SW1A 1AA");

        let nav = pending.resolve(Ok(PostcodeStatus::Valid)).unwrap();
        assert_eq!(
            nav.url(),
            "/professionals?role=Door+Supervision&subcategory=Close+Protection&pc=SW1A+1AA&page=1&pageSize=10"
        );
        assert_eq!(nav.snapshot.title, "Professionals");
        assert_eq!(nav.snapshot.mode, SearchMode::Basic);
    }

    #[test]
    fn test_invalid_postcode_blocks_navigation() {
        let pending = filled(TaxonomyId::Professionals).prepare_submit().unwrap();
        let err = pending.resolve(Ok(PostcodeStatus::Invalid)).unwrap_err();
        assert_eq!(err, ClientError::InvalidPostcode("SW1A 1AA".into()));
    }

    #[test]
    fn test_postcode_service_failure_is_retryable() {
        let pending = filled(TaxonomyId::Professionals).prepare_submit().unwrap();
        let err = pending
            .resolve(Err(ClientError::network("Failed to fetch")))
            .unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_basic_mode_requirements() {
        let mut composer = SearchComposer::new(TaxonomyId::Professionals);
        assert!(!composer.can_submit());
        composer.set_looking_for("CCTV").unwrap();
        composer.set_sub_category("CCTV Operator").unwrap();
        assert!(!composer.can_submit());
        composer.set_postcode("M1 1AE");
        assert!(composer.can_submit());
    }

    #[test]
    fn test_advanced_mode_requires_distance_and_experience() {
        let mut composer = filled(TaxonomyId::Professionals);
        assert_eq!(composer.toggle_mode(true), ModeToggle::Switched(SearchMode::Advanced));
        let missing = composer.missing_fields();
        assert!(missing.contains("distance"));
        assert!(missing.contains("experience"));
        assert!(matches!(
            composer.prepare_submit(),
            Err(ClientError::Validation(_))
        ));

        composer.set_distance("10");
        composer.set_experience("1-3");
        assert!(composer.can_submit());
    }

    #[test]
    fn test_hidden_experience_is_not_required() {
        let mut composer = filled(TaxonomyId::Professionals).hide_experience(true);
        composer.set_mode(SearchMode::Advanced);
        composer.set_distance("25");
        assert!(composer.can_submit());
    }

    #[test]
    fn test_toggle_without_session_requires_sign_in() {
        let mut composer = filled(TaxonomyId::Professionals);
        assert_eq!(composer.toggle_mode(false), ModeToggle::SignInRequired);
        assert_eq!(composer.mode(), SearchMode::Basic);
    }

    #[test]
    fn test_malformed_postcode_rejected_before_lookup() {
        let mut composer = filled(TaxonomyId::Professionals);
        composer.set_postcode("NOT A CODE");
        assert!(matches!(
            composer.prepare_submit(),
            Err(ClientError::InvalidPostcode(_))
        ));
    }

    #[test]
    fn test_dropdown_choice_applies_to_selection() {
        let mut composer = SearchComposer::new(TaxonomyId::SecurityCompanies);
        composer
            .apply_choice(&RoleChoice {
                category_title: "Event Security".into(),
                role: "Stewarding".into(),
            })
            .unwrap();
        assert_eq!(composer.selection().looking_for, "Event Security");
        assert_eq!(composer.selection().sub_category, "Stewarding");
        composer.set_looking_for("Manned Guarding").unwrap();
        assert!(composer.selection().sub_category.is_empty());
    }

    #[test]
    fn test_restore_from_snapshot() {
        let nav = filled(TaxonomyId::Professionals)
            .prepare_submit()
            .unwrap()
            .resolve(Ok(PostcodeStatus::Valid))
            .unwrap();
        let mut composer = SearchComposer::new(TaxonomyId::Professionals);
        composer.restore(&nav.snapshot);
        assert_eq!(composer.selection(), &nav.snapshot.values);
        composer.reset();
        assert_eq!(composer.selection(), &SearchSelection::default());
    }

    #[test]
    fn test_restore_from_url_with_several_roles() {
        let values = crate::domain::a002_search::query::parse_query(
            TaxonomyId::Professionals,
            "role=Door+Supervision&subcategory=Close+Protection&subcategory=Event+Steward&pc=SW1A+1AA",
        );
        let mut composer = SearchComposer::new(TaxonomyId::Professionals);
        composer.restore(&SearchSnapshot {
            values,
            mode: SearchMode::Basic,
            title: TaxonomyId::Professionals.title().to_string(),
        });
        assert_eq!(composer.selection().sub_category, "Close Protection,Event Steward");
        assert!(composer.can_submit());

        let nav = composer
            .prepare_submit()
            .unwrap()
            .resolve(Ok(PostcodeStatus::Valid))
            .unwrap();
        assert!(nav
            .url()
            .contains("subcategory=Close+Protection&subcategory=Event+Steward"));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(SearchMode::parse("\"advanced\""), Some(SearchMode::Advanced));
        assert_eq!(SearchMode::parse("basic"), Some(SearchMode::Basic));
        assert_eq!(SearchMode::parse("expert"), None);
    }
}
