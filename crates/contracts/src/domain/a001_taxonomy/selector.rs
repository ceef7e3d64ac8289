//! Two-level disclosure state of the category dropdown.
//!
//! `Closed` → `CategoryOpen` (first level visible) → `RoleOpen(id)` (roles of
//! one category visible). Only one category can show its roles at a time.

use super::aggregate::Taxonomy;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    CategoryOpen,
    RoleOpen(String),
}

/// Emitted when a role is picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleChoice {
    pub category_title: String,
    pub role: String,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DropdownState::Closed)
    }

    pub fn open_category_id(&self) -> Option<&str> {
        match self {
            DropdownState::RoleOpen(id) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Trigger button: open the first level, or close everything
    pub fn toggle(&mut self) {
        *self = if self.is_open() {
            DropdownState::Closed
        } else {
            DropdownState::CategoryOpen
        };
    }

    /// Click on a category; clicking the open one collapses it back
    pub fn open_category(&mut self, category_id: &str) {
        *self = match self {
            DropdownState::RoleOpen(open) if open == category_id => DropdownState::CategoryOpen,
            _ => DropdownState::RoleOpen(category_id.to_string()),
        };
    }

    /// Click on a role of the open category. Emits the choice and closes.
    /// Roles that do not belong to the open category are ignored.
    pub fn choose_role(&mut self, taxonomy: &Taxonomy, role: &str) -> Option<RoleChoice> {
        let category = taxonomy.category_by_id(self.open_category_id()?)?;
        if !category.has_role(role) {
            return None;
        }
        let choice = RoleChoice {
            category_title: category.title.clone(),
            role: role.to_string(),
        };
        *self = DropdownState::Closed;
        Some(choice)
    }

    /// Whether a document click should close the picker
    pub fn closes_on_click(&self, inside: bool) -> bool {
        self.is_open() && !inside
    }

    /// Focus left the component
    pub fn click_outside(&mut self) {
        *self = DropdownState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_taxonomy::TaxonomyId;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut state = DropdownState::default();
        state.toggle();
        assert_eq!(state, DropdownState::CategoryOpen);
        state.open_category("cctv");
        state.toggle();
        assert_eq!(state, DropdownState::Closed);
    }

    #[test]
    fn test_only_one_category_open() {
        let mut state = DropdownState::CategoryOpen;
        state.open_category("cctv");
        state.open_category("door-supervision");
        assert_eq!(state.open_category_id(), Some("door-supervision"));
        state.open_category("door-supervision");
        assert_eq!(state, DropdownState::CategoryOpen);
    }

    #[test]
    fn test_choose_role_emits_and_closes() {
        let taxonomy = Taxonomy::load(TaxonomyId::Professionals);
        let mut state = DropdownState::CategoryOpen;
        state.open_category("door-supervision");
        let choice = state.choose_role(taxonomy, "Close Protection").unwrap();
        assert_eq!(choice.category_title, "Door Supervision");
        assert_eq!(choice.role, "Close Protection");
        assert_eq!(state, DropdownState::Closed);
    }

    #[test]
    fn test_foreign_role_is_ignored() {
        let taxonomy = Taxonomy::load(TaxonomyId::Professionals);
        let mut state = DropdownState::RoleOpen("cctv".into());
        assert_eq!(state.choose_role(taxonomy, "Close Protection"), None);
        assert!(state.is_open());
    }

    #[test]
    fn test_click_outside_closes() {
        let mut state = DropdownState::RoleOpen("cctv".into());
        state.click_outside();
        assert!(!state.is_open());
    }

    #[test]
    fn test_only_outside_clicks_on_an_open_picker_close_it() {
        let expanded = DropdownState::RoleOpen("cctv".into());
        assert!(expanded.closes_on_click(false));
        assert!(!expanded.closes_on_click(true));
        assert!(DropdownState::CategoryOpen.closes_on_click(false));
        assert!(!DropdownState::Closed.closes_on_click(false));
    }
}
