use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::options::{is_known_distance, is_known_experience};
use crate::domain::a001_taxonomy::Taxonomy;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("pick what you are looking for first")]
    NoCategory,
    #[error("\"{role}\" is not offered under \"{category}\"")]
    RoleNotInCategory { category: String, role: String },
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),
}

/// Transient filter state of one search session.
///
/// `sub_category` is always empty or one of the roles of the category whose
/// title is `looking_for`. A results URL may carry several roles of that
/// category, held comma-joined.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchSelection {
    pub looking_for: String,
    pub sub_category: String,
    pub distance: String,
    pub experience: String,
    pub postcode: String,
}

impl SearchSelection {
    /// Change the category; a different category clears the sub-category
    pub fn set_looking_for(&mut self, taxonomy: &Taxonomy, title: &str) -> Result<(), SelectionError> {
        if !title.is_empty() && taxonomy.category_by_title(title).is_none() {
            return Err(SelectionError::UnknownCategory(title.to_string()));
        }
        if self.looking_for != title {
            self.looking_for = title.to_string();
            self.sub_category.clear();
        }
        Ok(())
    }

    pub fn set_sub_category(&mut self, taxonomy: &Taxonomy, role: &str) -> Result<(), SelectionError> {
        if role.is_empty() {
            self.sub_category.clear();
            return Ok(());
        }
        if self.looking_for.is_empty() {
            return Err(SelectionError::NoCategory);
        }
        let category = taxonomy
            .category_by_title(&self.looking_for)
            .ok_or_else(|| SelectionError::UnknownCategory(self.looking_for.clone()))?;
        if !category.has_role(role) {
            return Err(SelectionError::RoleNotInCategory {
                category: self.looking_for.clone(),
                role: role.to_string(),
            });
        }
        self.sub_category = role.to_string();
        Ok(())
    }

    /// Apply a `(category, role)` pick from the cascading dropdown
    pub fn select(&mut self, taxonomy: &Taxonomy, category_title: &str, role: &str) -> Result<(), SelectionError> {
        self.set_looking_for(taxonomy, category_title)?;
        self.set_sub_category(taxonomy, role)
    }

    /// Drop restored values that are no longer offered: roles outside the
    /// category and distance/experience values missing from the selects
    pub fn sanitize(&mut self, taxonomy: &Taxonomy) {
        if !is_known_distance(&self.distance) {
            self.distance.clear();
        }
        if !is_known_experience(&self.experience) {
            self.experience.clear();
        }
        let Some(category) = taxonomy.category_by_title(&self.looking_for) else {
            self.looking_for.clear();
            self.sub_category.clear();
            return;
        };
        let kept: Vec<&str> = self
            .sub_category
            .split(',')
            .map(str::trim)
            .filter(|role| category.has_role(role))
            .collect();
        self.sub_category = kept.join(",");
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_taxonomy::{Category, TaxonomyId};

    fn two_category_taxonomy() -> Taxonomy {
        Taxonomy::new(vec![
            Category {
                id: "a".into(),
                title: "Alpha".into(),
                roles: vec!["R1".into(), "R2".into()],
            },
            Category {
                id: "b".into(),
                title: "Beta".into(),
                roles: vec!["R3".into()],
            },
        ])
    }

    #[test]
    fn test_sub_category_only_from_current_category() {
        let taxonomy = two_category_taxonomy();
        let mut sel = SearchSelection::default();
        sel.set_looking_for(&taxonomy, "Alpha").unwrap();
        sel.set_sub_category(&taxonomy, "R2").unwrap();
        assert_eq!(sel.sub_category, "R2");

        let err = sel.set_sub_category(&taxonomy, "R3").unwrap_err();
        assert!(matches!(err, SelectionError::RoleNotInCategory { .. }));
        assert_eq!(sel.sub_category, "R2");
    }

    #[test]
    fn test_changing_category_clears_sub_category() {
        let taxonomy = two_category_taxonomy();
        let mut sel = SearchSelection::default();
        sel.select(&taxonomy, "Alpha", "R1").unwrap();
        sel.set_looking_for(&taxonomy, "Beta").unwrap();
        assert_eq!(sel.looking_for, "Beta");
        assert!(sel.sub_category.is_empty());
    }

    #[test]
    fn test_reselecting_same_category_keeps_sub_category() {
        let taxonomy = two_category_taxonomy();
        let mut sel = SearchSelection::default();
        sel.select(&taxonomy, "Alpha", "R1").unwrap();
        sel.set_looking_for(&taxonomy, "Alpha").unwrap();
        assert_eq!(sel.sub_category, "R1");
    }

    #[test]
    fn test_sub_category_requires_category() {
        let taxonomy = two_category_taxonomy();
        let mut sel = SearchSelection::default();
        assert_eq!(
            sel.set_sub_category(&taxonomy, "R1"),
            Err(SelectionError::NoCategory)
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        let taxonomy = Taxonomy::load(TaxonomyId::Professionals);
        let mut sel = SearchSelection::default();
        assert!(sel.set_looking_for(taxonomy, "Plumbing").is_err());
        assert!(sel.looking_for.is_empty());
    }

    #[test]
    fn test_sanitize_drops_stale_snapshot_values() {
        let taxonomy = two_category_taxonomy();
        let mut sel = SearchSelection {
            looking_for: "Beta".into(),
            sub_category: "R1".into(),
            postcode: "M1 1AE".into(),
            ..Default::default()
        };
        sel.sanitize(&taxonomy);
        assert_eq!(sel.looking_for, "Beta");
        assert!(sel.sub_category.is_empty());
        assert_eq!(sel.postcode, "M1 1AE");
    }

    #[test]
    fn test_sanitize_keeps_each_fitting_role() {
        let taxonomy = two_category_taxonomy();
        let mut sel = SearchSelection {
            looking_for: "Alpha".into(),
            sub_category: "R1, R3,R2".into(),
            ..Default::default()
        };
        sel.sanitize(&taxonomy);
        assert_eq!(sel.sub_category, "R1,R2");
    }

    #[test]
    fn test_sanitize_drops_unknown_option_values() {
        let taxonomy = two_category_taxonomy();
        let mut sel = SearchSelection {
            looking_for: "Alpha".into(),
            sub_category: "R1".into(),
            distance: "7".into(),
            experience: "5-10".into(),
            ..Default::default()
        };
        sel.sanitize(&taxonomy);
        assert!(sel.distance.is_empty());
        assert_eq!(sel.experience, "5-10");
        assert_eq!(sel.sub_category, "R1");
    }

    #[test]
    fn test_sanitize_unknown_category_clears_both() {
        let taxonomy = two_category_taxonomy();
        let mut sel = SearchSelection {
            looking_for: "Gamma".into(),
            sub_category: "R1".into(),
            ..Default::default()
        };
        sel.sanitize(&taxonomy);
        assert!(sel.looking_for.is_empty());
        assert!(sel.sub_category.is_empty());
    }

    #[test]
    fn test_snapshot_json_is_camel_case() {
        let sel = SearchSelection {
            looking_for: "Alpha".into(),
            sub_category: "R1".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&sel).unwrap();
        assert!(json.contains("\"lookingFor\":\"Alpha\""));
        assert!(json.contains("\"subCategory\":\"R1\""));
    }
}
