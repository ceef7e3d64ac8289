use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Which directory a taxonomy (and the search built on it) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxonomyId {
    Professionals,
    SecurityCompanies,
    CourseProviders,
    ConnectingBusiness,
}

impl TaxonomyId {
    pub const ALL: [TaxonomyId; 4] = [
        TaxonomyId::Professionals,
        TaxonomyId::SecurityCompanies,
        TaxonomyId::CourseProviders,
        TaxonomyId::ConnectingBusiness,
    ];

    /// Title the search composer is declared with
    pub fn title(&self) -> &'static str {
        match self {
            TaxonomyId::Professionals => "Professionals",
            TaxonomyId::SecurityCompanies => "Security Companies",
            TaxonomyId::CourseProviders => "Course Providers",
            TaxonomyId::ConnectingBusiness => "Connecting Business",
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.title().eq_ignore_ascii_case(title.trim()))
    }

    /// Client-side route of the results page
    pub fn results_path(&self) -> &'static str {
        match self {
            TaxonomyId::Professionals => "/professionals",
            TaxonomyId::SecurityCompanies => "/security-companies",
            TaxonomyId::CourseProviders => "/course-provider",
            TaxonomyId::ConnectingBusiness => "/connecting-business",
        }
    }

    /// Course catalogues and business listings carry no years-of-experience filter
    pub fn has_experience_filter(&self) -> bool {
        matches!(self, TaxonomyId::Professionals | TaxonomyId::SecurityCompanies)
    }

    fn source(&self) -> &'static str {
        match self {
            TaxonomyId::Professionals => include_str!("data/professionals.json"),
            TaxonomyId::SecurityCompanies => include_str!("data/security_companies.json"),
            TaxonomyId::CourseProviders => include_str!("data/course_providers.json"),
            TaxonomyId::ConnectingBusiness => include_str!("data/connecting_business.json"),
        }
    }
}

// ============================================================================
// Category
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub roles: Vec<String>,
}

impl Category {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

// ============================================================================
// Taxonomy
// ============================================================================

/// Ordered category list of one directory
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    pub categories: Vec<Category>,
}

static PROFESSIONALS: Lazy<Taxonomy> = Lazy::new(|| Taxonomy::parse(TaxonomyId::Professionals));
static SECURITY_COMPANIES: Lazy<Taxonomy> =
    Lazy::new(|| Taxonomy::parse(TaxonomyId::SecurityCompanies));
static COURSE_PROVIDERS: Lazy<Taxonomy> =
    Lazy::new(|| Taxonomy::parse(TaxonomyId::CourseProviders));
static CONNECTING_BUSINESS: Lazy<Taxonomy> =
    Lazy::new(|| Taxonomy::parse(TaxonomyId::ConnectingBusiness));

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Static lookup of the embedded taxonomy for `id`
    pub fn load(id: TaxonomyId) -> &'static Taxonomy {
        match id {
            TaxonomyId::Professionals => &*PROFESSIONALS,
            TaxonomyId::SecurityCompanies => &*SECURITY_COMPANIES,
            TaxonomyId::CourseProviders => &*COURSE_PROVIDERS,
            TaxonomyId::ConnectingBusiness => &*CONNECTING_BUSINESS,
        }
    }

    fn parse(id: TaxonomyId) -> Taxonomy {
        serde_json::from_str(id.source()).unwrap_or_default()
    }

    pub fn category_by_title(&self, title: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.title == title)
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Roles selectable once `title` is chosen; empty for unknown titles
    pub fn roles_for(&self, title: &str) -> &[String] {
        self.category_by_title(title)
            .map(|c| c.roles.as_slice())
            .unwrap_or(&[])
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.title.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_embedded_taxonomies_parse() {
        for id in TaxonomyId::ALL {
            let taxonomy = Taxonomy::load(id);
            assert!(!taxonomy.is_empty(), "{:?} is empty", id);
            for category in &taxonomy.categories {
                assert!(!category.roles.is_empty(), "{} has no roles", category.title);
            }
        }
    }

    #[test]
    fn test_roles_for() {
        let taxonomy = Taxonomy::load(TaxonomyId::Professionals);
        assert!(taxonomy
            .roles_for("Door Supervision")
            .contains(&"Close Protection".to_string()));
        assert!(taxonomy.roles_for("Unknown").is_empty());
    }

    #[test]
    fn test_title_and_path_lookup() {
        assert_eq!(
            TaxonomyId::from_title("security companies"),
            Some(TaxonomyId::SecurityCompanies)
        );
        assert_eq!(TaxonomyId::CourseProviders.results_path(), "/course-provider");
        assert_eq!(TaxonomyId::from_title("Plumbers"), None);
    }

    #[test]
    fn test_experience_filter() {
        assert!(TaxonomyId::Professionals.has_experience_filter());
        assert!(!TaxonomyId::ConnectingBusiness.has_experience_filter());
    }
}
