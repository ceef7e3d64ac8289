//! Query-string vocabulary of the results pages.
//!
//! Professionals: `role`, `subcategory` (repeatable), `pc`.
//! Every other directory: `sr`, `so`, `pc`, `ds`, `ex`.
//! Both end with `page` and `pageSize`.

use super::composer::SearchMode;
use super::selection::SearchSelection;
use crate::domain::a001_taxonomy::TaxonomyId;

pub const FIRST_PAGE: u32 = 1;

/// Form-style percent encoding: spaces become `+`
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

pub fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| spaced.clone())
}

#[derive(Default)]
struct QueryBuilder(Vec<String>);

impl QueryBuilder {
    fn append_pair(&mut self, key: &str, value: &str) {
        self.0.push(format!("{}={}", key, encode_component(value)));
    }

    fn finish(self) -> String {
        self.0.join("&")
    }
}

fn pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
}

pub fn compose_query(
    id: TaxonomyId,
    selection: &SearchSelection,
    mode: SearchMode,
    page_size: u32,
) -> String {
    let mut query = QueryBuilder::default();

    match id {
        TaxonomyId::Professionals => {
            query.append_pair("role", &selection.looking_for);
            for sub in selection.sub_category.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                query.append_pair("subcategory", sub);
            }
            query.append_pair("pc", &selection.postcode);
        }
        _ => {
            query.append_pair("sr", &selection.looking_for);
            query.append_pair("so", &selection.sub_category);
            query.append_pair("pc", &selection.postcode);
        }
    }

    if mode == SearchMode::Advanced {
        if !selection.distance.is_empty() {
            query.append_pair("ds", &selection.distance);
        }
        if !selection.experience.is_empty() {
            query.append_pair("ex", &selection.experience);
        }
    }

    query.append_pair("page", &FIRST_PAGE.to_string());
    query.append_pair("pageSize", &page_size.to_string());
    query.finish()
}

/// Read a results-page query back into a selection
pub fn parse_query(id: TaxonomyId, query: &str) -> SearchSelection {
    let mut selection = SearchSelection::default();
    let mut subs: Vec<String> = Vec::new();

    for (key, value) in pairs(query) {
        match (id, key.as_str()) {
            (TaxonomyId::Professionals, "role") => selection.looking_for = value,
            (TaxonomyId::Professionals, "subcategory") => subs.push(value),
            (_, "sr") => selection.looking_for = value,
            (_, "so") => selection.sub_category = value,
            (_, "pc") => selection.postcode = value,
            (_, "ds") => selection.distance = value,
            (_, "ex") => selection.experience = value,
            _ => {}
        }
    }

    if !subs.is_empty() {
        selection.sub_category = subs.join(",");
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door_supervision() -> SearchSelection {
        SearchSelection {
            looking_for: "Door Supervision".into(),
            sub_category: "Close Protection".into(),
            postcode: "SW1A 1AA".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_professionals_basic_query() {
        let query = compose_query(TaxonomyId::Professionals, &door_supervision(), SearchMode::Basic, 10);
        assert_eq!(
            query,
            "role=Door+Supervision&subcategory=Close+Protection&pc=SW1A+1AA&page=1&pageSize=10"
        );
    }

    #[test]
    fn test_basic_mode_ignores_distance_and_experience() {
        let mut sel = door_supervision();
        sel.distance = "10".into();
        sel.experience = "1-3".into();
        let query = compose_query(TaxonomyId::Professionals, &sel, SearchMode::Basic, 10);
        assert!(!query.contains("ds="));
        assert!(!query.contains("ex="));
    }

    #[test]
    fn test_company_advanced_query() {
        let sel = SearchSelection {
            looking_for: "Event Security".into(),
            sub_category: "Crowd Management".into(),
            distance: "25".into(),
            experience: "5-10".into(),
            postcode: "M1 1AE".into(),
        };
        let query = compose_query(TaxonomyId::SecurityCompanies, &sel, SearchMode::Advanced, 20);
        assert_eq!(
            query,
            "sr=Event+Security&so=Crowd+Management&pc=M1+1AE&ds=25&ex=5-10&page=1&pageSize=20"
        );
    }

    #[test]
    fn test_parse_repeatable_subcategory() {
        let sel = parse_query(
            TaxonomyId::Professionals,
            "?role=CCTV&subcategory=CCTV+Operator&subcategory=Control+Room+Supervisor&pc=M1+1AE&page=1",
        );
        assert_eq!(sel.looking_for, "CCTV");
        assert_eq!(sel.sub_category, "CCTV Operator,Control Room Supervisor");
        assert_eq!(sel.postcode, "M1 1AE");
    }

    #[test]
    fn test_component_encoding() {
        assert_eq!(encode_component("Door Supervision & CCTV"), "Door+Supervision+%26+CCTV");
        assert_eq!(decode_component("Door+Supervision+%26+CCTV"), "Door Supervision & CCTV");
    }

    #[test]
    fn test_parse_company_query() {
        let sel = parse_query(
            TaxonomyId::CourseProviders,
            "sr=First+Aid&so=First+Aid+at+Work&pc=LS1+4AP&ds=10&ex=1-3",
        );
        assert_eq!(sel.looking_for, "First Aid");
        assert_eq!(sel.sub_category, "First Aid at Work");
        assert_eq!(sel.distance, "10");
        assert_eq!(sel.experience, "1-3");
    }
}
