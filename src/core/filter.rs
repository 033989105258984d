//! # Filter View
//!
//! Derives the visible subset of the catalog from the search query.
//! Case-insensitive substring match on the common name; source order kept.

use crate::remote::Country;

/// Returns the countries whose common name contains `query`, ignoring case.
/// An empty query returns every country.
pub fn filter_countries<'a>(catalog: &'a [Country], query: &str) -> Vec<&'a Country> {
    if query.is_empty() {
        return catalog.iter().collect();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|country| country.common_name().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::country;

    fn catalog() -> Vec<Country> {
        vec![
            country("PER", "Peru"),
            country("CHL", "Chile"),
            country("PRT", "Portugal"),
            country("ESP", "Spain"),
        ]
    }

    fn names(view: &[&Country]) -> Vec<String> {
        view.iter().map(|c| c.common_name().to_string()).collect()
    }

    #[test]
    fn test_peru_chile_scenario() {
        let catalog = vec![country("PER", "Peru"), country("CHL", "Chile")];
        let view = filter_countries(&catalog, "pe");
        assert_eq!(names(&view), vec!["Peru"]);
    }

    #[test]
    fn test_empty_query_returns_full_catalog_in_order() {
        let catalog = catalog();
        let view = filter_countries(&catalog, "");
        assert_eq!(view.len(), catalog.len());
        for (filtered, original) in view.iter().zip(catalog.iter()) {
            assert_eq!(*filtered, original);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = catalog();
        assert_eq!(names(&filter_countries(&catalog, "PORT")), vec!["Portugal"]);
        assert_eq!(names(&filter_countries(&catalog, "sPaI")), vec!["Spain"]);
    }

    #[test]
    fn test_preserves_source_order() {
        let catalog = catalog();
        // "p" hits Peru, Portugal, Spain in catalog order
        assert_eq!(
            names(&filter_countries(&catalog, "p")),
            vec!["Peru", "Portugal", "Spain"]
        );
    }

    #[test]
    fn test_no_match() {
        let catalog = catalog();
        assert!(filter_countries(&catalog, "zz").is_empty());
    }

    #[test]
    fn test_result_is_subsequence_for_every_query() {
        let catalog = catalog();
        for query in ["", "e", "i", "l", "ru", "x", "CH", "a"] {
            let view = filter_countries(&catalog, query);
            let expected: Vec<&Country> = catalog
                .iter()
                .filter(|c| c.common_name().to_lowercase().contains(&query.to_lowercase()))
                .collect();
            assert_eq!(view, expected, "query {query:?}");
        }
    }

    #[test]
    fn test_non_ascii_names() {
        let catalog = vec![country("CIV", "Côte d'Ivoire"), country("ALA", "Åland Islands")];
        assert_eq!(names(&filter_countries(&catalog, "CÔTE")), vec!["Côte d'Ivoire"]);
        assert_eq!(names(&filter_countries(&catalog, "åland")), vec!["Åland Islands"]);
    }
}
