//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::state::App;
use crate::core::theme::Theme;
use crate::remote::{
    CatalogSource, Country, CountryName, FetchError, Flags, Summary, SummarySource, Thumbnail,
};

/// A source that never gets called in reducer tests.
pub struct NoopSource;

#[async_trait]
impl CatalogSource for NoopSource {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl SummarySource for NoopSource {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_summary(&self, title: &str) -> Result<Summary, FetchError> {
        Err(FetchError::Api {
            status: 404,
            message: format!("no summary for {title}"),
        })
    }
}

/// Creates a test App backed by `NoopSource`s.
pub fn test_app() -> App {
    App::new(Arc::new(NoopSource), Arc::new(NoopSource), Theme::Light)
}

/// Builds a country with the given code and common name.
pub fn country(cca3: &str, common: &str) -> Country {
    Country {
        cca3: cca3.to_string(),
        name: CountryName {
            common: common.to_string(),
            official: format!("Republic of {common}"),
        },
        population: 1_000_000,
        flags: Some(Flags {
            png: Some(format!("https://flagcdn.com/w320/{}.png", cca3.to_lowercase())),
            alt: None,
        }),
        continents: Some(vec!["Somewhere".to_string()]),
    }
}

pub fn summary(title: &str, extract: &str, thumbnail: Option<&str>) -> Summary {
    Summary {
        title: title.to_string(),
        extract: extract.to_string(),
        description: None,
        thumbnail: thumbnail.map(|source| Thumbnail {
            source: source.to_string(),
            width: Some(320),
            height: Some(213),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sources() {
        let source = NoopSource;
        let countries = tokio_test::block_on(source.fetch_countries()).unwrap();
        assert!(countries.is_empty());
        assert!(tokio_test::block_on(source.fetch_summary("Peru")).is_err());
    }
}
