//! REST Countries (v3.1) catalog client.
//!
//! Requests only the fields the list screen renders:
//! `GET {base}/all?fields=name,population,cca3,flags,continents`

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::remote::{CatalogSource, Country, FetchError};

pub const DEFAULT_COUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Field selection sent with the catalog request.
pub const CATALOG_FIELDS: &str = "name,population,cca3,flags,continents";

pub struct RestCountriesClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesClient {
    pub fn new(base_url: String, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

/// Turns a raw body into a catalog.
///
/// A JSON array becomes the catalog in source order. Entries that don't
/// decode as a `Country` are logged and skipped. Any other JSON value is
/// reported as `UnexpectedShape`, which callers treat as an empty catalog.
pub fn parse_catalog(body: &str) -> Result<Vec<Country>, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let serde_json::Value::Array(entries) = value else {
        return Err(FetchError::UnexpectedShape(format!(
            "expected a JSON array of countries, got {}",
            json_kind(&value)
        )));
    };

    let total = entries.len();
    let countries: Vec<Country> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(country) => Some(country),
            Err(e) => {
                warn!("Skipping catalog entry {}: {}", index, e);
                None
            }
        })
        .collect();

    if countries.len() < total {
        warn!("Catalog kept {} of {} entries", countries.len(), total);
    }
    Ok(countries)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[async_trait]
impl CatalogSource for RestCountriesClient {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        let url = format!("{}/all", self.base_url);
        info!("Fetching country catalog: {} (fields={})", url, CATALOG_FIELDS);

        let response = self
            .client
            .get(&url)
            .query(&[("fields", CATALOG_FIELDS)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error: {} - {}", status, message);
            return Err(FetchError::Api { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let countries = parse_catalog(&body)?;
        info!("Catalog fetched: {} countries", countries.len());
        Ok(countries)
    }
}
