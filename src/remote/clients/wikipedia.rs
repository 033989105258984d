//! Wikipedia REST v1 page summary client.
//!
//! `GET {base}/page/summary/{title}` where `title` is percent-encoded as a
//! single path segment, so names like "Guinea-Bissau" or "Côte d'Ivoire"
//! (and anything containing '/') stay inside one segment.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;

use crate::remote::{FetchError, Summary, SummarySource};

pub const DEFAULT_SUMMARY_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

pub struct WikipediaClient {
    base_url: String,
    client: reqwest::Client,
}

impl WikipediaClient {
    pub fn new(base_url: String, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

/// Builds the summary URL for `title` under `base_url`.
pub fn summary_url(base_url: &str, title: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(base_url.trim_end_matches('/'))
        .map_err(|e| FetchError::Config(format!("invalid summary base URL '{base_url}': {e}")))?;

    url.path_segments_mut()
        .map_err(|_| FetchError::Config(format!("summary base URL '{base_url}' cannot be a base")))?
        .pop_if_empty()
        .extend(["page", "summary", title]);

    Ok(url)
}

#[async_trait]
impl SummarySource for WikipediaClient {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn fetch_summary(&self, title: &str) -> Result<Summary, FetchError> {
        let url = summary_url(&self.base_url, title)?;
        info!("Fetching summary for '{}': {}", title, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Summary response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Summary API error for '{}': {} - {}", title, status, message);
            return Err(FetchError::Api { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let summary: Summary =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        debug!(
            "Summary parsed: title={}, extract_len={}, thumbnail={}",
            summary.title,
            summary.extract.len(),
            summary.thumbnail.is_some()
        );
        Ok(summary)
    }
}
