use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use super::types::{Country, Summary};

/// Errors that can occur while talking to a remote source.
/// Every variant degrades the screen the same way; the split exists for logs.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Client misconfigured (bad base URL, TLS backend failure). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint returned a non-success status.
    Api { status: u16, message: String },
    /// Body was not JSON, or JSON that does not fit the expected type.
    Parse(String),
    /// Body was JSON but of the wrong shape (e.g. an object where a list was expected).
    UnexpectedShape(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::UnexpectedShape(msg) => write!(f, "unexpected response shape: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of the full country catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    /// Fetches every country with the reduced field set.
    async fn fetch_countries(&self) -> Result<Vec<Country>, FetchError>;
}

/// Source of per-country encyclopedia summaries.
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    /// Fetches the summary page for `title`. The title is escaped by the source.
    async fn fetch_summary(&self, title: &str) -> Result<Summary, FetchError>;
}

/// Settings shared by every HTTP-backed source.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSettings {
    pub user_agent: String,
    /// `None` means no client-side timeout.
    pub timeout: Option<Duration>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: None,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("atlas/{}", env!("CARGO_PKG_VERSION"))
}

/// Builds the `reqwest::Client` shared by the sources.
pub fn build_http_client(settings: &HttpSettings) -> Result<reqwest::Client, FetchError> {
    let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| FetchError::Config(e.to_string()))
}
