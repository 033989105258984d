//! # Remote Sources
//!
//! HTTP clients for the two upstream APIs and the traits the core
//! depends on. Nothing outside this module knows about URLs or JSON shapes.

pub mod clients;
pub mod source;
pub mod types;

pub use clients::{RestCountriesClient, WikipediaClient};
pub use source::{
    CatalogSource, FetchError, HttpSettings, SummarySource, build_http_client, default_user_agent,
};
pub use types::{Country, CountryName, Flags, Summary, Thumbnail, format_population};
