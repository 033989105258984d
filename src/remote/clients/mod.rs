pub mod rest_countries;
pub mod wikipedia;

pub use rest_countries::RestCountriesClient;
pub use wikipedia::WikipediaClient;
