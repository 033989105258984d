//! # Application State
//!
//! Core business state for Atlas. Domain logic only, no TUI types.
//!
//! ```text
//! App
//! ├── catalog_source: Arc<dyn CatalogSource>   // countries endpoint
//! ├── summary_source: Arc<dyn SummarySource>   // encyclopedia endpoint
//! ├── screen: Screen                           // Home | List | Detail
//! ├── list: Option<ListScreen>                 // mounted while List or Detail is shown
//! ├── detail: Option<DetailScreen>             // mounted while Detail is shown
//! ├── theme: Theme
//! ├── favorites: Option<Favorites>             // None = no provider mounted
//! ├── status_message: String                   // title bar text
//! └── next_request_id: u64                     // tags in-flight fetches
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::favorites::{Favorites, FavoritesError};
use crate::core::filter::filter_countries;
use crate::core::theme::Theme;
use crate::remote::{CatalogSource, Country, Summary, SummarySource};

/// Which screen is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    List,
    Detail,
}

/// Navigation parameters handed from the list to the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailParams {
    pub code: String,
    pub name: String,
}

/// Per-visit state of the country list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListScreen {
    pub catalog: Vec<Country>,
    pub loading: bool,
    pub query: String,
    /// Index into the filtered view, not the catalog.
    pub selected: usize,
    /// Request id of the catalog fetch this screen is waiting on.
    pub pending: Option<u64>,
}

impl ListScreen {
    pub fn mounting(request_id: u64) -> Self {
        Self {
            catalog: Vec::new(),
            loading: true,
            query: String::new(),
            selected: 0,
            pending: Some(request_id),
        }
    }

    pub fn filtered(&self) -> Vec<&Country> {
        filter_countries(&self.catalog, &self.query)
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.filtered().get(self.selected).copied()
    }
}

/// Per-visit state of the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailScreen {
    pub params: DetailParams,
    pub summary: Option<Summary>,
    pub loading: bool,
    pub pending: Option<u64>,
}

impl DetailScreen {
    pub fn mounting(params: DetailParams, request_id: u64) -> Self {
        Self {
            params,
            summary: None,
            loading: true,
            pending: Some(request_id),
        }
    }
}

pub struct App {
    pub catalog_source: Arc<dyn CatalogSource>,
    pub summary_source: Arc<dyn SummarySource>,
    pub screen: Screen,
    pub list: Option<ListScreen>,
    pub detail: Option<DetailScreen>,
    pub theme: Theme,
    pub favorites: Option<Favorites>,
    pub status_message: String,
    pub next_request_id: u64,
}

impl App {
    pub fn new(
        catalog_source: Arc<dyn CatalogSource>,
        summary_source: Arc<dyn SummarySource>,
        theme: Theme,
    ) -> Self {
        Self {
            catalog_source,
            summary_source,
            screen: Screen::Home,
            list: None,
            detail: None,
            theme,
            favorites: Some(Favorites::new()),
            status_message: String::from("Welcome!"),
            next_request_id: 1,
        }
    }

    /// Hands out a fresh id for a fetch.
    pub fn allocate_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Accessor for the favorites registry.
    pub fn favorites_mut(&mut self) -> Result<&mut Favorites, FavoritesError> {
        self.favorites.as_mut().ok_or(FavoritesError::OutsideProvider)
    }

    pub fn favorites(&self) -> Result<&Favorites, FavoritesError> {
        self.favorites.as_ref().ok_or(FavoritesError::OutsideProvider)
    }

    /// True when `name` is a favorite; false when no provider is mounted.
    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites().is_ok_and(|f| f.is_favorite(name))
    }
}
