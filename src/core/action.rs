//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User presses Enter on a country? That's `Action::OpenDetail`.
//! The catalog request settles? That's `Action::CatalogLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing the I/O the adapter should perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetch results carry the request id they were issued with. A result whose
//! id does not match the mounted screen's pending id is dropped, so a screen
//! that was left (or re-entered) never sees a stale response.

use log::{debug, info, warn};

use crate::core::state::{App, DetailParams, DetailScreen, ListScreen, Screen};
use crate::remote::{Country, FetchError, Summary};

#[derive(Debug)]
pub enum Action {
    /// Home → List. Mounts the list screen and starts the catalog fetch.
    OpenCatalog,
    CatalogLoaded {
        request_id: u64,
        result: Result<Vec<Country>, FetchError>,
    },
    /// Replaces the search query.
    SetQuery(String),
    SelectPrevious,
    SelectNext,
    /// Moves the selection by `delta` rows, clamped to the filtered view.
    MoveSelection(isize),
    /// List → Detail for the selected row.
    OpenDetail,
    SummaryLoaded {
        request_id: u64,
        result: Result<Summary, FetchError>,
    },
    ToggleFavorite,
    ToggleTheme,
    /// Pops the top screen. From Home this quits.
    Back,
    Quit,
}

/// Which background fetch an effect refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Catalog,
    Summary,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchCatalog { request_id: u64 },
    FetchSummary { request_id: u64, name: String },
    /// Abort the in-flight fetch of this kind (its screen was unmounted).
    Cancel(FetchKind),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::OpenCatalog => {
            if app.screen != Screen::Home {
                return Effect::None;
            }
            let request_id = app.allocate_request_id();
            app.list = Some(ListScreen::mounting(request_id));
            app.screen = Screen::List;
            app.status_message = String::from("Loading countries...");
            info!("List screen mounted (request_id={})", request_id);
            Effect::FetchCatalog { request_id }
        }

        Action::CatalogLoaded { request_id, result } => {
            let Some(list) = app.list.as_mut() else {
                debug!("Dropping catalog result {}: list not mounted", request_id);
                return Effect::None;
            };
            if list.pending != Some(request_id) {
                debug!(
                    "Dropping stale catalog result {} (pending={:?})",
                    request_id, list.pending
                );
                return Effect::None;
            }
            list.pending = None;
            list.loading = false;
            list.selected = 0;
            match result {
                Ok(countries) => {
                    info!("Catalog loaded: {} countries", countries.len());
                    list.catalog = countries;
                }
                Err(e) => {
                    warn!("Catalog fetch failed, showing empty list: {}", e);
                    list.catalog = Vec::new();
                }
            }
            app.status_message = format!("{} countries", list.catalog.len());
            Effect::None
        }

        Action::SetQuery(query) => {
            if let Some(list) = app.list.as_mut()
                && app.screen == Screen::List
            {
                list.query = query;
                list.selected = 0;
            }
            Effect::None
        }

        Action::SelectPrevious => update(app, Action::MoveSelection(-1)),
        Action::SelectNext => update(app, Action::MoveSelection(1)),

        Action::MoveSelection(delta) => {
            if let Some(list) = app.list.as_mut()
                && app.screen == Screen::List
            {
                let len = list.filtered().len();
                if len == 0 {
                    list.selected = 0;
                } else {
                    let target = list.selected.saturating_add_signed(delta);
                    list.selected = target.min(len - 1);
                }
            }
            Effect::None
        }

        Action::OpenDetail => {
            if app.screen != Screen::List {
                return Effect::None;
            }
            let Some(params) = app
                .list
                .as_ref()
                .and_then(|list| list.selected_country())
                .map(|country| DetailParams {
                    code: country.cca3.clone(),
                    name: country.common_name().to_string(),
                })
            else {
                return Effect::None;
            };

            let request_id = app.allocate_request_id();
            let name = params.name.clone();
            info!(
                "Detail screen mounted for {} ({}) (request_id={})",
                params.name, params.code, request_id
            );
            app.detail = Some(DetailScreen::mounting(params, request_id));
            app.screen = Screen::Detail;
            app.status_message = String::from("Loading details...");
            Effect::FetchSummary { request_id, name }
        }

        Action::SummaryLoaded { request_id, result } => {
            let Some(detail) = app.detail.as_mut() else {
                debug!("Dropping summary result {}: detail not mounted", request_id);
                return Effect::None;
            };
            if detail.pending != Some(request_id) {
                debug!(
                    "Dropping stale summary result {} (pending={:?})",
                    request_id, detail.pending
                );
                return Effect::None;
            }
            detail.pending = None;
            detail.loading = false;
            match result {
                Ok(summary) => {
                    app.status_message = summary.title.clone();
                    detail.summary = Some(summary);
                }
                Err(e) => {
                    warn!(
                        "Summary fetch for '{}' failed, leaving detail empty: {}",
                        detail.params.name, e
                    );
                    detail.summary = None;
                    app.status_message = detail.params.name.clone();
                }
            }
            Effect::None
        }

        Action::ToggleFavorite => {
            if app.screen != Screen::List {
                return Effect::None;
            }
            let Some(name) = app
                .list
                .as_ref()
                .and_then(|list| list.selected_country())
                .map(|country| country.common_name().to_string())
            else {
                return Effect::None;
            };
            match app.favorites_mut() {
                Ok(favorites) => {
                    let now = favorites.toggle(&name);
                    app.status_message = if now {
                        format!("Added {name} to favorites")
                    } else {
                        format!("Removed {name} from favorites")
                    };
                }
                Err(e) => warn!("Cannot toggle favorite '{}': {}", name, e),
            }
            Effect::None
        }

        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            debug!("Theme switched to {:?}", app.theme);
            Effect::None
        }

        Action::Back => match app.screen {
            Screen::Detail => {
                app.detail = None;
                app.screen = Screen::List;
                app.status_message = app
                    .list
                    .as_ref()
                    .map(|list| format!("{} countries", list.catalog.len()))
                    .unwrap_or_default();
                Effect::Cancel(FetchKind::Summary)
            }
            Screen::List => {
                app.list = None;
                app.screen = Screen::Home;
                app.status_message = String::from("Welcome!");
                Effect::Cancel(FetchKind::Catalog)
            }
            Screen::Home => update(app, Action::Quit),
        },

        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{country, summary, test_app};

    fn app_with_catalog(countries: Vec<Country>) -> App {
        let mut app = test_app();
        let Effect::FetchCatalog { request_id } = update(&mut app, Action::OpenCatalog) else {
            panic!("expected FetchCatalog");
        };
        update(
            &mut app,
            Action::CatalogLoaded {
                request_id,
                result: Ok(countries),
            },
        );
        app
    }

    fn open_detail(app: &mut App) -> u64 {
        match update(app, Action::OpenDetail) {
            Effect::FetchSummary { request_id, .. } => request_id,
            other => panic!("expected FetchSummary, got {other:?}"),
        }
    }

    #[test]
    fn test_open_catalog_starts_loading() {
        let mut app = test_app();
        let effect = update(&mut app, Action::OpenCatalog);
        assert!(matches!(effect, Effect::FetchCatalog { .. }));
        assert_eq!(app.screen, Screen::List);
        let list = app.list.as_ref().unwrap();
        assert!(list.loading);
        assert!(list.catalog.is_empty());
    }

    #[test]
    fn test_catalog_loaded_stores_array_verbatim() {
        let countries = vec![country("PER", "Peru"), country("CHL", "Chile")];
        let app = app_with_catalog(countries.clone());
        let list = app.list.as_ref().unwrap();
        assert!(!list.loading);
        assert_eq!(list.catalog, countries);
        assert_eq!(app.status_message, "2 countries");
    }

    #[test]
    fn test_catalog_failure_clears_loading_and_stays_empty() {
        let mut app = test_app();
        let Effect::FetchCatalog { request_id } = update(&mut app, Action::OpenCatalog) else {
            panic!("expected FetchCatalog");
        };
        assert!(app.list.as_ref().unwrap().loading);

        update(
            &mut app,
            Action::CatalogLoaded {
                request_id,
                result: Err(FetchError::Network("connection refused".to_string())),
            },
        );
        let list = app.list.as_ref().unwrap();
        assert!(!list.loading);
        assert!(list.catalog.is_empty());
    }

    #[test]
    fn test_catalog_unexpected_shape_is_empty() {
        let mut app = test_app();
        let Effect::FetchCatalog { request_id } = update(&mut app, Action::OpenCatalog) else {
            panic!("expected FetchCatalog");
        };
        update(
            &mut app,
            Action::CatalogLoaded {
                request_id,
                result: Err(FetchError::UnexpectedShape("an object".to_string())),
            },
        );
        assert!(app.list.as_ref().unwrap().catalog.is_empty());
    }

    #[test]
    fn test_stale_catalog_result_is_ignored() {
        let mut app = test_app();
        let Effect::FetchCatalog { request_id: first } = update(&mut app, Action::OpenCatalog)
        else {
            panic!("expected FetchCatalog");
        };
        // Leave and come back: a second fetch supersedes the first
        update(&mut app, Action::Back);
        let Effect::FetchCatalog { request_id: second } = update(&mut app, Action::OpenCatalog)
        else {
            panic!("expected FetchCatalog");
        };
        assert_ne!(first, second);

        update(
            &mut app,
            Action::CatalogLoaded {
                request_id: first,
                result: Ok(vec![country("OLD", "Stale")]),
            },
        );
        let list = app.list.as_ref().unwrap();
        assert!(list.loading);
        assert!(list.catalog.is_empty());
    }

    #[test]
    fn test_catalog_result_after_unmount_is_ignored() {
        let mut app = test_app();
        let Effect::FetchCatalog { request_id } = update(&mut app, Action::OpenCatalog) else {
            panic!("expected FetchCatalog");
        };
        assert_eq!(update(&mut app, Action::Back), Effect::Cancel(FetchKind::Catalog));
        update(
            &mut app,
            Action::CatalogLoaded {
                request_id,
                result: Ok(vec![country("PER", "Peru")]),
            },
        );
        assert!(app.list.is_none());
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_set_query_resets_selection() {
        let mut app = app_with_catalog(vec![
            country("PER", "Peru"),
            country("CHL", "Chile"),
            country("ESP", "Spain"),
        ]);
        update(&mut app, Action::SelectNext);
        update(&mut app, Action::SelectNext);
        assert_eq!(app.list.as_ref().unwrap().selected, 2);

        update(&mut app, Action::SetQuery("pe".to_string()));
        let list = app.list.as_ref().unwrap();
        assert_eq!(list.selected, 0);
        let names: Vec<&str> = list.filtered().iter().map(|c| c.common_name()).collect();
        assert_eq!(names, vec!["Peru"]);
    }

    #[test]
    fn test_selection_clamps_to_filtered_view() {
        let mut app = app_with_catalog(vec![country("PER", "Peru"), country("CHL", "Chile")]);
        update(&mut app, Action::SelectPrevious);
        assert_eq!(app.list.as_ref().unwrap().selected, 0);
        update(&mut app, Action::MoveSelection(10));
        assert_eq!(app.list.as_ref().unwrap().selected, 1);
        update(&mut app, Action::MoveSelection(-10));
        assert_eq!(app.list.as_ref().unwrap().selected, 0);
    }

    #[test]
    fn test_open_detail_passes_code_and_name() {
        let mut app = app_with_catalog(vec![country("PER", "Peru"), country("FRA", "France")]);
        update(&mut app, Action::SetQuery("fra".to_string()));
        let effect = update(&mut app, Action::OpenDetail);
        let Effect::FetchSummary { name, .. } = effect else {
            panic!("expected FetchSummary");
        };
        assert_eq!(name, "France");
        assert_eq!(app.screen, Screen::Detail);
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(
            detail.params,
            DetailParams {
                code: "FRA".to_string(),
                name: "France".to_string()
            }
        );
        assert!(detail.loading);
        assert!(detail.summary.is_none());
    }

    #[test]
    fn test_open_detail_with_empty_view_is_noop() {
        let mut app = app_with_catalog(vec![country("PER", "Peru")]);
        update(&mut app, Action::SetQuery("zzz".to_string()));
        assert_eq!(update(&mut app, Action::OpenDetail), Effect::None);
        assert_eq!(app.screen, Screen::List);
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_summary_loaded_stores_summary() {
        let mut app = app_with_catalog(vec![country("FRA", "France")]);
        let request_id = open_detail(&mut app);
        update(
            &mut app,
            Action::SummaryLoaded {
                request_id,
                result: Ok(summary("France", "France is a country.", Some("https://x/france.jpg"))),
            },
        );
        let detail = app.detail.as_ref().unwrap();
        assert!(!detail.loading);
        assert_eq!(detail.summary.as_ref().unwrap().title, "France");
        assert_eq!(app.status_message, "France");
    }

    #[test]
    fn test_summary_failure_leaves_summary_unset() {
        let mut app = app_with_catalog(vec![country("FRA", "France")]);
        let request_id = open_detail(&mut app);
        update(
            &mut app,
            Action::SummaryLoaded {
                request_id,
                result: Err(FetchError::Parse("missing field `extract`".to_string())),
            },
        );
        let detail = app.detail.as_ref().unwrap();
        assert!(!detail.loading);
        assert!(detail.summary.is_none());
    }

    #[test]
    fn test_back_from_detail_keeps_catalog() {
        let mut app = app_with_catalog(vec![country("PER", "Peru"), country("CHL", "Chile")]);
        update(&mut app, Action::SetQuery("ch".to_string()));
        open_detail(&mut app);

        assert_eq!(update(&mut app, Action::Back), Effect::Cancel(FetchKind::Summary));
        assert_eq!(app.screen, Screen::List);
        assert!(app.detail.is_none());
        let list = app.list.as_ref().unwrap();
        assert_eq!(list.catalog.len(), 2);
        assert_eq!(list.query, "ch");
    }

    #[test]
    fn test_stale_summary_after_reopen_is_ignored() {
        let mut app = app_with_catalog(vec![country("PER", "Peru"), country("CHL", "Chile")]);
        let first = open_detail(&mut app);
        update(&mut app, Action::Back);
        update(&mut app, Action::SelectNext);
        let second = open_detail(&mut app);

        update(
            &mut app,
            Action::SummaryLoaded {
                request_id: first,
                result: Ok(summary("Peru", "Old.", None)),
            },
        );
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.params.name, "Chile");
        assert!(detail.summary.is_none());
        assert!(detail.loading);

        update(
            &mut app,
            Action::SummaryLoaded {
                request_id: second,
                result: Ok(summary("Chile", "New.", None)),
            },
        );
        assert_eq!(app.detail.as_ref().unwrap().summary.as_ref().unwrap().title, "Chile");
    }

    #[test]
    fn test_back_from_home_quits() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Back), Effect::Quit);
    }

    #[test]
    fn test_toggle_favorite_on_selected_country() {
        let mut app = app_with_catalog(vec![country("PER", "Peru"), country("CHL", "Chile")]);
        update(&mut app, Action::SelectNext);
        update(&mut app, Action::ToggleFavorite);
        assert!(app.is_favorite("Chile"));
        assert!(!app.is_favorite("Peru"));
        assert_eq!(app.status_message, "Added Chile to favorites");

        update(&mut app, Action::ToggleFavorite);
        assert!(!app.is_favorite("Chile"));
    }

    #[test]
    fn test_toggle_favorite_without_provider_is_noop() {
        let mut app = app_with_catalog(vec![country("PER", "Peru")]);
        app.favorites = None;
        assert_eq!(update(&mut app, Action::ToggleFavorite), Effect::None);
        assert!(app.favorites.is_none());
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = test_app();
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, crate::core::theme::Theme::Dark);
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, crate::core::theme::Theme::Light);
    }

    #[test]
    fn test_list_actions_ignored_on_home() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SetQuery("x".to_string())), Effect::None);
        assert_eq!(update(&mut app, Action::OpenDetail), Effect::None);
        assert!(app.list.is_none());
    }
}
