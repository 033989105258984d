//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values and executes the
//! effects `update()` returns (spawning and aborting fetch tasks).
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Lifetime
//!
//! Each fetch runs as a tokio task and reports back through an action
//! channel. Its `AbortHandle` is kept in `InFlight`; when the owning screen
//! unmounts (`Effect::Cancel`) the task is aborted. Results that still slip
//! through are dropped by the reducer's request id check.
//!
//! ## Redraw Strategy
//!
//! - **Loading** (a spinner is visible): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
mod components;
mod event;
mod palette;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, FetchKind, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::remote::{
    CatalogSource, FetchError, RestCountriesClient, SummarySource, WikipediaClient,
    build_http_client,
};
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryDetailState, CountryListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::palette::Palette;

/// Rows moved by PageUp/PageDown in the list.
const LIST_PAGE: isize = 10;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub country_list: CountryListState,
    pub country_detail: CountryDetailState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            country_list: CountryListState::new(),
            country_detail: CountryDetailState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Abort handles for the fetches currently running, one slot per screen.
#[derive(Default)]
struct InFlight {
    catalog: Option<AbortHandle>,
    summary: Option<AbortHandle>,
}

impl InFlight {
    fn slot(&mut self, kind: FetchKind) -> &mut Option<AbortHandle> {
        match kind {
            FetchKind::Catalog => &mut self.catalog,
            FetchKind::Summary => &mut self.summary,
        }
    }

    fn replace(&mut self, kind: FetchKind, handle: AbortHandle) {
        if let Some(previous) = self.slot(kind).replace(handle) {
            previous.abort();
        }
    }

    fn cancel(&mut self, kind: FetchKind) {
        if let Some(handle) = self.slot(kind).take() {
            debug!("Aborting in-flight {:?} fetch", kind);
            handle.abort();
        }
    }

    fn cancel_all(&mut self) {
        self.cancel(FetchKind::Catalog);
        self.cancel(FetchKind::Summary);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build both remote sources from the resolved config.
pub fn build_sources(
    config: &ResolvedConfig,
) -> Result<(Arc<dyn CatalogSource>, Arc<dyn SummarySource>), FetchError> {
    let client = build_http_client(&config.http)?;
    let catalog = RestCountriesClient::new(config.countries_url.clone(), client.clone());
    let summary = WikipediaClient::new(config.summary_url.clone(), client);
    Ok((Arc::new(catalog), Arc::new(summary)))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let (catalog_source, summary_source) =
        build_sources(&config).map_err(std::io::Error::other)?;
    let mut app = App::new(catalog_source, summary_source, config.theme);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut in_flight = InFlight::default();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        let animating = is_loading(&app);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = dispatch(&app, &mut tui, event) {
                let effect = update(&mut app, action);
                if apply_effect(effect, &app, &mut tui, &mut in_flight, &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &app, &mut tui, &mut in_flight, &tx) {
                should_quit = true;
            }
        }
    }

    in_flight.cancel_all();
    ratatui::restore();
    info!("Atlas shut down");
    Ok(())
}

fn is_loading(app: &App) -> bool {
    match app.screen {
        Screen::Home => false,
        Screen::List => app.list.as_ref().is_some_and(|l| l.loading),
        Screen::Detail => app.detail.as_ref().is_some_and(|d| d.loading),
    }
}

/// Translates a terminal event into a core action for the current screen.
/// Purely presentational events (detail scrolling) are handled in place.
fn dispatch(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::ToggleTheme => return Some(Action::ToggleTheme),
        TuiEvent::Resize => return None,
        _ => {}
    }

    match app.screen {
        Screen::Home => match event {
            TuiEvent::Submit => Some(Action::OpenCatalog),
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::Back),
            _ => None,
        },
        Screen::List => {
            let list = app.list.as_ref()?;
            if matches!(event, TuiEvent::Escape) {
                return Some(Action::Back);
            }
            if list.loading {
                return None;
            }
            match event {
                TuiEvent::Submit => Some(Action::OpenDetail),
                TuiEvent::CursorUp => Some(Action::SelectPrevious),
                TuiEvent::CursorDown => Some(Action::SelectNext),
                TuiEvent::PageUp => Some(Action::MoveSelection(-LIST_PAGE)),
                TuiEvent::PageDown => Some(Action::MoveSelection(LIST_PAGE)),
                TuiEvent::ToggleFavorite => Some(Action::ToggleFavorite),
                other => {
                    let palette = Palette::for_theme(app.theme);
                    match SearchBox::new(&list.query, palette).handle_event(&other) {
                        Some(SearchEvent::Changed(query)) => Some(Action::SetQuery(query)),
                        None => None,
                    }
                }
            }
        }
        Screen::Detail => match event {
            TuiEvent::Escape | TuiEvent::Backspace => Some(Action::Back),
            other => {
                tui.country_detail.handle_event(&other);
                None
            }
        },
    }
}

/// Executes an effect. Returns true when the app should quit.
fn apply_effect(
    effect: Effect,
    app: &App,
    tui: &mut TuiState,
    in_flight: &mut InFlight,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::FetchCatalog { request_id } => {
            tui.country_list = CountryListState::new();
            let handle = spawn_catalog_fetch(app.catalog_source.clone(), request_id, tx.clone());
            in_flight.replace(FetchKind::Catalog, handle);
            false
        }
        Effect::FetchSummary { request_id, name } => {
            tui.country_detail = CountryDetailState::new();
            let handle =
                spawn_summary_fetch(app.summary_source.clone(), request_id, name, tx.clone());
            in_flight.replace(FetchKind::Summary, handle);
            false
        }
        Effect::Cancel(kind) => {
            in_flight.cancel(kind);
            false
        }
    }
}

fn spawn_catalog_fetch(
    source: Arc<dyn CatalogSource>,
    request_id: u64,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!(
        "Spawning catalog fetch from {} (request_id={})",
        source.name(),
        request_id
    );
    let handle = tokio::spawn(async move {
        let result = source.fetch_countries().await;
        if tx
            .send(Action::CatalogLoaded { request_id, result })
            .is_err()
        {
            warn!("Failed to deliver catalog result {}: receiver dropped", request_id);
        }
    });
    handle.abort_handle()
}

fn spawn_summary_fetch(
    source: Arc<dyn SummarySource>,
    request_id: u64,
    name: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!(
        "Spawning summary fetch for '{}' from {} (request_id={})",
        name,
        source.name(),
        request_id
    );
    let handle = tokio::spawn(async move {
        let result = source.fetch_summary(&name).await;
        if tx
            .send(Action::SummaryLoaded { request_id, result })
            .is_err()
        {
            warn!("Failed to deliver summary result {}: receiver dropped", request_id);
        }
    });
    handle.abort_handle()
}
