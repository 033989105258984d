//! # CountryList Component
//!
//! Scrollable cards for the filtered catalog.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState` (ratatui scroll offset)
//! - `CountryList` is created each frame with borrowed props
//!
//! Each card is three lines:
//!
//! ```text
//! ★ Peru                                    PER
//!   Population: 32,971,846
//!   Continent: South America
//! ```
//!
//! Flags are images in the upstream data; the terminal can't show them, so
//! the selected card gets a fourth line with the flag URL instead.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::favorites::Favorites;
use crate::remote::{Country, format_population};
use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;
use crate::tui::palette::Palette;

/// Persistent state for the list.
#[derive(Default)]
pub struct CountryListState {
    pub list_state: ListState,
}

impl CountryListState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Transient render wrapper for the country list.
pub struct CountryList<'a> {
    state: &'a mut CountryListState,
    countries: Vec<&'a Country>,
    selected: usize,
    loading: bool,
    favorites: Option<&'a Favorites>,
    palette: Palette,
    spinner: &'a str,
}

impl<'a> CountryList<'a> {
    pub fn new(
        state: &'a mut CountryListState,
        countries: Vec<&'a Country>,
        selected: usize,
        loading: bool,
        favorites: Option<&'a Favorites>,
        palette: Palette,
        spinner: &'a str,
    ) -> Self {
        Self {
            state,
            countries,
            selected,
            loading,
            favorites,
            palette,
            spinner,
        }
    }

    fn is_favorite(&self, country: &Country) -> bool {
        self.favorites
            .is_some_and(|f| f.is_favorite(country.common_name()))
    }

    fn card(&self, country: &Country, is_selected: bool, width: usize) -> ListItem<'static> {
        let marker = if self.is_favorite(country) { "★ " } else { "  " };
        let code = format!(" {}", country.cca3);
        let name_width = width
            .saturating_sub(marker.width())
            .saturating_sub(code.width());
        let name = truncate_to_width(country.common_name(), name_width);
        let padding = name_width.saturating_sub(name.width());

        let name_style = if is_selected {
            self.palette.selected_style()
        } else {
            self.palette.title_style()
        };
        let info_style = if is_selected {
            self.palette.selected_style().remove_modifier(Modifier::BOLD)
        } else {
            self.palette.muted_style()
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(marker, name_style.fg(self.palette.accent)),
                Span::styled(name, name_style),
                Span::styled(" ".repeat(padding), name_style),
                Span::styled(code, info_style),
            ]),
            Line::from(Span::styled(
                format!("  Population: {}", format_population(country.population)),
                info_style,
            )),
            Line::from(Span::styled(
                format!("  Continent: {}", country.continents_label()),
                info_style,
            )),
        ];

        if is_selected && let Some(url) = country.flag_url() {
            lines.push(Line::from(Span::styled(
                truncate_to_width(&format!("  Flag: {url}"), width),
                info_style,
            )));
        }

        ListItem::new(lines)
    }
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.loading {
            render_centered(
                frame,
                area,
                format!("{} Loading countries...", self.spinner),
                Style::default().fg(self.palette.text),
            );
            return;
        }

        if self.countries.is_empty() {
            render_centered(
                frame,
                area,
                "No countries to show".to_string(),
                self.palette.muted_style(),
            );
            self.state.list_state.select(None);
            return;
        }

        let selected = self.selected.min(self.countries.len() - 1);
        let width = area.width as usize;
        let items: Vec<ListItem> = self
            .countries
            .iter()
            .enumerate()
            .map(|(i, country)| self.card(country, i == selected, width))
            .collect();

        self.state.list_state.select(Some(selected));
        let list = List::new(items).style(self.palette.base());
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn render_centered(frame: &mut Frame, area: Rect, text: String, style: Style) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center),
        row,
    );
}
