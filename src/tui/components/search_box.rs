//! # SearchBox Component
//!
//! Single-line query input above the country list.
//!
//! The query itself lives in core (`ListScreen::query`); this component is a
//! transient wrapper that renders it and turns key events into the next
//! query value. Every edit is emitted immediately, no debouncing.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

pub const PLACEHOLDER: &str = "Search country...";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query changed to this value
    Changed(String),
}

pub struct SearchBox<'a> {
    query: &'a str,
    palette: Palette,
}

impl<'a> SearchBox<'a> {
    pub fn new(query: &'a str, palette: Palette) -> Self {
        Self { query, palette }
    }
}

impl EventHandler for SearchBox<'_> {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                let mut next = self.query.to_string();
                next.push(*c);
                Some(SearchEvent::Changed(next))
            }
            TuiEvent::Paste(text) => {
                // Newlines make no sense in a one-line query
                let cleaned: String = text.chars().filter(|c| !c.is_control()).collect();
                if cleaned.is_empty() {
                    return None;
                }
                Some(SearchEvent::Changed(format!("{}{}", self.query, cleaned)))
            }
            TuiEvent::Backspace => {
                let mut next = self.query.to_string();
                next.pop()?;
                Some(SearchEvent::Changed(next))
            }
            TuiEvent::ClearInput if !self.query.is_empty() => {
                Some(SearchEvent::Changed(String::new()))
            }
            _ => None,
        }
    }
}

impl Component for SearchBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(self.palette.border_style())
            .style(Style::default().bg(self.palette.surface));

        let content = if self.query.is_empty() {
            Span::styled(PLACEHOLDER, self.palette.muted_style())
        } else {
            Span::styled(self.query, Style::default().fg(self.palette.text))
        };

        frame.render_widget(Paragraph::new(content).block(block), area);

        // Cursor sits after the query text, clamped inside the borders
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let query_width = u16::try_from(self.query.width()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(query_width).min(max_x);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}
