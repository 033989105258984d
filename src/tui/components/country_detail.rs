//! # CountryDetail Component
//!
//! Summary view for one country: image line, title, short description and
//! the wrapped extract. While the fetch is in flight a loading line is shown;
//! when it failed the body stays empty.
//!
//! `CountryDetailState` (scroll offset) persists in `TuiState` and is reset
//! whenever a new detail screen mounts.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::DetailScreen;
use crate::remote::Summary;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

const PAGE_SCROLL: u16 = 10;

/// Scroll state for the detail body.
#[derive(Debug, Default)]
pub struct CountryDetailState {
    pub scroll: u16,
    /// Largest valid offset as of the last render.
    pub max_scroll: u16,
}

impl CountryDetailState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for CountryDetailState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        let next = match event {
            TuiEvent::CursorUp => self.scroll.saturating_sub(1),
            TuiEvent::CursorDown => self.scroll.saturating_add(1),
            TuiEvent::PageUp => self.scroll.saturating_sub(PAGE_SCROLL),
            TuiEvent::PageDown => self.scroll.saturating_add(PAGE_SCROLL),
            _ => return None,
        };
        self.scroll = next.min(self.max_scroll);
        Some(())
    }
}

/// Builds the body lines for a summary wrapped to `width` columns.
fn summary_lines(summary: &Summary, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let width = (width as usize).max(1);
    let mut lines = Vec::new();

    if let Some(thumb) = &summary.thumbnail {
        let mut spans = vec![
            Span::styled("Image: ", palette.muted_style()),
            Span::styled(
                thumb.source.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ];
        if let Some((w, h)) = thumb.dimensions() {
            spans.push(Span::styled(format!(" ({w}×{h})"), palette.muted_style()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        summary.title.clone(),
        palette.title_style(),
    )));

    if let Some(description) = summary.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(Span::styled(
            description.to_string(),
            palette.muted_style().add_modifier(Modifier::ITALIC),
        )));
    }

    lines.push(Line::default());

    let text_style = Style::default().fg(palette.text);
    for paragraph in summary.extract.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(Line::default());
            continue;
        }
        for wrapped in textwrap::wrap(paragraph, width) {
            lines.push(Line::from(Span::styled(wrapped.into_owned(), text_style)));
        }
    }

    lines
}

/// Transient render wrapper for the detail screen body.
pub struct CountryDetail<'a> {
    state: &'a mut CountryDetailState,
    detail: &'a DetailScreen,
    palette: Palette,
    spinner: &'a str,
}

impl<'a> CountryDetail<'a> {
    pub fn new(
        state: &'a mut CountryDetailState,
        detail: &'a DetailScreen,
        palette: Palette,
        spinner: &'a str,
    ) -> Self {
        Self {
            state,
            detail,
            palette,
            spinner,
        }
    }
}

impl Component for CountryDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.detail.loading {
            let [row] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(area);
            frame.render_widget(
                Paragraph::new(format!("{} Loading details...", self.spinner))
                    .style(Style::default().fg(self.palette.text))
                    .alignment(Alignment::Center),
                row,
            );
            return;
        }

        let Some(summary) = &self.detail.summary else {
            self.state.scroll = 0;
            self.state.max_scroll = 0;
            return;
        };

        let lines = summary_lines(summary, area.width, &self.palette);
        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        self.state.max_scroll = total.saturating_sub(area.height);
        self.state.scroll = self.state.scroll.min(self.state.max_scroll);

        let body = Paragraph::new(lines)
            .style(self.palette.base())
            .scroll((self.state.scroll, 0));
        frame.render_widget(body, area);
    }
}
