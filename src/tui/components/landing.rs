//! # Landing Page Component
//!
//! The home screen: a greeting and the single way forward into the list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct LandingPage {
    palette: Palette,
}

impl LandingPage {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Welcome 👋",
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "Press Enter to go to the country list",
                Style::default().fg(self.palette.text),
            )),
            Line::from(Span::styled(
                format!("Atlas v{}", env!("CARGO_PKG_VERSION")),
                self.palette.muted_style(),
            )),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, center);
    }
}
