//! # TitleBar Component
//!
//! Top status bar showing the app name, a status message and the theme
//! toggle hint.
//!
//! ## Responsibilities
//!
//! - Display the app name
//! - Display status messages (e.g. "Loading countries...", "250 countries")
//! - Show the theme toggle label on the right ("Ctrl+T Dark Mode")
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone(), app.theme);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Atlas | 250 countries"`
//! 2. **Default**: `"Atlas"`
//!
//! The toggle hint is dropped first when the terminal is too narrow for both.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

/// Top status bar component.
pub struct TitleBar {
    /// Status message (e.g. "Loading countries...")
    pub status_message: String,
    /// Current theme; the hint names the mode a toggle switches to
    pub theme: Theme,
}

impl TitleBar {
    pub fn new(status_message: String, theme: Theme) -> Self {
        Self {
            status_message,
            theme,
        }
    }

    fn left_text(&self) -> String {
        if self.status_message.is_empty() {
            "Atlas".to_string()
        } else {
            format!("Atlas | {}", self.status_message)
        }
    }

    fn toggle_hint(&self) -> String {
        format!("Ctrl+T {}", self.theme.toggle_label())
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);
        let left = self.left_text();
        let hint = self.toggle_hint();

        let bar = Paragraph::new(Line::from(Span::styled(left.clone(), palette.title_style())))
            .style(palette.base());
        frame.render_widget(bar, area);

        // Only show the hint when it fits next to the status text
        if left.width() + hint.width() + 2 <= area.width as usize {
            let hint = Paragraph::new(Span::styled(hint, palette.muted_style()))
                .alignment(Alignment::Right);
            frame.render_widget(hint, area);
        }
    }
}
