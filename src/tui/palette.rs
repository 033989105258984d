//! Colors for each theme: near-black `#121212` background in dark mode,
//! off-white `#f9f9f9` in light mode.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xf9, 0xf9, 0xf9),
                surface: Color::Rgb(0xff, 0xff, 0xff),
                text: Color::Rgb(0x00, 0x00, 0x00),
                muted: Color::Rgb(0x55, 0x55, 0x55),
                border: Color::Rgb(0xcc, 0xcc, 0xcc),
                accent: Color::Rgb(0xff, 0xa5, 0x00),
                highlight: Color::Rgb(0xdd, 0xdd, 0xdd),
            },
            Theme::Dark => Self {
                background: Color::Rgb(0x12, 0x12, 0x12),
                surface: Color::Rgb(0x1e, 0x1e, 0x1e),
                text: Color::Rgb(0xff, 0xff, 0xff),
                muted: Color::Rgb(0xbb, 0xbb, 0xbb),
                border: Color::Rgb(0x44, 0x44, 0x44),
                accent: Color::Rgb(0xff, 0xa5, 0x00),
                highlight: Color::Rgb(0x33, 0x33, 0x33),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}
