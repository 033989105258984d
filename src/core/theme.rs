use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Color scheme for every screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle control: names the mode you switch *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }

    /// Parses "light"/"dark" case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        <Theme as ValueEnum>::from_str(value.trim(), true).ok()
    }
}
