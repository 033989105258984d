//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar with status text and theme hint
//! - `LandingPage`: Home screen greeting
//!
//! ### Transient Wrappers over Persistent State
//!
//! - `SearchBox`: Renders the query and turns key events into the next query
//! - `CountryList`: Cards for the filtered catalog (`CountryListState`)
//! - `CountryDetail`: Summary body with scrolling (`CountryDetailState`)
//!
//! Components receive external data as props, never by reaching into
//! `App` directly, so each can be rendered against a `TestBackend` alone.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── landing.rs         (Home screen)
//! ├── search_box.rs      (Query input)
//! ├── country_list.rs    (Filtered catalog)
//! └── country_detail.rs  (Summary view)
//! ```

pub mod country_detail;
pub mod country_list;
pub mod landing;
pub mod search_box;
mod title_bar;

pub use country_detail::{CountryDetail, CountryDetailState};
pub use country_list::{CountryList, CountryListState};
pub use landing::LandingPage;
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to fit within `max_width` terminal columns, adding "..." if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Concatenates every cell symbol of a test buffer.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
