use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryDetail, CountryList, LandingPage, SearchBox, TitleBar};
use crate::tui::palette::Palette;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame_index: usize) -> &'static str {
    SPINNER_FRAMES[frame_index % SPINNER_FRAMES.len()]
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let palette = Palette::for_theme(app.theme);
    let area = frame.area();

    // Paint the theme background first so every screen inherits it
    frame.render_widget(Block::default().style(palette.base()), area);

    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(area);

    TitleBar::new(app.status_message.clone(), app.theme).render(frame, title_area);

    match app.screen {
        Screen::Home => LandingPage::new(palette).render(frame, body_area),
        Screen::List => draw_list(frame, app, tui, body_area, palette, spinner_frame),
        Screen::Detail => draw_detail(frame, app, tui, body_area, palette, spinner_frame),
    }

    frame.render_widget(
        Paragraph::new(Span::styled(help_text(app.screen), palette.muted_style())).centered(),
        help_area,
    );
}

fn draw_list(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    area: Rect,
    palette: Palette,
    spinner_frame: usize,
) {
    let Some(list) = &app.list else {
        return;
    };
    let [search_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    if !list.loading {
        SearchBox::new(&list.query, palette).render(frame, search_area);
    }

    CountryList::new(
        &mut tui.country_list,
        list.filtered(),
        list.selected,
        list.loading,
        app.favorites().ok(),
        palette,
        spinner(spinner_frame),
    )
    .render(frame, list_area);
}

fn draw_detail(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    area: Rect,
    palette: Palette,
    spinner_frame: usize,
) {
    let Some(detail) = &app.detail else {
        return;
    };
    let [back_area, _, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled("← Back (Esc)", palette.title_style())),
        back_area,
    );

    CountryDetail::new(
        &mut tui.country_detail,
        detail,
        palette,
        spinner(spinner_frame),
    )
    .render(frame, body_area);
}

fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => " Enter Country list  Esc Quit  Ctrl+T Theme ",
        Screen::List => " Type to search  ↑↓ Select  Enter Details  Ctrl+F Favorite  Esc Back ",
        Screen::Detail => " ↑↓ Scroll  Esc Back  Ctrl+T Theme ",
    }
}
