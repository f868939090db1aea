//! User interface rendering.

pub mod formatters;

mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    crate::chart::ui::draw_chart(f, chunks[0], app, &colors);
    status_bar::draw_status(f, chunks[1], &app.status, &app.search, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app.search.is_active(), &colors);
}
