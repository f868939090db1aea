//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    search_active: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if search_active {
        "Enter:search | Esc:cancel | Type to search"
    } else {
        "q:quit | Tab:series | h/l:point | /:search | n/N:next/prev | f:fit | c/y:copy | T:theme | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.fg).bg(colors.bg));

    f.render_widget(paragraph, area);
}
