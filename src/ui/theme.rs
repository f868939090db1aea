//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub fg: Color,
    /// Border color.
    pub border: Color,
    /// Accent color for titles and readouts.
    pub accent: Color,
    /// All-countries marker color.
    pub scatter: Color,
    /// Selected-countries line color.
    pub line: Color,
    /// Fit line color.
    pub fit: Color,
    /// Highlighted point color.
    pub cursor: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                fg: Color::Rgb(235, 219, 178),
                border: Color::Rgb(102, 92, 84),
                accent: Color::Rgb(250, 189, 47),
                scatter: Color::Rgb(131, 165, 152),
                line: Color::Rgb(142, 192, 124),
                fit: Color::Rgb(251, 73, 52),
                cursor: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                fg: Color::Rgb(60, 56, 54),
                border: Color::Rgb(213, 196, 161),
                accent: Color::Rgb(181, 118, 20),
                scatter: Color::Rgb(7, 102, 120),
                line: Color::Rgb(66, 123, 88),
                fit: Color::Rgb(157, 0, 6),
                cursor: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }
}
