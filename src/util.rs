//! Utility functions for Granary.

use unicode_width::UnicodeWidthStr;

use crate::clipboard;
use crate::data::CountryPoint;
use crate::error::Result;
use crate::ui::formatters::{format_cases, format_insecurity};

/// Copy the plotted series to the clipboard as an aligned table.
pub fn copy_series_table(points: &[CountryPoint], title: &str) -> Result<()> {
    clipboard::copy_to_clipboard(&series_table_text(points, title))
}

/// Copy one country's readout to the clipboard.
pub fn copy_point_info(point: &CountryPoint) -> Result<()> {
    clipboard::copy_to_clipboard(&point_text(point))
}

fn series_table_text(points: &[CountryPoint], title: &str) -> String {
    let mut text = format!("Confirmed COVID-19 Cases vs Food Insecurity: {}\n", title);
    text.push_str(&"=".repeat(60));
    text.push_str("\n\n");

    let name_width = points
        .iter()
        .map(|p| p.name.width())
        .max()
        .unwrap_or(0)
        .max("Country".width());

    text.push_str(&format!(
        "{}  {:>15}  {:>15}\n",
        pad("Country", name_width),
        "Confirmed Cases",
        "Food Insecurity"
    ));

    for point in points {
        text.push_str(&format!(
            "{}  {:>15}  {:>15}\n",
            pad(&point.name, name_width),
            format_cases(point.confirmed_cases / 100.0),
            format_insecurity(point.food_insecurity / 100.0)
        ));
    }

    text
}

fn point_text(point: &CountryPoint) -> String {
    format!(
        "Country: {}\nConfirmed Cases: {}\nFood Insecurity: {}\n",
        point.name,
        format_cases(point.confirmed_cases / 100.0),
        format_insecurity(point.food_insecurity / 100.0)
    )
}

/// Right-pad to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let deficit = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(deficit))
}
