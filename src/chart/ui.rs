//! Chart rendering for the two country series.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::chart::SeriesView;
use crate::ui::formatters::{format_axis_pct, format_cases, format_insecurity};
use crate::ui::ThemeColors;

/// Chart title shared by both views.
const TITLE: &str = "Confirmed COVID-19 Cases vs Food Insecurity";

/// Draw the chart for the visible series.
pub fn draw_chart(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let points = app.active_points();
    if points.is_empty() {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.fg))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    }

    // Plot in fractional coordinates; axis labels convert back to percentages.
    let coords: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.confirmed_cases / 100.0, p.food_insecurity / 100.0))
        .collect();

    let (x_min, x_max) = bounds(coords.iter().map(|&(x, _)| x));
    let (y_min, y_max) = bounds(coords.iter().map(|&(_, y)| y));

    // Fit line evaluated at the data x-values, selected view only.
    let fit_coords: Vec<(f64, f64)> =
        if app.chart.view == SeriesView::Selected && app.chart.show_fit {
            app.fit
                .map(|fit| {
                    points
                        .iter()
                        .map(|p| (p.confirmed_cases / 100.0, fit.y_at(p.confirmed_cases) / 100.0))
                        .collect()
                })
                .unwrap_or_default()
        } else {
            Vec::new()
        };

    let cursor_coord = [coords[app.chart.cursor.min(coords.len() - 1)]];

    let mut datasets = Vec::new();
    match app.chart.view {
        SeriesView::AllCountries => {
            datasets.push(
                Dataset::default()
                    .name("All Countries")
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(colors.scatter))
                    .data(&coords),
            );
        }
        SeriesView::Selected => {
            datasets.push(
                Dataset::default()
                    .name("Data")
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(colors.line))
                    .data(&coords),
            );
            // Marker overlay on top of the line, so the plot reads as
            // lines+markers rather than a bare path.
            datasets.push(
                Dataset::default()
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(colors.line))
                    .data(&coords),
            );
            if !fit_coords.is_empty() {
                datasets.push(
                    Dataset::default()
                        .name("Line of Best Fit")
                        .marker(Marker::Braille)
                        .graph_type(GraphType::Line)
                        .style(Style::default().fg(colors.fit))
                        .data(&fit_coords),
                );
            }
        }
    }

    // Highlighted point drawn last so it sits on top.
    datasets.push(
        Dataset::default()
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(
                Style::default()
                    .fg(colors.cursor)
                    .add_modifier(Modifier::BOLD),
            )
            .data(&cursor_coord),
    );

    let x_axis = Axis::default()
        .title("Confirmed Cases (%)")
        .style(Style::default().fg(colors.fg))
        .bounds([x_min, x_max])
        .labels(vec![
            format_axis_pct(x_min),
            format_axis_pct((x_min + x_max) / 2.0),
            format_axis_pct(x_max),
        ]);

    let y_axis = Axis::default()
        .title("Food Insecurity (%)")
        .style(Style::default().fg(colors.fg))
        .bounds([y_min, y_max])
        .labels(vec![
            format_axis_pct(y_min),
            format_axis_pct((y_min + y_max) / 2.0),
            format_axis_pct(y_max),
        ]);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} - {} ", TITLE, app.chart.view.name()))
        .title_style(Style::default().fg(colors.accent));

    // Hover-style readout for the highlighted country.
    if let Some(point) = app.current_point() {
        block = block.title_bottom(format!(
            " {} | Confirmed Cases: {} | Food Insecurity: {} ",
            point.name,
            format_cases(point.confirmed_cases / 100.0),
            format_insecurity(point.food_insecurity / 100.0)
        ));
    }

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Min/max of `values` with a margin so edge points stay off the border.
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });

    let padding = ((max - min) * 0.1).max(1e-4);
    (min - padding, max + padding)
}
