//! Application state and logic.

use crate::chart::{ChartState, SeriesView};
use crate::data::{linear_fit, AllCountries, CountryPoint, LinearFit};
use crate::search::SearchState;
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Every country present in both sources, sorted by name for a stable
    /// cursor order.
    pub all_points: Vec<CountryPoint>,
    /// The configured comparison countries, ascending by case rate.
    pub selected_points: Vec<CountryPoint>,
    /// Least-squares fit over the selected points, when one exists.
    pub fit: Option<LinearFit>,
    /// Chart state.
    pub chart: ChartState,
    /// Search state.
    pub search: SearchState,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create the application state from the joined datasets.
    pub fn new(all: AllCountries, selected: Vec<CountryPoint>) -> Self {
        let mut all_points: Vec<CountryPoint> = all
            .into_iter()
            .map(|(name, (confirmed_cases, food_insecurity))| CountryPoint {
                confirmed_cases,
                food_insecurity,
                name,
            })
            .collect();
        all_points.sort_by(|a, b| a.name.cmp(&b.name));

        let fit = linear_fit(
            &selected
                .iter()
                .map(|p| (p.confirmed_cases, p.food_insecurity))
                .collect::<Vec<_>>(),
        );

        Self {
            all_points,
            selected_points: selected,
            fit,
            chart: ChartState::new(),
            search: SearchState::new(),
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        }
    }

    /// Get the points of the visible series.
    pub fn active_points(&self) -> &[CountryPoint] {
        match self.chart.view {
            SeriesView::AllCountries => &self.all_points,
            SeriesView::Selected => &self.selected_points,
        }
    }

    /// Get the highlighted point.
    pub fn current_point(&self) -> Option<&CountryPoint> {
        self.active_points().get(self.chart.cursor)
    }

    /// Flip between the all-countries and selected-countries series.
    pub fn toggle_view(&mut self) {
        self.chart.toggle_view();
        self.search.cancel();
        self.status = format!("View: {}", self.chart.view.name());
    }

    /// Toggle the fit line over the selected series.
    pub fn toggle_fit(&mut self) {
        if self.chart.view != SeriesView::Selected {
            self.status = "Fit only available for selected countries".to_string();
            return;
        }
        if self.fit.is_none() {
            self.status = "No fit available for this data".to_string();
            return;
        }
        self.chart.toggle_fit();
        self.status = if self.chart.show_fit {
            "Fit: ON".to_string()
        } else {
            "Fit: OFF".to_string()
        };
    }

    /// Move the point cursor left.
    pub fn cursor_left(&mut self) {
        self.chart.cursor_left();
    }

    /// Move the point cursor right.
    pub fn cursor_right(&mut self) {
        let len = self.active_points().len();
        self.chart.cursor_right(len);
    }

    /// Jump to the first point.
    pub fn cursor_first(&mut self) {
        self.chart.cursor_first();
    }

    /// Jump to the last point.
    pub fn cursor_last(&mut self) {
        let len = self.active_points().len();
        self.chart.cursor_last(len);
    }

    /// Submit the search buffer and jump to the first match.
    pub fn submit_search(&mut self) {
        self.search.submit();
        match self.chart.view {
            SeriesView::AllCountries => self.search.perform_search(&self.all_points),
            SeriesView::Selected => self.search.perform_search(&self.selected_points),
        }
        if let Some(idx) = self.search.current_match_point() {
            self.chart.cursor = idx;
        }
    }

    /// Jump to the next search match.
    pub fn next_match(&mut self) {
        self.search.next_match();
        if let Some(idx) = self.search.current_match_point() {
            self.chart.cursor = idx;
        }
    }

    /// Jump to the previous search match.
    pub fn prev_match(&mut self) {
        self.search.prev_match();
        if let Some(idx) = self.search.current_match_point() {
            self.chart.cursor = idx;
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the visible series to the clipboard as a table.
    pub fn copy_series(&mut self) {
        let result = util::copy_series_table(self.active_points(), self.chart.view.name());
        self.status = match result {
            Ok(_) => "Table copied!".to_string(),
            Err(e) => format!("Copy failed: {}", e),
        };
    }

    /// Copy the highlighted point to the clipboard.
    pub fn copy_point(&mut self) {
        let Some(point) = self.current_point() else {
            self.status = "No point selected".to_string();
            return;
        };
        let name = point.name.clone();
        self.status = match util::copy_point_info(point) {
            Ok(_) => format!("Copied {}!", name),
            Err(e) => format!("Copy failed: {}", e),
        };
    }

    /// Show the key help in the status bar.
    pub fn show_help(&mut self) {
        self.status =
            "Help: q=quit, Tab=series, h/l=point, /=search, f=fit, c=copy table, y=copy point, T=theme"
                .to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut all = AllCountries::new();
        all.insert("Canada".to_string(), (3.2, 15.0));
        all.insert("Japan".to_string(), (1.1, 8.0));
        all.insert("Brazil".to_string(), (3.6, 32.3));

        let selected = vec![
            CountryPoint {
                confirmed_cases: 1.1,
                food_insecurity: 8.0,
                name: "Japan".to_string(),
            },
            CountryPoint {
                confirmed_cases: 3.2,
                food_insecurity: 15.0,
                name: "Canada".to_string(),
            },
        ];

        App::new(all, selected)
    }

    #[test]
    fn all_points_are_sorted_by_name() {
        let app = app();

        let order: Vec<&str> = app.all_points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["Brazil", "Canada", "Japan"]);
    }

    #[test]
    fn starts_on_all_countries_with_fit_hidden() {
        let app = app();

        assert_eq!(app.chart.view, SeriesView::AllCountries);
        assert!(!app.chart.show_fit);
        assert_eq!(app.active_points().len(), 3);
    }

    #[test]
    fn toggle_switches_active_series_and_back() {
        let mut app = app();

        app.toggle_view();
        assert_eq!(app.active_points().len(), 2);
        assert_eq!(app.status, "View: Selected Countries");

        app.toggle_view();
        assert_eq!(app.active_points().len(), 3);
        assert_eq!(app.status, "View: All Countries");
    }

    #[test]
    fn fit_is_confined_to_selected_view() {
        let mut app = app();

        app.toggle_fit();
        assert!(!app.chart.show_fit);
        assert_eq!(app.status, "Fit only available for selected countries");

        app.toggle_view();
        app.toggle_fit();
        assert!(app.chart.show_fit);
        assert_eq!(app.status, "Fit: ON");
    }

    #[test]
    fn search_moves_cursor_to_match() {
        let mut app = app();

        app.search.start();
        for c in "japan".chars() {
            app.search.input(c);
        }
        app.submit_search();

        assert_eq!(app.current_point().map(|p| p.name.as_str()), Some("Japan"));
    }

    #[test]
    fn fit_exists_for_two_selected_points() {
        let app = app();
        assert!(app.fit.is_some());
    }
}
