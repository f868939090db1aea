//! Country-name search over the visible series.

use crate::data::CountryPoint;

/// Search state.
#[derive(Debug, Default)]
pub struct SearchState {
    is_active: bool,
    buffer: String,
    query: String,
    matches: Vec<usize>,
    current_match: usize,
}

impl SearchState {
    /// Create a new search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if search input is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Start a search.
    pub fn start(&mut self) {
        self.is_active = true;
        self.buffer.clear();
    }

    /// Add a character to the search buffer.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character from the search buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Submit the search.
    pub fn submit(&mut self) {
        if !self.buffer.is_empty() {
            self.query = self.buffer.clone();
        }
        self.buffer.clear();
        self.is_active = false;
    }

    /// Cancel the search and clear any matches.
    pub fn cancel(&mut self) {
        self.is_active = false;
        self.buffer.clear();
        self.query.clear();
        self.matches.clear();
        self.current_match = 0;
    }

    /// Collect the indices of points whose country name contains the query,
    /// case-insensitively.
    pub fn perform_search(&mut self, points: &[CountryPoint]) {
        self.matches.clear();
        self.current_match = 0;

        if self.query.is_empty() {
            return;
        }

        let query = self.query.to_lowercase();
        for (idx, point) in points.iter().enumerate() {
            if point.name.to_lowercase().contains(&query) {
                self.matches.push(idx);
            }
        }
    }

    /// Get the current match's point index.
    pub fn current_match_point(&self) -> Option<usize> {
        self.matches.get(self.current_match).copied()
    }

    /// Move to the next match.
    pub fn next_match(&mut self) {
        if !self.matches.is_empty() {
            self.current_match = (self.current_match + 1) % self.matches.len();
        }
    }

    /// Move to the previous match.
    pub fn prev_match(&mut self) {
        if !self.matches.is_empty() {
            if self.current_match == 0 {
                self.current_match = self.matches.len() - 1;
            } else {
                self.current_match -= 1;
            }
        }
    }

    /// Get the search buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Get the search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the number of matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Get the current match index.
    pub fn current_match_index(&self) -> usize {
        self.current_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(names: &[&str]) -> Vec<CountryPoint> {
        names
            .iter()
            .map(|name| CountryPoint {
                confirmed_cases: 1.0,
                food_insecurity: 1.0,
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn finds_case_insensitive_substring_matches() {
        let points = points(&["Canada", "United States", "United Kingdom"]);
        let mut search = SearchState::new();

        search.start();
        for c in "united".chars() {
            search.input(c);
        }
        search.submit();
        search.perform_search(&points);

        assert_eq!(search.match_count(), 2);
        assert_eq!(search.current_match_point(), Some(1));
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let points = points(&["Austria", "Australia"]);
        let mut search = SearchState::new();

        search.start();
        for c in "aus".chars() {
            search.input(c);
        }
        search.submit();
        search.perform_search(&points);

        assert_eq!(search.current_match_point(), Some(0));
        search.next_match();
        assert_eq!(search.current_match_point(), Some(1));
        search.next_match();
        assert_eq!(search.current_match_point(), Some(0));
        search.prev_match();
        assert_eq!(search.current_match_point(), Some(1));
    }

    #[test]
    fn cancel_clears_matches() {
        let points = points(&["Canada"]);
        let mut search = SearchState::new();

        search.start();
        search.input('c');
        search.submit();
        search.perform_search(&points);
        assert_eq!(search.match_count(), 1);

        search.cancel();
        assert_eq!(search.match_count(), 0);
        assert!(search.query().is_empty());
    }
}
