//! Confirmed-case percentages loaded from the case-count dataset.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GranaryError, Result};

#[derive(Debug, Deserialize)]
struct CaseRecord {
    country: String,
    confirmed_cases: f64,
    population: f64,
}

/// Load confirmed COVID-19 cases as a percent of population per country.
///
/// Expects a CSV with `country,confirmed_cases,population` columns. Rows
/// with a non-positive population are skipped.
pub fn load_confirmed_cases(path: &Path) -> Result<HashMap<String, f64>> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| GranaryError::parse_data(path, e.to_string()))?;

    let mut cases = HashMap::new();
    for record in reader.deserialize() {
        let record: CaseRecord =
            record.map_err(|e| GranaryError::parse_data(path, e.to_string()))?;
        if record.population <= 0.0 {
            continue;
        }
        cases.insert(
            record.country,
            percentage(record.confirmed_cases, record.population),
        );
    }

    if cases.is_empty() {
        return Err(GranaryError::empty_dataset(path));
    }

    tracing::info!("Loaded confirmed cases for {} countries", cases.len());
    Ok(cases)
}

/// Percentage of `numerator` over `denominator`, rounded to two decimals.
fn percentage(numerator: f64, denominator: f64) -> f64 {
    (numerator / denominator * 100.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn computes_case_percentages() {
        let csv = write_csv(
            "country,confirmed_cases,population\n\
             Canada,589000,38005238\n\
             Japan,230000,126476461\n",
        );

        let cases = load_confirmed_cases(csv.path()).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases["Canada"], 1.55);
        assert_eq!(cases["Japan"], 0.18);
    }

    #[test]
    fn skips_rows_without_population() {
        let csv = write_csv(
            "country,confirmed_cases,population\n\
             Atlantis,100,0\n\
             Canada,589000,38005238\n",
        );

        let cases = load_confirmed_cases(csv.path()).unwrap();

        assert_eq!(cases.len(), 1);
        assert!(!cases.contains_key("Atlantis"));
    }

    #[test]
    fn rejects_empty_dataset() {
        let csv = write_csv("country,confirmed_cases,population\n");

        let err = load_confirmed_cases(csv.path()).unwrap_err();

        assert!(matches!(err, GranaryError::EmptyDataset { .. }));
    }

    #[test]
    fn rejects_malformed_rows() {
        let csv = write_csv(
            "country,confirmed_cases,population\n\
             Canada,not-a-number,38005238\n",
        );

        let err = load_confirmed_cases(csv.path()).unwrap_err();

        assert!(matches!(err, GranaryError::ParseData { .. }));
    }

    #[test]
    fn percentage_rounds_to_two_decimals() {
        assert_eq!(percentage(90.0, 100.0), 90.0);
        assert_eq!(percentage(589000.0, 38005238.0), 1.55);
    }
}
