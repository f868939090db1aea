//! Food-insecurity percentages derived from the Global Food Security Index.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::error::{GranaryError, Result};

/// Food-insecurity percentages per country.
///
/// The index feed records food *security* scores out of 100; the insecurity
/// percentage is the remainder, rounded to one decimal place.
#[derive(Debug, Clone, Default)]
pub struct FoodInsecurity {
    /// Country name to food-insecurity percentage (0-100).
    pub percentages: HashMap<String, f64>,
}

impl FoodInsecurity {
    /// Load the percentages from an exported food-security JSON feed.
    ///
    /// The feed is an array of single-entry objects mapping a country name
    /// to its food-security score, with scores stored as strings.
    pub fn from_json(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| GranaryError::file_open(path, e))?;
        let entries: Vec<HashMap<String, String>> = serde_json::from_reader(file)
            .map_err(|e| GranaryError::parse_data(path, e.to_string()))?;

        let mut percentages = HashMap::new();
        for entry in entries {
            for (country, score) in entry {
                let score: f64 = score.trim().parse().map_err(|_| {
                    GranaryError::parse_data(path, format!("invalid score for {}", country))
                })?;
                percentages.insert(country, round1(100.0 - score));
            }
        }

        if percentages.is_empty() {
            return Err(GranaryError::empty_dataset(path));
        }

        tracing::info!("Loaded food insecurity for {} countries", percentages.len());
        Ok(Self { percentages })
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_feed(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn converts_security_scores_to_insecurity() {
        let feed = write_feed(r#"[{"Canada": "78.0"}, {"Ghana": "51.2"}]"#);

        let fi = FoodInsecurity::from_json(feed.path()).unwrap();

        assert_eq!(fi.percentages.len(), 2);
        assert_eq!(fi.percentages["Canada"], 22.0);
        assert_eq!(fi.percentages["Ghana"], 48.8);
    }

    #[test]
    fn rounds_to_one_decimal() {
        let feed = write_feed(r#"[{"Japan": "79.27"}]"#);

        let fi = FoodInsecurity::from_json(feed.path()).unwrap();

        assert_eq!(fi.percentages["Japan"], 20.7);
    }

    #[test]
    fn rejects_empty_feed() {
        let feed = write_feed("[]");

        let err = FoodInsecurity::from_json(feed.path()).unwrap_err();

        assert!(matches!(err, GranaryError::EmptyDataset { .. }));
    }

    #[test]
    fn rejects_unparseable_score() {
        let feed = write_feed(r#"[{"Canada": "n/a"}]"#);

        let err = FoodInsecurity::from_json(feed.path()).unwrap_err();

        assert!(matches!(err, GranaryError::ParseData { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FoodInsecurity::from_json(Path::new("/no/such/feed.json")).unwrap_err();

        assert!(matches!(err, GranaryError::FileOpen { .. }));
    }
}
