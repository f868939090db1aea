//! Joining the country-keyed source mappings into plot-ready datasets.

use std::collections::HashMap;

use crate::error::{GranaryError, Result};

/// The all-countries dataset: country name to
/// (confirmed-case percentage, food-insecurity percentage).
pub type AllCountries = HashMap<String, (f64, f64)>;

/// One plotted country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryPoint {
    /// Confirmed COVID-19 cases as a percent of population (0-100).
    pub confirmed_cases: f64,
    /// Percent of the population that is food insecure (0-100).
    pub food_insecurity: f64,
    /// Country display name.
    pub name: String,
}

/// Pair the confirmed-case and food-insecurity percentages for every country
/// present in both mappings.
///
/// Countries covered by only one source are dropped; that is filtering, not
/// an error. Callers must supply non-empty mappings.
pub fn build_all_countries(
    food_insecurity: &HashMap<String, f64>,
    confirmed_cases: &HashMap<String, f64>,
) -> AllCountries {
    let mut all = AllCountries::new();

    for (country, &insecurity) in food_insecurity {
        if let Some(&cases) = confirmed_cases.get(country) {
            all.insert(country.clone(), (cases, insecurity));
        }
    }

    all
}

/// Pull the countries named in `countries` out of the joined dataset, sorted
/// ascending by confirmed cases, then food insecurity, then name.
///
/// Unlike the all-countries join, a country missing here is an error: the
/// comparison list names countries that must be present, and a miss means
/// the configuration does not match the data.
pub fn build_selected(all: &AllCountries, countries: &[String]) -> Result<Vec<CountryPoint>> {
    let mut points = Vec::with_capacity(countries.len());

    for name in countries {
        let &(confirmed_cases, food_insecurity) = all
            .get(name)
            .ok_or_else(|| GranaryError::country_not_found(name.clone()))?;
        points.push(CountryPoint {
            confirmed_cases,
            food_insecurity,
            name: name.clone(),
        });
    }

    points.sort_by(|a, b| {
        a.confirmed_cases
            .total_cmp(&b.confirmed_cases)
            .then(a.food_insecurity.total_cmp(&b.food_insecurity))
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(points)
}
