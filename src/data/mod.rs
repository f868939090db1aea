//! Data loading and shaping.
//!
//! This module loads the two country-keyed source datasets and joins them
//! into the plot-ready series.

mod confirmed_cases;
mod food_insecurity;
mod join;
mod stats;

pub use confirmed_cases::load_confirmed_cases;
pub use food_insecurity::FoodInsecurity;
pub use join::{build_all_countries, build_selected, AllCountries, CountryPoint};
pub use stats::{linear_fit, LinearFit};
