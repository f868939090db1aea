//! Granary - a terminal-based viewer of COVID-19 case rates and food insecurity.
//!
//! Granary joins two country-keyed datasets - confirmed COVID-19 cases as a
//! percent of population, and food-insecurity percentages derived from the
//! Global Food Security Index - and charts the relationship in the terminal.
//! One keypress toggles between a marker plot of every country covered by
//! both sources and a connected line through a configurable set of
//! comparison countries.
//!
//! # Features
//!
//! - All-countries scatter and selected-countries line views with a toggle
//! - Point cursor with a per-country percentage readout
//! - Optional least-squares fit over the selected countries
//! - Country-name search
//! - Gruvbox color themes
//! - Clipboard export of the plotted series
//!
//! # Example
//!
//! ```ignore
//! use granary::data::{build_all_countries, build_selected};
//!
//! let all = build_all_countries(&food.percentages, &cases);
//! let selected = build_selected(&all, &countries)?;
//! println!("{} countries joined, {} selected", all.len(), selected.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod search;
pub mod ui;
pub mod util;

pub use error::{GranaryError, Result};
