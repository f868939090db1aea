//! Shared formatting utilities for UI components.
//!
//! Series coordinates are fractions (raw percentage / 100); these helpers
//! turn them back into percentage text for display.

/// Format a fractional confirmed-cases rate as a percentage, two decimals.
pub fn format_cases(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Format a fractional food-insecurity rate as a percentage, one decimal.
pub fn format_insecurity(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Format an axis label with smart precision.
pub fn format_axis_pct(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "?".to_string();
    }
    let pct = fraction * 100.0;
    let abs = pct.abs();
    if abs >= 100.0 {
        format!("{:.0}%", pct)
    } else if abs >= 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}
