//! Numeric-to-string helpers for the CLI printers and JSON summaries.

/// "47.3%" style percentage with one decimal place.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Fixed-decimal rendering with the given number of digits.
pub fn format_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

/// xG values read best with two decimals ("0.08", "0.52").
pub fn format_xg(value: f64) -> String {
    format_fixed(value, 2)
}
