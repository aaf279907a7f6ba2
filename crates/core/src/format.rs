//! Text rendering of snapshot fields for the results panel.

/// Sentinel shown when the previous window held nothing.
pub const EMPTY_SENTINEL: &str = "Empty";

/// Shortest text that round-trips the value: `1`, `1.5`, `-3`.
pub fn format_number(value: f64) -> String {
    // Normalise negative zero so it prints as "0".
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Comma-separated values, oldest first.
pub fn join_window(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Like [`join_window`] but renders an empty window as [`EMPTY_SENTINEL`].
pub fn format_previous(values: &[f64]) -> String {
    if values.is_empty() {
        return EMPTY_SENTINEL.to_string();
    }
    join_window(values)
}

/// Average to two decimal places.
pub fn format_average(average: f64) -> String {
    format!("{average:.2}")
}
