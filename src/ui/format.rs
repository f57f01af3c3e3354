use num_format::{Locale, ToFormattedString};

/// Whole-number count with thousands separators: `1234567.0` → `1,234,567`.
pub fn format_count(value: f64) -> String {
    let rounded = value.round() as i64;
    rounded.to_formatted_string(&Locale::en)
}

/// Signed percentage with one decimal, or `n/a` when undefined.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) => format!("{c:+.1}%"),
        None => "n/a".to_string(),
    }
}
