//! Scalar parsers shared by the attribute and character mappers.
//!
//! All of them are total: text that does not parse yields `None` (or an empty
//! list) and the caller leaves the field alone.

pub fn parse_integer(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

pub fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Boolean-ish attribute and element values (`isPermaLink`, `itunes:explicit`,
/// `itunes:block`, ...).
pub fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "explicit" => Some(true),
        "false" | "no" | "clean" => Some(false),
        _ => None,
    }
}

/// Comma separated keywords with whitespace trimmed and empties dropped.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
