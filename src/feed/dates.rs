//! Permissive date and duration parsing.
//!
//! Feeds routinely ship dates that are only loosely RFC 822 or ISO 8601. The
//! input is normalized first (weekday dropped, whitespace collapsed, zone
//! abbreviations replaced by numeric offsets) and then tried against
//! [`DATE_FORMATS`] in order; the first successful parse wins.

use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// One entry in the ordered format cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// RFC 3339 / ISO 8601 with `Z` or a numeric offset, optional fraction.
    Rfc3339,
    /// RFC 2822 as implemented by chrono.
    Rfc2822,
    /// chrono format string including `%z`.
    Zoned(&'static str),
    /// chrono format string without an offset; the value is taken as UTC.
    Naive(&'static str),
    /// Date without a time of day; midnight UTC.
    DateOnly(&'static str),
}

/// Formats tried by [`parse_date`], in order.
///
/// Two-digit-year variants come before their four-digit counterparts: `%Y`
/// happily reads `06` as year 6, while `%y` cannot consume `2006` and fails
/// cleanly.
pub const DATE_FORMATS: &[DateFormat] = &[
    DateFormat::Rfc3339,
    DateFormat::Rfc2822,
    DateFormat::Zoned("%d %b %y %H:%M:%S %z"),
    DateFormat::Zoned("%d %b %Y %H:%M:%S %z"),
    DateFormat::Zoned("%d %b %y %H:%M %z"),
    DateFormat::Zoned("%d %b %Y %H:%M %z"),
    DateFormat::Zoned("%d %B %Y %H:%M:%S %z"),
    DateFormat::Zoned("%Y-%m-%dT%H:%M:%S%.f%z"),
    DateFormat::Zoned("%Y-%m-%dT%H:%M%z"),
    DateFormat::Zoned("%Y-%m-%d %H:%M:%S%.f%z"),
    DateFormat::Zoned("%Y-%m-%d %H:%M:%S%.f %z"),
    DateFormat::Naive("%Y-%m-%dT%H:%M:%S%.f"),
    DateFormat::Naive("%Y-%m-%d %H:%M:%S%.f"),
    DateFormat::Naive("%Y-%m-%dT%H:%M"),
    DateFormat::Naive("%d %b %Y %H:%M:%S"),
    DateFormat::DateOnly("%Y-%m-%d"),
    DateFormat::DateOnly("%d %b %Y"),
];

/// Zone abbreviations accepted in place of a numeric offset.
const ZONE_OFFSETS: &[(&str, &str)] = &[
    ("UT", "+0000"),
    ("UTC", "+0000"),
    ("GMT", "+0000"),
    ("Z", "+0000"),
    ("EST", "-0500"),
    ("EDT", "-0400"),
    ("CST", "-0600"),
    ("CDT", "-0500"),
    ("MST", "-0700"),
    ("MDT", "-0600"),
    ("PST", "-0800"),
    ("PDT", "-0700"),
    ("AKST", "-0900"),
    ("AKDT", "-0800"),
    ("HST", "-1000"),
    ("BST", "+0100"),
    ("CET", "+0100"),
    ("CEST", "+0200"),
    ("EET", "+0200"),
    ("EEST", "+0300"),
    ("JST", "+0900"),
    ("KST", "+0900"),
    ("AEST", "+1000"),
    ("AEDT", "+1100"),
    ("NZST", "+1200"),
    ("NZDT", "+1300"),
];

impl DateFormat {
    /// Attempts this single format against already-normalized input.
    pub fn parse(self, text: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            DateFormat::Rfc3339 => DateTime::parse_from_rfc3339(text).ok(),
            DateFormat::Rfc2822 => DateTime::parse_from_rfc2822(text).ok(),
            DateFormat::Zoned(format) => DateTime::parse_from_str(text, format).ok(),
            DateFormat::Naive(format) => NaiveDateTime::parse_from_str(text, format)
                .ok()
                .and_then(as_utc),
            DateFormat::DateOnly(format) => NaiveDate::parse_from_str(text, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .and_then(as_utc),
        }
    }
}

fn as_utc(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    let utc = FixedOffset::east_opt(0)?;
    Some(DateTime::from_naive_utc_and_offset(naive, utc))
}

/// Parses a feed date, returning `None` when no known format matches.
pub fn parse_date(text: &str) -> Option<DateTime<FixedOffset>> {
    let normalized = normalize_date(text);
    if normalized.is_empty() {
        return None;
    }
    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| format.parse(&normalized));
    if parsed.is_none() {
        tracing::trace!(input = %text, "Unrecognized date format");
    }
    parsed
}

/// Canonicalizes the loose punctuation seen in the wild before the format
/// cascade runs.
fn normalize_date(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();

    // Leading weekday, with or without comma. Feeds get it wrong often
    // enough that chrono's weekday consistency check does more harm than good.
    if let Some(first) = tokens.first() {
        let word = first.trim_end_matches(',');
        if word.len() >= 3 && word.chars().all(|c| c.is_ascii_alphabetic()) && is_weekday(word) {
            tokens.remove(0);
        } else if first.ends_with(',') && word.chars().all(|c| c.is_ascii_alphabetic()) {
            tokens.remove(0);
        }
    }

    let mut owned: Vec<String> = tokens.iter().map(|t| (*t).to_owned()).collect();
    if let Some(last) = owned.last_mut() {
        if let Some(offset) = zone_offset(last) {
            *last = offset.to_owned();
        } else if let Some(stripped) = last.strip_suffix('Z') {
            // ISO 8601 `Z` glued to the time: `2006-01-02T15:04Z`
            if stripped.ends_with(|c: char| c.is_ascii_digit()) {
                *last = format!("{stripped}+00:00");
            }
        }
    }
    owned.join(" ")
}

fn is_weekday(word: &str) -> bool {
    const DAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
    let lower = word.to_ascii_lowercase();
    DAYS.iter().any(|day| lower.starts_with(day))
}

fn zone_offset(token: &str) -> Option<&'static str> {
    ZONE_OFFSETS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, offset)| *offset)
}

/// Parses `SS`, `MM:SS` or `HH:MM:SS` into a duration.
///
/// Each group must be a non-negative number; the final group may carry a
/// fraction (`00:01:30.5`). Anything else yields `None`.
pub fn parse_duration(text: &str) -> Option<Duration> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let groups: Vec<&str> = text.split(':').collect();
    if groups.len() > 3 {
        return None;
    }

    let mut seconds = 0f64;
    for (index, group) in groups.iter().enumerate() {
        let group = group.trim();
        let is_last = index + 1 == groups.len();
        let valid = !group.is_empty()
            && group
                .chars()
                .all(|c| c.is_ascii_digit() || (is_last && c == '.'));
        if !valid {
            return None;
        }
        let value: f64 = group.parse().ok()?;
        seconds = seconds * 60.0 + value;
    }

    Duration::try_from_secs_f64(seconds).ok()
}
