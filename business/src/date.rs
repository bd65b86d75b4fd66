//! Request date parsing and display.
//!
//! Source data is not strictly controlled, so several shapes are accepted:
//! `D-M-YY` / `D-M-YYYY`, ISO dates and timestamps, the display format itself,
//! and slash-or-dash triples read as day, month, year unless they lead with a
//! four-digit year. Two-digit years are always 2000-based.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::PLACEHOLDER;

/// Display format, e.g. `Mar 5, 2024`.
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

const ISO_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];
const LONG_FORMATS: [&str; 2] = ["%b %d, %Y", "%B %d, %Y"];

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

fn expand_year(year: &str) -> Option<i32> {
    match year.len() {
        2 => year.parse::<i32>().ok().map(|yy| 2000 + yy),
        4 => year.parse().ok(),
        _ => None,
    }
}

/// Builds a date from day, month and year components given as digit strings.
fn day_month_year(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    if ![day, month, year].iter().all(|part| is_digits(part)) {
        return None;
    }
    if day.len() > 2 || month.len() > 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(expand_year(year)?, month.parse().ok()?, day.parse().ok()?)
}

fn split_triple<'a>(value: &'a str, separators: &[char]) -> Option<(&'a str, &'a str, &'a str)> {
    let mut parts = value.split(separators);
    let triple = (parts.next()?, parts.next()?, parts.next()?);
    parts.next().is_none().then_some(triple)
}

fn parse_iso(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    ISO_DATETIME_FORMATS
        .iter()
        .chain(LONG_FORMATS.iter())
        .find_map(|format| {
            NaiveDateTime::parse_from_str(value, format)
                .map(|dt| dt.date())
                .or_else(|_| NaiveDate::parse_from_str(value, format))
                .ok()
        })
}

/// Parses a request date, or `None` if no supported shape matches.
pub fn parse_request_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    // `D-M-YY` and `D-M-YYYY` take precedence over ISO parsing.
    if let Some((day, month, year)) = split_triple(value, &['-'])
        && day.len() <= 2
        && month.len() <= 2
    {
        return day_month_year(day, month, year);
    }

    if let Some(date) = parse_iso(value) {
        return Some(date);
    }

    let (first, second, third) = split_triple(value, &['-', '/'])?;
    if first.len() == 4 {
        return day_month_year(third, second, first);
    }
    day_month_year(first, second, third)
}

/// Formats an optional raw request date for display.
///
/// Absent values render as the placeholder; unparseable values are returned verbatim.
pub fn format_request_date(value: Option<&str>) -> String {
    match value {
        None => PLACEHOLDER.to_owned(),
        Some(raw) if raw.is_empty() => PLACEHOLDER.to_owned(),
        Some(raw) => parse_request_date(raw)
            .map(|date| date.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_else(|| raw.to_owned()),
    }
}
