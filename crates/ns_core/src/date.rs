//! Publication date parsing.
//!
//! Every year- or month-dependent operation goes through
//! [`parse_publication_date`] so that all of them agree on the year of a
//! record. Supported shapes:
//!
//! - `December 31, 2017`, `Dec 31, 2017`, `Sept. 5, 2016` (month names are
//!   case-insensitive, abbreviations may carry a trailing period)
//! - `December 2017` (month and year only)
//! - `19-Feb-18` and `19-Feb-2018`
//! - `2017-12-31`, optionally followed by a time (`2017-12-31T10:00:00Z`)
//! - `2017/12/31` and `12/31/2017`
//! - a bare `2017`, which yields a year but no month
//!
//! Years outside `1000..=9999` are rejected. Day-first textual dates
//! (`31 December 2017`) and ISO dates without zero padding (`2016-3-10`) are
//! not recognized and count as unparsable.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 9999;

/// Year and (when known) month of a publication date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationDate {
    pub year: i32,
    pub month: Option<u32>,
}

impl PublicationDate {
    fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: Some(date.month()),
        }
    }
}

pub fn is_valid_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Parse a publication date. Returns `None` when no supported shape matches.
pub fn parse_publication_date(value: &str) -> Option<PublicationDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    parse_numeric(value)
        .map(PublicationDate::from_date)
        .or_else(|| parse_textual(value))
}

/// The 4-digit year of `value`, or `None` when it cannot be parsed.
pub fn extract_year(value: &str) -> Option<i32> {
    parse_publication_date(value).map(|date| date.year)
}

/// The month (1-12) of `value`, or `None` when the date or its month is missing.
pub fn extract_month(value: &str) -> Option<u32> {
    parse_publication_date(value).and_then(|date| date.month)
}

fn in_range(date: NaiveDate) -> Option<NaiveDate> {
    is_valid_year(date.year()).then_some(date)
}

fn parse_numeric(value: &str) -> Option<NaiveDate> {
    // ISO dates may carry a trailing time part.
    if let Some(head) = value.get(..10) {
        let rest = &value[10..];
        if rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ') {
            if let Ok(date) = NaiveDate::parse_from_str(head, "%Y-%m-%d") {
                return in_range(date);
            }
        }
    }

    for format in ["%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"] {
        if let Some(date) = NaiveDate::parse_from_str(value, format).ok().and_then(in_range) {
            return Some(date);
        }
    }

    // Two-digit years only when the four-digit reading failed.
    NaiveDate::parse_from_str(value, "%d-%b-%y").ok().and_then(in_range)
}

fn parse_textual(value: &str) -> Option<PublicationDate> {
    let tokens: Vec<&str> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    match tokens.as_slice() {
        [month, day, year] => {
            let month = month_token_to_number(month)?;
            let day = day.parse::<u32>().ok()?;
            let year = parse_year_token(year)?;
            NaiveDate::from_ymd_opt(year, month, day).map(PublicationDate::from_date)
        }
        [month, year] => {
            let month = month_token_to_number(month)?;
            let year = parse_year_token(year)?;
            Some(PublicationDate {
                year,
                month: Some(month),
            })
        }
        [year] => {
            let year = parse_year_token(year)?;
            Some(PublicationDate { year, month: None })
        }
        _ => None,
    }
}

fn parse_year_token(token: &str) -> Option<i32> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<i32>().ok().filter(|year| is_valid_year(*year))
}

/// Convert a month name or abbreviation to a month number (1-12).
fn month_token_to_number(token: &str) -> Option<u32> {
    let token = token.trim_end_matches('.').to_ascii_lowercase();
    match token.as_str() {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}
