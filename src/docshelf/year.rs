//! Publication year inference from file names.
//!
//! The heuristic is deliberately simple: take four-digit runs left to right
//! and keep the first one that reads as a year between 1900 and 2099. A name
//! such as `1999_report_2020.pdf` therefore yields 1999, and `id4521_2019.pdf`
//! yields 2019 only because 4521 is out of range.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2099;

static FOUR_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

pub fn extract_year(filename: &str) -> Option<i32> {
    FOUR_DIGITS
        .find_iter(filename)
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .find(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
}
