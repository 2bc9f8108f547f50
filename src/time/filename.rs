//! Filename date parsing
//!
//! Only one layout is recognized: `YYYYMMDD_<id>.<ext>`, anchored at both
//! ends, where `<id>` and `<ext>` are ASCII word characters.

use crate::error::{Error, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use tracing::trace;

/// Pattern: YYYYMMDD_id.ext (ASCII digits and word characters only)
const FILENAME_PATTERN: &str = r"(?-u)^(\d{4})(\d{2})(\d{2})_\w+\.\w+$";

/// Compiled matcher for dated filenames
///
/// Built once per run and handed to the processor, so every entry is
/// matched against the same compiled expression.
#[derive(Debug, Clone)]
pub struct FilenamePattern {
    regex: Regex,
}

impl FilenamePattern {
    /// Compile the `YYYYMMDD_id.ext` matcher
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(FILENAME_PATTERN)?,
        })
    }

    /// Check whether a filename has the dated layout, without parsing the date
    pub fn is_match(&self, filename: &str) -> bool {
        self.regex.is_match(filename)
    }

    /// Parse the embedded date, rejecting dates later than the current time
    pub fn parse(&self, filename: &str) -> Result<NaiveDateTime> {
        self.parse_at(filename, Utc::now())
    }

    /// Parse the embedded date, rejecting dates later than `now`
    ///
    /// The date is returned at midnight UTC. Month and day values outside
    /// their calendar range roll over into neighbouring months and years
    /// instead of being rejected.
    pub fn parse_at(&self, filename: &str, now: DateTime<Utc>) -> Result<NaiveDateTime> {
        let caps = self
            .regex
            .captures(filename)
            .ok_or_else(|| Error::NoPatternMatch {
                filename: filename.to_string(),
            })?;

        let year = parse_field(filename, "year", &caps[1])?;
        let month = parse_field(filename, "month", &caps[2])?;
        let day = parse_field(filename, "day", &caps[3])?;

        let date = normalized_date(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| Error::NoPatternMatch {
                filename: filename.to_string(),
            })?;

        if date.and_utc() > now {
            return Err(Error::FutureDate {
                filename: filename.to_string(),
            });
        }

        trace!(filename, %date, "Matched dated filename");
        Ok(date)
    }
}

fn parse_field(filename: &str, field: &'static str, digits: &str) -> Result<i32> {
    digits.parse().map_err(|source| Error::MalformedField {
        filename: filename.to_string(),
        field,
        source,
    })
}

/// Build a date the way calendar arithmetic normalizes it: month 13 is
/// January of the next year, day 0 is the last day of the previous month.
fn normalized_date(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;

    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_signed(Duration::days(i64::from(day) - 1))
}
