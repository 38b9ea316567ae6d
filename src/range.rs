use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarError, CalendarOptions, DATE_SEPARATOR, HebrewDate, HebrewMonth, HebrewYear, JewishCalendar,
    RANGE_SEPARATOR, prelude::*,
};

/// An inclusive span of Hebrew dates.
///
/// Parses from `start/end` (`5784-07-15/5784-07-22`), from a whole month (`5784-01`) or from a
/// whole year (`5784`). Always displays and serializes in the `start/end` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}/{end}")]
#[serde(try_from = "String", into = "String")]
pub struct DateRange {
    start: HebrewDate,
    end:   HebrewDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: HebrewDate, end: HebrewDate },

    /// Error building a date component.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: HebrewDate, end: HebrewDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Every day of a Hebrew year, 1 Tishrei through 29 Elul.
    ///
    /// # Errors
    /// Returns `RangeError::Calendar` if the year is not representable.
    pub fn year(year: HebrewYear) -> Result<Self, RangeError> {
        let start = HebrewDate::from_parts(year, HebrewMonth::Tishrei, 1)?;
        let end = HebrewDate::from_parts(year, HebrewMonth::Elul, year.days_in_month(HebrewMonth::Elul))?;
        Self::new(start, end)
    }

    /// Every day of one month.
    ///
    /// # Errors
    /// Returns `RangeError::Calendar` if the month does not exist in `year`.
    pub fn month(year: HebrewYear, month: HebrewMonth) -> Result<Self, RangeError> {
        let start = HebrewDate::from_parts(year, month, 1)?;
        let end = HebrewDate::from_parts(year, month, year.days_in_month(month))?;
        Self::new(start, end)
    }

    /// A range of one day.
    pub const fn day(date: HebrewDate) -> Self {
        Self { start: date, end: date }
    }

    /// Returns the first day of the range
    pub const fn start(&self) -> HebrewDate {
        self.start
    }

    /// Returns the last day of the range
    pub const fn end(&self) -> HebrewDate {
        self.end
    }

    /// Number of days covered, counting both ends.
    pub const fn num_days(&self) -> i64 {
        self.end.absolute() - self.start.absolute() + 1
    }

    pub fn contains(&self, date: &HebrewDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// True when the two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Iterates over every day in the range in order.
    pub fn days(&self) -> impl Iterator<Item = HebrewDate> {
        (self.start.absolute()..=self.end.absolute()).filter_map(|absolute| HebrewDate::from_absolute(absolute).ok())
    }

    /// Every day in the range, observed under `options`.
    pub fn calendars(&self, options: CalendarOptions) -> impl Iterator<Item = JewishCalendar> {
        self.days().map(move |date| JewishCalendar::new(date, options))
    }
}

/// `5784` is a year, `5784-01` a month, `5784-01-15` a single day.
fn parse_period(s: &str) -> Result<DateRange, RangeError> {
    let parts: Vec<&str> = s.split(DATE_SEPARATOR).map(str::trim).collect();
    let year = |part: &str| -> Result<HebrewYear, RangeError> {
        let value = part
            .parse::<i64>()
            .map_err(|_| RangeError::InvalidFormat(format!("Invalid year: {part}")))?;
        Ok(HebrewYear::from_i64(value)?)
    };

    match parts.as_slice() {
        [y] => DateRange::year(year(*y)?),
        [y, m] => {
            let month = m
                .parse::<u8>()
                .map_err(|_| RangeError::InvalidFormat(format!("Invalid month: {m}")))?;
            DateRange::month(year(*y)?, HebrewMonth::from_number(month)?)
        },
        [_, _, _] => Ok(DateRange::day(s.parse()?)),
        _ => Err(RangeError::InvalidFormat(format!(
            "Expected a year, a month or a day, found {} component(s): {s}",
            parts.len()
        ))),
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput.into());
        }

        let Some((start, end)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return parse_period(trimmed);
        };
        if end.contains(RANGE_SEPARATOR) {
            return Err(RangeError::InvalidFormat(format!(
                "Expected a single '{RANGE_SEPARATOR}' between start and end: {trimmed}"
            )));
        }

        Self::new(start.trim().parse()?, end.trim().parse()?)
    }
}

impl TryFrom<String> for DateRange {
    type Error = RangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateRange> for String {
    fn from(range: DateRange) -> Self {
        range.to_string()
    }
}
