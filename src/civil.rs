use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_CIVIL_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_CIVIL_MONTH, MAX_CIVIL_YEAR, MIN_DAY,
};
use crate::{CalendarError, Weekday, prelude::*, split_iso_date};
use std::str::FromStr;

/// A proleptic-Gregorian date guaranteed to be in the range `0001-01-01..=9999-12-31`.
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CivilDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl CivilDate {
    /// Creates a new civil date, validating every component.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear`, `InvalidMonth` or `InvalidDay` for out-of-range parts.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year == 0 || year > MAX_CIVIL_YEAR {
            return Err(CalendarError::InvalidYear(i64::from(year)));
        }
        if month == 0 || month > MAX_CIVIL_MONTH {
            return Err(CalendarError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_civil_month(year, month) {
            return Err(CalendarError::InvalidDay {
                year: i64::from(year),
                month,
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Converts an absolute day number back to a civil date.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside `0001-01-01..=9999-12-31`.
    pub fn from_absolute(absolute: i64) -> Result<Self, CalendarError> {
        if absolute < 1 || absolute > absolute_from_parts(MAX_CIVIL_YEAR, MAX_CIVIL_MONTH, 31) {
            return Err(CalendarError::OutOfRange(absolute));
        }

        // 146097 days per 400 years gives an estimate within a year of the answer
        let mut year = (absolute * i64::from(GREGORIAN_CYCLE) / 146_097).clamp(1, i64::from(MAX_CIVIL_YEAR));
        while year > 1 && absolute < year_start(year) {
            year -= 1;
        }
        while year < i64::from(MAX_CIVIL_YEAR) && absolute >= year_start(year + 1) {
            year += 1;
        }
        let year = u16::try_from(year).map_err(|_| CalendarError::OutOfRange(absolute))?;

        let mut remaining = absolute - year_start(i64::from(year));
        let mut month = 1;
        while remaining >= i64::from(days_in_civil_month(year, month)) {
            remaining -= i64::from(days_in_civil_month(year, month));
            month += 1;
        }
        let day = u8::try_from(remaining + 1).map_err(|_| CalendarError::OutOfRange(absolute))?;

        Self::new(year, month, day)
    }

    /// Returns the year component
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month component (1 = January)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the absolute day number, where 0001-01-01 is day 1.
    pub const fn to_absolute(&self) -> i64 {
        absolute_from_parts(self.year, self.month, self.day)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_absolute(self.to_absolute())
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_iso_date(s)?;
        let year = u16::try_from(year).map_err(|_| CalendarError::InvalidYear(year))?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a civil month, or 0 for a month outside 1..=12.
pub(crate) const fn days_in_civil_month(year: u16, month: u8) -> u8 {
    if month == 0 || month > MAX_CIVIL_MONTH {
        0
    } else if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_CIVIL_MONTH[month as usize]
    }
}

/// Absolute day number of an unchecked civil (year, month, day).
/// Usable in constants, so callers are responsible for passing a real date.
/// Months past December contribute no days.
pub(crate) const fn absolute_from_parts(year: u16, month: u8, day: u8) -> i64 {
    let mut absolute = day as i64;
    let mut m = 1;
    while m < month {
        absolute += days_in_civil_month(year, m) as i64;
        m += 1;
    }
    absolute + days_before_year(year as i64)
}

const fn days_before_year(year: i64) -> i64 {
    let prior = year - 1;
    365 * prior + prior / LEAP_YEAR_CYCLE as i64 - prior / CENTURY_CYCLE as i64 + prior / GREGORIAN_CYCLE as i64
}

const fn year_start(year: i64) -> i64 {
    days_before_year(year) + 1
}
