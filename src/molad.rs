use crate::consts::{CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE, JEWISH_EPOCH};
use crate::year::chalakim_since_molad_tohu;
use crate::{CalendarError, CivilDate, HebrewMonth, HebrewYear, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hours from the start of the Hebrew day (6 PM) to civil midnight.
const HOURS_BEFORE_MIDNIGHT: i64 = 6;

/// The computed moment of a lunar conjunction.
///
/// Stored as chalakim since molad tohu. Hebrew days begin at 6 PM, so `hours` counts from
/// 6 PM of the preceding civil evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Molad {
    total_chalakim: i64,
}

impl Molad {
    /// Molad of `month` in `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for Adar II of a common year.
    pub fn new(year: HebrewYear, month: HebrewMonth) -> Result<Self, CalendarError> {
        if !month.exists_in(year.is_leap()) {
            return Err(CalendarError::InvalidMonth(month.number()));
        }
        Ok(Self::from_chalakim(chalakim_since_molad_tohu(year.as_i64(), month)))
    }

    pub(crate) const fn from_chalakim(total_chalakim: i64) -> Self {
        Self { total_chalakim }
    }

    /// Chalakim since molad tohu
    #[inline]
    pub const fn total_chalakim(self) -> i64 {
        self.total_chalakim
    }

    const fn day_count(self) -> i64 {
        self.total_chalakim.div_euclid(CHALAKIM_PER_DAY)
    }

    const fn chalakim_in_day(self) -> i64 {
        self.total_chalakim.rem_euclid(CHALAKIM_PER_DAY)
    }

    /// Hebrew weekday of the molad. A molad after 6 PM belongs to the following day.
    pub const fn weekday(self) -> Weekday {
        Weekday::ALL[self.day_count().rem_euclid(7) as usize]
    }

    /// Hours since 6 PM, `0..=23`
    pub const fn hours(self) -> u8 {
        (self.chalakim_in_day() / CHALAKIM_PER_HOUR) as u8
    }

    /// Chalakim within the hour, `0..=1079`
    pub const fn chalakim(self) -> u16 {
        (self.chalakim_in_day() % CHALAKIM_PER_HOUR) as u16
    }

    /// Whole minutes within the hour
    pub const fn minutes(self) -> u8 {
        (self.chalakim() as i64 / CHALAKIM_PER_MINUTE) as u8
    }

    /// Chalakim left over after the whole minutes, `0..=17`
    pub const fn chalakim_in_minute(self) -> u8 {
        (self.chalakim() as i64 % CHALAKIM_PER_MINUTE) as u8
    }

    /// Absolute day number of the civil day on which the molad falls.
    pub const fn civil_absolute(self) -> i64 {
        let evening = self.day_count() + JEWISH_EPOCH;
        if (self.hours() as i64) < HOURS_BEFORE_MIDNIGHT { evening } else { evening + 1 }
    }

    /// Hour of the civil day (from midnight), `0..=23`
    pub const fn civil_hour(self) -> u8 {
        ((self.hours() as i64 + 24 - HOURS_BEFORE_MIDNIGHT) % 24) as u8
    }

    /// Civil date on which the molad falls.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` before 0001-01-01 or past 9999-12-31.
    pub fn civil_date(self) -> Result<CivilDate, CalendarError> {
        CivilDate::from_absolute(self.civil_absolute())
    }
}

impl fmt::Display for Molad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}h {}p", self.weekday(), self.hours(), self.chalakim())
    }
}
