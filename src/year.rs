use crate::consts::{
    BETUTAKPAT_CHALAKIM, CHALAKIM_MOLAD_TOHU, CHALAKIM_PER_DAY, CHALAKIM_PER_MONTH, GATRAD_CHALAKIM, JEWISH_EPOCH,
    METONIC_CYCLE_MONTHS, METONIC_CYCLE_YEARS, MOLAD_ZAKEN_CHALAKIM,
};
use crate::{CalendarError, HebrewMonth, Weekday, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A Hebrew year counted from creation. Uses `NonZeroU32` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HebrewYear(NonZeroU32);

/// Classification of a year by the lengths of Cheshvan and Kislev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Kviah {
    /// Cheshvan and Kislev both have 29 days
    Chaserim,
    /// Cheshvan has 29 days and Kislev 30
    Kesidran,
    /// Cheshvan and Kislev both have 30 days
    Shelaimim,
}

impl Kviah {
    /// Year length implied by this kviah.
    pub const fn year_length(self, leap_year: bool) -> u16 {
        let common = match self {
            Self::Chaserim => 353,
            Self::Kesidran => 354,
            Self::Shelaimim => 355,
        };
        if leap_year { common + 30 } else { common }
    }
}

/// The (leap, Rosh Hashana weekday, kviah) triple that fully determines a year's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearType {
    pub leap:         bool,
    pub rosh_hashana: Weekday,
    pub kviah:        Kviah,
}

impl HebrewYear {
    /// Creates a new year, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is 0.
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(CalendarError::InvalidYear(i64::from(value)))
    }

    /// Creates a year from a signed count, as produced by date arithmetic.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` outside `1..=u32::MAX`.
    pub fn from_i64(value: i64) -> Result<Self, CalendarError> {
        u32::try_from(value)
            .map_err(|_| CalendarError::InvalidYear(value))
            .and_then(Self::new)
    }

    /// Returns the year value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    #[inline]
    pub(crate) const fn as_i64(self) -> i64 {
        self.0.get() as i64
    }

    /// Years 3, 6, 8, 11, 14, 17 and 19 of the Metonic cycle have a thirteenth month.
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.as_i64())
    }

    /// Days from the start of the calendar to Rosh Hashana of this year.
    pub const fn elapsed_days(self) -> i64 {
        elapsed_days(self.as_i64())
    }

    /// Absolute day number of 1 Tishrei.
    pub const fn first_day(self) -> i64 {
        first_day_of_year(self.as_i64())
    }

    /// Number of days in the year: 353, 354, 355, 383, 384 or 385.
    pub const fn days(self) -> u16 {
        year_length(self.as_i64())
    }

    /// Cheshvan has 30 days in a full (Shelaimim) year.
    pub const fn is_cheshvan_long(self) -> bool {
        self.days() % 10 == 5
    }

    /// Kislev has 29 days in a deficient (Chaserim) year.
    pub const fn is_kislev_short(self) -> bool {
        self.days() % 10 == 3
    }

    /// The year's kviah, read from its length.
    pub const fn kviah(self) -> Kviah {
        kviah_for_length(self.days())
    }

    /// Weekday of 1 Tishrei. Never Sunday, Wednesday or Friday.
    pub const fn rosh_hashana_weekday(self) -> Weekday {
        Weekday::from_absolute(self.first_day())
    }

    /// Leap flag, Rosh Hashana weekday and kviah together.
    pub const fn year_type(self) -> YearType {
        YearType {
            leap:         self.is_leap(),
            rosh_hashana: self.rosh_hashana_weekday(),
            kviah:        self.kviah(),
        }
    }

    /// Last month of the year in numeric order: Adar II in a leap year, Adar otherwise.
    pub const fn last_month(self) -> HebrewMonth {
        HebrewMonth::purim_adar(self.is_leap())
    }

    pub const fn months_in_year(self) -> u8 {
        HebrewMonth::months_in_year(self.is_leap())
    }

    /// Days in `month` of this year, or 0 when the month does not exist (Adar II of a common year).
    pub const fn days_in_month(self, month: HebrewMonth) -> u8 {
        if !month.exists_in(self.is_leap()) {
            return 0;
        }
        month_length(month, self.is_leap(), self.kviah())
    }

    /// Months of this year in calendar order, Tishrei first.
    pub fn months(self) -> impl Iterator<Item = HebrewMonth> {
        HebrewMonth::in_year_order(self.is_leap())
    }

    /// Days in this year before the first of `month`, counting from 1 Tishrei.
    pub(crate) fn days_before_month(self, month: HebrewMonth) -> i64 {
        let leap = self.is_leap();
        let kviah = self.kviah();
        self.months()
            .take_while(|m| *m != month)
            .map(|m| i64::from(month_length(m, leap, kviah)))
            .sum()
    }

    /// The following year.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` past `u32::MAX`.
    pub fn next(self) -> Result<Self, CalendarError> {
        Self::from_i64(self.as_i64() + 1)
    }

    /// The preceding year.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` before year 1.
    pub fn previous(self) -> Result<Self, CalendarError> {
        Self::from_i64(self.as_i64() - 1)
    }
}

impl fmt::Display for YearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = if self.leap { "leap" } else { "common" };
        write!(f, "{layout}/{}/{}", self.rosh_hashana, self.kviah)
    }
}

impl TryFrom<u32> for HebrewYear {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HebrewYear> for u32 {
    fn from(year: HebrewYear) -> Self {
        year.0.get()
    }
}

impl fmt::Display for HebrewYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions. These take a signed year so arithmetic around year 1 (which looks
// back at year 0) stays total.

/// Leap years are years 3, 6, 8, 11, 14, 17 and 19 of the 19 year cycle.
pub(crate) const fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(METONIC_CYCLE_YEARS) < 7
}

/// Chalakim from molad tohu to the molad of `month` in `year`.
pub(crate) const fn chalakim_since_molad_tohu(year: i64, month: HebrewMonth) -> i64 {
    let prior = year - 1;
    let cycles = prior.div_euclid(METONIC_CYCLE_YEARS);
    let in_cycle = prior.rem_euclid(METONIC_CYCLE_YEARS);
    let months_elapsed = METONIC_CYCLE_MONTHS * cycles
        + 12 * in_cycle
        + (7 * in_cycle + 1) / METONIC_CYCLE_YEARS
        + (month.month_of_year(is_leap_year(year)) as i64 - 1);
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed
}

/// Day of Rosh Hashana counted from the start of the calendar, after the dechiyos.
pub(crate) const fn elapsed_days(year: i64) -> i64 {
    let chalakim = chalakim_since_molad_tohu(year, HebrewMonth::Tishrei);
    let molad_day = chalakim.div_euclid(CHALAKIM_PER_DAY);
    let molad_parts = chalakim.rem_euclid(CHALAKIM_PER_DAY);
    let mut rosh_hashana = molad_day;

    if molad_parts >= MOLAD_ZAKEN_CHALAKIM
        || (molad_day % 7 == 2 && molad_parts >= GATRAD_CHALAKIM && !is_leap_year(year))
        || (molad_day % 7 == 1 && molad_parts >= BETUTAKPAT_CHALAKIM && is_leap_year(year - 1))
    {
        rosh_hashana += 1;
    }
    // Lo ADU Rosh
    if matches!(rosh_hashana % 7, 0 | 3 | 5) {
        rosh_hashana += 1;
    }
    rosh_hashana
}

pub(crate) const fn first_day_of_year(year: i64) -> i64 {
    elapsed_days(year) + 1 + JEWISH_EPOCH
}

pub(crate) const fn year_length(year: i64) -> u16 {
    (elapsed_days(year + 1) - elapsed_days(year)) as u16
}

const fn kviah_for_length(days: u16) -> Kviah {
    match days % 10 {
        5 => Kviah::Shelaimim,
        3 => Kviah::Chaserim,
        _ => Kviah::Kesidran,
    }
}

pub(crate) const fn month_length(month: HebrewMonth, leap_year: bool, kviah: Kviah) -> u8 {
    match month {
        HebrewMonth::Iyar | HebrewMonth::Tammuz | HebrewMonth::Elul | HebrewMonth::Teves | HebrewMonth::AdarII => 29,
        HebrewMonth::Cheshvan if !matches!(kviah, Kviah::Shelaimim) => 29,
        HebrewMonth::Kislev if matches!(kviah, Kviah::Chaserim) => 29,
        HebrewMonth::Adar if !leap_year => 29,
        _ => 30,
    }
}
