use crate::consts::{JEWISH_EPOCH, MEAN_YEAR_DENOMINATOR, MEAN_YEAR_NUMERATOR, METONIC_CYCLE_MONTHS, METONIC_CYCLE_YEARS, MIN_DAY};
use crate::year::{chalakim_since_molad_tohu, first_day_of_year, month_length};
use crate::{CalendarError, CivilDate, HebrewMonth, HebrewYear, Kviah, Molad, Weekday, split_iso_date};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::trace;

/// A validated Hebrew calendar date.
///
/// The absolute day number is computed once at construction; equality, hashing and
/// ordering all go through it.
#[derive(Debug, Clone, Copy)]
pub struct HebrewDate {
    year:     HebrewYear,
    month:    HebrewMonth,
    day:      u8,
    absolute: i64,
}

impl HebrewDate {
    /// Creates a new date, validating the month and day against the year's layout.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for year 0, `InvalidMonth` for Adar II of a
    /// common year and `InvalidDay` when the day is 0 or past the end of the month.
    pub fn new(year: u32, month: HebrewMonth, day: u8) -> Result<Self, CalendarError> {
        Self::from_parts(HebrewYear::new(year)?, month, day)
    }

    /// Same as [`new`](Self::new) for an already validated year.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `InvalidDay` as [`new`](Self::new) does.
    pub fn from_parts(year: HebrewYear, month: HebrewMonth, day: u8) -> Result<Self, CalendarError> {
        if !month.exists_in(year.is_leap()) {
            return Err(CalendarError::InvalidMonth(month.number()));
        }
        if day < MIN_DAY || day > year.days_in_month(month) {
            return Err(CalendarError::InvalidDay {
                year: year.as_i64(),
                month: month.number(),
                day,
            });
        }

        let absolute = year.first_day() + year.days_before_month(month) + i64::from(day) - 1;
        Ok(Self {
            year,
            month,
            day,
            absolute,
        })
    }

    /// Converts an absolute day number to a Hebrew date.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` before 1 Tishrei of year 1 or past the last
    /// representable year.
    pub fn from_absolute(absolute: i64) -> Result<Self, CalendarError> {
        if absolute < first_day_of_year(1) {
            return Err(CalendarError::OutOfRange(absolute));
        }

        let estimate = absolute
            .checked_sub(JEWISH_EPOCH)
            .and_then(|days| days.checked_mul(MEAN_YEAR_NUMERATOR))
            .ok_or(CalendarError::OutOfRange(absolute))?
            / MEAN_YEAR_DENOMINATOR;
        if estimate > i64::from(u32::MAX) {
            return Err(CalendarError::OutOfRange(absolute));
        }

        let mut year = estimate.max(1);
        while year > 1 && absolute < first_day_of_year(year) {
            year -= 1;
        }
        while absolute >= first_day_of_year(year + 1) {
            year += 1;
        }
        if year != estimate {
            trace!(absolute, estimate, year, "corrected hebrew year estimate");
        }
        let year = HebrewYear::from_i64(year).map_err(|_| CalendarError::OutOfRange(absolute))?;

        let leap = year.is_leap();
        let kviah = year.kviah();
        let mut remaining = absolute - year.first_day();
        for month in year.months() {
            let length = i64::from(month_length(month, leap, kviah));
            if remaining < length {
                let day = u8::try_from(remaining + 1).map_err(|_| CalendarError::OutOfRange(absolute))?;
                return Ok(Self {
                    year,
                    month,
                    day,
                    absolute,
                });
            }
            remaining -= length;
        }

        Err(CalendarError::OutOfRange(absolute))
    }

    /// Hebrew date of a civil date.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the conversion overflows (not reachable for
    /// valid civil dates).
    pub fn from_civil(date: CivilDate) -> Result<Self, CalendarError> {
        Self::from_absolute(date.to_absolute())
    }

    /// Civil date of this Hebrew date.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside the civil years 1 through 9999.
    pub fn to_civil(&self) -> Result<CivilDate, CalendarError> {
        CivilDate::from_absolute(self.absolute)
    }

    #[inline]
    pub const fn year(&self) -> HebrewYear {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> HebrewMonth {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Absolute day number, where the civil 0001-01-01 is day 1.
    #[inline]
    pub const fn absolute(&self) -> i64 {
        self.absolute
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_absolute(self.absolute)
    }

    /// 1-based day of the year counting from 1 Tishrei
    pub const fn day_of_year(&self) -> u16 {
        (self.absolute - self.year.first_day() + 1) as u16
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    pub const fn days_in_month(&self) -> u8 {
        self.year.days_in_month(self.month)
    }

    pub const fn days_in_year(&self) -> u16 {
        self.year.days()
    }

    pub const fn kviah(&self) -> Kviah {
        self.year.kviah()
    }

    /// Molad of the month this date falls in.
    pub const fn molad(&self) -> Molad {
        Molad::from_chalakim(chalakim_since_molad_tohu(self.year.as_i64(), self.month))
    }

    /// Moves forward (or back, for negative counts) by whole days.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result falls before 1 Tishrei 1.
    pub fn advance(&self, days: i64) -> Result<Self, CalendarError> {
        let target = self
            .absolute
            .checked_add(days)
            .ok_or(CalendarError::OutOfRange(self.absolute))?;
        Self::from_absolute(target)
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` past the last representable day.
    pub fn tomorrow(&self) -> Result<Self, CalendarError> {
        self.advance(1)
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` on 1 Tishrei 1.
    pub fn yesterday(&self) -> Result<Self, CalendarError> {
        self.advance(-1)
    }

    /// Moves by whole months in calendar order. Adar II is only visited in leap years,
    /// and the day is clamped to the length of the target month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the result falls before year 1.
    pub fn add_months(&self, months: i64) -> Result<Self, CalendarError> {
        // Every run of 19 years holds exactly 235 months, so whole cycles move the year only.
        let cycles = months / METONIC_CYCLE_MONTHS;
        let mut remaining = months % METONIC_CYCLE_MONTHS;
        let mut year = HebrewYear::from_i64(
            self.year
                .as_i64()
                .checked_add(cycles * METONIC_CYCLE_YEARS)
                .ok_or(CalendarError::InvalidYear(self.year.as_i64()))?,
        )?;
        let mut position = self.month.month_of_year(year.is_leap());

        while remaining > 0 {
            if position == year.months_in_year() {
                year = year.next()?;
                position = 1;
            } else {
                position += 1;
            }
            remaining -= 1;
        }
        while remaining < 0 {
            if position == 1 {
                year = year.previous()?;
                position = year.months_in_year();
            } else {
                position -= 1;
            }
            remaining += 1;
        }

        let month = HebrewMonth::from_month_of_year(position, year.is_leap())?;
        Self::from_parts(year, month, self.day.min(year.days_in_month(month)))
    }

    /// Moves by whole years. Adar II becomes Adar when the target is a common year,
    /// and the day is clamped to the length of the target month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the result falls outside `1..=u32::MAX`.
    pub fn add_years(&self, years: i64) -> Result<Self, CalendarError> {
        let target = self
            .year
            .as_i64()
            .checked_add(years)
            .ok_or(CalendarError::InvalidYear(self.year.as_i64()))?;
        let year = HebrewYear::from_i64(target)?;
        let month = if self.month.exists_in(year.is_leap()) { self.month } else { HebrewMonth::Adar };
        Self::from_parts(year, month, self.day.min(year.days_in_month(month)))
    }

    /// # Errors
    /// Returns `CalendarError` if the month or day does not exist in `year`.
    pub fn with_year(&self, year: u32) -> Result<Self, CalendarError> {
        Self::new(year, self.month, self.day)
    }

    /// # Errors
    /// Returns `CalendarError` if `month` does not exist in this year or is too short.
    pub fn with_month(&self, month: HebrewMonth) -> Result<Self, CalendarError> {
        Self::from_parts(self.year, month, self.day)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidDay` if `day` is not in this month.
    pub fn with_day(&self, day: u8) -> Result<Self, CalendarError> {
        Self::from_parts(self.year, self.month, day)
    }
}

impl PartialEq for HebrewDate {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute
    }
}

impl Eq for HebrewDate {}

impl Hash for HebrewDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute.hash(state);
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year.get(), self.month.number(), self.day)
    }
}

impl FromStr for HebrewDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_iso_date(s)?;
        Self::from_parts(HebrewYear::from_i64(year)?, HebrewMonth::from_number(month)?, day)
    }
}

impl TryFrom<CivilDate> for HebrewDate {
    type Error = CalendarError;

    fn try_from(value: CivilDate) -> Result<Self, Self::Error> {
        Self::from_civil(value)
    }
}

impl serde::Serialize for HebrewDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HebrewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hebrew(year: u32, month: HebrewMonth, day: u8) -> HebrewDate {
        HebrewDate::new(year, month, day).unwrap()
    }

    fn civil(year: u16, month: u8, day: u8) -> CivilDate {
        CivilDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_invalid() {
        assert!(matches!(
            HebrewDate::new(0, HebrewMonth::Tishrei, 1),
            Err(CalendarError::InvalidYear(0))
        ));
        assert!(matches!(
            HebrewDate::new(5777, HebrewMonth::AdarII, 1),
            Err(CalendarError::InvalidMonth(13))
        ));
        assert!(matches!(
            HebrewDate::new(5777, HebrewMonth::Tishrei, 0),
            Err(CalendarError::InvalidDay { .. })
        ));
        // 5777 is chaserim: Cheshvan has 29 days
        assert!(matches!(
            HebrewDate::new(5777, HebrewMonth::Cheshvan, 30),
            Err(CalendarError::InvalidDay { year: 5777, month: 8, day: 30 })
        ));
        assert!(HebrewDate::new(5776, HebrewMonth::Cheshvan, 30).is_ok());
        assert!(HebrewDate::new(5776, HebrewMonth::AdarII, 29).is_ok());
        assert!(HebrewDate::new(5776, HebrewMonth::AdarII, 30).is_err());
    }

    #[test]
    fn test_known_conversions() {
        struct TestCase {
            hebrew: (u32, HebrewMonth, u8),
            civil:  (u16, u8, u8),
        }

        let cases = [
            TestCase { hebrew: (5777, HebrewMonth::Tishrei, 1), civil: (2016, 10, 3) },
            TestCase { hebrew: (5778, HebrewMonth::Teves, 10), civil: (2017, 12, 28) },
            TestCase { hebrew: (5784, HebrewMonth::Tishrei, 1), civil: (2023, 9, 16) },
            TestCase { hebrew: (5740, HebrewMonth::Shevat, 15), civil: (1980, 2, 2) },
            TestCase { hebrew: (5684, HebrewMonth::Tishrei, 1), civil: (1923, 9, 11) },
            TestCase { hebrew: (5735, HebrewMonth::Tammuz, 15), civil: (1975, 6, 24) },
            TestCase { hebrew: (5783, HebrewMonth::Av, 9), civil: (2023, 7, 27) },
            TestCase { hebrew: (5766, HebrewMonth::Tishrei, 10), civil: (2005, 10, 13) },
        ];

        for case in cases {
            let (year, month, day) = case.hebrew;
            let date = hebrew(year, month, day);
            let expected = civil(case.civil.0, case.civil.1, case.civil.2);
            assert_eq!(date.to_civil().unwrap(), expected, "{date}");
            assert_eq!(HebrewDate::from_civil(expected).unwrap(), date);
            assert_eq!(date.absolute(), expected.to_absolute());
        }
    }

    #[test]
    fn test_first_day_of_calendar() {
        let first = hebrew(1, HebrewMonth::Tishrei, 1);
        assert_eq!(first.absolute(), -1_373_427);
        assert_eq!(first.weekday(), Weekday::Monday);
        assert_eq!(HebrewDate::from_absolute(-1_373_427).unwrap(), first);
        assert!(matches!(
            HebrewDate::from_absolute(-1_373_428),
            Err(CalendarError::OutOfRange(-1_373_428))
        ));
        assert!(first.yesterday().is_err());
        assert!(matches!(
            HebrewDate::from_absolute(i64::MAX),
            Err(CalendarError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_absolute_round_trip() {
        let start = civil(1999, 6, 1).to_absolute();
        for absolute in start..start + 9_000 {
            let date = HebrewDate::from_absolute(absolute).unwrap();
            let rebuilt = HebrewDate::from_parts(date.year(), date.month(), date.day()).unwrap();
            assert_eq!(rebuilt.absolute(), absolute, "round trip failed for {date}");
        }
    }

    #[test]
    fn test_advance_across_boundaries() {
        let last_of_year = hebrew(5777, HebrewMonth::Elul, 29);
        assert_eq!(last_of_year.tomorrow().unwrap(), hebrew(5778, HebrewMonth::Tishrei, 1));
        assert_eq!(
            hebrew(5778, HebrewMonth::Tishrei, 1).yesterday().unwrap(),
            last_of_year
        );
        assert_eq!(
            hebrew(5784, HebrewMonth::AdarII, 29).tomorrow().unwrap(),
            hebrew(5784, HebrewMonth::Nissan, 1)
        );
        assert_eq!(
            hebrew(5783, HebrewMonth::Teves, 1).advance(100).unwrap(),
            hebrew(5783, HebrewMonth::Nissan, 13)
        );
        assert_eq!(
            hebrew(5783, HebrewMonth::Nissan, 13).advance(-100).unwrap(),
            hebrew(5783, HebrewMonth::Teves, 1)
        );
    }

    #[test]
    fn test_add_months() {
        let shevat = hebrew(5784, HebrewMonth::Shevat, 30);
        assert_eq!(shevat.add_months(1).unwrap(), hebrew(5784, HebrewMonth::Adar, 30));
        assert_eq!(shevat.add_months(2).unwrap(), hebrew(5784, HebrewMonth::AdarII, 29));
        assert_eq!(shevat.add_months(3).unwrap(), hebrew(5784, HebrewMonth::Nissan, 30));

        // common year: Adar is followed directly by Nissan
        let common = hebrew(5783, HebrewMonth::Shevat, 15);
        assert_eq!(common.add_months(2).unwrap(), hebrew(5783, HebrewMonth::Nissan, 15));

        let elul = hebrew(5783, HebrewMonth::Elul, 10);
        assert_eq!(elul.add_months(1).unwrap(), hebrew(5784, HebrewMonth::Tishrei, 10));
        assert_eq!(
            hebrew(5784, HebrewMonth::Tishrei, 10).add_months(-1).unwrap(),
            elul
        );
        assert_eq!(
            hebrew(5784, HebrewMonth::Nissan, 1).add_months(-1).unwrap(),
            hebrew(5784, HebrewMonth::AdarII, 1)
        );

        let kislev = hebrew(5777, HebrewMonth::Kislev, 5);
        assert_eq!(kislev.add_months(235).unwrap(), hebrew(5796, HebrewMonth::Kislev, 5));
        assert_eq!(kislev.add_months(-235).unwrap(), hebrew(5758, HebrewMonth::Kislev, 5));
        assert_eq!(kislev.add_months(0).unwrap(), kislev);

        assert!(hebrew(1, HebrewMonth::Tishrei, 1).add_months(-1).is_err());
    }

    #[test]
    fn test_add_years() {
        assert_eq!(
            hebrew(5784, HebrewMonth::AdarII, 14).add_years(1).unwrap(),
            hebrew(5785, HebrewMonth::Adar, 14)
        );
        assert_eq!(
            hebrew(5784, HebrewMonth::Adar, 30).add_years(1).unwrap(),
            hebrew(5785, HebrewMonth::Adar, 29)
        );
        assert_eq!(
            hebrew(5759, HebrewMonth::Cheshvan, 30).add_years(3).unwrap(),
            hebrew(5762, HebrewMonth::Cheshvan, 29)
        );
        assert_eq!(
            hebrew(5777, HebrewMonth::Sivan, 6).add_years(-10).unwrap(),
            hebrew(5767, HebrewMonth::Sivan, 6)
        );
        assert!(matches!(
            hebrew(5, HebrewMonth::Sivan, 6).add_years(-5),
            Err(CalendarError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_with_setters() {
        let date = hebrew(5776, HebrewMonth::AdarII, 14);
        assert_eq!(date.with_day(15).unwrap(), hebrew(5776, HebrewMonth::AdarII, 15));
        assert_eq!(date.with_month(HebrewMonth::Nissan).unwrap(), hebrew(5776, HebrewMonth::Nissan, 14));
        assert!(date.with_year(5777).is_err());
        assert!(date.with_day(30).is_err());
    }

    #[test]
    fn test_accessors() {
        let date = hebrew(5777, HebrewMonth::Nissan, 1);
        assert_eq!(date.day_of_year(), 177);
        assert_eq!(date.days_in_month(), 30);
        assert_eq!(date.days_in_year(), 353);
        assert_eq!(date.kviah(), Kviah::Chaserim);
        assert!(!date.is_leap_year());
        assert_eq!(hebrew(5777, HebrewMonth::Tishrei, 1).day_of_year(), 1);
        assert_eq!(hebrew(5777, HebrewMonth::Tishrei, 1).molad().weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_ordering_and_hash() {
        use std::collections::HashSet;

        let a = hebrew(5783, HebrewMonth::Elul, 29);
        let b = hebrew(5784, HebrewMonth::Tishrei, 1);
        // Nissan (month 1) sorts after Tishrei (month 7) of the same year
        let c = hebrew(5784, HebrewMonth::Nissan, 1);
        assert!(a < b);
        assert!(b < c);

        let set: HashSet<HebrewDate> = [a, b, a.tomorrow().unwrap()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_display_serde() {
        let date: HebrewDate = "5777-07-01".parse().unwrap();
        assert_eq!(date, hebrew(5777, HebrewMonth::Tishrei, 1));
        assert_eq!(date.to_string(), "5777-07-01");

        assert!(matches!("5777-13-01".parse::<HebrewDate>(), Err(CalendarError::InvalidMonth(13))));
        assert!(matches!("0-07-01".parse::<HebrewDate>(), Err(CalendarError::InvalidYear(0))));
        assert!(matches!("".parse::<HebrewDate>(), Err(CalendarError::EmptyInput)));

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"5777-07-01\"");
        let parsed: HebrewDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
        assert!(serde_json::from_str::<HebrewDate>("\"5777-08-30\"").is_err());
    }
}
