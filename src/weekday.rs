use crate::{CalendarError, prelude::*};
use serde::{Deserialize, Serialize};

/// Day of the week, numbered the way the Hebrew calendar counts them (Sunday = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    /// Shabbos
    Saturday = 7,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday of an absolute day number. Day 1 (0001-01-01) is a Monday.
    pub const fn from_absolute(absolute: i64) -> Self {
        Self::ALL[absolute.rem_euclid(7) as usize]
    }

    /// Creates a weekday from its number, Sunday = 1 through Shabbos = 7.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidFormat` for numbers outside `1..=7`.
    pub fn from_number(value: u8) -> Result<Self, CalendarError> {
        match value {
            1..=7 => Ok(Self::ALL[usize::from(value - 1)]),
            _ => Err(CalendarError::InvalidFormat(format!("Invalid weekday number: {value}"))),
        }
    }

    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Days from the most recent Shabbos (inclusive) to this day, Shabbos itself being 0.
    #[inline]
    pub const fn days_since_shabbos(self) -> i64 {
        (self as i64) % 7
    }

    pub const fn is_shabbos(self) -> bool {
        matches!(self, Self::Saturday)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}
