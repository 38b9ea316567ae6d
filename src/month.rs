use crate::{CalendarError, prelude::*};
use serde::{Deserialize, Serialize};

/// A Hebrew month, numbered from Nissan as the Torah counts them.
///
/// The civil year runs from Tishrei (7) through Elul (6). `AdarII` only exists in leap
/// years, where `Adar` takes the role of Adar I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum HebrewMonth {
    Nissan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Teves = 10,
    Shevat = 11,
    Adar = 12,
    AdarII = 13,
}

impl HebrewMonth {
    /// All months in numeric order (Nissan first).
    pub const ALL: [Self; 13] = [
        Self::Nissan,
        Self::Iyar,
        Self::Sivan,
        Self::Tammuz,
        Self::Av,
        Self::Elul,
        Self::Tishrei,
        Self::Cheshvan,
        Self::Kislev,
        Self::Teves,
        Self::Shevat,
        Self::Adar,
        Self::AdarII,
    ];

    /// Creates a month from its number, Nissan = 1 through Adar II = 13.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for numbers outside `1..=13`.
    pub fn from_number(value: u8) -> Result<Self, CalendarError> {
        match value {
            1..=13 => Ok(Self::ALL[usize::from(value - 1)]),
            _ => Err(CalendarError::InvalidMonth(value)),
        }
    }

    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn exists_in(self, leap_year: bool) -> bool {
        leap_year || !matches!(self, Self::AdarII)
    }

    /// Months in the year, 12 or 13.
    pub const fn months_in_year(leap_year: bool) -> u8 {
        if leap_year { 13 } else { 12 }
    }

    /// Position of this month counting from Tishrei = 1.
    pub const fn month_of_year(self, leap_year: bool) -> u8 {
        let offset = if leap_year { 6 } else { 5 };
        (self as u8 + offset) % Self::months_in_year(leap_year) + 1
    }

    /// Inverse of [`month_of_year`](Self::month_of_year).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` when the position does not exist in the year.
    pub fn from_month_of_year(position: u8, leap_year: bool) -> Result<Self, CalendarError> {
        let count = Self::months_in_year(leap_year);
        if position == 0 || position > count {
            return Err(CalendarError::InvalidMonth(position));
        }
        match (position, leap_year) {
            (1..=6, _) => Self::from_number(position + 6),
            (7, true) => Ok(Self::AdarII),
            (_, true) => Self::from_number(position - 7),
            (_, false) => Self::from_number(position - 6),
        }
    }

    /// Months of a year in calendar order, Tishrei first.
    pub fn in_year_order(leap_year: bool) -> impl Iterator<Item = Self> {
        (1..=Self::months_in_year(leap_year)).filter_map(move |position| Self::from_month_of_year(position, leap_year).ok())
    }

    /// The month in which Purim is kept: Adar, or Adar II in a leap year.
    pub const fn purim_adar(leap_year: bool) -> Self {
        if leap_year { Self::AdarII } else { Self::Adar }
    }
}

impl TryFrom<u8> for HebrewMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<HebrewMonth> for u8 {
    fn from(month: HebrewMonth) -> Self {
        month.number()
    }
}
