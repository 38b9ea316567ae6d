//! Hebrew calendar arithmetic, significant-day classification and Daf Yomi cycles.
//!
//! Every value in this crate is an immutable, validated `Copy` type. Dates are bridged
//! through an absolute day number where day 1 is the proleptic-Gregorian 0001-01-01.

mod calendar;
mod civil;
mod consts;
mod daf;
mod date;
mod holidays;
mod molad;
mod month;
mod prelude;
mod range;
mod tefila;
mod weekday;
mod year;
mod yerushalmi;

pub use calendar::{CalendarOptions, JewishCalendar};
pub use civil::{CivilDate, is_gregorian_leap_year};
pub(crate) use civil::absolute_from_parts;
pub use consts::*;
pub use daf::{Daf, DafError, Masechta, bavli};
pub use date::HebrewDate;
pub use holidays::{
    Holiday, SpecialShabbos, Tag, classify, day_of_chanukah, day_of_omer, holidays_in, special_shabbos, yom_tov,
};
pub use molad::Molad;
pub use month::HebrewMonth;
pub use range::{DateRange, RangeError};
pub use tefila::TefilaRules;
pub use weekday::Weekday;
pub use year::{HebrewYear, Kviah, YearType};
pub use yerushalmi::{YerushalmiDaf, YerushalmiMasechta, yerushalmi};

use crate::prelude::*;

/// Errors raised while constructing, parsing or converting calendar values.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {_0}")]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Absolute day {_0} is outside the supported range")]
    OutOfRange(i64),
}

impl std::error::Error for CalendarError {}

/// Splits `YYYY-MM-DD` into its numeric components.
pub(crate) fn split_iso_date(s: &str) -> Result<(i64, u8, u8), CalendarError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CalendarError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {trimmed}",
            parts.len()
        )));
    }

    let year = parts[0]
        .parse::<i64>()
        .map_err(|_| CalendarError::InvalidFormat(parts[0].to_owned()))?;
    let month = parts[1]
        .parse::<u8>()
        .map_err(|_| CalendarError::InvalidFormat(parts[1].to_owned()))?;
    let day = parts[2]
        .parse::<u8>()
        .map_err(|_| CalendarError::InvalidFormat(parts[2].to_owned()))?;

    Ok((year, month, day))
}
