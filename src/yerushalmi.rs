//! Daf Yomi Yerushalmi, following the Vilna edition.
//!
//! Yom Kippur and Tisha B'Av (as observed) are skipped, so every cycle runs
//! longer than its page count by the number of those days it spans.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::{DafError, HebrewDate, HebrewMonth, HebrewYear, Weekday, absolute_from_parts, prelude::*};

/// A tractate of the Jerusalem Talmud, in Daf Yomi order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum YerushalmiMasechta {
    Berachos,
    Peah,
    Demai,
    Kilayim,
    Sheviis,
    Terumos,
    Maasros,
    MaaserSheni,
    Chalah,
    Orlah,
    Bikurim,
    Shabbos,
    Eruvin,
    Pesachim,
    Beitzah,
    RoshHashanah,
    Yoma,
    Sukah,
    Taanis,
    Shekalim,
    Megilah,
    Chagigah,
    MoedKatan,
    Yevamos,
    Kesuvos,
    Sotah,
    Nedarim,
    Nazir,
    Gitin,
    Kidushin,
    BavaKama,
    BavaMetzia,
    BavaBasra,
    Shevuos,
    Makos,
    Sanhedrin,
    AvodahZarah,
    Horayos,
    Nidah,
}

const PAGES: [u16; 39] = [
    68, 37, 34, 44, 31, 59, 26, 33, 28, 20, 13, 92, 65, 71, 22, 22, 42, 26, 26, 33, 34, 22, 19, 85, 72, 47, 40, 47, 54,
    48, 44, 37, 34, 44, 9, 57, 37, 19, 13,
];

const NAMES: [&str; 39] = [
    "Berachos",
    "Pe'ah",
    "Demai",
    "Kilayim",
    "Shevi'is",
    "Terumos",
    "Ma'asros",
    "Ma'aser Sheni",
    "Chalah",
    "Orlah",
    "Bikurim",
    "Shabbos",
    "Eruvin",
    "Pesachim",
    "Beitzah",
    "Rosh Hashanah",
    "Yoma",
    "Sukah",
    "Ta'anis",
    "Shekalim",
    "Megilah",
    "Chagigah",
    "Moed Katan",
    "Yevamos",
    "Kesuvos",
    "Sotah",
    "Nedarim",
    "Nazir",
    "Gitin",
    "Kidushin",
    "Bava Kama",
    "Bava Metzia",
    "Bava Basra",
    "Shevuos",
    "Makos",
    "Sanhedrin",
    "Avodah Zarah",
    "Horayos",
    "Nidah",
];

/// Pages in a full cycle
const WHOLE_SHAS: i64 = 1554;

const CYCLE_START: i64 = absolute_from_parts(1980, 2, 2);

impl YerushalmiMasechta {
    pub const ALL: [Self; 39] = [
        Self::Berachos,
        Self::Peah,
        Self::Demai,
        Self::Kilayim,
        Self::Sheviis,
        Self::Terumos,
        Self::Maasros,
        Self::MaaserSheni,
        Self::Chalah,
        Self::Orlah,
        Self::Bikurim,
        Self::Shabbos,
        Self::Eruvin,
        Self::Pesachim,
        Self::Beitzah,
        Self::RoshHashanah,
        Self::Yoma,
        Self::Sukah,
        Self::Taanis,
        Self::Shekalim,
        Self::Megilah,
        Self::Chagigah,
        Self::MoedKatan,
        Self::Yevamos,
        Self::Kesuvos,
        Self::Sotah,
        Self::Nedarim,
        Self::Nazir,
        Self::Gitin,
        Self::Kidushin,
        Self::BavaKama,
        Self::BavaMetzia,
        Self::BavaBasra,
        Self::Shevuos,
        Self::Makos,
        Self::Sanhedrin,
        Self::AvodahZarah,
        Self::Horayos,
        Self::Nidah,
    ];

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    pub const fn pages(self) -> u16 {
        PAGES[self as usize]
    }
}

impl fmt::Display for YerushalmiMasechta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day's page of the Yerushalmi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{masechta} {page}")]
pub struct YerushalmiDaf {
    masechta: YerushalmiMasechta,
    page:     u16,
}

impl YerushalmiDaf {
    pub const fn new(masechta: YerushalmiMasechta, page: u16) -> Self {
        Self { masechta, page }
    }

    #[inline]
    pub const fn masechta(&self) -> YerushalmiMasechta {
        self.masechta
    }

    #[inline]
    pub const fn page(&self) -> u16 {
        self.page
    }
}

/// Tisha B'Av as kept: the 10th when the 9th is Shabbos.
fn observed_tisha_beav(year: HebrewYear) -> Result<i64, DafError> {
    let ninth = HebrewDate::from_parts(year, HebrewMonth::Av, 9)?;
    Ok(if ninth.weekday() == Weekday::Saturday { ninth.absolute() + 1 } else { ninth.absolute() })
}

fn yom_kippur(year: HebrewYear) -> Result<i64, DafError> {
    Ok(HebrewDate::from_parts(year, HebrewMonth::Tishrei, 10)?.absolute())
}

/// Days with no learning strictly between `start` and `end`.
fn skipped_days_between(start: i64, end: i64) -> Result<i64, DafError> {
    let mut year = HebrewDate::from_absolute(start)?.year();
    let last = HebrewDate::from_absolute(end)?.year();
    let mut count = 0;

    while year <= last {
        for day in [yom_kippur(year)?, observed_tisha_beav(year)?] {
            if start < day && day < end {
                count += 1;
            }
        }
        year = year.next()?;
    }
    Ok(count)
}

fn is_skipped(date: &HebrewDate) -> Result<bool, DafError> {
    let absolute = date.absolute();
    Ok(absolute == yom_kippur(date.year())? || absolute == observed_tisha_beav(date.year())?)
}

/// The Daf Yomi Yerushalmi page for an absolute day, or `None` on Yom Kippur and Tisha B'Av.
///
/// # Errors
/// Returns `DafError::OutOfCycleRange` before 1980-02-02.
pub fn yerushalmi(absolute: i64) -> Result<Option<YerushalmiDaf>, DafError> {
    if absolute < CYCLE_START {
        return Err(DafError::OutOfCycleRange {
            absolute,
            cycle_start: CYCLE_START,
        });
    }

    let date = HebrewDate::from_absolute(absolute)?;
    if is_skipped(&date)? {
        debug!(%date, "no yerushalmi daf");
        return Ok(None);
    }

    let mut cycle_start = CYCLE_START;
    let mut next_cycle = CYCLE_START;
    while absolute >= next_cycle {
        cycle_start = next_cycle;
        next_cycle = cycle_start + WHOLE_SHAS;
        next_cycle += skipped_days_between(cycle_start, next_cycle)?;
        trace!(cycle_start, next_cycle, "yerushalmi cycle");
    }

    let mut remaining = absolute - cycle_start - skipped_days_between(cycle_start, absolute)?;
    debug!(absolute, cycle_start, offset = remaining, "daf yomi yerushalmi");

    for masechta in YerushalmiMasechta::ALL {
        let pages = i64::from(masechta.pages());
        if remaining < pages {
            let page = u16::try_from(remaining + 1).map_err(|_| DafError::OutOfCycleRange {
                absolute,
                cycle_start,
            })?;
            return Ok(Some(YerushalmiDaf::new(masechta, page)));
        }
        remaining -= pages;
    }

    Err(DafError::OutOfCycleRange {
        absolute,
        cycle_start,
    })
}
