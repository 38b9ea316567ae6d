//! Daf Yomi Bavli: one page of the Babylonian Talmud a day, in a fixed tractate order.
//!
//! The first cycle began on 1923-09-11. From the eighth cycle (1975-06-24) Shekalim is
//! learned from the 22 page Vilna edition instead of 13 pages, lengthening each cycle by nine days.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::{CalendarError, absolute_from_parts, prelude::*};

/// A tractate of the Babylonian Talmud, in Daf Yomi order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Masechta {
    Berachos,
    Shabbos,
    Eruvin,
    Pesachim,
    Shekalim,
    Yoma,
    Sukkah,
    Beitzah,
    RoshHashana,
    Taanis,
    Megillah,
    MoedKatan,
    Chagigah,
    Yevamos,
    Kesubos,
    Nedarim,
    Nazir,
    Sotah,
    Gitin,
    Kiddushin,
    BavaKamma,
    BavaMetzia,
    BavaBasra,
    Sanhedrin,
    Makkos,
    Shevuos,
    AvodahZarah,
    Horiyos,
    Zevachim,
    Menachos,
    Chullin,
    Bechoros,
    Arachin,
    Temurah,
    Kerisos,
    Meilah,
    Kinnim,
    Tamid,
    Midos,
    Niddah,
}

/// Pages per tractate as learned since 1975, counting the title page.
const PAGES: [u16; 40] = [
    64, 157, 105, 121, 22, 88, 56, 40, 35, 31, 32, 29, 27, 122, 112, 91, 66, 49, 90, 82, 119, 119, 176, 113, 24, 49,
    76, 14, 120, 110, 142, 61, 34, 34, 28, 22, 4, 9, 5, 73,
];

const NAMES: [&str; 40] = [
    "Berachos",
    "Shabbos",
    "Eruvin",
    "Pesachim",
    "Shekalim",
    "Yoma",
    "Sukkah",
    "Beitzah",
    "Rosh Hashana",
    "Taanis",
    "Megillah",
    "Moed Katan",
    "Chagigah",
    "Yevamos",
    "Kesubos",
    "Nedarim",
    "Nazir",
    "Sotah",
    "Gitin",
    "Kiddushin",
    "Bava Kamma",
    "Bava Metzia",
    "Bava Basra",
    "Sanhedrin",
    "Makkos",
    "Shevuos",
    "Avodah Zarah",
    "Horiyos",
    "Zevachim",
    "Menachos",
    "Chullin",
    "Bechoros",
    "Arachin",
    "Temurah",
    "Kerisos",
    "Meilah",
    "Kinnim",
    "Tamid",
    "Midos",
    "Niddah",
];

impl Masechta {
    pub const ALL: [Self; 40] = [
        Self::Berachos,
        Self::Shabbos,
        Self::Eruvin,
        Self::Pesachim,
        Self::Shekalim,
        Self::Yoma,
        Self::Sukkah,
        Self::Beitzah,
        Self::RoshHashana,
        Self::Taanis,
        Self::Megillah,
        Self::MoedKatan,
        Self::Chagigah,
        Self::Yevamos,
        Self::Kesubos,
        Self::Nedarim,
        Self::Nazir,
        Self::Sotah,
        Self::Gitin,
        Self::Kiddushin,
        Self::BavaKamma,
        Self::BavaMetzia,
        Self::BavaBasra,
        Self::Sanhedrin,
        Self::Makkos,
        Self::Shevuos,
        Self::AvodahZarah,
        Self::Horiyos,
        Self::Zevachim,
        Self::Menachos,
        Self::Chullin,
        Self::Bechoros,
        Self::Arachin,
        Self::Temurah,
        Self::Kerisos,
        Self::Meilah,
        Self::Kinnim,
        Self::Tamid,
        Self::Midos,
        Self::Niddah,
    ];

    /// Position in the cycle, Berachos = 0
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Transliterated name
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Pages in the current (post-1975) cycle, counting the title page.
    pub const fn pages(self) -> u16 {
        PAGES[self as usize]
    }

    /// Kinnim, Tamid and Midos are bound into the back of Meilah's volume,
    /// so their page numbers continue from it.
    const fn page_offset(self) -> u16 {
        match self {
            Self::Kinnim => 21,
            Self::Tamid => 24,
            Self::Midos => 32,
            _ => 0,
        }
    }
}

impl fmt::Display for Masechta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day's page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{masechta} {page}")]
pub struct Daf {
    masechta: Masechta,
    page:     u16,
}

impl Daf {
    pub const fn new(masechta: Masechta, page: u16) -> Self {
        Self { masechta, page }
    }

    #[inline]
    pub const fn masechta(&self) -> Masechta {
        self.masechta
    }

    #[inline]
    pub const fn page(&self) -> u16 {
        self.page
    }
}

/// Error type for Daf Yomi lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DafError {
    /// The date falls before the first cycle began.
    #[error("Absolute day {absolute} is before the first cycle began on day {cycle_start}")]
    OutOfCycleRange { absolute: i64, cycle_start: i64 },

    /// Error converting the date.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// A run of cycles sharing one page table.
#[derive(Debug)]
struct CycleStructure {
    start:          i64,
    first_cycle:    i64,
    cycle_days:     i64,
    shekalim_pages: u16,
}

impl CycleStructure {
    const fn pages(&self, masechta: Masechta) -> u16 {
        match masechta {
            Masechta::Shekalim => self.shekalim_pages,
            other => other.pages(),
        }
    }

    /// The page learned `offset` days into a cycle. Each tractate starts on page 2.
    fn daf_at(&self, offset: i64) -> Option<Daf> {
        let mut remaining = offset;
        for masechta in Masechta::ALL {
            let days = i64::from(self.pages(masechta) - 1);
            if remaining < days {
                let page = u16::try_from(remaining).ok()? + 2 + masechta.page_offset();
                return Some(Daf::new(masechta, page));
            }
            remaining -= days;
        }
        None
    }
}

const ORIGINAL: CycleStructure = CycleStructure {
    start:          absolute_from_parts(1923, 9, 11),
    first_cycle:    1,
    cycle_days:     2702,
    shekalim_pages: 13,
};

const RESTRUCTURED: CycleStructure = CycleStructure {
    start:          absolute_from_parts(1975, 6, 24),
    first_cycle:    8,
    cycle_days:     2711,
    shekalim_pages: 22,
};

/// Latest structure first.
const STRUCTURES: [CycleStructure; 2] = [RESTRUCTURED, ORIGINAL];

/// The Daf Yomi Bavli page for an absolute day.
///
/// # Errors
/// Returns `DafError::OutOfCycleRange` before 1923-09-11.
pub fn bavli(absolute: i64) -> Result<Daf, DafError> {
    let out_of_range = DafError::OutOfCycleRange {
        absolute,
        cycle_start: ORIGINAL.start,
    };
    let structure = STRUCTURES
        .iter()
        .find(|s| absolute >= s.start)
        .ok_or_else(|| out_of_range.clone())?;

    let elapsed = absolute - structure.start;
    let cycle = structure.first_cycle + elapsed / structure.cycle_days;
    let offset = elapsed % structure.cycle_days;
    debug!(absolute, cycle, offset, shekalim_pages = structure.shekalim_pages, "daf yomi bavli");

    structure.daf_at(offset).ok_or(out_of_range)
}
