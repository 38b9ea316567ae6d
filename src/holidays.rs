//! Significant-day classification.
//!
//! The primary holiday of a day is found by walking [`RULES`] in order; the first rule whose
//! month, day and observance scope all match wins. Rosh Chodesh, Chanukah and Omer counts and
//! the special Shabbosos are layered on top as additional [`Tag`]s.

use crate::{CalendarOptions, DateRange, HebrewDate, HebrewMonth, Weekday, prelude::*};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A holiday, fast or minor festival. At most one applies to any day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Holiday {
    ErevPesach,
    Pesach,
    CholHamoedPesach,
    PesachSheni,
    LagBaomer,
    ErevShavuos,
    Shavuos,
    SeventeenthOfTammuz,
    TishaBeav,
    TuBeav,
    ErevRoshHashana,
    RoshHashana,
    FastOfGedalyah,
    ErevYomKippur,
    YomKippur,
    ErevSuccos,
    Succos,
    CholHamoedSuccos,
    HoshanaRabba,
    SheminiAtzeres,
    SimchasTorah,
    Chanukah,
    TenthOfTeves,
    TuBishvat,
    FastOfEsther,
    Purim,
    ShushanPurim,
    PurimKatan,
    ShushanPurimKatan,
    YomHashoah,
    YomHazikaron,
    YomHaatzmaut,
    YomYerushalayim,
}

/// The Shabbosos named for the extra Torah reading or haftarah they carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum SpecialShabbos {
    Shuva,
    Shekalim,
    Zachor,
    Parah,
    HaChodesh,
    HaGadol,
}

/// One fact about a day. A day carries a set of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    Holiday(Holiday),
    RoshChodesh,
    ErevRoshChodesh,
    ChanukahDay(u8),
    OmerDay(u8),
    SpecialShabbos(SpecialShabbos),
}

#[derive(Debug, Clone, Copy)]
enum MonthSel {
    Is(HebrewMonth),
    /// Adar of a common year, Adar II of a leap year
    PurimAdar,
    /// Adar I; only exists in a leap year
    FirstAdarOfLeap,
    Any,
}

impl MonthSel {
    const fn resolve(self, leap_year: bool) -> Option<HebrewMonth> {
        match self {
            Self::Is(month) => Some(month),
            Self::PurimAdar => Some(HebrewMonth::purim_adar(leap_year)),
            Self::FirstAdarOfLeap if leap_year => Some(HebrewMonth::Adar),
            Self::FirstAdarOfLeap | Self::Any => None,
        }
    }

    fn matches(self, date: &HebrewDate) -> bool {
        match self {
            Self::Any => true,
            sel => sel.resolve(date.is_leap_year()) == Some(date.month()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum When {
    Day(u8),
    /// Inclusive span of days
    Days(u8, u8),
    /// The day itself, or the following Sunday when it falls on Shabbos
    OffShabbos(u8),
    /// The day itself, or the preceding Thursday when it falls on Friday or Shabbos
    BeforeWeekend(u8),
    /// The eight days from 25 Kislev
    Chanukah,
    /// Israeli commemorations shifted around Shabbos by weekday rules
    Modern(fn(u8, Weekday) -> bool),
}

impl When {
    fn matches(self, date: &HebrewDate) -> bool {
        let day = date.day();
        let weekday = date.weekday();
        match self {
            Self::Day(d) => day == d,
            Self::Days(first, last) => (first..=last).contains(&day),
            Self::OffShabbos(d) => {
                (day == d && weekday != Weekday::Saturday) || (day == d + 1 && weekday == Weekday::Sunday)
            },
            Self::BeforeWeekend(d) => {
                (day == d && !matches!(weekday, Weekday::Friday | Weekday::Saturday))
                    || ((day == d - 1 || day == d - 2) && weekday == Weekday::Thursday)
            },
            Self::Chanukah => day_of_chanukah(date).is_some(),
            Self::Modern(rule) => rule(day, weekday),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Everywhere,
    Diaspora,
    /// Only with modern holidays enabled, and only in Israel
    ModernIsrael,
}

impl Scope {
    const fn applies(self, options: &CalendarOptions) -> bool {
        match self {
            Self::Everywhere => true,
            Self::Diaspora => !options.in_israel,
            Self::ModernIsrael => options.use_modern_holidays && options.in_israel,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    month:   MonthSel,
    when:    When,
    scope:   Scope,
    holiday: Holiday,
}

const fn rule(month: MonthSel, when: When, scope: Scope, holiday: Holiday) -> Rule {
    Rule {
        month,
        when,
        scope,
        holiday,
    }
}

fn yom_hashoah(day: u8, weekday: Weekday) -> bool {
    (day == 26 && weekday == Weekday::Thursday)
        || (day == 28 && weekday == Weekday::Monday)
        || (day == 27 && !matches!(weekday, Weekday::Sunday | Weekday::Friday))
}

fn yom_hazikaron(day: u8, weekday: Weekday) -> bool {
    (day == 4 && weekday == Weekday::Tuesday)
        || ((day == 2 || day == 3) && weekday == Weekday::Wednesday)
        || (day == 5 && weekday == Weekday::Monday)
}

fn yom_haatzmaut(day: u8, weekday: Weekday) -> bool {
    (day == 5 && weekday == Weekday::Wednesday)
        || ((day == 3 || day == 4) && weekday == Weekday::Thursday)
        || (day == 6 && weekday == Weekday::Tuesday)
}

use HebrewMonth::{Av, Elul, Iyar, Nissan, Shevat, Sivan, Tammuz, Teves, Tishrei};
use MonthSel::{Any, FirstAdarOfLeap, Is, PurimAdar};
use Scope::{Diaspora, Everywhere, ModernIsrael};
use When::{BeforeWeekend, Chanukah, Day, Days, Modern, OffShabbos};

/// Ordered rule table. Order matters where spans overlap: the Diaspora second day of Pesach
/// and Succos comes before the Chol HaMoed span that claims the same day in Israel.
const RULES: &[Rule] = &[
    rule(Is(Nissan), Day(14), Everywhere, Holiday::ErevPesach),
    rule(Is(Nissan), Day(15), Everywhere, Holiday::Pesach),
    rule(Is(Nissan), Day(21), Everywhere, Holiday::Pesach),
    rule(Is(Nissan), Day(16), Diaspora, Holiday::Pesach),
    rule(Is(Nissan), Day(22), Diaspora, Holiday::Pesach),
    rule(Is(Nissan), Days(16, 20), Everywhere, Holiday::CholHamoedPesach),
    rule(Is(Nissan), Modern(yom_hashoah), ModernIsrael, Holiday::YomHashoah),
    rule(Is(Iyar), Modern(yom_hazikaron), ModernIsrael, Holiday::YomHazikaron),
    rule(Is(Iyar), Modern(yom_haatzmaut), ModernIsrael, Holiday::YomHaatzmaut),
    rule(Is(Iyar), Day(14), Everywhere, Holiday::PesachSheni),
    rule(Is(Iyar), Day(18), Everywhere, Holiday::LagBaomer),
    rule(Is(Iyar), Day(28), ModernIsrael, Holiday::YomYerushalayim),
    rule(Is(Sivan), Day(5), Everywhere, Holiday::ErevShavuos),
    rule(Is(Sivan), Day(6), Everywhere, Holiday::Shavuos),
    rule(Is(Sivan), Day(7), Diaspora, Holiday::Shavuos),
    rule(Is(Tammuz), OffShabbos(17), Everywhere, Holiday::SeventeenthOfTammuz),
    rule(Is(Av), OffShabbos(9), Everywhere, Holiday::TishaBeav),
    rule(Is(Av), Day(15), Everywhere, Holiday::TuBeav),
    rule(Is(Elul), Day(29), Everywhere, Holiday::ErevRoshHashana),
    rule(Is(Tishrei), Days(1, 2), Everywhere, Holiday::RoshHashana),
    rule(Is(Tishrei), OffShabbos(3), Everywhere, Holiday::FastOfGedalyah),
    rule(Is(Tishrei), Day(9), Everywhere, Holiday::ErevYomKippur),
    rule(Is(Tishrei), Day(10), Everywhere, Holiday::YomKippur),
    rule(Is(Tishrei), Day(14), Everywhere, Holiday::ErevSuccos),
    rule(Is(Tishrei), Day(15), Everywhere, Holiday::Succos),
    rule(Is(Tishrei), Day(16), Diaspora, Holiday::Succos),
    rule(Is(Tishrei), Days(16, 20), Everywhere, Holiday::CholHamoedSuccos),
    rule(Is(Tishrei), Day(21), Everywhere, Holiday::HoshanaRabba),
    rule(Is(Tishrei), Day(22), Everywhere, Holiday::SheminiAtzeres),
    rule(Is(Tishrei), Day(23), Diaspora, Holiday::SimchasTorah),
    rule(Any, Chanukah, Everywhere, Holiday::Chanukah),
    rule(Is(Teves), Day(10), Everywhere, Holiday::TenthOfTeves),
    rule(Is(Shevat), Day(15), Everywhere, Holiday::TuBishvat),
    rule(PurimAdar, BeforeWeekend(13), Everywhere, Holiday::FastOfEsther),
    rule(PurimAdar, Day(14), Everywhere, Holiday::Purim),
    rule(PurimAdar, Day(15), Everywhere, Holiday::ShushanPurim),
    rule(FirstAdarOfLeap, Day(14), Everywhere, Holiday::PurimKatan),
    rule(FirstAdarOfLeap, Day(15), Everywhere, Holiday::ShushanPurimKatan),
];

/// How each special Shabbos is anchored: the Shabbos on or before `day` of `month`,
/// moved back `weeks_before` weeks.
struct Anchor {
    shabbos:      SpecialShabbos,
    month:        MonthSel,
    day:          u8,
    weeks_before: i64,
}

const SPECIAL_SHABBOSOS: [Anchor; 6] = [
    Anchor { shabbos: SpecialShabbos::Shuva, month: Is(Tishrei), day: 9, weeks_before: 0 },
    Anchor { shabbos: SpecialShabbos::Shekalim, month: PurimAdar, day: 1, weeks_before: 0 },
    Anchor { shabbos: SpecialShabbos::Zachor, month: PurimAdar, day: 13, weeks_before: 0 },
    Anchor { shabbos: SpecialShabbos::Parah, month: Is(Nissan), day: 1, weeks_before: 1 },
    Anchor { shabbos: SpecialShabbos::HaChodesh, month: Is(Nissan), day: 1, weeks_before: 0 },
    Anchor { shabbos: SpecialShabbos::HaGadol, month: Is(Nissan), day: 14, weeks_before: 0 },
];

/// The primary holiday of a day, if any.
pub fn yom_tov(date: &HebrewDate, options: &CalendarOptions) -> Option<Holiday> {
    RULES
        .iter()
        .find(|r| r.scope.applies(options) && r.month.matches(date) && r.when.matches(date))
        .map(|r| r.holiday)
}

/// Every significant-day tag that applies to `date`.
pub fn classify(date: &HebrewDate, options: &CalendarOptions) -> BTreeSet<Tag> {
    let mut tags = BTreeSet::new();

    if let Some(holiday) = yom_tov(date, options) {
        tags.insert(Tag::Holiday(holiday));
    }
    if is_rosh_chodesh(date) {
        tags.insert(Tag::RoshChodesh);
    }
    if is_erev_rosh_chodesh(date) {
        tags.insert(Tag::ErevRoshChodesh);
    }
    if let Some(day) = day_of_chanukah(date) {
        tags.insert(Tag::ChanukahDay(day));
    }
    if let Some(day) = day_of_omer(date) {
        tags.insert(Tag::OmerDay(day));
    }
    if let Some(shabbos) = special_shabbos(date) {
        tags.insert(Tag::SpecialShabbos(shabbos));
    }

    tags
}

/// Every day in `range` that has a holiday, paired with it.
pub fn holidays_in(range: &DateRange, options: &CalendarOptions) -> Vec<(HebrewDate, Holiday)> {
    range
        .days()
        .filter_map(|date| yom_tov(&date, options).map(|holiday| (date, holiday)))
        .collect()
}

/// 1 Tishrei is Rosh Hashana, not Rosh Chodesh.
pub(crate) fn is_rosh_chodesh(date: &HebrewDate) -> bool {
    (date.day() == 1 && date.month() != HebrewMonth::Tishrei) || date.day() == 30
}

/// 29 Elul is Erev Rosh Hashana, not Erev Rosh Chodesh.
pub(crate) fn is_erev_rosh_chodesh(date: &HebrewDate) -> bool {
    date.day() == 29 && date.month() != HebrewMonth::Elul
}

/// Day of Chanukah, 1 through 8. Counted from 25 Kislev so that a short Kislev
/// pushes the last day to 3 Teves.
pub fn day_of_chanukah(date: &HebrewDate) -> Option<u8> {
    if !matches!(date.month(), HebrewMonth::Kislev | HebrewMonth::Teves) {
        return None;
    }
    let first = HebrewDate::from_parts(date.year(), HebrewMonth::Kislev, 25).ok()?;
    let offset = date.absolute() - first.absolute();
    (0..8).contains(&offset).then(|| offset as u8 + 1)
}

/// Day of the Omer, 1 through 49, counted from 16 Nissan.
pub fn day_of_omer(date: &HebrewDate) -> Option<u8> {
    let day = date.day();
    match date.month() {
        HebrewMonth::Nissan if day >= 16 => Some(day - 15),
        HebrewMonth::Iyar => Some(day + 15),
        HebrewMonth::Sivan if day < 6 => Some(day + 44),
        _ => None,
    }
}

/// The special Shabbos `date` is, if it is one.
pub fn special_shabbos(date: &HebrewDate) -> Option<SpecialShabbos> {
    if date.weekday() != Weekday::Saturday {
        return None;
    }
    let year = date.year();
    SPECIAL_SHABBOSOS.iter().find_map(|anchor| {
        let month = anchor.month.resolve(year.is_leap())?;
        let target = HebrewDate::from_parts(year, month, anchor.day).ok()?;
        let shabbos = shabbos_on_or_before(target.absolute()) - 7 * anchor.weeks_before;
        (shabbos == date.absolute()).then_some(anchor.shabbos)
    })
}

fn shabbos_on_or_before(absolute: i64) -> i64 {
    absolute - Weekday::from_absolute(absolute).days_since_shabbos()
}
