use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::consts::{BIRKAS_HACHAMAH_DAY, SOLAR_CYCLE_DAYS};
use crate::holidays::{is_erev_rosh_chodesh, is_rosh_chodesh};
use crate::{
    CalendarError, Daf, DafError, HebrewDate, HebrewMonth, Holiday, Molad, SpecialShabbos, Tag, Weekday,
    YerushalmiDaf, bavli, classify, day_of_chanukah, day_of_omer, special_shabbos, yerushalmi, yom_tov,
};

/// Where and how the calendar is observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    /// Keep the Israeli schedule: one day of yom tov, no Simchas Torah on the 23rd
    pub in_israel:           bool,
    /// Include Yom HaShoah, Yom HaZikaron, Yom HaAtzmaut and Yom Yerushalayim (Israel only)
    pub use_modern_holidays: bool,
    /// A walled city, where Purim is kept on the 15th
    pub mukaf_choma:         bool,
}

/// A Hebrew date paired with the options it is observed under.
///
/// Every predicate here is a composition of the classifier in [`crate::holidays`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JewishCalendar {
    date:    HebrewDate,
    options: CalendarOptions,
}

impl JewishCalendar {
    pub const fn new(date: HebrewDate, options: CalendarOptions) -> Self {
        Self { date, options }
    }

    #[inline]
    pub const fn date(&self) -> HebrewDate {
        self.date
    }

    #[inline]
    pub const fn options(&self) -> CalendarOptions {
        self.options
    }

    #[inline]
    pub const fn in_israel(&self) -> bool {
        self.options.in_israel
    }

    /// The same options one day later.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the next day is not representable.
    pub fn tomorrow(&self) -> Result<Self, CalendarError> {
        Ok(Self::new(self.date.tomorrow()?, self.options))
    }

    /// The same options one day earlier.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` before 1 Tishrei of year 1.
    pub fn yesterday(&self) -> Result<Self, CalendarError> {
        Ok(Self::new(self.date.yesterday()?, self.options))
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    fn month(&self) -> HebrewMonth {
        self.date.month()
    }

    fn day(&self) -> u8 {
        self.date.day()
    }

    /// The primary holiday of the day, if any.
    pub fn holiday(&self) -> Option<Holiday> {
        yom_tov(&self.date, &self.options)
    }

    /// All significant-day tags.
    pub fn tags(&self) -> BTreeSet<Tag> {
        classify(&self.date, &self.options)
    }

    fn is(&self, holiday: Holiday) -> bool {
        self.holiday() == Some(holiday)
    }

    fn is_any(&self, holidays: &[Holiday]) -> bool {
        self.holiday().is_some_and(|h| holidays.contains(&h))
    }

    /// A holiday that is not an erev (other than Hoshana Rabba and the last day of Chol
    /// HaMoed Pesach) and not a fast (other than Yom Kippur).
    pub fn is_yom_tov(&self) -> bool {
        let Some(holiday) = self.holiday() else {
            return false;
        };
        if self.is_erev_yom_tov() && !matches!(holiday, Holiday::HoshanaRabba | Holiday::CholHamoedPesach) {
            return false;
        }
        !(self.is_taanis() && holiday != Holiday::YomKippur)
    }

    /// A yom tov on which labor is forbidden.
    pub fn is_yom_tov_assur_bemelacha(&self) -> bool {
        self.is_any(&[
            Holiday::Pesach,
            Holiday::Shavuos,
            Holiday::Succos,
            Holiday::SheminiAtzeres,
            Holiday::SimchasTorah,
            Holiday::RoshHashana,
            Holiday::YomKippur,
        ])
    }

    /// Shabbos or a yom tov on which labor is forbidden.
    pub fn is_assur_bemelacha(&self) -> bool {
        self.weekday().is_shabbos() || self.is_yom_tov_assur_bemelacha()
    }

    pub fn is_chol_hamoed(&self) -> bool {
        self.is_chol_hamoed_pesach() || self.is_chol_hamoed_succos()
    }

    pub fn is_chol_hamoed_pesach(&self) -> bool {
        self.is(Holiday::CholHamoedPesach)
    }

    /// Includes Hoshana Rabba.
    pub fn is_chol_hamoed_succos(&self) -> bool {
        self.is_any(&[Holiday::CholHamoedSuccos, Holiday::HoshanaRabba])
    }

    /// The day before a yom tov, including Hoshana Rabba and the sixth day of Chol HaMoed Pesach.
    pub fn is_erev_yom_tov(&self) -> bool {
        self.is_any(&[
            Holiday::ErevPesach,
            Holiday::ErevShavuos,
            Holiday::ErevRoshHashana,
            Holiday::ErevYomKippur,
            Holiday::ErevSuccos,
            Holiday::HoshanaRabba,
        ]) || (self.is_chol_hamoed_pesach() && self.day() == 20)
    }

    /// The first day of a two-day yom tov.
    pub fn is_erev_yom_tov_sheni(&self) -> bool {
        let day = self.day();
        match self.month() {
            HebrewMonth::Tishrei if day == 1 => true,
            _ if self.in_israel() => false,
            HebrewMonth::Nissan => day == 15 || day == 21,
            HebrewMonth::Tishrei => day == 15 || day == 22,
            HebrewMonth::Sivan => day == 6,
            _ => false,
        }
    }

    /// The second day of a two-day yom tov. In Israel only Rosh Hashana has one.
    pub fn is_yom_tov_sheni(&self) -> bool {
        let day = self.day();
        match self.month() {
            HebrewMonth::Tishrei if day == 2 => true,
            _ if self.in_israel() => false,
            HebrewMonth::Nissan => day == 16 || day == 22,
            HebrewMonth::Tishrei => day == 16 || day == 23,
            HebrewMonth::Sivan => day == 7,
            _ => false,
        }
    }

    pub fn is_tomorrow_shabbos_or_yom_tov(&self) -> bool {
        self.weekday() == Weekday::Friday || self.is_erev_yom_tov() || self.is_erev_yom_tov_sheni()
    }

    pub fn has_candle_lighting(&self) -> bool {
        self.is_tomorrow_shabbos_or_yom_tov()
    }

    /// Candles lit after nightfall, since the day itself forbids lighting before dark.
    pub fn has_delayed_candle_lighting(&self) -> bool {
        self.weekday() != Weekday::Friday && self.has_candle_lighting() && self.is_assur_bemelacha()
    }

    pub fn is_taanis(&self) -> bool {
        self.is_any(&[
            Holiday::SeventeenthOfTammuz,
            Holiday::TishaBeav,
            Holiday::YomKippur,
            Holiday::FastOfGedalyah,
            Holiday::TenthOfTeves,
            Holiday::FastOfEsther,
        ])
    }

    /// 14 Nissan, or Thursday the 12th when the 14th is Shabbos.
    pub fn is_taanis_bechoros(&self) -> bool {
        let day = self.day();
        let weekday = self.weekday();
        self.month() == HebrewMonth::Nissan
            && ((day == 14 && weekday != Weekday::Saturday) || (day == 12 && weekday == Weekday::Thursday))
    }

    /// The day after Pesach, Shavuos or Succos.
    pub fn is_isru_chag(&self) -> bool {
        let day = self.day();
        let extra = u8::from(!self.in_israel());
        match self.month() {
            HebrewMonth::Nissan => day == 22 + extra,
            HebrewMonth::Sivan => day == 7 + extra,
            HebrewMonth::Tishrei => day == 23 + extra,
            _ => false,
        }
    }

    pub fn is_rosh_hashana(&self) -> bool {
        self.is(Holiday::RoshHashana)
    }

    pub fn is_yom_kippur(&self) -> bool {
        self.is(Holiday::YomKippur)
    }

    /// Succos, Chol HaMoed and Hoshana Rabba.
    pub fn is_succos(&self) -> bool {
        self.is_any(&[Holiday::Succos, Holiday::CholHamoedSuccos, Holiday::HoshanaRabba])
    }

    pub fn is_hoshana_rabba(&self) -> bool {
        self.is(Holiday::HoshanaRabba)
    }

    pub fn is_shemini_atzeres(&self) -> bool {
        self.is(Holiday::SheminiAtzeres)
    }

    pub fn is_simchas_torah(&self) -> bool {
        self.is(Holiday::SimchasTorah)
    }

    /// Pesach and its Chol HaMoed.
    pub fn is_pesach(&self) -> bool {
        self.is_any(&[Holiday::Pesach, Holiday::CholHamoedPesach])
    }

    pub fn is_shavuos(&self) -> bool {
        self.is(Holiday::Shavuos)
    }

    pub fn is_chanukah(&self) -> bool {
        self.is(Holiday::Chanukah)
    }

    /// Purim, or Shushan Purim in a walled city.
    pub fn is_purim(&self) -> bool {
        if self.options.mukaf_choma {
            self.is(Holiday::ShushanPurim)
        } else {
            self.is(Holiday::Purim)
        }
    }

    pub fn is_tisha_beav(&self) -> bool {
        self.is(Holiday::TishaBeav)
    }

    pub fn is_rosh_chodesh(&self) -> bool {
        is_rosh_chodesh(&self.date)
    }

    pub fn is_erev_rosh_chodesh(&self) -> bool {
        is_erev_rosh_chodesh(&self.date)
    }

    /// The Shabbos before Rosh Chodesh, when the new month is announced. Never before Tishrei.
    pub fn is_shabbos_mevorchim(&self) -> bool {
        self.weekday().is_shabbos() && (23..=29).contains(&self.day()) && self.month() != HebrewMonth::Elul
    }

    /// A Shabbos whose next day is Rosh Chodesh.
    pub fn is_machar_chodesh(&self) -> bool {
        self.weekday().is_shabbos() && (self.day() == 30 || (self.day() == 29 && self.month() != HebrewMonth::Elul))
    }

    /// The day before Rosh Chodesh, moved to Thursday when it falls on Friday or Shabbos.
    /// Not kept before Tishrei, Cheshvan, Teves or Iyar.
    pub fn is_yom_kippur_katan(&self) -> bool {
        let day = self.day();
        let weekday = self.weekday();
        if matches!(
            self.month(),
            HebrewMonth::Elul | HebrewMonth::Tishrei | HebrewMonth::Kislev | HebrewMonth::Nissan
        ) {
            return false;
        }
        (day == 29 && !matches!(weekday, Weekday::Friday | Weekday::Saturday))
            || ((day == 27 || day == 28) && weekday == Weekday::Thursday)
    }

    /// The Monday, Thursday, Monday fasts after Pesach and Succos.
    pub fn is_behab(&self) -> bool {
        let day = self.day();
        matches!(self.month(), HebrewMonth::Cheshvan | HebrewMonth::Iyar)
            && match self.weekday() {
                Weekday::Monday => day > 4 && day < 18,
                Weekday::Thursday => day > 7 && day < 14,
                _ => false,
            }
    }

    /// 1 through 10 Tishrei.
    pub fn is_aseres_yemei_teshuva(&self) -> bool {
        self.month() == HebrewMonth::Tishrei && self.day() <= 10
    }

    pub fn day_of_chanukah(&self) -> Option<u8> {
        day_of_chanukah(&self.date)
    }

    pub fn day_of_omer(&self) -> Option<u8> {
        day_of_omer(&self.date)
    }

    pub fn special_shabbos(&self) -> Option<SpecialShabbos> {
        special_shabbos(&self.date)
    }

    pub fn molad(&self) -> Molad {
        self.date.molad()
    }

    /// Days elapsed since Tekufas Tishrei, on Shmuel's year of 365.25 days.
    /// Day 47 or 48 (outside Israel) is when the request for rain begins.
    pub fn tekufas_tishrei_elapsed_days(&self) -> i64 {
        let year = i64::from(self.date.year().get());
        let day_of_year = i64::from(self.date.day_of_year());
        // Counted in quarter days so the 365.25 day year stays exact
        (4 * self.date.year().elapsed_days() + 4 * (day_of_year - 1) + 2 - 1461 * (year - 1)).div_euclid(4)
    }

    /// The day, once in 28 years, on which the blessing on the sun is said.
    pub fn is_birkas_hachamah(&self) -> bool {
        let day_of_year = i64::from(self.date.day_of_year());
        (self.date.year().elapsed_days() + day_of_year) % SOLAR_CYCLE_DAYS == BIRKAS_HACHAMAH_DAY
    }

    /// The Bavli Daf Yomi page studied on this day.
    ///
    /// # Errors
    /// Returns `DafError::OutOfCycleRange` before the first cycle began on 1923-09-11.
    pub fn daf_yomi_bavli(&self) -> Result<Daf, DafError> {
        bavli(self.date.absolute())
    }

    /// The Yerushalmi Daf Yomi page, or `None` on a day with no learning.
    ///
    /// # Errors
    /// Returns `DafError::OutOfCycleRange` before the first cycle began on 1980-02-02.
    pub fn daf_yomi_yerushalmi(&self) -> Result<Option<YerushalmiDaf>, DafError> {
        yerushalmi(self.date.absolute())
    }
}

impl From<HebrewDate> for JewishCalendar {
    fn from(date: HebrewDate) -> Self {
        Self::new(date, CalendarOptions::default())
    }
}
