/// Maximum valid civil year (inclusive)
pub const MAX_CIVIL_YEAR: u16 = 9999;

/// Maximum valid civil month (December)
pub const MAX_CIVIL_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each civil month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_CIVIL_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Offset from the Hebrew elapsed-day count to the absolute day number.
/// 1 Tishrei of year 1 falls on absolute day `JEWISH_EPOCH + 2`.
pub const JEWISH_EPOCH: i64 = -1_373_429;

/// Chalakim (parts) in an hour
pub const CHALAKIM_PER_HOUR: i64 = 1080;
/// Chalakim in a minute
pub const CHALAKIM_PER_MINUTE: i64 = 18;
/// Chalakim in a day
pub const CHALAKIM_PER_DAY: i64 = 25_920;
/// Chalakim in a mean lunar month (29d 12h 793p)
pub const CHALAKIM_PER_MONTH: i64 = 765_433;
/// Molad of Tishrei in the year 1 (BaHaRaD), counted from the start of the calendar
pub const CHALAKIM_MOLAD_TOHU: i64 = 31_524;

/// Molad zaken: a molad at or past noon pushes Rosh Hashana forward
pub(crate) const MOLAD_ZAKEN_CHALAKIM: i64 = 19_440;
/// GaTRaD: Tuesday 9h 204p in a common year
pub(crate) const GATRAD_CHALAKIM: i64 = 9_924;
/// BeTUTaKPaT: Monday 15h 589p following a leap year
pub(crate) const BETUTAKPAT_CHALAKIM: i64 = 16_789;

/// Years in a Metonic cycle
pub(crate) const METONIC_CYCLE_YEARS: i64 = 19;
/// Months in a Metonic cycle
pub(crate) const METONIC_CYCLE_MONTHS: i64 = 235;

/// Years per day, as a fraction: the mean Hebrew year is 35975351 / 98496 days
pub(crate) const MEAN_YEAR_NUMERATOR: i64 = 98_496;
/// Denominator of the years-per-day fraction
pub(crate) const MEAN_YEAR_DENOMINATOR: i64 = 35_975_351;

/// Days in the 28 year solar cycle (Machzor Gadol) under Shmuel's year of 365.25 days
pub(crate) const SOLAR_CYCLE_DAYS: i64 = 10_227;
/// Day of the solar cycle on which the sun returns to its position at creation
pub(crate) const BIRKAS_HACHAMAH_DAY: i64 = 172;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
