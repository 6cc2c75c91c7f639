/// Maximum valid Hijri year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Dhu al-Hijjah)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Longest possible Hijri month
pub const MAX_DAY: u8 = 30;

/// Month number for Dhu al-Hijjah
pub const DHU_AL_HIJJAH: u8 = 12;

/// Days in Dhu al-Hijjah for leap years
pub const DHU_AL_HIJJAH_DAYS_LEAP: u8 = 30;

/// English names of the Hijri months, in calendar order
/// (index 0 = Muharram = month 1)
pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi'al-Awwal",
    "Rabi'al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Days in each Hijri month (index 0 is unused, months are 1-indexed)
/// Dhu al-Hijjah shows 29 days (common year, adjusted by `is_leap_year` check)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    30, // Muharram
    29, // Safar
    30, // Rabi'al-Awwal
    29, // Rabi'al-Thani
    30, // Jumada al-Awwal
    29, // Jumada al-Thani
    30, // Rajab
    29, // Sha'ban
    30, // Ramadan
    29, // Shawwal
    30, // Dhu al-Qi'dah
    29, // Dhu al-Hijjah (common, adjusted by is_leap_year check)
];

/// The tabular leap pattern repeats every 30 Hijri years
pub(crate) const LEAP_CYCLE: u16 = 30;
/// Days in a common (non-leap) Hijri year
pub(crate) const DAYS_IN_COMMON_YEAR: i64 = 354;
/// Days in one full 30-year cycle (19 common years + 11 leap years)
pub(crate) const DAYS_IN_CYCLE: i64 = 10_631;

/// Fixed day number (Rata Die) of 1 Muharram 1 AH in the civil tabular
/// calendar: Friday, 16 July 622 CE (Julian) / 19 July 622 CE (Gregorian)
pub(crate) const ISLAMIC_EPOCH: i64 = 227_015;

/// Date component separator for the textual form (`1445-06-19`)
pub const DATE_SEPARATOR: char = '-';
