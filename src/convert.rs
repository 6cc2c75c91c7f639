//! Civil (Gregorian) to Hijri conversion and back.
//!
//! Implements the tabular "civil" variant of the Islamic calendar: a
//! deterministic arithmetic approximation with 11 leap years per 30-year
//! cycle, anchored at Rata Die 227015 (Friday, 16 July 622 CE Julian).
//! Dates computed this way can differ by a day from sighting-based or
//! Umm al-Qura dates near month boundaries.

use crate::DateError;
use crate::consts::{DAYS_IN_COMMON_YEAR, DAYS_IN_CYCLE, ISLAMIC_EPOCH, MAX_YEAR};

/// Error type for calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The conversion produced a Hijri year outside the supported range.
    #[error("Hijri year {year} is outside the supported range 1-{MAX_YEAR}")]
    OutOfRange { year: i64 },

    /// The conversion produced an invalid date component.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Whether or not Gregorian `year` is a leap year
const fn is_gregorian_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 400 == 0 || year % 100 != 0)
}

// Fixed dates count days from Rata Die 1 = Gregorian 1 January, year 1.
// The fixed-date algorithms follow Reingold & Dershowitz, Calendrical
// Calculations (4th ed.).

pub(crate) fn fixed_from_gregorian(year: i32, month: u8, day: u8) -> i64 {
    let prev_year = i64::from(year) - 1;
    // Days in all prior years
    let mut fixed: i64 = 365 * prev_year;
    // Leap day for every prior leap year
    fixed += prev_year.div_euclid(4) - prev_year.div_euclid(100) + prev_year.div_euclid(400);
    // Days in prior months of the current year, assuming a 30.6-day rhythm
    fixed += (367 * i64::from(month) - 362).div_euclid(12);
    // Correct the rhythm for the length of February
    fixed += if month <= 2 {
        0
    } else if is_gregorian_leap_year(year) {
        -1
    } else {
        -2
    };
    // Days passed in the current month
    fixed + i64::from(day)
}

pub(crate) fn gregorian_from_fixed(date: i64) -> (i32, u8, u8) {
    let d0 = date - 1;

    // 400 year cycles have 146097 days
    let (n_400, d1) = (d0.div_euclid(146_097), d0.rem_euclid(146_097));

    // 100 year cycles have 36524 days
    let (n_100, d2) = (d1.div_euclid(36_524), d1.rem_euclid(36_524));

    // 4 year cycles have 1461 days
    let (n_4, d3) = (d2.div_euclid(1_461), d2.rem_euclid(1_461));

    let n_1 = d3.div_euclid(365);

    let mut year = 400 * n_400 + 100 * n_100 + 4 * n_4 + n_1;
    if n_100 != 4 && n_1 != 4 {
        year += 1;
    }
    let year = year as i32; // bounded by the Hijri year range of callers

    let prior_days = date - fixed_from_gregorian(year, 1, 1);
    let correction = if date < fixed_from_gregorian(year, 3, 1) {
        0
    } else if is_gregorian_leap_year(year) {
        1
    } else {
        2
    };
    let month = ((12 * (prior_days + correction) + 373).div_euclid(367)) as u8; // in 1..=12
    let day = (date - fixed_from_gregorian(year, month, 1) + 1) as u8; // <= days_in_month

    (year, month, day)
}

pub(crate) fn fixed_from_hijri(year: u16, month: u8, day: u8) -> i64 {
    debug_assert!(month != 0 && month <= 12);
    let year = i64::from(year);
    ISLAMIC_EPOCH - 1
        + (year - 1) * DAYS_IN_COMMON_YEAR
        // Leap days accumulated through the 30-year cycle
        + (3 + 11 * year).div_euclid(30)
        // Months alternate 30 and 29 days
        + 29 * i64::from(month - 1)
        + i64::from(month / 2)
        + i64::from(day)
}

/// Converts a fixed date to a Hijri (year, month, day) triple.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` for dates before 1 Muharram 1 AH or
/// past the end of year `MAX_YEAR`.
pub(crate) fn hijri_from_fixed(date: i64) -> Result<(u16, u8, u8), ConvertError> {
    let days = date - ISLAMIC_EPOCH;
    let year = (30 * days + 10_646).div_euclid(DAYS_IN_CYCLE);
    if !(1..=i64::from(MAX_YEAR)).contains(&year) {
        return Err(ConvertError::OutOfRange { year });
    }
    let year = year as u16; // just checked against MAX_YEAR

    let prior_days = date - fixed_from_hijri(year, 1, 1);
    let month = ((11 * prior_days + 330).div_euclid(325)) as u8; // in 1..=12
    let day = (date - fixed_from_hijri(year, month, 1) + 1) as u8; // <= 30

    Ok((year, month, day))
}
