mod consts;
mod convert;
mod label;
mod prelude;
mod types;

pub use consts::*;
pub use convert::ConvertError;
pub use label::{FALLBACK_LABEL, format_date, format_today, format_today_with_offset, try_format_date};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate};
use std::str::FromStr;

/// A date in the Hijri (Islamic lunar) calendar, tabular civil variant.
/// Components are validated on construction, so the month index is always
/// a safe index into [`MONTH_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct HijriDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid Hijri year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid Hijri month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for Hijri month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl HijriDate {
    /// Creates a date from raw components, validating each of them
    ///
    /// # Errors
    /// Returns the matching `DateError` variant for an out-of-range year,
    /// month, or day.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Converts a civil (Gregorian) calendar date
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` for dates before 19 July 622 CE
    /// (1 Muharram 1 AH) or past the end of Hijri year `MAX_YEAR`.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, ConvertError> {
        let fixed =
            convert::fixed_from_gregorian(date.year(), date.month() as u8, date.day() as u8);
        let (year, month, day) = convert::hijri_from_fixed(fixed)?;
        Ok(Self::from_ymd(year, month, day)?)
    }

    /// Converts the current wall-clock date read from the system clock
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the clock reads a date outside
    /// the supported Hijri range.
    pub fn today() -> Result<Self, ConvertError> {
        Self::from_gregorian(Local::now().date_naive())
    }

    /// Returns the civil (Gregorian) equivalent as (year, month, day)
    pub fn to_gregorian(&self) -> (i32, u8, u8) {
        convert::gregorian_from_fixed(convert::fixed_from_hijri(
            self.year.get(),
            self.month.get(),
            self.day.get(),
        ))
    }

    /// Returns the year component (as u16 for convenience)
    pub fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (as u8 for convenience)
    pub fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    pub fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the English name of the month
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Returns the Year type
    pub fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Returns the Month type
    pub fn month_typed(&self) -> types::Month {
        self.month
    }

    /// Returns the Day type
    pub fn day_typed(&self) -> types::Day {
        self.day
    }

    /// Returns the components as a (year, month, day) tuple
    pub fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

impl HijriDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, DateError> {
        s.parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for HijriDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // Strict form: YYYY-MM-DD, separated by DATE_SEPARATOR
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected year{DATE_SEPARATOR}month{DATE_SEPARATOR}day, found {} component(s)",
                parts.len()
            )));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::from_ymd(year, month, day)
    }
}

impl TryFrom<(u16, u8, u8)> for HijriDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(value.0, value.1, value.2)
    }
}

impl serde::Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_from_ymd() {
        let date = HijriDate::from_ymd(1445, 6, 19).unwrap();
        assert_eq!(date.year(), 1445);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 19);
        assert_eq!(date.month_name(), "Jumada al-Thani");
        assert_eq!(date.to_ymd(), (1445, 6, 19));
    }

    #[test]
    fn test_from_ymd_invalid_year() {
        let result = HijriDate::from_ymd(0, 1, 1);
        assert!(matches!(result, Err(DateError::InvalidYear(0))));

        let result = HijriDate::from_ymd(10000, 1, 1);
        assert!(matches!(result, Err(DateError::InvalidYear(10000))));
    }

    #[test]
    fn test_from_ymd_invalid_month() {
        // Month 13 must be rejected before any name lookup can happen
        let result = HijriDate::from_ymd(1445, 13, 1);
        assert!(matches!(result, Err(DateError::InvalidMonth(13))));

        let result = HijriDate::from_ymd(1445, 0, 1);
        assert!(matches!(result, Err(DateError::InvalidMonth(0))));
    }

    #[test]
    fn test_from_ymd_invalid_day() {
        // Safar has 29 days
        let result = HijriDate::from_ymd(1445, 2, 30);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));

        // Dhu al-Hijjah has 30 days only in leap years; 1446 is common
        let result = HijriDate::from_ymd(1446, 12, 30);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));
        assert!(HijriDate::from_ymd(1445, 12, 30).is_ok());
    }

    #[test]
    fn test_from_gregorian_reference_dates() {
        struct TestCase {
            gregorian: (i32, u32, u32),
            hijri: (u16, u8, u8),
            month_name: &'static str,
        }

        let cases = [
            TestCase {
                gregorian: (622, 7, 19),
                hijri: (1, 1, 1),
                month_name: "Muharram",
            },
            TestCase {
                gregorian: (1991, 8, 15),
                hijri: (1412, 2, 4),
                month_name: "Safar",
            },
            TestCase {
                // Islamic New Year 1445
                gregorian: (2023, 7, 19),
                hijri: (1445, 1, 1),
                month_name: "Muharram",
            },
            TestCase {
                gregorian: (2024, 1, 1),
                hijri: (1445, 6, 19),
                month_name: "Jumada al-Thani",
            },
            TestCase {
                // First day of Ramadan 1445
                gregorian: (2024, 3, 11),
                hijri: (1445, 9, 1),
                month_name: "Ramadan",
            },
        ];

        for case in &cases {
            let (gy, gm, gd) = case.gregorian;
            let date = HijriDate::from_gregorian(gregorian(gy, gm, gd)).unwrap();
            assert_eq!(date.to_ymd(), case.hijri, "Gregorian {gy}-{gm:02}-{gd:02}");
            assert_eq!(date.month_name(), case.month_name);
        }
    }

    #[test]
    fn test_from_gregorian_before_epoch() {
        // The day before 1 Muharram 1 AH
        let result = HijriDate::from_gregorian(gregorian(622, 7, 18));
        assert!(matches!(result, Err(ConvertError::OutOfRange { .. })));

        let result = HijriDate::from_gregorian(gregorian(500, 1, 1));
        assert!(matches!(result, Err(ConvertError::OutOfRange { .. })));
    }

    #[test]
    fn test_to_gregorian_round_trip() {
        for (gy, gm, gd) in [(622, 7, 19), (1991, 8, 15), (2024, 1, 1), (2024, 2, 29)] {
            let date = HijriDate::from_gregorian(gregorian(gy, gm, gd)).unwrap();
            assert_eq!(date.to_gregorian(), (gy, gm as u8, gd as u8));
        }
    }

    #[test]
    fn test_today() {
        // The host clock is assumed to be somewhere between 622 CE and
        // 10322 CE
        let date = HijriDate::today().unwrap();
        assert!((1..=12).contains(&date.month()));
        assert!((1..=30).contains(&date.day()));
    }

    #[test]
    fn test_display() {
        let date = HijriDate::from_ymd(1445, 6, 19).unwrap();
        assert_eq!(date.to_string(), "1445-06-19");

        let epoch = HijriDate::from_ymd(1, 1, 1).unwrap();
        assert_eq!(epoch.to_string(), "0001-01-01");
    }

    #[test]
    fn test_parse() {
        let date = "1445-06-19".parse::<HijriDate>().unwrap();
        assert_eq!(date.to_ymd(), (1445, 6, 19));

        // Unpadded components are accepted
        let date = "1445-6-19".parse::<HijriDate>().unwrap();
        assert_eq!(date.to_ymd(), (1445, 6, 19));
    }

    #[test]
    fn test_parse_with_whitespace() {
        let date = " 1445 - 06 - 19 ".parse::<HijriDate>().unwrap();
        assert_eq!(date.to_ymd(), (1445, 6, 19));
    }

    #[test]
    fn test_parse_empty() {
        let result = "".parse::<HijriDate>();
        assert!(matches!(result, Err(DateError::EmptyInput)));

        let result = "   ".parse::<HijriDate>();
        assert!(matches!(result, Err(DateError::EmptyInput)));
    }

    #[test]
    fn test_parse_wrong_component_count() {
        let result = "1445-06".parse::<HijriDate>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));

        let result = "1445-06-19-01".parse::<HijriDate>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));

        let result = "1445/06/19".parse::<HijriDate>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_bad_tokens() {
        let result = "144A-06-19".parse::<HijriDate>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));

        let result = "1445-XX-19".parse::<HijriDate>();
        assert!(matches!(result, Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_out_of_range_components() {
        let result = "1445-13-01".parse::<HijriDate>();
        assert!(matches!(result, Err(DateError::InvalidMonth(13))));

        let result = "1445-02-30".parse::<HijriDate>();
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));

        let result = "0-01-01".parse::<HijriDate>();
        assert!(matches!(result, Err(DateError::InvalidYear(0))));
    }

    #[test]
    fn test_try_from_tuple() {
        let date: HijriDate = (1445, 6, 19).try_into().unwrap();
        assert_eq!(date.to_ymd(), (1445, 6, 19));

        let result: Result<HijriDate, _> = (1445, 13, 1).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_ordering() {
        let d1 = HijriDate::from_ymd(1444, 12, 29).unwrap();
        let d2 = HijriDate::from_ymd(1445, 1, 1).unwrap();
        let d3 = HijriDate::from_ymd(1445, 6, 19).unwrap();
        assert!(d1 < d2);
        assert!(d2 < d3);
        assert_eq!(d3, d3);
    }

    #[test]
    fn test_serde_string_format() {
        let date = HijriDate::from_ymd(1445, 6, 19).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1445-06-19""#);

        let parsed: HijriDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Invalid month (13) should be rejected
        let result: Result<HijriDate, _> = serde_json::from_str(r#""1445-13-01""#);
        assert!(result.is_err());

        // Invalid day for Safar (30) should be rejected
        let result: Result<HijriDate, _> = serde_json::from_str(r#""1445-02-30""#);
        assert!(result.is_err());

        // Invalid year (10000) should be rejected
        let result: Result<HijriDate, _> = serde_json::from_str(r#""10000-01-01""#);
        assert!(result.is_err());

        // Leap-year Dhu al-Hijjah 30 is valid
        let result: Result<HijriDate, _> = serde_json::from_str(r#""1445-12-30""#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_YEAR, 9999);
        assert_eq!(MONTH_NAMES.len(), 12);
        assert_eq!(MONTH_NAMES[0], "Muharram");
        assert_eq!(MONTH_NAMES[11], "Dhu al-Hijjah");
    }
}
