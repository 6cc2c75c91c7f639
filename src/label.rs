//! Status-bar label rendering.
//!
//! Produces the short `Hijri: {year}/{month_name}/{day}` text a bar widget
//! polls for. Conversion failures degrade to [`FALLBACK_LABEL`]; a bar is
//! better served by a placeholder than by an error crossing its refresh
//! loop.

use chrono::{Duration, Local, NaiveDate};

use crate::HijriDate;
use crate::convert::ConvertError;

/// Shown when the current date cannot be expressed as a Hijri date.
pub const FALLBACK_LABEL: &str = "Hijri: unavailable";

/// Renders the label for a specific civil date.
///
/// # Errors
/// Returns `ConvertError` when the date falls outside the supported Hijri
/// range.
pub fn try_format_date(date: NaiveDate) -> Result<String, ConvertError> {
    let hijri = HijriDate::from_gregorian(date)?;
    Ok(format!(
        "Hijri: {}/{}/{}",
        hijri.year(),
        hijri.month_name(),
        hijri.day()
    ))
}

/// Renders the label for a specific civil date, substituting
/// [`FALLBACK_LABEL`] when the date cannot be converted.
pub fn format_date(date: NaiveDate) -> String {
    match try_format_date(date) {
        Ok(label) => label,
        Err(err) => {
            log::warn!("hijri label unavailable for {date}: {err}");
            FALLBACK_LABEL.to_owned()
        }
    }
}

/// Renders the label for the current wall-clock date.
/// Two calls within the same calendar day return identical strings.
pub fn format_today() -> String {
    format_today_with_offset(0)
}

/// Renders the label for the current wall-clock date shifted by
/// `offset_days`. The offset lets users adjust for local moon sighting
/// differences (e.g. -1 if the local announcement runs a day behind the
/// tabular calendar).
pub fn format_today_with_offset(offset_days: i64) -> String {
    let today = Local::now().date_naive();
    let adjusted =
        Duration::try_days(offset_days).and_then(|delta| today.checked_add_signed(delta));
    match adjusted {
        Some(date) => format_date(date),
        None => {
            log::warn!("hijri label: day offset {offset_days} is out of range");
            FALLBACK_LABEL.to_owned()
        }
    }
}
