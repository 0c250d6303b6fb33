//! Timestamp formatting, parsing and time-zone conversion.
//!
//! The plain layout is `YYYY-MM-DD HH:MM:SS` with no zone. Offset-bearing
//! input is accepted as RFC 3339 or with a space separator and a
//! `±HH:MM` suffix, and is converted into a caller-chosen zone.

use chrono::{DateTime, Local, NaiveDateTime, ParseError, TimeZone};

use crate::error::{Error, Result};
use crate::ports::Clock;

/// Layout used by [`format_timestamp`] and [`parse_timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Space-separated layout with a numeric offset, e.g. `2023-10-01 20:34:56-07:00`.
const OFFSET_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Formats `value` as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Formats `value` with a `strftime` layout; an empty layout means [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp_with(value: &NaiveDateTime, layout: &str) -> String {
    let layout = if layout.is_empty() { TIMESTAMP_FORMAT } else { layout };
    value.format(layout).to_string()
}

/// Parses `YYYY-MM-DD HH:MM:SS`.
///
/// # Errors
///
/// Returns [`Error::TimeParse`] if `input` does not match the layout.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)
        .map_err(|source| Error::TimeParse { input: input.to_string(), source })
}

/// Re-expresses `value` in `zone`; the instant is unchanged.
#[must_use]
pub fn to_zone<Src: TimeZone, Dst: TimeZone>(value: &DateTime<Src>, zone: &Dst) -> DateTime<Dst> {
    value.with_timezone(zone)
}

/// Re-expresses `value` in the process-local zone.
#[must_use]
pub fn to_local<Src: TimeZone>(value: &DateTime<Src>) -> DateTime<Local> {
    to_zone(value, &Local)
}

/// Parses an offset-bearing timestamp and converts it into `zone`.
///
/// Accepts RFC 3339 (`2023-10-01T12:34:56+07:00`, `...Z`) and
/// `2023-10-01 12:34:56+07:00`.
///
/// # Errors
///
/// Returns [`Error::TimeParse`] carrying the error of the last layout tried.
pub fn parse_with_offset<Tz: TimeZone>(input: &str, zone: &Tz) -> Result<DateTime<Tz>> {
    let parsed = DateTime::parse_from_rfc3339(input)
        .or_else(|_: ParseError| DateTime::parse_from_str(input, OFFSET_TIMESTAMP_FORMAT));

    match parsed {
        Ok(value) => Ok(value.with_timezone(zone)),
        Err(source) => Err(Error::TimeParse { input: input.to_string(), source }),
    }
}

/// [`parse_with_offset`] into the process-local zone.
///
/// # Errors
///
/// Returns [`Error::TimeParse`] if no accepted layout matches.
pub fn parse_with_offset_to_local(input: &str) -> Result<DateTime<Local>> {
    parse_with_offset(input, &Local)
}

/// Current time from `clock`, expressed in `zone`.
#[must_use]
pub fn now_in<Tz: TimeZone>(clock: &dyn Clock, zone: &Tz) -> DateTime<Tz> {
    clock.now().with_timezone(zone)
}
