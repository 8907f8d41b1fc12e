//! Date/time and time-zone parsing
//!
//! Date/times resolve to an immutable UTC instant. Accepted inputs, in the
//! order they are tried:
//! 1. RFC 3339 (`2020-01-01T00:00:00+02:00`)
//! 2. `@<unix seconds>`
//! 3. each configured naive format, read in the configured default zone
//!
//! JSON integers are unix seconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use kernel::error::app_error::{AppError, AppResult, OptionExt};
use serde_json::Value;

use crate::coerce;
use crate::config::ConverterConfig;

pub fn parse_datetime(value: &Value, config: &ConverterConfig) -> AppResult<DateTime<Utc>> {
    match value {
        Value::Number(n) if n.is_f64() => Err(AppError::bad_request(format!(
            "Timestamp {} is not an integer number of seconds",
            n
        ))),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_bad_request(format!("Timestamp {} is out of range", n)),
        Value::String(s) => parse_datetime_str(s.trim(), config),
        other => Err(coerce::unexpected("date/time", other)),
    }
}

fn parse_datetime_str(s: &str, config: &ConverterConfig) -> AppResult<DateTime<Utc>> {
    if s.is_empty() {
        return Err(AppError::bad_request("Date/time cannot be empty"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(secs) = s.strip_prefix('@') {
        let secs: i64 = secs.parse()?;
        return DateTime::from_timestamp(secs, 0)
            .ok_or_bad_request(format!("Timestamp {} is out of range", secs));
    }

    let mut last_err = None;
    for format in &config.datetime_formats {
        match NaiveDateTime::parse_from_str(s, format) {
            Ok(naive) => return localize(naive, config.default_timezone),
            Err(err) => last_err = Some(err),
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return localize(date.and_time(NaiveTime::MIN), config.default_timezone);
        }
    }

    let err = AppError::bad_request(format!("Unrecognized date/time '{}'", s))
        .with_action("Use RFC 3339, e.g. 2020-01-01T00:00:00Z");
    Err(match last_err {
        Some(source) => err.with_source(source),
        None => err,
    })
}

/// Resolve a wall-clock time in `tz`; on a DST overlap the earlier instant wins
fn localize(naive: NaiveDateTime, tz: Tz) -> AppResult<DateTime<Utc>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_bad_request(format!("{} does not exist in time zone {}", naive, tz))
}

/// IANA zone names plus `UTC` and `Z`; fixed offsets such as `+02:00` are rejected
pub fn parse_timezone(value: &Value) -> AppResult<Tz> {
    let Value::String(raw) = value else {
        return Err(coerce::unexpected("time zone", value));
    };

    let name = raw.trim();
    if name.eq_ignore_ascii_case("utc") || name.eq_ignore_ascii_case("z") {
        return Ok(Tz::UTC);
    }

    name.parse::<Tz>()
        .map_err(|e| AppError::bad_request(format!("Unknown time zone '{}': {}", name, e)))
}
