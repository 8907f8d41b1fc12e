//! Converter Configuration
//!
//! Controls how textual date/times without an explicit offset are read.

use std::borrow::Cow;

use chrono_tz::Tz;

/// Converter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Naive date/time formats tried in order after RFC 3339
    /// (chrono `strftime` syntax). Date-only formats yield midnight.
    pub datetime_formats: Vec<Cow<'static, str>>,
    /// Zone applied to date/times that carry no offset
    pub default_timezone: Tz,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            datetime_formats: vec![
                Cow::Borrowed("%Y-%m-%d %H:%M:%S"),
                Cow::Borrowed("%Y-%m-%d %H:%M:%S%.f"),
                Cow::Borrowed("%Y-%m-%dT%H:%M:%S"),
                Cow::Borrowed("%Y-%m-%dT%H:%M:%S%.f"),
                Cow::Borrowed("%Y-%m-%d"),
            ],
            default_timezone: Tz::UTC,
        }
    }
}

impl ConverterConfig {
    /// Read naive date/times in `timezone` instead of UTC
    pub fn with_default_timezone(self, timezone: Tz) -> Self {
        Self {
            default_timezone: timezone,
            ..self
        }
    }

    /// Append a naive format, tried after the existing ones
    pub fn with_datetime_format(mut self, format: impl Into<Cow<'static, str>>) -> Self {
        self.datetime_formats.push(format.into());
        self
    }
}
