//! Booking date inputs.
//!
//! Callers submit check-in dates as epoch milliseconds, calendar dates, or
//! arbitrary strings. Rather than probing runtime types at each use site,
//! the shapes form one tagged union normalised through a single fallible
//! parse.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A date value in one of the shapes bookings arrive with.
///
/// Serde contract (untagged): JSON numbers deserialise as epoch
/// milliseconds, ISO `YYYY-MM-DD` strings as calendar dates, and any other
/// string is retained raw for a later parse attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch, UTC.
    EpochMillis(i64),
    /// A plain calendar date.
    Calendar(NaiveDate),
    /// An unparsed string, resolved lazily.
    Raw(String),
}

/// Error returned by [`DateInput::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unparseable date value: {value}")]
pub struct DateParseError {
    /// The value that failed to parse, stringified.
    pub value: String,
}

impl DateInput {
    /// Resolve to a calendar date.
    ///
    /// Raw strings are tried as RFC 3339 first, then as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`DateParseError`] when the value does not map to a date,
    /// including epoch values outside chrono's representable range.
    pub fn resolve(&self) -> Result<NaiveDate, DateParseError> {
        match self {
            Self::EpochMillis(millis) => DateTime::<Utc>::from_timestamp_millis(*millis)
                .map(|instant| instant.date_naive())
                .ok_or_else(|| DateParseError {
                    value: millis.to_string(),
                }),
            Self::Calendar(date) => Ok(*date),
            Self::Raw(text) => DateTime::parse_from_rfc3339(text)
                .map(|instant| instant.date_naive())
                .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
                .map_err(|_| DateParseError {
                    value: text.clone(),
                }),
        }
    }

    /// Human-readable `DD Mon YYYY` rendering for message bodies.
    ///
    /// Unresolvable values fall back to their raw form so a bad date never
    /// suppresses a notification.
    #[must_use]
    pub fn format_long(&self) -> String {
        match self.resolve() {
            Ok(date) => date.format("%d %b %Y").to_string(),
            Err(_) => self.to_string(),
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EpochMillis(millis) => write!(f, "{millis}"),
            Self::Calendar(date) => write!(f, "{date}"),
            Self::Raw(text) => f.write_str(text),
        }
    }
}
