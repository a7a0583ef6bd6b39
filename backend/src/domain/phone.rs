//! Ethiopian mobile number normalisation.
//!
//! The SMS provider only accepts E.164-style numbers, while booking forms
//! collect phones in whatever local shape the user typed. One fallible
//! constructor owns the mapping so every outbound send goes through the same
//! validation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Validation errors returned by [`Msisdn::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneNumberError {
    /// Input was empty after stripping separators.
    #[error("phone number is empty")]
    Empty,
    /// Input did not normalise to a supported Ethiopian mobile number.
    #[error("unsupported phone number format: {input}")]
    UnsupportedFormat {
        /// The raw input as supplied by the caller.
        input: String,
    },
}

static MSISDN_RE: OnceLock<Regex> = OnceLock::new();

fn msisdn_regex() -> &'static Regex {
    MSISDN_RE.get_or_init(|| {
        // Ethiopian mobile ranges: +2519xxxxxxxx and +2517xxxxxxxx.
        let pattern = r"^\+251[79]\d{8}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("msisdn regex failed to compile: {error}"))
    })
}

/// A normalised Ethiopian mobile number in `+251[79]XXXXXXXX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Msisdn(String);

impl Msisdn {
    /// Normalise a locally formatted number and validate the result.
    ///
    /// Accepted input shapes, after stripping spaces, dashes, and
    /// parentheses: `09XXXXXXXX`, `07XXXXXXXX`, `9XXXXXXXX`, `7XXXXXXXX`,
    /// `2519XXXXXXXX`, `2517XXXXXXXX`, and already-prefixed `+251…`.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneNumberError`] when the input is empty or does not map
    /// to a supported mobile number.
    pub fn normalize(raw: &str) -> Result<Self, PhoneNumberError> {
        let compact: String = raw
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '-' | '(' | ')'))
            .collect();
        if compact.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        let candidate = if compact.starts_with('+') {
            compact
        } else if let Some(rest) = compact.strip_prefix('0') {
            // 09XXXXXXXX / 07XXXXXXXX
            format!("+251{rest}")
        } else if let Some(rest) = compact.strip_prefix("251") {
            format!("+251{rest}")
        } else if compact.starts_with('9') || compact.starts_with('7') {
            format!("+251{compact}")
        } else {
            compact
        };

        if msisdn_regex().is_match(&candidate) {
            Ok(Self(candidate))
        } else {
            Err(PhoneNumberError::UnsupportedFormat {
                input: raw.to_owned(),
            })
        }
    }

    /// The normalised number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Msisdn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
