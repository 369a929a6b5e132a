//! Common types and enums for usps-address.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ValidationIssue};

/// How recoverable validation problems (bad ZIP, unknown state) are handled.
///
/// Structural failures are always fatal regardless of the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ErrorPolicy {
    /// Log a warning and pass the offending value through unmodified
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "warn_and_continue"))]
    Warn,
    /// Abort normalization with [`Error::ValidationWarning`]
    Raise,
}

impl ErrorPolicy {
    /// Map a legacy numeric error level.
    ///
    /// Level `1` raises; every other level (historically `0` and `2`) warns.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => ErrorPolicy::Raise,
            _ => ErrorPolicy::Warn,
        }
    }

    /// Convert to the policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::Warn => "warn",
            ErrorPolicy::Raise => "raise",
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" | "warn_and_continue" => Ok(ErrorPolicy::Warn),
            "raise" => Ok(ErrorPolicy::Raise),
            other => Err(Error::parse_error(format!("unknown error policy: {other}"))),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured fields of a delivery (street) line, already abbreviated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedDeliveryLine {
    /// Building/house number (e.g., "123", "123A")
    pub primary_number: String,
    /// Directional before the street name (e.g., "N")
    pub predirectional: Option<String>,
    /// Street name (e.g., "MAIN")
    pub street_name: String,
    /// Street suffix abbreviation (e.g., "ST")
    pub suffix: Option<String>,
    /// Directional after the suffix (e.g., "SW")
    pub postdirectional: Option<String>,
    /// Secondary unit designator (e.g., "APT")
    pub secondary_designator: Option<String>,
    /// Secondary unit value (e.g., "4B")
    pub secondary_value: Option<String>,
}

impl ParsedDeliveryLine {
    /// Fields in output order, skipping absent optional ones.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.primary_number.as_str()),
            self.predirectional.as_deref(),
            Some(self.street_name.as_str()),
            self.suffix.as_deref(),
            self.postdirectional.as_deref(),
            self.secondary_designator.as_deref(),
            self.secondary_value.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for ParsedDeliveryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}

/// Structured fields of a last (city/state/ZIP) line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedLastLine {
    /// City, upper-cased
    pub city: String,
    /// Two-letter state code, or the unrecognized value passed through
    pub state: String,
    /// ZIP or ZIP+4, or the invalid value passed through
    pub zip: String,
}

impl fmt::Display for ParsedLastLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.city, self.state, self.zip)
    }
}

/// A normalization result together with the diagnostics emitted under
/// [`ErrorPolicy::Warn`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normalized<T> {
    /// Best-effort normalized value
    pub value: T,
    /// Validation issues that were passed through
    pub warnings: Vec<ValidationIssue>,
}

impl<T> Normalized<T> {
    /// Check if any validation issue was passed through.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Transform the value, keeping the warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Normalized<U> {
        Normalized {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
