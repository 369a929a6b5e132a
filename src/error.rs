//! Error types and handling for usps-address.

use std::fmt;

/// Result type alias for address standardization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for address standardization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input could not be decomposed into its required fields
    #[error("Parse error: {message}")]
    ParseError {
        /// Error message
        message: String,
    },

    /// A field failed validation under [`ErrorPolicy::Raise`](crate::ErrorPolicy::Raise)
    #[error("Validation failed: {issue}")]
    ValidationWarning {
        /// The offending field
        issue: ValidationIssue,
    },
}

impl Error {
    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(issue: ValidationIssue) -> Self {
        Self::ValidationWarning { issue }
    }
}

/// A recoverable problem found while validating a last line.
///
/// Under [`ErrorPolicy::Warn`](crate::ErrorPolicy::Warn) these are logged and
/// collected; under [`ErrorPolicy::Raise`](crate::ErrorPolicy::Raise) the first
/// one aborts normalization as [`Error::ValidationWarning`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationIssue {
    /// ZIP is neither `DDDDD` nor `DDDDD-DDDD`
    BadZip(String),
    /// State is neither a known name nor a known two-letter code
    UnrecognizedState(String),
}

impl ValidationIssue {
    /// The offending value, exactly as it was passed through.
    pub fn value(&self) -> &str {
        match self {
            ValidationIssue::BadZip(value) | ValidationIssue::UnrecognizedState(value) => value,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::BadZip(zip) => write!(f, "bad zip code: {zip}"),
            ValidationIssue::UnrecognizedState(state) => write!(f, "unrecognized state: {state}"),
        }
    }
}
