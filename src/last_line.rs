//! Last line (city, state, ZIP) normalization.

use regex::Regex;
use std::sync::LazyLock;

use crate::data::ReferenceTables;
use crate::error::{Error, Result, ValidationIssue};
use crate::types::{ErrorPolicy, Normalized, ParsedLastLine};

/// `DDDDD` or `DDDDD-DDDD`.
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").expect("valid regex"));

/// Longest full state name in words ("FEDERATED STATES OF MICRONESIA").
const MAX_STATE_WORDS: usize = 4;

/// Check a ZIP or ZIP+4 code.
///
/// ```rust
/// use usps_address::last_line::is_valid_zip;
///
/// assert!(is_valid_zip("12345"));
/// assert!(is_valid_zip("12345-6789"));
/// assert!(!is_valid_zip("1234"));
/// ```
pub fn is_valid_zip(zip: &str) -> bool {
    ZIP_RE.is_match(zip)
}

/// Normalizes last lines against a set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct LastLineNormalizer<'a> {
    tables: &'a ReferenceTables,
    policy: ErrorPolicy,
}

impl<'a> LastLineNormalizer<'a> {
    /// Create a normalizer backed by `tables` using [`ErrorPolicy::Warn`].
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self {
            tables,
            policy: ErrorPolicy::default(),
        }
    }

    /// Set the policy for bad ZIP codes and unrecognized states.
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the error policy in use.
    pub fn error_policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Parse and validate a last line, collecting passed-through issues.
    ///
    /// With a `divider` the line is split on its last occurrence into city
    /// and `STATE ZIP`. Without one, the last token is the ZIP, the state is
    /// the token before it (or a multi-word state name ending there) and the
    /// rest is the city.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] when the line cannot be split into city,
    /// state and ZIP, and [`Error::ValidationWarning`] for a bad ZIP or
    /// unknown state under [`ErrorPolicy::Raise`].
    pub fn parse_report(
        &self,
        line: &str,
        divider: Option<&str>,
    ) -> Result<Normalized<ParsedLastLine>> {
        let (city, state, zip) = match divider.filter(|d| !d.is_empty()) {
            Some(divider) => split_with_divider(line, divider)?,
            None => self.split_on_whitespace(line)?,
        };

        let mut warnings = Vec::new();

        if !is_valid_zip(&zip) {
            self.flag(ValidationIssue::BadZip(zip.clone()), &mut warnings)?;
        }

        let city = city.to_uppercase();
        let mut state = state.to_uppercase();

        if state.chars().count() > 2 {
            match self.tables.states().lookup_name(&state) {
                Some(code) => state = code.to_string(),
                None => {
                    self.flag(ValidationIssue::UnrecognizedState(state.clone()), &mut warnings)?
                }
            }
        } else if !self.tables.states().contains_code(&state) {
            self.flag(ValidationIssue::UnrecognizedState(state.clone()), &mut warnings)?;
        }

        Ok(Normalized {
            value: ParsedLastLine { city, state, zip },
            warnings,
        })
    }

    /// Parse and validate a last line.
    pub fn parse(&self, line: &str, divider: Option<&str>) -> Result<ParsedLastLine> {
        self.parse_report(line, divider).map(|report| report.value)
    }

    /// Normalize a last line to `CITY ST ZIP`, collecting passed-through issues.
    pub fn normalize_report(
        &self,
        line: &str,
        divider: Option<&str>,
    ) -> Result<Normalized<String>> {
        self.parse_report(line, divider)
            .map(|report| report.map(|parsed| parsed.to_string()))
    }

    /// Normalize a last line to `CITY ST ZIP`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usps_address::{ErrorPolicy, LastLineNormalizer, ReferenceTables};
    ///
    /// let tables = ReferenceTables::usps();
    /// let normalizer = LastLineNormalizer::new(&tables).with_error_policy(ErrorPolicy::Raise);
    /// assert_eq!(
    ///     normalizer.normalize("Springfield, Illinois 62701", Some(","))?,
    ///     "SPRINGFIELD IL 62701"
    /// );
    /// # Ok::<(), usps_address::Error>(())
    /// ```
    pub fn normalize(&self, line: &str, divider: Option<&str>) -> Result<String> {
        self.normalize_report(line, divider).map(|report| report.value)
    }

    fn split_on_whitespace(&self, line: &str) -> Result<(String, String, String)> {
        let tokens: Vec<&str> = line
            .split_whitespace()
            .map(|token| token.trim_end_matches([',', '.']))
            .filter(|token| !token.is_empty())
            .collect();
        let Some((zip, before)) = tokens.split_last() else {
            return Err(Error::parse_error("empty last line"));
        };
        if before.len() < 2 {
            return Err(Error::parse_error(format!(
                "expected city, state and ZIP in {line:?}"
            )));
        }

        let state_words = (2..=MAX_STATE_WORDS)
            .rev()
            .filter(|&words| before.len() > words)
            .find(|&words| {
                let candidate = before[before.len() - words..].join(" ");
                self.tables.states().lookup_name(&candidate).is_some()
            })
            .unwrap_or(1);
        let (city, state) = before.split_at(before.len() - state_words);

        Ok((city.join(" "), state.join(" "), (*zip).to_string()))
    }

    fn flag(&self, issue: ValidationIssue, warnings: &mut Vec<ValidationIssue>) -> Result<()> {
        match self.policy {
            ErrorPolicy::Warn => {
                log::warn!("{issue}");
                warnings.push(issue);
                Ok(())
            }
            ErrorPolicy::Raise => Err(Error::validation(issue)),
        }
    }
}

fn split_with_divider(line: &str, divider: &str) -> Result<(String, String, String)> {
    let (city, rest) = line.rsplit_once(divider).ok_or_else(|| {
        Error::parse_error(format!("divider {divider:?} not found in {line:?}"))
    })?;
    let (state, zip) = rest.trim().rsplit_once(char::is_whitespace).ok_or_else(|| {
        Error::parse_error(format!("expected state and ZIP after {divider:?} in {line:?}"))
    })?;

    let city = clean_words(city);
    if city.is_empty() {
        return Err(Error::parse_error(format!("no city in {line:?}")));
    }

    Ok((city, clean_words(state), zip.trim().to_string()))
}

/// Collapse whitespace and drop trailing periods (`ST. LOUIS`, `MO.`).
fn clean_words(s: &str) -> String {
    s.split_whitespace()
        .map(|word| word.trim_end_matches('.'))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
