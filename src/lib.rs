//! # usps-address
//!
//! Normalize free-form United States (and Canadian) postal addresses into
//! USPS standard format.
//!
//! An address is split into a delivery line (`123 N MAIN ST APT 4`) and a
//! last line (`SPRINGFIELD IL 62701`). Each part is tokenized, classified
//! against static reference tables and rewritten to its canonical
//! abbreviated, upper-cased form.
//!
//! ## Features
//!
//! - **Delivery Lines**: primary number, directionals, street suffix and
//!   secondary unit abbreviation
//! - **Last Lines**: state name abbreviation, state code and ZIP validation
//! - **Error Policy**: warn and pass through, or raise on invalid fields
//! - **Injectable Data**: built-in USPS tables or your own
//! - **Thread Safe**: no shared mutable state; optional `parallel` batches
//!
//! ## Quick Start
//!
//! ```rust
//! use usps_address::{standardize, ErrorPolicy};
//!
//! let address = standardize(
//!     "100 North Main Street Apartment 4, Springfield, Illinois 62701",
//!     None,
//!     ErrorPolicy::Raise,
//! )?;
//! assert_eq!(address, "100 N MAIN ST APT 4\nSPRINGFIELD IL 62701");
//! # Ok::<(), usps_address::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod data;
pub mod delivery;
pub mod error;
pub mod last_line;
pub mod types;

use std::sync::Arc;

// Re-export main API
pub use data::{AbbreviationTable, ReferenceTables};
pub use delivery::DeliveryLineNormalizer;
pub use error::{Error, Result, ValidationIssue};
pub use last_line::LastLineNormalizer;
pub use types::*;

/// Line break tried when no delimiter is configured and a comma split fails.
const LINE_BREAK: char = '\n';

/// Default separator between city and state.
const COMMA: &str = ",";

/// Standardize a full address using the built-in USPS tables.
///
/// `delimiter` separates the delivery line from the last line; without one,
/// a comma and then a line break are tried.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if the address cannot be split or either
/// line cannot be parsed, and [`Error::ValidationWarning`] for a bad ZIP or
/// unknown state under [`ErrorPolicy::Raise`].
pub fn standardize(
    address: &str,
    delimiter: Option<&str>,
    error_policy: ErrorPolicy,
) -> Result<String> {
    let mut builder = StandardizerConfig::builder().error_policy(error_policy);
    if let Some(delimiter) = delimiter {
        builder = builder.delimiter(delimiter);
    }
    AddressStandardizer::with_config(builder.build()).standardize(address)
}

/// Normalize a single delivery line using the built-in USPS tables.
///
/// ```rust
/// assert_eq!(usps_address::normalize_delivery_line("9 elm avenue")?, "9 ELM AVE");
/// # Ok::<(), usps_address::Error>(())
/// ```
pub fn normalize_delivery_line(line: &str) -> Result<String> {
    let tables = ReferenceTables::usps();
    DeliveryLineNormalizer::new(&tables).normalize(line)
}

/// Normalize a last line to `CITY ST ZIP` using the built-in USPS tables.
///
/// ```rust
/// use usps_address::{normalize_last_line, ErrorPolicy};
///
/// assert_eq!(
///     normalize_last_line("Anytown, Texas 75001", Some(","), ErrorPolicy::Warn)?,
///     "ANYTOWN TX 75001"
/// );
/// # Ok::<(), usps_address::Error>(())
/// ```
pub fn normalize_last_line(
    line: &str,
    divider: Option<&str>,
    error_policy: ErrorPolicy,
) -> Result<String> {
    let tables = ReferenceTables::usps();
    LastLineNormalizer::new(&tables)
        .with_error_policy(error_policy)
        .normalize(line, divider)
}

/// An address split into its delivery and last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressParts<'s> {
    /// Street portion
    pub delivery_line: &'s str,
    /// City/state/ZIP portion
    pub last_line: &'s str,
    /// Divider to use between city and state in the last line, if any
    pub divider: Option<&'s str>,
}

/// Main entry point for address standardization.
///
/// Holds the configuration and the reference tables; cheap to clone and
/// safe to share between threads.
///
/// # Examples
///
/// ```rust
/// use usps_address::{AddressStandardizer, ErrorPolicy, StandardizerConfig};
///
/// let config = StandardizerConfig::builder()
///     .delimiter("|")
///     .error_policy(ErrorPolicy::Raise)
///     .build();
/// let standardizer = AddressStandardizer::with_config(config);
///
/// let address = standardizer.standardize("42 Oak Ave|Anytown|CA 90210")?;
/// assert_eq!(address, "42 OAK AVE\nANYTOWN CA 90210");
/// # Ok::<(), usps_address::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AddressStandardizer {
    config: StandardizerConfig,
    tables: Arc<ReferenceTables>,
}

impl AddressStandardizer {
    /// Create a standardizer with default configuration and USPS tables.
    pub fn new() -> Self {
        Self::with_config(StandardizerConfig::default())
    }

    /// Create a standardizer with custom configuration and USPS tables.
    pub fn with_config(config: StandardizerConfig) -> Self {
        Self {
            config,
            tables: ReferenceTables::usps(),
        }
    }

    /// Replace the reference tables.
    pub fn with_tables(mut self, tables: Arc<ReferenceTables>) -> Self {
        self.tables = tables;
        self
    }

    /// Get the configuration used by this instance.
    pub fn config(&self) -> &StandardizerConfig {
        &self.config
    }

    /// Get the reference tables used by this instance.
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Create a delivery line normalizer bound to this instance's tables.
    pub fn delivery_normalizer(&self) -> DeliveryLineNormalizer<'_> {
        DeliveryLineNormalizer::new(&self.tables)
    }

    /// Create a last line normalizer bound to this instance's tables and policy.
    pub fn last_line_normalizer(&self) -> LastLineNormalizer<'_> {
        LastLineNormalizer::new(&self.tables).with_error_policy(self.config.error_policy)
    }

    /// Split an address into delivery line and last line.
    ///
    /// With a configured delimiter the address is split on its first
    /// occurrence. Otherwise a comma split is tried first and accepted only
    /// if neither part spans several lines; failing that, the address is
    /// split on its last line break.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] if no split yields two non-empty parts,
    /// if the delivery part spans several lines, or if the divider occurs
    /// more than once in the last line.
    pub fn split<'s>(&'s self, address: &'s str) -> Result<AddressParts<'s>> {
        let (delivery_line, last_line, delimiter) = match self.delimiter() {
            Some(delimiter) => {
                let (delivery, last) = split_pair(address.split_once(delimiter)).ok_or_else(|| {
                    Error::parse_error(format!(
                        "unable to split {address:?} on delimiter {delimiter:?}"
                    ))
                })?;
                (delivery, last, Some(delimiter))
            }
            None => split_pair(address.split_once(COMMA))
                .filter(|(delivery, last)| {
                    !delivery.contains(LINE_BREAK) && !last.contains(LINE_BREAK)
                })
                .map(|(delivery, last)| (delivery, last, Some(COMMA)))
                .or_else(|| {
                    split_pair(address.rsplit_once(LINE_BREAK))
                        .map(|(delivery, last)| (delivery, last, None))
                })
                .ok_or_else(|| {
                    Error::parse_error(format!("unable to parse address from {address:?}"))
                })?,
        };

        if delivery_line.contains(LINE_BREAK) {
            return Err(Error::parse_error(format!(
                "multiple delivery lines are not supported: {delivery_line:?}"
            )));
        }

        let divider = match delimiter {
            Some(delimiter) if last_line.contains(delimiter) => Some(delimiter),
            _ if last_line.contains(COMMA) => Some(COMMA),
            _ => None,
        };
        if let Some(divider) = divider {
            if last_line.matches(divider).count() > 1 {
                return Err(Error::parse_error(format!(
                    "ambiguous last line {last_line:?}: {divider:?} occurs more than once"
                )));
            }
        }
        log::debug!(
            "split {address:?} into {delivery_line:?} / {last_line:?} (divider {divider:?})"
        );

        Ok(AddressParts {
            delivery_line,
            last_line,
            divider,
        })
    }

    /// Standardize a full address, collecting passed-through issues.
    pub fn standardize_report(&self, address: &str) -> Result<Normalized<String>> {
        let parts = self.split(address)?;
        let delivery = self.delivery_normalizer().normalize(parts.delivery_line)?;
        let last_line = self
            .last_line_normalizer()
            .normalize_report(parts.last_line, parts.divider)?;
        Ok(last_line.map(|last_line| format!("{delivery}\n{last_line}")))
    }

    /// Standardize a full address into a two-line USPS formatted string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use usps_address::AddressStandardizer;
    ///
    /// let standardizer = AddressStandardizer::new();
    /// let address = standardizer.standardize("123 Main St\nAnytown, CA 90210")?;
    /// assert_eq!(address, "123 MAIN ST\nANYTOWN CA 90210");
    /// # Ok::<(), usps_address::Error>(())
    /// ```
    pub fn standardize(&self, address: &str) -> Result<String> {
        self.standardize_report(address).map(|report| report.value)
    }

    /// Standardize multiple addresses, stopping at the first failure.
    pub fn standardize_batch(&self, addresses: &[&str]) -> Result<Vec<String>> {
        addresses
            .iter()
            .map(|address| self.standardize(address))
            .collect()
    }

    /// Standardize multiple addresses in parallel using multiple threads.
    ///
    /// Results are returned in input order, one per address.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usps_address::AddressStandardizer;
    ///
    /// let standardizer = AddressStandardizer::new();
    /// let results = standardizer.standardize_batch_parallel(&[
    ///     "123 Main St, Anytown, CA 90210",
    ///     "not an address",
    /// ]);
    /// assert!(results[0].is_ok());
    /// assert!(results[1].is_err());
    /// ```
    #[cfg(feature = "parallel")]
    pub fn standardize_batch_parallel(&self, addresses: &[&str]) -> Vec<Result<String>> {
        use rayon::prelude::*;

        addresses
            .par_iter()
            .map(|address| self.standardize(address))
            .collect()
    }

    /// Standardize multiple addresses in parallel, keeping only successes.
    #[cfg(feature = "parallel")]
    pub fn standardize_batch_parallel_ok(&self, addresses: &[&str]) -> Vec<String> {
        self.standardize_batch_parallel(addresses)
            .into_iter()
            .filter_map(|result| result.ok())
            .collect()
    }

    fn delimiter(&self) -> Option<&str> {
        self.config.delimiter.as_deref().filter(|d| !d.is_empty())
    }
}

impl Default for AddressStandardizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim both halves of a split and require them to be non-empty.
fn split_pair<'s>(pair: Option<(&'s str, &'s str)>) -> Option<(&'s str, &'s str)> {
    let (first, second) = pair?;
    let (first, second) = (first.trim(), second.trim());
    (!first.is_empty() && !second.is_empty()).then_some((first, second))
}

/// Configuration for address standardization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardizerConfig {
    /// Separator between delivery line and last line; `None` tries a comma,
    /// then a line break
    pub delimiter: Option<String>,

    /// Handling of bad ZIP codes and unrecognized states
    pub error_policy: ErrorPolicy,
}

impl StandardizerConfig {
    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use usps_address::{ErrorPolicy, StandardizerConfig};
    ///
    /// let config = StandardizerConfig::builder()
    ///     .delimiter(";")
    ///     .error_policy(ErrorPolicy::Raise)
    ///     .build();
    /// assert_eq!(config.delimiter.as_deref(), Some(";"));
    /// ```
    pub fn builder() -> StandardizerConfigBuilder {
        StandardizerConfigBuilder::new()
    }
}

/// Builder for StandardizerConfig.
#[derive(Debug, Clone, Default)]
pub struct StandardizerConfigBuilder {
    delimiter: Option<String>,
    error_policy: ErrorPolicy,
}

impl StandardizerConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator between delivery line and last line.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Set the error policy.
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> StandardizerConfig {
        StandardizerConfig {
            delimiter: self.delimiter,
            error_policy: self.error_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_standardize_comma_address() {
        assert_eq!(
            standardize("123 MAIN ST, ANYTOWN, CA 90210", None, ErrorPolicy::Warn).unwrap(),
            "123 MAIN ST\nANYTOWN CA 90210"
        );
    }

    #[test]
    fn test_standardize_full_state_name() {
        assert_eq!(
            standardize(
                "100 N MAIN ST APT 4, SPRINGFIELD, ILLINOIS 62701",
                None,
                ErrorPolicy::Raise
            )
            .unwrap(),
            "100 N MAIN ST APT 4\nSPRINGFIELD IL 62701"
        );
    }

    #[test]
    fn test_standardize_line_break() {
        assert_eq!(
            standardize("742 evergreen terrace\nspringfield or 97403", None, ErrorPolicy::Raise)
                .unwrap(),
            "742 EVERGREEN TER\nSPRINGFIELD OR 97403"
        );
        assert_eq!(
            standardize("123 Main St\r\nAnytown, CA 90210", None, ErrorPolicy::Raise).unwrap(),
            "123 MAIN ST\nANYTOWN CA 90210"
        );
    }

    #[test]
    fn test_standardize_custom_delimiter() {
        assert_eq!(
            standardize("9 Elm Road; Smallville KS 66002", Some(";"), ErrorPolicy::Raise).unwrap(),
            "9 ELM RD\nSMALLVILLE KS 66002"
        );
        assert_eq!(
            standardize("9 Elm Road;Smallville;Kansas 66002", Some(";"), ErrorPolicy::Raise)
                .unwrap(),
            "9 ELM RD\nSMALLVILLE KS 66002"
        );
    }

    #[test]
    fn test_standardize_unsplittable() {
        assert_matches!(
            standardize("123 Main St Anytown CA 90210", None, ErrorPolicy::Warn),
            Err(Error::ParseError { .. })
        );
        assert_matches!(
            standardize(", Anytown CA 90210", None, ErrorPolicy::Warn),
            Err(Error::ParseError { .. })
        );
        assert_matches!(
            standardize("123 Main St, Anytown CA 90210", Some("|"), ErrorPolicy::Warn),
            Err(Error::ParseError { .. })
        );
    }

    #[test]
    fn test_multiple_delivery_lines_rejected() {
        assert_matches!(
            standardize(
                "Attn Billing\n123 Main St\nAnytown CA 90210",
                None,
                ErrorPolicy::Warn
            ),
            Err(Error::ParseError { .. })
        );
        assert_matches!(
            standardize(
                "Attn Billing\n123 Main St, Anytown, CA 90210",
                None,
                ErrorPolicy::Warn
            ),
            Err(Error::ParseError { .. })
        );
    }

    #[test]
    fn test_comma_before_line_break() {
        // The comma belongs to the delivery line; split on the line break.
        assert_eq!(
            standardize("123 Main St, Apt 4\nAnytown CA 90210", None, ErrorPolicy::Warn).unwrap(),
            "123 MAIN ST APT 4\nANYTOWN CA 90210"
        );
        let standardizer = AddressStandardizer::new();
        let parts = standardizer
            .split("123 Main St, Apt 4\nAnytown, CA 90210")
            .unwrap();
        assert_eq!(parts.delivery_line, "123 Main St, Apt 4");
        assert_eq!(parts.last_line, "Anytown, CA 90210");
        assert_eq!(parts.divider, Some(","));
    }

    #[test]
    fn test_unit_line_after_line_break_rejected() {
        assert_matches!(
            standardize(
                "123 Main St\nSuite 4, Anytown, CA 90210",
                None,
                ErrorPolicy::Warn
            ),
            Err(Error::ParseError { .. })
        );
        assert_matches!(
            standardize("9 Elm Rd|Suite 4|Anytown|CA 90210", Some("|"), ErrorPolicy::Warn),
            Err(Error::ParseError { .. })
        );
    }

    #[test]
    fn test_standardize_policy() {
        assert_matches!(
            standardize("1 Elm St, Anytown, TX 1234", None, ErrorPolicy::Raise),
            Err(Error::ValidationWarning {
                issue: ValidationIssue::BadZip(_)
            })
        );
        assert_eq!(
            standardize("1 Elm St, Anytown, TX 1234", None, ErrorPolicy::Warn).unwrap(),
            "1 ELM ST\nANYTOWN TX 1234"
        );
    }

    #[test]
    fn test_standardize_report() {
        let standardizer = AddressStandardizer::new();
        let report = standardizer
            .standardize_report("1 Elm St, Anytown, ZZ 75001")
            .unwrap();
        assert_eq!(report.value, "1 ELM ST\nANYTOWN ZZ 75001");
        assert_eq!(
            report.warnings,
            vec![ValidationIssue::UnrecognizedState("ZZ".to_string())]
        );
    }

    #[test]
    fn test_delivery_parse_error_propagates() {
        assert_matches!(
            standardize("123, Anytown, CA 90210", None, ErrorPolicy::Warn),
            Err(Error::ParseError { .. })
        );
    }

    #[test]
    fn test_split_parts() {
        let standardizer = AddressStandardizer::new();
        let parts = standardizer
            .split(" 123 Main St ,  Anytown, CA 90210 ")
            .unwrap();
        assert_eq!(
            parts,
            AddressParts {
                delivery_line: "123 Main St",
                last_line: "Anytown, CA 90210",
                divider: Some(","),
            }
        );

        let parts = standardizer.split("123 Main St\nAnytown CA 90210").unwrap();
        assert_eq!(parts.divider, None);
    }

    #[test]
    fn test_custom_tables() {
        let tables = ReferenceTables::from_pairs(
            &[("Ontario", "ON")],
            &[("North", "N")],
            &[("Street", "ST")],
            &[("Suite", "STE")],
        );
        let standardizer = AddressStandardizer::new().with_tables(Arc::new(tables));
        assert_eq!(
            standardizer
                .standardize("5 North Queen Street Suite 2, Toronto, Ontario 12345")
                .unwrap(),
            "5 N QUEEN ST STE 2\nTORONTO ON 12345"
        );
        assert_matches!(
            standardizer
                .last_line_normalizer()
                .with_error_policy(ErrorPolicy::Raise)
                .normalize("Austin TX 73301", None),
            Err(Error::ValidationWarning { .. })
        );
    }

    #[test]
    fn test_batch() {
        let standardizer = AddressStandardizer::new();
        let results = standardizer
            .standardize_batch(&["1 Elm St, Anytown, CA 90210", "2 Oak Ave\nOtherton NV 89501"])
            .unwrap();
        assert_eq!(
            results,
            vec![
                "1 ELM ST\nANYTOWN CA 90210".to_string(),
                "2 OAK AVE\nOTHERTON NV 89501".to_string()
            ]
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_batch_parallel() {
        let standardizer = AddressStandardizer::new();
        let addresses = ["1 Elm St, Anytown, CA 90210", "junk", "2 Oak Ave\nOtherton NV 89501"];
        let results = standardizer.standardize_batch_parallel(&addresses);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref().unwrap(), "1 ELM ST\nANYTOWN CA 90210");
        assert_matches!(results[1], Err(Error::ParseError { .. }));
        assert_eq!(standardizer.standardize_batch_parallel_ok(&addresses).len(), 2);
    }

    #[test]
    fn test_config_builder() {
        let config = StandardizerConfig::builder()
            .delimiter("|")
            .error_policy(ErrorPolicy::Raise)
            .build();
        assert_eq!(config.delimiter.as_deref(), Some("|"));
        assert_eq!(config.error_policy, ErrorPolicy::Raise);
        assert_eq!(StandardizerConfig::default().error_policy, ErrorPolicy::Warn);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let json = r#"{"delimiter":null,"error_policy":"warn_and_continue"}"#;
        let config: StandardizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.error_policy, ErrorPolicy::Warn);
        let config: StandardizerConfig =
            serde_json::from_str(r#"{"delimiter":"|","error_policy":"raise"}"#).unwrap();
        assert_eq!(config.error_policy, ErrorPolicy::Raise);
    }
}
