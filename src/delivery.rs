//! Delivery (street) line normalization.
//!
//! A delivery line is split on whitespace and each token after the primary
//! number is classified against the reference tables. Classification is a
//! position heuristic, not a grammar:
//!
//! 1. A directional directly after the primary number is the predirectional.
//! 2. A directional directly after the suffix is the postdirectional.
//! 3. A suffix token is the suffix until another street-name word or suffix
//!    follows it, at which point it is folded back into the street name.
//! 4. A secondary unit designator ends the street; the remaining tokens are
//!    the unit value. If the predirectional is the only street word so far,
//!    it becomes the street name. Tokens that are both a suffix and a designator
//!    (`KEY`, `TRLR`) only count as a designator once a suffix was seen.
//! 5. Everything else is part of the street name.
//!
//! Street names that contain directional or suffix words (`NORTH ST`,
//! `PARK AVE`) are resolved by these rules and can be misclassified.

use crate::data::ReferenceTables;
use crate::error::{Error, Result};
use crate::types::ParsedDeliveryLine;

/// Generic designator used when the unit type is unknown.
const POUND_DESIGNATOR: &str = "#";

/// A classified token: the cleaned original word and its abbreviation.
type Classified = (String, String);

/// Normalizes delivery lines against a set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryLineNormalizer<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> DeliveryLineNormalizer<'a> {
    /// Create a normalizer backed by `tables`.
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Parse a delivery line into its abbreviated fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseError`] when the line has no street name or the
    /// leading token is not a primary number.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usps_address::{DeliveryLineNormalizer, ReferenceTables};
    ///
    /// let tables = ReferenceTables::usps();
    /// let normalizer = DeliveryLineNormalizer::new(&tables);
    /// let parsed = normalizer.parse("101 west Main Street S Apartment 12")?;
    /// assert_eq!(parsed.predirectional.as_deref(), Some("W"));
    /// assert_eq!(parsed.suffix.as_deref(), Some("ST"));
    /// assert_eq!(parsed.secondary_designator.as_deref(), Some("APT"));
    /// # Ok::<(), usps_address::Error>(())
    /// ```
    pub fn parse(&self, line: &str) -> Result<ParsedDeliveryLine> {
        let tokens = tokenize(line);
        let Some((number, body)) = tokens.split_first() else {
            return Err(Error::parse_error("empty delivery line"));
        };
        if !is_primary_number(number) {
            return Err(Error::parse_error(format!(
                "invalid primary number {number:?} in {line:?}"
            )));
        }
        if body.is_empty() {
            return Err(Error::parse_error(format!("no street name in {line:?}")));
        }

        let directionals = self.tables.directionals();
        let suffixes = self.tables.street_suffixes();
        let units = self.tables.secondary_units();

        let mut street: Vec<String> = Vec::new();
        let mut predirectional: Option<Classified> = None;
        let mut suffix: Option<Classified> = None;
        let mut postdirectional: Option<Classified> = None;
        let mut secondary: Option<(String, Option<String>)> = None;

        for (pos, token) in body.iter().enumerate() {
            if let Some(abbr) = directionals.abbreviate(token) {
                if pos == 0 && body.len() > 1 {
                    predirectional = Some((token.clone(), abbr.to_string()));
                    continue;
                }
                if suffix.is_some() && postdirectional.is_none() {
                    postdirectional = Some((token.clone(), abbr.to_string()));
                    continue;
                }
            }

            let unit = if token == POUND_DESIGNATOR {
                Some(POUND_DESIGNATOR)
            } else {
                units.abbreviate(token)
            };

            if let Some(abbr) = suffixes.abbreviate(token) {
                if unit.is_none() || suffix.is_none() {
                    fold_into_street(&mut street, &mut suffix, &mut postdirectional);
                    suffix = Some((token.clone(), abbr.to_string()));
                    continue;
                }
            }

            if let Some(designator) = unit {
                if street.is_empty() && suffix.is_none() {
                    if let Some((word, _)) = predirectional.take() {
                        street.push(word);
                    }
                }
                if !street.is_empty() || suffix.is_some() {
                    let rest = &body[pos + 1..];
                    let value = (!rest.is_empty()).then(|| rest.join(" "));
                    log::debug!("secondary unit {designator} {value:?} in {line:?}");
                    secondary = Some((designator.to_string(), value));
                    break;
                }
            }

            fold_into_street(&mut street, &mut suffix, &mut postdirectional);
            street.push(token.clone());
        }

        if street.is_empty() {
            if suffix.is_some() {
                if let Some((word, _)) = predirectional.take() {
                    street.push(word);
                }
            }
            if street.is_empty() {
                if let Some((word, _)) = suffix.take() {
                    street.push(word);
                }
            }
        }
        if street.is_empty() {
            return Err(Error::parse_error(format!("no street name in {line:?}")));
        }

        let (secondary_designator, secondary_value) = match secondary {
            Some((designator, value)) => (Some(designator), value),
            None => (None, None),
        };

        Ok(ParsedDeliveryLine {
            primary_number: number.clone(),
            predirectional: predirectional.map(|(_, abbr)| abbr),
            street_name: street.join(" "),
            suffix: suffix.map(|(_, abbr)| abbr),
            postdirectional: postdirectional.map(|(_, abbr)| abbr),
            secondary_designator,
            secondary_value,
        })
    }

    /// Normalize a delivery line into USPS format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use usps_address::{DeliveryLineNormalizer, ReferenceTables};
    ///
    /// let tables = ReferenceTables::usps();
    /// let normalizer = DeliveryLineNormalizer::new(&tables);
    /// assert_eq!(normalizer.normalize("123 north Elm Boulevard")?, "123 N ELM BLVD");
    /// # Ok::<(), usps_address::Error>(())
    /// ```
    pub fn normalize(&self, line: &str) -> Result<String> {
        self.parse(line).map(|parsed| parsed.to_string())
    }

    /// Normalize multiple delivery lines, stopping at the first failure.
    pub fn normalize_batch(&self, lines: &[&str]) -> Result<Vec<String>> {
        lines.iter().map(|line| self.normalize(line)).collect()
    }
}

/// Split on whitespace, upper-case, drop trailing periods/commas and break
/// `#4` into `#` `4`.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for raw in line.split_whitespace() {
        let token = raw.trim_end_matches(['.', ',']).to_uppercase();
        match token.strip_prefix(POUND_DESIGNATOR) {
            Some(value) if !value.is_empty() => {
                tokens.push(POUND_DESIGNATOR.to_string());
                tokens.push(value.to_string());
            }
            _ if token.is_empty() => {}
            _ => tokens.push(token),
        }
    }
    tokens
}

/// A primary number starts with a digit: `123`, `123A`, `12-14`, `1/2`.
fn is_primary_number(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '/')
}

/// A pending suffix (and its postdirectional) turned out to be part of the
/// street name.
fn fold_into_street(
    street: &mut Vec<String>,
    suffix: &mut Option<Classified>,
    postdirectional: &mut Option<Classified>,
) {
    if let Some((word, _)) = suffix.take() {
        street.push(word);
    }
    if let Some((word, _)) = postdirectional.take() {
        street.push(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn normalize(line: &str) -> Result<String> {
        let tables = ReferenceTables::usps();
        DeliveryLineNormalizer::new(&tables).normalize(line)
    }

    #[test]
    fn test_simple_line() {
        assert_eq!(normalize("123 Main Street").unwrap(), "123 MAIN ST");
        assert_eq!(normalize("123 MAIN ST").unwrap(), "123 MAIN ST");
    }

    #[test]
    fn test_all_fields() {
        let tables = ReferenceTables::usps();
        let parsed = DeliveryLineNormalizer::new(&tables)
            .parse("101 West Main Street South Apartment 12")
            .unwrap();
        assert_eq!(
            parsed,
            ParsedDeliveryLine {
                primary_number: "101".to_string(),
                predirectional: Some("W".to_string()),
                street_name: "MAIN".to_string(),
                suffix: Some("ST".to_string()),
                postdirectional: Some("S".to_string()),
                secondary_designator: Some("APT".to_string()),
                secondary_value: Some("12".to_string()),
            }
        );
        assert_eq!(parsed.to_string(), "101 W MAIN ST S APT 12");
    }

    #[test]
    fn test_every_suffix_synonym() {
        let tables = ReferenceTables::usps();
        let normalizer = DeliveryLineNormalizer::new(&tables);
        for (synonym, abbr) in tables.street_suffixes().iter() {
            let line = format!("1 MAIN {synonym}");
            assert_eq!(
                normalizer.normalize(&line).unwrap(),
                format!("1 MAIN {abbr}"),
                "suffix synonym {synonym}"
            );
        }
    }

    #[test]
    fn test_multi_word_street_name() {
        assert_eq!(
            normalize("4800 Silver Hill Road").unwrap(),
            "4800 SILVER HILL RD"
        );
        assert_eq!(
            normalize("500 Martin Luther King Jr Boulevard NE").unwrap(),
            "500 MARTIN LUTHER KING JR BLVD NE"
        );
    }

    #[test]
    fn test_suffix_word_inside_street_name() {
        assert_eq!(normalize("100 Park Avenue").unwrap(), "100 PARK AVE");
        assert_eq!(
            normalize("100 Park W Lake Drive").unwrap(),
            "100 PARK W LAKE DR"
        );
        assert_eq!(normalize("77 Court Plaza Lane").unwrap(), "77 COURT PLAZA LN");
    }

    #[test]
    fn test_street_named_after_suffix() {
        let tables = ReferenceTables::usps();
        let parsed = DeliveryLineNormalizer::new(&tables).parse("9 Park").unwrap();
        assert_eq!(parsed.street_name, "PARK");
        assert_eq!(parsed.suffix, None);
    }

    #[test]
    fn test_street_named_after_directional() {
        let tables = ReferenceTables::usps();
        let parsed = DeliveryLineNormalizer::new(&tables)
            .parse("20 North Street")
            .unwrap();
        assert_eq!(parsed.predirectional, None);
        assert_eq!(parsed.street_name, "NORTH");
        assert_eq!(parsed.suffix.as_deref(), Some("ST"));
    }

    #[test]
    fn test_directional_inside_street_name_is_ambiguous() {
        // Position decides: only the first word after the number can be a
        // predirectional, so a leading "North" is abbreviated even when it
        // belongs to the name.
        assert_eq!(normalize("5 North Shore Road").unwrap(), "5 N SHORE RD");
        assert_eq!(normalize("5 Old North Road").unwrap(), "5 OLD NORTH RD");
    }

    #[test]
    fn test_directional_street_before_unit() {
        let tables = ReferenceTables::usps();
        let parsed = DeliveryLineNormalizer::new(&tables)
            .parse("5 North Apt 3")
            .unwrap();
        assert_eq!(parsed.predirectional, None);
        assert_eq!(parsed.street_name, "NORTH");
        assert_eq!(parsed.secondary_designator.as_deref(), Some("APT"));
        assert_eq!(parsed.secondary_value.as_deref(), Some("3"));
        assert_eq!(parsed.to_string(), "5 NORTH APT 3");
        assert_eq!(normalize("5 W Suite 12").unwrap(), "5 W STE 12");
    }

    #[test]
    fn test_abbreviated_directionals_kept() {
        assert_eq!(normalize("100 N Main St SW").unwrap(), "100 N MAIN ST SW");
    }

    #[test]
    fn test_secondary_units() {
        assert_eq!(normalize("12 Oak St Suite 300").unwrap(), "12 OAK ST STE 300");
        assert_eq!(normalize("12 Oak St Trailer 5").unwrap(), "12 OAK ST TRLR 5");
        assert_eq!(normalize("12 Oak St Rear").unwrap(), "12 OAK ST REAR");
        assert_eq!(normalize("12 Oak Unit 7").unwrap(), "12 OAK UNIT 7");
        assert_eq!(
            normalize("12 Oak St Building B Floor 2").unwrap(),
            "12 OAK ST BLDG B FLOOR 2"
        );
    }

    #[test]
    fn test_suffix_before_designator_sharing_a_word() {
        assert_eq!(normalize("3 Coral Key").unwrap(), "3 CORAL KY");
        assert_eq!(normalize("3 Coral Key Key 4").unwrap(), "3 CORAL KY KEY 4");
    }

    #[test]
    fn test_pound_designator() {
        assert_eq!(normalize("12 Oak St #4").unwrap(), "12 OAK ST # 4");
        assert_eq!(normalize("12 Oak St # 4").unwrap(), "12 OAK ST # 4");
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(normalize("42 N. Main St.").unwrap(), "42 N MAIN ST");
    }

    #[test]
    fn test_primary_number_forms() {
        assert_eq!(normalize("123A Main St").unwrap(), "123A MAIN ST");
        assert_eq!(normalize("12-14 Main St").unwrap(), "12-14 MAIN ST");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("101 west main street south apartment 12").unwrap();
        assert_eq!(normalize(&once).unwrap(), once);
    }

    #[test]
    fn test_missing_street_name() {
        assert_matches!(normalize("123"), Err(Error::ParseError { .. }));
        assert_matches!(normalize(""), Err(Error::ParseError { .. }));
        assert_matches!(normalize("   "), Err(Error::ParseError { .. }));
    }

    #[test]
    fn test_invalid_primary_number() {
        assert_matches!(normalize("Main Street"), Err(Error::ParseError { .. }));
        assert_matches!(normalize("A12 Main Street"), Err(Error::ParseError { .. }));
    }

    #[test]
    fn test_normalize_batch() {
        let tables = ReferenceTables::usps();
        let normalizer = DeliveryLineNormalizer::new(&tables);
        assert_eq!(
            normalizer
                .normalize_batch(&["1 Elm Street", "2 Oak Avenue"])
                .unwrap(),
            vec!["1 ELM ST".to_string(), "2 OAK AVE".to_string()]
        );
        assert_matches!(
            normalizer.normalize_batch(&["1 Elm Street", "oops"]),
            Err(Error::ParseError { .. })
        );
    }
}
