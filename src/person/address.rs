//! Structured person address: `BLOCK, STREET, UNIT, POSTAL_CODE`.
//!
//! The raw string is split on commas into exactly four fields. Each field is
//! trimmed and validated on its own, and the address re-serializes to the
//! canonical `block,street,unit,postal_code` form used for storage and
//! equality.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValidationError;

/// Example of a well-formed address, shown in usage text.
pub const EXAMPLE: &str = "123, Clementi Ave 3, #12-34, 231534";

/// Field delimiter in both raw and canonical form.
const DELIMITER: char = ',';

static BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+[A-Za-z]?$").expect("valid block pattern"));
static UNIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9]+-[0-9]+$").expect("valid unit pattern"));
static POSTAL_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("valid postal code pattern"));

/// Block number, e.g. `123` or `10A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block(String);

impl Block {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !BLOCK_RE.is_match(trimmed) {
            return Err(ValidationError::BlockFormat(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Street name. Any non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Street(String);

impl Street {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::StreetFormat);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unit number, e.g. `#12-34`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit(String);

impl Unit {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !UNIT_RE.is_match(trimmed) {
            return Err(ValidationError::UnitFormat(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Six-digit postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !POSTAL_CODE_RE.is_match(trimmed) {
            return Err(ValidationError::PostalCodeFormat(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated, immutable address.
///
/// Equality and hashing use the canonical string only; `is_private` is
/// not compared.
#[derive(Debug, Clone)]
pub struct StructuredAddress {
    block: Block,
    street: Street,
    unit: Unit,
    postal_code: PostalCode,
    is_private: bool,
}

impl StructuredAddress {
    /// Parse and validate a raw address string.
    ///
    /// # Errors
    ///
    /// - `AddressFormat` if the input does not split into exactly 4 fields
    /// - `BlockFormat`, `StreetFormat`, `UnitFormat` or `PostalCodeFormat`
    ///   for the first field that fails its pattern
    pub fn parse(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        let fields: Vec<&str> = raw.split(DELIMITER).collect();
        let [block, street, unit, postal_code] = fields.as_slice() else {
            return Err(ValidationError::AddressFormat);
        };

        Ok(Self {
            block: Block::parse(block)?,
            street: Street::parse(street)?,
            unit: Unit::parse(unit)?,
            postal_code: PostalCode::parse(postal_code)?,
            is_private,
        })
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn street(&self) -> &Street {
        &self.street
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// Canonical `block,street,unit,postal_code` form.
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StructuredAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}{d}{}",
            self.block.as_str(),
            self.street.as_str(),
            self.unit.as_str(),
            self.postal_code.as_str(),
            d = DELIMITER
        )
    }
}

impl PartialEq for StructuredAddress {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for StructuredAddress {}

impl Hash for StructuredAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_round_trip() {
        let address = StructuredAddress::parse("123,Clementi Ave 3,#12-34,231534", false).unwrap();
        assert_eq!(address.to_string(), "123,Clementi Ave 3,#12-34,231534");
        assert_eq!(address.block().as_str(), "123");
        assert_eq!(address.street().as_str(), "Clementi Ave 3");
        assert_eq!(address.unit().as_str(), "#12-34");
        assert_eq!(address.postal_code().as_str(), "231534");
    }

    #[test]
    fn test_spaced_fields_are_trimmed() {
        let spaced = StructuredAddress::parse(EXAMPLE, false).unwrap();
        let tight = StructuredAddress::parse("123,Clementi Ave 3,#12-34,231534", false).unwrap();
        assert_eq!(spaced.to_string(), tight.to_string());
        assert_eq!(spaced, tight);
    }

    #[test]
    fn test_wrong_field_count() {
        for raw in [
            "",
            "123",
            "123, Clementi Ave 3, #12-34",
            "123, Clementi, Ave 3, #12-34, 231534",
        ] {
            assert_eq!(
                StructuredAddress::parse(raw, false),
                Err(ValidationError::AddressFormat),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_block_format() {
        assert!(Block::parse("10A").is_ok());
        assert!(Block::parse(" 7 ").is_ok());
        assert!(matches!(Block::parse("A10"), Err(ValidationError::BlockFormat(_))));
        assert!(matches!(Block::parse("10AB"), Err(ValidationError::BlockFormat(_))));
        assert!(matches!(Block::parse(""), Err(ValidationError::BlockFormat(_))));
    }

    #[test]
    fn test_empty_street() {
        let result = StructuredAddress::parse("123,   ,#12-34,231534", false);
        assert_eq!(result, Err(ValidationError::StreetFormat));
    }

    #[test]
    fn test_unit_format() {
        assert!(Unit::parse("#1-2").is_ok());
        assert!(matches!(Unit::parse("12-34"), Err(ValidationError::UnitFormat(_))));
        assert!(matches!(Unit::parse("#12"), Err(ValidationError::UnitFormat(_))));
        assert!(matches!(Unit::parse("#12-"), Err(ValidationError::UnitFormat(_))));
    }

    #[test]
    fn test_postal_code_is_exactly_six_digits() {
        assert!(PostalCode::parse("123456").is_ok());
        for bad in ["12345", "1234567", "12a456", ""] {
            assert!(
                matches!(PostalCode::parse(bad), Err(ValidationError::PostalCodeFormat(_))),
                "input {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let result = StructuredAddress::parse("A1, , bad, 1", false);
        assert!(matches!(result, Err(ValidationError::BlockFormat(_))));
    }

    #[test]
    fn test_equality_ignores_privacy() {
        let public = StructuredAddress::parse(EXAMPLE, false).unwrap();
        let private = StructuredAddress::parse(EXAMPLE, true).unwrap();
        assert!(private.is_private());
        assert!(!public.is_private());
        assert_eq!(public, private);
    }
}
