//! Validation errors for person record fields.
//!
//! Every variant is an input-validation failure. The `Display` text is the
//! constraint message shown to the user.

use thiserror::Error;

/// Errors raised when constructing a validated person field from raw input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Person addresses must have format BLOCK, STREET, UNIT, POSTAL_CODE")]
    AddressFormat,

    #[error("Address blocks should be digits optionally followed by one letter: {0:?}")]
    BlockFormat(String),

    #[error("Address streets should not be empty")]
    StreetFormat,

    #[error("Address units should be '#' then two numbers separated by '-': {0:?}")]
    UnitFormat(String),

    #[error("Address postal codes should contain 6 digits: {0:?}")]
    PostalCodeFormat(String),

    #[error("Person names should be spaces or alphabetic characters: {0:?}")]
    NameFormat(String),

    #[error("Person phone numbers should only contain numbers: {0:?}")]
    PhoneFormat(String),

    #[error("Person emails should be 2 alphanumeric/period strings separated by '@': {0:?}")]
    EmailFormat(String),

    #[error("Tags names should be alphanumeric: {0:?}")]
    TagFormat(String),
}

impl ValidationError {
    /// Stable snake_case name of the failed field check, for JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::AddressFormat => "address_format",
            ValidationError::BlockFormat(_) => "block_format",
            ValidationError::StreetFormat => "street_format",
            ValidationError::UnitFormat(_) => "unit_format",
            ValidationError::PostalCodeFormat(_) => "postal_code_format",
            ValidationError::NameFormat(_) => "name_format",
            ValidationError::PhoneFormat(_) => "phone_format",
            ValidationError::EmailFormat(_) => "email_format",
            ValidationError::TagFormat(_) => "tag_format",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_message_names_format() {
        let msg = ValidationError::AddressFormat.to_string();
        assert!(msg.contains("BLOCK, STREET, UNIT, POSTAL_CODE"));
    }

    #[test]
    fn test_field_message_includes_input() {
        let msg = ValidationError::PostalCodeFormat("12a456".to_string()).to_string();
        assert!(msg.contains("12a456"), "message was {}", msg);
    }

    #[test]
    fn test_kind() {
        assert_eq!(ValidationError::StreetFormat.kind(), "street_format");
        assert_eq!(ValidationError::UnitFormat("x".to_string()).kind(), "unit_format");
    }
}
