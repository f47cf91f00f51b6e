//! Validation commands: check-address, check-name, similar.

use anyhow::Result;
use serde::Serialize;

use crate::error::ValidationError;
use crate::output::OutputControls;
use crate::person::{PersonName, StructuredAddress};

#[derive(Debug, Serialize, PartialEq)]
pub struct AddressReport {
    pub canonical: String,
    pub block: String,
    pub street: String,
    pub unit: String,
    pub postal_code: String,
    pub is_private: bool,
}

impl AddressReport {
    pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        let address = StructuredAddress::parse(raw, is_private)?;
        Ok(Self {
            canonical: address.canonical(),
            block: address.block().as_str().to_string(),
            street: address.street().as_str().to_string(),
            unit: address.unit().as_str().to_string(),
            postal_code: address.postal_code().as_str().to_string(),
            is_private: address.is_private(),
        })
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct NameReport {
    pub name: String,
    pub words: Vec<String>,
}

impl NameReport {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let name = PersonName::normalize(raw)?;
        Ok(Self {
            words: name.words().into_iter().map(String::from).collect(),
            name: name.into(),
        })
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SimilarityReport {
    pub name: String,
    pub other: String,
    pub similar: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_similar: Option<bool>,
}

impl SimilarityReport {
    /// `similar` is `name ~ other`; `reverse_similar` is `other ~ name`,
    /// filled only when `both` is set.
    pub fn new(name: &str, other: &str, both: bool) -> Result<Self, ValidationError> {
        let name = PersonName::normalize(name)?;
        let other = PersonName::normalize(other)?;

        Ok(Self {
            similar: name.is_similar(Some(&other)),
            reverse_similar: both.then(|| other.is_similar(Some(&name))),
            name: name.into(),
            other: other.into(),
        })
    }
}

/// Parse an address and show its canonical form and components.
pub fn check_address(raw: &str, is_private: bool, output: &OutputControls) -> Result<()> {
    let report = AddressReport::new(raw, is_private)?;

    if output.json {
        output.print(&report);
    } else {
        println!("{}", report.canonical);
        println!("  block:       {}", report.block);
        println!("  street:      {}", report.street);
        println!("  unit:        {}", report.unit);
        println!("  postal code: {}", report.postal_code);
        if report.is_private {
            println!("  (private)");
        }
    }

    Ok(())
}

/// Normalize a name and show its words.
pub fn check_name(raw: &str, output: &OutputControls) -> Result<()> {
    let report = NameReport::new(raw)?;

    if output.json {
        output.print(&report);
    } else {
        println!("{}", report.name);
        println!("  words: {}", report.words.join(" | "));
    }

    Ok(())
}

/// Report whether `other` is similar to `name`, optionally in both directions.
pub fn similar(name: &str, other: &str, both: bool, output: &OutputControls) -> Result<()> {
    let report = SimilarityReport::new(name, other, both)?;

    if output.json {
        output.print(&report);
    } else {
        println!("\"{}\" ~ \"{}\": {}", report.name, report.other, report.similar);
        if let Some(reverse) = report.reverse_similar {
            println!("\"{}\" ~ \"{}\": {}", report.other, report.name, reverse);
        }
    }

    Ok(())
}
