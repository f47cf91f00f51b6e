//! Validated person names and the similarity rule chain.
//!
//! `PersonName` equality is exact and case-sensitive. `is_similar` is a
//! separate, looser and directional relation used when searching for a
//! person: it never affects `Eq` or `Hash`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Example of a well-formed name, shown in usage text.
pub const EXAMPLE: &str = "John Doe";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid name pattern"));

/// A trimmed person name made of ASCII letters and spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Trim and validate a raw name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NameFormat` if the trimmed name is empty or
    /// contains anything other than letters and spaces.
    pub fn normalize(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !NAME_RE.is_match(trimmed) {
            return Err(ValidationError::NameFormat(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Every word in the name, in order.
    pub fn words(&self) -> Vec<&str> {
        self.0.split_whitespace().collect()
    }

    /// Whether `other` plausibly names the same person as `self`.
    ///
    /// Rules, first match wins:
    /// 1. equal ignoring case
    /// 2. every word of `other` appears among the words of `self`
    /// 3. `other` is a contiguous run of the initials of `self`
    ///
    /// Rule 2 makes this directional: `"John K Smith"` is similar to
    /// `"Smith"`, but not the other way round.
    pub fn is_similar(&self, other: Option<&PersonName>) -> bool {
        let Some(other) = other else {
            return false;
        };

        let this_name = self.0.to_lowercase();
        let other_name = other.0.to_lowercase();
        let this_words: Vec<&str> = this_name.split_whitespace().collect();
        let other_words: Vec<&str> = other_name.split_whitespace().collect();

        this_name == other_name
            || is_reordered_or_subset(&this_words, &other_words)
            || is_initials(&this_words, &other_name)
    }
}

/// Every word in `other_words` occurs somewhere in `this_words`.
///
/// Words of `self` are not consumed, so `"john john"` matches `"john"`.
fn is_reordered_or_subset(this_words: &[&str], other_words: &[&str]) -> bool {
    other_words.iter().all(|word| this_words.contains(word))
}

/// `other_name` is a substring of the concatenated first letters of
/// `this_words`.
fn is_initials(this_words: &[&str], other_name: &str) -> bool {
    let initials: String = this_words.iter().filter_map(|w| w.chars().next()).collect();
    initials.contains(other_name)
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PersonName {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::normalize(&s)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> String {
        name.0
    }
}
