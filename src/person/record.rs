//! Person record: name, contact details, address and tags.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt::Write;

use super::{PersonName, StructuredAddress, Tag};
use crate::error::ValidationError;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone pattern"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)*$").expect("valid email pattern"));

const PRIVATE_PREFIX: &str = "(private) ";

/// Phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    value: String,
    is_private: bool,
}

impl Phone {
    pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !PHONE_RE.is_match(trimmed) {
            return Err(ValidationError::PhoneFormat(trimmed.to_string()));
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
    is_private: bool,
}

impl Email {
    pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(ValidationError::EmailFormat(trimmed.to_string()));
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

/// A person in the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: PersonName,
    pub phone: Phone,
    pub email: Email,
    pub address: StructuredAddress,
    pub tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: PersonName,
        phone: Phone,
        email: Email,
        address: StructuredAddress,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Exact name match, or `other`'s name is similar to this one.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name || self.name.is_similar(Some(&other.name))
    }

    /// Returns `true` if the tag was not already present.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        self.tags.insert(tag)
    }

    /// Returns `true` if the tag was present.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        self.tags.remove(tag)
    }

    /// All details, with private fields marked.
    pub fn as_text(&self) -> String {
        self.render(false)
    }

    /// Details with private fields left out.
    pub fn as_text_hide_private(&self) -> String {
        self.render(true)
    }

    fn render(&self, hide_private: bool) -> String {
        let mut out = self.name.to_string();
        let address = self.address.canonical();

        let fields = [
            ("Phone", self.phone.as_str(), self.phone.is_private()),
            ("Email", self.email.as_str(), self.email.is_private()),
            ("Address", address.as_str(), self.address.is_private()),
        ];

        for (label, value, private) in fields {
            if private && hide_private {
                continue;
            }
            let prefix = if private { PRIVATE_PREFIX } else { "" };
            let _ = write!(out, " {}{}: {}", prefix, label, value);
        }

        out.push_str(" Tags: ");
        for tag in &self.tags {
            out.push_str(&tag.to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, phone_private: bool) -> Person {
        Person::new(
            PersonName::normalize(name).unwrap(),
            Phone::new("98765432", phone_private).unwrap(),
            Email::new("john@example.com", false).unwrap(),
            StructuredAddress::parse("123, Clementi Ave 3, #12-34, 231534", true).unwrap(),
            [Tag::new("friends").unwrap()].into_iter().collect(),
        )
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::new(" 12345 ", false).is_ok());
        assert!(matches!(Phone::new("+65 1234", false), Err(ValidationError::PhoneFormat(_))));
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::new("a.b+c@mail.example.org", false).is_ok());
        for bad in ["no-at-sign", "@example.com", "a@", "a@b..c"] {
            assert!(
                matches!(Email::new(bad, false), Err(ValidationError::EmailFormat(_))),
                "input {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_as_text_marks_private() {
        let text = person("John Doe", false).as_text();
        assert_eq!(
            text,
            "John Doe Phone: 98765432 Email: john@example.com \
             (private) Address: 123,Clementi Ave 3,#12-34,231534 Tags: [friends]"
        );
    }

    #[test]
    fn test_hide_private() {
        let text = person("John Doe", true).as_text_hide_private();
        assert_eq!(text, "John Doe Email: john@example.com Tags: [friends]");
    }

    #[test]
    fn test_same_person_uses_similarity() {
        let full = person("John K Smith", false);
        let short = person("Smith", false);
        assert!(full.is_same_person(&short));
        assert!(!short.is_same_person(&full));
    }

    #[test]
    fn test_tag_add_remove() {
        let mut p = person("John Doe", false);
        let work = Tag::new("work").unwrap();
        assert!(p.add_tag(work.clone()));
        assert!(!p.add_tag(work.clone()));
        assert!(p.remove_tag(&work));
        assert!(!p.remove_tag(&work));
    }
}
