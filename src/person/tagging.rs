//! A record of one tag being added to or removed from a person.

use serde::Serialize;
use std::fmt;

use super::{PersonName, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagOperation {
    Add,
    Delete,
}

impl TagOperation {
    pub fn sign(self) -> &'static str {
        match self {
            TagOperation::Add => "+",
            TagOperation::Delete => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tagging {
    pub operation: TagOperation,
    pub person: PersonName,
    pub tag: Tag,
}

impl Tagging {
    pub fn new(operation: TagOperation, person: PersonName, tag: Tag) -> Self {
        Self { operation, person, tag }
    }
}

/// Renders as `+ John Doe [friends]`.
impl fmt::Display for Tagging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operation.sign(), self.person, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let tagging = Tagging::new(
            TagOperation::Delete,
            PersonName::normalize("John Doe").unwrap(),
            Tag::new("friends").unwrap(),
        );
        assert_eq!(tagging.to_string(), "- John Doe [friends]");
    }
}
