//! Person commands: list, add, delete, find.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

use crate::contacts::AddressBook;
use crate::output::OutputControls;
use crate::person::{Email, Person, PersonName, Phone, StructuredAddress, Tag};

/// Privacy flags for a new person's contact fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct Privacy {
    pub phone: bool,
    pub email: bool,
    pub address: bool,
}

/// One row of a person listing. Private fields are omitted.
#[derive(Debug, Serialize)]
pub struct ListedPerson<'a> {
    pub index: usize,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub tags: Vec<&'a str>,
}

impl<'a> ListedPerson<'a> {
    pub fn new(index: usize, person: &'a Person) -> Self {
        Self {
            index,
            name: person.name.as_str(),
            phone: (!person.phone.is_private()).then(|| person.phone.as_str()),
            email: (!person.email.is_private()).then(|| person.email.as_str()),
            address: (!person.address.is_private()).then(|| person.address.canonical()),
            tags: person.tags.iter().map(|t| t.as_str()).collect(),
        }
    }
}

/// Print persons as a 1-based indexed listing.
pub fn print_listing(rows: &[(usize, &Person)], output: &OutputControls) {
    if output.json {
        let listed: Vec<ListedPerson> =
            rows.iter().map(|(i, p)| ListedPerson::new(*i, p)).collect();
        output.print(&listed);
        return;
    }

    for (index, person) in rows {
        println!("\t{}. {}", index, person.as_text_hide_private());
    }
    println!("{} persons listed!", rows.len());
}

/// List all persons.
pub fn list(path: &Path, output: &OutputControls) -> Result<()> {
    let book = AddressBook::load(path)?;
    let rows: Vec<(usize, &Person)> =
        book.all().iter().enumerate().map(|(i, p)| (i + 1, p)).collect();
    print_listing(&rows, output);
    Ok(())
}

/// Add a new person.
pub fn add(
    path: &Path,
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    tags: &[String],
    privacy: Privacy,
) -> Result<()> {
    let tags = tags.iter().map(|t| Tag::new(t)).collect::<Result<BTreeSet<_>, _>>()?;
    let person = Person::new(
        PersonName::normalize(name)?,
        Phone::new(phone, privacy.phone)?,
        Email::new(email, privacy.email)?,
        StructuredAddress::parse(address, privacy.address)?,
        tags,
    );

    let mut book = AddressBook::load(path)?;
    let text = person.as_text();
    book.add(person)?;
    book.save(path)?;

    info!(persons = book.all().len(), "person added");
    println!("New person added: {}", text);
    Ok(())
}

/// Delete the person at a 1-based index.
pub fn delete(path: &Path, index: usize) -> Result<()> {
    let mut book = AddressBook::load(path)?;
    let removed = book.delete(index)?;
    book.save(path)?;

    println!("Deleted Person: {}", removed.as_text_hide_private());
    Ok(())
}

/// List persons whose name is similar to `query`.
pub fn find(path: &Path, query: &str, output: &OutputControls) -> Result<()> {
    let query = PersonName::normalize(query)?;
    let book = AddressBook::load(path)?;

    let rows = book.find_similar(&query);
    print_listing(&rows, output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_person_hides_private() {
        let person = Person::new(
            PersonName::normalize("John Doe").unwrap(),
            Phone::new("123", true).unwrap(),
            Email::new("john@example.com", false).unwrap(),
            StructuredAddress::parse("1,Main St,#1-1,123456", true).unwrap(),
            BTreeSet::new(),
        );
        let row = serde_json::to_value(ListedPerson::new(1, &person)).unwrap();
        assert!(row.get("phone").is_none());
        assert!(row.get("address").is_none());
        assert_eq!(row["email"], "john@example.com");
    }
}
