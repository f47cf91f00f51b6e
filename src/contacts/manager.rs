//! Address book - load, search and edit persons stored in a JSON file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::person::{
    Email, Person, PersonName, Phone, StructuredAddress, Tag, TagOperation, Tagging,
};

/// Environment variable overriding the address book location.
pub const PATH_ENV_VAR: &str = "ADDRESSBOOK_PATH";

const FILE_NAME: &str = "addressbook.json";

/// Default address book path.
///
/// Tries multiple locations in order:
/// 1. ADDRESSBOOK_PATH env var
/// 2. <data dir>/addressbook/addressbook.json
/// 3. ./addressbook.json
pub fn default_addressbook_path() -> PathBuf {
    if let Ok(path) = std::env::var(PATH_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join("addressbook").join(FILE_NAME);
    }

    PathBuf::from(FILE_NAME)
}

/// A person as stored on disk. The address is kept in canonical form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPerson {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub phone_private: bool,
    pub email: String,
    #[serde(default)]
    pub email_private: bool,
    pub address: String,
    #[serde(default)]
    pub address_private: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Person> for StoredPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.to_string(),
            phone: person.phone.as_str().to_string(),
            phone_private: person.phone.is_private(),
            email: person.email.as_str().to_string(),
            email_private: person.email.is_private(),
            address: person.address.canonical(),
            address_private: person.address.is_private(),
            tags: person.tags.iter().map(|t| t.as_str().to_string()).collect(),
        }
    }
}

impl TryFrom<StoredPerson> for Person {
    type Error = crate::error::ValidationError;

    fn try_from(stored: StoredPerson) -> Result<Self, Self::Error> {
        let tags = stored
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Person::new(
            PersonName::normalize(&stored.name)?,
            Phone::new(&stored.phone, stored.phone_private)?,
            Email::new(&stored.email, stored.email_private)?,
            StructuredAddress::parse(&stored.address, stored.address_private)?,
            tags,
        ))
    }
}

/// Wrapper for the file format (has "persons" key).
#[derive(Debug, Serialize, Deserialize)]
struct AddressBookFile {
    persons: Vec<StoredPerson>,
}

/// Ordered, in-memory list of persons.
#[derive(Debug, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
    taggings: Vec<Tagging>,
}

impl AddressBook {
    /// Load an address book from a JSON file. A missing file yields an
    /// empty book.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "address book file not found, starting empty");
            return Ok(Self::empty());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read address book file: {:?}", path))?;
        let book = Self::from_json_str(&content)
            .with_context(|| format!("Failed to load address book: {:?}", path))?;

        info!(path = %path.display(), persons = book.persons.len(), "loaded address book");
        Ok(book)
    }

    /// Parse from JSON. Supports both formats:
    /// - `{"persons": [...]}`
    /// - `[...]` (flat array)
    ///
    /// Every record is validated; one bad record fails the whole load.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).with_context(|| "Failed to parse address book JSON")?;

        let stored = if value.is_object() {
            serde_json::from_value::<AddressBookFile>(value)
                .with_context(|| "Invalid address book file")?
                .persons
        } else if value.is_array() {
            serde_json::from_value::<Vec<StoredPerson>>(value)
                .with_context(|| "Invalid address book record list")?
        } else {
            bail!("Address book JSON must be an object or an array, found: {}", value);
        };

        let persons = stored
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                Person::try_from(record)
                    .with_context(|| format!("Invalid person record at index {}", i))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            persons,
            taggings: Vec::new(),
        })
    }

    pub fn to_json_string(&self) -> Result<String> {
        let file = AddressBookFile {
            persons: self.persons.iter().map(StoredPerson::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Write to `path`, creating the parent directory if needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let json = self.to_json_string()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write address book file: {:?}", path))?;
        debug!(path = %path.display(), persons = self.persons.len(), "saved address book");
        Ok(())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Person] {
        &self.persons
    }

    /// Tag changes made through this book, oldest first.
    pub fn taggings(&self) -> &[Tagging] {
        &self.taggings
    }

    /// Add a person. Rejects a person whose name equals an existing one.
    pub fn add(&mut self, person: Person) -> Result<()> {
        if self.find_by_name(&person.name).is_some() {
            bail!("This person already exists in the address book: {}", person.name);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Remove the person at a 1-based display index.
    pub fn delete(&mut self, index: usize) -> Result<Person> {
        let i = self.to_offset(index)?;
        Ok(self.persons.remove(i))
    }

    /// Find a person by name (exact, case-sensitive).
    pub fn find_by_name(&self, name: &PersonName) -> Option<&Person> {
        self.persons.iter().find(|p| &p.name == name)
    }

    /// Every person whose name is similar to `query`, in list order, with
    /// their 1-based display index.
    pub fn find_similar(&self, query: &PersonName) -> Vec<(usize, &Person)> {
        let hits: Vec<(usize, &Person)> = self
            .persons
            .iter()
            .enumerate()
            .filter(|(_, p)| p.name.is_similar(Some(query)))
            .map(|(i, p)| (i + 1, p))
            .collect();
        debug!(query = %query, hits = hits.len(), "similarity search");
        hits
    }

    /// Add a tag to the person at a 1-based display index.
    pub fn add_tag(&mut self, index: usize, tag: Tag) -> Result<&Person> {
        let i = self.to_offset(index)?;
        let person = &mut self.persons[i];
        if !person.add_tag(tag.clone()) {
            bail!("{} already has tag {}", person.name, tag);
        }
        self.taggings
            .push(Tagging::new(TagOperation::Add, person.name.clone(), tag));
        Ok(&self.persons[i])
    }

    /// Remove a tag from the person at a 1-based display index.
    pub fn delete_tag(&mut self, index: usize, tag: Tag) -> Result<&Person> {
        let i = self.to_offset(index)?;
        let person = &mut self.persons[i];
        if !person.remove_tag(&tag) {
            bail!("{} does not have tag {}", person.name, tag);
        }
        self.taggings
            .push(Tagging::new(TagOperation::Delete, person.name.clone(), tag));
        Ok(&self.persons[i])
    }

    fn to_offset(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.persons.len() {
            bail!(
                "The person index provided is invalid: {} (have {} persons)",
                index,
                self.persons.len()
            );
        }
        Ok(index - 1)
    }
}
